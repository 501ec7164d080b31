//! Embedded taxonomy tables: the snapshot of <https://arxiv.org/category_taxonomy>
//! plus the retired identifiers still present in historical metadata.
//!
//! The catalog in [`super::catalog`] is built from these records at first use;
//! nothing here is fetched at runtime.

/// One category record: `suffix` is `None` for bare-id categories (single-
/// category archives and the legacy general members of astro-ph, cond-mat,
/// and q-bio).
pub(crate) struct CategoryRecord {
    pub group: &'static str,
    pub archive: &'static str,
    pub suffix: Option<&'static str>,
    pub name: &'static str,
    pub description: &'static str,
}

/// A retired archive id, kept resolvable because old articles still carry it.
pub(crate) struct LegacyRecord {
    pub id: &'static str,
    pub group: &'static str,
    pub name: &'static str,
    pub successor: &'static str,
}

/// Archive display names that differ from their group name. Archives absent
/// from this table (the single-archive groups) take the group name.
pub(crate) const ARCHIVE_NAMES: &[(&str, &str)] = &[
    ("astro-ph", "Astrophysics"),
    ("cond-mat", "Condensed Matter"),
    ("nlin", "Nonlinear Sciences"),
    ("gr-qc", "General Relativity and Quantum Cosmology"),
    ("hep-ex", "High Energy Physics - Experiment"),
    ("hep-lat", "High Energy Physics - Lattice"),
    ("hep-ph", "High Energy Physics - Phenomenology"),
    ("hep-th", "High Energy Physics - Theory"),
    ("math-ph", "Mathematical Physics"),
    ("nucl-ex", "Nuclear Experiment"),
    ("nucl-th", "Nuclear Theory"),
    ("quant-ph", "Quantum Physics"),
];

/// Every live category: 146 dotted subject classes plus the bare-id
/// entries. Order is the canonical listing order of the source taxonomy.
pub(crate) const CATEGORY_RECORDS: &[CategoryRecord] = &[
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("AI"),
        name: "Artificial Intelligence",
        description: "Covers all areas of AI except Vision, Robotics, Machine Learning, Multiagent Systems, and Computation and Language (Natural Language Processing), which have separate subject areas. In particular, includes Expert Systems, Theorem Proving (although this may overlap with Logic in Computer Science), Knowledge Representation, Planning, and Uncertainty in AI. Roughly includes material in ACM Subject Classes I.2.0, I.2.1, I.2.3, I.2.4, I.2.8, and I.2.11.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("AR"),
        name: "Hardware Architecture",
        description: "Covers systems organization and hardware architecture. Roughly includes material in ACM Subject Classes C.0, C.1, and C.5.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CC"),
        name: "Computational Complexity",
        description: "Covers models of computation, complexity classes, structural complexity, complexity tradeoffs, upper and lower bounds. Roughly includes material in ACM Subject Classes F.1 (computation by abstract devices), F.2.3 (tradeoffs among complexity measures), and F.4.3 (formal languages), although some material in formal languages may be more appropriate for Logic in Computer Science. Some material in F.2.1 and F.2.2, may also be appropriate here, but is more likely to have Data Structures and Algorithms as the primary subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CE"),
        name: "Computational Engineering, Finance, and Science",
        description: "Covers applications of computer science to the mathematical modeling of complex systems in the fields of science, engineering, and finance. Papers here are interdisciplinary and applications-oriented, focusing on techniques and tools that enable challenging computational simulations to be performed, for which the use of supercomputers or distributed computing platforms is often required. Includes material in ACM Subject Classes J.2, J.3, and J.4 (economics).",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CG"),
        name: "Computational Geometry",
        description: "Roughly includes material in ACM Subject Classes I.3.5 and F.2.2.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CL"),
        name: "Computation and Language",
        description: "Covers natural language processing. Roughly includes material in ACM Subject Class I.2.7. Note that work on artificial languages (programming languages, logics, formal systems) that does not explicitly address natural-language issues broadly construed (natural-language processing, computational linguistics, speech, text retrieval, etc.) is not appropriate for this area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CR"),
        name: "Cryptography and Security",
        description: "Covers all areas of cryptography and security including authentication, public key cryptosytems, proof-carrying code, etc. Roughly includes material in ACM Subject Classes D.4.6 and E.3.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CV"),
        name: "Computer Vision and Pattern Recognition",
        description: "Covers image processing, computer vision, pattern recognition, and scene understanding. Roughly includes material in ACM Subject Classes I.2.10, I.4, and I.5.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("CY"),
        name: "Computers and Society",
        description: "Covers impact of computers on society, computer ethics, information technology and public policy, legal aspects of computing, computers and education. Roughly includes material in ACM Subject Classes K.0, K.2, K.3, K.4, K.5, and K.7.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("DB"),
        name: "Databases",
        description: "Covers database management, datamining, and data processing. Roughly includes material in ACM Subject Classes E.2, E.5, H.0, H.2, and J.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("DC"),
        name: "Distributed, Parallel, and Cluster Computing",
        description: "Covers fault-tolerance, distributed algorithms, stabilility, parallel computation, and cluster computing. Roughly includes material in ACM Subject Classes C.1.2, C.1.4, C.2.4, D.1.3, D.4.5, D.4.7, E.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("DL"),
        name: "Digital Libraries",
        description: "Covers all aspects of the digital library design and document and text creation. Note that there will be some overlap with Information Retrieval (which is a separate subject area). Roughly includes material in ACM Subject Classes H.3.5, H.3.6, H.3.7, I.7.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("DM"),
        name: "Discrete Mathematics",
        description: "Covers combinatorics, graph theory, applications of probability. Roughly includes material in ACM Subject Classes G.2 and G.3.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("DS"),
        name: "Data Structures and Algorithms",
        description: "Covers data structures and analysis of algorithms. Roughly includes material in ACM Subject Classes E.1, E.2, F.2.1, and F.2.2.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("ET"),
        name: "Emerging Technologies",
        description: "Covers approaches to information processing (computing, communication, sensing) and bio-chemical analysis based on alternatives to silicon CMOS-based technologies, such as nanoscale electronic, photonic, spin-based, superconducting, mechanical, bio-chemical and quantum technologies (this list is not exclusive). Topics of interest include (1) building blocks for emerging technologies, their scalability and adoption in larger systems, including integration with traditional technologies, (2) modeling, design and optimization of novel devices and systems, (3) models of computation, algorithm design and programming for emerging technologies.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("FL"),
        name: "Formal Languages and Automata Theory",
        description: "Covers automata theory, formal language theory, grammars, and combinatorics on words. This roughly corresponds to ACM Subject Classes F.1.1, and F.4.3. Papers dealing with computational complexity should go to cs.CC; papers dealing with logic should go to cs.LO.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("GL"),
        name: "General Literature",
        description: "Covers introductory material, survey material, predictions of future trends, biographies, and miscellaneous computer-science related material. Roughly includes all of ACM Subject Class A, except it does not include conference proceedings (which will be listed in the appropriate subject area).",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("GR"),
        name: "Graphics",
        description: "Covers all aspects of computer graphics. Roughly includes material in all of ACM Subject Class I.3, except that I.3.5 is is likely to have Computational Geometry as the primary subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("GT"),
        name: "Computer Science and Game Theory",
        description: "Covers all theoretical and applied aspects at the intersection of computer science and game theory, including work in mechanism design, learning in games (which may overlap with Learning), foundations of agent modeling in games (which may overlap with Multiagent systems), coordination, specification and formal methods for non-cooperative computational environments. The area also deals with applications of game theory to areas such as electronic commerce.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("HC"),
        name: "Human-Computer Interaction",
        description: "Covers human factors, user interfaces, and collaborative computing. Roughly includes material in ACM Subject Classes H.1.2 and all of H.5, except for H.5.1, which is more likely to have Multimedia as the primary subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("IR"),
        name: "Information Retrieval",
        description: "Covers indexing, dictionaries, retrieval, content and analysis. Roughly includes material in ACM Subject Classes H.3.0, H.3.1, H.3.2, H.3.3, and H.3.4.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("IT"),
        name: "Information Theory",
        description: "Covers theoretical and experimental aspects of information theory and coding. Includes material in ACM Subject Class E.4 and intersects with H.1.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("LG"),
        name: "Machine Learning",
        description: "Papers on all aspects of machine learning research (supervised, unsupervised, reinforcement learning, bandit problems, and so on) including also robustness, explanation, fairness, and methodology. cs.LG is also an appropriate primary category for applications of machine learning methods.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("LO"),
        name: "Logic in Computer Science",
        description: "Covers all aspects of logic in computer science, including finite model theory, logics of programs, modal logic, and program verification. Programming language semantics should have Programming Languages as the primary subject area. Roughly includes material in ACM Subject Classes D.2.4, F.3.1, F.4.0, F.4.1, and F.4.2; some material in F.4.3 (formal languages) may also be appropriate here, although Computational Complexity is typically the more appropriate subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("MA"),
        name: "Multiagent Systems",
        description: "Covers multiagent systems, distributed artificial intelligence, intelligent agents, coordinated interactions. and practical applications. Roughly covers ACM Subject Class I.2.11.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("MM"),
        name: "Multimedia",
        description: "Roughly includes material in ACM Subject Class H.5.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("MS"),
        name: "Mathematical Software",
        description: "Roughly includes material in ACM Subject Class G.4.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("NA"),
        name: "Numerical Analysis",
        description: "cs.NA is an alias for math.NA. Roughly includes material in ACM Subject Class G.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("NE"),
        name: "Neural and Evolutionary Computing",
        description: "Covers neural networks, connectionism, genetic algorithms, artificial life, adaptive behavior. Roughly includes some material in ACM Subject Class C.1.3, I.2.6, I.5.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("NI"),
        name: "Networking and Internet Architecture",
        description: "Covers all aspects of computer communication networks, including network architecture and design, network protocols, and internetwork standards (like TCP/IP). Also includes topics, such as web caching, that are directly relevant to Internet architecture and performance. Roughly includes all of ACM Subject Class C.2 except C.2.4, which is more likely to have Distributed, Parallel, and Cluster Computing as the primary subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("OH"),
        name: "Other Computer Science",
        description: "This is the classification to use for documents that do not fit anywhere else.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("OS"),
        name: "Operating Systems",
        description: "Roughly includes material in ACM Subject Classes D.4.1, D.4.2., D.4.3, D.4.4, D.4.5, D.4.7, and D.4.9.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("PF"),
        name: "Performance",
        description: "Covers performance measurement and evaluation, queueing, and simulation. Roughly includes material in ACM Subject Classes D.4.8 and K.6.2.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("PL"),
        name: "Programming Languages",
        description: "Covers programming language semantics, language features, programming approaches (such as object-oriented programming, functional programming, logic programming). Also includes material on compilers oriented towards programming languages; other material on compilers may be more appropriate in Architecture (AR). Roughly includes material in ACM Subject Classes D.1 and D.3.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("RO"),
        name: "Robotics",
        description: "Roughly includes material in ACM Subject Class I.2.9.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("SC"),
        name: "Symbolic Computation",
        description: "Roughly includes material in ACM Subject Class I.1.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("SD"),
        name: "Sound",
        description: "Covers all aspects of computing with sound, and sound as an information channel. Includes models of sound, analysis and synthesis, audio user interfaces, sonification of data, computer music, and sound signal processing. Includes ACM Subject Class H.5.5, and intersects with H.1.2, H.5.1, H.5.2, I.2.7, I.5.4, I.6.3, J.5, K.4.2.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("SE"),
        name: "Software Engineering",
        description: "Covers design tools, software metrics, testing and debugging, programming environments, etc. Roughly includes material in all of ACM Subject Classes D.2, except that D.2.4 (program verification) should probably have Logics in Computer Science as the primary subject area.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("SI"),
        name: "Social and Information Networks",
        description: "Covers the design, analysis, and modeling of social and information networks, including their applications for on-line information access, communication, and interaction, and their roles as datasets in the exploration of questions in these and other domains, including connections to the social and biological sciences. Analysis and modeling of such networks includes topics in ACM Subject classes F.2, G.2, G.3, H.2, and I.2; applications in computing include topics in H.3, H.4, and H.5; and applications at the interface of computing and other disciplines include topics in J.1--J.7. Papers on computer communication systems and network protocols (e.g. TCP/IP) are generally a closer fit to the Networking and Internet Architecture (cs.NI) category.",
    },
    CategoryRecord {
        group: "Computer Science",
        archive: "cs",
        suffix: Some("SY"),
        name: "Systems and Control",
        description: "cs.SY is an alias for eess.SY. This section includes theoretical and experimental research covering all facets of automatic control systems. The section is focused on methods of control system analysis and design using tools of modeling, simulation and optimization. Specific areas of research include nonlinear, distributed, adaptive, stochastic and robust control in addition to hybrid and discrete event systems. Application areas include automotive and aerospace control systems, network control, biological systems, multiagent and cooperative control, robotics, reinforcement learning, sensor networks, control of cyber-physical and energy-related systems, and control of computing systems.",
    },
    CategoryRecord {
        group: "Economics",
        archive: "econ",
        suffix: Some("EM"),
        name: "Econometrics",
        description: "Econometric Theory, Micro-Econometrics, Macro-Econometrics, Empirical Content of Economic Relations discovered via New Methods, Methodological Aspects of the Application of Statistical Inference to Economic Data.",
    },
    CategoryRecord {
        group: "Economics",
        archive: "econ",
        suffix: Some("GN"),
        name: "General Economics",
        description: "General methodological, applied, and empirical contributions to economics.",
    },
    CategoryRecord {
        group: "Economics",
        archive: "econ",
        suffix: Some("TH"),
        name: "Theoretical Economics",
        description: "Includes theoretical contributions to Contract Theory, Decision Theory, Game Theory, General Equilibrium, Growth, Learning and Evolution, Macroeconomics, Market and Mechanism Design, and Social Choice.",
    },
    CategoryRecord {
        group: "Electrical Engineering and Systems Science",
        archive: "eess",
        suffix: Some("AS"),
        name: "Audio and Speech Processing",
        description: "Theory and methods for processing signals representing audio, speech, and language, and their applications. This includes analysis, synthesis, enhancement, transformation, classification and interpretation of such signals as well as the design, development, and evaluation of associated signal processing systems. Machine learning and pattern analysis applied to any of the above areas is also welcome. Specific topics of interest include: auditory modeling and hearing aids; acoustic beamforming and source localization; classification of acoustic scenes; speaker separation; active noise control and echo cancellation; enhancement; de-reverberation; bioacoustics; music signals analysis, synthesis and modification; music information retrieval; audio for multimedia and joint audio-video processing; spoken and written language modeling, segmentation, tagging, parsing, understanding, and translation; text mining; speech production, perception, and psychoacoustics; speech analysis, synthesis, and perceptual modeling and coding; robust speech recognition; speaker recognition and characterization; deep learning, online learning, and graphical models applied to speech, audio, and language signals; and implementation aspects ranging from system architecture to fast algorithms.",
    },
    CategoryRecord {
        group: "Electrical Engineering and Systems Science",
        archive: "eess",
        suffix: Some("IV"),
        name: "Image and Video Processing",
        description: "Theory, algorithms, and architectures for the formation, capture, processing, communication, analysis, and display of images, video, and multidimensional signals in a wide variety of applications. Topics of interest include: mathematical, statistical, and perceptual image and video modeling and representation; linear and nonlinear filtering, de-blurring, enhancement, restoration, and reconstruction from degraded, low-resolution or tomographic data; lossless and lossy compression and coding; segmentation, alignment, and recognition; image rendering, visualization, and printing; computational imaging, including ultrasound, tomographic and magnetic resonance imaging; and image and video analysis, synthesis, storage, search and retrieval.",
    },
    CategoryRecord {
        group: "Electrical Engineering and Systems Science",
        archive: "eess",
        suffix: Some("SP"),
        name: "Signal Processing",
        description: "Theory, algorithms, performance analysis and applications of signal and data analysis, including physical modeling, processing, detection and parameter estimation, learning, mining, retrieval, and information extraction. The term \"signal\" includes speech, audio, sonar, radar, geophysical, physiological, (bio-) medical, image, video, and multimodal natural and man-made signals, including communication signals and data. Topics of interest include: statistical signal processing, spectral estimation and system identification; filter design, adaptive filtering / stochastic learning; (compressive) sampling, sensing, and transform-domain methods including fast algorithms; signal processing for machine learning and machine learning for signal processing applications; in-network and graph signal processing; convex and nonconvex optimization methods for signal processing applications; radar, sonar, and sensor array beamforming and direction finding; communications signal processing; low power, multi-core and system-on-chip signal processing; sensing, communication, analysis and optimization for cyber-physical systems such as power grids and the Internet of Things.",
    },
    CategoryRecord {
        group: "Electrical Engineering and Systems Science",
        archive: "eess",
        suffix: Some("SY"),
        name: "Systems and Control",
        description: "This section includes theoretical and experimental research covering all facets of automatic control systems. The section is focused on methods of control system analysis and design using tools of modeling, simulation and optimization. Specific areas of research include nonlinear, distributed, adaptive, stochastic and robust control in addition to hybrid and discrete event systems. Application areas include automotive and aerospace control systems, network control, biological systems, multiagent and cooperative control, robotics, reinforcement learning, sensor networks, control of cyber-physical and energy-related systems, and control of computing systems.",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("AC"),
        name: "Commutative Algebra",
        description: "Commutative rings, modules, ideals, homological algebra, computational aspects, invariant theory, connections to algebraic geometry and combinatorics",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("AG"),
        name: "Algebraic Geometry",
        description: "Algebraic varieties, stacks, sheaves, schemes, moduli spaces, complex geometry, quantum cohomology",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("AP"),
        name: "Analysis of PDEs",
        description: "Existence and uniqueness, boundary conditions, linear and non-linear operators, stability, soliton theory, integrable PDE's, conservation laws, qualitative dynamics",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("AT"),
        name: "Algebraic Topology",
        description: "Homotopy theory, homological algebra, algebraic treatments of manifolds",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("CA"),
        name: "Classical Analysis and ODEs",
        description: "Special functions, orthogonal polynomials, harmonic analysis, ODE's, differential relations, calculus of variations, approximations, expansions, asymptotics",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("CO"),
        name: "Combinatorics",
        description: "Discrete mathematics, graph theory, enumeration, combinatorial optimization, Ramsey theory, combinatorial game theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("CT"),
        name: "Category Theory",
        description: "Enriched categories, topoi, abelian categories, monoidal categories, homological algebra",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("CV"),
        name: "Complex Variables",
        description: "Holomorphic functions, automorphic group actions and forms, pseudoconvexity, complex geometry, analytic spaces, analytic sheaves",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("DG"),
        name: "Differential Geometry",
        description: "Complex, contact, Riemannian, pseudo-Riemannian and Finsler geometry, relativity, gauge theory, global analysis",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("DS"),
        name: "Dynamical Systems",
        description: "Dynamics of differential equations and flows, mechanics, classical few-body problems, iterations, complex dynamics, delayed differential equations",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("FA"),
        name: "Functional Analysis",
        description: "Banach spaces, function spaces, real functions, integral transforms, theory of distributions, measure theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("GM"),
        name: "General Mathematics",
        description: "Mathematical material of general interest, topics not covered elsewhere",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("GN"),
        name: "General Topology",
        description: "Continuum theory, point-set topology, spaces with algebraic structure, foundations, dimension theory, local and global properties",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("GR"),
        name: "Group Theory",
        description: "Finite groups, topological groups, representation theory, cohomology, classification and structure",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("GT"),
        name: "Geometric Topology",
        description: "Manifolds, orbifolds, polyhedra, cell complexes, foliations, geometric structures",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("HO"),
        name: "History and Overview",
        description: "Biographies, philosophy of mathematics, mathematics education, recreational mathematics, communication of mathematics, ethics in mathematics",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("IT"),
        name: "Information Theory",
        description: "math.IT is an alias for cs.IT. Covers theoretical and experimental aspects of information theory and coding.",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("KT"),
        name: "K-Theory and Homology",
        description: "Algebraic and topological K-theory, relations with topology, commutative algebra, and operator algebras",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("LO"),
        name: "Logic",
        description: "Logic, set theory, point-set topology, formal mathematics",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("MG"),
        name: "Metric Geometry",
        description: "Euclidean, hyperbolic, discrete, convex, coarse geometry, comparisons in Riemannian geometry, symmetric spaces",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("MP"),
        name: "Mathematical Physics",
        description: "math.MP is an alias for math-ph. Articles in this category focus on areas of research that illustrate the application of mathematics to problems in physics, develop mathematical methods for such applications, or provide mathematically rigorous formulations of existing physical theories. Submissions to math-ph should be of interest to both physically oriented mathematicians and mathematically oriented physicists; submissions which are primarily of interest to theoretical physicists or to mathematicians should probably be directed to the respective physics/math categories",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("NA"),
        name: "Numerical Analysis",
        description: "Numerical algorithms for problems in analysis and algebra, scientific computation",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("NT"),
        name: "Number Theory",
        description: "Prime numbers, diophantine equations, analytic number theory, algebraic number theory, arithmetic geometry, Galois theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("OA"),
        name: "Operator Algebras",
        description: "Algebras of operators on Hilbert space, C^*-algebras, von Neumann algebras, non-commutative geometry",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("OC"),
        name: "Optimization and Control",
        description: "Operations research, linear programming, control theory, systems theory, optimal control, game theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("PR"),
        name: "Probability",
        description: "Theory and applications of probability and stochastic processes: e.g. central limit theorems, large deviations, stochastic differential equations, models from statistical mechanics, queuing theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("QA"),
        name: "Quantum Algebra",
        description: "Quantum groups, skein theories, operadic and diagrammatic algebra, quantum field theory",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("RA"),
        name: "Rings and Algebras",
        description: "Non-commutative rings and algebras, non-associative algebras, universal algebra and lattice theory, linear algebra, semigroups",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("RT"),
        name: "Representation Theory",
        description: "Linear representations of algebras and groups, Lie theory, associative algebras, multilinear algebra",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("SG"),
        name: "Symplectic Geometry",
        description: "Hamiltonian systems, symplectic flows, classical integrable systems",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("SP"),
        name: "Spectral Theory",
        description: "Schrodinger operators, operators on manifolds, general differential operators, numerical studies, integral operators, discrete models, resonances, non-self-adjoint operators, random operators/matrices",
    },
    CategoryRecord {
        group: "Mathematics",
        archive: "math",
        suffix: Some("ST"),
        name: "Statistics Theory",
        description: "Applied, computational and theoretical statistics: e.g. statistical inference, regression, time series, multivariate analysis, data analysis, Markov chain Monte Carlo, design of experiments, case studies",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: None,
        name: "Quantitative Biology",
        description: "Legacy general category for quantitative biology articles submitted before the q-bio subject classes were introduced in 2003. New submissions must use one of the q-bio.* subject classes.",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("BM"),
        name: "Biomolecules",
        description: "DNA, RNA, proteins, lipids, etc.; molecular structures and folding kinetics; molecular interactions; single-molecule manipulation.",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("CB"),
        name: "Cell Behavior",
        description: "Cell-cell signaling and interaction; morphogenesis and development; apoptosis; bacterial conjugation; viral-host interaction; immunology",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("GN"),
        name: "Genomics",
        description: "DNA sequencing and assembly; gene and motif finding; RNA editing and alternative splicing; genomic structure and processes (replication, transcription, methylation, etc); mutational processes.",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("MN"),
        name: "Molecular Networks",
        description: "Gene regulation, signal transduction, proteomics, metabolomics, gene and enzymatic networks",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("NC"),
        name: "Neurons and Cognition",
        description: "Synapse, cortex, neuronal dynamics, neural network, sensorimotor control, behavior, attention",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("OT"),
        name: "Other Quantitative Biology",
        description: "Work in quantitative biology that does not fit into the other q-bio classifications",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("PE"),
        name: "Populations and Evolution",
        description: "Population dynamics, spatio-temporal and epidemiological models, dynamic speciation, co-evolution, biodiversity, foodwebs, aging; molecular evolution and phylogeny; directed evolution; origin of life",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("QM"),
        name: "Quantitative Methods",
        description: "All experimental, numerical, statistical and mathematical contributions of value to biology",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("SC"),
        name: "Subcellular Processes",
        description: "Assembly and control of subcellular structures (channels, organelles, cytoskeletons, capsules, etc.); molecular motors, transport, subcellular localization; mitosis and meiosis",
    },
    CategoryRecord {
        group: "Quantitative Biology",
        archive: "q-bio",
        suffix: Some("TO"),
        name: "Tissues and Organs",
        description: "Blood flow in vessels, biomechanics of bones, electrical waves, endocrine system, tumor growth",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("CP"),
        name: "Computational Finance",
        description: "Computational methods, including Monte Carlo, PDE, lattice and other numerical methods with applications to financial modeling",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("EC"),
        name: "Economics",
        description: "q-fin.EC is an alias for econ.GN. Economics, including micro and macro economics, international economics, theory of the firm, labor economics, and other economic topics outside finance",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("GN"),
        name: "General Finance",
        description: "Development of general quantitative methodologies with applications in finance",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("MF"),
        name: "Mathematical Finance",
        description: "Mathematical and analytical methods of finance, including stochastic, probabilistic and functional analysis, algebraic, geometric and other methods",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("PM"),
        name: "Portfolio Management",
        description: "Security selection and optimization, capital allocation, investment strategies and performance measurement",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("PR"),
        name: "Pricing of Securities",
        description: "Valuation and hedging of financial securities, their derivatives, and structured products",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("RM"),
        name: "Risk Management",
        description: "Measurement and management of financial risks in trading, banking, insurance, corporate and other applications",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("ST"),
        name: "Statistical Finance",
        description: "Statistical, econometric and econophysics analyses with applications to financial markets and economic data",
    },
    CategoryRecord {
        group: "Quantitative Finance",
        archive: "q-fin",
        suffix: Some("TR"),
        name: "Trading and Market Microstructure",
        description: "Market microstructure, liquidity, exchange and auction design, automated trading, agent-based modeling and market-making",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("AP"),
        name: "Applications",
        description: "Biology, Education, Epidemiology, Engineering, Environmental Sciences, Medical, Physical Sciences, Quality Control, Social Sciences",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("CO"),
        name: "Computation",
        description: "Algorithms, Simulation, Visualization",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("ME"),
        name: "Methodology",
        description: "Design, Surveys, Model Selection, Multiple Testing, Multivariate Methods, Signal and Image Processing, Time Series, Smoothing, Spatial Statistics, Survival Analysis, Nonparametric and Semiparametric Methods",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("ML"),
        name: "Machine Learning",
        description: "Covers machine learning papers (supervised, unsupervised, semi-supervised learning, graphical models, reinforcement learning, bandits, high dimensional inference, etc.) with a statistical or theoretical grounding",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("OT"),
        name: "Other Statistics",
        description: "Work in statistics that does not fit into the other stat classifications",
    },
    CategoryRecord {
        group: "Statistics",
        archive: "stat",
        suffix: Some("TH"),
        name: "Statistics Theory",
        description: "stat.TH is an alias for math.ST. Asymptotics, Bayesian Inference, Decision Theory, Estimation, Foundations, Inference, Testing.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: None,
        name: "Astrophysics",
        description: "Legacy general category for astrophysics articles submitted before the astro-ph subject classes were introduced in 2009. New submissions must use one of the astro-ph.* subject classes.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("CO"),
        name: "Cosmology and Nongalactic Astrophysics",
        description: "Phenomenology of early universe, cosmic microwave background, cosmological parameters, primordial element abundances, extragalactic distance scale, large-scale structure of the universe. Groups, superclusters, voids, intergalactic medium. Particle astrophysics: dark energy, dark matter, baryogenesis, leptogenesis, inflationary models, reheating, monopoles, WIMPs, cosmic strings, primordial black holes, cosmological gravitational radiation",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("EP"),
        name: "Earth and Planetary Astrophysics",
        description: "Interplanetary medium, planetary physics, planetary astrobiology, extrasolar planets, comets, asteroids, meteorites. Structure and formation of the solar system",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("GA"),
        name: "Astrophysics of Galaxies",
        description: "Phenomena pertaining to galaxies or the Milky Way. Star clusters, HII regions and planetary nebulae, the interstellar medium, atomic and molecular clouds, dust. Stellar populations. Galactic structure, formation, dynamics. Galactic nuclei, bulges, disks, halo. Active Galactic Nuclei, supermassive black holes, quasars. Gravitational lens systems. The Milky Way and its contents",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("HE"),
        name: "High Energy Astrophysical Phenomena",
        description: "Cosmic ray production, acceleration, propagation, detection. Gamma ray astronomy and bursts, X-rays, charged particles, supernovae and other explosive phenomena, stellar remnants and accretion systems, jets, microquasars, neutron stars, pulsars, black holes",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("IM"),
        name: "Instrumentation and Methods for Astrophysics",
        description: "Detector and telescope design, experiment proposals. Laboratory Astrophysics. Methods for data analysis, statistical methods. Software, database design",
    },
    CategoryRecord {
        group: "Physics",
        archive: "astro-ph",
        suffix: Some("SR"),
        name: "Solar and Stellar Astrophysics",
        description: "White dwarfs, brown dwarfs, cataclysmic variables. Star formation and protostellar systems, stellar astrobiology, binary and multiple systems of stars, stellar evolution and structure, coronas. Central stars of planetary nebulae. Helioseismology, solar neutrinos, production and detection of gravitational radiation from stellar systems",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: None,
        name: "Condensed Matter",
        description: "Legacy general category for condensed matter articles submitted before the cond-mat subject classes were introduced. New submissions must use one of the cond-mat.* subject classes.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("dis-nn"),
        name: "Disordered Systems and Neural Networks",
        description: "Glasses and spin glasses; properties of random, aperiodic and quasiperiodic systems; transport in disordered media; localization; phenomena mediated by defects and disorder; neural networks",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("mes-hall"),
        name: "Mesoscale and Nanoscale Physics",
        description: "Semiconducting nanostructures: quantum dots, wires, and wells. Single electronics, spintronics, 2d electron gases, quantum Hall effect, nanotubes, graphene, plasmonic nanostructures",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("mtrl-sci"),
        name: "Materials Science",
        description: "Techniques, synthesis, characterization, structure. Structural phase transitions, mechanical properties, phonons. Defects, adsorbates, interfaces",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("other"),
        name: "Other Condensed Matter",
        description: "Work in condensed matter that does not fit into the other cond-mat classifications",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("quant-gas"),
        name: "Quantum Gases",
        description: "Ultracold atomic and molecular gases, Bose-Einstein condensation, Feshbach resonances, spinor condensates, optical lattices, quantum simulation with cold atoms and molecules, macroscopic interference phenomena",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("soft"),
        name: "Soft Condensed Matter",
        description: "Membranes, polymers, liquid crystals, glasses, colloids, granular matter",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("stat-mech"),
        name: "Statistical Mechanics",
        description: "Phase transitions, thermodynamics, field theory, non-equilibrium phenomena, renormalization group and scaling, integrable models, turbulence",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("str-el"),
        name: "Strongly Correlated Electrons",
        description: "Quantum magnetism, non-Fermi liquids, spin liquids, quantum criticality, charge density waves, metal-insulator transitions",
    },
    CategoryRecord {
        group: "Physics",
        archive: "cond-mat",
        suffix: Some("supr-con"),
        name: "Superconductivity",
        description: "Superconductivity: theory, models, experiment. Superflow in helium",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nlin",
        suffix: Some("AO"),
        name: "Adaptation and Self-Organizing Systems",
        description: "Adaptation, self-organizing systems, statistical physics, fluctuating systems, stochastic processes, interacting particle systems, machine learning",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nlin",
        suffix: Some("CD"),
        name: "Chaotic Dynamics",
        description: "Dynamical systems, chaos, quantum chaos, topological dynamics, cycle expansions, turbulence, propagation",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nlin",
        suffix: Some("CG"),
        name: "Cellular Automata and Lattice Gases",
        description: "Computational methods, time series analysis, signal processing, wavelets, lattice gases",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nlin",
        suffix: Some("PS"),
        name: "Pattern Formation and Solitons",
        description: "Pattern formation, coherent structures, solitons",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nlin",
        suffix: Some("SI"),
        name: "Exactly Solvable and Integrable Systems",
        description: "Exactly solvable systems, integrable PDEs, integrable ODEs, Painleve analysis, integrable discrete maps, solvable lattice models, integrable quantum systems",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("acc-ph"),
        name: "Accelerator Physics",
        description: "Accelerator theory and simulation. Accelerator technology. Accelerator experiments. Beam Physics. Accelerator design and optimization. Advanced accelerator concepts. Radiation sources including synchrotron light sources and free electron lasers. Applications of accelerators.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("ao-ph"),
        name: "Atmospheric and Oceanic Physics",
        description: "Atmospheric and oceanic physics and physical chemistry, biogeophysics, and climate science",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("app-ph"),
        name: "Applied Physics",
        description: "Applications of physics to new technology, including electronic devices, optics, photonics, microwaves, spintronics, advanced materials, metamaterials, nanotechnology, and energy sciences.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("atm-clus"),
        name: "Atomic and Molecular Clusters",
        description: "Atomic and molecular clusters, nanoparticles: geometric, electronic, optical, chemical, magnetic properties, shell structure, phase transitions, optical spectroscopy, mass spectrometry, photoelectron spectroscopy, ionization potential, electron affinity, interaction with intense light pulses, electron diffraction, light scattering, ab initio calculations, DFT theory, fragmentation, Coulomb explosion, hydrodynamic expansion.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("atom-ph"),
        name: "Atomic Physics",
        description: "Atomic and molecular structure, spectra, collisions, and data. Atoms and molecules in external fields. Molecular dynamics and coherent and optical control. Cold atoms and molecules. Cold collisions. Optical lattices.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("bio-ph"),
        name: "Biological Physics",
        description: "Molecular biophysics, cellular biophysics, neurological biophysics, membrane biophysics, single-molecule biophysics, ecological biophysics, quantum phenomena in biological systems (quantum biophysics), theoretical biophysics, molecular dynamics/modeling and simulation, game theory, biomechanics, bioinformatics, microorganisms, virology, evolution, biophysical methods.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("chem-ph"),
        name: "Chemical Physics",
        description: "Experimental, computational, and theoretical physics of atoms, molecules, and clusters - Classical and quantum description of states, processes, and dynamics; spectroscopy, electronic structure, conformations, reactions, interactions, and phases. Chemical thermodynamics. Disperse systems. High pressure chemistry. Solid state chemistry. Surface and interface chemistry.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("class-ph"),
        name: "Classical Physics",
        description: "Newtonian and relativistic dynamics; many particle systems; planetary motions; chaos in classical dynamics. Maxwell's equations and dynamics of charged systems and electromagnetic forces in materials. Vibrating systems such as membranes and cantilevers; optomechanics. Classical waves, including acoustics and elasticity; physics of music and musical instruments. Classical thermodynamics and heat flow problems.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("comp-ph"),
        name: "Computational Physics",
        description: "All aspects of computational science applied to physics.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("data-an"),
        name: "Data Analysis, Statistics and Probability",
        description: "Methods, software and hardware for physics data analysis: data processing and storage; measurement methodology; statistical and mathematical aspects such as parametrization and uncertainties.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("ed-ph"),
        name: "Physics Education",
        description: "Report of results of a research study, laboratory experience, assessment or classroom practice that represents a way to improve teaching and learning in physics. Also, report on misconceptions of students, textbook errors, and other similar information relative to promoting physics understanding.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("flu-dyn"),
        name: "Fluid Dynamics",
        description: "Turbulence, instabilities, incompressible/compressible flows, reacting flows. Aero/hydrodynamics, fluid-structure interactions, acoustics. Biological fluid dynamics, micro/nanofluidics, interfacial phenomena. Complex fluids, suspensions and granular flows, porous media flows. Geophysical flows, thermoconvective and stratified flows. Mathematical and computational methods for fluid dynamics, fluid flow models, experimental techniques.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("gen-ph"),
        name: "General Physics",
        description: "Description coming soon",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("geo-ph"),
        name: "Geophysics",
        description: "Atmospheric physics. Biogeosciences. Computational geophysics. Geographic location. Geoinformatics. Geophysical techniques. Hydrospheric geophysics. Magnetospheric physics. Mathematical geophysics. Planetology. Solar system. Solid earth geophysics. Space plasma physics. Mineral physics. High pressure physics.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("hist-ph"),
        name: "History and Philosophy of Physics",
        description: "History and philosophy of all branches of physics, astrophysics, and cosmology, including appreciations of physicists.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("ins-det"),
        name: "Instrumentation and Detectors",
        description: "Instrumentation and Detectors for research in natural science, including optical, molecular, atomic, nuclear and particle physics instrumentation and the associated electronics, services, infrastructure and control equipment.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("med-ph"),
        name: "Medical Physics",
        description: "Radiation therapy. Radiation dosimetry. Biomedical imaging modelling. Reconstruction, processing, and analysis. Biomedical system modelling and analysis. Health physics. New imaging or therapy modalities.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("optics"),
        name: "Optics",
        description: "Adaptive optics. Astronomical optics. Atmospheric optics. Biomedical optics. Cardinal points. Collimation. Doppler effect. Fiber optics. Fourier optics. Geometrical optics (Gradient index optics. Holography. Infrared optics. Integrated optics. Laser applications. Laser optical systems. Lasers. Light amplification. Light diffraction. Luminescence. Microoptics. Nano optics. Ocean optics. Optical computing. Optical devices. Optical imaging. Optical materials. Optical metrology. Optical microscopy. Optical properties. Optical signal processing. Optical testing techniques. Optical wave propagation. Paraxial optics. Photoabsorption. Photoexcitations. Physical optics. Physiological optics. Quantum optics. Segmented optics. Spectra. Statistical optics. Surface optics. Ultrafast optics. Wave optics. X-ray optics.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("plasm-ph"),
        name: "Plasma Physics",
        description: "Fundamental plasma physics. Magnetically Confined Plasmas (includes magnetic fusion energy research). High Energy Density Plasmas (inertial confinement plasmas, laser-plasma interactions). Ionospheric, Heliophysical, and Astrophysical plasmas (includes sun and solar system plasmas). Lasers, Accelerators, and Radiation Generation. Low temperature plasmas and plasma applications (include dusty plasmas, semiconductor etching, plasma-based nanotechnology, medical applications). Plasma Diagnostics, Engineering and Enabling Technologies (includes fusion reactor design, heating systems, diagnostics, experimental techniques)",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("pop-ph"),
        name: "Popular Physics",
        description: "Description coming soon",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("soc-ph"),
        name: "Physics and Society",
        description: "Structure, dynamics and collective behavior of societies and groups (human or otherwise). Quantitative analysis of social networks and other complex networks. Physics and engineering of infrastructure and systems of broad societal impact (e.g., energy grids, transportation networks).",
    },
    CategoryRecord {
        group: "Physics",
        archive: "physics",
        suffix: Some("space-ph"),
        name: "Space Physics",
        description: "Space plasma physics. Heliophysics. Space weather. Planetary magnetospheres, ionospheres and magnetotail. Auroras. Interplanetary space. Cosmic rays. Synchrotron radiation. Radio astronomy.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "gr-qc",
        suffix: None,
        name: "General Relativity and Quantum Cosmology",
        description: "General Relativity and Quantum Cosmology Areas of gravitational physics, including experiments and observations related to the detection and interpretation of gravitational waves, experimental tests of gravitational theories, computational general relativity, relativistic astrophysics, solutions to Einstein's equations and their properties, alternative theories of gravity, classical and quantum cosmology, and quantum gravity.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "hep-ex",
        suffix: None,
        name: "High Energy Physics - Experiment",
        description: "Description coming soon",
    },
    CategoryRecord {
        group: "Physics",
        archive: "hep-lat",
        suffix: None,
        name: "High Energy Physics - Lattice",
        description: "Lattice field theory. Phenomenology from lattice field theory. Algorithms for lattice field theory. Hardware for lattice field theory.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "hep-ph",
        suffix: None,
        name: "High Energy Physics - Phenomenology",
        description: "Theoretical particle physics and its interrelation with experiment. Prediction of particle physics observables: models, effective field theories, calculation techniques. Particle physics: analysis of theory through experimental results.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "hep-th",
        suffix: None,
        name: "High Energy Physics - Theory",
        description: "Formal aspects of quantum field theory. String theory, supersymmetry and supergravity.",
    },
    CategoryRecord {
        group: "Physics",
        archive: "math-ph",
        suffix: None,
        name: "Mathematical Physics",
        description: "Articles in this category focus on areas of research that illustrate the application of mathematics to problems in physics, develop mathematical methods for such applications, or provide mathematically rigorous formulations of existing physical theories. Submissions to math-ph should be of interest to both physically oriented mathematicians and mathematically oriented physicists; submissions which are primarily of interest to theoretical physicists or to mathematicians should probably be directed to the respective physics/math categories",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nucl-ex",
        suffix: None,
        name: "Nuclear Experiment",
        description: "Nuclear Experiment Results from experimental nuclear physics including the areas of fundamental interactions, measurements at low- and medium-energy, as well as relativistic heavy-ion collisions. Does not include: detectors and instrumentation nor analysis methods to conduct experiments; descriptions of experimental programs (present or future); comments on published results",
    },
    CategoryRecord {
        group: "Physics",
        archive: "nucl-th",
        suffix: None,
        name: "Nuclear Theory",
        description: "Nuclear Theory Theory of nuclear structure covering wide area from models of hadron structure to neutron stars. Nuclear equation of states at different external conditions. Theory of nuclear reactions including heavy-ion reactions at low and high energies. It does not include problems of data analysis, physics of nuclear reactors, problems of safety, reactor construction",
    },
    CategoryRecord {
        group: "Physics",
        archive: "quant-ph",
        suffix: None,
        name: "Quantum Physics",
        description: "Description coming soon",
    },
];

/// Archives subsumed into modern categories; their bare ids never appear in
/// new submissions but must still resolve through the catalog.
pub(crate) const LEGACY_RECORDS: &[LegacyRecord] = &[
    LegacyRecord { id: "acc-phys", group: "Physics", name: "Accelerator Physics", successor: "physics.acc-ph" },
    LegacyRecord { id: "adap-org", group: "Physics", name: "Adaptation, Noise, and Self-Organizing Systems", successor: "nlin.AO" },
    LegacyRecord { id: "alg-geom", group: "Mathematics", name: "Algebraic Geometry", successor: "math.AG" },
    LegacyRecord { id: "ao-sci", group: "Physics", name: "Atmospheric-Oceanic Sciences", successor: "physics.ao-ph" },
    LegacyRecord { id: "atom-ph", group: "Physics", name: "Atomic, Molecular and Optical Physics", successor: "physics.atom-ph" },
    LegacyRecord { id: "bayes-an", group: "Physics", name: "Bayesian Analysis", successor: "physics.data-an" },
    LegacyRecord { id: "chao-dyn", group: "Physics", name: "Chaotic Dynamics", successor: "nlin.CD" },
    LegacyRecord { id: "chem-ph", group: "Physics", name: "Chemical Physics", successor: "physics.chem-ph" },
    LegacyRecord { id: "cmp-lg", group: "Computer Science", name: "Computation and Language", successor: "cs.CL" },
    LegacyRecord { id: "comp-gas", group: "Physics", name: "Cellular Automata and Lattice Gases", successor: "nlin.CG" },
    LegacyRecord { id: "dg-ga", group: "Mathematics", name: "Differential Geometry", successor: "math.DG" },
    LegacyRecord { id: "funct-an", group: "Mathematics", name: "Functional Analysis", successor: "math.FA" },
    LegacyRecord { id: "mtrl-th", group: "Physics", name: "Materials Theory", successor: "cond-mat.mtrl-sci" },
    LegacyRecord { id: "patt-sol", group: "Physics", name: "Pattern Formation and Solitons", successor: "nlin.PS" },
    LegacyRecord { id: "plasm-ph", group: "Physics", name: "Plasma Physics", successor: "physics.plasm-ph" },
    LegacyRecord { id: "q-alg", group: "Mathematics", name: "Quantum Algebra and Topology", successor: "math.QA" },
    LegacyRecord { id: "solv-int", group: "Physics", name: "Exactly Solvable and Integrable Systems", successor: "nlin.SI" },
    LegacyRecord { id: "supr-con", group: "Physics", name: "Superconductivity", successor: "cond-mat.supr-con" },
];

//! Basic usage example for the arXiv Query library.
//!
//! This example builds a few representative queries and parses article
//! identifiers; the printed strings can be pasted into the API's
//! `search_query` parameter as-is.

use arxiv_query::{catalog, ArticleId, DateBound, Query};
use chrono::NaiveDate;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A simple fielded query
    let q = Query::title("attention is all you need")?;
    println!("title search:     {q}");

    // Authors: tuple = all of them, vector = any of them
    let q = Query::author(("Ashish", "Vaswani"))? & Query::category("cs.CL")?;
    println!("author + cat:     {q}");

    // Taxonomy-driven category groups
    let c = catalog();
    println!(
        "catalog:          {} categories in {} archives",
        c.all_categories().len(),
        c.all_archives().len()
    );
    let q = Query::category(c.ml_karpathy())?;
    println!("arxiv-sanity set: {q}");

    // Archives render as wildcard patterns
    let q = Query::category(c.archive("astro-ph")?)?;
    println!("whole archive:    {q}");

    // Date ranges with open ends, excluding a category
    let since = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad date")?;
    let q = Query::r#abstract("diffusion")?
        .and(Query::submitted_date(since, DateBound::Open)?)?
        .andnot(Query::category(c.category("cs.CV")?)?)?;
    println!("recent non-CV:    {q}");
    println!("url-encoded:      {}", q.to_url_encoded());

    // Identifier parsing, both formats
    for raw in ["arXiv:1805.12345v2", "quant-ph/0201082v1"] {
        let parsed = ArticleId::from_id(raw)?;
        println!(
            "{raw}: year {} month {} number {} version {:?}",
            parsed.year(),
            parsed.month(),
            parsed.number(),
            parsed.version()
        );
    }

    Ok(())
}

//! Submission-date bounds and the grammar's fixed-width timestamp format.
//!
//! The official format for `submittedDate` filtering is `YYYYMMDDhhmm`
//! (times in GMT), but the search engine also accepts shorter partial
//! timestamps and ones that include seconds. Seconds are ignored by the
//! engine.

use std::sync::OnceLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use regex::Regex;

use super::expr::{Node, TermValue};
use super::fields::Field;
use super::{Query, QueryError};

/// Sentinel timestamps used for open-ended range sides.
const OPEN_RANGE_START: &str = "100001010000";
const OPEN_RANGE_END: &str = "900001010000";

/// One bound of a submission-date range.
///
/// Conversions exist from [`NaiveDate`], any [`DateTime`] (converted to
/// UTC), strings (validated digit-only timestamps), and `Option`s of those
/// with `None` meaning [`DateBound::Open`].
#[derive(Debug, Clone)]
pub enum DateBound {
    /// No bound on this side; rendered as the grammar's open-range
    /// sentinel.
    Open,
    /// A calendar date, rendered as midnight UTC.
    Day(NaiveDate),
    /// An exact instant, rendered with minute precision.
    Instant(DateTime<Utc>),
    /// A pre-formatted digit-only timestamp, 4 to 14 digits covering
    /// `YYYY` through `YYYYMMDDhhmmss`. Validated when the query is
    /// built and passed through verbatim.
    Raw(String),
}

impl From<NaiveDate> for DateBound {
    fn from(date: NaiveDate) -> Self {
        DateBound::Day(date)
    }
}

impl From<NaiveDateTime> for DateBound {
    fn from(instant: NaiveDateTime) -> Self {
        DateBound::Instant(instant.and_utc())
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for DateBound {
    fn from(instant: DateTime<Tz>) -> Self {
        DateBound::Instant(instant.with_timezone(&Utc))
    }
}

impl From<&str> for DateBound {
    fn from(raw: &str) -> Self {
        DateBound::Raw(raw.to_string())
    }
}

impl From<String> for DateBound {
    fn from(raw: String) -> Self {
        DateBound::Raw(raw)
    }
}

impl<T: Into<DateBound>> From<Option<T>> for DateBound {
    fn from(bound: Option<T>) -> Self {
        match bound {
            Some(value) => value.into(),
            None => DateBound::Open,
        }
    }
}

impl DateBound {
    fn render(self, open_sentinel: &str) -> Result<String, QueryError> {
        match self {
            DateBound::Open => Ok(open_sentinel.to_string()),
            DateBound::Day(date) => Ok(date.format("%Y%m%d0000").to_string()),
            DateBound::Instant(instant) => Ok(instant.format("%Y%m%d%H%M").to_string()),
            DateBound::Raw(raw) => {
                validate_timestamp(&raw)?;
                Ok(raw)
            }
        }
    }
}

impl Query {
    /// Filter by submission date range (`submittedDate:[LOW TO HIGH]`).
    ///
    /// Both sides accept a date, a datetime (timezone-aware values are
    /// converted to UTC), a pre-formatted timestamp string, or `None` /
    /// [`DateBound::Open`] for an open-ended side.
    ///
    /// ```
    /// use arxiv_query::{DateBound, Query};
    /// use chrono::NaiveDate;
    ///
    /// let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    /// let q = Query::submitted_date(from, DateBound::Open)?;
    /// assert_eq!(
    ///     q.to_query_string(),
    ///     "submittedDate:[202301010000 TO 900001010000]"
    /// );
    /// # Ok::<(), arxiv_query::QueryError>(())
    /// ```
    pub fn submitted_date(
        start: impl Into<DateBound>,
        end: impl Into<DateBound>,
    ) -> Result<Self, QueryError> {
        let low = start.into().render(OPEN_RANGE_START)?;
        let high = end.into().render(OPEN_RANGE_END)?;
        Ok(Query {
            node: Node::Term {
                field: Field::SubmittedDate,
                value: TermValue::Range { low, high },
            },
        })
    }
}

fn validate_timestamp(raw: &str) -> Result<(), QueryError> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| {
        Regex::new(r"^[0-9]{4,14}$").expect("timestamp pattern is valid")
    });
    if !digits.is_match(raw) {
        return Err(QueryError::InvalidQuery(format!(
            "date string must be a digit-only timestamp with 4 to 14 digits: {raw}"
        )));
    }

    let not_a_datetime =
        || QueryError::InvalidQuery(format!("date string is not a valid datetime: {raw}"));

    let year: i32 = raw[..4].parse().map_err(|_| not_a_datetime())?;
    // month, day, hour, minute, second; missing components default to the
    // start of their range, a trailing single digit is read as-is
    let mut components = [1u32, 1, 0, 0, 0];
    let mut position = 4;
    for component in &mut components {
        if position >= raw.len() {
            break;
        }
        let end = (position + 2).min(raw.len());
        *component = raw[position..end].parse().map_err(|_| not_a_datetime())?;
        position = end;
    }
    let [month, day, hour, minute, second] = components;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(not_a_datetime)?;
    if hour > 23 || minute > 59 || second > 59 {
        return Err(not_a_datetime());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_with_dates() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let q = Query::submitted_date(from, to).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[202301010000 TO 202401010000]"
        );
    }

    #[test]
    fn test_with_datetimes() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(6, 0, 0).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(6, 0, 0).unwrap();
        let q = Query::submitted_date(from, to).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[202301010600 TO 202401010600]"
        );
    }

    #[test]
    fn test_mixed_date_and_datetime() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(12, 30, 0).unwrap();
        let q = Query::submitted_date(from, to).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[202301010000 TO 202401011230]"
        );
    }

    #[test]
    fn test_open_ended_sides() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let q = Query::submitted_date(None::<NaiveDate>, date).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[100001010000 TO 202401010000]"
        );

        let q = Query::submitted_date(date, DateBound::Open).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[202401010000 TO 900001010000]"
        );

        let q = Query::submitted_date(DateBound::Open, DateBound::Open).unwrap();
        assert_eq!(
            q.to_query_string(),
            "submittedDate:[100001010000 TO 900001010000]"
        );
    }

    #[test]
    fn test_timezone_aware_converted_to_utc() {
        // 05:00 at UTC+9 is 20:00 UTC the previous day
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let local = tokyo.with_ymd_and_hms(2023, 1, 1, 5, 0, 0).unwrap();
        let q = Query::submitted_date(local, DateBound::Open).unwrap();
        assert!(q.to_query_string().contains("202212312000"));
    }

    #[test]
    fn test_raw_timestamps_pass_validation() {
        for raw in ["2023", "202306", "20230615", "202306151200", "20230615120000"] {
            let q = Query::submitted_date(raw, DateBound::Open).unwrap();
            assert!(q.to_query_string().contains(raw));
        }
    }

    #[test]
    fn test_raw_timestamp_rejects_non_digits() {
        for raw in ["2023-01-01", "20x3", "202", "202306151200000"] {
            let err = Query::submitted_date(raw, DateBound::Open).unwrap_err();
            assert!(matches!(err, QueryError::InvalidQuery(_)), "{raw}");
        }
    }

    #[test]
    fn test_raw_timestamp_rejects_impossible_dates() {
        for raw in ["202313", "20230230", "202306152500", "202306151260"] {
            let err = Query::submitted_date(raw, DateBound::Open).unwrap_err();
            assert!(matches!(err, QueryError::InvalidQuery(_)), "{raw}");
        }
    }

    #[test]
    fn test_combined_with_author() {
        let from = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let q = Query::author("Terence Tao").unwrap()
            & Query::submitted_date(from, to).unwrap();
        assert_eq!(
            q.to_query_string(),
            "(au:\"Terence Tao\" AND submittedDate:[202301010000 TO 202401010000])"
        );
    }

    #[test]
    fn test_negated_open_range() {
        let q = Query::author("Tao").unwrap()
            & !Query::submitted_date(DateBound::Open, DateBound::Open).unwrap();
        assert!(q
            .to_query_string()
            .contains("ANDNOT submittedDate:[100001010000 TO 900001010000]"));
    }
}

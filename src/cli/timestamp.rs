use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseError};

/// Accept an RFC 3339 timestamp, a naive date and time, or a date alone.
///
/// Naive values are taken as UTC.
pub fn parse(value: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(value)
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
                .map(|timestamp| timestamp.and_utc().fixed_offset())
        })
        .or_else(|_| {
            NaiveDate::parse_from_str(value, "%Y-%m-%d")
                .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rfc3339() -> Result<(), ParseError> {
        let timestamp = parse("2024-06-01T00:00:00+01:00")?;
        assert_eq!(timestamp.offset().local_minus_utc(), 3600);
        Ok(())
    }

    #[test]
    fn test_parse_naive_as_utc() -> Result<(), ParseError> {
        assert_eq!(parse("2024-06-01T12:30:00")?, parse("2024-06-01T12:30:00Z")?);
        assert_eq!(parse("2024-06-01")?, parse("2024-06-01T00:00:00Z")?);
        Ok(())
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse("yesterday").is_err());
    }
}

/// Time bucket the backend aggregates consumption into.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    Eq,
    PartialEq,
    Hash,
    clap::ValueEnum,
    serde::Serialize,
    serde::Deserialize
)]
#[serde(rename_all = "kebab-case")]
pub enum Grouping {
    /// Native resolution of the backend.
    #[default]
    HalfHour,

    Hour,
    Day,
    Week,
    Month,
    Quarter,
}

impl Grouping {
    /// Value of the `group_by` query parameter, or `None` when it must be omitted.
    pub const fn as_query_value(self) -> Option<&'static str> {
        match self {
            Self::HalfHour => None,
            Self::Hour => Some("hour"),
            Self::Day => Some("day"),
            Self::Week => Some("week"),
            Self::Month => Some("month"),
            Self::Quarter => Some("quarter"),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::ValueEnum;

    use super::*;

    #[test]
    fn test_half_hour_is_omitted() {
        assert_eq!(Grouping::default(), Grouping::HalfHour);
        assert_eq!(Grouping::HalfHour.as_query_value(), None);
    }

    #[test]
    fn test_query_tokens() {
        let tokens: Vec<_> = Grouping::value_variants()
            .iter()
            .filter_map(|grouping| grouping.as_query_value())
            .collect();
        assert_eq!(tokens, ["hour", "day", "week", "month", "quarter"]);
    }

    #[test]
    fn test_parse_cli_token() -> Result<(), String> {
        assert_eq!(Grouping::from_str("half-hour", true)?, Grouping::HalfHour);
        assert_eq!(Grouping::from_str("quarter", true)?, Grouping::Quarter);
        Ok(())
    }
}

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::{
    energy,
    prelude::*,
    quantity::{Quantity, Unit},
};

/// Energy consumed over one interval, in kWh.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionRecord {
    #[serde(alias = "consumption")]
    pub value: f64,

    pub interval_start: DateTime<FixedOffset>,
    pub interval_end: DateTime<FixedOffset>,
}

impl ConsumptionRecord {
    pub const fn new(
        value: f64,
        interval_start: DateTime<FixedOffset>,
        interval_end: DateTime<FixedOffset>,
    ) -> Self {
        Self { value, interval_start, interval_end }
    }

    pub const fn energy(&self) -> Quantity {
        Quantity::new(self.value, Unit::KilowattHour)
    }

    /// Same interval, with the value replaced by the CO2-equivalent mass in kg.
    pub fn to_co2(&self) -> Result<Self> {
        let kilograms = energy::to_co2(self.energy())?;
        Ok(Self { value: (kilograms * 1000.0).round() / 1000.0, ..*self })
    }
}

/// Electricity meter the consumption is read from.
#[derive(Clone, Debug, Eq, PartialEq, Hash, derive_more::Display)]
#[display("{mpan}/{serial_number}")]
pub struct MeterId {
    pub mpan: String,
    pub serial_number: String,
}

/// Optional bounds of a consumption query.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, bon::Builder)]
pub struct Period {
    pub from: Option<DateTime<FixedOffset>>,
    pub to: Option<DateTime<FixedOffset>>,
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::TimeZone;

    use super::*;

    fn utc(hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    #[test]
    fn test_deserialize_ok() -> Result<(), serde_json::Error> {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "consumption": 0.224,
                "interval_start": "2024-03-01T00:00:00Z",
                "interval_end": "2024-03-01T00:30:00Z"
            }
        "#;
        let record = serde_json::from_str::<ConsumptionRecord>(RESPONSE)?;
        assert_eq!(record, ConsumptionRecord::new(0.224, utc(0, 0), utc(0, 30)));
        Ok(())
    }

    #[test]
    fn test_deserialize_with_offset() -> Result<(), serde_json::Error> {
        // language=JSON
        const RESPONSE: &str = r#"
            {
                "consumption": 1.5,
                "interval_start": "2024-06-01T00:00:00+01:00",
                "interval_end": "2024-06-01T00:30:00+01:00"
            }
        "#;
        let record = serde_json::from_str::<ConsumptionRecord>(RESPONSE)?;
        assert_eq!(record.interval_start.offset().local_minus_utc(), 3600);
        Ok(())
    }

    #[test]
    fn test_serialize() -> Result<(), serde_json::Error> {
        let json = serde_json::to_string(&ConsumptionRecord::new(0.5, utc(1, 0), utc(1, 30)))?;
        assert_eq!(
            json,
            r#"{"value":0.5,"interval_start":"2024-03-01T01:00:00Z","interval_end":"2024-03-01T01:30:00Z"}"#
        );
        Ok(())
    }

    #[test]
    fn test_to_co2() -> Result {
        let record = ConsumptionRecord::new(12.345, utc(0, 0), utc(0, 30)).to_co2()?;
        assert_abs_diff_eq!(record.value, 2.556, epsilon = 1e-12);
        assert_eq!(record.interval_start, utc(0, 0));
        assert_eq!(record.interval_end, utc(0, 30));
        Ok(())
    }

    #[test]
    fn test_meter_id_display() {
        let meter = MeterId { mpan: "1012345678900".to_owned(), serial_number: "21L1234567".to_owned() };
        assert_eq!(meter.to_string(), "1012345678900/21L1234567");
    }

    #[test]
    fn test_period_builder() {
        let period = Period::builder().from(utc(0, 0)).build();
        assert_eq!(period.from, Some(utc(0, 0)));
        assert_eq!(period.to, None);
    }
}

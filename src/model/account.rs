//! Read-only account hierarchy, passed through as returned by the backend.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[must_use]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub number: String,

    #[serde(default)]
    pub properties: Vec<Property>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Option<u64>,
    pub moved_in_at: Option<DateTime<FixedOffset>>,
    pub moved_out_at: Option<DateTime<FixedOffset>>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_line_3: Option<String>,
    pub town: Option<String>,
    pub county: Option<String>,
    pub postcode: Option<String>,

    #[serde(default)]
    pub electricity_meter_points: Vec<ElectricityMeterPoint>,

    #[serde(default)]
    pub gas_meter_points: Vec<GasMeterPoint>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElectricityMeterPoint {
    pub mpan: String,
    pub profile_class: Option<u32>,
    pub consumption_standard: Option<u32>,

    #[serde(default)]
    pub meters: Vec<ElectricityMeter>,

    #[serde(default)]
    pub agreements: Vec<Agreement>,

    pub is_export: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GasMeterPoint {
    pub mprn: String,
    pub consumption_standard: Option<u32>,

    #[serde(default)]
    pub meters: Vec<GasMeter>,

    #[serde(default)]
    pub agreements: Vec<Agreement>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct ElectricityMeter {
    pub serial_number: String,

    #[serde(default)]
    pub registers: Vec<Register>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Register {
    pub identifier: String,
    pub rate: String,
    pub is_settlement_register: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GasMeter {
    pub serial_number: String,
}

#[serde_with::skip_serializing_none]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Agreement {
    pub tariff_code: String,
    pub valid_from: Option<DateTime<FixedOffset>>,
    pub valid_to: Option<DateTime<FixedOffset>>,
}

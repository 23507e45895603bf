use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use crate::{prelude::*, quantity::Dimension};

const WATT_HOUR_JOULES: f64 = 3600.0;

/// Concrete unit of measurement.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    serde_with::SerializeDisplay,
    serde_with::DeserializeFromStr
)]
pub enum Unit {
    Second,
    Minute,
    Hour,

    /// Thermochemical calorie.
    Calorie,
    Electronvolt,
    Joule,
    Kilojoule,
    Megajoule,
    WattHour,
    KilowattHour,
    MegawattHour,

    Watt,
    Kilowatt,
    Megawatt,

    /// Mechanical horsepower.
    Horsepower,

    Gram,
    Kilogram,
    Tonne,

    KilogramPerKilowattHour,
    GramPerKilowattHour,
}

impl Unit {
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Second => "s",
            Self::Minute => "min",
            Self::Hour => "h",
            Self::Calorie => "cal",
            Self::Electronvolt => "eV",
            Self::Joule => "J",
            Self::Kilojoule => "kJ",
            Self::Megajoule => "MJ",
            Self::WattHour => "Wh",
            Self::KilowattHour => "kWh",
            Self::MegawattHour => "MWh",
            Self::Watt => "W",
            Self::Kilowatt => "kW",
            Self::Megawatt => "MW",
            Self::Horsepower => "hp",
            Self::Gram => "g",
            Self::Kilogram => "kg",
            Self::Tonne => "t",
            Self::KilogramPerKilowattHour => "kg/kWh",
            Self::GramPerKilowattHour => "g/kWh",
        }
    }

    pub const fn dimension(self) -> Dimension {
        match self {
            Self::Second | Self::Minute | Self::Hour => Dimension::DURATION,
            Self::Calorie
            | Self::Electronvolt
            | Self::Joule
            | Self::Kilojoule
            | Self::Megajoule
            | Self::WattHour
            | Self::KilowattHour
            | Self::MegawattHour => Dimension::ENERGY,
            Self::Watt | Self::Kilowatt | Self::Megawatt | Self::Horsepower => Dimension::POWER,
            Self::Gram | Self::Kilogram | Self::Tonne => Dimension::MASS,
            Self::KilogramPerKilowattHour | Self::GramPerKilowattHour => {
                Dimension::EMISSION_INTENSITY
            }
        }
    }

    /// Magnitude of one unit expressed in SI base units (s, J, W, kg, kg/J).
    pub const fn scale(self) -> f64 {
        match self {
            Self::Second | Self::Joule | Self::Watt | Self::Kilogram => 1.0,
            Self::Minute => 60.0,
            Self::Hour | Self::WattHour => WATT_HOUR_JOULES,
            Self::Calorie => 4.184,
            Self::Electronvolt => 1.602_176_634e-19,
            Self::Kilojoule | Self::Kilowatt | Self::Tonne => 1e3,
            Self::Megajoule | Self::Megawatt => 1e6,
            Self::KilowattHour => WATT_HOUR_JOULES * 1e3,
            Self::MegawattHour => WATT_HOUR_JOULES * 1e6,
            Self::Horsepower => 745.699_871_582_270_2,
            Self::Gram => 1e-3,
            Self::KilogramPerKilowattHour => 1.0 / (WATT_HOUR_JOULES * 1e3),
            Self::GramPerKilowattHour => 1e-3 / (WATT_HOUR_JOULES * 1e3),
        }
    }

    pub fn ensure_dimension(self, expected: Dimension) -> Result<Self> {
        if self.dimension() == expected {
            Ok(self)
        } else {
            Err(Error::Dimensionality { expected, actual: self.dimension() })
        }
    }
}

impl Display for Unit {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = Error;

    /// Parse a unit symbol or name, ignoring case.
    fn from_str(unit: &str) -> Result<Self> {
        match unit.trim().to_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(Self::Second),
            "m" | "min" | "minute" | "minutes" => Ok(Self::Minute),
            "h" | "hr" | "hour" | "hours" => Ok(Self::Hour),
            "cal" | "calorie" => Ok(Self::Calorie),
            "ev" | "electronvolt" => Ok(Self::Electronvolt),
            "j" | "joule" => Ok(Self::Joule),
            "kj" | "kilojoule" => Ok(Self::Kilojoule),
            "mj" | "megajoule" => Ok(Self::Megajoule),
            "wh" | "watt-hour" => Ok(Self::WattHour),
            "kwh" | "kilowatt-hour" => Ok(Self::KilowattHour),
            "mwh" | "megawatt-hour" => Ok(Self::MegawattHour),
            "w" | "watt" => Ok(Self::Watt),
            "kw" | "kilowatt" => Ok(Self::Kilowatt),
            "mw" | "megawatt" => Ok(Self::Megawatt),
            "hp" | "horsepower" => Ok(Self::Horsepower),
            "g" | "gram" => Ok(Self::Gram),
            "kg" | "kilogram" => Ok(Self::Kilogram),
            "t" | "tonne" => Ok(Self::Tonne),
            "kg/kwh" => Ok(Self::KilogramPerKilowattHour),
            "g/kwh" => Ok(Self::GramPerKilowattHour),
            _ => Err(Error::InvalidArgument(format!("unknown unit `{unit}`"))),
        }
    }
}

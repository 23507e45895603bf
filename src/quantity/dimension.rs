//! Dimensional analysis over the base dimensions the crate needs.

use std::{
    fmt::{Display, Formatter},
    ops::{Div, Mul},
};

use itertools::Itertools;

/// Physical dimension as exponents of mass, length, and time.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Dimension {
    exponents: [i8; 3],
}

impl Dimension {
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0);

    /// `[M]`
    pub const MASS: Self = Self::new(1, 0, 0);

    /// `[T]`
    pub const DURATION: Self = Self::new(0, 0, 1);

    /// `[M L² T⁻²]`
    pub const ENERGY: Self = Self::new(1, 2, -2);

    /// `[M L² T⁻³]`
    pub const POWER: Self = Self::ENERGY.divide(Self::DURATION);

    /// Mass per energy, for example kg CO2 per kWh.
    pub const EMISSION_INTENSITY: Self = Self::MASS.divide(Self::ENERGY);

    const SYMBOLS: [&'static str; 3] = ["M", "L", "T"];

    pub const fn new(mass: i8, length: i8, time: i8) -> Self {
        Self { exponents: [mass, length, time] }
    }

    pub const fn multiply(self, rhs: Self) -> Self {
        let [m, l, t] = self.exponents;
        let [rhs_m, rhs_l, rhs_t] = rhs.exponents;
        Self::new(m + rhs_m, l + rhs_l, t + rhs_t)
    }

    pub const fn divide(self, rhs: Self) -> Self {
        let [m, l, t] = self.exponents;
        let [rhs_m, rhs_l, rhs_t] = rhs.exponents;
        Self::new(m - rhs_m, l - rhs_l, t - rhs_t)
    }

    pub const fn name(self) -> Option<&'static str> {
        match self.exponents {
            [0, 0, 0] => Some("dimensionless"),
            [1, 0, 0] => Some("mass"),
            [0, 0, 1] => Some("duration"),
            [1, 2, -2] => Some("energy"),
            [1, 2, -3] => Some("power"),
            [0, -2, 2] => Some("emission intensity"),
            _ => None,
        }
    }
}

impl Mul for Dimension {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(rhs)
    }
}

impl Div for Dimension {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.divide(rhs)
    }
}

impl Display for Dimension {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = self.name() {
            return formatter.write_str(name);
        }
        let signature = self
            .exponents
            .iter()
            .zip(Self::SYMBOLS)
            .filter(|(exponent, _)| **exponent != 0)
            .map(|(exponent, symbol)| match exponent {
                1 => symbol.to_owned(),
                _ => format!("{symbol}^{exponent}"),
            })
            .join(" ");
        write!(formatter, "[{signature}]")
    }
}

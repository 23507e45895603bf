//! Physical quantities with dimensionally checked unit conversion.

mod dimension;
mod unit;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use self::{dimension::Dimension, unit::Unit};
use crate::prelude::*;

/// Magnitude paired with the unit it is expressed in.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub magnitude: f64,
    pub unit: Unit,
}

impl Quantity {
    pub const fn new(magnitude: f64, unit: Unit) -> Self {
        Self { magnitude, unit }
    }

    pub const fn dimension(self) -> Dimension {
        self.unit.dimension()
    }

    /// Magnitude in the SI base unit of the quantity's dimension.
    #[must_use]
    pub fn si_magnitude(self) -> f64 {
        self.magnitude * self.unit.scale()
    }

    pub fn ensure_dimension(self, expected: Dimension) -> Result<Self> {
        self.unit.ensure_dimension(expected)?;
        Ok(self)
    }

    /// Magnitude of the quantity expressed in `unit`.
    ///
    /// Fails with [`Error::Dimensionality`] when `unit` measures something else.
    pub fn convert(self, unit: Unit) -> Result<f64> {
        unit.ensure_dimension(self.dimension())?;
        if unit == self.unit {
            Ok(self.magnitude)
        } else {
            Ok(self.si_magnitude() / unit.scale())
        }
    }

    pub fn to(self, unit: Unit) -> Result<Self> {
        Ok(Self::new(self.convert(unit)?, unit))
    }
}

impl Display for Quantity {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.magnitude, formatter)?;
        write!(formatter, " {}", self.unit)
    }
}

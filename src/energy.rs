//! Energy, power, and CO2-equivalent calculations on top of [`Quantity`].

use crate::{
    prelude::*,
    quantity::{Dimension, Quantity, Unit},
};

/// Grid electricity emission factor.
pub const CO2_EMISSION_FACTOR: Quantity = Quantity::new(0.207_07, Unit::KilogramPerKilowattHour);

pub const fn co2_emission_factor() -> Quantity {
    CO2_EMISSION_FACTOR
}

/// Average power needed to transfer `energy` over `duration`, expressed in `unit`.
pub fn power_from_energy(energy: Quantity, duration: Quantity, unit: Unit) -> Result<f64> {
    energy.unit.ensure_dimension(Dimension::ENERGY)?;
    duration.unit.ensure_dimension(Dimension::DURATION)?;
    if duration.magnitude == 0.0 {
        return Err(Error::InvalidArgument("duration must be non-zero".to_owned()));
    }
    unit.ensure_dimension(Dimension::POWER)?;
    Quantity::new(energy.si_magnitude() / duration.si_magnitude(), Unit::Watt).convert(unit)
}

/// Energy transferred by `power` sustained over `duration`, expressed in `unit`.
pub fn energy_from_power(power: Quantity, duration: Quantity, unit: Unit) -> Result<f64> {
    power.unit.ensure_dimension(Dimension::POWER)?;
    duration.unit.ensure_dimension(Dimension::DURATION)?;
    unit.ensure_dimension(Dimension::ENERGY)?;
    Quantity::new(power.si_magnitude() * duration.si_magnitude(), Unit::Joule).convert(unit)
}

/// CO2-equivalent mass in kilograms for the given energy.
pub fn to_co2(energy: Quantity) -> Result<f64> {
    let kilowatt_hours = energy.ensure_dimension(Dimension::ENERGY)?.convert(Unit::KilowattHour)?;
    let factor = co2_emission_factor().convert(Unit::KilogramPerKilowattHour)?;
    Ok(kilowatt_hours * factor)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_emission_factor() {
        assert_eq!(co2_emission_factor(), Quantity::new(0.20707, Unit::KilogramPerKilowattHour));
        assert_eq!(co2_emission_factor().dimension(), Dimension::EMISSION_INTENSITY);
    }

    #[test]
    fn test_emission_factor_in_grams() -> Result {
        assert_abs_diff_eq!(
            co2_emission_factor().convert(Unit::GramPerKilowattHour)?,
            207.07,
            epsilon = 1e-9
        );
        Ok(())
    }

    #[test]
    fn test_power_from_energy() -> Result {
        let power = power_from_energy(
            Quantity::new(1000.0, Unit::Kilojoule),
            Quantity::new(1.0, Unit::Hour),
            Unit::Kilowatt,
        )?;
        assert_abs_diff_eq!(power, 0.2778, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn test_power_from_energy_in_watts() -> Result {
        let power = power_from_energy(
            Quantity::new(1.5, Unit::KilowattHour),
            Quantity::new(30.0, Unit::Minute),
            Unit::Watt,
        )?;
        assert_abs_diff_eq!(power, 3000.0, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_power_from_energy_zero_duration() {
        let result = power_from_energy(
            Quantity::new(1000.0, Unit::Kilojoule),
            Quantity::new(0.0, Unit::Hour),
            Unit::Watt,
        );
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_power_from_energy_rejects_dimensions() {
        let hour = Quantity::new(1.0, Unit::Hour);
        let mass = Quantity::new(1000.0, Unit::Kilogram);
        let energy = Quantity::new(1000.0, Unit::Kilojoule);
        assert!(matches!(
            power_from_energy(mass, hour, Unit::Kilowatt),
            Err(Error::Dimensionality { .. })
        ));
        assert!(matches!(
            power_from_energy(energy, mass, Unit::Kilowatt),
            Err(Error::Dimensionality { .. })
        ));
        assert!(matches!(
            power_from_energy(energy, hour, Unit::Kilogram),
            Err(Error::Dimensionality { .. })
        ));
    }

    #[test]
    fn test_energy_from_power() -> Result {
        let energy = energy_from_power(
            Quantity::new(0.2778, Unit::Kilowatt),
            Quantity::new(1.0, Unit::Hour),
            Unit::Kilojoule,
        )?;
        assert_abs_diff_eq!(energy, 1000.08, epsilon = 1e-6);
        Ok(())
    }

    #[test]
    fn test_energy_from_power_zero_duration() -> Result {
        let energy = energy_from_power(
            Quantity::new(3.0, Unit::Kilowatt),
            Quantity::new(0.0, Unit::Second),
            Unit::KilowattHour,
        )?;
        assert_abs_diff_eq!(energy, 0.0);
        Ok(())
    }

    #[test]
    fn test_energy_from_power_rejects_dimensions() {
        let hour = Quantity::new(1.0, Unit::Hour);
        let mass = Quantity::new(0.2778, Unit::Kilogram);
        let power = Quantity::new(0.2778, Unit::Kilowatt);
        assert!(energy_from_power(mass, hour, Unit::Kilojoule).is_err());
        assert!(energy_from_power(power, mass, Unit::Kilojoule).is_err());
        assert!(energy_from_power(power, hour, Unit::Kilogram).is_err());
    }

    #[test]
    fn test_to_co2() -> Result {
        assert_abs_diff_eq!(to_co2(Quantity::new(1000.0, Unit::KilowattHour))?, 207.07, epsilon = 1e-9);
        assert_abs_diff_eq!(to_co2(Quantity::new(1.0, Unit::MegawattHour))?, 207.07, epsilon = 1e-9);
        Ok(())
    }

    #[test]
    fn test_to_co2_rejects_mass() {
        assert!(matches!(
            to_co2(Quantity::new(1000.0, Unit::Kilogram)),
            Err(Error::Dimensionality { expected: Dimension::ENERGY, actual: Dimension::MASS })
        ));
    }
}

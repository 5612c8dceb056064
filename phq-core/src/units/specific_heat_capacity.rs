//! Specific heat capacity units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of specific heat capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = JoulePerKilogramPerKelvin, dimensions = Dimensions::new(-2, 2, 0, 0, -1, 0, 0))]
pub enum SpecificHeatCapacityUnit {
    /// Joule per kilogram per kelvin.
    #[unit(symbol = "J/kg/K", factor = 1.0)]
    JoulePerKilogramPerKelvin,
    /// Kilojoule per kilogram per kelvin.
    #[unit(symbol = "kJ/kg/K", factor = 1e3)]
    KilojoulePerKilogramPerKelvin,
    /// Joule per gram per kelvin.
    #[unit(symbol = "J/g/K", factor = 1e3)]
    JoulePerGramPerKelvin,
    /// Nanojoule per gram per kelvin.
    #[unit(symbol = "nJ/g/K", factor = 1e-6)]
    NanojoulePerGramPerKelvin,
}

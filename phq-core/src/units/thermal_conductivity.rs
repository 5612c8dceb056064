//! Thermal conductivity units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of thermal conductivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = WattPerMetrePerKelvin, dimensions = Dimensions::new(-3, 1, 1, 0, -1, 0, 0))]
pub enum ThermalConductivityUnit {
    /// Watt per metre per kelvin.
    #[unit(symbol = "W/m/K", factor = 1.0)]
    WattPerMetrePerKelvin,
    /// Kilowatt per metre per kelvin.
    #[unit(symbol = "kW/m/K", factor = 1e3)]
    KilowattPerMetrePerKelvin,
    /// Nanowatt per millimetre per kelvin.
    #[unit(symbol = "nW/mm/K", factor = 1e-6)]
    NanowattPerMillimetrePerKelvin,
}

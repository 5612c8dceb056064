//! Energy flux units, used by heat flux.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of energy flux.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = WattPerSquareMetre, dimensions = Dimensions::new(-3, 0, 1, 0, 0, 0, 0))]
pub enum EnergyFluxUnit {
    /// Watt per square metre.
    #[unit(symbol = "W/m^2", factor = 1.0)]
    WattPerSquareMetre,
    /// Kilowatt per square metre.
    #[unit(symbol = "kW/m^2", factor = 1e3)]
    KilowattPerSquareMetre,
    /// Nanowatt per square millimetre.
    #[unit(symbol = "nW/mm^2", factor = 1e-3)]
    NanowattPerSquareMillimetre,
}

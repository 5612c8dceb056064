//! Mass density units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of mass density.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = KilogramPerCubicMetre, dimensions = Dimensions::new(0, -3, 1, 0, 0, 0, 0))]
pub enum MassDensityUnit {
    /// Kilogram per cubic metre.
    #[unit(symbol = "kg/m^3", factor = 1.0)]
    KilogramPerCubicMetre,
    /// Gram per cubic centimetre.
    #[unit(symbol = "g/cm^3", factor = 1e3)]
    GramPerCubicCentimetre,
    /// Gram per millilitre.
    #[unit(symbol = "g/mL", factor = 1e3)]
    GramPerMillilitre,
    /// Pound per cubic foot.
    #[unit(symbol = "lb/ft^3", factor = 0.45359237 / (0.3048 * 0.3048 * 0.3048))]
    PoundPerCubicFoot,
}

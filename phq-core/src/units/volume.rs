//! Volume units.
//!
//! `L` and `mL` are the litre and the millilitre, equal to the cubic decimetre and the cubic
//! centimetre.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = CubicMetre, dimensions = Dimensions::new(0, 3, 0, 0, 0, 0, 0))]
pub enum VolumeUnit {
    /// Cubic kilometre.
    #[unit(symbol = "km^3", factor = 1e9)]
    CubicKilometre,
    /// Cubic metre.
    #[unit(symbol = "m^3", factor = 1.0)]
    CubicMetre,
    /// Cubic decimetre.
    #[unit(symbol = "dm^3", factor = 1e-3)]
    CubicDecimetre,
    /// Litre.
    #[unit(symbol = "L", factor = 1e-3)]
    Litre,
    /// Cubic centimetre.
    #[unit(symbol = "cm^3", factor = 1e-6)]
    CubicCentimetre,
    /// Millilitre.
    #[unit(symbol = "mL", factor = 1e-6)]
    Millilitre,
    /// Cubic millimetre.
    #[unit(symbol = "mm^3", factor = 1e-9)]
    CubicMillimetre,
    /// Cubic mile.
    #[unit(symbol = "mi^3", factor = 1609.344 * 1609.344 * 1609.344)]
    CubicMile,
    /// Cubic yard.
    #[unit(symbol = "yd^3", factor = 0.9144 * 0.9144 * 0.9144)]
    CubicYard,
    /// Cubic foot.
    #[unit(symbol = "ft^3", factor = 0.3048 * 0.3048 * 0.3048)]
    CubicFoot,
    /// Cubic inch.
    #[unit(symbol = "in^3", factor = 0.0254 * 0.0254 * 0.0254)]
    CubicInch,
}

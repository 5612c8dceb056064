//! Length units.
//!
//! The standard unit is the metre. Imperial units use their international definitions (the inch is
//! exactly `0.0254 m`, the mile `1609.344 m`).

use crate::Dimensions;
use phq_derive::Unit;

/// Units of length.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Metre, dimensions = Dimensions::new(0, 1, 0, 0, 0, 0, 0))]
pub enum LengthUnit {
    /// Kilometre (`1000 m`).
    #[unit(symbol = "km", factor = 1e3)]
    Kilometre,
    /// Metre (SI base unit).
    #[unit(symbol = "m", factor = 1.0)]
    Metre,
    /// Decimetre.
    #[unit(symbol = "dm", factor = 1e-1)]
    Decimetre,
    /// Centimetre.
    #[unit(symbol = "cm", factor = 1e-2)]
    Centimetre,
    /// Millimetre.
    #[unit(symbol = "mm", factor = 1e-3)]
    Millimetre,
    /// Micrometre.
    #[unit(symbol = "μm", factor = 1e-6)]
    Micrometre,
    /// Nanometre.
    #[unit(symbol = "nm", factor = 1e-9)]
    Nanometre,
    /// Statute mile.
    #[unit(symbol = "mi", factor = 1609.344)]
    Mile,
    /// Nautical mile.
    #[unit(symbol = "nmi", factor = 1852.0)]
    NauticalMile,
    /// Yard.
    #[unit(symbol = "yd", factor = 0.9144)]
    Yard,
    /// Foot.
    #[unit(symbol = "ft", factor = 0.3048)]
    Foot,
    /// Inch.
    #[unit(symbol = "in", factor = 0.0254)]
    Inch,
}

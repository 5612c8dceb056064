//! Area units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = SquareMetre, dimensions = Dimensions::new(0, 2, 0, 0, 0, 0, 0))]
pub enum AreaUnit {
    /// Square kilometre.
    #[unit(symbol = "km^2", factor = 1e6)]
    SquareKilometre,
    /// Hectare (`10 000 m^2`).
    #[unit(symbol = "ha", factor = 1e4)]
    Hectare,
    /// Square metre.
    #[unit(symbol = "m^2", factor = 1.0)]
    SquareMetre,
    /// Square decimetre.
    #[unit(symbol = "dm^2", factor = 1e-2)]
    SquareDecimetre,
    /// Square centimetre.
    #[unit(symbol = "cm^2", factor = 1e-4)]
    SquareCentimetre,
    /// Square millimetre.
    #[unit(symbol = "mm^2", factor = 1e-6)]
    SquareMillimetre,
    /// Square mile.
    #[unit(symbol = "mi^2", factor = 1609.344 * 1609.344)]
    SquareMile,
    /// International acre.
    #[unit(symbol = "ac", factor = 4046.8564224)]
    Acre,
    /// Square yard.
    #[unit(symbol = "yd^2", factor = 0.9144 * 0.9144)]
    SquareYard,
    /// Square foot.
    #[unit(symbol = "ft^2", factor = 0.3048 * 0.3048)]
    SquareFoot,
    /// Square inch.
    #[unit(symbol = "in^2", factor = 0.0254 * 0.0254)]
    SquareInch,
}

//! Diffusivity units, shared by kinematic viscosity and thermal diffusivity.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of diffusivity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = SquareMetrePerSecond, dimensions = Dimensions::new(-1, 2, 0, 0, 0, 0, 0))]
pub enum DiffusivityUnit {
    /// Square metre per second.
    #[unit(symbol = "m^2/s", factor = 1.0)]
    SquareMetrePerSecond,
    /// Square centimetre per second.
    #[unit(symbol = "cm^2/s", factor = 1e-4)]
    SquareCentimetrePerSecond,
    /// Square millimetre per second.
    #[unit(symbol = "mm^2/s", factor = 1e-6)]
    SquareMillimetrePerSecond,
    /// Stokes (CGS).
    #[unit(symbol = "St", factor = 1e-4)]
    Stokes,
    /// Centistokes.
    #[unit(symbol = "cSt", factor = 1e-6)]
    Centistokes,
    /// Square foot per second.
    #[unit(symbol = "ft^2/s", factor = 0.3048 * 0.3048)]
    SquareFootPerSecond,
    /// Square inch per second.
    #[unit(symbol = "in^2/s", factor = 0.0254 * 0.0254)]
    SquareInchPerSecond,
}

//! Dynamic viscosity units, shared by shear and bulk dynamic viscosity.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of dynamic viscosity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = PascalSecond, dimensions = Dimensions::new(-1, -1, 1, 0, 0, 0, 0))]
pub enum DynamicViscosityUnit {
    /// Pascal-second.
    #[unit(symbol = "Pa·s", factor = 1.0)]
    PascalSecond,
    /// Kilopascal-second.
    #[unit(symbol = "kPa·s", factor = 1e3)]
    KilopascalSecond,
    /// Megapascal-second.
    #[unit(symbol = "MPa·s", factor = 1e6)]
    MegapascalSecond,
    /// Gigapascal-second.
    #[unit(symbol = "GPa·s", factor = 1e9)]
    GigapascalSecond,
    /// Poise (CGS).
    #[unit(symbol = "P", factor = 0.1)]
    Poise,
    /// Centipoise.
    #[unit(symbol = "cP", factor = 1e-3)]
    Centipoise,
}

//! Mass units.
//!
//! The standard unit is the kilogram, the SI base unit, not the gram.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of mass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Kilogram, dimensions = Dimensions::new(0, 0, 1, 0, 0, 0, 0))]
pub enum MassUnit {
    /// Kilogram (SI base unit).
    #[unit(symbol = "kg", factor = 1.0)]
    Kilogram,
    /// Gram.
    #[unit(symbol = "g", factor = 1e-3)]
    Gram,
    /// Milligram.
    #[unit(symbol = "mg", factor = 1e-6)]
    Milligram,
    /// Metric ton (`1000 kg`).
    #[unit(symbol = "t", factor = 1e3)]
    MetricTon,
    /// Avoirdupois pound.
    #[unit(symbol = "lb", factor = 0.45359237)]
    Pound,
}

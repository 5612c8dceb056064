//! Time units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Second, dimensions = Dimensions::new(1, 0, 0, 0, 0, 0, 0))]
pub enum TimeUnit {
    /// Nanosecond.
    #[unit(symbol = "ns", factor = 1e-9)]
    Nanosecond,
    /// Microsecond.
    #[unit(symbol = "μs", factor = 1e-6)]
    Microsecond,
    /// Millisecond.
    #[unit(symbol = "ms", factor = 1e-3)]
    Millisecond,
    /// Second (SI base unit).
    #[unit(symbol = "s", factor = 1.0)]
    Second,
    /// Minute (`60 s`).
    #[unit(symbol = "min", factor = 60.0)]
    Minute,
    /// Hour (`3600 s`).
    #[unit(symbol = "hr", factor = 3600.0)]
    Hour,
}

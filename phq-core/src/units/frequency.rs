//! Frequency units.
//!
//! Also used by rate quantities such as strain rate and velocity gradient, which share the
//! dimension `T^(-1)`.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of frequency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Hertz, dimensions = Dimensions::new(-1, 0, 0, 0, 0, 0, 0))]
pub enum FrequencyUnit {
    /// Hertz.
    #[unit(symbol = "Hz", factor = 1.0)]
    Hertz,
    /// Kilohertz.
    #[unit(symbol = "kHz", factor = 1e3)]
    Kilohertz,
    /// Megahertz.
    #[unit(symbol = "MHz", factor = 1e6)]
    Megahertz,
    /// Gigahertz.
    #[unit(symbol = "GHz", factor = 1e9)]
    Gigahertz,
    /// Once per minute.
    #[unit(symbol = "/min", factor = 1.0 / 60.0)]
    PerMinute,
    /// Once per hour.
    #[unit(symbol = "/hr", factor = 1.0 / 3600.0)]
    PerHour,
}

//! Absolute temperature units.
//!
//! These scales are affine: Celsius and Fahrenheit carry an offset against the kelvin. Temperature
//! *differences* use the linear scales in
//! [`temperature_difference`](super::temperature_difference).
//!
//! ```rust
//! use phq_core::units::TemperatureUnit;
//! use phq_core::Unit;
//!
//! assert_eq!(TemperatureUnit::Celsius.to_standard(0.0), 273.15);
//! assert_eq!(TemperatureUnit::Kelvin.from_standard(0.0), 0.0);
//! ```

use crate::Dimensions;
use phq_derive::Unit;

/// Units of temperature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Kelvin, dimensions = Dimensions::new(0, 0, 0, 0, 1, 0, 0))]
pub enum TemperatureUnit {
    /// Kelvin (SI base unit).
    #[unit(symbol = "K", factor = 1.0)]
    Kelvin,
    /// Degree Celsius.
    #[unit(symbol = "°C", factor = 1.0, offset = 273.15)]
    Celsius,
    /// Degree Rankine.
    #[unit(symbol = "°R", factor = 5.0 / 9.0)]
    Rankine,
    /// Degree Fahrenheit.
    #[unit(symbol = "°F", factor = 5.0 / 9.0, offset = 459.67 * 5.0 / 9.0)]
    Fahrenheit,
}

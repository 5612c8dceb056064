//! Temperature difference units.
//!
//! Same symbols as [`TemperatureUnit`](super::TemperatureUnit), but purely linear: a difference of
//! `1 °C` is a difference of `1 K`.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of temperature difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Kelvin, dimensions = Dimensions::new(0, 0, 0, 0, 1, 0, 0))]
pub enum TemperatureDifferenceUnit {
    /// Kelvin.
    #[unit(symbol = "K", factor = 1.0)]
    Kelvin,
    /// Degree Celsius.
    #[unit(symbol = "°C", factor = 1.0)]
    Celsius,
    /// Degree Rankine.
    #[unit(symbol = "°R", factor = 5.0 / 9.0)]
    Rankine,
    /// Degree Fahrenheit.
    #[unit(symbol = "°F", factor = 5.0 / 9.0)]
    Fahrenheit,
}

//! Temperature gradient units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of temperature gradient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = KelvinPerMetre, dimensions = Dimensions::new(0, -1, 0, 0, 1, 0, 0))]
pub enum TemperatureGradientUnit {
    /// Kelvin per metre.
    #[unit(symbol = "K/m", factor = 1.0)]
    KelvinPerMetre,
    /// Degree Celsius per metre.
    #[unit(symbol = "°C/m", factor = 1.0)]
    CelsiusPerMetre,
    /// Kelvin per millimetre.
    #[unit(symbol = "K/mm", factor = 1e3)]
    KelvinPerMillimetre,
    /// Degree Celsius per millimetre.
    #[unit(symbol = "°C/mm", factor = 1e3)]
    CelsiusPerMillimetre,
    /// Degree Fahrenheit per foot.
    #[unit(symbol = "°F/ft", factor = 5.0 / 9.0 / 0.3048)]
    FahrenheitPerFoot,
    /// Degree Fahrenheit per inch.
    #[unit(symbol = "°F/in", factor = 5.0 / 9.0 / 0.0254)]
    FahrenheitPerInch,
}

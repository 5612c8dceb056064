//! Pressure and stress units.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of pressure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = Pascal, dimensions = Dimensions::new(-2, -1, 1, 0, 0, 0, 0))]
pub enum PressureUnit {
    /// Pascal.
    #[unit(symbol = "Pa", factor = 1.0)]
    Pascal,
    /// Kilopascal.
    #[unit(symbol = "kPa", factor = 1e3)]
    Kilopascal,
    /// Megapascal.
    #[unit(symbol = "MPa", factor = 1e6)]
    Megapascal,
    /// Gigapascal.
    #[unit(symbol = "GPa", factor = 1e9)]
    Gigapascal,
    /// Bar.
    #[unit(symbol = "bar", factor = 1e5)]
    Bar,
    /// Standard atmosphere.
    #[unit(symbol = "atm", factor = 101_325.0)]
    Atmosphere,
    /// Pound-force per square inch.
    #[unit(symbol = "psi", factor = 0.45359237 * 9.80665 / (0.0254 * 0.0254))]
    PoundPerSquareInch,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use approx::assert_relative_eq;

    #[test]
    fn common_pressures() {
        assert_relative_eq!(
            convert(1.0, PressureUnit::Atmosphere, PressureUnit::Kilopascal),
            101.325
        );
        assert_relative_eq!(convert(1.0, PressureUnit::Bar, PressureUnit::Pascal), 1e5);
        assert_relative_eq!(
            convert(1.0, PressureUnit::PoundPerSquareInch, PressureUnit::Pascal),
            6894.757293168361,
            max_relative = 1e-12
        );
    }
}

//! Speed units, shared by speed and velocity.

use crate::Dimensions;
use phq_derive::Unit;

/// Units of speed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Unit)]
#[unit(standard = MetrePerSecond, dimensions = Dimensions::new(-1, 1, 0, 0, 0, 0, 0))]
pub enum SpeedUnit {
    /// Metre per second.
    #[unit(symbol = "m/s", factor = 1.0)]
    MetrePerSecond,
    /// Kilometre per second.
    #[unit(symbol = "km/s", factor = 1e3)]
    KilometrePerSecond,
    /// Centimetre per second.
    #[unit(symbol = "cm/s", factor = 1e-2)]
    CentimetrePerSecond,
    /// Millimetre per second.
    #[unit(symbol = "mm/s", factor = 1e-3)]
    MillimetrePerSecond,
    /// Kilometre per hour.
    #[unit(symbol = "km/hr", factor = 1e3 / 3600.0)]
    KilometrePerHour,
    /// Mile per hour.
    #[unit(symbol = "mi/hr", factor = 1609.344 / 3600.0)]
    MilePerHour,
    /// Knot (nautical mile per hour).
    #[unit(symbol = "kn", factor = 1852.0 / 3600.0)]
    Knot,
    /// Foot per second.
    #[unit(symbol = "ft/s", factor = 0.3048)]
    FootPerSecond,
    /// Inch per second.
    #[unit(symbol = "in/s", factor = 0.0254)]
    InchPerSecond,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert;
    use approx::assert_relative_eq;

    #[test]
    fn road_and_sea_speeds() {
        assert_relative_eq!(
            convert(36.0, SpeedUnit::KilometrePerHour, SpeedUnit::MetrePerSecond),
            10.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            convert(1.0, SpeedUnit::Knot, SpeedUnit::KilometrePerHour),
            1.852,
            max_relative = 1e-12
        );
    }
}

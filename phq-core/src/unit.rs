//! Unit families and conversions.

use crate::dimension::Dimensions;
use crate::error::UnitParseError;
use crate::number::Number;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::str::FromStr;

/// Trait implemented by every **unit family** enum (one enum per measured dimension).
///
/// Every unit `u` of a family is related to the family's [`Unit::STANDARD`] unit by an affine map
/// `x_standard = factor(u) * x_u + offset(u)`. The offset is zero everywhere except on absolute
/// temperature scales; the standard unit has factor 1 and offset 0 (checked at compile time by the
/// derive).
///
/// Families are declared with `#[derive(Unit)]`:
///
/// ```rust
/// use phq_core::units::LengthUnit;
/// use phq_core::Unit;
///
/// assert_eq!(LengthUnit::STANDARD, LengthUnit::Metre);
/// assert_eq!(LengthUnit::Millimetre.abbreviation(), "mm");
/// assert_eq!("km".parse::<LengthUnit>().unwrap(), LengthUnit::Kilometre);
/// ```
///
/// # Invariants
///
/// - `factor` is finite and non-zero for every unit.
/// - `DIMENSIONS` is consistent with every conversion in the family.
pub trait Unit: Copy + Eq + Hash + Debug + Display + FromStr + 'static {
    /// Name of the family, used in error messages.
    const NAME: &'static str;

    /// The canonical unit in which quantities of this family are stored.
    const STANDARD: Self;

    /// Physical dimensions measured by this family.
    const DIMENSIONS: Dimensions;

    /// Every unit of the family, in declaration order.
    const ALL: &'static [Self];

    /// Printable abbreviation (e.g. `"m"` or `"Pa·s"`).
    fn abbreviation(self) -> &'static str;

    /// Multiplicative factor to the standard unit.
    fn factor(self) -> f64;

    /// Additive offset to the standard unit (non-zero only for affine scales).
    fn offset(self) -> f64;

    /// Expresses `value`, given in this unit, in the standard unit.
    #[inline]
    fn to_standard<N: Number>(self, value: N) -> N {
        value * N::from_f64(self.factor()) + N::from_f64(self.offset())
    }

    /// Expresses `value`, given in the standard unit, in this unit.
    #[inline]
    fn from_standard<N: Number>(self, value: N) -> N {
        (value - N::from_f64(self.offset())) / N::from_f64(self.factor())
    }

    /// Looks a unit up by its abbreviation. Surrounding whitespace is ignored.
    fn parse(text: &str) -> Result<Self, UnitParseError> {
        let trimmed = text.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.abbreviation() == trimmed)
            .ok_or_else(|| {
                log::debug!("no {} has the abbreviation {:?}", Self::NAME, trimmed);
                UnitParseError::new(Self::NAME, trimmed)
            })
    }
}

/// Zero-sized marker for one unit of a family, usable as a type parameter.
///
/// The derive emits one marker per unit, named after the variant, so `Millimetre` is the static
/// counterpart of `LengthUnit::Millimetre`. Markers power the `const fn` factories `create::<M>`
/// and `static_value::<M>`, the way a unit type parameter selects the unit at compile time.
pub trait StaticUnit: Copy + 'static {
    /// Family the unit belongs to.
    type Family: Unit;

    /// The runtime unit this marker stands for.
    const UNIT: Self::Family;

    /// Multiplicative factor to the standard unit.
    const FACTOR: f64;

    /// Additive offset to the standard unit.
    const OFFSET: f64;
}

/// Values that can be converted from one unit to another: plain numbers and the vector and dyadic
/// containers.
///
/// Containers convert component-wise.
pub trait Convertible: Sized {
    /// Converts `self` from `from` to `to`, in place.
    fn convert_in_place<U: Unit>(&mut self, from: U, to: U);

    /// Returns `self` converted from `from` to `to`.
    #[inline]
    fn converted<U: Unit>(mut self, from: U, to: U) -> Self {
        self.convert_in_place(from, to);
        self
    }
}

macro_rules! impl_convertible_for_float {
    ($($float:ty),+) => {
        $(
            impl Convertible for $float {
                #[inline]
                fn convert_in_place<U: Unit>(&mut self, from: U, to: U) {
                    if from != to {
                        *self = to.from_standard(from.to_standard(*self));
                    }
                }
            }
        )+
    };
}

impl_convertible_for_float!(f32, f64);

/// Converts `value` from unit `from` to unit `to` of the same family.
///
/// Conversions go through the family's standard unit. Converting to the same unit returns `value`
/// unchanged.
///
/// ```rust
/// use phq_core::units::{LengthUnit, TemperatureUnit};
/// use phq_core::convert;
///
/// assert_eq!(convert(1.0, LengthUnit::Metre, LengthUnit::Millimetre), 1000.0);
/// let boiling = convert(100.0_f64, TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit);
/// assert!((boiling - 212.0).abs() < 1e-9);
/// ```
#[inline]
pub fn convert<U: Unit, V: Convertible>(value: V, from: U, to: U) -> V {
    value.converted(from, to)
}

/// Converts `value` from unit `from` to unit `to` of the same family, in place.
#[inline]
pub fn convert_in_place<U: Unit, V: Convertible>(value: &mut V, from: U, to: U) {
    value.convert_in_place(from, to);
}

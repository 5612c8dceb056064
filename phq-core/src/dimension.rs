//! Physical dimensions.
//!
//! A physical dimension is the 7-tuple of integer exponents of the SI base dimensions, always kept
//! in the order time, length, mass, electric current, thermodynamic temperature, amount of
//! substance, luminous intensity (`T L M I Θ N J`). Dimensions form a free abelian group under
//! multiplication: multiplying adds exponents, dividing subtracts them, and
//! [`Dimensions::DIMENSIONLESS`] is the identity.
//!
//! Exponents are `i8` and wrap on overflow, in debug and release builds alike.
//!
//! ```rust
//! use phq_core::Dimensions;
//!
//! let speed = Dimensions::new(-1, 1, 0, 0, 0, 0, 0);
//! let duration = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
//! assert_eq!(speed * duration, Dimensions::new(0, 1, 0, 0, 0, 0, 0));
//! assert_eq!(speed.print(), "T^(-1)·L");
//! ```

use core::fmt::{self, Display, Formatter};
use core::ops::{Div, Mul};

/// Renders a single base-dimension exponent: empty for 0, the abbreviation for 1, `abbrev^n`
/// otherwise and `abbrev^(-n)` for negative exponents.
fn print_exponent(abbreviation: &str, exponent: i8) -> String {
    match exponent {
        0 => String::new(),
        1 => abbreviation.to_string(),
        n if n < 0 => format!("{}^({})", abbreviation, n),
        n => format!("{}^{}", abbreviation, n),
    }
}

macro_rules! base_dimension {
    ($(#[$doc:meta])* $name:ident, $abbreviation:literal, $label:literal) => {
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(i8);

        impl $name {
            /// Abbreviation used when printing.
            pub const ABBREVIATION: &'static str = $abbreviation;

            /// Human-readable label.
            pub const LABEL: &'static str = $label;

            /// Creates a base dimension with the given exponent.
            #[inline]
            pub const fn new(exponent: i8) -> Self {
                Self(exponent)
            }

            /// Returns the exponent.
            #[inline]
            pub const fn value(self) -> i8 {
                self.0
            }

            /// Prints the exponent: empty for 0, the abbreviation for 1, `abbrev^n` otherwise.
            pub fn print(self) -> String {
                print_exponent(Self::ABBREVIATION, self.0)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
                f.write_str(&self.print())
            }
        }
    };
}

/// Base physical dimensions.
pub mod base {
    use super::*;

    base_dimension!(
        /// Exponent of the time dimension (`T`).
        Time, "T", "Time"
    );
    base_dimension!(
        /// Exponent of the length dimension (`L`).
        Length, "L", "Length"
    );
    base_dimension!(
        /// Exponent of the mass dimension (`M`).
        Mass, "M", "Mass"
    );
    base_dimension!(
        /// Exponent of the electric current dimension (`I`).
        ElectricCurrent, "I", "Electric Current"
    );
    base_dimension!(
        /// Exponent of the thermodynamic temperature dimension (`Θ`).
        Temperature, "Θ", "Temperature"
    );
    base_dimension!(
        /// Exponent of the amount of substance dimension (`N`).
        SubstanceAmount, "N", "Substance Amount"
    );
    base_dimension!(
        /// Exponent of the luminous intensity dimension (`J`).
        LuminousIntensity, "J", "Luminous Intensity"
    );
}

use base::{
    ElectricCurrent, Length, LuminousIntensity, Mass, SubstanceAmount, Temperature, Time,
};

/// Physical dimensions of a quantity.
///
/// Equality is component-wise. The total order is lexicographic over `(T, L, M, I, Θ, N, J)`, which
/// is the field order, so the derived [`Ord`] is the documented one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Dimensions {
    time: Time,
    length: Length,
    mass: Mass,
    electric_current: ElectricCurrent,
    temperature: Temperature,
    substance_amount: SubstanceAmount,
    luminous_intensity: LuminousIntensity,
}

impl Dimensions {
    /// The dimensions of a pure number: every exponent is zero.
    pub const DIMENSIONLESS: Self = Self::new(0, 0, 0, 0, 0, 0, 0);

    /// Creates dimensions from the seven exponents in `T L M I Θ N J` order.
    #[inline]
    pub const fn new(
        time: i8,
        length: i8,
        mass: i8,
        electric_current: i8,
        temperature: i8,
        substance_amount: i8,
        luminous_intensity: i8,
    ) -> Self {
        Self {
            time: Time::new(time),
            length: Length::new(length),
            mass: Mass::new(mass),
            electric_current: ElectricCurrent::new(electric_current),
            temperature: Temperature::new(temperature),
            substance_amount: SubstanceAmount::new(substance_amount),
            luminous_intensity: LuminousIntensity::new(luminous_intensity),
        }
    }

    /// Time exponent.
    #[inline]
    pub const fn time(self) -> Time {
        self.time
    }

    /// Length exponent.
    #[inline]
    pub const fn length(self) -> Length {
        self.length
    }

    /// Mass exponent.
    #[inline]
    pub const fn mass(self) -> Mass {
        self.mass
    }

    /// Electric current exponent.
    #[inline]
    pub const fn electric_current(self) -> ElectricCurrent {
        self.electric_current
    }

    /// Thermodynamic temperature exponent.
    #[inline]
    pub const fn temperature(self) -> Temperature {
        self.temperature
    }

    /// Amount of substance exponent.
    #[inline]
    pub const fn substance_amount(self) -> SubstanceAmount {
        self.substance_amount
    }

    /// Luminous intensity exponent.
    #[inline]
    pub const fn luminous_intensity(self) -> LuminousIntensity {
        self.luminous_intensity
    }

    /// The seven exponents in `T L M I Θ N J` order.
    #[inline]
    pub const fn exponents(self) -> [i8; 7] {
        [
            self.time.value(),
            self.length.value(),
            self.mass.value(),
            self.electric_current.value(),
            self.temperature.value(),
            self.substance_amount.value(),
            self.luminous_intensity.value(),
        ]
    }

    /// Whether every exponent is zero.
    #[inline]
    pub const fn is_dimensionless(self) -> bool {
        self.equals(Self::DIMENSIONLESS)
    }

    /// Const equality, usable in compile-time assertions.
    pub const fn equals(self, other: Self) -> bool {
        let a = self.exponents();
        let b = other.exponents();
        let mut i = 0;
        while i < 7 {
            if a[i] != b[i] {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Const multiplication: adds exponents, wrapping on overflow.
    pub const fn product(self, other: Self) -> Self {
        let a = self.exponents();
        let b = other.exponents();
        Self::new(
            a[0].wrapping_add(b[0]),
            a[1].wrapping_add(b[1]),
            a[2].wrapping_add(b[2]),
            a[3].wrapping_add(b[3]),
            a[4].wrapping_add(b[4]),
            a[5].wrapping_add(b[5]),
            a[6].wrapping_add(b[6]),
        )
    }

    /// Const division: subtracts exponents, wrapping on overflow.
    pub const fn quotient(self, other: Self) -> Self {
        let a = self.exponents();
        let b = other.exponents();
        Self::new(
            a[0].wrapping_sub(b[0]),
            a[1].wrapping_sub(b[1]),
            a[2].wrapping_sub(b[2]),
            a[3].wrapping_sub(b[3]),
            a[4].wrapping_sub(b[4]),
            a[5].wrapping_sub(b[5]),
            a[6].wrapping_sub(b[6]),
        )
    }

    /// Const integer power: multiplies every exponent by `n`, wrapping on overflow.
    pub const fn pow(self, n: i8) -> Self {
        let a = self.exponents();
        Self::new(
            a[0].wrapping_mul(n),
            a[1].wrapping_mul(n),
            a[2].wrapping_mul(n),
            a[3].wrapping_mul(n),
            a[4].wrapping_mul(n),
            a[5].wrapping_mul(n),
            a[6].wrapping_mul(n),
        )
    }

    /// Concatenates the non-empty base prints in `T L M I Θ N J` order, separated by `·`.
    ///
    /// Returns an empty string for [`Dimensions::DIMENSIONLESS`].
    pub fn print(self) -> String {
        [
            self.time.print(),
            self.length.print(),
            self.mass.print(),
            self.electric_current.print(),
            self.temperature.print(),
            self.substance_amount.print(),
            self.luminous_intensity.print(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("·")
    }
}

impl Mul for Dimensions {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.product(rhs)
    }
}

impl Div for Dimensions {
    type Output = Self;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.quotient(rhs)
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of(d: Dimensions) -> u64 {
        let mut hasher = DefaultHasher::new();
        d.hash(&mut hasher);
        hasher.finish()
    }

    fn dims() -> impl Strategy<Value = Dimensions> {
        prop::array::uniform7(-8i8..=8)
            .prop_map(|e| Dimensions::new(e[0], e[1], e[2], e[3], e[4], e[5], e[6]))
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Base dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn base_print() {
        assert_eq!(base::Length::new(0).print(), "");
        assert_eq!(base::Length::new(1).print(), "L");
        assert_eq!(base::Length::new(3).print(), "L^3");
        assert_eq!(base::Time::new(-2).print(), "T^(-2)");
        assert_eq!(base::Temperature::new(-1).to_string(), "Θ^(-1)");
    }

    #[test]
    fn base_labels() {
        assert_eq!(base::SubstanceAmount::ABBREVIATION, "N");
        assert_eq!(base::ElectricCurrent::LABEL, "Electric Current");
        assert_eq!(base::LuminousIntensity::ABBREVIATION, "J");
    }

    #[test]
    fn base_ordering_is_integer_ordering() {
        assert!(base::Mass::new(-1) < base::Mass::new(0));
        assert!(base::Mass::new(2) > base::Mass::new(1));
        assert_eq!(base::Mass::new(2), base::Mass::new(2));
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Dimensions
    // ─────────────────────────────────────────────────────────────────────────────

    #[test]
    fn accessors() {
        let d = Dimensions::new(1, 2, 3, 4, 5, 6, 7);
        assert_eq!(d.time().value(), 1);
        assert_eq!(d.length().value(), 2);
        assert_eq!(d.mass().value(), 3);
        assert_eq!(d.electric_current().value(), 4);
        assert_eq!(d.temperature().value(), 5);
        assert_eq!(d.substance_amount().value(), 6);
        assert_eq!(d.luminous_intensity().value(), 7);
    }

    #[test]
    fn print_dimensions() {
        assert_eq!(Dimensions::DIMENSIONLESS.print(), "");
        assert_eq!(Dimensions::new(0, 1, 0, 0, 0, 0, 0).print(), "L");
        assert_eq!(Dimensions::new(-2, -1, 1, 0, 0, 0, 0).print(), "T^(-2)·L^(-1)·M");
        assert_eq!(
            Dimensions::new(-3, 1, 1, 0, -1, 0, 0).to_string(),
            "T^(-3)·L·M·Θ^(-1)"
        );
    }

    #[test]
    fn multiplication_and_division() {
        let length = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
        let time = Dimensions::new(1, 0, 0, 0, 0, 0, 0);
        let speed = length / time;
        assert_eq!(speed, Dimensions::new(-1, 1, 0, 0, 0, 0, 0));
        assert_eq!(speed * time, length);
        assert_eq!(length.pow(2), Dimensions::new(0, 2, 0, 0, 0, 0, 0));
        assert_eq!(time.pow(-1), Dimensions::new(-1, 0, 0, 0, 0, 0, 0));
    }

    #[test]
    fn exponents_wrap_on_overflow() {
        let length = Dimensions::new(0, 1, 0, 0, 0, 0, 0);
        let huge = Dimensions::new(0, 127, 0, 0, 0, 0, 0);
        let tiny = Dimensions::new(0, -128, 0, 0, 0, 0, 0);
        assert_eq!((huge * length).length().value(), -128);
        assert_eq!((tiny / length).length().value(), 127);
        assert_eq!(Dimensions::new(0, 100, 0, 0, 0, 0, 0).pow(2).length().value(), -56);
        assert_eq!(tiny.pow(-1).length().value(), -128);
    }

    #[test]
    fn ordering_is_lexicographic_from_time() {
        let a = Dimensions::new(0, 5, 0, 0, 0, 0, 0);
        let b = Dimensions::new(1, -5, 0, 0, 0, 0, 0);
        assert!(a < b);
        let c = Dimensions::new(0, 0, 0, 0, 0, 0, 1);
        let d = Dimensions::new(0, 0, 0, 0, 0, 1, 0);
        assert!(c < d);
    }

    #[test]
    fn const_helpers_work_at_compile_time() {
        const SPEED: Dimensions = Dimensions::new(0, 1, 0, 0, 0, 0, 0)
            .quotient(Dimensions::new(1, 0, 0, 0, 0, 0, 0));
        const _: () = assert!(SPEED.equals(Dimensions::new(-1, 1, 0, 0, 0, 0, 0)));
        assert!(!SPEED.is_dimensionless());
        assert!(Dimensions::DIMENSIONLESS.is_dimensionless());
    }

    proptest! {
        #[test]
        fn prop_group_laws(a in dims(), b in dims(), c in dims()) {
            prop_assert_eq!(a * b, b * a);
            prop_assert_eq!((a * b) * c, a * (b * c));
            prop_assert_eq!(a * Dimensions::DIMENSIONLESS, a);
            prop_assert_eq!(a / a, Dimensions::DIMENSIONLESS);
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn prop_pow_is_repeated_product(a in dims()) {
            prop_assert_eq!(a.pow(2), a * a);
            prop_assert_eq!(a.pow(0), Dimensions::DIMENSIONLESS);
        }

        #[test]
        fn prop_equal_dimensions_hash_alike(a in dims()) {
            let b = Dimensions::new(
                a.time().value(),
                a.length().value(),
                a.mass().value(),
                a.electric_current().value(),
                a.temperature().value(),
                a.substance_amount().value(),
                a.luminous_intensity().value(),
            );
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(a), hash_of(b));
            prop_assert!(a.equals(b));
        }
    }
}

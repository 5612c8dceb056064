use super::{Additive, DimensionalKind, Kind, Quantity, VectorKind};
use crate::dimension::Dimensions;
use crate::number::Number;
use crate::unit::{StaticUnit, Unit};
use crate::value::{Payload, Vector};
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};

/// A quantity of kind `K` measured in the unit family `K::Unit`, storing a `P` in the standard
/// unit.
///
/// Use the kernel aliases ([`DimensionalScalar`](super::DimensionalScalar),
/// [`DimensionalVector`](super::DimensionalVector), ...) or, more commonly, the named quantities
/// built on them.
///
/// ```rust
/// use phq_core::quantities::Length;
/// use phq_core::units::LengthUnit;
///
/// let l = Length::new(1.0, LengthUnit::Metre);
/// assert_eq!(l.value_in(LengthUnit::Millimetre), 1000.0);
/// assert_eq!(l.print_in(LengthUnit::Centimetre), "100.0000000000000 cm");
/// ```
///
/// # Invariants
///
/// The stored value is always expressed in `<K::Unit as Unit>::STANDARD`. Conversions happen only
/// when a value enters through [`Dimensional::new`] or [`Dimensional::set_value_in`] and when it
/// leaves through [`Dimensional::value_in`] or one of the `*_in` text formats. Equality, ordering,
/// hashing and arithmetic all work on the stored value directly.
pub struct Dimensional<K, P> {
    value: P,
    kind: PhantomData<K>,
}

impl<K, P> Dimensional<K, P> {
    /// Wraps a value already expressed in the standard unit.
    #[inline]
    pub const fn from_standard(value: P) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }
}

impl<K: DimensionalKind, P: Payload> Dimensional<K, P> {
    /// Creates a quantity from a value expressed in `unit`.
    #[inline]
    pub fn new(value: P, unit: K::Unit) -> Self {
        Self::from_standard(value.converted(unit, <K::Unit as Unit>::STANDARD))
    }

    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::from_standard(P::default())
    }

    /// The standard unit, in which the value is stored.
    #[inline]
    pub fn unit() -> K::Unit {
        <K::Unit as Unit>::STANDARD
    }

    /// Physical dimensions of the kind.
    #[inline]
    pub fn dimensions() -> Dimensions {
        <K::Unit as Unit>::DIMENSIONS
    }

    /// Stored value, in the standard unit.
    #[inline]
    pub fn value(&self) -> P {
        self.value
    }

    /// Value expressed in `unit`.
    #[inline]
    pub fn value_in(&self, unit: K::Unit) -> P {
        self.value.converted(<K::Unit as Unit>::STANDARD, unit)
    }

    /// Mutable access to the stored value. Writes through this reference are taken to be in the
    /// standard unit.
    #[inline]
    pub fn value_mut(&mut self) -> &mut P {
        &mut self.value
    }

    /// Overwrites the stored value with `value`, expressed in the standard unit.
    #[inline]
    pub fn set_value(&mut self, value: P) {
        self.value = value;
    }

    /// Overwrites the stored value with `value`, expressed in `unit`.
    #[inline]
    pub fn set_value_in(&mut self, value: P, unit: K::Unit) {
        self.value = value.converted(unit, <K::Unit as Unit>::STANDARD);
    }

    /// Text form in the standard unit, e.g. `1.000000000000000 m`.
    pub fn print(&self) -> String {
        self.print_in(<K::Unit as Unit>::STANDARD)
    }

    /// Text form in `unit`.
    pub fn print_in(&self, unit: K::Unit) -> String {
        format!("{} {}", self.value_in(unit).print_payload(), unit.abbreviation())
    }

    /// JSON form in the standard unit: `{"value":…,"unit":"…"}`.
    pub fn json(&self) -> String {
        self.json_in(<K::Unit as Unit>::STANDARD)
    }

    /// JSON form in `unit`.
    pub fn json_in(&self, unit: K::Unit) -> String {
        format!(
            "{{\"value\":{},\"unit\":\"{}\"}}",
            self.value_in(unit).json_payload(),
            unit.abbreviation()
        )
    }

    /// XML form in the standard unit: `<value>…</value><unit>…</unit>`.
    pub fn xml(&self) -> String {
        self.xml_in(<K::Unit as Unit>::STANDARD)
    }

    /// XML form in `unit`.
    pub fn xml_in(&self, unit: K::Unit) -> String {
        format!(
            "<value>{}</value><unit>{}</unit>",
            self.value_in(unit).xml_payload(),
            unit.abbreviation()
        )
    }

    /// YAML flow form in the standard unit: `{value:…,unit:"…"}`.
    pub fn yaml(&self) -> String {
        self.yaml_in(<K::Unit as Unit>::STANDARD)
    }

    /// YAML flow form in `unit`.
    pub fn yaml_in(&self, unit: K::Unit) -> String {
        format!(
            "{{value:{},unit:\"{}\"}}",
            self.value_in(unit).yaml_payload(),
            unit.abbreviation()
        )
    }
}

impl<K: DimensionalKind> Dimensional<K, f64> {
    /// `const` factory equivalent to `new(value, M::UNIT)`.
    ///
    /// ```rust
    /// use phq_core::quantities::Length;
    /// use phq_core::units::length::Kilometre;
    ///
    /// const RUN: Length = Length::create::<Kilometre>(5.0);
    /// assert_eq!(RUN.value(), 5000.0);
    /// ```
    #[inline]
    pub const fn create<M: StaticUnit<Family = K::Unit>>(value: f64) -> Self {
        Self::from_standard(value * M::FACTOR + M::OFFSET)
    }

    /// `const` counterpart of `value_in(M::UNIT)`.
    #[inline]
    pub const fn static_value<M: StaticUnit<Family = K::Unit>>(&self) -> f64 {
        (self.value - M::OFFSET) / M::FACTOR
    }
}

impl<K: VectorKind, N: Number> Dimensional<K, Vector<N>> {
    /// Euclidean norm, as the scalar counterpart kind.
    #[inline]
    pub fn magnitude(&self) -> Dimensional<K::Magnitude, N> {
        Dimensional::from_standard(self.value.magnitude())
    }
}

impl<K: DimensionalKind, P: Payload> Quantity for Dimensional<K, P> {
    type Payload = P;
    const DIMENSIONS: Dimensions = <K::Unit as Unit>::DIMENSIONS;

    #[inline]
    fn stored(&self) -> P {
        self.value
    }

    #[inline]
    fn from_stored(value: P) -> Self {
        Self::from_standard(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Common traits
// ─────────────────────────────────────────────────────────────────────────────

impl<K, P: Copy> Clone for Dimensional<K, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P: Copy> Copy for Dimensional<K, P> {}

impl<K: Kind, P: Debug> Debug for Dimensional<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<K: DimensionalKind, P: Payload> Display for Dimensional<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K, P: Default> Default for Dimensional<K, P> {
    #[inline]
    fn default() -> Self {
        Self::from_standard(P::default())
    }
}

impl<K, P: PartialEq> PartialEq for Dimensional<K, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Equality is total for every finite payload, which is what hashed collections rely on. A NaN
/// component breaks reflexivity, so quantities holding NaN must not be used as keys.
impl<K, P: Payload> Eq for Dimensional<K, P> {}

impl<K, P: PartialOrd> PartialOrd for Dimensional<K, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, P: Payload> Hash for Dimensional<K, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash_payload(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-kind arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Additive, P: Payload> Add for Dimensional<K, P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: Additive, P: Payload> AddAssign for Dimensional<K, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: Additive, P: Payload> Sub for Dimensional<K, P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: Additive, P: Payload> SubAssign for Dimensional<K, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Additive, P: Payload> Neg for Dimensional<K, P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

/// The ratio of two scalars of the same kind is a plain number.
impl<K, N: Number> Div for Dimensional<K, N> {
    type Output = N;
    #[inline]
    fn div(self, rhs: Self) -> N {
        self.value / rhs.value
    }
}

impl_scaling!(Dimensional);

#[cfg(test)]
mod tests {
    use crate::quantities::{Displacement, Duration, Length, Stress, Temperature, Velocity};
    use crate::units::length::{Centimetre, Kilometre, Metre};
    use crate::units::{LengthUnit, PressureUnit, SpeedUnit, TemperatureUnit, TimeUnit};
    use crate::value::{SymmetricDyadic, Vector};
    use crate::{Dimensions, Quantity, Unit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn construction_stores_standard_value() {
        let l = Length::new(2.5, LengthUnit::Kilometre);
        assert_eq!(l.value(), 2500.0);
        assert_relative_eq!(l.value_in(LengthUnit::Kilometre), 2.5);
        assert_eq!(Length::<f64>::unit(), LengthUnit::Metre);
        assert_eq!(Length::<f64>::dimensions(), Dimensions::new(0, 1, 0, 0, 0, 0, 0));
        assert_eq!(<Length as Quantity>::DIMENSIONS, Length::<f64>::dimensions());
    }

    #[test]
    fn zero_and_default_agree() {
        assert_eq!(Length::<f64>::zero(), Length::default());
        assert_eq!(Velocity::<f64>::zero().value(), Vector::zero());
    }

    #[test]
    fn mutation() {
        let mut l = Length::new(1.0, LengthUnit::Metre);
        *l.value_mut() += 1.0;
        assert_eq!(l.value(), 2.0);
        l.set_value(3.0);
        assert_eq!(l.value(), 3.0);
        l.set_value_in(50.0, LengthUnit::Centimetre);
        assert_eq!(l.value(), 0.5);
    }

    #[test]
    fn const_factories() {
        const L: Length = Length::create::<Kilometre>(1.5);
        assert_eq!(L.value(), 1500.0);
        assert_eq!(L.static_value::<Metre>(), 1500.0);
        assert_relative_eq!(L.static_value::<Centimetre>(), 150_000.0, max_relative = 1e-12);
    }

    #[test]
    fn const_factories_apply_offsets() {
        use crate::units::temperature::{Celsius, Kelvin};
        const BOILING: Temperature = Temperature::create::<Celsius>(100.0);
        assert_relative_eq!(BOILING.static_value::<Kelvin>(), 373.15);
        assert_relative_eq!(BOILING.static_value::<Celsius>(), 100.0, max_relative = 1e-12);
    }

    #[test]
    fn arithmetic() {
        let a: Length = Length::new(1.0, LengthUnit::Metre);
        let b: Length = Length::new(50.0, LengthUnit::Centimetre);
        assert_eq!((a + b).value(), 1.5);
        assert_eq!((a - b).value(), 0.5);
        assert_eq!((-a).value(), -1.0);
        assert_eq!((a * 3.0).value(), 3.0);
        assert_eq!((3.0 * a).value(), 3.0);
        assert_eq!((a / 4.0).value(), 0.25);
        assert_eq!(a / b, 2.0);

        let mut c = a;
        c += b;
        c -= a;
        c *= 2.0;
        c /= 4.0;
        assert_eq!(c, Length::new(0.25, LengthUnit::Metre));
    }

    #[test]
    fn vector_arithmetic_and_magnitude() {
        let v = Velocity::new(Vector::new(3.0, 4.0, 0.0), SpeedUnit::MetrePerSecond);
        let w = v * 2.0 - v;
        assert_eq!(w, v);
        assert_eq!(v.magnitude().value(), 5.0);
        assert_eq!(v.magnitude().print(), "5.000000000000000 m/s");
    }

    #[test]
    fn comparison_uses_stored_values() {
        let a = Length::new(1.0, LengthUnit::Kilometre);
        let b = Length::new(1000.0, LengthUnit::Metre);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert!(Length::new(1.0, LengthUnit::Foot) < Length::new(1.0, LengthUnit::Yard));
        assert!(Duration::new(1.0, TimeUnit::Minute) > Duration::new(59.0, TimeUnit::Second));
    }

    #[test]
    fn quantities_key_hashed_collections() {
        use std::collections::HashMap;

        let mut gauges = HashMap::new();
        gauges.insert(Length::new(1.0_f64, LengthUnit::Kilometre), "kilometre");
        gauges.insert(Length::new(-0.0, LengthUnit::Metre), "origin");
        assert_eq!(gauges.get(&Length::new(1000.0, LengthUnit::Metre)), Some(&"kilometre"));
        assert_eq!(gauges.get(&Length::<f64>::zero()), Some(&"origin"));

        let stresses: std::collections::HashSet<Stress> = [
            Stress::new(SymmetricDyadic::<f64>::identity(), PressureUnit::Kilopascal),
            Stress::new(SymmetricDyadic::<f64>::identity() * 1000.0, PressureUnit::Pascal),
        ]
        .into_iter()
        .collect();
        assert_eq!(stresses.len(), 1);
    }

    #[test]
    fn negative_zero_hashes_like_zero() {
        let a = Length::new(0.0, LengthUnit::Metre);
        let b = Length::new(-0.0, LengthUnit::Metre);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn text_formats() {
        let l = Length::new(1.5, LengthUnit::Metre);
        assert_eq!(l.print(), "1.500000000000000 m");
        assert_eq!(l.to_string(), l.print());
        assert_eq!(l.json(), "{\"value\":1.500000000000000,\"unit\":\"m\"}");
        assert_eq!(l.xml(), "<value>1.500000000000000</value><unit>m</unit>");
        assert_eq!(l.yaml(), "{value:1.500000000000000,unit:\"m\"}");
        assert_eq!(
            l.json_in(LengthUnit::Millimetre),
            "{\"value\":1.500000000000000e+03,\"unit\":\"mm\"}"
        );
        assert_eq!(format!("{:?}", l), "Length(1.5)");
    }

    #[test]
    fn vector_and_dyadic_text_formats() {
        let d = Displacement::new(Vector::new(1.11, 2.22, 4.44), LengthUnit::Metre);
        assert_eq!(
            d.json(),
            "{\"value\":{\"x\":1.110000000000000,\"y\":2.220000000000000,\
             \"z\":4.440000000000000},\"unit\":\"m\"}"
        );
        assert_eq!(
            d.xml(),
            "<value><x>1.110000000000000</x><y>2.220000000000000</y>\
             <z>4.440000000000000</z></value><unit>m</unit>"
        );

        let s = Stress::new(
            SymmetricDyadic::new(1.0, 0.0, 0.0, 0.0, 0.0, 0.0),
            PressureUnit::Kilopascal,
        );
        assert_eq!(s.print(), "(1.000000000000000e+03, 0, 0; 0, 0; 0) Pa");
        assert_eq!(
            s.yaml_in(PressureUnit::Kilopascal),
            "{value:{xx:1.000000000000000,xy:0,xz:0,yy:0,yz:0,zz:0},unit:\"kPa\"}"
        );
    }

    #[test]
    fn non_finite_values_propagate() {
        let l = Length::new(1.0_f64, LengthUnit::Metre) / 0.0;
        assert!(l.value().is_infinite());
        let nan = Length::new(f64::NAN, LengthUnit::Millimetre);
        assert!(nan.value().is_nan());
        assert_ne!(nan, nan);
    }

    #[test]
    fn single_precision_quantities() {
        let l: Length<f32> = Length::new(2.0_f32, LengthUnit::Kilometre);
        assert_eq!(l.value(), 2000.0_f32);
        assert_eq!(l.print(), "2.000000000000000e+03 m");
    }

    #[test]
    fn temperature_stores_kelvin() {
        let t = Temperature::new(25.0, TemperatureUnit::Celsius);
        assert_relative_eq!(t.value(), 298.15);
        assert_relative_eq!(t.value_in(TemperatureUnit::Fahrenheit), 77.0, max_relative = 1e-12);
    }

    proptest! {
        #[test]
        fn prop_canonical_storage(v in -1e6..1e6f64, i in 0usize..12) {
            let unit = LengthUnit::ALL[i];
            let l = Length::new(v, unit);
            prop_assert_eq!(l.value(), crate::convert(v, unit, LengthUnit::Metre));
            prop_assert!((l.value_in(unit) - v).abs() <= 1e-12 * v.abs().max(1e-300));
        }

        #[test]
        fn prop_additive_group(a in -1e6..1e6f64, b in -1e6..1e6f64, c in -1e6..1e6f64) {
            let (a, b, c) = (
                Length::new(a, LengthUnit::Metre),
                Length::new(b, LengthUnit::Metre),
                Length::new(c, LengthUnit::Metre),
            );
            prop_assert_eq!(a + b, b + a);
            prop_assert!(((a + b) + c - (a + (b + c))).value().abs() <= 1e-9);
            prop_assert_eq!(a - a, Length::zero());
            prop_assert_eq!(a + Length::zero(), a);
        }

        #[test]
        fn prop_scaling_round_trip(
            a in -1e6..1e6f64,
            k in prop_oneof![-1e3..-1e-3f64, 1e-3..1e3f64],
        ) {
            let l = Length::new(a, LengthUnit::Metre);
            prop_assert!(((l * k) / k - l).value().abs() <= 1e-12 * a.abs().max(1.0));
            prop_assert!(((l / k) * k - l).value().abs() <= 1e-12 * a.abs().max(1.0));
        }

        #[test]
        fn prop_equal_quantities_hash_alike(v in -1e6..1e6f64) {
            let a = Length::new(v, LengthUnit::Metre);
            let b = Length::from_standard(a.value());
            prop_assert_eq!(a, b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}

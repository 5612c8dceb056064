use super::{Additive, Kind, Quantity};
use crate::dimension::Dimensions;
use crate::number::Number;
use crate::value::Payload;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Div, Neg, Sub, SubAssign};

/// A quantity of kind `K` with no unit.
///
/// The kind still matters: two dimensionless numbers of different kinds are different types and
/// never combine implicitly.
///
/// ```rust
/// use phq_core::quantities::ReynoldsNumber;
///
/// let re = ReynoldsNumber::new(2300.0);
/// assert_eq!(re.value(), 2300.0);
/// assert_eq!(re.json(), "2.300000000000000e+03");
/// ```
pub struct Dimensionless<K, P> {
    value: P,
    kind: PhantomData<K>,
}

impl<K, P> Dimensionless<K, P> {
    /// Wraps a bare value.
    #[inline]
    pub const fn from_standard(value: P) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }
}

impl<K: Kind, P: Payload> Dimensionless<K, P> {
    /// Creates a quantity from a bare value.
    #[inline]
    pub fn new(value: P) -> Self {
        Self::from_standard(value)
    }

    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self::from_standard(P::default())
    }

    /// Always [`Dimensions::DIMENSIONLESS`].
    #[inline]
    pub fn dimensions() -> Dimensions {
        Dimensions::DIMENSIONLESS
    }

    /// Stored value.
    #[inline]
    pub fn value(&self) -> P {
        self.value
    }

    /// Mutable access to the stored value.
    #[inline]
    pub fn value_mut(&mut self) -> &mut P {
        &mut self.value
    }

    /// Overwrites the stored value.
    #[inline]
    pub fn set_value(&mut self, value: P) {
        self.value = value;
    }

    /// Text form of the bare payload.
    pub fn print(&self) -> String {
        self.value.print_payload()
    }

    /// JSON form of the bare payload.
    pub fn json(&self) -> String {
        self.value.json_payload()
    }

    /// XML form of the bare payload.
    pub fn xml(&self) -> String {
        self.value.xml_payload()
    }

    /// YAML flow form of the bare payload.
    pub fn yaml(&self) -> String {
        self.value.yaml_payload()
    }
}

impl<K: Kind, P: Payload> Quantity for Dimensionless<K, P> {
    type Payload = P;
    const DIMENSIONS: Dimensions = Dimensions::DIMENSIONLESS;

    #[inline]
    fn stored(&self) -> P {
        self.value
    }

    #[inline]
    fn from_stored(value: P) -> Self {
        Self::from_standard(value)
    }
}

impl<K: Kind, N: Number> From<N> for Dimensionless<K, N> {
    #[inline]
    fn from(value: N) -> Self {
        Self::from_standard(value)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Common traits
// ─────────────────────────────────────────────────────────────────────────────

impl<K, P: Copy> Clone for Dimensionless<K, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, P: Copy> Copy for Dimensionless<K, P> {}

impl<K: Kind, P: Debug> Debug for Dimensionless<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple(K::NAME).field(&self.value).finish()
    }
}

impl<K: Kind, P: Payload> Display for Dimensionless<K, P> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.print())
    }
}

impl<K, P: Default> Default for Dimensionless<K, P> {
    #[inline]
    fn default() -> Self {
        Self::from_standard(P::default())
    }
}

impl<K, P: PartialEq> PartialEq for Dimensionless<K, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

/// Equality is total for every finite payload, which is what hashed collections rely on. A NaN
/// component breaks reflexivity, so quantities holding NaN must not be used as keys.
impl<K, P: Payload> Eq for Dimensionless<K, P> {}

impl<K, P: PartialOrd> PartialOrd for Dimensionless<K, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<K, P: Payload> Hash for Dimensionless<K, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash_payload(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Same-kind arithmetic
// ─────────────────────────────────────────────────────────────────────────────

impl<K: Additive, P: Payload> Add for Dimensionless<K, P> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_standard(self.value + rhs.value)
    }
}

impl<K: Additive, P: Payload> AddAssign for Dimensionless<K, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.value += rhs.value;
    }
}

impl<K: Additive, P: Payload> Sub for Dimensionless<K, P> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_standard(self.value - rhs.value)
    }
}

impl<K: Additive, P: Payload> SubAssign for Dimensionless<K, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.value -= rhs.value;
    }
}

impl<K: Additive, P: Payload> Neg for Dimensionless<K, P> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::from_standard(-self.value)
    }
}

impl<K, N: Number> Div for Dimensionless<K, N> {
    type Output = N;
    #[inline]
    fn div(self, rhs: Self) -> N {
        self.value / rhs.value
    }
}

impl_scaling!(Dimensionless);

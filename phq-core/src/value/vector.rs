use super::{hash_components, json_object, xml_elements, yaml_mapping, Dyadic, Payload};
use crate::format;
use crate::number::Number;
use crate::unit::{Convertible, Unit};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A three-dimensional Euclidean vector.
///
/// The derived ordering is lexicographic over `(x, y, z)`.
///
/// ```rust
/// use phq_core::value::Vector;
///
/// let a = Vector::new(1.0, 0.0, 0.0);
/// let b = Vector::new(0.0, 1.0, 0.0);
/// assert_eq!(a.cross(&b), Vector::new(0.0, 0.0, 1.0));
/// assert_eq!(a.dot(&b), 0.0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vector<N = f64> {
    /// x component.
    pub x: N,
    /// y component.
    pub y: N,
    /// z component.
    pub z: N,
}

impl<N> Vector<N> {
    /// Creates a vector from its components.
    #[inline]
    pub const fn new(x: N, y: N, z: N) -> Self {
        Self { x, y, z }
    }
}

impl<N: Number> Vector<N> {
    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::new(N::zero(), N::zero(), N::zero())
    }

    /// Components as an array in `x, y, z` order.
    #[inline]
    pub fn to_array(&self) -> [N; 3] {
        [self.x, self.y, self.z]
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &Self) -> N {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    #[inline]
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean norm.
    #[inline]
    pub fn magnitude(&self) -> N {
        self.dot(self).sqrt()
    }

    /// Outer product `self ⊗ other`.
    pub fn dyadic(&self, other: &Self) -> Dyadic<N> {
        Dyadic::new(
            self.x * other.x,
            self.x * other.y,
            self.x * other.z,
            self.y * other.x,
            self.y * other.y,
            self.y * other.z,
            self.z * other.x,
            self.z * other.y,
            self.z * other.z,
        )
    }

    fn components(&self) -> [(&'static str, N); 3] {
        [("x", self.x), ("y", self.y), ("z", self.z)]
    }
}

impl<N: Number> Hash for Vector<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<N: Number> Convertible for Vector<N> {
    fn convert_in_place<U: Unit>(&mut self, from: U, to: U) {
        self.x.convert_in_place(from, to);
        self.y.convert_in_place(from, to);
        self.z.convert_in_place(from, to);
    }
}

impl<N: Number> Payload for Vector<N> {
    type Scalar = N;

    fn hash_payload<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn print_payload(&self) -> String {
        format!(
            "({}, {}, {})",
            format::number(self.x),
            format::number(self.y),
            format::number(self.z)
        )
    }

    fn json_payload(&self) -> String {
        json_object(&self.components())
    }

    fn xml_payload(&self) -> String {
        xml_elements(&self.components())
    }

    fn yaml_payload(&self) -> String {
        yaml_mapping(&self.components())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Operator implementations
// ─────────────────────────────────────────────────────────────────────────────

impl<N: Number> Add for Vector<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<N: Number> AddAssign for Vector<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N: Number> Sub for Vector<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<N: Number> SubAssign for Vector<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<N: Number> Neg for Vector<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<N: Number> Mul<N> for Vector<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: N) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<N: Number> MulAssign<N> for Vector<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        *self = *self * rhs;
    }
}

impl<N: Number> Div<N> for Vector<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: N) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<N: Number> DivAssign<N> for Vector<N> {
    #[inline]
    fn div_assign(&mut self, rhs: N) {
        *self = *self / rhs;
    }
}

macro_rules! impl_left_scaling {
    ($($float:ty),+) => {
        $(
            impl Mul<Vector<$float>> for $float {
                type Output = Vector<$float>;
                #[inline]
                fn mul(self, rhs: Vector<$float>) -> Vector<$float> {
                    rhs * self
                }
            }
        )+
    };
}

impl_left_scaling!(f32, f64);

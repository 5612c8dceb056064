use super::{hash_components, json_object, xml_elements, yaml_mapping, Dyadic, Payload, Vector};
use crate::format;
use crate::number::Number;
use crate::unit::{Convertible, Unit};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symmetric 3×3 dyadic (second-order tensor), stored as its upper triangle.
///
/// The lower triangle mirrors the upper one: `yx = xy`, `zx = xz` and `zy = yz`. The derived
/// ordering is lexicographic over `(xx, xy, xz, yy, yz, zz)`.
///
/// ```rust
/// use phq_core::value::{SymmetricDyadic, Vector};
///
/// let s = SymmetricDyadic::new(2.0, 0.0, 0.0, 3.0, 0.0, 4.0);
/// assert_eq!(s.trace(), 9.0);
/// assert_eq!(s * Vector::new(1.0, 1.0, 1.0), Vector::new(2.0, 3.0, 4.0));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymmetricDyadic<N = f64> {
    /// xx component.
    pub xx: N,
    /// xy (= yx) component.
    pub xy: N,
    /// xz (= zx) component.
    pub xz: N,
    /// yy component.
    pub yy: N,
    /// yz (= zy) component.
    pub yz: N,
    /// zz component.
    pub zz: N,
}

impl<N> SymmetricDyadic<N> {
    /// Creates a symmetric dyadic from its upper triangle.
    #[inline]
    pub const fn new(xx: N, xy: N, xz: N, yy: N, yz: N, zz: N) -> Self {
        Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        }
    }
}

impl<N: Number> SymmetricDyadic<N> {
    /// The zero dyadic.
    #[inline]
    pub fn zero() -> Self {
        let z = N::zero();
        Self::new(z, z, z, z, z, z)
    }

    /// The identity dyadic.
    #[inline]
    pub fn identity() -> Self {
        let (z, o) = (N::zero(), N::one());
        Self::new(o, z, z, o, z, o)
    }

    /// Upper triangle as an array in `xx, xy, xz, yy, yz, zz` order.
    #[inline]
    pub fn to_array(&self) -> [N; 6] {
        [self.xx, self.xy, self.xz, self.yy, self.yz, self.zz]
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> N {
        self.xx + self.yy + self.zz
    }

    /// Determinant.
    pub fn determinant(&self) -> N {
        self.xx * (self.yy * self.zz - self.yz * self.yz)
            - self.xy * (self.xy * self.zz - self.yz * self.xz)
            + self.xz * (self.xy * self.yz - self.yy * self.xz)
    }

    /// The transpose, which is the dyadic itself.
    #[inline]
    pub fn transpose(&self) -> Self {
        *self
    }

    /// Cofactor matrix. It is symmetric, and so equal to the adjugate.
    pub fn cofactors(&self) -> Self {
        Self::new(
            self.yy * self.zz - self.yz * self.yz,
            self.xz * self.yz - self.xy * self.zz,
            self.xy * self.yz - self.xz * self.yy,
            self.xx * self.zz - self.xz * self.xz,
            self.xy * self.xz - self.xx * self.yz,
            self.xx * self.yy - self.xy * self.xy,
        )
    }

    /// Adjugate (transpose of the cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactors()
    }

    /// Inverse, or `None` when the determinant is zero.
    pub fn inverse(&self) -> Option<Self> {
        let determinant = self.determinant();
        if determinant == N::zero() {
            None
        } else {
            Some(self.adjugate() / determinant)
        }
    }

    /// Double-dot (Frobenius) product `Σ aᵢⱼ bᵢⱼ`.
    pub fn double_dot(&self, other: &Self) -> N {
        let two = N::one() + N::one();
        self.xx * other.xx
            + self.yy * other.yy
            + self.zz * other.zz
            + two * (self.xy * other.xy + self.xz * other.xz + self.yz * other.yz)
    }

    /// Full nine-component form.
    pub fn to_dyadic(&self) -> Dyadic<N> {
        Dyadic::new(
            self.xx, self.xy, self.xz, self.xy, self.yy, self.yz, self.xz, self.yz, self.zz,
        )
    }

    fn components(&self) -> [(&'static str, N); 6] {
        [
            ("xx", self.xx),
            ("xy", self.xy),
            ("xz", self.xz),
            ("yy", self.yy),
            ("yz", self.yz),
            ("zz", self.zz),
        ]
    }
}

impl<N: Number> From<SymmetricDyadic<N>> for Dyadic<N> {
    fn from(value: SymmetricDyadic<N>) -> Self {
        value.to_dyadic()
    }
}

impl<N: Number> Hash for SymmetricDyadic<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<N: Number> Convertible for SymmetricDyadic<N> {
    fn convert_in_place<U: Unit>(&mut self, from: U, to: U) {
        for component in [
            &mut self.xx,
            &mut self.xy,
            &mut self.xz,
            &mut self.yy,
            &mut self.yz,
            &mut self.zz,
        ] {
            component.convert_in_place(from, to);
        }
    }
}

impl<N: Number> Payload for SymmetricDyadic<N> {
    type Scalar = N;

    fn hash_payload<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn print_payload(&self) -> String {
        format!(
            "({}, {}, {}; {}, {}; {})",
            format::number(self.xx),
            format::number(self.xy),
            format::number(self.xz),
            format::number(self.yy),
            format::number(self.yz),
            format::number(self.zz)
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

impl<N: Number> Add for SymmetricDyadic<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.xz + rhs.xz,
            self.yy + rhs.yy,
            self.yz + rhs.yz,
            self.zz + rhs.zz,
        )
    }
}

impl<N: Number> AddAssign for SymmetricDyadic<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N: Number> Sub for SymmetricDyadic<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<N: Number> SubAssign for SymmetricDyadic<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<N: Number> Neg for SymmetricDyadic<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.xx, -self.xy, -self.xz, -self.yy, -self.yz, -self.zz)
    }
}

impl<N: Number> Mul<N> for SymmetricDyadic<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: N) -> Self {
        Self::new(
            self.xx * rhs,
            self.xy * rhs,
            self.xz * rhs,
            self.yy * rhs,
            self.yz * rhs,
            self.zz * rhs,
        )
    }
}

impl<N: Number> MulAssign<N> for SymmetricDyadic<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        *self = *self * rhs;
    }
}

impl<N: Number> Div<N> for SymmetricDyadic<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: N) -> Self {
        Self::new(
            self.xx / rhs,
            self.xy / rhs,
            self.xz / rhs,
            self.yy / rhs,
            self.yz / rhs,
            self.zz / rhs,
        )
    }
}

impl<N: Number> DivAssign<N> for SymmetricDyadic<N> {
    #[inline]
    fn div_assign(&mut self, rhs: N) {
        *self = *self / rhs;
    }
}

impl<N: Number> Mul<Vector<N>> for SymmetricDyadic<N> {
    type Output = Vector<N>;
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        Vector::new(
            self.xx * rhs.x + self.xy * rhs.y + self.xz * rhs.z,
            self.xy * rhs.x + self.yy * rhs.y + self.yz * rhs.z,
            self.xz * rhs.x + self.yz * rhs.y + self.zz * rhs.z,
        )
    }
}

impl<N: Number> Mul for SymmetricDyadic<N> {
    type Output = Dyadic<N>;
    #[inline]
    fn mul(self, rhs: Self) -> Dyadic<N> {
        self.to_dyadic() * rhs.to_dyadic()
    }
}

impl<N: Number> Mul<Dyadic<N>> for SymmetricDyadic<N> {
    type Output = Dyadic<N>;
    #[inline]
    fn mul(self, rhs: Dyadic<N>) -> Dyadic<N> {
        self.to_dyadic() * rhs
    }
}

macro_rules! impl_left_scaling {
    ($($float:ty),+) => {
        $(
            impl Mul<SymmetricDyadic<$float>> for $float {
                type Output = SymmetricDyadic<$float>;
                #[inline]
                fn mul(self, rhs: SymmetricDyadic<$float>) -> SymmetricDyadic<$float> {
                    rhs * self
                }
            }
        )+
    };
}

impl_left_scaling!(f32, f64);

use super::{
    hash_components, json_object, xml_elements, yaml_mapping, Payload, SymmetricDyadic, Vector,
};
use crate::format;
use crate::number::Number;
use crate::unit::{Convertible, Unit};
use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A general 3×3 dyadic (second-order tensor), in row-major order.
///
/// The derived ordering is lexicographic over `(xx, xy, xz, yx, yy, yz, zx, zy, zz)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dyadic<N = f64> {
    /// xx component.
    pub xx: N,
    /// xy component.
    pub xy: N,
    /// xz component.
    pub xz: N,
    /// yx component.
    pub yx: N,
    /// yy component.
    pub yy: N,
    /// yz component.
    pub yz: N,
    /// zx component.
    pub zx: N,
    /// zy component.
    pub zy: N,
    /// zz component.
    pub zz: N,
}

impl<N> Dyadic<N> {
    /// Creates a dyadic from its components in row-major order.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub const fn new(xx: N, xy: N, xz: N, yx: N, yy: N, yz: N, zx: N, zy: N, zz: N) -> Self {
        Self {
            xx,
            xy,
            xz,
            yx,
            yy,
            yz,
            zx,
            zy,
            zz,
        }
    }
}

impl<N: Number> Dyadic<N> {
    /// The zero dyadic.
    #[inline]
    pub fn zero() -> Self {
        let z = N::zero();
        Self::new(z, z, z, z, z, z, z, z, z)
    }

    /// The identity dyadic.
    #[inline]
    pub fn identity() -> Self {
        let (z, o) = (N::zero(), N::one());
        Self::new(o, z, z, z, o, z, z, z, o)
    }

    /// Components as an array in row-major order.
    #[inline]
    pub fn to_array(&self) -> [N; 9] {
        [
            self.xx, self.xy, self.xz, self.yx, self.yy, self.yz, self.zx, self.zy, self.zz,
        ]
    }

    /// Row `x` as a vector.
    #[inline]
    pub fn x_row(&self) -> Vector<N> {
        Vector::new(self.xx, self.xy, self.xz)
    }

    /// Row `y` as a vector.
    #[inline]
    pub fn y_row(&self) -> Vector<N> {
        Vector::new(self.yx, self.yy, self.yz)
    }

    /// Row `z` as a vector.
    #[inline]
    pub fn z_row(&self) -> Vector<N> {
        Vector::new(self.zx, self.zy, self.zz)
    }

    /// Sum of the diagonal.
    #[inline]
    pub fn trace(&self) -> N {
        self.xx + self.yy + self.zz
    }

    /// Determinant.
    pub fn determinant(&self) -> N {
        self.xx * (self.yy * self.zz - self.yz * self.zy)
            - self.xy * (self.yx * self.zz - self.yz * self.zx)
            + self.xz * (self.yx * self.zy - self.yy * self.zx)
    }

    /// Transpose.
    pub fn transpose(&self) -> Self {
        Self::new(
            self.xx, self.yx, self.zx, self.xy, self.yy, self.zy, self.xz, self.yz, self.zz,
        )
    }

    /// Cofactor matrix.
    pub fn cofactors(&self) -> Self {
        Self::new(
            self.yy * self.zz - self.yz * self.zy,
            self.yz * self.zx - self.yx * self.zz,
            self.yx * self.zy - self.yy * self.zx,
            self.xz * self.zy - self.xy * self.zz,
            self.xx * self.zz - self.xz * self.zx,
            self.xy * self.zx - self.xx * self.zy,
            self.xy * self.yz - self.xz * self.yy,
            self.xz * self.yx - self.xx * self.yz,
            self.xx * self.yy - self.xy * self.yx,
        )
    }

    /// Adjugate (transpose of the cofactor matrix).
    #[inline]
    pub fn adjugate(&self) -> Self {
        self.cofactors().transpose()
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
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .map(|(a, b)| *a * *b)
            .sum()
    }

    /// Symmetric part `(A + Aᵀ) / 2`.
    pub fn symmetric_part(&self) -> SymmetricDyadic<N> {
        let half = N::from_f64(0.5);
        SymmetricDyadic::new(
            self.xx,
            (self.xy + self.yx) * half,
            (self.xz + self.zx) * half,
            self.yy,
            (self.yz + self.zy) * half,
            self.zz,
        )
    }

    /// Skew-symmetric part `(A − Aᵀ) / 2`.
    pub fn skew_part(&self) -> Self {
        (*self - self.transpose()) * N::from_f64(0.5)
    }

    fn components(&self) -> [(&'static str, N); 9] {
        [
            ("xx", self.xx),
            ("xy", self.xy),
            ("xz", self.xz),
            ("yx", self.yx),
            ("yy", self.yy),
            ("yz", self.yz),
            ("zx", self.zx),
            ("zy", self.zy),
            ("zz", self.zz),
        ]
    }
}

impl<N: Number> Hash for Dyadic<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        hash_components(&self.to_array(), state);
    }
}

impl<N: Number> Convertible for Dyadic<N> {
    fn convert_in_place<U: Unit>(&mut self, from: U, to: U) {
        for component in [
            &mut self.xx,
            &mut self.xy,
            &mut self.xz,
            &mut self.yx,
            &mut self.yy,
            &mut self.yz,
            &mut self.zx,
            &mut self.zy,
            &mut self.zz,
        ] {
            component.convert_in_place(from, to);
        }
    }
}

impl<N: Number> Payload for Dyadic<N> {
    type Scalar = N;

    fn hash_payload<H: Hasher>(&self, state: &mut H) {
        self.hash(state);
    }

    fn print_payload(&self) -> String {
        let rows = [self.x_row(), self.y_row(), self.z_row()]
            .iter()
            .map(|row| {
                format!(
                    "{}, {}, {}",
                    format::number(row.x),
                    format::number(row.y),
                    format::number(row.z)
                )
            })
            .collect::<Vec<_>>()
            .join("; ");
        format!("({})", rows)
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

impl<N: Number> Add for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.xx + rhs.xx,
            self.xy + rhs.xy,
            self.xz + rhs.xz,
            self.yx + rhs.yx,
            self.yy + rhs.yy,
            self.yz + rhs.yz,
            self.zx + rhs.zx,
            self.zy + rhs.zy,
            self.zz + rhs.zz,
        )
    }
}

impl<N: Number> AddAssign for Dyadic<N> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<N: Number> Sub for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self + (-rhs)
    }
}

impl<N: Number> SubAssign for Dyadic<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<N: Number> Neg for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self * -N::one()
    }
}

impl<N: Number> Mul<N> for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: N) -> Self {
        Self::new(
            self.xx * rhs,
            self.xy * rhs,
            self.xz * rhs,
            self.yx * rhs,
            self.yy * rhs,
            self.yz * rhs,
            self.zx * rhs,
            self.zy * rhs,
            self.zz * rhs,
        )
    }
}

impl<N: Number> MulAssign<N> for Dyadic<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        *self = *self * rhs;
    }
}

impl<N: Number> Div<N> for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: N) -> Self {
        Self::new(
            self.xx / rhs,
            self.xy / rhs,
            self.xz / rhs,
            self.yx / rhs,
            self.yy / rhs,
            self.yz / rhs,
            self.zx / rhs,
            self.zy / rhs,
            self.zz / rhs,
        )
    }
}

impl<N: Number> DivAssign<N> for Dyadic<N> {
    #[inline]
    fn div_assign(&mut self, rhs: N) {
        *self = *self / rhs;
    }
}

impl<N: Number> Mul<Vector<N>> for Dyadic<N> {
    type Output = Vector<N>;
    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        Vector::new(self.x_row().dot(&rhs), self.y_row().dot(&rhs), self.z_row().dot(&rhs))
    }
}

impl<N: Number> Mul for Dyadic<N> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let columns = rhs.transpose();
        let (cx, cy, cz) = (columns.x_row(), columns.y_row(), columns.z_row());
        let (rx, ry, rz) = (self.x_row(), self.y_row(), self.z_row());
        Self::new(
            rx.dot(&cx),
            rx.dot(&cy),
            rx.dot(&cz),
            ry.dot(&cx),
            ry.dot(&cy),
            ry.dot(&cz),
            rz.dot(&cx),
            rz.dot(&cy),
            rz.dot(&cz),
        )
    }
}

impl<N: Number> Mul<SymmetricDyadic<N>> for Dyadic<N> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: SymmetricDyadic<N>) -> Self {
        self * rhs.to_dyadic()
    }
}

macro_rules! impl_left_scaling {
    ($($float:ty),+) => {
        $(
            impl Mul<Dyadic<$float>> for $float {
                type Output = Dyadic<$float>;
                #[inline]
                fn mul(self, rhs: Dyadic<$float>) -> Dyadic<$float> {
                    rhs * self
                }
            }
        )+
    };
}

impl_left_scaling!(f32, f64);

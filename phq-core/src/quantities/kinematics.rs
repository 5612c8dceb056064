use super::{Displacement, DisplacementGradient, Length};
use crate::units::{FrequencyUnit, SpeedUnit, TimeUnit};
use crate::{Number, Quantity, VectorKind};
use core::ops::{Div, Mul};

quantity! {
    /// Elapsed time.
    Duration(DurationKind): DimensionalScalar<TimeUnit>
}

quantity! {
    /// Number of occurrences per unit time.
    Frequency(FrequencyKind): DimensionalScalar<FrequencyUnit>
}

quantity! {
    /// Rate of travel, the magnitude of a [`Velocity`].
    Speed(SpeedKind): DimensionalScalar<SpeedUnit>
}

quantity! {
    /// Rate of change of position.
    Velocity(VelocityKind): DimensionalVector<SpeedUnit>
}

quantity! {
    /// Gradient of a velocity field: `∂v_i/∂x_j`.
    VelocityGradient(VelocityGradientKind): DimensionalDyadic<FrequencyUnit>
}

quantity! {
    /// Small-deformation strain tensor.
    Strain(StrainKind): DimensionlessSymmetricDyadic
}

quantity! {
    /// Rate of deformation: the symmetric part of a velocity gradient.
    StrainRate(StrainRateKind): DimensionalSymmetricDyadic<FrequencyUnit>
}

quantity! {
    /// A single component or invariant of a [`StrainRate`], e.g. a shear rate.
    StrainRateScalar(StrainRateScalarKind): DimensionalScalar<FrequencyUnit>
}

impl VectorKind for VelocityKind {
    type Magnitude = SpeedKind;
}

impl_product!(Speed * Duration = Length);
impl_product!(Length * Frequency = Speed);
impl_scaled!(Velocity * Duration = Displacement);
impl_scaled!(Displacement * Frequency = Velocity);
impl_scaled!(StrainRate * Duration = Strain);
impl_scaled!(Strain * Frequency = StrainRate);
impl_scaled!(VelocityGradient * Duration = DisplacementGradient);
impl_scaled!(DisplacementGradient * Frequency = VelocityGradient);

/// A frequency times a duration is a count.
impl<N: Number> Mul<Duration<N>> for Frequency<N> {
    type Output = N;
    #[inline]
    fn mul(self, rhs: Duration<N>) -> N {
        self.value() * rhs.value()
    }
}

impl<N: Number> Mul<Frequency<N>> for Duration<N> {
    type Output = N;
    #[inline]
    fn mul(self, rhs: Frequency<N>) -> N {
        self.value() * rhs.value()
    }
}

macro_rules! impl_reciprocal {
    ($($float:ty),+) => {
        $(
            impl Div<Duration<$float>> for $float {
                type Output = Frequency<$float>;
                #[inline]
                fn div(self, rhs: Duration<$float>) -> Frequency<$float> {
                    Frequency::from_standard(self / rhs.value())
                }
            }

            impl Div<Frequency<$float>> for $float {
                type Output = Duration<$float>;
                #[inline]
                fn div(self, rhs: Frequency<$float>) -> Duration<$float> {
                    Duration::from_standard(self / rhs.value())
                }
            }
        )+
    };
}

impl_reciprocal!(f32, f64);

const _: () = assert!(<Frequency as Quantity>::DIMENSIONS
    .product(<Duration as Quantity>::DIMENSIONS)
    .is_dimensionless());

impl<N: Number> Duration<N> {
    /// Period of a frequency.
    #[inline]
    pub fn from_frequency(frequency: Frequency<N>) -> Self {
        Self::from_standard(N::one() / frequency.value())
    }
}

impl<N: Number> Frequency<N> {
    /// Frequency of a period.
    #[inline]
    pub fn from_duration(duration: Duration<N>) -> Self {
        Self::from_standard(N::one() / duration.value())
    }
}

impl<N: Number> Speed<N> {
    /// Average speed covering `length` in `duration`.
    #[inline]
    pub fn from_length_and_duration(length: Length<N>, duration: Duration<N>) -> Self {
        length / duration
    }
}

impl<N: Number> StrainRate<N> {
    /// Symmetric part of a velocity gradient.
    #[inline]
    pub fn from_velocity_gradient(gradient: VelocityGradient<N>) -> Self {
        Self::from_standard(gradient.value().symmetric_part())
    }
}

impl<N: Number> Strain<N> {
    /// Symmetric part of a displacement gradient.
    #[inline]
    pub fn from_displacement_gradient(gradient: DisplacementGradient<N>) -> Self {
        Self::from_standard(gradient.value().symmetric_part())
    }
}

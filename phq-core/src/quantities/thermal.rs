use super::{Length, MassDensity};
use crate::units::{
    DiffusivityUnit, EnergyFluxUnit, SpecificHeatCapacityUnit, TemperatureDifferenceUnit,
    TemperatureGradientUnit, TemperatureUnit, ThermalConductivityUnit,
};
use crate::value::SymmetricDyadic;
use crate::{Number, Quantity, VectorKind};
use core::ops::{Add, AddAssign, Sub, SubAssign};

quantity! {
    /// Absolute thermodynamic temperature.
    ///
    /// Temperatures sit on an affine scale: they cannot be added to each other, only shifted by a
    /// [`TemperatureDifference`]. The difference of two temperatures is a `TemperatureDifference`.
    ///
    /// ```compile_fail
    /// use phq_core::quantities::Temperature;
    /// use phq_core::units::TemperatureUnit;
    ///
    /// let t = Temperature::new(20.0, TemperatureUnit::Celsius);
    /// let _ = t + t;
    /// ```
    Temperature(TemperatureKind): DimensionalScalar<TemperatureUnit>, affine
}

quantity! {
    /// Difference between two temperatures.
    TemperatureDifference(TemperatureDifferenceKind): DimensionalScalar<TemperatureDifferenceUnit>
}

quantity! {
    /// Magnitude or component of a [`TemperatureGradient`].
    TemperatureGradientScalar(TemperatureGradientScalarKind):
        DimensionalScalar<TemperatureGradientUnit>
}

quantity! {
    /// Spatial rate of change of temperature, `∇T`.
    TemperatureGradient(TemperatureGradientKind): DimensionalVector<TemperatureGradientUnit>
}

quantity! {
    /// Thermal conductivity of an isotropic material.
    ThermalConductivityScalar(ThermalConductivityScalarKind):
        DimensionalScalar<ThermalConductivityUnit>
}

quantity! {
    /// Thermal conductivity tensor of an anisotropic material.
    ThermalConductivity(ThermalConductivityKind):
        DimensionalSymmetricDyadic<ThermalConductivityUnit>
}

quantity! {
    /// Heat capacity per unit mass at constant pressure, `c_p`.
    SpecificIsobaricHeatCapacity(SpecificIsobaricHeatCapacityKind):
        DimensionalScalar<SpecificHeatCapacityUnit>
}

quantity! {
    /// Heat diffusivity `α = k/(ρ·c_p)`.
    ThermalDiffusivity(ThermalDiffusivityKind): DimensionalScalar<DiffusivityUnit>
}

quantity! {
    /// Magnitude or component of a [`HeatFlux`].
    HeatFluxScalar(HeatFluxScalarKind): DimensionalScalar<EnergyFluxUnit>
}

quantity! {
    /// Conductive heat flow per unit area.
    HeatFlux(HeatFluxKind): DimensionalVector<EnergyFluxUnit>
}

impl VectorKind for TemperatureGradientKind {
    type Magnitude = TemperatureGradientScalarKind;
}

impl VectorKind for HeatFluxKind {
    type Magnitude = HeatFluxScalarKind;
}

impl_product!(TemperatureGradientScalar * Length = TemperatureDifference);

// Both temperature families store kelvin, so the affine algebra works on stored values directly.

impl<N: Number> Add<TemperatureDifference<N>> for Temperature<N> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: TemperatureDifference<N>) -> Self {
        Self::from_standard(self.value() + rhs.value())
    }
}

impl<N: Number> AddAssign<TemperatureDifference<N>> for Temperature<N> {
    #[inline]
    fn add_assign(&mut self, rhs: TemperatureDifference<N>) {
        *self.value_mut() += rhs.value();
    }
}

impl<N: Number> Sub<TemperatureDifference<N>> for Temperature<N> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: TemperatureDifference<N>) -> Self {
        Self::from_standard(self.value() - rhs.value())
    }
}

impl<N: Number> SubAssign<TemperatureDifference<N>> for Temperature<N> {
    #[inline]
    fn sub_assign(&mut self, rhs: TemperatureDifference<N>) {
        *self.value_mut() -= rhs.value();
    }
}

impl<N: Number> Add<Temperature<N>> for TemperatureDifference<N> {
    type Output = Temperature<N>;
    #[inline]
    fn add(self, rhs: Temperature<N>) -> Temperature<N> {
        rhs + self
    }
}

impl<N: Number> Sub for Temperature<N> {
    type Output = TemperatureDifference<N>;
    #[inline]
    fn sub(self, rhs: Self) -> TemperatureDifference<N> {
        TemperatureDifference::from_standard(self.value() - rhs.value())
    }
}

const _: () = assert!(<Temperature as Quantity>::DIMENSIONS
    .equals(<TemperatureDifference as Quantity>::DIMENSIONS));

impl<N: Number> ThermalConductivity<N> {
    /// Conductivity tensor of an isotropic material, `k·I`.
    #[inline]
    pub fn isotropic(conductivity: ThermalConductivityScalar<N>) -> Self {
        Self::from_standard(SymmetricDyadic::identity() * conductivity.value())
    }
}

impl<N: Number> HeatFlux<N> {
    /// Fourier's law for an isotropic material, `q = -k·∇T`.
    #[inline]
    pub fn from_conductivity_scalar(
        conductivity: ThermalConductivityScalar<N>,
        gradient: TemperatureGradient<N>,
    ) -> Self {
        Self::from_standard(gradient.value() * -conductivity.value())
    }

    /// Fourier's law for an anisotropic material, `q = -K·∇T`.
    #[inline]
    pub fn from_conductivity(
        conductivity: ThermalConductivity<N>,
        gradient: TemperatureGradient<N>,
    ) -> Self {
        Self::from_standard(-(conductivity.value() * gradient.value()))
    }
}

impl<N: Number> HeatFluxScalar<N> {
    /// One-dimensional Fourier's law, `q = -k·dT/dx`.
    #[inline]
    pub fn from_conductivity_scalar(
        conductivity: ThermalConductivityScalar<N>,
        gradient: TemperatureGradientScalar<N>,
    ) -> Self {
        Self::from_standard(-conductivity.value() * gradient.value())
    }
}

impl<N: Number> ThermalDiffusivity<N> {
    /// `α = k/(ρ·c_p)`.
    #[inline]
    pub fn from_thermal_conductivity(
        conductivity: ThermalConductivityScalar<N>,
        mass_density: MassDensity<N>,
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
    ) -> Self {
        Self::from_standard(
            conductivity.value() / (mass_density.value() * specific_heat_capacity.value()),
        )
    }
}

const _: () = assert!(<ThermalConductivityScalar as Quantity>::DIMENSIONS
    .quotient(
        <MassDensity as Quantity>::DIMENSIONS
            .product(<SpecificIsobaricHeatCapacity as Quantity>::DIMENSIONS)
    )
    .equals(<ThermalDiffusivity as Quantity>::DIMENSIONS));

const _: () = assert!(<ThermalConductivityScalar as Quantity>::DIMENSIONS
    .product(<TemperatureGradientScalar as Quantity>::DIMENSIONS)
    .equals(<HeatFluxScalar as Quantity>::DIMENSIONS));

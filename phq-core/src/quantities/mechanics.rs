use super::{StrainRateScalar, Volume};
use crate::units::{DiffusivityUnit, DynamicViscosityUnit, MassDensityUnit, MassUnit, PressureUnit};
use crate::value::SymmetricDyadic;
use crate::Number;

quantity! {
    /// Amount of matter.
    Mass(MassKind): DimensionalScalar<MassUnit>
}

quantity! {
    /// Mass per unit volume.
    MassDensity(MassDensityKind): DimensionalScalar<MassDensityUnit>
}

quantity! {
    /// Shear viscosity `μ` of a fluid.
    DynamicViscosity(DynamicViscosityKind): DimensionalScalar<DynamicViscosityUnit>
}

quantity! {
    /// Bulk viscosity `κ`, resisting volumetric deformation.
    BulkDynamicViscosity(BulkDynamicViscosityKind): DimensionalScalar<DynamicViscosityUnit>
}

quantity! {
    /// Momentum diffusivity `ν = μ/ρ`.
    KinematicViscosity(KinematicViscosityKind): DimensionalScalar<DiffusivityUnit>
}

quantity! {
    /// Thermodynamic pressure of a fluid at rest.
    StaticPressure(StaticPressureKind): DimensionalScalar<PressureUnit>
}

quantity! {
    /// A single component or invariant of a [`Stress`].
    StressScalar(StressScalarKind): DimensionalScalar<PressureUnit>
}

quantity! {
    /// Cauchy stress tensor, tension positive.
    Stress(StressKind): DimensionalSymmetricDyadic<PressureUnit>
}

impl_product!(MassDensity * Volume = Mass);
impl_product!(MassDensity * KinematicViscosity = DynamicViscosity);
impl_product!(DynamicViscosity * StrainRateScalar = StressScalar);

impl<N: Number> Stress<N> {
    /// Isotropic stress of a fluid at rest, `-p·I`.
    #[inline]
    pub fn from_static_pressure(pressure: StaticPressure<N>) -> Self {
        Self::from_standard(SymmetricDyadic::identity() * -pressure.value())
    }

    /// Mean normal compression, `-tr(σ)/3`.
    #[inline]
    pub fn static_pressure(&self) -> StaticPressure<N> {
        StaticPressure::from_standard(-self.value().trace() / N::from_f64(3.0))
    }
}

impl<N: Number> KinematicViscosity<N> {
    /// `μ/ρ`.
    #[inline]
    pub fn from_dynamic_viscosity(
        dynamic_viscosity: DynamicViscosity<N>,
        mass_density: MassDensity<N>,
    ) -> Self {
        dynamic_viscosity / mass_density
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{Length, StrainRate};
    use crate::units::{FrequencyUnit, LengthUnit, VolumeUnit};
    use approx::assert_relative_eq;

    #[test]
    fn viscosity_relations() {
        let mu: DynamicViscosity = DynamicViscosity::new(8.0, DynamicViscosityUnit::PascalSecond);
        let rho: MassDensity = MassDensity::new(4.0, MassDensityUnit::KilogramPerCubicMetre);
        let nu: KinematicViscosity = mu / rho;
        assert_eq!(nu, KinematicViscosity::new(2.0, DiffusivityUnit::SquareMetrePerSecond));
        assert_eq!(KinematicViscosity::from_dynamic_viscosity(mu, rho), nu);
        assert_eq!(rho * nu, mu);
        assert_eq!(nu * rho, mu);
        assert_eq!(mu / nu, rho);
    }

    #[test]
    fn mass_from_density_and_volume() {
        let rho: MassDensity = MassDensity::new(1.0, MassDensityUnit::GramPerCubicCentimetre);
        let volume: Volume = Volume::new(2.0, VolumeUnit::Litre);
        let mass: Mass = rho * volume;
        assert_relative_eq!(mass.value_in(MassUnit::Kilogram), 2.0, max_relative = 1e-12);
        assert_relative_eq!((mass / volume).value(), 1000.0, max_relative = 1e-12);
        assert_relative_eq!((mass / rho).value_in(VolumeUnit::Litre), 2.0, max_relative = 1e-12);
        let side = Length::new(10.0, LengthUnit::Centimetre);
        assert_relative_eq!(
            (side * side * side).value(),
            volume.value() / 2.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn shear_stress() {
        let mu: DynamicViscosity = DynamicViscosity::new(1.0, DynamicViscosityUnit::Centipoise);
        let rate: StrainRateScalar = StrainRateScalar::new(100.0, FrequencyUnit::Hertz);
        let tau: StressScalar = mu * rate;
        assert_relative_eq!(tau.value(), 0.1, max_relative = 1e-12);
        assert_eq!(rate * mu, tau);
        assert_relative_eq!((tau / mu).value(), 100.0, max_relative = 1e-12);
        assert_relative_eq!((tau / rate).value(), 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn static_pressure_round_trip() {
        let p: StaticPressure = StaticPressure::new(1.0, PressureUnit::Atmosphere);
        let stress = Stress::from_static_pressure(p);
        assert_eq!(stress.value().xx, -101_325.0);
        assert_eq!(stress.value().xy, 0.0);
        assert_relative_eq!(stress.static_pressure().value(), 101_325.0, max_relative = 1e-15);
        assert_eq!(Stress::<f64>::zero().static_pressure().value(), 0.0);
    }

    #[test]
    fn stress_and_strain_rate_are_distinct_kinds() {
        let rate: StrainRate = StrainRate::zero();
        let stress: Stress = Stress::zero();
        assert_eq!(rate.value(), stress.value());
        assert_ne!(StrainRate::<f64>::dimensions(), Stress::<f64>::dimensions());
    }
}

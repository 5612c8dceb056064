//! Dimensionless groups of fluid mechanics and heat transfer.
//!
//! Every group can be formed from its defining quantities, and every defining quantity can be
//! recovered from the group and the others, either as a constructor on the quantity
//! (`Speed::from_reynolds_number`) or as a method on the group (`ReynoldsNumber::speed`).

use super::{
    DynamicViscosity, KinematicViscosity, Length, MassDensity, SpecificIsobaricHeatCapacity, Speed,
    ThermalConductivityScalar, ThermalDiffusivity,
};
use crate::Number;

quantity! {
    /// Ratio of inertial to viscous forces, `Re = ρ·v·L/μ = v·L/ν`.
    ReynoldsNumber(ReynoldsNumberKind): DimensionlessScalar
}

quantity! {
    /// Ratio of momentum to heat diffusivity, `Pr = ν/α = c_p·μ/k`.
    PrandtlNumber(PrandtlNumberKind): DimensionlessScalar
}

impl_product!(PrandtlNumber * ThermalDiffusivity = KinematicViscosity);

// ─────────────────────────────────────────────────────────────────────────────
// Reynolds number
// ─────────────────────────────────────────────────────────────────────────────

impl<N: Number> ReynoldsNumber<N> {
    /// `Re = ρ·v·L/μ`.
    pub fn from_dynamic_viscosity(
        mass_density: MassDensity<N>,
        speed: Speed<N>,
        length: Length<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Self {
        Self::from_standard(
            mass_density.value() * speed.value() * length.value() / dynamic_viscosity.value(),
        )
    }

    /// `Re = v·L/ν`.
    pub fn from_kinematic_viscosity(
        speed: Speed<N>,
        length: Length<N>,
        kinematic_viscosity: KinematicViscosity<N>,
    ) -> Self {
        Self::from_standard(speed.value() * length.value() / kinematic_viscosity.value())
    }

    /// Mass density giving this Reynolds number.
    pub fn mass_density(
        &self,
        speed: Speed<N>,
        length: Length<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> MassDensity<N> {
        MassDensity::from_reynolds_number(*self, speed, length, dynamic_viscosity)
    }

    /// Speed giving this Reynolds number.
    pub fn speed(
        &self,
        mass_density: MassDensity<N>,
        length: Length<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Speed<N> {
        Speed::from_reynolds_number(*self, mass_density, length, dynamic_viscosity)
    }

    /// Length giving this Reynolds number.
    pub fn length(
        &self,
        mass_density: MassDensity<N>,
        speed: Speed<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Length<N> {
        Length::from_reynolds_number(*self, mass_density, speed, dynamic_viscosity)
    }

    /// Dynamic viscosity giving this Reynolds number.
    pub fn dynamic_viscosity(
        &self,
        mass_density: MassDensity<N>,
        speed: Speed<N>,
        length: Length<N>,
    ) -> DynamicViscosity<N> {
        DynamicViscosity::from_reynolds_number(*self, mass_density, speed, length)
    }

    /// Kinematic viscosity giving this Reynolds number.
    pub fn kinematic_viscosity(&self, speed: Speed<N>, length: Length<N>) -> KinematicViscosity<N> {
        KinematicViscosity::from_reynolds_number(*self, speed, length)
    }
}

impl<N: Number> MassDensity<N> {
    /// `ρ = Re·μ/(v·L)`.
    pub fn from_reynolds_number(
        reynolds_number: ReynoldsNumber<N>,
        speed: Speed<N>,
        length: Length<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Self {
        Self::from_standard(
            reynolds_number.value() * dynamic_viscosity.value() / (speed.value() * length.value()),
        )
    }
}

impl<N: Number> Speed<N> {
    /// `v = Re·μ/(ρ·L)`.
    pub fn from_reynolds_number(
        reynolds_number: ReynoldsNumber<N>,
        mass_density: MassDensity<N>,
        length: Length<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Self {
        Self::from_standard(
            reynolds_number.value() * dynamic_viscosity.value()
                / (mass_density.value() * length.value()),
        )
    }

    /// `v = Re·ν/L`.
    pub fn from_reynolds_number_and_kinematic_viscosity(
        reynolds_number: ReynoldsNumber<N>,
        length: Length<N>,
        kinematic_viscosity: KinematicViscosity<N>,
    ) -> Self {
        Self::from_standard(reynolds_number.value() * kinematic_viscosity.value() / length.value())
    }
}

impl<N: Number> Length<N> {
    /// `L = Re·μ/(ρ·v)`.
    pub fn from_reynolds_number(
        reynolds_number: ReynoldsNumber<N>,
        mass_density: MassDensity<N>,
        speed: Speed<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Self {
        Self::from_standard(
            reynolds_number.value() * dynamic_viscosity.value()
                / (mass_density.value() * speed.value()),
        )
    }

    /// `L = Re·ν/v`.
    pub fn from_reynolds_number_and_kinematic_viscosity(
        reynolds_number: ReynoldsNumber<N>,
        speed: Speed<N>,
        kinematic_viscosity: KinematicViscosity<N>,
    ) -> Self {
        Self::from_standard(reynolds_number.value() * kinematic_viscosity.value() / speed.value())
    }
}

impl<N: Number> DynamicViscosity<N> {
    /// `μ = ρ·v·L/Re`.
    pub fn from_reynolds_number(
        reynolds_number: ReynoldsNumber<N>,
        mass_density: MassDensity<N>,
        speed: Speed<N>,
        length: Length<N>,
    ) -> Self {
        Self::from_standard(
            mass_density.value() * speed.value() * length.value() / reynolds_number.value(),
        )
    }

    /// `μ = Pr·k/c_p`.
    pub fn from_prandtl_number(
        prandtl_number: PrandtlNumber<N>,
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
        thermal_conductivity: ThermalConductivityScalar<N>,
    ) -> Self {
        Self::from_standard(
            prandtl_number.value() * thermal_conductivity.value() / specific_heat_capacity.value(),
        )
    }
}

impl<N: Number> KinematicViscosity<N> {
    /// `ν = v·L/Re`.
    pub fn from_reynolds_number(
        reynolds_number: ReynoldsNumber<N>,
        speed: Speed<N>,
        length: Length<N>,
    ) -> Self {
        Self::from_standard(speed.value() * length.value() / reynolds_number.value())
    }

    /// `ν = Pr·α`.
    pub fn from_prandtl_number(
        prandtl_number: PrandtlNumber<N>,
        thermal_diffusivity: ThermalDiffusivity<N>,
    ) -> Self {
        prandtl_number * thermal_diffusivity
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Prandtl number
// ─────────────────────────────────────────────────────────────────────────────

impl<N: Number> PrandtlNumber<N> {
    /// `Pr = ν/α`.
    pub fn from_diffusivities(
        kinematic_viscosity: KinematicViscosity<N>,
        thermal_diffusivity: ThermalDiffusivity<N>,
    ) -> Self {
        kinematic_viscosity / thermal_diffusivity
    }

    /// `Pr = c_p·μ/k`.
    pub fn from_properties(
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
        dynamic_viscosity: DynamicViscosity<N>,
        thermal_conductivity: ThermalConductivityScalar<N>,
    ) -> Self {
        Self::from_standard(
            specific_heat_capacity.value() * dynamic_viscosity.value()
                / thermal_conductivity.value(),
        )
    }

    /// Kinematic viscosity giving this Prandtl number.
    pub fn kinematic_viscosity(
        &self,
        thermal_diffusivity: ThermalDiffusivity<N>,
    ) -> KinematicViscosity<N> {
        KinematicViscosity::from_prandtl_number(*self, thermal_diffusivity)
    }

    /// Thermal diffusivity giving this Prandtl number.
    pub fn thermal_diffusivity(
        &self,
        kinematic_viscosity: KinematicViscosity<N>,
    ) -> ThermalDiffusivity<N> {
        ThermalDiffusivity::from_prandtl_number(*self, kinematic_viscosity)
    }

    /// Specific isobaric heat capacity giving this Prandtl number.
    pub fn specific_isobaric_heat_capacity(
        &self,
        dynamic_viscosity: DynamicViscosity<N>,
        thermal_conductivity: ThermalConductivityScalar<N>,
    ) -> SpecificIsobaricHeatCapacity<N> {
        SpecificIsobaricHeatCapacity::from_prandtl_number(
            *self,
            dynamic_viscosity,
            thermal_conductivity,
        )
    }

    /// Dynamic viscosity giving this Prandtl number.
    pub fn dynamic_viscosity(
        &self,
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
        thermal_conductivity: ThermalConductivityScalar<N>,
    ) -> DynamicViscosity<N> {
        DynamicViscosity::from_prandtl_number(*self, specific_heat_capacity, thermal_conductivity)
    }

    /// Thermal conductivity giving this Prandtl number.
    pub fn thermal_conductivity(
        &self,
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> ThermalConductivityScalar<N> {
        ThermalConductivityScalar::from_prandtl_number(
            *self,
            specific_heat_capacity,
            dynamic_viscosity,
        )
    }
}

impl<N: Number> ThermalDiffusivity<N> {
    /// `α = ν/Pr`.
    pub fn from_prandtl_number(
        prandtl_number: PrandtlNumber<N>,
        kinematic_viscosity: KinematicViscosity<N>,
    ) -> Self {
        kinematic_viscosity / prandtl_number
    }
}

impl<N: Number> SpecificIsobaricHeatCapacity<N> {
    /// `c_p = Pr·k/μ`.
    pub fn from_prandtl_number(
        prandtl_number: PrandtlNumber<N>,
        dynamic_viscosity: DynamicViscosity<N>,
        thermal_conductivity: ThermalConductivityScalar<N>,
    ) -> Self {
        Self::from_standard(
            prandtl_number.value() * thermal_conductivity.value() / dynamic_viscosity.value(),
        )
    }
}

impl<N: Number> ThermalConductivityScalar<N> {
    /// `k = c_p·μ/Pr`.
    pub fn from_prandtl_number(
        prandtl_number: PrandtlNumber<N>,
        specific_heat_capacity: SpecificIsobaricHeatCapacity<N>,
        dynamic_viscosity: DynamicViscosity<N>,
    ) -> Self {
        Self::from_standard(
            specific_heat_capacity.value() * dynamic_viscosity.value() / prandtl_number.value(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{
        DiffusivityUnit, DynamicViscosityUnit, LengthUnit, MassDensityUnit,
        SpecificHeatCapacityUnit, SpeedUnit, ThermalConductivityUnit,
    };
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn rho(v: f64) -> MassDensity {
        MassDensity::new(v, MassDensityUnit::KilogramPerCubicMetre)
    }

    fn speed(v: f64) -> Speed {
        Speed::new(v, SpeedUnit::MetrePerSecond)
    }

    fn length(v: f64) -> Length {
        Length::new(v, LengthUnit::Metre)
    }

    fn mu(v: f64) -> DynamicViscosity {
        DynamicViscosity::new(v, DynamicViscosityUnit::PascalSecond)
    }

    #[test]
    fn reynolds_number_of_a_pipe_flow() {
        let re = ReynoldsNumber::from_dynamic_viscosity(rho(1.0), speed(2.0), length(3.0), mu(0.5));
        assert_eq!(re, ReynoldsNumber::new(12.0));
        assert_eq!(
            re.kinematic_viscosity(speed(2.0), length(3.0)),
            KinematicViscosity::new(0.5, DiffusivityUnit::SquareMetrePerSecond)
        );
    }

    #[test]
    fn reynolds_inverses() {
        let re = ReynoldsNumber::new(12.0);
        assert_eq!(re.mass_density(speed(2.0), length(3.0), mu(0.5)), rho(1.0));
        assert_eq!(re.speed(rho(1.0), length(3.0), mu(0.5)), speed(2.0));
        assert_eq!(re.length(rho(1.0), speed(2.0), mu(0.5)), length(3.0));
        assert_eq!(re.dynamic_viscosity(rho(1.0), speed(2.0), length(3.0)), mu(0.5));

        let nu = KinematicViscosity::new(0.5, DiffusivityUnit::SquareMetrePerSecond);
        assert_eq!(
            Speed::from_reynolds_number_and_kinematic_viscosity(re, length(3.0), nu),
            speed(2.0)
        );
        assert_eq!(
            Length::from_reynolds_number_and_kinematic_viscosity(re, speed(2.0), nu),
            length(3.0)
        );
    }

    #[test]
    fn prandtl_number_of_air() {
        let cp = SpecificIsobaricHeatCapacity::new(
            1.005,
            SpecificHeatCapacityUnit::KilojoulePerKilogramPerKelvin,
        );
        let mu = DynamicViscosity::new(1.81e-5, DynamicViscosityUnit::PascalSecond);
        let k =
            ThermalConductivityScalar::new(0.0257, ThermalConductivityUnit::WattPerMetrePerKelvin);
        let pr = PrandtlNumber::from_properties(cp, mu, k);
        assert_relative_eq!(pr.value(), 0.7078, max_relative = 1e-3);

        assert_relative_eq!(
            pr.specific_isobaric_heat_capacity(mu, k).value(),
            cp.value(),
            max_relative = 1e-14
        );
        assert_relative_eq!(pr.dynamic_viscosity(cp, k).value(), mu.value(), max_relative = 1e-14);
        assert_relative_eq!(
            pr.thermal_conductivity(cp, mu).value(),
            k.value(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn prandtl_from_diffusivities() {
        let nu = KinematicViscosity::new(1.5, DiffusivityUnit::Centistokes);
        let alpha = ThermalDiffusivity::new(0.15, DiffusivityUnit::SquareMillimetrePerSecond);
        let pr = PrandtlNumber::from_diffusivities(nu, alpha);
        assert_relative_eq!(pr.value(), 10.0, max_relative = 1e-12);
        assert_relative_eq!(
            pr.kinematic_viscosity(alpha).value(),
            nu.value(),
            max_relative = 1e-14
        );
        assert_relative_eq!(
            pr.thermal_diffusivity(nu).value(),
            alpha.value(),
            max_relative = 1e-14
        );
        assert_relative_eq!((pr * alpha).value(), nu.value(), max_relative = 1e-14);
        assert_relative_eq!((alpha * pr).value(), nu.value(), max_relative = 1e-14);
    }

    proptest! {
        #[test]
        fn prop_reynolds_forms_agree(
            r in 0.1..2000.0f64,
            v in 0.01..100.0f64,
            l in 0.001..10.0f64,
            m in 1e-6..10.0f64,
        ) {
            let re = ReynoldsNumber::from_dynamic_viscosity(rho(r), speed(v), length(l), mu(m));
            let nu: KinematicViscosity = mu(m) / rho(r);
            let re_kinematic = ReynoldsNumber::from_kinematic_viscosity(speed(v), length(l), nu);
            prop_assert!((re.value() - re_kinematic.value()).abs() <= 1e-12 * re.value());

            let r_back = re.mass_density(speed(v), length(l), mu(m)).value();
            prop_assert!((r_back - r).abs() <= 1e-12 * r);
            prop_assert!((re.speed(rho(r), length(l), mu(m)).value() - v).abs() <= 1e-12 * v);
            prop_assert!((re.length(rho(r), speed(v), mu(m)).value() - l).abs() <= 1e-12 * l);
            let m_back = re.dynamic_viscosity(rho(r), speed(v), length(l)).value();
            prop_assert!((m_back - m).abs() <= 1e-12 * m);
        }

        #[test]
        fn prop_prandtl_forms_agree(
            r in 0.1..2000.0f64,
            cp in 100.0..5000.0f64,
            m in 1e-6..10.0f64,
            k in 0.01..500.0f64,
        ) {
            let (rho, cp, mu, k) = (
                rho(r),
                SpecificIsobaricHeatCapacity::new(
                    cp,
                    SpecificHeatCapacityUnit::JoulePerKilogramPerKelvin,
                ),
                mu(m),
                ThermalConductivityScalar::new(k, ThermalConductivityUnit::WattPerMetrePerKelvin),
            );
            let nu = KinematicViscosity::from_dynamic_viscosity(mu, rho);
            let alpha = ThermalDiffusivity::from_thermal_conductivity(k, rho, cp);
            let from_diffusivities = PrandtlNumber::from_diffusivities(nu, alpha);
            let from_properties = PrandtlNumber::from_properties(cp, mu, k);
            let difference = (from_diffusivities.value() - from_properties.value()).abs();
            prop_assert!(difference <= 1e-12 * from_properties.value());
        }
    }
}

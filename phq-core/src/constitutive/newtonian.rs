use super::{ConstitutiveModel, ConstitutiveModelKind};
use crate::number::Number;
use crate::quantities::{BulkDynamicViscosity, DynamicViscosity, Strain, StrainRate, Stress};
use crate::value::SymmetricDyadic;
use log::warn;

/// Newtonian fluid that does not change volume: `σ = 2μ·D`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IncompressibleNewtonianFluid<N: Number = f64> {
    dynamic_viscosity: DynamicViscosity<N>,
}

impl<N: Number> IncompressibleNewtonianFluid<N> {
    /// Creates the model from its shear viscosity.
    pub fn new(dynamic_viscosity: DynamicViscosity<N>) -> Self {
        Self { dynamic_viscosity }
    }

    /// Shear viscosity `μ`.
    pub fn dynamic_viscosity(&self) -> DynamicViscosity<N> {
        self.dynamic_viscosity
    }
}

impl<N: Number> ConstitutiveModel<N> for IncompressibleNewtonianFluid<N> {
    fn kind(&self) -> ConstitutiveModelKind {
        ConstitutiveModelKind::IncompressibleNewtonianFluid
    }

    fn stress(&self, _strain: Strain<N>, strain_rate: StrainRate<N>) -> Stress<N> {
        Stress::from_standard(
            strain_rate.value() * (N::from_f64(2.0) * self.dynamic_viscosity.value()),
        )
    }

    fn strain(&self, _stress: Stress<N>) -> Strain<N> {
        Strain::zero()
    }

    fn strain_rate(&self, stress: Stress<N>) -> StrainRate<N> {
        let a = N::from_f64(2.0) * self.dynamic_viscosity.value();
        if a == N::zero() {
            warn!("cannot invert {} with zero dynamic viscosity", self.kind());
        }
        StrainRate::from_standard(stress.value() / a)
    }

    fn print(&self) -> String {
        format!("{} (dynamic viscosity = {})", self.kind(), self.dynamic_viscosity.print())
    }

    fn json(&self) -> String {
        format!(
            "{{\"type\":\"{}\",\"dynamic_viscosity\":{}}}",
            self.kind().identifier(),
            self.dynamic_viscosity.json()
        )
    }

    fn xml(&self) -> String {
        format!(
            "<type>{}</type><dynamic_viscosity>{}</dynamic_viscosity>",
            self.kind().identifier(),
            self.dynamic_viscosity.xml()
        )
    }

    fn yaml(&self) -> String {
        format!(
            "{{type:\"{}\",dynamic_viscosity:{}}}",
            self.kind().identifier(),
            self.dynamic_viscosity.yaml()
        )
    }
}

/// Newtonian fluid with volumetric viscous response: `σ = 2μ·D + κ·tr(D)·I`.
///
/// The inverse splits the stress into its deviatoric and mean parts: `D = dev(σ)/(2μ) +
/// tr(σ)/(3·(2μ + 3κ))·I`. It needs `μ ≠ 0`; when `2μ + 3κ = 0` the volumetric part is only
/// recoverable from a traceless stress, which maps to a traceless strain rate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CompressibleNewtonianFluid<N: Number = f64> {
    dynamic_viscosity: DynamicViscosity<N>,
    bulk_dynamic_viscosity: BulkDynamicViscosity<N>,
}

impl<N: Number> CompressibleNewtonianFluid<N> {
    /// Creates the model from its shear and bulk viscosities.
    pub fn new(
        dynamic_viscosity: DynamicViscosity<N>,
        bulk_dynamic_viscosity: BulkDynamicViscosity<N>,
    ) -> Self {
        Self {
            dynamic_viscosity,
            bulk_dynamic_viscosity,
        }
    }

    /// Shear viscosity `μ`.
    pub fn dynamic_viscosity(&self) -> DynamicViscosity<N> {
        self.dynamic_viscosity
    }

    /// Bulk viscosity `κ`.
    pub fn bulk_dynamic_viscosity(&self) -> BulkDynamicViscosity<N> {
        self.bulk_dynamic_viscosity
    }

    // (a, b) = (2μ, κ)
    fn coefficients(&self) -> (N, N) {
        (N::from_f64(2.0) * self.dynamic_viscosity.value(), self.bulk_dynamic_viscosity.value())
    }
}

impl<N: Number> ConstitutiveModel<N> for CompressibleNewtonianFluid<N> {
    fn kind(&self) -> ConstitutiveModelKind {
        ConstitutiveModelKind::CompressibleNewtonianFluid
    }

    fn stress(&self, _strain: Strain<N>, strain_rate: StrainRate<N>) -> Stress<N> {
        let (a, b) = self.coefficients();
        let d = strain_rate.value();
        Stress::from_standard(d * a + SymmetricDyadic::identity() * (b * d.trace()))
    }

    fn strain(&self, _stress: Stress<N>) -> Strain<N> {
        Strain::zero()
    }

    fn strain_rate(&self, stress: Stress<N>) -> StrainRate<N> {
        let (a, b) = self.coefficients();
        let volumetric = a + N::from_f64(3.0) * b;
        if a == N::zero() || volumetric == N::zero() {
            warn!(
                "cannot fully invert {} with dynamic viscosity {} and bulk dynamic viscosity {}",
                self.kind(),
                self.dynamic_viscosity,
                self.bulk_dynamic_viscosity
            );
        }
        let sigma = stress.value();
        let trace = sigma.trace();
        let three = N::from_f64(3.0);
        let deviatoric = sigma - SymmetricDyadic::identity() * (trace / three);
        // tr(D) = tr(σ)/(2μ + 3κ); a traceless stress stays traceless even when that is singular.
        let dilatation = if trace == N::zero() { N::zero() } else { trace / volumetric };
        StrainRate::from_standard(
            deviatoric / a + SymmetricDyadic::identity() * (dilatation / three),
        )
    }

    fn print(&self) -> String {
        format!(
            "{} (dynamic viscosity = {}, bulk dynamic viscosity = {})",
            self.kind(),
            self.dynamic_viscosity.print(),
            self.bulk_dynamic_viscosity.print()
        )
    }

    fn json(&self) -> String {
        format!(
            "{{\"type\":\"{}\",\"dynamic_viscosity\":{},\"bulk_dynamic_viscosity\":{}}}",
            self.kind().identifier(),
            self.dynamic_viscosity.json(),
            self.bulk_dynamic_viscosity.json()
        )
    }

    fn xml(&self) -> String {
        format!(
            "<type>{}</type><dynamic_viscosity>{}</dynamic_viscosity>\
             <bulk_dynamic_viscosity>{}</bulk_dynamic_viscosity>",
            self.kind().identifier(),
            self.dynamic_viscosity.xml(),
            self.bulk_dynamic_viscosity.xml()
        )
    }

    fn yaml(&self) -> String {
        format!(
            "{{type:\"{}\",dynamic_viscosity:{},bulk_dynamic_viscosity:{}}}",
            self.kind().identifier(),
            self.dynamic_viscosity.yaml(),
            self.bulk_dynamic_viscosity.yaml()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{DynamicViscosityUnit, FrequencyUnit, PressureUnit};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn compressible(mu: f64, kappa: f64) -> CompressibleNewtonianFluid {
        CompressibleNewtonianFluid::new(
            DynamicViscosity::new(mu, DynamicViscosityUnit::PascalSecond),
            BulkDynamicViscosity::new(kappa, DynamicViscosityUnit::PascalSecond),
        )
    }

    fn hertz(xx: f64, xy: f64, xz: f64, yy: f64, yz: f64, zz: f64) -> StrainRate {
        StrainRate::new(SymmetricDyadic::new(xx, xy, xz, yy, yz, zz), FrequencyUnit::Hertz)
    }

    fn assert_close(a: SymmetricDyadic, b: SymmetricDyadic, scale: f64) {
        for (x, y) in a.to_array().iter().zip(b.to_array().iter()) {
            assert!((x - y).abs() <= 1e-12 * scale, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn incompressible_shear() {
        let mu = DynamicViscosity::new(1.0, DynamicViscosityUnit::Centipoise);
        let fluid = IncompressibleNewtonianFluid::new(mu);
        let rate = hertz(0.0, 50.0, 0.0, 0.0, 0.0, 0.0);
        let stress = fluid.stress_from_strain_rate(rate);
        assert_relative_eq!(stress.value().xy, 0.1, max_relative = 1e-12);
        assert_close(fluid.strain_rate(stress).value(), rate.value(), 50.0);
        assert_eq!(fluid.strain(stress), Strain::zero());
    }

    #[test]
    fn compressible_zero_rate_gives_zero_stress() {
        let fluid = compressible(6.0, -4.0);
        assert_eq!(fluid.stress_from_strain_rate(StrainRate::zero()), Stress::zero());
    }

    #[test]
    fn compressible_trace_term_uses_bulk_viscosity() {
        let fluid = compressible(6.0, -4.0);
        let rate = hertz(1.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let stress = fluid.stress_from_strain_rate(rate).value();
        assert_eq!(stress, SymmetricDyadic::new(8.0, 0.0, 0.0, -4.0, 0.0, -4.0));
    }

    #[test]
    fn compressible_round_trip() {
        let fluid = compressible(6.0, 4.0);
        let rate = hertz(1.0, -2.0, 4.0, -8.0, 16.0, -32.0);
        let stress = fluid.stress_from_strain_rate(rate);
        assert_close(fluid.strain_rate(stress).value(), rate.value(), 32.0);
    }

    #[test]
    fn compressible_round_trip_with_singular_volumetric_response() {
        // 2μ + 3κ = 0: only traceless rates are recoverable.
        let fluid = compressible(6.0, -4.0);
        let rate = hertz(1.0, 2.0, -1.0, -3.0, 0.5, 2.0);
        let stress = fluid.stress_from_strain_rate(rate);
        assert_eq!(stress.value(), rate.value() * 12.0);
        assert_close(fluid.strain_rate(stress).value(), rate.value(), 4.0);
    }

    #[test]
    fn compressible_reduces_to_incompressible_without_dilatation() {
        let fluid = compressible(2.0, 7.0);
        let shear = hertz(1.0, 3.0, 0.0, -1.0, 0.0, 0.0);
        let incompressible = IncompressibleNewtonianFluid::new(fluid.dynamic_viscosity());
        assert_close(
            fluid.stress_from_strain_rate(shear).value(),
            incompressible.stress_from_strain_rate(shear).value(),
            12.0,
        );
    }

    #[test]
    fn mean_normal_stress_follows_volumetric_coefficient() {
        // -p = (2μ + 3κ)·tr(D)/3
        let fluid = compressible(1.5, 2.5);
        let rate = hertz(1.0, 0.0, 0.0, 2.0, 0.0, 3.0);
        let pressure = fluid.stress_from_strain_rate(rate).static_pressure();
        assert_relative_eq!(pressure.value(), -(3.0 + 7.5) * 6.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn singular_inversion_yields_non_finite_values() {
        let fluid = compressible(0.0, 1.0);
        let stress = Stress::new(SymmetricDyadic::identity(), PressureUnit::Pascal);
        let rate = fluid.strain_rate(stress).value();
        assert!(rate.to_array().iter().any(|x| !x.is_finite()));
    }

    #[test]
    fn text_formats() {
        let fluid = compressible(6.0, -4.0);
        assert_eq!(
            fluid.print(),
            "Compressible Newtonian Fluid (dynamic viscosity = 6.000000000000000 Pa·s, \
             bulk dynamic viscosity = -4.000000000000000 Pa·s)"
        );
        assert_eq!(
            fluid.json(),
            "{\"type\":\"CompressibleNewtonianFluid\",\
             \"dynamic_viscosity\":{\"value\":6.000000000000000,\"unit\":\"Pa·s\"},\
             \"bulk_dynamic_viscosity\":{\"value\":-4.000000000000000,\"unit\":\"Pa·s\"}}"
        );
        let simple = IncompressibleNewtonianFluid::new(DynamicViscosity::new(
            0.5,
            DynamicViscosityUnit::PascalSecond,
        ));
        assert_eq!(
            simple.xml(),
            "<type>IncompressibleNewtonianFluid</type><dynamic_viscosity>\
             <value>0.500000000000000</value><unit>Pa·s</unit></dynamic_viscosity>"
        );
        assert_eq!(
            simple.yaml(),
            "{type:\"IncompressibleNewtonianFluid\",\
             dynamic_viscosity:{value:0.500000000000000,unit:\"Pa·s\"}}"
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let fluid = compressible(6.0, -4.0);
        let json = serde_json::to_string(&fluid).unwrap();
        let back: CompressibleNewtonianFluid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fluid);
    }

    proptest! {
        #[test]
        fn prop_compressible_round_trip(
            mu in 0.01..100.0f64,
            kappa in 0.01..100.0f64,
            c in proptest::array::uniform6(-10.0..10.0f64),
        ) {
            let fluid = compressible(mu, kappa);
            let rate = hertz(c[0], c[1], c[2], c[3], c[4], c[5]);
            let back = fluid.strain_rate(fluid.stress_from_strain_rate(rate)).value();
            for (x, y) in back.to_array().iter().zip(rate.value().to_array().iter()) {
                prop_assert!((x - y).abs() <= 1e-9);
            }

            let stress = Stress::new(
                SymmetricDyadic::new(c[5], c[4], c[3], c[2], c[1], c[0]),
                PressureUnit::Pascal,
            );
            let back = fluid.stress_from_strain_rate(fluid.strain_rate(stress)).value();
            for (x, y) in back.to_array().iter().zip(stress.value().to_array().iter()) {
                prop_assert!((x - y).abs() <= 1e-9);
            }
        }
    }
}

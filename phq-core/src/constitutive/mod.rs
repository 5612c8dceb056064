//! Constitutive models: material laws relating stress to strain and strain rate.
//!
//! ```rust
//! use phq_core::constitutive::{CompressibleNewtonianFluid, ConstitutiveModel};
//! use phq_core::quantities::{BulkDynamicViscosity, DynamicViscosity, StrainRate};
//! use phq_core::units::{DynamicViscosityUnit, FrequencyUnit};
//! use phq_core::value::SymmetricDyadic;
//!
//! let water = CompressibleNewtonianFluid::new(
//!     DynamicViscosity::new(1.0_f64, DynamicViscosityUnit::Centipoise),
//!     BulkDynamicViscosity::new(3.0, DynamicViscosityUnit::Centipoise),
//! );
//! let shear = SymmetricDyadic::new(0.0_f64, 10.0, 0.0, 0.0, 0.0, 0.0);
//! let rate = StrainRate::new(shear, FrequencyUnit::Hertz);
//! let stress = water.stress_from_strain_rate(rate);
//! assert!((stress.value().xy - 0.02).abs() < 1e-15);
//! ```

mod newtonian;

pub use newtonian::{CompressibleNewtonianFluid, IncompressibleNewtonianFluid};

use crate::number::Number;
use crate::quantities::{Strain, StrainRate, Stress};
use core::fmt::{self, Debug, Display, Formatter};

/// Identifies a constitutive model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConstitutiveModelKind {
    /// See [`IncompressibleNewtonianFluid`].
    IncompressibleNewtonianFluid,
    /// See [`CompressibleNewtonianFluid`].
    CompressibleNewtonianFluid,
}

impl ConstitutiveModelKind {
    /// Every model kind.
    pub const ALL: [Self; 2] =
        [Self::IncompressibleNewtonianFluid, Self::CompressibleNewtonianFluid];

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::IncompressibleNewtonianFluid => "Incompressible Newtonian Fluid",
            Self::CompressibleNewtonianFluid => "Compressible Newtonian Fluid",
        }
    }

    /// Identifier used in the structured text formats.
    pub fn identifier(self) -> &'static str {
        match self {
            Self::IncompressibleNewtonianFluid => "IncompressibleNewtonianFluid",
            Self::CompressibleNewtonianFluid => "CompressibleNewtonianFluid",
        }
    }
}

impl Display for ConstitutiveModelKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A material law.
///
/// Models are object safe, so heterogeneous collections can be held as `Box<dyn
/// ConstitutiveModel>`.
pub trait ConstitutiveModel<N: Number = f64>: Debug + Send + Sync {
    /// Which model this is.
    fn kind(&self) -> ConstitutiveModelKind;

    /// Stress for a given strain and strain rate.
    fn stress(&self, strain: Strain<N>, strain_rate: StrainRate<N>) -> Stress<N>;

    /// Stress for a given strain rate at zero strain.
    fn stress_from_strain_rate(&self, strain_rate: StrainRate<N>) -> Stress<N> {
        self.stress(Strain::zero(), strain_rate)
    }

    /// Strain sustaining `stress`. Fluids sustain no strain, so they return zero.
    fn strain(&self, stress: Stress<N>) -> Strain<N>;

    /// Strain rate sustaining `stress`.
    fn strain_rate(&self, stress: Stress<N>) -> StrainRate<N>;

    /// Human-readable form listing the model and its parameters.
    fn print(&self) -> String;

    /// JSON form: `{"type":"…",<parameters>}`.
    fn json(&self) -> String;

    /// XML form: `<type>…</type><parameters…>`.
    fn xml(&self) -> String;

    /// YAML flow form: `{type:"…",<parameters>}`.
    fn yaml(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantities::{BulkDynamicViscosity, DynamicViscosity};
    use crate::units::DynamicViscosityUnit;

    #[test]
    fn kind_names() {
        assert_eq!(
            ConstitutiveModelKind::CompressibleNewtonianFluid.to_string(),
            "Compressible Newtonian Fluid"
        );
        assert_eq!(
            ConstitutiveModelKind::IncompressibleNewtonianFluid.identifier(),
            "IncompressibleNewtonianFluid"
        );
        assert!(ConstitutiveModelKind::ALL[0] < ConstitutiveModelKind::ALL[1]);
    }

    #[test]
    fn models_are_object_safe() {
        let mu = DynamicViscosity::new(1.0, DynamicViscosityUnit::PascalSecond);
        let models: Vec<Box<dyn ConstitutiveModel>> = vec![
            Box::new(IncompressibleNewtonianFluid::new(mu)),
            Box::new(CompressibleNewtonianFluid::new(
                mu,
                BulkDynamicViscosity::new(0.0, DynamicViscosityUnit::PascalSecond),
            )),
        ];
        let kinds: Vec<_> = models.iter().map(|m| m.kind()).collect();
        assert_eq!(kinds, ConstitutiveModelKind::ALL.to_vec());
        for model in &models {
            assert_eq!(model.strain(Stress::zero()), Strain::zero());
            assert_eq!(model.stress_from_strain_rate(StrainRate::zero()), Stress::zero());
        }
    }
}

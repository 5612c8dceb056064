//! Strongly typed physical quantities with dimensionally checked algebra.
//!
//! `phq` is the user-facing crate in this workspace. It re-exports the full API from `phq-core`,
//! with the named quantities and unit families also available at the crate root.
//!
//! The core idea is: a quantity is a value stored in the standard unit of its family, tagged with a
//! zero-sized kind. Units are chosen when a value enters (`Length::new(1.0, LengthUnit::Foot)`) and
//! when it leaves (`value_in(LengthUnit::Inch)`); in between, everything works on the stored value.
//!
//! # What this crate solves
//!
//! - Prevents mixing incompatible kinds: you can't add metres to seconds, nor a Reynolds number to
//!   a Prandtl number.
//! - Declares the physical relations between kinds (`Speed · Duration = Length`, `-k·∇T = q`, ...),
//!   with the result kind fixed by the operands.
//! - Provides fluid-mechanics and heat-transfer quantities, dimensionless groups and Newtonian
//!   constitutive models.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary symbolic unit algebra or runtime unit registration.
//! - Exact arithmetic: quantities are backed by `f32` or `f64`.
//!
//! # Quick start
//!
//! ```rust
//! use phq::{DynamicViscosity, KinematicViscosity, MassDensity, ReynoldsNumber, Speed, Length};
//! use phq::{DiffusivityUnit, DynamicViscosityUnit, LengthUnit, MassDensityUnit, SpeedUnit};
//!
//! let mu = DynamicViscosity::new(8.0, DynamicViscosityUnit::PascalSecond);
//! let rho = MassDensity::new(4.0, MassDensityUnit::KilogramPerCubicMetre);
//! let nu: KinematicViscosity = mu / rho;
//! assert_eq!(nu, KinematicViscosity::new(2.0, DiffusivityUnit::SquareMetrePerSecond));
//!
//! let re = ReynoldsNumber::from_kinematic_viscosity(
//!     Speed::new(1.0, SpeedUnit::MetrePerSecond),
//!     Length::new(4.0, LengthUnit::Metre),
//!     nu,
//! );
//! assert_eq!(re.value(), 2.0);
//! ```
//!
//! # Incorrect usage (type error)
//!
//! ```compile_fail
//! use phq::{Duration, Length, LengthUnit, TimeUnit};
//!
//! let d = Length::new(1.0, LengthUnit::Metre);
//! let t = Duration::new(1.0, TimeUnit::Second);
//! let _ = d + t; // cannot add different kinds
//! ```
//!
//! # Modules
//!
//! - `phq::units`: unit families, one module per dimension, with `const` unit markers
//!   (`phq::units::length::Metre`).
//! - `phq::quantities`: named quantities and their relations.
//! - `phq::constitutive`: constitutive models.
//! - `phq::value`: vectors and dyadics.
//! - `phq::dimension`: base dimensions and [`Dimensions`].
//! - `phq::format`: number rendering shared by the text formats.
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for units, containers, quantities and models, and
//!   `from_json`.
//!
//! # Panics and errors
//!
//! Arithmetic and conversions never fail; they follow IEEE-754 behavior (NaN and infinities
//! propagate). Reading quantities from text returns [`ParseResult`].
//!
//! # SemVer and stability
//!
//! This workspace is currently `0.x`. Expect breaking changes between minor versions until `1.0`.
#![forbid(unsafe_code)]

pub use phq_core::*;

pub use phq_core::constitutive::{
    CompressibleNewtonianFluid, ConstitutiveModel, ConstitutiveModelKind,
    IncompressibleNewtonianFluid,
};
pub use phq_core::quantities::*;
pub use phq_core::units::{
    AreaUnit, DiffusivityUnit, DynamicViscosityUnit, EnergyFluxUnit, FrequencyUnit, LengthUnit,
    MassDensityUnit, MassUnit, PressureUnit, SpecificHeatCapacityUnit, SpeedUnit,
    TemperatureDifferenceUnit, TemperatureGradientUnit, TemperatureUnit, ThermalConductivityUnit,
    TimeUnit, VolumeUnit,
};

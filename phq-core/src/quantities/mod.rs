//! Named quantities and the physical relations between them.
//!
//! Each name is an alias of one of the kernels bound to a kind marker, e.g. `Length<N = f64> =
//! DimensionalScalar<LengthKind, N>`. The aliases add no state; what they add is the set of
//! operators and constructors that connect kinds:
//!
//! ```rust
//! use phq_core::quantities::{Duration, Length, Speed};
//! use phq_core::units::{LengthUnit, SpeedUnit, TimeUnit};
//!
//! let d = Length::new(10.0, LengthUnit::Metre);
//! let t = Duration::new(2.0, TimeUnit::Second);
//! let v: Speed = d / t;
//! assert_eq!(v, Speed::new(5.0, SpeedUnit::MetrePerSecond));
//! assert_eq!(v * t, d);
//! ```
//!
//! Combinations with no declared relation do not compile:
//!
//! ```compile_fail
//! use phq_core::quantities::{Length, Mass};
//! use phq_core::units::{LengthUnit, MassUnit};
//!
//! let _ = Length::new(1.0, LengthUnit::Metre) + Mass::new(1.0, MassUnit::Kilogram);
//! ```
//!
//! Every declared relation is checked against the unit families' dimensions at compile time.

mod dimensionless_groups;
mod geometry;
mod kinematics;
mod mechanics;
mod thermal;

pub use dimensionless_groups::*;
pub use geometry::*;
pub use kinematics::*;
pub use mechanics::*;
pub use thermal::*;

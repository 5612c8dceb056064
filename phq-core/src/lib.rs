//! Core type system for dimensionally checked physical quantities.
//!
//! `phq-core` models a physical quantity as a value stored in the standard unit of its unit family,
//! tagged with a zero-sized **kind**:
//!
//! - A *unit family* is an enum implementing [`Unit`] (`LengthUnit`, `PressureUnit`, ...), declared
//!   with `#[derive(Unit)]`. Every family fixes its [`Dimensions`] and a standard unit.
//! - A *payload* is a bare number, a [`Vector`], a [`SymmetricDyadic`] or a [`Dyadic`].
//! - A *kernel* pairs a kind with a payload: [`DimensionalScalar`], [`DimensionalVector`], ...,
//!   [`DimensionlessDyadic`].
//! - A *named quantity* binds a kernel to a kind (`Length`, `Stress`, `ReynoldsNumber`, ...) and
//!   declares the operators relating it to other kinds.
//!
//! Most users should depend on `phq` (the facade crate).
//!
//! # What this crate solves
//!
//! - Compile-time separation of kinds: adding a length to a mass, or two absolute temperatures,
//!   does not compile.
//! - Products and quotients of related kinds yield the right kind (`Length / Duration = Speed`),
//!   each relation checked against the unit families' dimensions at compile time.
//! - Conversion on the way in and out only: equality, hashing and arithmetic work on the stored
//!   standard value.
//! - Stable text forms (plain, JSON, XML, YAML) and serde support.
//!
//! # What this crate does not try to solve
//!
//! - Arbitrary unit expressions. Only the declared families and relations exist.
//! - Exact arithmetic. Values are `f32` or `f64`; IEEE-754 special values propagate.
//!
//! # Quick start
//!
//! ```rust
//! use phq_core::quantities::{Duration, Length, Speed};
//! use phq_core::units::{LengthUnit, SpeedUnit, TimeUnit};
//!
//! let l = Length::new(1.0, LengthUnit::Metre);
//! assert_eq!(l.value_in(LengthUnit::Millimetre), 1000.0);
//!
//! let v = Length::new(10.0, LengthUnit::Metre) / Duration::new(2.0, TimeUnit::Second);
//! assert_eq!(v, Speed::new(5.0, SpeedUnit::MetrePerSecond));
//! assert_eq!(v.print(), "5.000000000000000 m/s");
//! ```
//!
//! # Feature flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for unit enums, value containers, quantities and
//!   constitutive models, plus `from_json` on every kernel.
//!
//! # Panics and errors
//!
//! Arithmetic and conversion never fail: division by zero and overflow produce IEEE-754 infinities
//! and NaN. Reading text is the only fallible operation and reports [`UnitParseError`] or
//! [`ParseError`].
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

// ─────────────────────────────────────────────────────────────────────────────
// Core modules
// ─────────────────────────────────────────────────────────────────────────────

#[macro_use]
mod macros;

pub mod dimension;
mod error;
pub mod format;
mod number;
mod quantity;
mod unit;
pub mod value;

// ─────────────────────────────────────────────────────────────────────────────
// Public re-exports of core types
// ─────────────────────────────────────────────────────────────────────────────

pub use dimension::Dimensions;
pub use error::{ParseError, ParseResult, UnitParseError};
pub use number::Number;
pub use quantity::{
    Additive, Dimensional, DimensionalDyadic, DimensionalKind, DimensionalScalar,
    DimensionalSymmetricDyadic, DimensionalVector, Dimensionless, DimensionlessDyadic,
    DimensionlessScalar, DimensionlessSymmetricDyadic, DimensionlessVector, Kind, Quantity,
    VectorKind,
};
pub use unit::{convert, convert_in_place, Convertible, StaticUnit, Unit};
pub use value::{Dyadic, Payload, SymmetricDyadic, Vector};

/// Derive macro turning an annotated enum into a unit family.
pub use phq_derive::Unit;

// ─────────────────────────────────────────────────────────────────────────────
// Catalogue
// ─────────────────────────────────────────────────────────────────────────────

pub mod units;

pub mod quantities;

pub mod constitutive;

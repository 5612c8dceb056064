//! Quantity kernels.
//!
//! A quantity pairs a stored [`Payload`] with a zero-sized **kind** marker `K`. Dimensional kinds
//! name a unit family through [`DimensionalKind::Unit`], which fixes both the dimensions and the
//! standard unit the payload is stored in. Dimensionless kinds carry no unit at all, but remain
//! distinct types, so a Reynolds number never mixes with a Prandtl number.
//!
//! The eight kernels are aliases of the two generic wrappers:
//!
//! | payload | with unit | without |
//! |---|---|---|
//! | number | [`DimensionalScalar`] | [`DimensionlessScalar`] |
//! | [`Vector`] | [`DimensionalVector`] | [`DimensionlessVector`] |
//! | [`SymmetricDyadic`] | [`DimensionalSymmetricDyadic`] | [`DimensionlessSymmetricDyadic`] |
//! | [`Dyadic`] | [`DimensionalDyadic`] | [`DimensionlessDyadic`] |
//!
//! Everything that does not depend on the payload shape (construction, observation in a unit,
//! comparison, hashing, text formats, serde, same-kind arithmetic) is written once on
//! [`Dimensional`] and [`Dimensionless`].

mod dimensional;
mod dimensionless;
#[cfg(feature = "serde")]
mod serialization;

pub use dimensional::Dimensional;
pub use dimensionless::Dimensionless;

use crate::dimension::Dimensions;
use crate::unit::Unit;
use crate::value::{Dyadic, Payload, SymmetricDyadic, Vector};

/// A quantity kind: the zero-sized tag that makes, e.g., `Length` and `Speed` different types.
pub trait Kind: 'static {
    /// Name of the kind, used by `Debug` and by serialization.
    const NAME: &'static str;
}

/// A kind measured in a unit family.
pub trait DimensionalKind: Kind {
    /// Unit family of the kind.
    type Unit: Unit;
}

/// Kinds whose values can be added to and subtracted from each other.
///
/// Absolute temperature is the one kind that opts out: adding two temperatures has no physical
/// meaning, only adding a temperature difference does.
pub trait Additive: Kind {}

/// Vector kinds with a scalar counterpart measured in the same unit family.
pub trait VectorKind: DimensionalKind {
    /// Kind of the vector's magnitude.
    type Magnitude: DimensionalKind<Unit = Self::Unit>;
}

/// Common interface of every kernel.
///
/// `stored` and `from_stored` work in the standard unit. They are what the cross-kind operators are
/// written in terms of, since products of stored values are themselves in standard units.
pub trait Quantity: Copy {
    /// Stored value type.
    type Payload: Payload;

    /// Physical dimensions of the kind.
    const DIMENSIONS: Dimensions;

    /// Stored value, in the standard unit.
    fn stored(&self) -> Self::Payload;

    /// Wraps a value already expressed in the standard unit.
    fn from_stored(value: Self::Payload) -> Self;
}

/// A scalar measured in the unit family of `K`.
pub type DimensionalScalar<K, N = f64> = Dimensional<K, N>;

/// A 3-vector measured in the unit family of `K`.
pub type DimensionalVector<K, N = f64> = Dimensional<K, Vector<N>>;

/// A symmetric 3×3 dyadic measured in the unit family of `K`.
pub type DimensionalSymmetricDyadic<K, N = f64> = Dimensional<K, SymmetricDyadic<N>>;

/// A general 3×3 dyadic measured in the unit family of `K`.
pub type DimensionalDyadic<K, N = f64> = Dimensional<K, Dyadic<N>>;

/// A dimensionless scalar of kind `K`.
pub type DimensionlessScalar<K, N = f64> = Dimensionless<K, N>;

/// A dimensionless 3-vector of kind `K`.
pub type DimensionlessVector<K, N = f64> = Dimensionless<K, Vector<N>>;

/// A dimensionless symmetric 3×3 dyadic of kind `K`.
pub type DimensionlessSymmetricDyadic<K, N = f64> = Dimensionless<K, SymmetricDyadic<N>>;

/// A dimensionless general 3×3 dyadic of kind `K`.
pub type DimensionlessDyadic<K, N = f64> = Dimensionless<K, Dyadic<N>>;

//! Plain numeric containers: 3-vectors and 3×3 dyadics.
//!
//! These types know nothing about units or dimensions. Quantities wrap them (or a bare number) as
//! their stored [`Payload`].

mod dyadic;
mod symmetric_dyadic;
mod vector;

pub use dyadic::Dyadic;
pub use symmetric_dyadic::SymmetricDyadic;
pub use vector::Vector;

use crate::format;
use crate::number::Number;
use crate::unit::Convertible;
use core::fmt::Debug;
use core::hash::Hasher;
use core::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Value stored inside a quantity: a number, a [`Vector`], a [`SymmetricDyadic`] or a [`Dyadic`].
///
/// Besides the linear-space operations, a payload renders itself in each text format. The rendered
/// forms are the part of a quantity's output that sits in the `value` slot.
pub trait Payload:
    Copy
    + Default
    + PartialEq
    + PartialOrd
    + Debug
    + Convertible
    + Add<Output = Self>
    + Sub<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + Send
    + Sync
    + 'static
{
    /// Number type of the components.
    type Scalar: Number;

    /// Feeds the components to `state`, hashing `-0.0` like `0.0`.
    fn hash_payload<H: Hasher>(&self, state: &mut H);

    /// Human-readable form, e.g. `(1, 2, 3)` for a vector.
    fn print_payload(&self) -> String;

    /// JSON form: a number or an object keyed by component.
    fn json_payload(&self) -> String;

    /// XML form: a number or one element per component.
    fn xml_payload(&self) -> String;

    /// YAML flow form: a number or a flow mapping keyed by component.
    fn yaml_payload(&self) -> String;
}

macro_rules! impl_payload_for_float {
    ($($float:ty),+) => {
        $(
            impl Payload for $float {
                type Scalar = $float;

                #[inline]
                fn hash_payload<H: Hasher>(&self, state: &mut H) {
                    state.write_u64(self.hash_bits());
                }

                fn print_payload(&self) -> String {
                    format::number(*self)
                }

                fn json_payload(&self) -> String {
                    format::number(*self)
                }

                fn xml_payload(&self) -> String {
                    format::number(*self)
                }

                fn yaml_payload(&self) -> String {
                    format::number(*self)
                }
            }
        )+
    };
}

impl_payload_for_float!(f32, f64);

/// Renders named components as `{"a":1,"b":2}`.
pub(crate) fn json_object<N: Number>(components: &[(&str, N)]) -> String {
    let body = components
        .iter()
        .map(|(key, value)| format!("\"{}\":{}", key, format::number(*value)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", body)
}

/// Renders named components as `<a>1</a><b>2</b>`.
pub(crate) fn xml_elements<N: Number>(components: &[(&str, N)]) -> String {
    components
        .iter()
        .map(|(key, value)| format!("<{key}>{}</{key}>", format::number(*value)))
        .collect()
}

/// Renders named components as `{a:1,b:2}`.
pub(crate) fn yaml_mapping<N: Number>(components: &[(&str, N)]) -> String {
    let body = components
        .iter()
        .map(|(key, value)| format!("{}:{}", key, format::number(*value)))
        .collect::<Vec<_>>()
        .join(",");
    format!("{{{}}}", body)
}

/// Hashes each component with [`Number::hash_bits`].
pub(crate) fn hash_components<N: Number, H: Hasher>(components: &[N], state: &mut H) {
    for component in components {
        state.write_u64(component.hash_bits());
    }
}

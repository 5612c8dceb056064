//! Serde support for the kernels.
//!
//! Dimensional quantities serialize as `{"value": <payload>, "unit": "<abbreviation>"}` with the
//! payload in the standard unit. Reading accepts any unit of the family and converts to the
//! standard unit on the way in; a missing `unit` means the standard unit. Dimensionless quantities
//! are their bare payload on the wire.
//!
//! ```rust
//! use phq_core::quantities::Length;
//! use phq_core::units::LengthUnit;
//!
//! let l: Length = serde_json::from_str(r#"{"value": 2.5, "unit": "km"}"#).unwrap();
//! assert_eq!(l, Length::new(2500.0, LengthUnit::Metre));
//! assert_eq!(serde_json::to_string(&l).unwrap(), r#"{"value":2500.0,"unit":"m"}"#);
//! ```

use super::{Dimensional, DimensionalKind, Dimensionless, Kind};
use crate::error::{ParseError, ParseResult};
use crate::unit::Unit;
use crate::value::Payload;
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQuantity<P> {
    value: P,
    #[serde(default)]
    unit: Option<String>,
}

impl<K: DimensionalKind, P: Payload> Dimensional<K, P> {
    fn from_raw(raw: RawQuantity<P>) -> Result<Self, crate::UnitParseError> {
        let unit = match raw.unit {
            Some(text) => <K::Unit as Unit>::parse(&text)?,
            None => Self::unit(),
        };
        Ok(Self::new(raw.value, unit))
    }
}

impl<K: DimensionalKind, P: Payload + DeserializeOwned> Dimensional<K, P> {
    /// Reads a quantity from JSON of the shape written by [`Dimensional::json`] or
    /// [`Dimensional::json_in`].
    ///
    /// ```rust
    /// use phq_core::quantities::Length;
    /// use phq_core::units::LengthUnit;
    ///
    /// let l = Length::<f64>::new(1.5, LengthUnit::Metre);
    /// let back = Length::<f64>::from_json(&l.json_in(LengthUnit::Centimetre)).unwrap();
    /// assert!((back.value() - 1.5).abs() < 1e-12);
    ///
    /// assert!(Length::<f64>::from_json(r#"{"value":1,"unit":"parsec"}"#).is_err());
    /// ```
    pub fn from_json(text: &str) -> ParseResult<Self> {
        let raw: RawQuantity<P> = serde_json::from_str(text).map_err(|err| {
            log::debug!("cannot read {} from JSON: {}", K::NAME, err);
            ParseError::from(err)
        })?;
        Ok(Self::from_raw(raw)?)
    }
}

impl<K: DimensionalKind, P: Payload + Serialize> Serialize for Dimensional<K, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct(K::NAME, 2)?;
        state.serialize_field("value", &self.value())?;
        state.serialize_field("unit", Self::unit().abbreviation())?;
        state.end()
    }
}

impl<'de, K, P> Deserialize<'de> for Dimensional<K, P>
where
    K: DimensionalKind,
    P: Payload + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawQuantity::<P>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(de::Error::custom)
    }
}

impl<K: Kind, P: Payload + DeserializeOwned> Dimensionless<K, P> {
    /// Reads a quantity from its bare JSON payload, as written by [`Dimensionless::json`].
    pub fn from_json(text: &str) -> ParseResult<Self> {
        serde_json::from_str(text).map(Self::new).map_err(|err| {
            log::debug!("cannot read {} from JSON: {}", K::NAME, err);
            ParseError::from(err)
        })
    }
}

impl<K: Kind, P: Payload + Serialize> Serialize for Dimensionless<K, P> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, K: Kind, P: Payload + Deserialize<'de>> Deserialize<'de> for Dimensionless<K, P> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        P::deserialize(deserializer).map(Self::new)
    }
}

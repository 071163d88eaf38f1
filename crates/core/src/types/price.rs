//! Lenient decimal (de)serialization for loosely-typed numeric fields.
//!
//! The marketplace API is inconsistent about numbers: prices arrive as JSON
//! numbers on some endpoints and as numeric strings on others, and hand-edited
//! seed data occasionally contains garbage. Catalog code has to keep going in
//! all of those cases, so deserialization maps anything unparseable to `None`
//! instead of failing the whole record.

use core::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserializer, de};

/// Deserialize an `Option<Decimal>` from a number, a numeric string, or null.
///
/// Unparseable values become `None`. Use with
/// `#[serde(default, deserialize_with = "lenient_decimal::deserialize")]` so
/// an absent field also lands on `None`.
pub mod lenient_decimal {
    use super::{Decimal, Deserializer, LenientVisitor};

    /// See the module docs: never errors on malformed input.
    ///
    /// # Errors
    ///
    /// Only fails when the underlying format itself is broken (e.g. truncated
    /// JSON), never on an unexpected value shape.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(LenientVisitor)
    }
}

struct LenientVisitor;

impl<'de> de::Visitor<'de> for LenientVisitor {
    type Value = Option<Decimal>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number, a numeric string, or null")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(Some(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(Decimal::from_f64(v))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(v.trim().parse().ok())
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(None)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }
}

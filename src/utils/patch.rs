//! Decoding for partial-update payloads.

use serde::{Deserialize, Deserializer};

/// Keeps an explicit `null` apart from an omitted field.
///
/// Use with `#[serde(default, deserialize_with = "double_option")]` on an
/// `Option<Option<T>>`: omitted gives `None`, `null` gives `Some(None)`.
pub fn double_option<'de, T, D>(
    deserializer: D,
) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Runs `parse` on a supplied non-null value, keeping the outer shape.
pub fn parse_nullable<T, E>(
    value: Option<Option<T>>,
    parse: impl Fn(T) -> Result<T, E>,
) -> Result<Option<Option<T>>, E> {
    value.map(|inner| inner.map(parse).transpose()).transpose()
}

//! Serde helper for backend fields that may be sent as `null`.

use serde::{Deserialize, Deserializer};

/// Deserializes `null` as the type's default value.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

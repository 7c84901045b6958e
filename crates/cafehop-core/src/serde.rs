//! Deserializers for HTML form fields.
// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer};

/// Deserialize a text input with surrounding whitespace removed, so a
/// whitespace-only value fails a "required" (`length(min = 1)`) check.
///
/// Pair with `#[serde(default)]` so an absent field reads as empty.
pub fn trimmed<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    Ok(raw.trim().to_owned())
}

/// Deserialize a checkbox. Browsers omit unchecked boxes; a present box is
/// checked unless its value is `""` or `"false"`.
///
/// Pair with `#[serde(default)]` so an absent field reads as `false`.
pub fn checkbox<'de, D>(d: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(d)?;
    Ok(!matches!(raw.trim(), "" | "false"))
}

/// Map blank text to `None`.
pub fn non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

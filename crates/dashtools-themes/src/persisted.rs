//! Persisted theme record
//!
//! One storage key holds `{"theme": <string>, "variant": <string>}`. There is
//! no version field. Extra fields are ignored and dropped on the next write.
//! A missing, `null` or empty field takes the default for that field; any other
//! unrecognised value rejects the whole record.

use serde::Deserialize;
use serde_json::Value;

use crate::{
    error::{Result, ThemeError},
    types::ThemeState,
};

/// Storage key of the persisted theme record
pub const STORAGE_KEY: &str = "dashtools-theme";

#[derive(Debug, Default, Deserialize)]
struct PersistedTheme {
    #[serde(default)]
    theme: Option<String>,
    #[serde(default)]
    variant: Option<String>,
}

/// Decode a stored record, filling absent fields from `defaults`
pub fn decode(raw: &str, defaults: ThemeState) -> Result<ThemeState> {
    let value: Value = serde_json::from_str(raw)?;
    if !value.is_object() {
        return Err(ThemeError::InvalidRecord(format!(
            "expected an object, found {}",
            value
        )));
    }
    let record = PersistedTheme::deserialize(value)?;

    let theme = match record.theme.as_deref() {
        None | Some("") => defaults.theme,
        Some(name) => name.parse()?,
    };
    let variant = match record.variant.as_deref() {
        None | Some("") => defaults.variant,
        Some(name) => name.parse()?,
    };
    Ok(ThemeState::new(theme, variant))
}

/// Encode a state as the stored record
pub fn encode(state: &ThemeState) -> Result<String> {
    Ok(serde_json::to_string(state)?)
}

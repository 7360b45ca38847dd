//! Polymorphic icon field decoding.
//!
//! A module icon is written either as a bare path (`"icon.png"`) or as a
//! theme pair (`{"dark": "d.png", "light": "l.png"}`). Decoding tries the
//! string shape first and the object shape second; anything else is rejected
//! rather than coerced.

use crate::error::MalformedIcon;
use serde_json::{Map, Value};

/// A module's icon, normalized from its JSON shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconField {
    /// One icon used regardless of theme.
    Single(String),
    /// One icon per UI theme.
    Themed { light: String, dark: String },
    /// No `icon` key in the source.
    #[default]
    Absent,
}

impl IconField {
    /// Decode an already-parsed JSON value.
    pub fn decode(value: &Value) -> Result<Self, MalformedIcon> {
        match value {
            Value::String(path) => Ok(IconField::Single(path.clone())),
            Value::Object(fields) => {
                let dark = theme_path(fields, "dark").ok_or_else(|| malformed(value))?;
                let light = theme_path(fields, "light").ok_or_else(|| malformed(value))?;
                Ok(IconField::Themed { light, dark })
            }
            _ => Err(malformed(value)),
        }
    }

    /// Decode raw JSON text. Errors carry `raw` exactly as given, and text
    /// that is not JSON at all is malformed too.
    pub fn decode_str(raw: &str) -> Result<Self, MalformedIcon> {
        let malformed = || MalformedIcon {
            raw: raw.to_string(),
        };
        let value: Value = serde_json::from_str(raw).map_err(|_| malformed())?;
        Self::decode(&value).map_err(|_| malformed())
    }

    /// True when there is nothing worth showing: no icon, or only empty paths.
    pub fn is_blank(&self) -> bool {
        match self {
            IconField::Single(path) => path.is_empty(),
            IconField::Themed { light, dark } => light.is_empty() && dark.is_empty(),
            IconField::Absent => true,
        }
    }
}

/// `None` means the key holds something other than a string.
fn theme_path(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key) {
        None => Some(String::new()),
        Some(Value::String(path)) => Some(path.clone()),
        Some(_) => None,
    }
}

fn malformed(value: &Value) -> MalformedIcon {
    MalformedIcon {
        raw: value.to_string(),
    }
}

//! Object type registry entries
//!
//! Object types are suggestions offered when editing a map object's type.
//! Objects may still carry any free-form type string.

use serde::{Deserialize, Serialize};

use crate::error::{SettingsError, SettingsResult};

/// A known object type and the color objects of this type are drawn with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectType {
    pub name: String,
    /// `#rrggbb`
    pub color: String,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Parse the color into its RGB components
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }

    pub fn validate(&self) -> SettingsResult<()> {
        if self.name.trim().is_empty() {
            return Err(SettingsError::invalid("object_types", "type name is empty"));
        }
        if self.rgb().is_none() {
            return Err(SettingsError::invalid(
                "object_types",
                format!("color '{}' of type '{}' is not #rrggbb", self.color, self.name),
            ));
        }
        Ok(())
    }
}

/// Built-in suggestions used when no preferences file exists
pub fn default_object_types() -> Vec<ObjectType> {
    vec![
        ObjectType::new("Spawn", "#00a000"),
        ObjectType::new("Trigger", "#a0a000"),
        ObjectType::new("Door", "#a05000"),
        ObjectType::new("Item", "#0050a0"),
    ]
}

//! Preferences for MapKit
//!
//! Provides the preferences file handling and validation.
//! Supports JSON and TOML file formats stored in platform-specific directories.
//!
//! Preferences are organized into:
//! - The object type registry (type name suggestions and their colors)
//! - Undo settings
//! - Limits for the numeric fields of the object properties dialog

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};
use crate::object_types::{default_object_types, ObjectType};

/// Inclusive range and stepping of a numeric input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NumericRange {
    pub minimum: f64,
    pub maximum: f64,
    pub single_step: f64,
}

impl NumericRange {
    pub const fn new(minimum: f64, maximum: f64, single_step: f64) -> Self {
        Self {
            minimum,
            maximum,
            single_step,
        }
    }

    fn validate(&self, key: &str) -> SettingsResult<()> {
        if !(self.minimum <= self.maximum) {
            return Err(SettingsError::invalid(key, "minimum exceeds maximum"));
        }
        if !(self.single_step > 0.0) {
            return Err(SettingsError::invalid(key, "step must be > 0"));
        }
        Ok(())
    }
}

/// Numeric field limits for the object properties dialog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DialogSettings {
    /// Number of decimals the numeric fields keep
    pub decimals: u32,
    /// Range of the x and y fields
    pub position: NumericRange,
    /// Range of the width and height fields
    pub size: NumericRange,
    /// Range of the rotation field, in degrees
    pub rotation: NumericRange,
}

impl Default for DialogSettings {
    fn default() -> Self {
        Self {
            decimals: 3,
            position: NumericRange::new(-1_000_000.0, 1_000_000.0, 1.0),
            size: NumericRange::new(0.0, 1_000_000.0, 1.0),
            rotation: NumericRange::new(-360.0, 360.0, 1.0),
        }
    }
}

/// Complete application preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preferences {
    /// Maximum number of undo steps kept per document (0 = unlimited)
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
    /// Object properties dialog field limits
    #[serde(default)]
    pub dialog: DialogSettings,
    /// Known object types, offered as suggestions for the object type field
    #[serde(default = "default_object_types")]
    pub object_types: Vec<ObjectType>,
}

fn default_undo_limit() -> usize {
    100
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            undo_limit: default_undo_limit(),
            dialog: DialogSettings::default(),
            object_types: default_object_types(),
        }
    }
}

impl Preferences {
    /// Create new preferences with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default location of the preferences file
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir().ok_or_else(|| {
            SettingsError::ConfigDirectory("no platform config directory".to_string())
        })?;
        Ok(dir.join("mapkit").join("preferences.toml"))
    }

    /// Load preferences from the default path, falling back to defaults when
    /// no file exists yet
    pub fn load_or_default() -> SettingsResult<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            debug!(path = %path.display(), "no preferences file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load preferences from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let prefs: Self = match Format::of(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        prefs.validate()?;
        info!(
            path = %path.display(),
            object_types = prefs.object_types.len(),
            "loaded preferences"
        );
        Ok(prefs)
    }

    /// Save preferences to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    SettingsError::ConfigDirectory(format!("{}: {}", parent.display(), e))
                })?;
            }
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate preferences
    pub fn validate(&self) -> SettingsResult<()> {
        for (i, object_type) in self.object_types.iter().enumerate() {
            object_type.validate()?;
            if self.object_types[..i]
                .iter()
                .any(|other| other.name == object_type.name)
            {
                return Err(SettingsError::invalid(
                    "object_types",
                    format!("duplicate type '{}'", object_type.name),
                ));
            }
        }

        self.dialog.position.validate("dialog.position")?;
        self.dialog.size.validate("dialog.size")?;
        self.dialog.rotation.validate("dialog.rotation")?;
        if self.dialog.size.minimum < 0.0 {
            return Err(SettingsError::invalid("dialog.size", "minimum must be >= 0"));
        }
        if self.dialog.decimals > 10 {
            return Err(SettingsError::invalid("dialog.decimals", "must be <= 10"));
        }

        Ok(())
    }

    /// Names of all known object types, in registry order
    pub fn object_type_names(&self) -> Vec<&str> {
        self.object_types.iter().map(|t| t.name.as_str()).collect()
    }

    /// Look up a registered object type
    pub fn object_type(&self, name: &str) -> Option<&ObjectType> {
        self.object_types.iter().find(|t| t.name == name)
    }

    /// Register an object type, replacing the color of an existing entry with the same name
    pub fn add_object_type(&mut self, object_type: ObjectType) -> SettingsResult<()> {
        object_type.validate()?;
        match self
            .object_types
            .iter_mut()
            .find(|t| t.name == object_type.name)
        {
            Some(existing) => existing.color = object_type.color,
            None => self.object_types.push(object_type),
        }
        Ok(())
    }

    /// Remove an object type. Returns whether it was registered.
    pub fn remove_object_type(&mut self, name: &str) -> bool {
        let before = self.object_types.len();
        self.object_types.retain(|t| t.name != name);
        self.object_types.len() != before
    }
}

enum Format {
    Json,
    Toml,
}

impl Format {
    fn of(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Format::Json),
            Some("toml") => Ok(Format::Toml),
            other => Err(SettingsError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

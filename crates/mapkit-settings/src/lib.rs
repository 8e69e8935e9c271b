//! MapKit Settings Crate
//!
//! Handles application preferences: the object type registry, undo depth and
//! the limits of the object properties dialog fields.

pub mod config;
pub mod error;
pub mod object_types;

pub use config::{DialogSettings, NumericRange, Preferences};
pub use error::{SettingsError, SettingsResult};
pub use object_types::{default_object_types, ObjectType};

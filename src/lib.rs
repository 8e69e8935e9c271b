//! # MapKit
//!
//! Editing model for tile maps with freely placed objects:
//! - Map objects with name, type, position, size, rotation and custom properties
//! - Undoable edit commands grouped into macros
//! - Headless models of the object and custom properties dialogs
//!
//! ## Architecture
//!
//! MapKit is organized as a workspace with multiple crates:
//!
//! 1. **mapkit-core** - Map, map objects, geometry, custom properties
//! 2. **mapkit-settings** - Preferences: object type registry, undo depth, field limits
//! 3. **mapkit-editor** - Undo commands and stack, documents, property dialogs
//! 4. **mapkit** - Re-exports and logging setup

pub use mapkit_core::{Error, Map, MapObject, ObjectId, PointF, Properties, RectF, Result, SizeF};

pub use mapkit_settings::{
    DialogSettings, NumericRange, ObjectType, Preferences, SettingsError, SettingsResult,
};

pub use mapkit_editor::{
    ChangeMapObject, ChangeProperties, DialogResult, EditorError, EditorResult, Field,
    MacroCommand, MapCommand, MapDocument, MoveMapObject, ObjectPropertiesDialog,
    PropertiesDialog, PropertiesTarget, ResizeMapObject, RotateMapObject, UndoStack,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when RUST_LOG is unset or invalid
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output with pretty formatting
/// - RUST_LOG environment variable support, falling back to [`DEFAULT_LOG_FILTER`]
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = env_filter();

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

fn env_filter() -> tracing_subscriber::EnvFilter {
    use tracing_subscriber::EnvFilter;

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

//! # MapKit Editor
//!
//! Editing layer on top of the MapKit map model: undoable commands, a
//! document undo stack with macro grouping, and the headless models behind
//! the property dialogs.
//!
//! ## Core Components
//!
//! ### Undo/Redo
//! - **MapCommand**: change name/type, move, resize, rotate, change properties, macros
//! - **UndoStack**: executes pushed commands, groups them into macros, tracks the saved state
//! - **MapDocument**: a map plus its undo stack
//!
//! ### Dialogs
//! - **PropertiesDialog**: generic custom key/value properties editor
//! - **ObjectPropertiesDialog**: name, type and geometry of one map object
//!
//! ## Architecture
//!
//! ```text
//! ObjectPropertiesDialog
//!   ├── PropertiesDialog (custom properties, own commit step)
//!   ├── LineEdit / ComboBox(ObjectTypesModel) / DoubleSpinBox fields
//!   └── MapDocument
//!         ├── Map
//!         └── UndoStack (MapCommand history)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use mapkit_core::{Map, MapObject, PointF, SizeF};
//! use mapkit_editor::{MapDocument, ObjectPropertiesDialog};
//! use mapkit_settings::Preferences;
//!
//! let mut map = Map::default();
//! let id = map.add_object(MapObject::new("door", "Door", PointF::new(10.0, 20.0), SizeF::new(32.0, 32.0)));
//! let mut document = MapDocument::new(map);
//!
//! let mut dialog = ObjectPropertiesDialog::new(&document, id, &Preferences::default())?;
//! dialog.set_width(64.0);
//! dialog.accept(&mut document)?;
//!
//! assert_eq!(document.map().object(id).map(|o| o.width()), Some(64.0));
//! document.undo()?;
//! assert_eq!(document.map().object(id).map(|o| o.width()), Some(32.0));
//! # Ok::<(), mapkit_editor::EditorError>(())
//! ```

pub mod commands;
pub mod error;
pub mod map_document;
pub mod object_properties_dialog;
pub mod object_types_model;
pub mod properties_dialog;
pub mod undo_stack;
pub mod widgets;

pub use commands::{
    ChangeMapObject, ChangeProperties, MacroCommand, MapCommand, MoveMapObject, PropertiesTarget,
    ResizeMapObject, RotateMapObject,
};
pub use error::{EditorError, EditorResult};
pub use map_document::MapDocument;
pub use object_properties_dialog::{Field, ObjectPropertiesDialog, CHANGE_OBJECT_TEXT};
pub use object_types_model::ObjectTypesModel;
pub use properties_dialog::{DialogResult, PropertiesDialog};
pub use undo_stack::UndoStack;
pub use widgets::{ComboBox, DoubleSpinBox, InsertPolicy, LineEdit};

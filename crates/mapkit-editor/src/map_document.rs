//! A map being edited together with its undo history

use mapkit_core::Map;
use mapkit_settings::Preferences;

use crate::commands::MapCommand;
use crate::error::EditorResult;
use crate::undo_stack::UndoStack;

/// An open map document
///
/// Edits that should be undoable go through [`MapDocument::push`]. Commands
/// that record an old value expect the new value to be written through
/// [`MapDocument::map_mut`] first.
#[derive(Debug)]
pub struct MapDocument {
    map: Map,
    undo_stack: UndoStack,
}

impl MapDocument {
    pub fn new(map: Map) -> Self {
        Self {
            map,
            undo_stack: UndoStack::new(),
        }
    }

    /// Create a document whose undo depth follows the preferences
    pub fn with_preferences(map: Map, preferences: &Preferences) -> Self {
        Self {
            map,
            undo_stack: UndoStack::with_limit(preferences.undo_limit),
        }
    }

    pub fn map(&self) -> &Map {
        &self.map
    }

    pub fn map_mut(&mut self) -> &mut Map {
        &mut self.map
    }

    pub fn undo_stack(&self) -> &UndoStack {
        &self.undo_stack
    }

    pub fn undo_stack_mut(&mut self) -> &mut UndoStack {
        &mut self.undo_stack
    }

    /// Execute a command against the map and record it
    pub fn push(&mut self, command: impl Into<MapCommand>) {
        self.undo_stack.push(command.into(), &mut self.map);
    }

    pub fn begin_macro(&mut self, text: impl Into<String>) {
        self.undo_stack.begin_macro(text);
    }

    pub fn end_macro(&mut self) -> EditorResult<()> {
        self.undo_stack.end_macro()
    }

    pub fn undo(&mut self) -> EditorResult<()> {
        self.undo_stack.undo(&mut self.map)
    }

    pub fn redo(&mut self) -> EditorResult<()> {
        self.undo_stack.redo(&mut self.map)
    }

    /// Check if document is modified since it was last saved
    pub fn is_modified(&self) -> bool {
        !self.undo_stack.is_clean()
    }

    /// Mark as unmodified (after save)
    pub fn mark_saved(&mut self) {
        self.undo_stack.set_clean();
    }
}

//! Undo stack with macro grouping

use mapkit_core::Map;
use tracing::{debug, info};

use crate::commands::{MacroCommand, MapCommand};
use crate::error::{EditorError, EditorResult};

/// Manages the undo/redo history of one document
///
/// `commands[..index]` are applied, `commands[index..]` can be redone.
/// Commands pushed while a macro is open are collected into that macro and
/// land on the stack as one entry when the outermost macro ends.
#[derive(Debug)]
pub struct UndoStack {
    commands: Vec<MapCommand>,
    index: usize,
    clean_index: Option<usize>,
    undo_limit: usize,
    open_macros: Vec<MacroCommand>,
}

impl UndoStack {
    /// Create an unlimited undo stack
    pub fn new() -> Self {
        Self::with_limit(0)
    }

    /// Create with a maximum undo depth (0 = unlimited)
    pub fn with_limit(undo_limit: usize) -> Self {
        Self {
            commands: Vec::new(),
            index: 0,
            clean_index: Some(0),
            undo_limit,
            open_macros: Vec::new(),
        }
    }

    /// Execute a command and record it
    pub fn push(&mut self, mut command: MapCommand, map: &mut Map) {
        command.redo(map);
        match self.open_macros.last_mut() {
            Some(open) => open.commands.push(command),
            None => self.record(command),
        }
    }

    /// Start grouping subsequent pushes into one undo step
    pub fn begin_macro(&mut self, text: impl Into<String>) {
        let text = text.into();
        debug!(text = %text, depth = self.open_macros.len(), "begin macro");
        self.open_macros.push(MacroCommand::new(text));
    }

    /// Close the innermost open macro
    pub fn end_macro(&mut self) -> EditorResult<()> {
        let finished = self.open_macros.pop().ok_or(EditorError::NoOpenMacro)?;
        if finished.commands.is_empty() {
            debug!(text = %finished.text, "discarding empty macro");
            return Ok(());
        }
        match self.open_macros.last_mut() {
            Some(parent) => parent.commands.push(finished.into()),
            None => {
                info!(
                    text = %finished.text,
                    commands = finished.commands.len(),
                    "recorded undo macro"
                );
                self.record(finished.into());
            }
        }
        Ok(())
    }

    fn record(&mut self, command: MapCommand) {
        self.commands.truncate(self.index);
        if self.clean_index.is_some_and(|clean| clean > self.index) {
            self.clean_index = None;
        }

        self.commands.push(command);
        self.index += 1;

        if self.undo_limit > 0 {
            self.trim_to_limit();
        }
    }

    fn trim_to_limit(&mut self) {
        while self.commands.len() > self.undo_limit && self.index > 0 {
            self.commands.remove(0);
            self.index -= 1;
            self.clean_index = self.clean_index.and_then(|clean| clean.checked_sub(1));
        }
        // everything left is redo history, drop the newest of it
        if self.commands.len() > self.undo_limit {
            self.commands.truncate(self.undo_limit);
            if self.clean_index.is_some_and(|clean| clean > self.undo_limit) {
                self.clean_index = None;
            }
        }
    }

    fn ensure_no_macro(&self) -> EditorResult<()> {
        match self.open_macros.last() {
            Some(open) => Err(EditorError::MacroInProgress(open.text.clone())),
            None => Ok(()),
        }
    }

    /// Undo last command
    pub fn undo(&mut self, map: &mut Map) -> EditorResult<()> {
        self.ensure_no_macro()?;
        if self.index == 0 {
            return Err(EditorError::NothingToUndo);
        }
        self.index -= 1;
        self.commands[self.index].undo(map);
        Ok(())
    }

    /// Redo last undone command
    pub fn redo(&mut self, map: &mut Map) -> EditorResult<()> {
        self.ensure_no_macro()?;
        if self.index == self.commands.len() {
            return Err(EditorError::NothingToRedo);
        }
        self.commands[self.index].redo(map);
        self.index += 1;
        Ok(())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.open_macros.is_empty() && self.index > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.open_macros.is_empty() && self.index < self.commands.len()
    }

    pub fn undo_text(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .and_then(|i| self.commands.get(i))
            .map(MapCommand::text)
    }

    pub fn redo_text(&self) -> Option<&str> {
        self.commands.get(self.index).map(MapCommand::text)
    }

    /// Number of recorded entries, applied or not
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Number of applied entries
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn command(&self, index: usize) -> Option<&MapCommand> {
        self.commands.get(index)
    }

    pub fn is_macro_open(&self) -> bool {
        !self.open_macros.is_empty()
    }

    /// Mark the current state as saved
    pub fn set_clean(&mut self) {
        self.clean_index = Some(self.index);
    }

    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.index)
    }

    pub fn undo_limit(&self) -> usize {
        self.undo_limit
    }

    /// Change the maximum depth, dropping the oldest entries if needed
    pub fn set_undo_limit(&mut self, undo_limit: usize) {
        self.undo_limit = undo_limit;
        if undo_limit > 0 {
            self.trim_to_limit();
        }
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.commands.clear();
        self.open_macros.clear();
        self.index = 0;
        self.clean_index = Some(0);
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

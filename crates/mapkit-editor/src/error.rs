//! Error types for the editor crate.
//!
//! This module provides structured error types for undo stack handling
//! and dialog state management.

use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Error, Debug)]
pub enum EditorError {
    /// The undo stack has nothing left to undo.
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The undo stack has nothing left to redo.
    #[error("Nothing to redo")]
    NothingToRedo,

    /// Undo and redo are not allowed while a macro is being recorded.
    #[error("Cannot undo or redo while macro '{0}' is open")]
    MacroInProgress(String),

    /// `end_macro` was called without a matching `begin_macro`.
    #[error("No macro is open")]
    NoOpenMacro,

    /// The dialog was already accepted or rejected.
    #[error("Dialog is already closed")]
    DialogClosed,

    /// A map model operation failed.
    #[error(transparent)]
    Core(#[from] mapkit_core::Error),
}

/// Result type alias for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

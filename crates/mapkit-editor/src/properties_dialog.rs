//! Generic custom-properties dialog
//!
//! Edits a copy of the key/value properties of the map or of a map object.
//! Nothing touches the document until [`PropertiesDialog::accept`], which
//! pushes a single `ChangeProperties` command when the edited set differs
//! from the live one.

use mapkit_core::{properties, Properties};
use tracing::{debug, info};

use crate::commands::{ChangeProperties, PropertiesTarget};
use crate::error::{EditorError, EditorResult};
use crate::map_document::MapDocument;

/// How a modal dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogResult {
    /// Still open
    Pending,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone)]
pub struct PropertiesDialog {
    kind: String,
    target: PropertiesTarget,
    properties: Properties,
    result: DialogResult,
}

impl PropertiesDialog {
    /// `kind` names the edited thing ("Map", "Object") in the title and command text
    pub fn new(
        kind: impl Into<String>,
        target: PropertiesTarget,
        document: &MapDocument,
    ) -> EditorResult<Self> {
        let properties = Self::live_properties(target, document)?.clone();
        Ok(Self {
            kind: kind.into(),
            target,
            properties,
            result: DialogResult::Pending,
        })
    }

    fn live_properties(target: PropertiesTarget, document: &MapDocument) -> EditorResult<&Properties> {
        match target {
            PropertiesTarget::Map => Ok(document.map().properties()),
            PropertiesTarget::Object(id) => Ok(document.map().object_or_err(id)?.properties()),
        }
    }

    pub fn title(&self) -> String {
        format!("{} Properties", self.kind)
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn target(&self) -> PropertiesTarget {
        self.target
    }

    pub fn result(&self) -> DialogResult {
        self.result
    }

    /// The edited properties
    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Add or overwrite a property. Empty keys are ignored.
    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        if key.is_empty() {
            return;
        }
        self.properties.insert(key, value.into());
    }

    pub fn remove_property(&mut self, key: &str) -> Option<String> {
        self.properties.remove(key)
    }

    /// Rename a property, keeping its value. Returns false if `from` is
    /// missing or `to` is empty or already taken.
    pub fn rename_property(&mut self, from: &str, to: &str) -> bool {
        if to.is_empty() || self.properties.contains_key(to) {
            return false;
        }
        match self.properties.remove(from) {
            Some(value) => {
                self.properties.insert(to.to_string(), value);
                true
            }
            None => false,
        }
    }

    fn ensure_open(&self) -> EditorResult<()> {
        if self.result == DialogResult::Pending {
            Ok(())
        } else {
            Err(EditorError::DialogClosed)
        }
    }

    /// Commit the edited properties and close the dialog
    pub fn accept(&mut self, document: &mut MapDocument) -> EditorResult<DialogResult> {
        self.ensure_open()?;

        let live = Self::live_properties(self.target, document)?;
        let changed = properties::changed_keys(live, &self.properties);
        if changed.is_empty() {
            debug!(kind = %self.kind, "properties unchanged");
        } else {
            info!(kind = %self.kind, keys = ?changed, "changing properties");
            document.push(ChangeProperties::new(
                &self.kind,
                self.target,
                self.properties.clone(),
            ));
        }

        self.result = DialogResult::Accepted;
        Ok(self.result)
    }

    /// Close without applying anything
    pub fn reject(&mut self) -> EditorResult<DialogResult> {
        self.ensure_open()?;
        self.result = DialogResult::Rejected;
        Ok(self.result)
    }
}

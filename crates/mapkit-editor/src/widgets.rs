//! Headless form field models
//!
//! These hold the value and input constraints of a form field without any
//! rendering. A toolkit front end binds its widgets to them.

use mapkit_settings::NumericRange;

use crate::object_types_model::ObjectTypesModel;

/// Single line text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineEdit {
    text: String,
}

impl LineEdit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }
}

/// Numeric field with a range, a precision and a step
///
/// Values are rounded to `decimals` and clamped into the range on every
/// write, so `value()` always satisfies the constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleSpinBox {
    value: f64,
    minimum: f64,
    maximum: f64,
    decimals: u32,
    single_step: f64,
}

impl DoubleSpinBox {
    pub fn new(range: NumericRange, decimals: u32) -> Self {
        Self {
            value: 0.0_f64.max(range.minimum).min(range.maximum),
            minimum: range.minimum,
            maximum: range.maximum,
            decimals,
            single_step: range.single_step,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = self.bound(value);
    }

    /// Change the value by `steps` single steps
    pub fn step_by(&mut self, steps: i32) {
        self.set_value(self.value + f64::from(steps) * self.single_step);
    }

    pub fn minimum(&self) -> f64 {
        self.minimum
    }

    pub fn maximum(&self) -> f64 {
        self.maximum
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn single_step(&self) -> f64 {
        self.single_step
    }

    fn bound(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.minimum;
        }
        let factor = 10_f64.powi(self.decimals as i32);
        let rounded = (value * factor).round() / factor;
        // rounding can overflow for huge values
        let rounded = if rounded.is_finite() { rounded } else { value };
        rounded.max(self.minimum).min(self.maximum)
    }
}

/// What happens to edit text that is not yet one of the combo box items
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPolicy {
    /// The text is kept as the current text but never added to the items
    NoInsert,
    /// The text is appended to the items when committed
    InsertAtBottom,
}

/// Editable combo box over an object types model
#[derive(Debug, Clone, PartialEq)]
pub struct ComboBox {
    model: ObjectTypesModel,
    edit_text: String,
    insert_policy: InsertPolicy,
}

impl ComboBox {
    pub fn new(model: ObjectTypesModel) -> Self {
        Self {
            model,
            edit_text: String::new(),
            insert_policy: InsertPolicy::InsertAtBottom,
        }
    }

    pub fn model(&self) -> &ObjectTypesModel {
        &self.model
    }

    pub fn insert_policy(&self) -> InsertPolicy {
        self.insert_policy
    }

    pub fn set_insert_policy(&mut self, policy: InsertPolicy) {
        self.insert_policy = policy;
    }

    /// Text currently in the edit field
    pub fn current_text(&self) -> &str {
        &self.edit_text
    }

    pub fn set_edit_text(&mut self, text: impl Into<String>) {
        self.edit_text = text.into();
    }

    /// Row matching the edit text, if any
    pub fn current_index(&self) -> Option<usize> {
        self.model.find(&self.edit_text)
    }

    /// Select an item; out of range rows are ignored
    pub fn set_current_index(&mut self, row: usize) {
        if let Some(name) = self.model.name(row) {
            self.edit_text = name.to_string();
        }
    }

    /// Commit the edit text, as on pressing enter. Returns whether an item was inserted.
    pub fn commit_edit_text(&mut self) -> bool {
        if self.insert_policy == InsertPolicy::NoInsert
            || self.edit_text.is_empty()
            || self.model.find(&self.edit_text).is_some()
        {
            return false;
        }
        self.model.insert(&self.edit_text);
        true
    }

    /// Items starting with `prefix`, ignoring case
    pub fn completions(&self, prefix: &str) -> Vec<&str> {
        let prefix = prefix.to_lowercase();
        self.model
            .names()
            .filter(|name| name.to_lowercase().starts_with(&prefix))
            .collect()
    }
}

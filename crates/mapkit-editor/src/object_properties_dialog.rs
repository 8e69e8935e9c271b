//! Properties dialog for a single map object
//!
//! Adds name, type and geometry fields on top of the generic
//! [`PropertiesDialog`]. On accept, any difference between the fields and the
//! live object is committed as one "Change Object" undo macro holding a
//! name/type change, a move, a resize and a rotate command (always all four,
//! in that order) followed by the generic properties change, if any.

use mapkit_core::ObjectId;
use mapkit_settings::Preferences;
use tracing::{debug, info};

use crate::commands::{
    ChangeMapObject, MoveMapObject, PropertiesTarget, ResizeMapObject, RotateMapObject,
};
use crate::error::EditorResult;
use crate::map_document::MapDocument;
use crate::object_types_model::ObjectTypesModel;
use crate::properties_dialog::{DialogResult, PropertiesDialog};
use crate::widgets::{ComboBox, DoubleSpinBox, InsertPolicy, LineEdit};

/// Undo text of the macro recorded on accept
pub const CHANGE_OBJECT_TEXT: &str = "Change Object";

/// Input fields of the dialog, for focus tracking
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Type,
    X,
    Y,
    Width,
    Height,
    Rotation,
    /// The generic key/value properties table
    Properties,
}

/// Field values read when the dialog is accepted
struct Candidate {
    name: String,
    object_type: String,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    rotation: f64,
}

#[derive(Debug, Clone)]
pub struct ObjectPropertiesDialog {
    base: PropertiesDialog,
    object: ObjectId,
    name: LineEdit,
    object_type: ComboBox,
    x: DoubleSpinBox,
    y: DoubleSpinBox,
    width: DoubleSpinBox,
    height: DoubleSpinBox,
    rotation: DoubleSpinBox,
    focus: Field,
}

impl ObjectPropertiesDialog {
    /// Build the dialog with every field filled in from the object's current state
    pub fn new(
        document: &MapDocument,
        object: ObjectId,
        preferences: &Preferences,
    ) -> EditorResult<Self> {
        let base = PropertiesDialog::new("Object", PropertiesTarget::Object(object), document)?;
        let map_object = document.map().object_or_err(object)?;

        let mut types = ObjectTypesModel::new();
        types.set_object_types(&preferences.object_types);
        let mut object_type = ComboBox::new(types);
        object_type.set_insert_policy(InsertPolicy::NoInsert);
        object_type.set_edit_text(map_object.object_type());

        let mut name = LineEdit::new();
        name.set_text(map_object.name());

        let limits = &preferences.dialog;
        let spin_box = |range, value| {
            let mut sb = DoubleSpinBox::new(range, limits.decimals);
            sb.set_value(value);
            sb
        };

        debug!(id = %object, name = map_object.name(), "opening object properties");

        Ok(Self {
            base,
            object,
            name,
            object_type,
            x: spin_box(limits.position, map_object.x()),
            y: spin_box(limits.position, map_object.y()),
            width: spin_box(limits.size, map_object.width()),
            height: spin_box(limits.size, map_object.height()),
            rotation: spin_box(limits.rotation, map_object.rotation()),
            focus: Field::Name,
        })
    }

    pub fn object(&self) -> ObjectId {
        self.object
    }

    pub fn title(&self) -> String {
        self.base.title()
    }

    pub fn result(&self) -> DialogResult {
        self.base.result()
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// The generic properties part of the dialog
    pub fn base(&self) -> &PropertiesDialog {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut PropertiesDialog {
        &mut self.base
    }

    pub fn name_edit(&self) -> &LineEdit {
        &self.name
    }

    pub fn name_edit_mut(&mut self) -> &mut LineEdit {
        &mut self.name
    }

    pub fn type_combo(&self) -> &ComboBox {
        &self.object_type
    }

    pub fn type_combo_mut(&mut self) -> &mut ComboBox {
        &mut self.object_type
    }

    pub fn x_spin_box(&self) -> &DoubleSpinBox {
        &self.x
    }

    pub fn x_spin_box_mut(&mut self) -> &mut DoubleSpinBox {
        &mut self.x
    }

    pub fn y_spin_box(&self) -> &DoubleSpinBox {
        &self.y
    }

    pub fn y_spin_box_mut(&mut self) -> &mut DoubleSpinBox {
        &mut self.y
    }

    pub fn width_spin_box(&self) -> &DoubleSpinBox {
        &self.width
    }

    pub fn width_spin_box_mut(&mut self) -> &mut DoubleSpinBox {
        &mut self.width
    }

    pub fn height_spin_box(&self) -> &DoubleSpinBox {
        &self.height
    }

    pub fn height_spin_box_mut(&mut self) -> &mut DoubleSpinBox {
        &mut self.height
    }

    pub fn rotation_spin_box(&self) -> &DoubleSpinBox {
        &self.rotation
    }

    pub fn rotation_spin_box_mut(&mut self) -> &mut DoubleSpinBox {
        &mut self.rotation
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name.set_text(name);
    }

    pub fn set_type(&mut self, object_type: impl Into<String>) {
        self.object_type.set_edit_text(object_type);
    }

    pub fn set_x(&mut self, x: f64) {
        self.x.set_value(x);
    }

    pub fn set_y(&mut self, y: f64) {
        self.y.set_value(y);
    }

    pub fn set_width(&mut self, width: f64) {
        self.width.set_value(width);
    }

    pub fn set_height(&mut self, height: f64) {
        self.height.set_value(height);
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation.set_value(rotation);
    }

    fn candidate(&self) -> Candidate {
        Candidate {
            name: self.name.text().to_string(),
            object_type: self.object_type.current_text().to_string(),
            x: self.x.value(),
            y: self.y.value(),
            width: self.width.value(),
            height: self.height.value(),
            rotation: self.rotation.value(),
        }
    }

    /// Commit the edited fields to the document and close the dialog
    pub fn accept(&mut self, document: &mut MapDocument) -> EditorResult<DialogResult> {
        if self.base.result() != DialogResult::Pending {
            return self.base.accept(document);
        }

        let new = self.candidate();
        let live = document.map().object_or_err(self.object)?;

        let mut changed = false;
        changed |= live.name() != new.name;
        changed |= live.object_type() != new.object_type;
        changed |= live.x() != new.x;
        changed |= live.y() != new.y;
        changed |= live.width() != new.width;
        changed |= live.height() != new.height;
        changed |= live.rotation() != new.rotation;

        if !changed {
            return self.base.accept(document);
        }

        info!(id = %self.object, name = %new.name, "changing object");
        document.begin_macro(CHANGE_OBJECT_TEXT);
        let committed = self.push_changes(document, new);
        let base = match committed {
            Ok(()) => self.base.accept(document),
            Err(e) => Err(e),
        };
        document.end_macro()?;
        base
    }

    fn push_changes(&self, document: &mut MapDocument, new: Candidate) -> EditorResult<()> {
        let id = self.object;

        document.push(ChangeMapObject::new(id, new.name, new.object_type));

        let object = document.map_mut().object_mut_or_err(id)?;
        let old_position = object.position();
        object.set_x(new.x);
        object.set_y(new.y);
        let cmd = MoveMapObject::new(document.map(), id, old_position)?;
        document.push(cmd);

        let object = document.map_mut().object_mut_or_err(id)?;
        let old_size = object.size();
        object.set_width(new.width);
        object.set_height(new.height);
        let cmd = ResizeMapObject::new(document.map(), id, old_size)?;
        document.push(cmd);

        let object = document.map_mut().object_mut_or_err(id)?;
        let old_rotation = object.rotation();
        object.set_rotation(new.rotation);
        let cmd = RotateMapObject::new(document.map(), id, old_rotation)?;
        document.push(cmd);

        Ok(())
    }

    /// Close without touching the object or the undo stack
    pub fn reject(&mut self) -> EditorResult<DialogResult> {
        debug!(id = %self.object, "object properties dismissed");
        self.base.reject()
    }
}

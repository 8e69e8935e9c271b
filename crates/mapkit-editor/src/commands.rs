//! Undoable map edits.
//!
//! Move, resize and rotate commands are created *after* the new value was
//! written to the object: they record the old value and read the new one
//! from the live object. `ChangeMapObject` and `ChangeProperties` instead
//! apply their own change when first executed.

use mapkit_core::{Map, ObjectId, PointF, Properties, SizeF};
use tracing::{debug, warn};

use crate::error::EditorResult;

/// What a [`ChangeProperties`] command edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesTarget {
    Map,
    Object(ObjectId),
}

impl PropertiesTarget {
    /// Custom properties of the target, if it still exists
    pub fn properties<'a>(&self, map: &'a Map) -> Option<&'a Properties> {
        match self {
            PropertiesTarget::Map => Some(map.properties()),
            PropertiesTarget::Object(id) => map.object(*id).map(|o| o.properties()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    ChangeMapObject(ChangeMapObject),
    MoveMapObject(MoveMapObject),
    ResizeMapObject(ResizeMapObject),
    RotateMapObject(RotateMapObject),
    ChangeProperties(ChangeProperties),
    Macro(MacroCommand),
}

/// Sets the name and type of an object. Redo and undo both swap the stored
/// values with the object's.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeMapObject {
    pub object: ObjectId,
    pub name: String,
    pub object_type: String,
}

impl ChangeMapObject {
    pub fn new(object: ObjectId, name: impl Into<String>, object_type: impl Into<String>) -> Self {
        Self {
            object,
            name: name.into(),
            object_type: object_type.into(),
        }
    }

    fn swap(&mut self, map: &mut Map) {
        let Some(obj) = map.object_mut(self.object) else {
            warn!(id = %self.object, "change object: object no longer exists");
            return;
        };
        let name = obj.name().to_string();
        let object_type = obj.object_type().to_string();
        obj.set_name(std::mem::replace(&mut self.name, name));
        obj.set_object_type(std::mem::replace(&mut self.object_type, object_type));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MoveMapObject {
    pub object: ObjectId,
    pub old_position: PointF,
    pub new_position: PointF,
}

impl MoveMapObject {
    /// The object must already be at its new position.
    pub fn new(map: &Map, object: ObjectId, old_position: PointF) -> EditorResult<Self> {
        let new_position = map.object_or_err(object)?.position();
        Ok(Self {
            object,
            old_position,
            new_position,
        })
    }

    fn set(&self, map: &mut Map, position: PointF) {
        match map.object_mut(self.object) {
            Some(obj) => obj.set_position(position),
            None => warn!(id = %self.object, "move object: object no longer exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResizeMapObject {
    pub object: ObjectId,
    pub old_size: SizeF,
    pub new_size: SizeF,
}

impl ResizeMapObject {
    /// The object must already have its new size.
    pub fn new(map: &Map, object: ObjectId, old_size: SizeF) -> EditorResult<Self> {
        let new_size = map.object_or_err(object)?.size();
        Ok(Self {
            object,
            old_size,
            new_size,
        })
    }

    fn set(&self, map: &mut Map, size: SizeF) {
        match map.object_mut(self.object) {
            Some(obj) => obj.set_size(size),
            None => warn!(id = %self.object, "resize object: object no longer exists"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RotateMapObject {
    pub object: ObjectId,
    pub old_rotation: f64,
    pub new_rotation: f64,
}

impl RotateMapObject {
    /// The object must already have its new rotation.
    pub fn new(map: &Map, object: ObjectId, old_rotation: f64) -> EditorResult<Self> {
        let new_rotation = map.object_or_err(object)?.rotation();
        Ok(Self {
            object,
            old_rotation,
            new_rotation,
        })
    }

    fn set(&self, map: &mut Map, rotation: f64) {
        match map.object_mut(self.object) {
            Some(obj) => obj.set_rotation(rotation),
            None => warn!(id = %self.object, "rotate object: object no longer exists"),
        }
    }
}

/// Replaces the custom properties of the map or an object. Swaps on redo and undo.
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeProperties {
    pub text: String,
    pub target: PropertiesTarget,
    pub properties: Properties,
}

impl ChangeProperties {
    /// `kind` names the edited thing in the command text, e.g. "Object"
    pub fn new(kind: &str, target: PropertiesTarget, properties: Properties) -> Self {
        Self {
            text: format!("Change {} Properties", kind),
            target,
            properties,
        }
    }

    fn swap(&mut self, map: &mut Map) {
        match self.target {
            PropertiesTarget::Map => {
                let old = map.properties().clone();
                map.set_properties(std::mem::replace(&mut self.properties, old));
            }
            PropertiesTarget::Object(id) => match map.object_mut(id) {
                Some(obj) => {
                    let old = obj.properties().clone();
                    obj.set_properties(std::mem::replace(&mut self.properties, old));
                }
                None => warn!(%id, "change properties: object no longer exists"),
            },
        }
    }
}

/// A named group of commands undone and redone as one step
#[derive(Debug, Clone, PartialEq)]
pub struct MacroCommand {
    pub text: String,
    pub commands: Vec<MapCommand>,
}

impl MacroCommand {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            commands: Vec::new(),
        }
    }
}

impl MapCommand {
    /// Text shown in undo/redo menus
    pub fn text(&self) -> &str {
        match self {
            MapCommand::ChangeMapObject(_) => "Change Object",
            MapCommand::MoveMapObject(_) => "Move Object",
            MapCommand::ResizeMapObject(_) => "Resize Object",
            MapCommand::RotateMapObject(_) => "Rotate Object",
            MapCommand::ChangeProperties(cmd) => &cmd.text,
            MapCommand::Macro(cmd) => &cmd.text,
        }
    }

    /// Number of leaf commands, counting macro children
    pub fn leaf_count(&self) -> usize {
        match self {
            MapCommand::Macro(cmd) => cmd.commands.iter().map(MapCommand::leaf_count).sum(),
            _ => 1,
        }
    }

    pub fn redo(&mut self, map: &mut Map) {
        debug!(command = self.text(), "redo");
        match self {
            MapCommand::ChangeMapObject(cmd) => cmd.swap(map),
            MapCommand::MoveMapObject(cmd) => cmd.set(map, cmd.new_position),
            MapCommand::ResizeMapObject(cmd) => cmd.set(map, cmd.new_size),
            MapCommand::RotateMapObject(cmd) => cmd.set(map, cmd.new_rotation),
            MapCommand::ChangeProperties(cmd) => cmd.swap(map),
            MapCommand::Macro(cmd) => {
                for sub_cmd in &mut cmd.commands {
                    sub_cmd.redo(map);
                }
            }
        }
    }

    pub fn undo(&mut self, map: &mut Map) {
        debug!(command = self.text(), "undo");
        match self {
            MapCommand::ChangeMapObject(cmd) => cmd.swap(map),
            MapCommand::MoveMapObject(cmd) => cmd.set(map, cmd.old_position),
            MapCommand::ResizeMapObject(cmd) => cmd.set(map, cmd.old_size),
            MapCommand::RotateMapObject(cmd) => cmd.set(map, cmd.old_rotation),
            MapCommand::ChangeProperties(cmd) => cmd.swap(map),
            MapCommand::Macro(cmd) => {
                for sub_cmd in cmd.commands.iter_mut().rev() {
                    sub_cmd.undo(map);
                }
            }
        }
    }
}

impl From<ChangeMapObject> for MapCommand {
    fn from(cmd: ChangeMapObject) -> Self {
        MapCommand::ChangeMapObject(cmd)
    }
}

impl From<MoveMapObject> for MapCommand {
    fn from(cmd: MoveMapObject) -> Self {
        MapCommand::MoveMapObject(cmd)
    }
}

impl From<ResizeMapObject> for MapCommand {
    fn from(cmd: ResizeMapObject) -> Self {
        MapCommand::ResizeMapObject(cmd)
    }
}

impl From<RotateMapObject> for MapCommand {
    fn from(cmd: RotateMapObject) -> Self {
        MapCommand::RotateMapObject(cmd)
    }
}

impl From<ChangeProperties> for MapCommand {
    fn from(cmd: ChangeProperties) -> Self {
        MapCommand::ChangeProperties(cmd)
    }
}

impl From<MacroCommand> for MapCommand {
    fn from(cmd: MacroCommand) -> Self {
        MapCommand::Macro(cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_core::MapObject;

    fn map_with_object() -> (Map, ObjectId) {
        let mut map = Map::default();
        let id = map.add_object(
            MapObject::new("door", "Door", PointF::new(10.0, 20.0), SizeF::new(32.0, 32.0))
                .with_property("locked", "true"),
        );
        (map, id)
    }

    #[test]
    fn test_change_map_object_swaps() {
        let (mut map, id) = map_with_object();
        let mut cmd = MapCommand::from(ChangeMapObject::new(id, "gate", "Gate"));

        cmd.redo(&mut map);
        let obj = map.object(id).unwrap();
        assert_eq!((obj.name(), obj.object_type()), ("gate", "Gate"));

        cmd.undo(&mut map);
        let obj = map.object(id).unwrap();
        assert_eq!((obj.name(), obj.object_type()), ("door", "Door"));

        cmd.redo(&mut map);
        assert_eq!(map.object(id).unwrap().name(), "gate");
    }

    #[test]
    fn test_move_records_live_position() {
        let (mut map, id) = map_with_object();
        let old = map.object(id).unwrap().position();
        map.object_mut(id).unwrap().set_position(PointF::new(50.0, 60.0));

        let mut cmd = MapCommand::from(MoveMapObject::new(&map, id, old).unwrap());
        cmd.redo(&mut map);
        assert_eq!(map.object(id).unwrap().position(), PointF::new(50.0, 60.0));

        cmd.undo(&mut map);
        assert_eq!(map.object(id).unwrap().position(), PointF::new(10.0, 20.0));
    }

    #[test]
    fn test_resize_and_rotate() {
        let (mut map, id) = map_with_object();
        map.object_mut(id).unwrap().set_width(64.0);
        let mut resize =
            MapCommand::from(ResizeMapObject::new(&map, id, SizeF::new(32.0, 32.0)).unwrap());
        map.object_mut(id).unwrap().set_rotation(90.0);
        let mut rotate = MapCommand::from(RotateMapObject::new(&map, id, 0.0).unwrap());

        rotate.undo(&mut map);
        resize.undo(&mut map);
        let obj = map.object(id).unwrap();
        assert_eq!(obj.size(), SizeF::new(32.0, 32.0));
        assert_eq!(obj.rotation(), 0.0);

        resize.redo(&mut map);
        rotate.redo(&mut map);
        let obj = map.object(id).unwrap();
        assert_eq!(obj.size(), SizeF::new(64.0, 32.0));
        assert_eq!(obj.rotation(), 90.0);
    }

    #[test]
    fn test_constructor_requires_object() {
        let map = Map::default();
        assert!(MoveMapObject::new(&map, ObjectId(9), PointF::default()).is_err());
        assert!(ResizeMapObject::new(&map, ObjectId(9), SizeF::default()).is_err());
        assert!(RotateMapObject::new(&map, ObjectId(9), 0.0).is_err());
    }

    #[test]
    fn test_change_properties_on_map_and_object() {
        let (mut map, id) = map_with_object();

        let mut props = Properties::new();
        props.insert("music".into(), "forest.ogg".into());
        let mut on_map = MapCommand::from(ChangeProperties::new("Map", PropertiesTarget::Map, props));
        assert_eq!(on_map.text(), "Change Map Properties");
        on_map.redo(&mut map);
        assert_eq!(map.properties().get("music").map(String::as_str), Some("forest.ogg"));
        on_map.undo(&mut map);
        assert!(map.properties().is_empty());

        let mut on_object = MapCommand::from(ChangeProperties::new(
            "Object",
            PropertiesTarget::Object(id),
            Properties::new(),
        ));
        on_object.redo(&mut map);
        assert!(map.object(id).unwrap().properties().is_empty());
        on_object.undo(&mut map);
        assert_eq!(
            PropertiesTarget::Object(id)
                .properties(&map)
                .and_then(|p| p.get("locked"))
                .map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn test_macro_undoes_in_reverse() {
        let (mut map, id) = map_with_object();
        let mut group = MacroCommand::new("Change Object");
        group.commands.push(ChangeMapObject::new(id, "a", "A").into());
        group.commands.push(ChangeMapObject::new(id, "b", "B").into());
        let mut cmd = MapCommand::from(group);
        assert_eq!(cmd.leaf_count(), 2);

        cmd.redo(&mut map);
        assert_eq!(map.object(id).unwrap().name(), "b");
        cmd.undo(&mut map);
        assert_eq!(map.object(id).unwrap().name(), "door");
    }

    #[test]
    fn test_missing_object_is_skipped() {
        let (mut map, id) = map_with_object();
        let mut cmd = MapCommand::from(ChangeMapObject::new(id, "x", "X"));
        map.remove_object(id);
        cmd.redo(&mut map);
        cmd.undo(&mut map);
        assert_eq!(map.object_count(), 0);
    }
}

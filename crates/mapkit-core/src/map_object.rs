//! Map objects: named, typed entities placed on a map with free geometry

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::geometry::{PointF, RectF, SizeF};
use crate::properties::Properties;

/// Identifier of a map object, unique within its map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An object placed on a map
///
/// Geometry is stored in map pixel coordinates. The size may be zero
/// (point objects); rotation is in degrees, clockwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapObject {
    id: ObjectId,
    name: String,
    #[serde(rename = "type")]
    object_type: String,
    position: PointF,
    size: SizeF,
    rotation: f64,
    #[serde(default)]
    properties: Properties,
}

impl MapObject {
    /// Create an unplaced object. The id is assigned when it is added to a map.
    pub fn new(
        name: impl Into<String>,
        object_type: impl Into<String>,
        position: PointF,
        size: SizeF,
    ) -> Self {
        Self {
            id: ObjectId(0),
            name: name.into(),
            object_type: object_type.into(),
            position,
            size,
            rotation: 0.0,
            properties: Properties::new(),
        }
    }

    /// Builder-style rotation
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Builder-style custom property
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub(crate) fn set_id(&mut self, id: ObjectId) {
        self.id = id;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    pub fn set_object_type(&mut self, object_type: impl Into<String>) {
        self.object_type = object_type.into();
    }

    pub fn position(&self) -> PointF {
        self.position
    }

    pub fn set_position(&mut self, position: PointF) {
        self.position = position;
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn set_x(&mut self, x: f64) {
        self.position.x = x;
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn set_y(&mut self, y: f64) {
        self.position.y = y;
    }

    pub fn size(&self) -> SizeF {
        self.size
    }

    pub fn set_size(&mut self, size: SizeF) {
        self.size = size;
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn set_width(&mut self, width: f64) {
        self.size.width = width;
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn set_height(&mut self, height: f64) {
        self.size.height = height;
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: f64) {
        self.rotation = rotation;
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Properties {
        &mut self.properties
    }

    pub fn set_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }

    /// Unrotated bounding rectangle
    pub fn bounds(&self) -> RectF {
        RectF::new(self.position, self.size)
    }
}

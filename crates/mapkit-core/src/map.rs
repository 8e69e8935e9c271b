//! Map container owning the placed objects

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::map_object::{MapObject, ObjectId};
use crate::properties::Properties;

/// A tile map and the objects placed on it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Map {
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    #[serde(default)]
    properties: Properties,
    objects: Vec<MapObject>,
    #[serde(default)]
    next_object_id: u32,
}

impl Map {
    /// Create an empty map
    pub fn new(width: u32, height: u32, tile_width: u32, tile_height: u32) -> Self {
        Self {
            width,
            height,
            tile_width,
            tile_height,
            properties: Properties::new(),
            objects: Vec::new(),
            next_object_id: 1,
        }
    }

    /// Adds an object, assigning it the next free id
    ///
    /// The id is never below one past the highest id present, so a loaded
    /// map with a stale or missing counter still gets unique ids.
    pub fn add_object(&mut self, mut object: MapObject) -> ObjectId {
        let after_highest = self
            .objects
            .iter()
            .map(|o| o.id().0.saturating_add(1))
            .max()
            .unwrap_or(1);
        let id = ObjectId(self.next_object_id.max(after_highest));
        self.next_object_id = id.0.saturating_add(1);
        object.set_id(id);
        debug!(%id, name = object.name(), "added map object");
        self.objects.push(object);
        id
    }

    /// Removes and returns an object
    pub fn remove_object(&mut self, id: ObjectId) -> Option<MapObject> {
        let index = self.objects.iter().position(|o| o.id() == id)?;
        Some(self.objects.remove(index))
    }

    pub fn object(&self, id: ObjectId) -> Option<&MapObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut MapObject> {
        self.objects.iter_mut().find(|o| o.id() == id)
    }

    /// Like [`Map::object`], but a missing object is an error
    pub fn object_or_err(&self, id: ObjectId) -> Result<&MapObject> {
        self.object(id).ok_or(Error::ObjectNotFound { id })
    }

    /// Like [`Map::object_mut`], but a missing object is an error
    pub fn object_mut_or_err(&mut self, id: ObjectId) -> Result<&mut MapObject> {
        self.object_mut(id).ok_or(Error::ObjectNotFound { id })
    }

    pub fn objects(&self) -> &[MapObject] {
        &self.objects
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    pub fn set_properties(&mut self, properties: Properties) {
        self.properties = properties;
    }

    /// Size of the map in pixels
    pub fn pixel_size(&self) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(self.tile_width),
            u64::from(self.height) * u64::from(self.tile_height),
        )
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new(100, 100, 32, 32)
    }
}

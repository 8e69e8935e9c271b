//! # MapKit Core
//!
//! Core types for MapKit tile maps.
//! Provides the map container, placed map objects with free geometry,
//! and the custom key/value properties attached to both.

pub mod error;
pub mod geometry;
pub mod map;
pub mod map_object;
pub mod properties;

pub use error::{Error, Result};
pub use geometry::{PointF, RectF, SizeF};
pub use map::Map;
pub use map_object::{MapObject, ObjectId};
pub use properties::Properties;

use mapkit_core::{Map, MapObject, ObjectId, PointF, SizeF};
use proptest::prelude::*;

fn object(name: &str) -> MapObject {
    MapObject::new(name, "", PointF::new(0.0, 0.0), SizeF::new(16.0, 16.0))
}

#[test]
fn test_add_and_lookup() {
    let mut map = Map::default();
    let a = map.add_object(object("a"));
    let b = map.add_object(object("b"));

    assert_eq!(a, ObjectId(1));
    assert_eq!(b, ObjectId(2));
    assert_eq!(map.object_count(), 2);
    assert_eq!(map.object(b).map(|o| o.name()), Some("b"));
    assert_eq!(map.object(b).map(|o| o.id()), Some(b));
}

#[test]
fn test_remove_keeps_ids_unique() {
    let mut map = Map::default();
    let a = map.add_object(object("a"));
    let removed = map.remove_object(a);
    assert_eq!(removed.map(|o| o.id()), Some(a));
    assert!(map.object(a).is_none());

    let c = map.add_object(object("c"));
    assert_ne!(a, c);
}

#[test]
fn test_missing_object_is_error() {
    let mut map = Map::default();
    let err = map.object_or_err(ObjectId(42)).unwrap_err();
    assert!(err.is_not_found());
    assert!(map.object_mut_or_err(ObjectId(42)).is_err());
}

#[test]
fn test_pixel_size() {
    let map = Map::new(10, 5, 32, 16);
    assert_eq!(map.pixel_size(), (320, 80));
}

#[test]
fn test_pixel_size_beyond_u32() {
    let map = Map::new(70_000, 1, 70_000, 1);
    assert_eq!(map.pixel_size(), (4_900_000_000, 1));

    let map = Map::new(u32::MAX, u32::MAX, u32::MAX, u32::MAX);
    let side = u64::from(u32::MAX) * u64::from(u32::MAX);
    assert_eq!(map.pixel_size(), (side, side));
}

#[test]
fn test_loaded_map_without_counter_keeps_ids_unique() {
    let mut map = Map::default();
    map.add_object(object("a"));
    let b = map.add_object(object("b"));

    let mut value = serde_json::to_value(&map).unwrap();
    value.as_object_mut().unwrap().remove("next_object_id");
    let mut loaded: Map = serde_json::from_value(value).unwrap();

    let c = loaded.add_object(object("c"));
    assert!(c > b);
    assert_eq!(loaded.object(b).map(|o| o.name()), Some("b"));
}

#[test]
fn test_stale_counter_is_skipped_past() {
    let mut map = Map::default();
    map.add_object(object("a"));
    map.add_object(object("b"));

    let mut value = serde_json::to_value(&map).unwrap();
    value["next_object_id"] = serde_json::json!(1);
    let mut loaded: Map = serde_json::from_value(value).unwrap();

    assert_eq!(loaded.add_object(object("c")), ObjectId(3));
    assert_eq!(loaded.add_object(object("d")), ObjectId(4));
}

proptest! {
    #[test]
    fn prop_ids_never_repeat(ops in proptest::collection::vec(any::<bool>(), 1..64)) {
        let mut map = Map::default();
        let mut seen = Vec::new();
        for add in ops {
            if add || seen.is_empty() {
                let id = map.add_object(object("o"));
                prop_assert!(!seen.contains(&id));
                seen.push(id);
            } else if let Some(id) = seen.first().copied() {
                map.remove_object(id);
            }
        }
    }
}

//! Undo history invariants across sequences of dialog edits

use mapkit_core::{Map, MapObject, ObjectId, PointF, SizeF};
use mapkit_editor::{MapDocument, ObjectPropertiesDialog};
use mapkit_settings::Preferences;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Edit {
    Name(String),
    X(i32),
    Width(u16),
    Rotation(i16),
    Property(String, String),
    Nothing,
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        "[a-z]{1,6}".prop_map(Edit::Name),
        (-1000..1000i32).prop_map(Edit::X),
        (0..512u16).prop_map(Edit::Width),
        (-360..=360i16).prop_map(Edit::Rotation),
        ("[a-c]", "[0-9]{1,2}").prop_map(|(k, v)| Edit::Property(k, v)),
        Just(Edit::Nothing),
    ]
}

fn document() -> (MapDocument, ObjectId) {
    let mut map = Map::default();
    let id = map.add_object(MapObject::new(
        "start",
        "Spawn",
        PointF::new(0.0, 0.0),
        SizeF::new(16.0, 16.0),
    ));
    (MapDocument::new(map), id)
}

fn apply(doc: &mut MapDocument, id: ObjectId, prefs: &Preferences, edit: &Edit) {
    let mut dialog = ObjectPropertiesDialog::new(doc, id, prefs).unwrap();
    match edit {
        Edit::Name(name) => dialog.set_name(name.clone()),
        Edit::X(x) => dialog.set_x(f64::from(*x)),
        Edit::Width(w) => dialog.set_width(f64::from(*w)),
        Edit::Rotation(r) => dialog.set_rotation(f64::from(*r)),
        Edit::Property(k, v) => dialog.base_mut().set_property(k.clone(), v.clone()),
        Edit::Nothing => {}
    }
    dialog.accept(doc).unwrap();
}

proptest! {
    #[test]
    fn prop_undo_all_restores_original(edits in proptest::collection::vec(edit_strategy(), 1..20)) {
        let prefs = Preferences::default();
        let (mut doc, id) = document();
        let original = doc.map().clone();

        let mut snapshots = vec![original.clone()];
        for edit in &edits {
            apply(&mut doc, id, &prefs, edit);
            if doc.undo_stack().count() + 1 != snapshots.len() {
                snapshots.push(doc.map().clone());
            }
        }
        prop_assert_eq!(doc.undo_stack().count() + 1, snapshots.len());
        let final_map = doc.map().clone();

        // every undo step lands exactly on the state before that accept
        for expected in snapshots.iter().rev().skip(1) {
            doc.undo().unwrap();
            prop_assert_eq!(doc.map(), expected);
        }
        prop_assert_eq!(doc.map(), &original);
        prop_assert!(!doc.is_modified());

        while doc.undo_stack().can_redo() {
            doc.redo().unwrap();
        }
        prop_assert_eq!(doc.map(), &final_map);
    }
}

#[test]
fn test_undo_limit_from_preferences() {
    let mut prefs = Preferences::default();
    prefs.undo_limit = 3;
    let mut map = Map::default();
    let id = map.add_object(MapObject::new("a", "", PointF::default(), SizeF::default()));
    let mut doc = MapDocument::with_preferences(map, &prefs);

    for x in 1..=5 {
        apply(&mut doc, id, &prefs, &Edit::X(x));
    }
    assert_eq!(doc.undo_stack().count(), 3);

    while doc.undo_stack().can_undo() {
        doc.undo().unwrap();
    }
    assert_eq!(doc.map().object(id).unwrap().x(), 2.0);
}

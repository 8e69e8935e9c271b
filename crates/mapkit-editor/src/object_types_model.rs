//! List model over the object type registry, used as combo box suggestions

use mapkit_settings::ObjectType;

/// Color given to types inserted from the combo box edit text
const DEFAULT_TYPE_COLOR: &str = "#a0a0a4";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectTypesModel {
    object_types: Vec<ObjectType>,
}

impl ObjectTypesModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all rows
    pub fn set_object_types(&mut self, object_types: &[ObjectType]) {
        self.object_types = object_types.to_vec();
    }

    pub fn row_count(&self) -> usize {
        self.object_types.len()
    }

    pub fn name(&self, row: usize) -> Option<&str> {
        self.object_types.get(row).map(|t| t.name.as_str())
    }

    pub fn color(&self, row: usize) -> Option<&str> {
        self.object_types.get(row).map(|t| t.color.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.object_types.iter().map(|t| t.name.as_str())
    }

    /// Row of the type with exactly this name
    pub fn find(&self, name: &str) -> Option<usize> {
        self.object_types.iter().position(|t| t.name == name)
    }

    /// Append a row for `name` and return its index. Existing names are not duplicated.
    pub fn insert(&mut self, name: &str) -> usize {
        if let Some(row) = self.find(name) {
            return row;
        }
        self.object_types
            .push(ObjectType::new(name, DEFAULT_TYPE_COLOR));
        self.object_types.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapkit_settings::default_object_types;

    #[test]
    fn test_rows() {
        let mut model = ObjectTypesModel::new();
        model.set_object_types(&default_object_types());

        assert_eq!(model.row_count(), 4);
        assert_eq!(model.name(0), Some("Spawn"));
        assert_eq!(model.color(2), Some("#a05000"));
        assert_eq!(model.find("Door"), Some(2));
        assert_eq!(model.find("door"), None);
        assert_eq!(model.name(10), None);
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut model = ObjectTypesModel::new();
        assert_eq!(model.insert("Npc"), 0);
        assert_eq!(model.insert("Npc"), 0);
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.color(0), Some(DEFAULT_TYPE_COLOR));
    }
}

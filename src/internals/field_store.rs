use smallvec::SmallVec;

use crate::Entry;

/// Ordered multi-map behind `FormData`.
///
/// Pairs are kept in insertion order across all names. Multiple pairs may
/// share a name; `get` answers with the earliest one.
#[derive(Debug, Default)]
pub struct FieldStore {
    fields: SmallVec<[(String, Entry); 0]>,
}

impl FieldStore {
    pub fn new() -> Self {
        Self {
            fields: SmallVec::new(),
        }
    }

    /// Removes every pair for `name`, then inserts the new pair at the end.
    pub fn set(&mut self, name: String, entry: Entry) {
        self.fields.retain(|(field_name, _)| field_name != &name);
        self.fields.push((name, entry));
    }

    /// Inserts at the end. Existing pairs for the same name are kept.
    pub fn append(&mut self, name: String, entry: Entry) {
        self.fields.push((name, entry));
    }

    /// The first entry stored for `name`.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.fields
            .iter()
            .find(|(field_name, _)| field_name == name)
            .map(|(_, entry)| entry)
    }

    /// All entries for `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&Entry> {
        self.fields
            .iter()
            .filter(|(field_name, _)| field_name == name)
            .map(|(_, entry)| entry)
            .collect()
    }

    pub fn has(&self, name: &str) -> bool {
        self.fields.iter().any(|(field_name, _)| field_name == name)
    }

    /// Removes every pair for `name`. A no-op when none exist.
    pub fn delete(&mut self, name: &str) {
        self.fields.retain(|(field_name, _)| field_name != name);
    }

    pub fn entries(&self) -> std::slice::Iter<'_, (String, Entry)> {
        self.fields.iter()
    }

    pub fn into_entries(self) -> smallvec::IntoIter<[(String, Entry); 0]> {
        self.fields.into_iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}


#[cfg(test)]
mod test_append {
    use super::*;

    #[test]
    fn it_should_keep_existing_entries_in_order() {
        let mut store = FieldStore::new();

        store.append("name".to_string(), Entry::Text("John Doe".to_string()));
        store.append("name".to_string(), Entry::Text("Max Doe".to_string()));

        let all: Vec<_> = store
            .get_all("name")
            .into_iter()
            .map(|e| e.as_text().unwrap())
            .collect();
        assert_eq!(all, ["John Doe", "Max Doe"]);
    }
}


#[cfg(test)]
mod test_delete {
    use super::*;

    #[test]
    fn it_should_remove_every_entry_for_the_name() {
        let mut store = FieldStore::new();

        store.append("name".to_string(), Entry::Text("John Doe".to_string()));
        store.append("name".to_string(), Entry::Text("Max Doe".to_string()));
        store.append("other".to_string(), Entry::Text("kept".to_string()));

        store.delete("name");

        assert!(!store.has("name"));
        assert!(store.has("other"));
    }

    #[test]
    fn it_should_be_a_no_op_for_a_missing_name() {
        let mut store = FieldStore::new();

        store.delete("nope");

        assert!(store.is_empty());
    }
}

#[cfg(test)]
mod test_entries {
    use super::*;

    #[test]
    fn it_should_iterate_in_insertion_order_across_names() {
        let mut store = FieldStore::new();

        store.append("a".to_string(), Entry::Text("1".to_string()));
        store.append("b".to_string(), Entry::Text("2".to_string()));
        store.append("a".to_string(), Entry::Text("3".to_string()));

        let names: Vec<_> = store.entries().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, ["a", "b", "a"]);
    }

    #[test]
    fn it_should_be_restartable() {
        let mut store = FieldStore::new();

        store.append("a".to_string(), Entry::Text("1".to_string()));

        assert_eq!(store.entries().count(), 1);
        assert_eq!(store.entries().count(), 1);
    }
}

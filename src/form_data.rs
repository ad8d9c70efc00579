use anyhow::Result;
use std::fmt::Display;

use crate::internals::normalize;
use crate::internals::FieldStore;
use crate::Entry;
use crate::FieldOptions;
use crate::FormValue;

///
/// An ordered form-data container, equivalent to a browser's `FormData`.
///
/// Fields are kept in insertion order and may hold multiple values per
/// name. Values are normalised on the way in: scalars become text entries,
/// byte buffers and blobs become [`File`](crate::File) entries, files pass
/// through unchanged, and streams are stored raw unless a size is declared
/// for them (see [`FieldOptions`]).
///
/// ```rust
/// use form_data::FormData;
///
/// let mut form = FormData::new();
///
/// form.set("name", "John Doe")?;
/// form.append("tag", "a")?;
/// form.append("tag", "b")?;
///
/// assert_eq!(form.get("name").unwrap().as_text(), Some("John Doe"));
/// assert_eq!(form.get_all("tag").len(), 2);
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// The container never reads from stream values; a downstream body encoder
/// walks [`FormData::entries()`] and consumes them, each at most once.
///
#[derive(Debug, Default)]
pub struct FormData {
    store: FieldStore,
}

impl FormData {
    pub fn new() -> Self {
        Self {
            store: FieldStore::new(),
        }
    }

    /// Sets a field, replacing every existing value stored under `name`.
    ///
    /// Fails only when the options are malformed; nothing is stored then.
    pub fn set<N, V>(&mut self, name: N, value: V) -> Result<()>
    where
        N: Display,
        V: Into<FormValue>,
    {
        self.set_with(name, value, FieldOptions::new())
    }

    /// Like [`FormData::set()`], with a filename or options for the value.
    ///
    /// ```rust
    /// use form_data::Blob;
    /// use form_data::FormData;
    ///
    /// let mut form = FormData::new();
    /// form.set_with("upload", Blob::new("Some text"), "file.txt")?;
    ///
    /// assert_eq!(form.get("upload").unwrap().as_file().unwrap().name(), "file.txt");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn set_with<N, V, O>(&mut self, name: N, value: V, options: O) -> Result<()>
    where
        N: Display,
        V: Into<FormValue>,
        O: Into<FieldOptions>,
    {
        let entry = normalize(value.into(), options.into())?;
        self.store.set(name.to_string(), entry);

        Ok(())
    }

    /// Appends a field value, keeping existing values for `name` in place.
    pub fn append<N, V>(&mut self, name: N, value: V) -> Result<()>
    where
        N: Display,
        V: Into<FormValue>,
    {
        self.append_with(name, value, FieldOptions::new())
    }

    /// Like [`FormData::append()`], with a filename or options for the value.
    pub fn append_with<N, V, O>(&mut self, name: N, value: V, options: O) -> Result<()>
    where
        N: Display,
        V: Into<FormValue>,
        O: Into<FieldOptions>,
    {
        let entry = normalize(value.into(), options.into())?;
        self.store.append(name.to_string(), entry);

        Ok(())
    }

    /// The first value stored under `name`, or `None` when the field is
    /// absent. Multi-valued fields answer with their earliest value.
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.store.get(name)
    }

    /// Every value stored under `name`, in insertion order.
    pub fn get_all(&self, name: &str) -> Vec<&Entry> {
        self.store.get_all(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.store.has(name)
    }

    /// Removes every value stored under `name`. A no-op when absent.
    pub fn delete(&mut self, name: &str) {
        self.store.delete(name);
    }

    /// Iterates over `(name, entry)` pairs in insertion order.
    ///
    /// The iterator is lazy and can be restarted by calling this again.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.store.entries(),
        }
    }

    /// Iterates over field names in insertion order. Names of
    /// multi-valued fields appear once per value.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries().map(|(name, _)| name)
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Entry> {
        self.entries().map(|(_, entry)| entry)
    }

    /// The number of stored values, across all names.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl<'a> IntoIterator for &'a FormData {
    type Item = (&'a str, &'a Entry);
    type IntoIter = Entries<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

/// Consumes the container, yielding owned `(name, entry)` pairs in
/// insertion order. This is how a body encoder takes ownership of
/// stream-backed entries.
impl IntoIterator for FormData {
    type Item = (String, Entry);
    type IntoIter = IntoEntries;

    fn into_iter(self) -> Self::IntoIter {
        IntoEntries {
            inner: self.store.into_entries(),
        }
    }
}

/// Owning iterator over the `(name, entry)` pairs of a [`FormData`].
#[derive(Debug)]
pub struct IntoEntries {
    inner: smallvec::IntoIter<[(String, Entry); 0]>,
}

impl Iterator for IntoEntries {
    type Item = (String, Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Iterator over the `(name, entry)` pairs of a [`FormData`].
#[derive(Debug, Clone)]
pub struct Entries<'a> {
    inner: std::slice::Iter<'a, (String, Entry)>,
}

impl<'a> Iterator for Entries<'a> {
    type Item = (&'a str, &'a Entry);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, entry)| (name.as_str(), entry))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}




#[cfg(test)]
mod test_has {
    use super::*;

    #[test]
    fn it_should_be_false_before_any_set_or_append() {
        let form = FormData::new();

        assert!(!form.has("name"));
    }

    #[test]
    fn it_should_be_true_after_a_set() {
        let mut form = FormData::new();

        form.set("name", "John Doe").unwrap();

        assert!(form.has("name"));
    }

    #[test]
    fn it_should_be_false_again_after_a_delete() {
        let mut form = FormData::new();

        form.set("name", "John Doe").unwrap();
        form.delete("name");

        assert!(!form.has("name"));
    }
}

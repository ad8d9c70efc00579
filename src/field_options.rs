use std::fmt::Display;

///
/// Optional metadata for a field being set or appended, standing in for
/// the filename-or-options argument a browser's form API takes.
///
/// A bare string converts into options carrying just the filename, so
/// both of these work with
/// [`FormData::set_with()`](crate::FormData::set_with()):
///
/// ```rust
/// use form_data::Blob;
/// use form_data::FieldOptions;
/// use form_data::FormData;
///
/// let mut form = FormData::new();
///
/// form.set_with("a", Blob::new("Some text"), "file.txt")?;
/// form.set_with("b", Blob::new("Some text"), FieldOptions::new().file_name("file.txt"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
///
/// `size` declares the byte length of a stream value, which turns the
/// stream into a [`File`](crate::File) entry. `Some(0)` counts as a
/// declared size of zero; only leaving it unset means "no size".
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOptions {
    pub(crate) file_name: Option<String>,
    pub(crate) size: Option<u64>,
    pub(crate) mime_type: Option<String>,
}

impl FieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the filename to use when the value is wrapped into a file.
    pub fn file_name<N>(mut self, file_name: N) -> Self
    where
        N: Display,
    {
        self.file_name = Some(file_name.to_string());
        self
    }

    /// Declares the byte length of a stream value.
    pub fn size(mut self, size: u64) -> Self {
        self.size = Some(size);
        self
    }

    /// Sets the MIME type to use when the value is wrapped into a file.
    ///
    /// The string is parsed when the field is stored; an invalid MIME
    /// type makes the `set`/`append` call fail without storing anything.
    pub fn mime_type<M>(mut self, mime_type: M) -> Self
    where
        M: AsRef<str>,
    {
        self.mime_type = Some(mime_type.as_ref().to_string());
        self
    }
}

impl From<&str> for FieldOptions {
    fn from(file_name: &str) -> Self {
        Self::new().file_name(file_name)
    }
}

impl From<String> for FieldOptions {
    fn from(file_name: String) -> Self {
        Self::new().file_name(file_name)
    }
}

#[cfg(test)]
mod test_from_str {
    use super::*;

    #[test]
    fn it_should_treat_a_bare_string_as_the_file_name() {
        let options: FieldOptions = "file.txt".into();

        assert_eq!(options, FieldOptions::new().file_name("file.txt"));
    }
}

#[cfg(test)]
mod test_size {
    use super::*;

    #[test]
    fn it_should_keep_zero_as_a_declared_size() {
        let options = FieldOptions::new().size(0);

        assert_eq!(options.size, Some(0));
    }
}

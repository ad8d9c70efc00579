use bytes::Bytes;
use mime::Mime;

///
/// A finite, in-memory byte source with an optional MIME type.
///
/// When added to a [`FormData`](crate::FormData), a `Blob` is wrapped into a
/// [`File`](crate::File), taking its name from the filename argument (or the
/// `"blob"` placeholder) and its size from the byte length.
///
/// ```rust
/// use form_data::Blob;
///
/// let blob = Blob::new("Some text").with_mime_type(mime::TEXT_PLAIN);
///
/// assert_eq!(blob.size(), 9);
/// ```
///
#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    bytes: Bytes,
    mime_type: Option<Mime>,
}

impl Blob {
    pub fn new<B>(bytes: B) -> Self
    where
        B: Into<Bytes>,
    {
        Self {
            bytes: bytes.into(),
            mime_type: None,
        }
    }

    /// Sets the MIME type for this blob.
    ///
    /// By default a blob has no MIME type.
    pub fn with_mime_type(mut self, mime_type: Mime) -> Self {
        self.mime_type = Some(mime_type);
        self
    }

    /// The byte length of this blob's contents.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &Bytes {
        &self.bytes
    }

    pub fn mime_type(&self) -> Option<&Mime> {
        self.mime_type.as_ref()
    }

    pub(crate) fn into_parts(self) -> (Bytes, Option<Mime>) {
        (self.bytes, self.mime_type)
    }
}



#[cfg(test)]
mod test_size {
    use super::*;

    #[test]
    fn it_should_report_the_byte_length() {
        let blob = Blob::new("Some text");

        assert_eq!(blob.size(), 9);
    }

    #[test]
    fn it_should_report_zero_for_an_empty_blob() {
        let blob = Blob::new("");

        assert_eq!(blob.size(), 0);
    }
}

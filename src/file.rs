use bytes::Bytes;
use mime::Mime;
use std::fmt::Display;

use crate::FileStream;
use crate::StreamSource;

///
/// A file-like value: a name, a byte size, an optional MIME type,
/// and the content itself.
///
/// This is the shape the container recognises as "already a file" and
/// passes through unchanged, and the shape it builds when wrapping byte
/// buffers, blobs, and sized streams.
///
/// Use [`File::from_bytes()`] for in-memory content. Files backed by
/// streams are normally produced by the container itself, from a
/// [`FileStream`](crate::FileStream) or [`StreamSource`](crate::StreamSource)
/// given together with a declared size.
///
/// ```rust
/// use form_data::File;
///
/// let file = File::from_bytes("Some text", "file.txt")
///     .with_mime_type(mime::TEXT_PLAIN);
///
/// assert_eq!(file.name(), "file.txt");
/// assert_eq!(file.size(), 9);
/// ```
///
#[derive(Debug)]
pub struct File {
    name: String,
    size: u64,
    mime_type: Option<Mime>,
    content: FileContent,
}

/// The content behind a [`File`].
///
/// Stream variants are lazy. The container records them untouched, and
/// reading is left to whoever consumes the entries downstream.
#[derive(Debug)]
pub enum FileContent {
    Bytes(Bytes),
    FileStream(FileStream),
    Stream(StreamSource),
}

impl File {
    /// Creates a file from in-memory bytes. The size is the byte length.
    pub fn from_bytes<B, N>(bytes: B, name: N) -> Self
    where
        B: Into<Bytes>,
        N: Display,
    {
        let bytes = bytes.into();
        let size = bytes.len() as u64;

        Self::new(name.to_string(), size, None, FileContent::Bytes(bytes))
    }

    pub(crate) fn new(name: String, size: u64, mime_type: Option<Mime>, content: FileContent) -> Self {
        Self {
            name,
            size,
            mime_type,
            content,
        }
    }

    /// Sets the MIME type for this file.
    ///
    /// By default there is none.
    pub fn with_mime_type(mut self, mime_type: Mime) -> Self {
        self.mime_type = Some(mime_type);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The byte length of the content, or the declared length for
    /// stream-backed files.
    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn mime_type(&self) -> Option<&Mime> {
        self.mime_type.as_ref()
    }

    pub fn content(&self) -> &FileContent {
        &self.content
    }

    pub fn into_content(self) -> FileContent {
        self.content
    }
}


#[cfg(test)]
mod test_with_mime_type {
    use super::*;

    #[test]
    fn it_should_use_mime_type_set() {
        let file = File::from_bytes("Some text", "file.txt").with_mime_type(mime::TEXT_PLAIN);

        assert_eq!(file.mime_type(), Some(&mime::TEXT_PLAIN));
    }
}

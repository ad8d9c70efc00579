use crate::File;
use crate::FileStream;
use crate::StreamSource;

///
/// One stored value of a form field.
///
/// Scalars arrive here as `Text`. Buffers, blobs, and sized streams arrive
/// as `File`. Streams given without a declared size are stored raw, as
/// `FileStream` or `Stream`, for the consumer to handle itself.
///
#[derive(Debug)]
pub enum Entry {
    Text(String),
    File(File),
    /// A filesystem read stream stored as-is, with no declared size.
    FileStream(FileStream),
    /// A generic byte stream stored as-is, with no declared size.
    Stream(StreamSource),
}

impl Entry {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&File> {
        match self {
            Self::File(file) => Some(file),
            _ => None,
        }
    }

    pub fn as_file_stream(&self) -> Option<&FileStream> {
        match self {
            Self::FileStream(stream) => Some(stream),
            _ => None,
        }
    }

    pub fn as_stream(&self) -> Option<&StreamSource> {
        match self {
            Self::Stream(stream) => Some(stream),
            _ => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    /// True for entries satisfying the file contract. Raw stream entries
    /// are not files.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

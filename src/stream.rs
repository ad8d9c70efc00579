use anyhow::Context;
use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;
use std::fmt::Debug;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Result as IoResult;
use std::path::Path;
use std::path::PathBuf;
use std::pin::Pin;
use std::task::Context as TaskContext;
use std::task::Poll;
use tokio_util::io::ReaderStream;

///
/// A lazy read stream over a file on disk.
///
/// Creating one records the path and nothing else. The file is not opened,
/// stat'ed, or read until a downstream consumer calls
/// [`FileStream::into_bytes_stream()`](crate::FileStream::into_bytes_stream()).
///
/// Pass it to [`FormData::set()`](crate::FormData::set()) to attach file
/// contents to a field. Without a declared size it is stored as a raw
/// [`Entry::FileStream`](crate::Entry::FileStream); with `FieldOptions::size`
/// it is wrapped into a [`File`](crate::File).
///
#[derive(Debug, Clone, PartialEq)]
pub struct FileStream {
    path: PathBuf,
}

impl FileStream {
    /// Creates a stream over the file at the given path.
    ///
    /// The path is not checked for existence. Errors surface when the
    /// stream is eventually consumed.
    pub fn open<P>(path: P) -> Self
    where
        P: AsRef<Path>,
    {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path this stream will read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens the file and returns its contents as a stream of byte chunks.
    ///
    /// This is the single point where the filesystem is touched.
    pub async fn into_bytes_stream(self) -> Result<ReaderStream<tokio::fs::File>> {
        let file = tokio::fs::File::open(&self.path)
            .await
            .with_context(|| format!("Failed to open file for streaming, at path {}", self.path.display()))?;

        Ok(ReaderStream::new(file))
    }
}

///
/// A generic readable stream of byte chunks, boxed for storage.
///
/// This is how arbitrary `Stream` implementations enter a
/// [`FormData`](crate::FormData). Build one with [`StreamSource::new()`],
/// or use [`FormValue::stream()`](crate::FormValue::stream()).
///
/// A stream is a single-consumption resource. The container never reads
/// from it; whatever walks the entries downstream consumes it, at most once.
///
pub struct StreamSource {
    inner: Pin<Box<dyn Stream<Item = IoResult<Bytes>> + Send>>,
}

impl StreamSource {
    pub fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = IoResult<Bytes>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for StreamSource {
    type Item = IoResult<Bytes>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut TaskContext<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl Debug for StreamSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("StreamSource").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod test_into_bytes_stream {
    use super::*;
    use futures_util::TryStreamExt;

    #[tokio::test]
    async fn it_should_stream_the_file_contents_unchanged() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
        let expected = tokio::fs::read(path).await.unwrap();

        let stream = FileStream::open(path);
        let mut bytes_stream = stream.into_bytes_stream().await.unwrap();

        let mut contents = Vec::new();
        while let Some(chunk) = bytes_stream.try_next().await.unwrap() {
            contents.extend_from_slice(&chunk);
        }

        assert_eq!(contents, expected);
    }

    #[tokio::test]
    async fn it_should_error_for_a_missing_file() {
        let stream = FileStream::open("/definitely/not/a/real/path.bin");

        let result = stream.into_bytes_stream().await;

        assert!(result.is_err());
    }
}

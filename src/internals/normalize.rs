use anyhow::Context;
use anyhow::Result;
use mime::Mime;

use crate::Entry;
use crate::FieldOptions;
use crate::File;
use crate::FileContent;
use crate::FormValue;

/// Filename used when wrapping a value that has none of its own.
const DEFAULT_FILE_NAME: &str = "blob";

/// Classifies a raw value into the entry that will be stored.
///
/// Pure and synchronous. Stream values are recorded untouched; nothing
/// here reads, buffers, or advances them. Errors (a malformed MIME type
/// in the options) surface before the caller mutates its store.
pub fn normalize(value: FormValue, options: FieldOptions) -> Result<Entry> {
    let mime_type = parse_mime_type(options.mime_type.as_deref())?;
    let file_name = options
        .file_name
        .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

    let entry = match value {
        // Already file-like. Its own metadata wins over the arguments.
        FormValue::File(file) => Entry::File(file),

        FormValue::Buffer(bytes) => {
            let size = bytes.len() as u64;
            Entry::File(File::new(file_name, size, mime_type, FileContent::Bytes(bytes)))
        }

        FormValue::Blob(blob) => {
            let size = blob.size();
            let (bytes, blob_mime_type) = blob.into_parts();
            let mime_type = blob_mime_type.or(mime_type);

            Entry::File(File::new(file_name, size, mime_type, FileContent::Bytes(bytes)))
        }

        // A declared size, zero included, turns a stream into a file.
        // Without one the stream is stored raw.
        FormValue::FileStream(stream) => match options.size {
            Some(size) => Entry::File(File::new(
                file_name,
                size,
                mime_type,
                FileContent::FileStream(stream),
            )),
            None => Entry::FileStream(stream),
        },

        FormValue::Stream(stream) => match options.size {
            Some(size) => Entry::File(File::new(
                file_name,
                size,
                mime_type,
                FileContent::Stream(stream),
            )),
            None => Entry::Stream(stream),
        },

        FormValue::Scalar(scalar) => Entry::Text(scalar.to_string()),
    };

    Ok(entry)
}

fn parse_mime_type(raw_mime_type: Option<&str>) -> Result<Option<Mime>> {
    raw_mime_type
        .map(|raw| {
            raw.parse::<Mime>()
                .with_context(|| format!("Failed to parse '{raw}' as a MIME type"))
        })
        .transpose()
}




#[cfg(test)]
mod test_normalize_files {
    use super::*;

    #[test]
    fn it_should_pass_files_through_unchanged() {
        let file = File::from_bytes("Some text", "file.txt").with_mime_type(mime::TEXT_PLAIN);

        let entry = normalize(file.into(), FieldOptions::new()).unwrap();

        let file = entry.as_file().unwrap();
        assert_eq!(file.name(), "file.txt");
        assert_eq!(file.size(), 9);
        assert_eq!(file.mime_type(), Some(&mime::TEXT_PLAIN));
    }

    #[test]
    fn it_should_not_override_file_metadata_with_arguments() {
        let file = File::from_bytes("Some text", "file.txt");
        let options = FieldOptions::new().file_name("other.txt").size(1000);

        let entry = normalize(file.into(), options).unwrap();

        let file = entry.as_file().unwrap();
        assert_eq!(file.name(), "file.txt");
        assert_eq!(file.size(), 9);
    }
}

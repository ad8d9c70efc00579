use bytes::Bytes;
use futures_util::Stream;
use serde_json::Value;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fmt::Result as FmtResult;
use std::io::Result as IoResult;

use crate::Blob;
use crate::File;
use crate::FileStream;
use crate::StreamSource;

///
/// Everything that can be given to [`FormData::set()`](crate::FormData::set())
/// or [`FormData::append()`](crate::FormData::append()) as a field value.
///
/// This is a closed set. Scalars become text entries through string
/// coercion; buffers and blobs are wrapped into files; files pass through;
/// streams pass through raw unless a size is declared for them.
///
/// `From` impls cover the common cases, so call sites can pass strings,
/// numbers, booleans, byte slices, and `serde_json::Value`s directly.
///
#[derive(Debug)]
pub enum FormValue {
    Scalar(Scalar),
    Buffer(Bytes),
    Blob(Blob),
    File(File),
    FileStream(FileStream),
    Stream(StreamSource),
}

impl FormValue {
    /// Wraps an arbitrary byte stream as a field value.
    ///
    /// ```rust
    /// use bytes::Bytes;
    /// use form_data::FormValue;
    /// use futures_util::stream;
    ///
    /// let chunks = stream::iter([Ok::<_, std::io::Error>(Bytes::from("Some text"))]);
    /// let value = FormValue::stream(chunks);
    /// ```
    pub fn stream<S>(stream: S) -> Self
    where
        S: Stream<Item = IoResult<Bytes>> + Send + 'static,
    {
        Self::Stream(StreamSource::new(stream))
    }
}

///
/// A plain scalar value, coerced to its string form when stored.
///
/// The coercion rules match what a browser form would produce:
///
/// | Scalar | String form |
/// |---|---|
/// | `Null` | `"null"` |
/// | `Undefined` | `"undefined"` |
/// | `Bool(true)` | `"true"` |
/// | `Int(0)` | `"0"` |
/// | `Array([23, 19])` | `"23,19"` |
/// | `Object` | `"[object Object]"` |
///
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Undefined,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Coerces to the comma-joined string forms of its elements.
    Array(Vec<Scalar>),
    /// Any structured value without a meaningful string form.
    Object,
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => write!(f, "null"),
            Self::Undefined => write!(f, "undefined"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
            Self::Array(items) => {
                let mut is_joining = false;
                for item in items {
                    if is_joining {
                        write!(f, ",")?;
                    }

                    write!(f, "{item}")?;
                    is_joining = true;
                }

                Ok(())
            }
            Self::Object => write!(f, "[object Object]"),
        }
    }
}

impl From<Scalar> for FormValue {
    fn from(scalar: Scalar) -> Self {
        Self::Scalar(scalar)
    }
}

impl From<&str> for FormValue {
    fn from(text: &str) -> Self {
        Self::Scalar(Scalar::Text(text.to_string()))
    }
}

impl From<String> for FormValue {
    fn from(text: String) -> Self {
        Self::Scalar(Scalar::Text(text))
    }
}

impl From<bool> for FormValue {
    fn from(value: bool) -> Self {
        Self::Scalar(Scalar::Bool(value))
    }
}

impl From<i32> for FormValue {
    fn from(value: i32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<i64> for FormValue {
    fn from(value: i64) -> Self {
        Self::Scalar(Scalar::Int(value))
    }
}

impl From<u32> for FormValue {
    fn from(value: u32) -> Self {
        Self::Scalar(Scalar::Int(value.into()))
    }
}

impl From<f64> for FormValue {
    fn from(value: f64) -> Self {
        Self::Scalar(Scalar::Float(value))
    }
}

/// The unit value stands in for an `undefined` argument.
impl From<()> for FormValue {
    fn from(_: ()) -> Self {
        Self::Scalar(Scalar::Undefined)
    }
}

/// `None` stands in for an `undefined` argument.
impl<T> From<Option<T>> for FormValue
where
    T: Into<FormValue>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Self::Scalar(Scalar::Undefined),
        }
    }
}

impl From<Bytes> for FormValue {
    fn from(bytes: Bytes) -> Self {
        Self::Buffer(bytes)
    }
}

impl From<Vec<u8>> for FormValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Buffer(bytes.into())
    }
}

impl From<&[u8]> for FormValue {
    fn from(bytes: &[u8]) -> Self {
        Self::Buffer(Bytes::copy_from_slice(bytes))
    }
}

impl From<Blob> for FormValue {
    fn from(blob: Blob) -> Self {
        Self::Blob(blob)
    }
}

impl From<File> for FormValue {
    fn from(file: File) -> Self {
        Self::File(file)
    }
}

impl From<FileStream> for FormValue {
    fn from(stream: FileStream) -> Self {
        Self::FileStream(stream)
    }
}

impl From<StreamSource> for FormValue {
    fn from(stream: StreamSource) -> Self {
        Self::Stream(stream)
    }
}

impl From<Value> for Scalar {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(inner) => Self::Bool(inner),
            Value::Number(number) => match number.as_i64() {
                Some(int) => Self::Int(int),
                None => Self::Float(number.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(text) => Self::Text(text),
            Value::Array(items) => Self::Array(items.into_iter().map(Scalar::from).collect()),
            Value::Object(_) => Self::Object,
        }
    }
}

impl From<Value> for FormValue {
    fn from(value: Value) -> Self {
        Self::Scalar(value.into())
    }
}

#[cfg(test)]
mod test_scalar_display {
    use super::*;

    #[test]
    fn it_should_coerce_null() {
        assert_eq!(Scalar::Null.to_string(), "null");
    }

    #[test]
    fn it_should_coerce_undefined() {
        assert_eq!(Scalar::Undefined.to_string(), "undefined");
    }

    #[test]
    fn it_should_coerce_booleans() {
        assert_eq!(Scalar::Bool(true).to_string(), "true");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
    }

    #[test]
    fn it_should_coerce_numbers_to_decimal_form() {
        assert_eq!(Scalar::Int(0).to_string(), "0");
        assert_eq!(Scalar::Int(-42).to_string(), "-42");
        assert_eq!(Scalar::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn it_should_join_arrays_with_commas() {
        let array = Scalar::Array(vec![Scalar::Int(23), Scalar::Int(19)]);

        assert_eq!(array.to_string(), "23,19");
    }

    #[test]
    fn it_should_join_arrays_using_element_string_forms() {
        let array = Scalar::Array(vec![
            Scalar::Text("a".to_string()),
            Scalar::Null,
            Scalar::Object,
        ]);

        assert_eq!(array.to_string(), "a,null,[object Object]");
    }

    #[test]
    fn it_should_coerce_objects_to_the_placeholder() {
        assert_eq!(Scalar::Object.to_string(), "[object Object]");
    }
}

#[cfg(test)]
mod test_from_json_value {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_should_map_null() {
        assert_eq!(Scalar::from(json!(null)), Scalar::Null);
    }

    #[test]
    fn it_should_map_numbers() {
        assert_eq!(Scalar::from(json!(0)), Scalar::Int(0));
        assert_eq!(Scalar::from(json!(1.5)), Scalar::Float(1.5));
    }

    #[test]
    fn it_should_map_arrays_recursively() {
        let scalar = Scalar::from(json!([23, 19]));

        assert_eq!(scalar.to_string(), "23,19");
    }

    #[test]
    fn it_should_map_objects_to_the_placeholder() {
        let scalar = Scalar::from(json!({"key": "value"}));

        assert_eq!(scalar.to_string(), "[object Object]");
    }
}

//!
//! Form Data is a container for assembling multipart form bodies,
//! equivalent to a browser's native `FormData` object:
//!
//!  * You create a [`FormData`] container,
//!  * fill it with [`FormData::set()`] and [`FormData::append()`],
//!  * then read it back with [`FormData::get()`], [`FormData::get_all()`],
//!    or by iterating [`FormData::entries()`].
//!
//! Fields keep their insertion order and may hold multiple values per
//! name. Plain scalars are coerced to strings; byte buffers, blobs,
//! and streams become binary attachments.
//!
//! ## Getting Started
//!
//! Text fields take strings, numbers, and booleans directly:
//!
//! ```rust
//! use form_data::FormData;
//!
//! let mut form = FormData::new();
//!
//! form.set("name", "John Doe")?;
//! form.set("age", 23)?;
//!
//! assert_eq!(form.get("name").unwrap().as_text(), Some("John Doe"));
//! assert_eq!(form.get("age").unwrap().as_text(), Some("23"));
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Attaching files
//!
//! Byte buffers and [`Blob`]s are wrapped into [`File`]s. Already-built
//! files pass through unchanged:
//!
//! ```rust
//! use form_data::Blob;
//! use form_data::FormData;
//!
//! let mut form = FormData::new();
//!
//! let readme = Blob::new("# My Project").with_mime_type(mime::TEXT_PLAIN);
//! form.set_with("readme", readme, "README.md")?;
//!
//! let file = form.get("readme").unwrap().as_file().unwrap();
//! assert_eq!(file.name(), "README.md");
//! assert_eq!(file.size(), 12);
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Streams
//!
//! A [`FileStream`] or a generic byte stream is stored raw, untouched by
//! the container. Declaring a size through [`FieldOptions`] wraps it into
//! a [`File`] instead, for consumers that must know the content length up
//! front:
//!
//! ```rust
//! use form_data::FieldOptions;
//! use form_data::FileStream;
//! use form_data::FormData;
//!
//! let mut form = FormData::new();
//!
//! form.set("raw", FileStream::open("Cargo.toml"))?;
//! form.set_with(
//!     "sized",
//!     FileStream::open("Cargo.toml"),
//!     FieldOptions::new().file_name("Cargo.toml").size(1024),
//! )?;
//!
//! assert!(form.get("raw").unwrap().as_file_stream().is_some());
//! assert!(form.get("sized").unwrap().as_file().is_some());
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! Streams are single-consumption. The container records a reference and
//! the declared metadata only; reading belongs to whatever serialises the
//! entries downstream, and happens at most once per stream.
//!

#![forbid(unsafe_code)]

pub(crate) mod internals;

mod blob;
pub use self::blob::*;

mod entry;
pub use self::entry::*;

mod field_options;
pub use self::field_options::*;

mod file;
pub use self::file::*;

mod form_data;
pub use self::form_data::*;

mod stream;
pub use self::stream::*;

mod value;
pub use self::value::*;

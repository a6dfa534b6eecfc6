// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

//! # stilzip
//!
//! An in-memory ZIP archive builder for stored (uncompressed) entries.
//!
//! The whole archive is produced as one exact-size `Vec<u8>`: no file system
//! access, no streaming, no compression. Entry content is checksummed with a
//! slicing-by-8 CRC-32 engine before the headers are laid out.
//!
//! ## Example
//! ```
//! use stilzip::{create_zip, ZipEntry};
//!
//! let entries = vec![
//!     ZipEntry::new(String::from("foo.txt"), "This is an example file."),
//!     ZipEntry::new(String::from("bar.bin"), vec![0u8, 1, 2, 3]),
//! ];
//!
//! let archive = create_zip(&entries).unwrap();
//! ```

pub mod crc32;
pub mod error;

pub(crate) mod entry;
pub(crate) mod spec;
pub(crate) mod write;


pub use crate::entry::builder::ZipEntryBuilder;
pub use crate::entry::ZipEntry;
pub use crate::spec::date::{ZipDateTime, ZipDateTimeBuilder};
pub use crate::write::create_zip;

// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

pub mod builder;

use chrono::{DateTime, Utc};

use crate::entry::builder::ZipEntryBuilder;

/// Stores the name, content, and optional timestamp of one archive entry.
///
/// # Builder pattern
/// Each [`ZipEntry`] is immutable once constructed. To rework an existing
/// entry, the [`ZipEntryBuilder`] builder must be used. Non-allocating
/// conversions between the two structures are available via the [`From`]
/// implementations.
#[derive(Debug, Clone)]
pub struct ZipEntry {
    pub(crate) filename: String,
    pub(crate) content: Vec<u8>,
    pub(crate) last_modification_date: Option<DateTime<Utc>>,
}

impl From<ZipEntryBuilder> for ZipEntry {
    fn from(builder: ZipEntryBuilder) -> Self {
        builder.0
    }
}

impl ZipEntry {
    /// Constructs a new entry from a file name and its content.
    ///
    /// Content may be given as raw bytes or as text; text is stored as its
    /// UTF-8 encoding. The entry's timestamp is left unset and defaults to
    /// the time of assembly.
    pub fn new(filename: String, content: impl Into<Vec<u8>>) -> Self {
        Self { filename, content: content.into(), last_modification_date: None }
    }

    /// Returns the entry's file name.
    ///
    /// Names are stored verbatim; no path separators are rewritten.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the entry's content.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the entry's last modification date, if one was set.
    pub fn last_modification_date(&self) -> Option<&DateTime<Utc>> {
        self.last_modification_date.as_ref()
    }
}

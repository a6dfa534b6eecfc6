// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

use chrono::{DateTime, Utc};

use crate::entry::ZipEntry;

/// A builder for [`ZipEntry`].
pub struct ZipEntryBuilder(pub(crate) ZipEntry);

impl From<ZipEntry> for ZipEntryBuilder {
    fn from(entry: ZipEntry) -> Self {
        Self(entry)
    }
}

impl ZipEntryBuilder {
    /// Constructs a new builder which defines the raw underlying data of a
    /// ZIP entry.
    ///
    /// A file name and content are needed to construct the builder as minimal
    /// parameters.
    pub fn new(filename: String, content: impl Into<Vec<u8>>) -> Self {
        Self(ZipEntry::new(filename, content))
    }

    /// Sets the entry's file name.
    pub fn filename(mut self, filename: String) -> Self {
        self.0.filename = filename;
        self
    }

    /// Sets the entry's content.
    pub fn content(mut self, content: impl Into<Vec<u8>>) -> Self {
        self.0.content = content.into();
        self
    }

    /// Sets the entry's last modification date.
    pub fn last_modification_date(mut self, date: DateTime<Utc>) -> Self {
        self.0.last_modification_date = Some(date);
        self
    }

    /// Consumes this builder and returns a final [`ZipEntry`].
    ///
    /// This is equivalent to:
    /// ```
    /// # use stilzip::{ZipEntry, ZipEntryBuilder};
    /// #
    /// # let builder = ZipEntryBuilder::new(String::from("foo.bar"), "data");
    /// let entry: ZipEntry = builder.into();
    /// ```
    pub fn build(self) -> ZipEntry {
        self.into()
    }
}

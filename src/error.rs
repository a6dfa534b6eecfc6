// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

//! A module which holds relevant error reporting structures/types.

use thiserror::Error;

/// A Result type alias over ZipError to minimise repetition.
pub type Result<V> = std::result::Result<V, ZipError>;

/// An enum of possible errors and their descriptions.
///
/// Every variant marks an input the non-ZIP64 format cannot represent. The
/// 16-bit and 32-bit header fields would otherwise wrap and produce a corrupt
/// archive.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ZipError {
    #[error("file name '{name}' is {length} bytes; the name length field holds at most 65535")]
    NameTooLong { name: String, length: usize },
    #[error("entry '{name}' is {size} bytes; entries over 4 GiB require ZIP64")]
    EntryTooLarge { name: String, size: u64 },
    #[error("{0} entries; archives with more than 65535 entries require ZIP64")]
    TooManyEntries(usize),
    #[error("archive layout spans {0} bytes; offsets over 4 GiB require ZIP64")]
    ArchiveTooLarge(u64),
}

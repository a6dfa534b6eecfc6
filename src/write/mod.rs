// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

//! A module which assembles stored ZIP archives in memory.
//!
//! # Example
//! ```
//! use stilzip::{create_zip, ZipEntry};
//! # use stilzip::error::ZipError;
//! #
//! # fn run() -> Result<(), ZipError> {
//! let entries = vec![
//!     ZipEntry::new(String::from("foo.txt"), "This is an example file."),
//! ];
//!
//! let archive = create_zip(&entries)?;
//! #   Ok(())
//! # }
//! ```

use chrono::Utc;
use tracing::trace;

use crate::crc32::crc32;
use crate::entry::ZipEntry;
use crate::error::{Result, ZipError};
use crate::spec::consts::{
    CDH_LENGTH, CDH_SIGNATURE, EOCDR_LENGTH, EOCDR_SIGNATURE, LFH_LENGTH, LFH_SIGNATURE,
    NON_ZIP64_MAX_FILE_NAME_LENGTH, NON_ZIP64_MAX_NUM_FILES, SIGNATURE_LENGTH,
    VERSION_MADE_BY_ASCII, VERSION_MADE_BY_UTF8, VERSION_NEEDED_TO_EXTRACT,
};
use crate::spec::date::ZipDateTime;
use crate::spec::header::{
    CentralDirectoryHeader, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader,
};

/// One entry resolved against the archive layout.
///
/// The UTF-8 flag and the version-made-by selection must agree, so the ASCII
/// test runs once here and both header constructors read it.
struct FileRecord<'a> {
    file_name: &'a [u8],
    is_ascii: bool,
    content: &'a [u8],
    size: u32,
    crc: u32,
    date: ZipDateTime,
    local_header_offset: u32,
}

/// Assembles a stored ZIP archive from `entries`, in order, into one
/// exact-size buffer.
///
/// Entries without an explicit timestamp share the current time, resolved
/// once per call. Inputs the non-ZIP64 format cannot represent are rejected
/// with an explicit error rather than letting header fields wrap.
#[tracing::instrument(skip_all, fields(entries = entries.len()))]
pub fn create_zip(entries: &[ZipEntry]) -> Result<Vec<u8>> {
    if entries.len() > NON_ZIP64_MAX_NUM_FILES as usize {
        return Err(ZipError::TooManyEntries(entries.len()));
    }

    let now = Utc::now();

    // First walk: checksum content and capture each local header offset
    // before the running counter absorbs that entry's own header + content.
    let mut records = Vec::with_capacity(entries.len());
    let mut file_part_size: u64 = 0;
    let mut central_part_size: u64 = 0;

    for entry in entries {
        let file_name = entry.filename().as_bytes();
        if file_name.len() > NON_ZIP64_MAX_FILE_NAME_LENGTH {
            return Err(ZipError::NameTooLong {
                name: entry.filename().to_string(),
                length: file_name.len(),
            });
        }

        let size = u32::try_from(entry.content().len()).map_err(|_| ZipError::EntryTooLarge {
            name: entry.filename().to_string(),
            size: entry.content().len() as u64,
        })?;

        let local_header_offset =
            u32::try_from(file_part_size).map_err(|_| ZipError::ArchiveTooLarge(file_part_size))?;

        file_part_size += (SIGNATURE_LENGTH + LFH_LENGTH + file_name.len()) as u64 + size as u64;
        central_part_size += (SIGNATURE_LENGTH + CDH_LENGTH + file_name.len()) as u64;

        let date = match entry.last_modification_date() {
            Some(date) => ZipDateTime::from(date),
            None => ZipDateTime::from(&now),
        };

        records.push(FileRecord {
            file_name,
            is_ascii: entry.filename().is_ascii(),
            content: entry.content(),
            size,
            crc: crc32(entry.content()),
            date,
            local_header_offset,
        });
    }

    let cent_dir_offset =
        u32::try_from(file_part_size).map_err(|_| ZipError::ArchiveTooLarge(file_part_size))?;
    let size_cent_dir = u32::try_from(central_part_size)
        .map_err(|_| ZipError::ArchiveTooLarge(file_part_size + central_part_size))?;

    let end_record = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: records.len() as u16,
        num_of_entries: records.len() as u16,
        size_cent_dir,
        cent_dir_offset,
        file_comm_length: 0,
    };

    let total_size =
        file_part_size + central_part_size + (SIGNATURE_LENGTH + EOCDR_LENGTH) as u64;
    trace!(file_part_size, central_part_size, total_size, "resolved archive layout");

    // Headers embed every size and offset, so the final length is known here
    // and the output is written in one allocation.
    let capacity =
        usize::try_from(total_size).map_err(|_| ZipError::ArchiveTooLarge(total_size))?;
    let mut archive = Vec::with_capacity(capacity);

    for record in &records {
        archive.extend_from_slice(&LFH_SIGNATURE.to_le_bytes());
        archive.extend_from_slice(&local_file_header(record).as_slice());
        archive.extend_from_slice(record.file_name);
        archive.extend_from_slice(record.content);
    }

    for record in &records {
        archive.extend_from_slice(&CDH_SIGNATURE.to_le_bytes());
        archive.extend_from_slice(&central_directory_header(record).as_slice());
        archive.extend_from_slice(record.file_name);
    }

    archive.extend_from_slice(&EOCDR_SIGNATURE.to_le_bytes());
    archive.extend_from_slice(&end_record.as_slice());

    debug_assert_eq!(archive.len() as u64, total_size);
    Ok(archive)
}

fn local_file_header(record: &FileRecord<'_>) -> LocalFileHeader {
    LocalFileHeader {
        version: VERSION_NEEDED_TO_EXTRACT,
        flags: GeneralPurposeFlag { filename_unicode: !record.is_ascii },
        compression: 0,
        mod_time: record.date.time(),
        mod_date: record.date.date(),
        crc: record.crc,
        compressed_size: record.size,
        uncompressed_size: record.size,
        file_name_length: record.file_name.len() as u16,
        extra_field_length: 0,
    }
}

fn central_directory_header(record: &FileRecord<'_>) -> CentralDirectoryHeader {
    let v_made_by = match record.is_ascii {
        true => VERSION_MADE_BY_ASCII,
        false => VERSION_MADE_BY_UTF8,
    };

    CentralDirectoryHeader {
        v_made_by,
        v_needed: VERSION_NEEDED_TO_EXTRACT,
        flags: GeneralPurposeFlag { filename_unicode: !record.is_ascii },
        compression: 0,
        mod_time: record.date.time(),
        mod_date: record.date.date(),
        crc: record.crc,
        compressed_size: record.size,
        uncompressed_size: record.size,
        file_name_length: record.file_name.len() as u16,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: record.local_header_offset,
    }
}

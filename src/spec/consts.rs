// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

pub const SIGNATURE_LENGTH: usize = 4;

// Local file header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.7)
pub const LFH_SIGNATURE: u32 = 0x4034b50;
pub const LFH_LENGTH: usize = 26;

// Central directory header constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.12)
pub const CDH_SIGNATURE: u32 = 0x2014b50;
pub const CDH_LENGTH: usize = 42;

// End of central directory record constants
//
// https://pkware.cachefly.net/webdocs/casestudies/APPNOTE.TXT (4.3.16)
pub const EOCDR_SIGNATURE: u32 = 0x6054b50;
pub const EOCDR_LENGTH: usize = 18;

/// NTFS host system, specification version 1.0. The minimum for stored
/// entries with ASCII names.
pub const VERSION_MADE_BY_ASCII: u16 = 0x0A0A;

/// NTFS host system, specification version 6.3, the revision which added
/// UTF-8 file name support.
pub const VERSION_MADE_BY_UTF8: u16 = 0x0A3F;

/// Specification version 1.0; stored entries need nothing newer.
pub const VERSION_NEEDED_TO_EXTRACT: u16 = 0x0A0A;

/// Bit 11 of the general purpose flags marks the file name as UTF-8.
pub const UTF8_FLAG: u16 = 0x800;

// Representable bounds without ZIP64 extensions.
pub const NON_ZIP64_MAX_FILE_NAME_LENGTH: usize = u16::MAX as usize;
pub const NON_ZIP64_MAX_NUM_FILES: u16 = u16::MAX;

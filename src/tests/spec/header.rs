// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

use crate::spec::header::{
    CentralDirectoryHeader, EndOfCentralDirectoryHeader, GeneralPurposeFlag, LocalFileHeader,
};

#[test]
fn general_purpose_flag_sets_bit_eleven() {
    assert_eq!(GeneralPurposeFlag { filename_unicode: false }.as_slice(), [0x00, 0x00]);
    assert_eq!(GeneralPurposeFlag { filename_unicode: true }.as_slice(), [0x00, 0x08]);
}

#[test]
fn local_file_header_layout() {
    let header = LocalFileHeader {
        version: 0x0A0A,
        flags: GeneralPurposeFlag { filename_unicode: false },
        compression: 0,
        mod_time: 0x8761,
        mod_date: 0x5757,
        crc: 0xDEAD_BEEF,
        compressed_size: 0x0102_0304,
        uncompressed_size: 0x0102_0304,
        file_name_length: 5,
        extra_field_length: 0,
    };

    let bytes = header.as_slice();
    assert_eq!(bytes.len(), 26);
    assert_eq!(&bytes[0..2], &[0x0A, 0x0A]);
    assert_eq!(&bytes[2..4], &[0x00, 0x00]);
    assert_eq!(&bytes[4..6], &[0x00, 0x00]);
    assert_eq!(&bytes[6..8], &[0x61, 0x87]);
    assert_eq!(&bytes[8..10], &[0x57, 0x57]);
    assert_eq!(&bytes[10..14], &[0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(&bytes[14..18], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[18..22], &[0x04, 0x03, 0x02, 0x01]);
    assert_eq!(&bytes[22..24], &[0x05, 0x00]);
    assert_eq!(&bytes[24..26], &[0x00, 0x00]);
}

#[test]
fn central_directory_header_layout() {
    let header = CentralDirectoryHeader {
        v_made_by: 0x0A3F,
        v_needed: 0x0A0A,
        flags: GeneralPurposeFlag { filename_unicode: true },
        compression: 0,
        mod_time: 0x8761,
        mod_date: 0x5757,
        crc: 0xDEAD_BEEF,
        compressed_size: 2,
        uncompressed_size: 2,
        file_name_length: 10,
        extra_field_length: 0,
        file_comment_length: 0,
        disk_start: 0,
        inter_attr: 0,
        exter_attr: 0,
        lh_offset: 0x0000_1234,
    };

    let bytes = header.as_slice();
    assert_eq!(bytes.len(), 42);
    assert_eq!(&bytes[0..2], &[0x3F, 0x0A]);
    assert_eq!(&bytes[2..4], &[0x0A, 0x0A]);
    assert_eq!(&bytes[4..6], &[0x00, 0x08]);
    assert_eq!(&bytes[12..16], &[0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(&bytes[24..26], &[0x0A, 0x00]);
    assert_eq!(&bytes[38..42], &[0x34, 0x12, 0x00, 0x00]);
}

#[test]
fn end_of_central_directory_layout() {
    let header = EndOfCentralDirectoryHeader {
        disk_num: 0,
        start_cent_dir_disk: 0,
        num_of_entries_disk: 3,
        num_of_entries: 3,
        size_cent_dir: 0x99,
        cent_dir_offset: 0x0101,
        file_comm_length: 0,
    };

    let bytes = header.as_slice();
    assert_eq!(bytes.len(), 18);
    assert_eq!(&bytes[4..6], &[0x03, 0x00]);
    assert_eq!(&bytes[6..8], &[0x03, 0x00]);
    assert_eq!(&bytes[8..12], &[0x99, 0x00, 0x00, 0x00]);
    assert_eq!(&bytes[12..16], &[0x01, 0x01, 0x00, 0x00]);
    assert_eq!(&bytes[16..18], &[0x00, 0x00]);
}

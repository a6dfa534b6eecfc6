// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

use crate::crc32::{crc32, crc32_continue, Crc32};

#[test]
fn empty_input() {
    assert_eq!(crc32(b""), 0);
}

#[test]
fn known_vectors() {
    assert_eq!(crc32(b"The quick brown fox jumps over the lazy dog"), 0x414FA339);
    assert_eq!(crc32(b"The quick brown fox jumped over the lazy dog"), 0xA4D8F35E);
    assert_eq!(crc32(b"123456789"), 0xCBF43926);
}

// Deterministic filler so failures reproduce.
fn filler(len: usize) -> Vec<u8> {
    let mut state: u32 = 0x2545_F491;
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(1664525).wrapping_add(1013904223);
            (state >> 24) as u8
        })
        .collect()
}

#[test]
fn matches_crc32fast_for_every_stride_residue() {
    // Lengths 0..=64 cover every remainder of the 8-byte main loop.
    for len in 0..=64 {
        let data = filler(len);

        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&data);

        assert_eq!(crc32(&data), hasher.finalize(), "length {len}");
    }
}

#[test]
fn continuation_equals_one_shot() {
    let data = filler(257);

    for split in [0, 1, 7, 8, 9, 128, 256, 257] {
        let (head, tail) = data.split_at(split);
        assert_eq!(crc32_continue(crc32(head), tail), crc32(&data), "split {split}");
    }
}

#[test]
fn incremental_hasher() {
    let data = filler(100);

    let mut hasher = Crc32::new();
    for chunk in data.chunks(13) {
        hasher.update(chunk);
    }

    assert_eq!(hasher.finalize(), crc32(&data));
}

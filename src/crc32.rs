// Copyright (c) 2026 the stilzip developers
// MIT License (see the LICENSE file in the repository root)

//! A slicing-by-8 implementation of the reflected CRC-32 used by ZIP entries.
//!
//! Every byte of every entry is checksummed once before header construction,
//! so the hot loop consumes eight input bytes per iteration through eight
//! 256-entry lookup tables (8 KiB total) instead of one byte against a single
//! table.

/// The reflected form of the CRC-32 generator polynomial.
const POLYNOMIAL: u32 = 0xEDB8_8320;

/// Eight 256-entry lookup tables, one per byte lane of the 8-byte stride.
///
/// Table 0 is the classic bit-by-bit table; table `k` extends table `k - 1`
/// by one further byte of lookahead. Built in a `const fn`, the set is
/// immutable shared data with no initialization to race on.
static CRC_TABLES: [[u32; 256]; 8] = build_tables();

const fn build_tables() -> [[u32; 256]; 8] {
    let mut tables = [[0u32; 256]; 8];

    let mut i = 0;
    while i < 256 {
        let mut crc = i as u32;
        let mut bit = 0;
        while bit < 8 {
            crc = (crc >> 1) ^ ((crc & 1) * POLYNOMIAL);
            bit += 1;
        }
        tables[0][i] = crc;
        i += 1;
    }

    let mut k = 1;
    while k < 8 {
        let mut i = 0;
        while i < 256 {
            let prev = tables[k - 1][i];
            tables[k][i] = (prev >> 8) ^ tables[0][(prev & 0xFF) as usize];
            i += 1;
        }
        k += 1;
    }

    tables
}

/// Computes the CRC-32 of `data` in one call.
pub fn crc32(data: &[u8]) -> u32 {
    crc32_continue(0, data)
}

/// Continues a CRC-32 computation from a previously returned value.
///
/// `crc32_continue(crc32(a), b)` equals the CRC-32 of `a` and `b`
/// concatenated.
pub fn crc32_continue(previous: u32, data: &[u8]) -> u32 {
    let mut crc = !previous;

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let one = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]) ^ crc;
        let two = u32::from_le_bytes([chunk[4], chunk[5], chunk[6], chunk[7]]);

        crc = CRC_TABLES[7][(one & 0xFF) as usize]
            ^ CRC_TABLES[6][((one >> 8) & 0xFF) as usize]
            ^ CRC_TABLES[5][((one >> 16) & 0xFF) as usize]
            ^ CRC_TABLES[4][(one >> 24) as usize]
            ^ CRC_TABLES[3][(two & 0xFF) as usize]
            ^ CRC_TABLES[2][((two >> 8) & 0xFF) as usize]
            ^ CRC_TABLES[1][((two >> 16) & 0xFF) as usize]
            ^ CRC_TABLES[0][(two >> 24) as usize];
    }

    for &byte in chunks.remainder() {
        crc = (crc >> 8) ^ CRC_TABLES[0][((crc & 0xFF) ^ byte as u32) as usize];
    }

    !crc
}

/// An incremental CRC-32 hasher over the same table set.
#[derive(Debug, Default, Clone, Copy)]
pub struct Crc32 {
    crc: u32,
}

impl Crc32 {
    /// Constructs a new hasher with an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds `data` into the hasher.
    pub fn update(&mut self, data: &[u8]) {
        self.crc = crc32_continue(self.crc, data);
    }

    /// Consumes the hasher and returns the final checksum.
    pub fn finalize(self) -> u32 {
        self.crc
    }
}

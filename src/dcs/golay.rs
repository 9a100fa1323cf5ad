//! Golay(23,12) parity code for DCS codewords
//!
//! A DCS codeword is 23 bits: 12 data bits (low) and 11 parity bits (high).
//! Encoding is linear over XOR: each set data bit XORs one fixed
//! generator-matrix row into the parity accumulator. The code is cyclic,
//! which is what makes DCS alias resolution by rotation possible.

/// Generator-matrix rows; row `i` is XORed into the parity when data bit
/// `i` is set
const GENERATOR_ROWS: [u32; 12] = [
    0x475, 0x49F, 0x54B, 0x6E3, 0x1B3, 0x366, 0x6CC, 0x1ED, 0x3DA, 0x7B4, 0x31D, 0x63A,
];

/// Mask covering a full 23-bit codeword
pub const CODEWORD_MASK: u32 = 0x7F_FFFF;

/// Mask covering the 12 data bits
pub const DATA_MASK: u32 = 0xFFF;

/// Encode 12 data bits into a 23-bit codeword (11 parity bits on top)
pub fn encode(data: u32) -> u32 {
    let data = data & DATA_MASK;
    let mut p = 0u32;
    for (bit, &row) in GENERATOR_ROWS.iter().enumerate() {
        if data & (1 << bit) != 0 {
            p ^= row;
        }
    }
    (p << 12) | data
}

/// Check the 11 parity bits of a 23-bit codeword
pub fn valid(word: u32) -> bool {
    let word = word & CODEWORD_MASK;
    encode(word) == word
}

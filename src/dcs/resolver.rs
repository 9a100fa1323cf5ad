//! DCS alias resolution
//!
//! The bit synchronizer returns a Golay-valid 23-bit word at an arbitrary
//! bit phase: the transmitter repeats the codeword continuously and the
//! receiver locks wherever it first sees 31 clean bits. Because the Golay
//! code is cyclic, every rotation is itself a valid codeword, so several
//! different received patterns describe the same transmitted code. The
//! resolver rotates the word until the 3-bit sync marker lands at bits
//! 9-11, then maps the low 9 bits through the mode-selected alias table to
//! a canonical code.

use crate::config::AliasMode;
use crate::tables::{LOS_ALTOS_MAP, STANDARD_MAP};
use tracing::debug;

/// Mask selecting the sync-marker bits (9-11) of a candidate position
pub const MARKER_MASK: u32 = 0xE00;

/// Expected marker value: the fixed pattern 0b100 at bits 9-11
pub const MARKER: u32 = 0x800;

/// Rotate a 23-bit word right by one bit, wrapping the low bit to the top
pub fn rotate_right(word: u32) -> u32 {
    (word >> 1) | ((word & 1) << 22)
}

/// Resolve a raw 23-bit DCS word to a canonical code.
///
/// Tries up to 23 rotations looking for the sync marker; the first hit
/// selects the 9-bit key into the alias map. Returns `None` when the word
/// is zero or no rotation carries the marker.
pub fn resolve(raw_word: u32, alias_mode: AliasMode) -> Option<u16> {
    if raw_word == 0 {
        debug!("DCS none");
        return None;
    }

    let mut word = raw_word & super::golay::CODEWORD_MASK;
    for _ in 0..23 {
        if word & MARKER_MASK == MARKER {
            let key = (word & 0x1FF) as usize;
            let code = match alias_mode {
                AliasMode::LosAltos => LOS_ALTOS_MAP[key],
                AliasMode::FullDecode => STANDARD_MAP[key],
            };
            debug!("DCS {:03o}", code);
            return Some(code);
        }
        word = rotate_right(word);
    }

    debug!("DCS none");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcs::golay;

    #[test]
    fn test_rotate_right_wraps_low_bit() {
        assert_eq!(rotate_right(1), 1 << 22);
        assert_eq!(rotate_right(0b10), 1);
        assert_eq!(rotate_right(golay::CODEWORD_MASK), golay::CODEWORD_MASK);
    }

    #[test]
    fn test_resolve_aligned_word() {
        // Data with the marker already at bits 9-11 resolves on the first try
        let word = golay::encode(0o4023);
        let code = resolve(word, AliasMode::LosAltos).unwrap();
        assert_eq!(code, LOS_ALTOS_MAP[0o023]);
    }

    #[test]
    fn test_resolve_is_rotation_invariant() {
        let word = golay::encode(0o4023);
        let expected = resolve(word, AliasMode::LosAltos).unwrap();
        let mut rotated = word;
        for _ in 0..23 {
            rotated = rotate_right(rotated);
            assert_eq!(resolve(rotated, AliasMode::LosAltos), Some(expected));
        }
    }

    #[test]
    fn test_resolve_rejects_zero_and_markerless() {
        assert_eq!(resolve(0, AliasMode::LosAltos), None);
        // All-ones never shows the 100 marker in any rotation
        assert_eq!(resolve(golay::CODEWORD_MASK, AliasMode::LosAltos), None);
    }
}

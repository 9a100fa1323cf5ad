//! DCS alias maps
//!
//! Two parallel 512-entry tables indexed by the 9-bit pattern found under
//! the sync marker. The standard map reports the pattern exactly as
//! received (full-decode mode). The Los Altos map collapses rotation
//! aliases: because the Golay code is cyclic, several marker-bearing
//! patterns can describe one transmission, and this map returns one
//! canonical code (the smallest marker-bearing pattern in the codeword's
//! rotation class) for all of them. Codes are conventionally printed in
//! octal.

use crate::dcs::golay;
use crate::dcs::resolver::{rotate_right, MARKER, MARKER_MASK};
use lazy_static::lazy_static;

/// Number of 9-bit receive patterns
pub const MAP_SIZE: usize = 512;

lazy_static! {
    /// Full-decode map: the received pattern is the reported code
    pub static ref STANDARD_MAP: [u16; MAP_SIZE] = build_standard_map();

    /// Los Altos numbering: rotation aliases collapse to one canonical code
    pub static ref LOS_ALTOS_MAP: [u16; MAP_SIZE] = build_los_altos_map();
}

fn build_standard_map() -> [u16; MAP_SIZE] {
    let mut map = [0u16; MAP_SIZE];
    for (key, slot) in map.iter_mut().enumerate() {
        *slot = key as u16;
    }
    map
}

fn build_los_altos_map() -> [u16; MAP_SIZE] {
    let mut map = [0u16; MAP_SIZE];
    for (key, slot) in map.iter_mut().enumerate() {
        *slot = canonical_code(key as u16);
    }
    map
}

/// Smallest marker-bearing 9-bit pattern in the rotation class of the
/// codeword carrying `key`. The key's own position carries the marker by
/// construction, so the result is always <= key.
fn canonical_code(key: u16) -> u16 {
    let mut word = golay::encode(0x800 | key as u32);
    let mut best = key;
    for _ in 0..23 {
        if word & MARKER_MASK == MARKER {
            best = best.min((word & 0x1FF) as u16);
        }
        word = rotate_right(word);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_map_is_identity() {
        for key in 0..MAP_SIZE {
            assert_eq!(STANDARD_MAP[key] as usize, key);
        }
    }

    #[test]
    fn test_los_altos_map_never_exceeds_key() {
        for key in 0..MAP_SIZE {
            assert!(LOS_ALTOS_MAP[key] as usize <= key);
        }
    }

    #[test]
    fn test_los_altos_map_is_class_invariant() {
        // Every marker-bearing rotation of a codeword must map to the same
        // canonical code as the codeword's own key
        for key in 0..MAP_SIZE as u16 {
            let canonical = LOS_ALTOS_MAP[key as usize];
            let mut word = golay::encode(0x800 | key as u32);
            for _ in 0..23 {
                if word & MARKER_MASK == MARKER {
                    let alias = (word & 0x1FF) as usize;
                    assert_eq!(LOS_ALTOS_MAP[alias], canonical);
                }
                word = rotate_right(word);
            }
        }
    }
}

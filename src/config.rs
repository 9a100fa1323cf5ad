//! Detector configuration and operator-visible state
//!
//! One explicit value threaded into every pipeline call; there are no
//! ambient globals. Operator commands (console-driven, owned by an
//! excluded collaborator) mutate it through the setters here; the pipeline
//! itself only touches the display bookkeeping counters, and only between
//! analyses, never mid-block.

/// Software version, major nibble . minor nibble (0x16 -> "1.6")
pub const SW_VERSION: u8 = 0x16;

/// Bit-invert mask applied to a recovered DCS word when inverted
/// transmission is selected
pub const INVERT_MASK: u32 = 0x7F_FFFF;

/// DCS alias numbering variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasMode {
    /// Collapse rotation aliases to one canonical code per class
    LosAltos,
    /// Report the received 9-bit pattern verbatim
    FullDecode,
}

/// Process-wide detector state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectorConfig {
    /// Emit every tone's name and score each block (diagnostic only)
    pub dump_scores: bool,
    /// 0 (normal) or INVERT_MASK (inverted DCS transmission)
    pub invert_mask: u32,
    /// Which alias map the resolver consults
    pub alias_mode: AliasMode,
    /// Display hold-off: cycles of dimmed display after a detection lapses
    pub display_timeout: u32,
    /// Idle-sweep animation phase (rendered modulo 6 by the display sink)
    pub sweep_phase: u32,
    /// Idle cycles since the timeout expired; the sweep advances every 3rd
    pub sweep_count: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            dump_scores: false,
            invert_mask: 0,
            alias_mode: AliasMode::LosAltos,
            display_timeout: 5,
            sweep_phase: 1,
            sweep_count: 0,
        }
    }
}

impl DetectorConfig {
    /// Toggle inverted-DCS handling; returns the new setting
    pub fn toggle_invert(&mut self) -> bool {
        self.invert_mask = if self.invert_mask == 0 { INVERT_MASK } else { 0 };
        self.invert_mask != 0
    }

    pub fn set_alias_mode(&mut self, mode: AliasMode) {
        self.alias_mode = mode;
    }

    pub fn set_dump_scores(&mut self, enabled: bool) {
        self.dump_scores = enabled;
    }
}

/// Human-readable version string, e.g. "1.6"
pub fn version_string() -> String {
    format!("{}.{}", SW_VERSION >> 4, SW_VERSION & 15)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DetectorConfig::default();
        assert_eq!(config.alias_mode, AliasMode::LosAltos);
        assert_eq!(config.invert_mask, 0);
        assert_eq!(config.display_timeout, 5);
        assert!(!config.dump_scores);
    }

    #[test]
    fn test_toggle_invert() {
        let mut config = DetectorConfig::default();
        assert!(config.toggle_invert());
        assert_eq!(config.invert_mask, INVERT_MASK);
        assert!(!config.toggle_invert());
        assert_eq!(config.invert_mask, 0);
    }

    #[test]
    fn test_version_string() {
        assert_eq!(version_string(), "1.6");
    }
}

//! CTCSS tone detection
//!
//! Two stages over one sample block:
//! - `scanner` - score a single candidate frequency by Goertzel-style
//!   sine/cosine correlation
//! - `classifier` - score the whole tone table and apply the adaptive
//!   threshold (strongest score must beat 50x the average of the rest)
//!
//! The dominant compute cost of a cycle lives here: O(N) per tone, 50
//! tones per block.

pub mod classifier;
pub mod scanner;

pub use classifier::classify;
pub use scanner::score;


pub mod block;
pub mod config;
pub mod dcs;
pub mod error;
pub mod pipeline;
pub mod simulation;
pub mod tables;
pub mod tone;
pub mod tracing_init;

pub use block::SampleBlock;
pub use config::{AliasMode, DetectorConfig};
pub use error::DetectError;
pub use pipeline::{run, DetectionResult};

use snafu::Snafu;

/// Errors raised at the engine boundary.
///
/// Detection outcomes are never errors: silence, noise, a failed parity
/// check or a missed sync marker all come back as `None` from the analysis
/// functions. The only fatal condition the engine defines is handing it a
/// block that violates the fixed-size acquisition contract.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum DetectError {
    /// A sample block did not contain exactly the contracted sample count
    #[snafu(display("sample block must contain exactly {expected} samples, got {actual}"))]
    BlockLength { expected: usize, actual: usize },
}

use thiserror::Error;

/// Input-validation failures. Nothing here is transient: malformed input is
/// rejected before any permutation runs, never truncated or zero-padded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("{argument} must be exactly {expected} bytes, got {actual}")]
    InvalidInputLength {
        argument: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{argument} length {actual} is not a whole number of {block_size}-byte blocks")]
    RaggedBuffer {
        argument: &'static str,
        block_size: usize,
        actual: usize,
    },
}

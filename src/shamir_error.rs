use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShamirError {
    #[error("invalid parameters: {0}")]
    InvalidParameters(&'static str),

    #[error("insufficient shares: {required} required, {supplied} supplied")]
    InsufficientShares { required: usize, supplied: usize },

    #[error("shares come from inconsistent splits")]
    InconsistentShares,

    #[error("duplicate share with x = {0}")]
    DuplicateShare(u64),

    #[error("malformed share: {0}")]
    MalformedShare(String),

    #[error("share encoding error: {0}")]
    Encoding(String),

    /// Internal: the zero element has no inverse.
    #[error("attempted to invert zero")]
    ZeroInverse,

    /// Internal: a block value does not fit in the field.
    #[error("block value is outside the field")]
    BlockOutOfRange,

    /// Internal: the number of blocks does not match the secret length.
    #[error("expected {expected} blocks, found {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl From<serde_json::Error> for ShamirError {
    fn from(err: serde_json::Error) -> Self {
        ShamirError::Encoding(err.to_string())
    }
}

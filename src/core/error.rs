use thiserror::Error;

/// Errors that can occur while assembling or generating a CFDI printout.
///
/// Content generation itself is total; the only runtime failure is the
/// amount-in-words collaborator, whose error is propagated unchanged.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CfdiError {
    /// The amount-in-words service rejected the request.
    #[error("amount in words failed: {0}")]
    AmountInWords(String),

    /// Builder encountered invalid or missing data.
    #[error("builder error: {0}")]
    Builder(String),

    /// The layout tree could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CfdiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

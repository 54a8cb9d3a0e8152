//! # Error Types

/// Errors from tokenmux operations.
#[derive(Debug, thiserror::Error)]
pub enum TokenmuxError {
    /// The model identifier matches no registry.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// A registry entry exists, but its payload is empty or unparseable.
    #[error("invalid model data for \"{model}\": {reason}")]
    InvalidModelData {
        /// The model (or scheme) whose data was rejected.
        model: String,

        /// The engine's complaint.
        reason: String,
    },

    /// The symbolic scheme tag is not known to the engine.
    #[error("unsupported encoding scheme: {0}")]
    UnsupportedScheme(String),

    /// The backend handle has no engine.
    #[error("tokenizer is not initialized")]
    UninitializedBackend,

    /// Token value out of range for the target type.
    #[error("token out of range: {0}")]
    TokenOutOfRange(u64),

    /// The engine rejected an encode call.
    #[error("encode failed: {0}")]
    Encode(String),

    /// The engine rejected a decode call.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The artifact cache could not produce a resource.
    #[error("failed to load resource {key}: {reason}")]
    ResourceLoad {
        /// The cache key of the resource.
        key: String,

        /// The loader's complaint.
        reason: String,
    },

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TokenmuxError {
    /// Build an [`TokenmuxError::InvalidModelData`].
    pub fn invalid_model_data(
        model: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidModelData {
            model: model.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type for tokenmux operations.
pub type TMResult<T> = core::result::Result<T, TokenmuxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            TokenmuxError::ModelNotFound("unknown-model-xyz".to_string()).to_string(),
            "model not found: unknown-model-xyz"
        );
        assert_eq!(
            TokenmuxError::invalid_model_data("Llama-3.2-1B", "empty payload").to_string(),
            "invalid model data for \"Llama-3.2-1B\": empty payload"
        );
        assert_eq!(
            TokenmuxError::UninitializedBackend.to_string(),
            "tokenizer is not initialized"
        );
    }

    #[test]
    fn test_io_conversion() {
        let err: TokenmuxError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, TokenmuxError::Io(_)));
    }
}

use thiserror::Error;

/// Classified failure raised anywhere inside a command handler.
///
/// Every variant maps to a stable snake_case kind string that ends up in the
/// `detail` field of the failure envelope, so controllers can branch on the
/// class of failure without parsing the human-readable message.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("missing required parameter '{0}'")]
    MissingParameter(String),

    #[error("parameter '{name}' must be {expected}")]
    TypeMismatch { name: String, expected: String },

    #[error("parameter '{name}' must have {expected} components, got {got}")]
    InvalidArity {
        name: String,
        expected: String,
        got: usize,
    },

    #[error("'{0}' is not a valid name: must start with a letter or underscore and contain only letters, digits, and underscores")]
    InvalidName(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} already exists; pass overwrite=true to replace it")]
    AlreadyExists(String),

    #[error("failed to create directory '{path}': {reason}")]
    DirectoryCreateFailed { path: String, reason: String },

    #[error("texture slot '{slot}' is not supported by shader '{shader}'")]
    UnsupportedSlot { slot: String, shader: String },

    #[error("unknown material template '{0}'")]
    UnknownTemplate(String),

    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    #[error("{0}")]
    Unknown(String),
}

impl BridgeError {
    /// Stable machine-readable kind, carried in `Failure.detail`.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::MissingParameter(_) => "missing_parameter",
            BridgeError::TypeMismatch { .. } => "type_mismatch",
            BridgeError::InvalidArity { .. } => "invalid_arity",
            BridgeError::InvalidName(_) => "invalid_name",
            BridgeError::NotFound(_) => "not_found",
            BridgeError::AlreadyExists(_) => "already_exists",
            BridgeError::DirectoryCreateFailed { .. } => "directory_create_failed",
            BridgeError::UnsupportedSlot { .. } => "unsupported_slot",
            BridgeError::UnknownTemplate(_) => "unknown_template",
            BridgeError::UnknownCommand(_) => "unknown_command",
            BridgeError::Unknown(_) => "unknown",
        }
    }

    pub fn type_mismatch(name: &str, expected: &str) -> Self {
        BridgeError::TypeMismatch {
            name: name.to_string(),
            expected: expected.to_string(),
        }
    }
}

impl From<std::io::Error> for BridgeError {
    fn from(err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            BridgeError::NotFound(format!("file ({err})"))
        } else {
            BridgeError::Unknown(format!("io error: {err}"))
        }
    }
}

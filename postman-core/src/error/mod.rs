use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to parse as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("unable to auto-detect definition format (neither valid JSON nor valid YAML)")]
    UnknownFormat,
}

/// Raised before any request is built; always names the offending parameter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{param} is required and cannot be empty")]
    Missing { param: String },
    #[error("{param} must be a plain resource id, got {value:?}")]
    InvalidId { param: String, value: String },
    #[error("{param} must be a uid of the form <ownerId>-<resourceId>, got {value:?}")]
    InvalidUid { param: String, value: String },
}

impl ValidationError {
    pub fn param(&self) -> &str {
        match self {
            ValidationError::Missing { param }
            | ValidationError::InvalidId { param, .. }
            | ValidationError::InvalidUid { param, .. } => param,
        }
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{Operation, ResourceKind};

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SynthesisError {
    #[error("unknown resource id: {0}")]
    UnknownResource(String),

    #[error("invalid operation on {kind}: {operation}")]
    UnsupportedOperation {
        operation: Operation,
        kind: ResourceKind,
    },

    #[error("no policy can be set on: {0}")]
    UnsupportedResourceType(String),

    #[error("duplicate resource id in registry: {0}")]
    DuplicateResource(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for SynthesisError {
    fn from(err: serde_json::Error) -> Self {
        SynthesisError::InvalidFormat(err.to_string())
    }
}

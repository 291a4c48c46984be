use std::{error::Error, fmt::Display};

use serde::{Deserialize, Serialize};

/// Error codes of the `didResolutionMetadata.error` property.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DidResolutionError {
    InvalidDid,
    NotFound,
    RepresentationNotSupported,
    MethodNotSupported,
    InternalError,
}

impl Display for DidResolutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DidResolutionError::InvalidDid => write!(f, "invalidDid"),
            DidResolutionError::NotFound => write!(f, "notFound"),
            DidResolutionError::RepresentationNotSupported => {
                write!(f, "representationNotSupported")
            }
            DidResolutionError::MethodNotSupported => write!(f, "methodNotSupported"),
            DidResolutionError::InternalError => write!(f, "internalError"),
        }
    }
}

impl Error for DidResolutionError {}

use did_doc::schema::did_doc::DidDocument;
use serde::{Deserialize, Serialize};

use super::{
    resolution_error::DidResolutionError, resolution_metadata::DidResolutionMetadata,
    resolution_output::DidResolutionOutput,
};
use crate::shared_types::did_document_metadata::DidDocumentMetadata;

/// The `{didDocument, didDocumentMetadata, didResolutionMetadata}` triple returned to
/// callers of a resolver, whether or not the resolution succeeded.
///
/// On failure `did_document` and `did_document_metadata` are `None` and serialize as
/// `null`; `did_resolution_metadata` then carries `error` and `message` instead of
/// `contentType`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionResult {
    pub did_document: Option<DidDocument>,
    pub did_document_metadata: Option<DidDocumentMetadata>,
    pub did_resolution_metadata: DidResolutionMetadata,
}

impl DidResolutionResult {
    pub fn error(error: DidResolutionError, message: impl Into<String>) -> Self {
        Self {
            did_document: None,
            did_document_metadata: None,
            did_resolution_metadata: DidResolutionMetadata::builder()
                .error(error)
                .message(message.into())
                .build(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::error(DidResolutionError::NotFound, message)
    }

    pub fn is_success(&self) -> bool {
        self.did_resolution_metadata.error.is_none()
    }
}

impl From<DidResolutionOutput> for DidResolutionResult {
    fn from(output: DidResolutionOutput) -> Self {
        let did_document_metadata = match output.did_document_metadata.is_empty() {
            true => None,
            false => Some(output.did_document_metadata),
        };
        Self {
            did_document: Some(output.did_document),
            did_document_metadata,
            did_resolution_metadata: output.did_resolution_metadata,
        }
    }
}

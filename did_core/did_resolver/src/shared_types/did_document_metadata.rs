use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Metadata about the resolved document itself, as opposed to the resolution process.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, TypedBuilder)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidDocumentMetadata {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    created: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    updated: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    deactivated: Option<bool>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    version_id: Option<String>,
}

impl DidDocumentMetadata {
    pub fn created(&self) -> Option<&str> {
        self.created.as_deref()
    }

    pub fn updated(&self) -> Option<&str> {
        self.updated.as_deref()
    }

    pub fn deactivated(&self) -> Option<bool> {
        self.deactivated
    }

    pub fn version_id(&self) -> Option<&str> {
        self.version_id.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

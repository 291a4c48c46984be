use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use super::resolution_error::DidResolutionError;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default, TypedBuilder)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionMetadata {
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<DidResolutionError>,
    /// Human readable cause, present alongside `error`.
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

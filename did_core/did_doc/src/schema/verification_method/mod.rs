mod public_key;
mod verification_method_kind;
mod verification_method_type;

use did_parser_nom::DidUrl;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;

pub use self::{
    public_key::PublicKeyField, verification_method_kind::VerificationMethodKind,
    verification_method_type::VerificationMethodType,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    id: DidUrl,
    #[serde(rename = "type")]
    verification_method_type: VerificationMethodType,
    controller: DidUrl,
    /// Key material and any further properties, kept as declared.
    #[serde(flatten)]
    #[builder(setter(into))]
    properties: Map<String, Value>,
}

impl VerificationMethod {
    pub fn id(&self) -> &DidUrl {
        &self.id
    }

    pub fn controller(&self) -> &DidUrl {
        &self.controller
    }

    pub fn verification_method_type(&self) -> &VerificationMethodType {
        &self.verification_method_type
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// The first key field among the properties in a known encoding, if any.
    pub fn public_key_field(&self) -> Option<PublicKeyField> {
        serde_json::from_value(Value::Object(self.properties.clone())).ok()
    }
}

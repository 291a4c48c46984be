use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The key material of a verification method in one of the common encodings, stored
/// in the method's properties under the name of its encoding.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PublicKeyField {
    #[serde(rename_all = "camelCase")]
    Multibase { public_key_multibase: String },
    #[serde(rename_all = "camelCase")]
    Base58 { public_key_base58: String },
    #[serde(rename_all = "camelCase")]
    Base64 { public_key_base64: String },
    #[serde(rename_all = "camelCase")]
    Hex { public_key_hex: String },
    #[serde(rename_all = "camelCase")]
    Pem { public_key_pem: String },
    #[serde(rename_all = "camelCase")]
    Jwk { public_key_jwk: Map<String, Value> },
}

impl PublicKeyField {
    /// The encoded key exactly as it appears in the document, `None` for JWKs.
    pub fn key_encoded(&self) -> Option<&str> {
        match self {
            PublicKeyField::Multibase {
                public_key_multibase,
            } => Some(public_key_multibase),
            PublicKeyField::Base58 { public_key_base58 } => Some(public_key_base58),
            PublicKeyField::Base64 { public_key_base64 } => Some(public_key_base64),
            PublicKeyField::Hex { public_key_hex } => Some(public_key_hex),
            PublicKeyField::Pem { public_key_pem } => Some(public_key_pem),
            PublicKeyField::Jwk { .. } => None,
        }
    }
}

impl From<PublicKeyField> for Map<String, Value> {
    fn from(public_key: PublicKeyField) -> Self {
        let (name, value) = match public_key {
            PublicKeyField::Multibase {
                public_key_multibase,
            } => ("publicKeyMultibase", Value::String(public_key_multibase)),
            PublicKeyField::Base58 { public_key_base58 } => {
                ("publicKeyBase58", Value::String(public_key_base58))
            }
            PublicKeyField::Base64 { public_key_base64 } => {
                ("publicKeyBase64", Value::String(public_key_base64))
            }
            PublicKeyField::Hex { public_key_hex } => ("publicKeyHex", Value::String(public_key_hex)),
            PublicKeyField::Pem { public_key_pem } => ("publicKeyPem", Value::String(public_key_pem)),
            PublicKeyField::Jwk { public_key_jwk } => ("publicKeyJwk", Value::Object(public_key_jwk)),
        };
        [(name.to_owned(), value)].into_iter().collect()
    }
}

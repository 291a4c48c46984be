use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum VerificationMethodType {
    /// https://w3id.org/security/suites/jws-2020/v1
    JsonWebKey2020,
    /// https://w3id.org/security/suites/secp256k1-2019/v1
    EcdsaSecp256k1VerificationKey2019,
    /// https://w3id.org/security/suites/ed25519-2018/v1
    Ed25519VerificationKey2018,
    /// https://w3id.org/security/suites/ed25519-2020/v1
    Ed25519VerificationKey2020,
    /// https://ns.did.ai/suites/x25519-2019/v1/
    X25519KeyAgreementKey2019,
    /// https://ns.did.ai/suites/x25519-2020/v1/
    X25519KeyAgreementKey2020,
    /// https://w3id.org/security/multikey/v1
    Multikey,
    /// Any type not known to this crate, kept verbatim.
    #[serde(untagged)]
    Other(String),
}

impl Display for VerificationMethodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VerificationMethodType::JsonWebKey2020 => write!(f, "JsonWebKey2020"),
            VerificationMethodType::EcdsaSecp256k1VerificationKey2019 => {
                write!(f, "EcdsaSecp256k1VerificationKey2019")
            }
            VerificationMethodType::Ed25519VerificationKey2018 => {
                write!(f, "Ed25519VerificationKey2018")
            }
            VerificationMethodType::Ed25519VerificationKey2020 => {
                write!(f, "Ed25519VerificationKey2020")
            }
            VerificationMethodType::X25519KeyAgreementKey2019 => {
                write!(f, "X25519KeyAgreementKey2019")
            }
            VerificationMethodType::X25519KeyAgreementKey2020 => {
                write!(f, "X25519KeyAgreementKey2020")
            }
            VerificationMethodType::Multikey => write!(f, "Multikey"),
            VerificationMethodType::Other(other) => write!(f, "{}", other),
        }
    }
}

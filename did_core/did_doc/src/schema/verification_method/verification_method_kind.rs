use did_parser_nom::DidUrl;
use serde::{Deserialize, Serialize};

use super::VerificationMethod;

/// A verification relationship entry: either the embedded method or a
/// reference to one listed under `verificationMethod`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum VerificationMethodKind {
    Resolved(VerificationMethod),
    Resolvable(DidUrl),
}

impl VerificationMethodKind {
    pub fn id(&self) -> &DidUrl {
        match self {
            VerificationMethodKind::Resolved(vm) => vm.id(),
            VerificationMethodKind::Resolvable(reference) => reference,
        }
    }
}

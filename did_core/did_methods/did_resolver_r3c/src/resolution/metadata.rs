use did_resolver::{
    did_doc::schema::verification_method::{VerificationMethod, VerificationMethodType},
    did_parser_nom::Did,
};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::transformer::OUTPUT_FRAGMENT;
use crate::{
    error::{DidR3cError, DidR3cResult},
    ledger::Transaction,
};

/// Purposes the transaction itself decides; metadata may not declare them.
pub const RESERVED_PURPOSES: [&str; 2] = ["controller", "capabilityInvocation"];

const VERIFICATION_METHODS_KEY: &str = "verificationMethods";

/// Properties of a declared fragment that are always replaced by synthesized values.
const SYNTHESIZED_PROPERTIES: [&str; 2] = ["id", "controller"];

/// A verification method as declared in transaction metadata, before it gets an id
/// and a controller.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct VerificationMethodFragment {
    #[serde(rename = "type")]
    pub verification_method_type: VerificationMethodType,
    /// Key material and anything else the ledger declared, copied into the method as-is.
    #[serde(flatten)]
    pub properties: Map<String, Value>,
}

/// Extracts the `verificationMethods` mapping of the transaction metadata, keeping the
/// order in which the ledger declared the purposes.
///
/// `metadata: null` and a missing or `null` mapping both yield no purposes. A missing
/// `metadata` member, or one of the wrong shape, makes the transaction invalid. So does a
/// fragment that is not an object with a string `type`.
pub fn check_transaction_metadata(
    tx: &Transaction,
) -> DidR3cResult<Vec<(String, VerificationMethodFragment)>> {
    let metadata = tx.metadata.as_ref().ok_or_else(|| {
        DidR3cError::InvalidTransaction("transaction carries no metadata member".into())
    })?;

    let methods = match metadata {
        Value::Null => return Ok(vec![]),
        Value::Object(metadata) => match metadata.get(VERIFICATION_METHODS_KEY) {
            None | Some(Value::Null) => return Ok(vec![]),
            Some(Value::Object(methods)) => methods,
            Some(_) => {
                return Err(DidR3cError::InvalidTransaction(format!(
                    "metadata member {VERIFICATION_METHODS_KEY} must be an object"
                )))
            }
        },
        _ => {
            return Err(DidR3cError::InvalidTransaction(
                "metadata must be an object or null".into(),
            ))
        }
    };

    if let Some(reserved) = methods
        .keys()
        .find(|purpose| RESERVED_PURPOSES.contains(&purpose.as_str()))
    {
        return Err(DidR3cError::ReservedPurpose(reserved.to_owned()));
    }

    methods
        .iter()
        .map(|(purpose, fragment)| -> DidR3cResult<_> {
            let fragment = VerificationMethodFragment::deserialize(fragment).map_err(|e| {
                DidR3cError::InvalidTransaction(format!(
                    "malformed verification method for purpose {purpose}: {e}"
                ))
            })?;
            Ok((purpose.to_owned(), fragment))
        })
        .collect()
}

/// Turns declared purposes into verification methods of `subject`, numbered
/// `#meta-0`, `#meta-1`, ... in declaration order and controlled by `#output-0`.
/// Declared `id` and `controller` properties are dropped in favour of those.
pub fn transform_metadata_methods(
    methods: &[(String, VerificationMethodFragment)],
    subject: &Did,
) -> DidR3cResult<Vec<(String, VerificationMethod)>> {
    let controller = subject.with_fragment(OUTPUT_FRAGMENT)?;
    methods
        .iter()
        .enumerate()
        .map(|(index, (purpose, fragment))| -> DidR3cResult<_> {
            let mut properties = fragment.properties.clone();
            for synthesized in SYNTHESIZED_PROPERTIES {
                properties.remove(synthesized);
            }
            let method = VerificationMethod::builder()
                .id(subject.with_fragment(&format!("meta-{index}"))?)
                .verification_method_type(fragment.verification_method_type.clone())
                .controller(controller.clone())
                .properties(properties)
                .build();
            Ok((purpose.to_owned(), method))
        })
        .collect()
}

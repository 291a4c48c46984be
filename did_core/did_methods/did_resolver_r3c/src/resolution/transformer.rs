use did_resolver::{
    did_doc::schema::{
        did_doc::DidDocument,
        service::Service,
        verification_method::{
            PublicKeyField, VerificationMethod, VerificationMethodKind, VerificationMethodType,
        },
    },
    did_parser_nom::Did,
};
use serde::Deserialize;

use super::{
    metadata::{check_transaction_metadata, transform_metadata_methods},
    validation::validate_transaction,
};
use crate::{error::DidR3cResult, ledger::Transaction, DID_METHOD_NAME};

pub const INPUT_FRAGMENT: &str = "input-0";
pub const OUTPUT_FRAGMENT: &str = "output-0";

pub const SERVICE_ID: &str = "https://riddleandcode.com";
pub const SERVICE_TYPE: &str = "LinkedDomains";
pub const SERVICE_ENDPOINT: &str = "https://main.r3c.network";

/// How the ledger's base58 keys are written into the document.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PublicKeyEncoding {
    #[default]
    Base58,
    /// `z` prefixed multibase; ledger keys are base58btc already.
    Multibase,
}

impl PublicKeyEncoding {
    pub fn encode(self, key: &str) -> PublicKeyField {
        match self {
            PublicKeyEncoding::Base58 => PublicKeyField::Base58 {
                public_key_base58: key.to_owned(),
            },
            PublicKeyEncoding::Multibase => PublicKeyField::Multibase {
                public_key_multibase: format!("z{key}"),
            },
        }
    }
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DidR3cResolutionOptions {
    /// Reference the core verification methods from `assertionMethod` and
    /// `capabilityInvocation` by id instead of embedding them.
    pub compact: bool,
    pub encoding: PublicKeyEncoding,
}

fn core_method(
    did: &Did,
    fragment: &str,
    key: &str,
    encoding: PublicKeyEncoding,
) -> DidR3cResult<VerificationMethod> {
    Ok(VerificationMethod::builder()
        .id(did.with_fragment(fragment)?)
        .verification_method_type(VerificationMethodType::Ed25519VerificationKey2020)
        .controller(did.with_fragment(OUTPUT_FRAGMENT)?)
        .properties(encoding.encode(key))
        .build())
}

/// Projects a single input, single output transaction onto the DID document of
/// `did:r3c:<transaction id>`.
///
/// The input owner becomes `#input-0` and the output key `#output-0`, both controlled by
/// `#output-0`. Purposes declared in the transaction metadata are applied last, so they
/// replace `assertionMethod` when they name it.
pub fn transaction_to_did_document(
    tx: &Transaction,
    contexts: &[String],
    options: &DidR3cResolutionOptions,
) -> DidR3cResult<DidDocument> {
    let keys = validate_transaction(tx)?;
    let metadata_methods = check_transaction_metadata(tx)?;

    let did = Did::parse(format!("did:{DID_METHOD_NAME}:{}", tx.id))?;
    log::debug!("transaction_to_did_document >> building document of {did}");

    let input_method = core_method(&did, INPUT_FRAGMENT, keys.input_owner, options.encoding)?;
    let output_method = core_method(&did, OUTPUT_FRAGMENT, keys.output_key, options.encoding)?;

    let mut builder = contexts
        .iter()
        .fold(DidDocument::builder(did.clone()), |builder, context| {
            builder.add_context(context.clone())
        })
        .add_verification_method(input_method.clone())
        .add_verification_method(output_method.clone());

    builder = match options.compact {
        true => builder
            .add_assertion_method_reference(input_method.id().clone())
            .add_capability_invocation_reference(output_method.id().clone()),
        false => builder
            .add_assertion_method(input_method)
            .add_capability_invocation(output_method),
    };

    for (purpose, method) in transform_metadata_methods(&metadata_methods, &did)? {
        builder =
            builder.set_relationship(&purpose, vec![VerificationMethodKind::Resolved(method)])?;
    }

    let service = Service::new(
        SERVICE_ID.to_string(),
        SERVICE_TYPE.to_string(),
        SERVICE_ENDPOINT.to_string(),
    )?;

    Ok(builder.add_service(service).build())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;
    use crate::{
        error::DidR3cError,
        resolution::resolver::{DID_CONTEXT, ED25519_CONTEXT},
    };

    const TX_ID: &str = "135e55e01819b2a8dfbad7489ab5ebfe1b92768880ee9e0d7204a49956e846d5";
    const KEY: &str = "DQ6F6J8PYS11RMmwcnB8bPWwHkoPFytxNUydRPQh9TBS";

    fn contexts() -> Vec<String> {
        vec![DID_CONTEXT.to_string(), ED25519_CONTEXT.to_string()]
    }

    fn transaction(metadata: Value) -> Transaction {
        serde_json::from_value(json!({
            "id": TX_ID,
            "inputs": [{ "owners_before": [KEY], "fulfillment": null, "fulfills": null }],
            "outputs": [{
                "public_keys": [KEY],
                "amount": "1",
                "condition": {
                    "details": { "type": "ed25519-sha-256", "public_key": KEY },
                    "uri": "ni:///sha-256;..."
                }
            }],
            "operation": "CREATE",
            "asset": { "data": null },
            "version": "2.0",
            "metadata": metadata
        }))
        .unwrap()
    }

    fn core_method_json(fragment: &str) -> Value {
        json!({
            "id": format!("did:r3c:{TX_ID}#{fragment}"),
            "type": "Ed25519VerificationKey2020",
            "controller": format!("did:r3c:{TX_ID}#output-0"),
            "publicKeyBase58": KEY
        })
    }

    fn expected_document() -> Value {
        json!({
            "@context": [DID_CONTEXT, ED25519_CONTEXT],
            "id": format!("did:r3c:{TX_ID}"),
            "verificationMethod": [core_method_json("input-0"), core_method_json("output-0")],
            "assertionMethod": [core_method_json("input-0")],
            "capabilityInvocation": [core_method_json("output-0")],
            "service": {
                "id": SERVICE_ID,
                "type": SERVICE_TYPE,
                "serviceEndpoint": SERVICE_ENDPOINT
            }
        })
    }

    #[test]
    fn test_fixture_transaction() {
        let doc =
            transaction_to_did_document(&transaction(Value::Null), &contexts(), &Default::default())
                .unwrap();

        assert_eq!(serde_json::to_value(&doc).unwrap(), expected_document());
    }

    #[test]
    fn test_compact_references_core_methods() {
        let tx = transaction(Value::Null);
        let expanded =
            transaction_to_did_document(&tx, &contexts(), &Default::default()).unwrap();
        let options = DidR3cResolutionOptions {
            compact: true,
            ..Default::default()
        };
        let compact = transaction_to_did_document(&tx, &contexts(), &options).unwrap();

        let json = serde_json::to_value(&compact).unwrap();
        assert_eq!(
            json["assertionMethod"],
            json!([format!("did:r3c:{TX_ID}#input-0")])
        );
        assert_eq!(
            json["capabilityInvocation"],
            json!([format!("did:r3c:{TX_ID}#output-0")])
        );
        assert_eq!(
            compact.assertion_method()[0].id(),
            expanded.assertion_method()[0].id()
        );
        assert_eq!(
            compact.capability_invocation()[0].id(),
            expanded.capability_invocation()[0].id()
        );
    }

    #[test]
    fn test_multibase_encoding() {
        let options = DidR3cResolutionOptions {
            encoding: PublicKeyEncoding::Multibase,
            ..Default::default()
        };
        let doc =
            transaction_to_did_document(&transaction(Value::Null), &contexts(), &options).unwrap();

        for method in doc.verification_method() {
            assert_eq!(
                method.public_key_field(),
                Some(PublicKeyField::Multibase {
                    public_key_multibase: format!("z{KEY}")
                })
            );
        }
    }

    #[test]
    fn test_metadata_purpose_overrides_assertion_method() {
        let metadata = json!({
            "verificationMethods": {
                "assertionMethod": {
                    "type": "Ed25519VerificationKey2020",
                    "publicKeyMultibase": "z00000000000000000000000000000000"
                }
            }
        });
        let doc = transaction_to_did_document(&transaction(metadata), &contexts(), &Default::default())
            .unwrap();

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json["assertionMethod"],
            json!([{
                "id": format!("did:r3c:{TX_ID}#meta-0"),
                "type": "Ed25519VerificationKey2020",
                "controller": format!("did:r3c:{TX_ID}#output-0"),
                "publicKeyMultibase": "z00000000000000000000000000000000"
            }])
        );
        assert_eq!(json["verificationMethod"].as_array().map(Vec::len), Some(2));
        assert_eq!(json["capabilityInvocation"], json!([core_method_json("output-0")]));
    }

    #[test]
    fn test_metadata_purpose_adds_relationship() {
        let metadata = json!({
            "verificationMethods": {
                "authentication": { "type": "Ed25519VerificationKey2020", "publicKeyBase58": KEY },
                "linkedSigning": { "type": "Ed25519VerificationKey2020", "publicKeyBase58": KEY }
            }
        });
        let doc = transaction_to_did_document(&transaction(metadata), &contexts(), &Default::default())
            .unwrap();

        assert_eq!(doc.authentication()[0].id().fragment(), Some("meta-0"));
        assert_eq!(
            doc.relationship("linkedSigning").unwrap()[0].id().fragment(),
            Some("meta-1")
        );
        assert_eq!(
            serde_json::to_value(&doc).unwrap()["assertionMethod"],
            json!([core_method_json("input-0")])
        );
    }

    #[test]
    fn test_structural_purpose_is_rejected() {
        let metadata = json!({
            "verificationMethods": {
                "service": { "type": "Ed25519VerificationKey2020", "publicKeyBase58": KEY }
            }
        });
        let res =
            transaction_to_did_document(&transaction(metadata), &contexts(), &Default::default());
        assert!(matches!(res, Err(DidR3cError::DidDocumentBuilderError(_))));
    }

    #[test]
    fn test_missing_metadata_fails() {
        let mut tx = transaction(Value::Null);
        tx.metadata = None;
        let res = transaction_to_did_document(&tx, &contexts(), &Default::default());
        assert!(matches!(res, Err(DidR3cError::InvalidTransaction(_))));
    }

    #[test]
    fn test_unsupported_shape_fails_before_metadata() {
        let mut tx = transaction(Value::Null);
        tx.metadata = None;
        tx.inputs.clear();
        let res = transaction_to_did_document(&tx, &contexts(), &Default::default());
        assert!(matches!(res, Err(DidR3cError::UnsupportedShape(_))));
    }

    #[test]
    fn test_building_is_deterministic() {
        let metadata = json!({
            "verificationMethods": {
                "zeta": { "type": "Ed25519VerificationKey2020", "publicKeyBase58": KEY },
                "alpha": { "type": "Ed25519VerificationKey2020", "publicKeyBase58": KEY }
            }
        });
        let tx = transaction(metadata);
        let first = transaction_to_did_document(&tx, &contexts(), &Default::default()).unwrap();
        let second = transaction_to_did_document(&tx, &contexts(), &Default::default()).unwrap();

        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

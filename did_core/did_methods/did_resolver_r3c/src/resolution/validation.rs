use crate::{
    error::{DidR3cError, DidR3cResult},
    ledger::Transaction,
};

pub const ED25519_CONDITION_TYPE: &str = "ed25519-sha-256";

/// Keys of a transaction which passed [`validate_transaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionKeys<'a> {
    pub input_owner: &'a str,
    pub output_key: &'a str,
}

/// Only transactions moving an asset from exactly one owner to exactly one Ed25519 key
/// can back a DID.
pub fn validate_transaction(tx: &Transaction) -> DidR3cResult<TransactionKeys<'_>> {
    let input_owner = match tx.inputs.as_slice() {
        [input] => match input.owners_before.as_slice() {
            [owner] => owner.as_str(),
            _ => return Err(single_input_error()),
        },
        _ => return Err(single_input_error()),
    };

    let output_key = match tx.outputs.as_slice() {
        [output] if output.condition.details.condition_type == ED25519_CONDITION_TYPE => {
            match output.public_keys.as_slice() {
                [key] => key.as_str(),
                _ => return Err(single_output_error()),
            }
        }
        _ => return Err(single_output_error()),
    };

    Ok(TransactionKeys {
        input_owner,
        output_key,
    })
}

fn single_input_error() -> DidR3cError {
    DidR3cError::UnsupportedShape("Only single input transactions with one owner are allowed")
}

fn single_output_error() -> DidR3cError {
    DidR3cError::UnsupportedShape(
        "Only single output transactions of ed25519-sha-256 type are allowed",
    )
}

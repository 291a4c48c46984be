pub mod reader;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// A ledger transaction, reduced to the members the r3c method looks at.
/// `asset`, `operation`, `fulfillment` and the rest are ignored.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Transaction {
    pub id: String,
    #[serde(default)]
    pub inputs: Vec<Input>,
    #[serde(default)]
    pub outputs: Vec<Output>,
    /// `None` when the member is missing, `Some(Value::Null)` when it is `null`.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub metadata: Option<Value>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Input {
    #[serde(default)]
    pub owners_before: Vec<String>,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Output {
    #[serde(default)]
    pub public_keys: Vec<String>,
    pub condition: Condition,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Condition {
    pub details: ConditionDetails,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ConditionDetails {
    #[serde(rename = "type")]
    pub condition_type: String,
    // threshold conditions carry `subconditions` instead
    #[serde(default)]
    pub public_key: Option<String>,
}

/// How a DID's method specific id maps onto the ledger.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TransactionLookup {
    /// The id is a transaction id.
    #[default]
    Transaction,
    /// The id is an asset id; the asset's latest transaction is used.
    LatestForAsset,
}

fn deserialize_some<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

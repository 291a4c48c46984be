pub(crate) mod parsing;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use self::parsing::parse_did_ranges;
use crate::{DidRange, DidUrl, ParseError};

/// A parsed DID of the form `did:<method>:<method-specific-id>`.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
pub struct Did {
    did: String,
    method: DidRange,
    id: DidRange,
}

impl Did {
    pub fn parse(did: String) -> Result<Self, ParseError> {
        let (method, id) = parse_did_ranges(&did)?;
        Ok(Self { did, method, id })
    }

    pub fn did(&self) -> &str {
        self.did.as_ref()
    }

    pub fn method(&self) -> &str {
        &self.did[self.method.clone()]
    }

    pub fn id(&self) -> &str {
        &self.did[self.id.clone()]
    }

    /// Builds the DID URL `<did>#<fragment>`.
    pub fn with_fragment(&self, fragment: &str) -> Result<DidUrl, ParseError> {
        DidUrl::from_did_and_fragment(self.clone(), fragment)
    }
}

impl TryFrom<String> for Did {
    type Error = ParseError;

    fn try_from(did: String) -> Result<Self, Self::Error> {
        Self::parse(did)
    }
}

impl FromStr for Did {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_string())
    }
}

impl Display for Did {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.did)
    }
}

impl Serialize for Did {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.did())
    }
}

impl<'de> Deserialize<'de> for Did {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did = String::deserialize(deserializer)?;
        Self::parse(did).map_err(serde::de::Error::custom)
    }
}

mod parsing;

use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use self::parsing::validate_fragment;
use crate::{Did, ParseError};

/// A DID optionally followed by a `#fragment`. Paths and queries are not supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DidUrl {
    did: Did,
    fragment: Option<String>,
}

impl DidUrl {
    pub fn parse(did_url: String) -> Result<Self, ParseError> {
        match did_url.split_once('#') {
            Some((did, fragment)) => {
                Self::from_did_and_fragment(Did::parse(did.to_string())?, fragment)
            }
            None => Ok(Self {
                did: Did::parse(did_url)?,
                fragment: None,
            }),
        }
    }

    pub fn from_did_and_fragment(did: Did, fragment: &str) -> Result<Self, ParseError> {
        validate_fragment(fragment)?;
        Ok(Self {
            did,
            fragment: Some(fragment.to_string()),
        })
    }

    pub fn did(&self) -> &Did {
        &self.did
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }
}

impl From<Did> for DidUrl {
    fn from(did: Did) -> Self {
        Self {
            did,
            fragment: None,
        }
    }
}

impl TryFrom<String> for DidUrl {
    type Error = ParseError;

    fn try_from(did_url: String) -> Result<Self, Self::Error> {
        Self::parse(did_url)
    }
}

impl FromStr for DidUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.to_string())
    }
}

impl Display for DidUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.did, fragment),
            None => write!(f, "{}", self.did),
        }
    }
}

impl Serialize for DidUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DidUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let did_url = String::deserialize(deserializer)?;
        Self::parse(did_url).map_err(serde::de::Error::custom)
    }
}

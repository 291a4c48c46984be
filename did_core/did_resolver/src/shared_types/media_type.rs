use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaType {
    #[serde(rename = "application/did+json")]
    DidJson,
    #[serde(rename = "application/did+ld+json")]
    DidJsonLd,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::DidJson => write!(f, "application/did+json"),
            MediaType::DidJsonLd => write!(f, "application/did+ld+json"),
        }
    }
}

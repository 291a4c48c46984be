use did_resolver::did_parser_nom;
use hyper::http::uri::InvalidUri;
use thiserror::Error;

use super::DidR3cError;

#[derive(Error, Debug)]
pub enum ParsingErrorSource {
    #[error("DID parsing error: {0}")]
    DidParsingError(#[from] did_parser_nom::ParseError),
    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid URL: {0}")]
    UrlParsingError(#[from] url::ParseError),
    #[error("Invalid URI: {0}")]
    UriParsingError(#[from] InvalidUri),
}

impl From<did_parser_nom::ParseError> for DidR3cError {
    fn from(error: did_parser_nom::ParseError) -> Self {
        DidR3cError::ParsingError(ParsingErrorSource::DidParsingError(error))
    }
}

impl From<serde_json::Error> for DidR3cError {
    fn from(error: serde_json::Error) -> Self {
        DidR3cError::ParsingError(ParsingErrorSource::JsonError(error))
    }
}

impl From<url::ParseError> for DidR3cError {
    fn from(error: url::ParseError) -> Self {
        DidR3cError::ParsingError(ParsingErrorSource::UrlParsingError(error))
    }
}

impl From<InvalidUri> for DidR3cError {
    fn from(error: InvalidUri) -> Self {
        DidR3cError::ParsingError(ParsingErrorSource::UriParsingError(error))
    }
}

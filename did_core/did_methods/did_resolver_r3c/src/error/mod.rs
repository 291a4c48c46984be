use did_resolver::did_doc::error::DidDocumentBuilderError;
use hyper::StatusCode;
use parsing::ParsingErrorSource;
use thiserror::Error;

pub mod parsing;

pub type DidR3cResult<T> = Result<T, DidR3cError>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DidR3cError {
    #[error("DID method not supported: {0}")]
    MethodNotSupported(String),
    #[error("Bad configuration: {0}")]
    BadConfiguration(String),
    #[error("Transport error: {0}")]
    NetworkError(#[from] hyper::Error),
    #[error("Transport error: {0}")]
    NetworkClientError(#[from] hyper_util::client::legacy::Error),
    #[error("Request failed: {0}")]
    NonSuccessResponse(StatusCode),
    #[error("Transaction not found")]
    TransactionNotFound,
    #[error("Parsing error: {0}")]
    ParsingError(#[from] ParsingErrorSource),
    #[error("{0}")]
    UnsupportedShape(&'static str),
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Verification purpose `{0}` is reserved")]
    ReservedPurpose(String),
    #[error("DID document error: {0}")]
    DidDocumentBuilderError(#[from] DidDocumentBuilderError),
}

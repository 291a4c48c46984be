use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::{BodyExt, Empty};
use hyper::{StatusCode, Uri};
use hyper_tls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use serde::Deserialize;
use url::Url;

use super::{Transaction, TransactionLookup};
use crate::error::{DidR3cError, DidR3cResult};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransactionReader: Send + Sync {
    async fn fetch_transaction(&self, id: &str) -> DidR3cResult<Transaction>;
}

type HyperClient = Client<HttpsConnector<HttpConnector>, Empty<Bytes>>;

/// Reads transactions from the HTTP API of a ledger node. One GET per read, no retries.
pub struct HttpTransactionReader {
    client: HyperClient,
    endpoint: Url,
    lookup: TransactionLookup,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TransactionResponse {
    List(Vec<Transaction>),
    Single(Transaction),
}

impl HttpTransactionReader {
    /// `endpoint` is the transactions collection, e.g. `http://main.r3c.network/api/v1/transactions`.
    pub fn new(endpoint: Url, lookup: TransactionLookup) -> DidR3cResult<Self> {
        if endpoint.cannot_be_a_base() {
            return Err(DidR3cError::BadConfiguration(format!(
                "Ledger endpoint cannot be a base URL: {endpoint}"
            )));
        }
        Ok(Self {
            client: native_tls_hyper_client()?,
            endpoint,
            lookup,
        })
    }

    fn transaction_url(&self, id: &str) -> DidR3cResult<Url> {
        let mut url = self.endpoint.clone();
        match self.lookup {
            TransactionLookup::Transaction => {
                url.path_segments_mut()
                    .map_err(|()| {
                        DidR3cError::BadConfiguration(format!(
                            "Ledger endpoint cannot be a base URL: {}",
                            self.endpoint
                        ))
                    })?
                    .pop_if_empty()
                    .push(id);
            }
            TransactionLookup::LatestForAsset => {
                url.query_pairs_mut()
                    .append_pair("asset_id", id)
                    .append_pair("last_tx", "true");
            }
        }
        Ok(url)
    }

    fn parse_body(&self, body: &[u8]) -> DidR3cResult<Transaction> {
        match self.lookup {
            TransactionLookup::Transaction => Ok(serde_json::from_slice(body)?),
            TransactionLookup::LatestForAsset => match serde_json::from_slice::<TransactionResponse>(body)? {
                TransactionResponse::Single(tx) => Ok(tx),
                TransactionResponse::List(mut txs) => {
                    txs.pop().ok_or(DidR3cError::TransactionNotFound)
                }
            },
        }
    }
}

#[async_trait]
impl TransactionReader for HttpTransactionReader {
    async fn fetch_transaction(&self, id: &str) -> DidR3cResult<Transaction> {
        let url = self.transaction_url(id)?;
        log::debug!("HttpTransactionReader::fetch_transaction >> GET {url}");

        let uri: Uri = url.as_str().parse()?;
        let response = self.client.get(uri).await?;

        // the ledger answers every successful read with 200
        let status = response.status();
        if status != StatusCode::OK {
            return Err(DidR3cError::NonSuccessResponse(status));
        }

        let body = response.into_body().collect().await?.to_bytes();
        self.parse_body(&body)
    }
}

/// Assembles a hyper client which uses native TLS for `https` endpoints and also
/// accepts plain `http` ones.
fn native_tls_hyper_client() -> DidR3cResult<HyperClient> {
    let tls = native_tls::TlsConnector::new().map_err(|e| {
        DidR3cError::BadConfiguration(format!("Failed to build TlsConnector: {e}"))
    })?;
    let mut http = HttpConnector::new();
    http.enforce_http(false);
    let connector = HttpsConnector::from((http, tls.into()));

    Ok(Client::builder(TokioExecutor::new()).build(connector))
}

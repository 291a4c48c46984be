use async_trait::async_trait;
use did_resolver::{
    did_parser_nom::Did,
    error::GenericError,
    shared_types::media_type::MediaType,
    traits::resolvable::{
        resolution_metadata::DidResolutionMetadata, resolution_output::DidResolutionOutput,
        resolution_result::DidResolutionResult, DidResolvable,
    },
};
use typed_builder::TypedBuilder;
use url::Url;

use super::transformer::{transaction_to_did_document, DidR3cResolutionOptions};
use crate::{
    error::{DidR3cError, DidR3cResult},
    ledger::{
        reader::{HttpTransactionReader, TransactionReader},
        TransactionLookup,
    },
    DID_METHOD_NAME,
};

pub const DID_CONTEXT: &str = "https://www.w3.org/ns/did/v1";
pub const ED25519_CONTEXT: &str = "https://w3id.org/security/suites/ed25519-2020/v1";
pub const VERIFIABLE_CONDITIONS_CONTEXT: &str =
    "https://w3c-ccg.github.io/verifiable-conditions/contexts/verifiable-conditions-2021-v1.json";

pub const R3C_MAIN_HOST: &str = "http://main.r3c.network";
pub const R3C_API_PATH: &str = "/api/v1";
const TRANSACTIONS_PATH: &str = "/transactions";

#[derive(Clone, Debug, TypedBuilder)]
pub struct DidR3cResolverConfiguration {
    #[builder(default = R3C_MAIN_HOST.to_string(), setter(into))]
    host: String,
    #[builder(default = R3C_API_PATH.to_string(), setter(into))]
    api_path: String,
    #[builder(default)]
    lookup: TransactionLookup,
    #[builder(default = vec![DID_CONTEXT.to_string(), ED25519_CONTEXT.to_string()])]
    contexts: Vec<String>,
}

impl Default for DidR3cResolverConfiguration {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl DidR3cResolverConfiguration {
    pub fn lookup(&self) -> TransactionLookup {
        self.lookup
    }

    pub fn contexts(&self) -> &[String] {
        &self.contexts
    }

    /// The ledger's transactions collection, `{host}{api_path}/transactions`.
    pub fn transactions_endpoint(&self) -> DidR3cResult<Url> {
        let endpoint = format!(
            "{}{}{TRANSACTIONS_PATH}",
            self.host.trim_end_matches('/'),
            self.api_path.trim_end_matches('/')
        );
        Ok(Url::parse(&endpoint)?)
    }
}

/// Resolves `did:r3c` DIDs by reading the ledger transaction named by the DID.
pub struct DidR3cResolver<R = HttpTransactionReader> {
    reader: R,
    contexts: Vec<String>,
}

#[async_trait]
impl<R: TransactionReader> DidResolvable for DidR3cResolver<R> {
    type DidResolutionOptions = DidR3cResolutionOptions;

    async fn resolve(
        &self,
        did: &Did,
        options: &Self::DidResolutionOptions,
    ) -> Result<DidResolutionOutput, GenericError> {
        Ok(self.resolve_did(did, options).await?)
    }
}

impl DidR3cResolver {
    pub fn new(configuration: DidR3cResolverConfiguration) -> DidR3cResult<Self> {
        let reader = HttpTransactionReader::new(
            configuration.transactions_endpoint()?,
            configuration.lookup,
        )?;
        Ok(Self::with_reader(configuration, reader))
    }
}

impl<R: TransactionReader> DidR3cResolver<R> {
    pub fn with_reader(configuration: DidR3cResolverConfiguration, reader: R) -> Self {
        Self {
            reader,
            contexts: configuration.contexts,
        }
    }

    /// Resolve an r3c DID.
    pub async fn resolve_did(
        &self,
        did: &Did,
        options: &DidR3cResolutionOptions,
    ) -> DidR3cResult<DidResolutionOutput> {
        let method = did.method();
        if method != DID_METHOD_NAME {
            return Err(DidR3cError::MethodNotSupported(method.to_owned()));
        }

        let tx = self.reader.fetch_transaction(did.id()).await?;
        let did_document = transaction_to_did_document(&tx, &self.contexts, options)?;

        Ok(DidResolutionOutput::builder(did_document)
            .did_resolution_metadata(
                DidResolutionMetadata::builder()
                    .content_type(MediaType::DidJsonLd.to_string())
                    .build(),
            )
            .build())
    }

    /// Resolve an r3c DID into the resolution envelope. Every failure is reported as
    /// `notFound`, with the cause in the `message`.
    pub async fn resolve_did_result(
        &self,
        did: &Did,
        options: &DidR3cResolutionOptions,
    ) -> DidResolutionResult {
        match self.resolve_did(did, options).await {
            Ok(output) => output.into(),
            Err(err) => {
                log::warn!("Failed to resolve {did}: {err}");
                DidResolutionResult::not_found(format!("resolver-error: {err}"))
            }
        }
    }
}

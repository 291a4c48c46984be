pub mod error;

use std::collections::HashMap;

use async_trait::async_trait;
use did_resolver::{
    did_parser_nom::Did,
    error::GenericError,
    traits::resolvable::{
        resolution_error::DidResolutionError, resolution_output::DidResolutionOutput,
        resolution_result::DidResolutionResult, DidResolvable,
    },
};
use error::DidResolverRegistryError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Method agnostic resolution options, deserialized into the typed options of
/// whichever resolver ends up handling the DID.
pub type GenericMap = serde_json::Map<String, Value>;
pub type GenericResolver = dyn DidResolvableAdaptorTrait + Send + Sync;

#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Box<GenericResolver>>,
}

pub struct DidResolvableAdaptor<T: DidResolvable> {
    inner: T,
}

#[async_trait]
pub trait DidResolvableAdaptorTrait: Send + Sync {
    async fn resolve(
        &self,
        did: &Did,
        options: &GenericMap,
    ) -> Result<DidResolutionOutput, GenericError>;
}

#[async_trait]
impl<T: DidResolvable + Send + Sync> DidResolvableAdaptorTrait for DidResolvableAdaptor<T>
where
    T::DidResolutionOptions: Send + Sync + DeserializeOwned,
{
    async fn resolve(
        &self,
        did: &Did,
        options: &GenericMap,
    ) -> Result<DidResolutionOutput, GenericError> {
        let options_inner: T::DidResolutionOptions = if options.is_empty() {
            Default::default()
        } else {
            serde_json::from_value(Value::Object(options.clone()))?
        };
        self.inner.resolve(did, &options_inner).await
    }
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_resolver<T>(mut self, method: String, resolver: T) -> Self
    where
        T: DidResolvable + 'static + Send + Sync,
        <T as DidResolvable>::DidResolutionOptions: Send + Sync + DeserializeOwned,
    {
        let adaptor = DidResolvableAdaptor { inner: resolver };
        self.resolvers.insert(method, Box::new(adaptor));
        self
    }

    pub fn unregister_resolver(mut self, method: &str) -> Self {
        self.resolvers.remove(method);
        self
    }

    pub fn supports_method(&self, method: &str) -> bool {
        self.resolvers.contains_key(method)
    }

    pub async fn resolve(
        &self,
        did: &Did,
        options: &GenericMap,
    ) -> Result<DidResolutionOutput, GenericError> {
        let method = did.method();
        match self.resolvers.get(method) {
            Some(resolver) => resolver.resolve(did, options).await,
            None => Err(Box::new(DidResolverRegistryError::UnsupportedMethod(
                method.to_owned(),
            ))),
        }
    }

    /// Like [`ResolverRegistry::resolve`], but folds any failure into the resolution
    /// envelope: `methodNotSupported` when no resolver is registered for the method,
    /// `notFound` for anything the resolver itself reports.
    pub async fn resolve_result(&self, did: &Did, options: &GenericMap) -> DidResolutionResult {
        match self.resolve(did, options).await {
            Ok(output) => output.into(),
            Err(err) => match err.downcast_ref::<DidResolverRegistryError>() {
                Some(DidResolverRegistryError::UnsupportedMethod(_)) => {
                    DidResolutionResult::error(DidResolutionError::MethodNotSupported, err.to_string())
                }
                None => {
                    log::warn!("Resolution of {did} failed: {err}");
                    DidResolutionResult::not_found(format!("resolver-error: {err}"))
                }
            },
        }
    }
}

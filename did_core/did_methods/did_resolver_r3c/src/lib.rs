pub mod error;
pub mod ledger;
pub mod resolution;

use did_resolver_registry::ResolverRegistry;

use crate::{
    error::DidR3cResult,
    resolution::resolver::{DidR3cResolver, DidR3cResolverConfiguration},
};

pub const DID_METHOD_NAME: &str = "r3c";

/// Registry with the `r3c` method registered, backed by the ledger described in
/// `configuration`.
pub fn resolver_registry(
    configuration: DidR3cResolverConfiguration,
) -> DidR3cResult<ResolverRegistry> {
    let resolver = DidR3cResolver::new(configuration)?;
    Ok(ResolverRegistry::new().register_resolver(DID_METHOD_NAME.to_string(), resolver))
}

use std::error::Error;

use did_resolver::did_parser_nom::Did;
use did_resolver_r3c::resolution::resolver::{DidR3cResolver, DidR3cResolverConfiguration};

/// Resolves the DID given as first argument, optionally against the ledger host given
/// as second argument, and prints the resolution result.
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let did: Did = args
        .next()
        .ok_or("usage: resolve <did:r3c:...> [ledger host]")?
        .parse()?;
    let configuration = match args.next() {
        Some(host) => DidR3cResolverConfiguration::builder().host(host).build(),
        None => DidR3cResolverConfiguration::default(),
    };

    let resolver = DidR3cResolver::new(configuration)?;
    let result = resolver.resolve_did_result(&did, &Default::default()).await;
    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}

use did_parser_nom::{Did, DidUrl};

fn main() {
    // parse a string into DID
    let did = Did::parse(
        "did:r3c:135e55e01819b2a8dfbad7489ab5ebfe1b92768880ee9e0d7204a49956e846d5".into(),
    )
    .unwrap();
    println!("{:?}", did.did());
    println!("{:?}", did.method());
    println!("{:?}", did.id());

    // DID URLs pointing at verification methods
    let did_url = DidUrl::parse(format!("{did}#input-0")).unwrap();
    println!("{:?}", did_url.fragment());
}

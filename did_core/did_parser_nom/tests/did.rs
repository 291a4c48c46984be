use did_parser_nom::Did;
use serde_test::{assert_tokens, Token};

macro_rules! test_cases_positive {
    ($($name:ident: $input:expr, $expected_method:expr, $expected_id:expr)*) => {
        $(
            #[test]
            fn $name() {
                let _ = env_logger::builder().is_test(true).try_init();
                let did = Did::parse($input.to_string()).unwrap();

                assert_eq!(did.did(), $input, "DID");
                assert_eq!(did.method(), $expected_method, "Method");
                assert_eq!(did.id(), $expected_id, "ID");
            }
        )*
    };
}

macro_rules! test_cases_negative {
    ($($name:ident: $input:expr)*) => {
        $(
            #[test]
            fn $name() {
                assert!(Did::parse($input.to_string()).is_err());
            }
        )*
    };
}

test_cases_positive! {
    test_did_r3c:
        "did:r3c:135e55e01819b2a8dfbad7489ab5ebfe1b92768880ee9e0d7204a49956e846d5",
        "r3c",
        "135e55e01819b2a8dfbad7489ab5ebfe1b92768880ee9e0d7204a49956e846d5"
    test_did_example:
        "did:example:123456789abcdefghi",
        "example",
        "123456789abcdefghi"
    test_did_namespaced:
        "did:cheqd:testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47",
        "cheqd",
        "testnet:55dbc8bf-fba3-4117-855c-1e0dc1d3bb47"
    test_did_pct_encoded:
        "did:web:localhost%3A8080",
        "web",
        "localhost%3A8080"
}

test_cases_negative! {
    test_failure_empty: ""
    test_failure_not_a_did: "not-a-did"
    test_failure_no_id: "did:r3c"
    test_failure_empty_id: "did:r3c:"
    test_failure_uppercase_method: "did:R3C:abc"
    test_failure_fragment: "did:r3c:abc#input-0"
    test_failure_path: "did:r3c:abc/path"
    test_failure_whitespace: "did:r3c:abc def"
}

#[test]
fn test_did_serde_as_string() {
    let did = Did::parse("did:r3c:abc".to_string()).unwrap();
    assert_tokens(&did, &[Token::Str("did:r3c:abc")]);
}

#![allow(dead_code)]

use std::{collections::HashMap, convert::Infallible, sync::Arc};

use bytes::Bytes;
use http_body_util::Full;
use hyper::{body::Incoming, server::conn::http1, service::service_fn, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const TX_ID: &str = "135e55e01819b2a8dfbad7489ab5ebfe1b92768880ee9e0d7204a49956e846d5";
pub const KEY: &str = "DQ6F6J8PYS11RMmwcnB8bPWwHkoPFytxNUydRPQh9TBS";

pub type Routes = HashMap<String, (StatusCode, String)>;

/// Serves canned ledger responses keyed by request path and query, 404 otherwise.
pub async fn spawn_ledger(routes: Routes) -> String {
    let _ = env_logger::builder().is_test(true).try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);

    tokio::spawn(async move {
        loop {
            let (stream, _) = listener.accept().await.unwrap();
            let routes = routes.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let routes = routes.clone();
                    async move {
                        let key = req
                            .uri()
                            .path_and_query()
                            .map(|pq| pq.as_str().to_owned())
                            .unwrap_or_default();
                        let (status, body) = routes
                            .get(&key)
                            .cloned()
                            .unwrap_or((StatusCode::NOT_FOUND, String::new()));
                        Ok::<_, Infallible>(
                            Response::builder()
                                .status(status)
                                .body(Full::new(Bytes::from(body)))
                                .unwrap(),
                        )
                    }
                });
                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    format!("http://{addr}")
}

pub fn fixture_transaction(metadata: Value) -> Value {
    json!({
        "asset": { "data": { "name": "r3c identity" } },
        "id": TX_ID,
        "inputs": [{
            "fulfillment": "pGSAIA...",
            "fulfills": null,
            "owners_before": [KEY]
        }],
        "metadata": metadata,
        "operation": "CREATE",
        "outputs": [{
            "amount": "1",
            "condition": {
                "details": { "public_key": KEY, "type": "ed25519-sha-256" },
                "uri": "ni:///sha-256;pGSAIA?fpt=ed25519-sha-256&cost=131072"
            },
            "public_keys": [KEY]
        }],
        "version": "2.0"
    })
}

pub fn tx_route(body: Value) -> (String, (StatusCode, String)) {
    (
        format!("/api/v1/transactions/{TX_ID}"),
        (StatusCode::OK, body.to_string()),
    )
}

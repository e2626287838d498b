//! Exchanges with a real server. Run with
//! `cargo test --features std -- --ignored`; the target is read from
//! `TEST_HTTP_ADDRESS` (or `.env`) and defaults to `httpbin.org:80`.
#![cfg(feature = "std")]

use dotenvy::dotenv;
use iothttp::http::{Client, Request, RequestHeader, Response};
use iothttp::network::TcpConnection;
use iothttp::time::StdClock;
use std::env;

fn target() -> (String, u16) {
    dotenv().ok();
    let address = env::var("TEST_HTTP_ADDRESS").unwrap_or("httpbin.org:80".to_string());
    let (host, port) = address.rsplit_once(':').expect("address must be host:port");
    (host.to_string(), port.parse().expect("invalid port"))
}

#[test]
#[ignore = "requires network access"]
fn test_http_get() {
    let (host, port) = target();
    let mut client = Client::new(TcpConnection::new(), StdClock::new());
    let request = Request {
        host: Some(host.as_str()),
        port: Some(port),
        path: "/get",
        body: None,
    };

    let mut buffer = [0u8; 4096];
    let response: Response<'_, 16> = client.get(&request, &mut buffer);
    assert_eq!(response.error, None);
    assert_eq!(response.status, 200);
    assert!(response.body.is_some());
}

#[test]
#[ignore = "requires network access"]
fn test_http_post() {
    let (host, port) = target();
    let mut client = Client::new(TcpConnection::new(), StdClock::new());
    let request = Request {
        host: Some(host.as_str()),
        port: Some(port),
        path: "/post",
        body: Some(r#"{"hello":"world"}"#),
    };
    let headers = [RequestHeader::new("Content-Type", "application/json")];

    let mut buffer = [0u8; 4096];
    let response: Response<'_, 16> = client.post_with_headers(&request, &headers, &mut buffer);
    assert_eq!(response.error, None);
    assert_eq!(response.status, 200);
    assert!(response.text().is_some_and(|body| body.contains("world")));
}

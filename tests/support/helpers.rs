// tests/support/helpers.rs
use super::mocks::FixedClock;
use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use clockecho::application::services::ApplicationServices;
use clockecho::presentation::http::{routes::build_router, state::HttpState};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

pub fn make_test_router(cors_enabled: bool) -> axum::Router {
    let services = Arc::new(ApplicationServices::new(Arc::new(FixedClock)));
    build_router(HttpState {
        services,
        cors_enabled,
    })
}

pub fn get_with_timestamp(value: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri("/")
        .header("X-Client-Timestamp", value)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_string(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn loopback_config() -> clockecho::AppConfig {
    clockecho::AppConfig::default().with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
}

/// Minimal HTTP/1.1 exchange over a real socket.
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RawResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub async fn raw_request(addr: SocketAddr, method: &str, timestamp: Option<&str>) -> RawResponse {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let mut request = format!("{method} / HTTP/1.1\r\nHost: {addr}\r\nConnection: close\r\n");
    if let Some(ts) = timestamp {
        request.push_str(&format!("X-Client-Timestamp: {ts}\r\n"));
    }
    if method != "GET" && method != "OPTIONS" {
        request.push_str("Content-Length: 0\r\n");
    }
    request.push_str("\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut raw = Vec::new();
    stream.read_to_end(&mut raw).await.unwrap();
    let text = String::from_utf8(raw).unwrap();

    let (head, body) = text.split_once("\r\n\r\n").expect("malformed HTTP response");
    let mut lines = head.split("\r\n");
    let status_line = lines.next().unwrap();
    let code: u16 = status_line.split(' ').nth(1).unwrap().parse().unwrap();
    let headers = lines
        .filter_map(|line| line.split_once(':'))
        .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
        .collect();

    RawResponse {
        status: StatusCode::from_u16(code).unwrap(),
        headers,
        body: body.to_string(),
    }
}

/// Splits `<client>,<server>` into its two integers.
pub fn split_payload(body: &str) -> (i64, i64) {
    let (client, server) = body.split_once(',').expect("payload without comma");
    (client.parse().unwrap(), server.parse().unwrap())
}

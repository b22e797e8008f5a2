//! Mock catalog API helpers
//!
//! Mounts canned responses on a `wiremock` server and reads back what the
//! step library actually sent.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

/// Serve `body` with `status` for every GET to `route`.
pub async fn answer_get(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_raw(body.to_string(), "application/json"))
        .mount(server)
        .await;
}

/// The most recent request the server received.
pub async fn last_request(server: &MockServer) -> Request {
    server
        .received_requests()
        .await
        .and_then(|requests| requests.last().cloned())
        .expect("The mock catalog API received no request")
}

/// Value of query parameter `key` on `request`.
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Value of header `name` on `request`.
pub fn header_value(request: &Request, name: &str) -> Option<String> {
    request
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

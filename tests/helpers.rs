// Shared test helpers for building the router and canned remote pages.
//
// The blacklist site and extraction targets are stood in for by wiremock
// servers; the router is driven in-process with `tower::ServiceExt::oneshot`.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use text_scout::initialization::init_state;
use text_scout::server::create_app;
use text_scout::Config;

/// Builds the router with the blacklist checker pointed at `blacklist_base_url`.
pub fn test_app(blacklist_base_url: &str) -> Router {
    test_app_with_timeout(blacklist_base_url, 5)
}

/// Same as [`test_app`] with a custom outbound timeout.
pub fn test_app_with_timeout(blacklist_base_url: &str, timeout_seconds: u64) -> Router {
    let config = Config {
        blacklist_base_url: blacklist_base_url.to_string(),
        timeout_seconds,
        ..Default::default()
    };
    create_app(init_state(&config).expect("Failed to build state"))
}

/// Sends a JSON POST and returns the status and decoded body.
pub async fn post_json(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

/// Sends a GET and returns the status and decoded body.
#[allow(dead_code)] // Used by other test files
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("Router failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let body = serde_json::from_slice(&bytes).expect("Body is not JSON");
    (status, body)
}

/// Results page the way the blacklist site renders it: header row plus one `<tr>` per row.
#[allow(dead_code)] // Used by other test files
pub fn results_page(rows: &[&[&str]]) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html><html><body><h1>Results</h1>
        <table class="table table-bordered"><thead><tr>
        <th>#</th><th>IP</th><th>PTR</th><th>SpamCop</th><th>Spamhaus</th>
        <th>Barracuda</th><th>Sender Score</th><th>SenderBase</th></tr></thead><tbody>"#,
    );
    for row in rows {
        html.push_str("<tr>");
        for cell in *row {
            html.push_str(&format!("<td>{cell}</td>"));
        }
        html.push_str("</tr>");
    }
    html.push_str("</tbody></table></body></html>");
    html
}

/// Home page with the colorblind checkbox in the given state.
#[allow(dead_code)] // Used by other test files
pub fn home_page(colorblind_checked: bool) -> String {
    format!(
        r#"<html><body><form method="post" action="/">
        <textarea name="ips"></textarea>
        <label><input type="checkbox" id="colorblindMode" {}> Colorblind mode</label>
        </form></body></html>"#,
        if colorblind_checked { "checked" } else { "" }
    )
}

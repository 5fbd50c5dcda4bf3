//! Request body validation.
//!
//! Bodies are taken as loose JSON so every malformed shape gets the same
//! descriptive 400 instead of the framework's generic rejection text.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::blacklist::IpCheckRequest;
use crate::error_handling::ScrapeError;

fn invalid(message: &str) -> ScrapeError {
    ScrapeError::InvalidInput(message.to_string())
}

/// Pulls the `url` field out of an `/extract` body.
pub fn requested_url(payload: Result<Json<Value>, JsonRejection>) -> Result<String, ScrapeError> {
    let Ok(Json(body)) = payload else {
        return Err(invalid("URL required"));
    };
    match body.get("url").and_then(Value::as_str).map(str::trim) {
        Some(url) if !url.is_empty() => Ok(url.to_string()),
        _ => Err(invalid("URL required")),
    }
}

/// Validates a `/check-ips` body.
pub fn check_request(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<IpCheckRequest, ScrapeError> {
    let Ok(Json(body)) = payload else {
        return Err(invalid("IP list required"));
    };
    let ips = match body.get("ips") {
        None | Some(Value::Null) => return Err(invalid("IP list required")),
        Some(Value::Array(ips)) => ips,
        Some(_) => return Err(invalid("IPs must be provided as an array")),
    };
    if ips.is_empty() {
        return Err(invalid("No IP addresses provided"));
    }
    let ips = ips
        .iter()
        .map(|ip| ip.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| invalid("IPs must be strings"))?;

    let colorblind_mode = match body.get("colorblind_mode") {
        None | Some(Value::Null) => false,
        Some(Value::Bool(flag)) => *flag,
        Some(_) => return Err(invalid("colorblind_mode must be a boolean")),
    };

    Ok(IpCheckRequest {
        ips,
        colorblind_mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(value: Value) -> Result<Json<Value>, JsonRejection> {
        Ok(Json(value))
    }

    fn message<T: std::fmt::Debug>(result: Result<T, ScrapeError>) -> String {
        match result {
            Err(ScrapeError::InvalidInput(message)) => message,
            other => panic!("expected invalid input, got {other:?}"),
        }
    }

    #[test]
    fn test_requested_url() {
        assert_eq!(
            requested_url(body(json!({"url": "  example.com "}))).unwrap(),
            "example.com"
        );
        assert_eq!(message(requested_url(body(json!({})))), "URL required");
        assert_eq!(message(requested_url(body(json!({"url": 5})))), "URL required");
        assert_eq!(message(requested_url(body(json!({"url": "  "})))), "URL required");
        assert_eq!(message(requested_url(body(json!(["url"])))), "URL required");
    }

    #[test]
    fn test_check_request_valid() {
        let request =
            check_request(body(json!({"ips": ["1.1.1.1", "8.8.8.8"], "colorblind_mode": true})))
                .unwrap();
        assert_eq!(request.ips, vec!["1.1.1.1", "8.8.8.8"]);
        assert!(request.colorblind_mode);

        let request = check_request(body(json!({"ips": ["1.1.1.1"]}))).unwrap();
        assert!(!request.colorblind_mode);
    }

    #[test]
    fn test_check_request_rejections() {
        assert_eq!(message(check_request(body(json!({})))), "IP list required");
        assert_eq!(
            message(check_request(body(json!({"ips": "1.1.1.1"})))),
            "IPs must be provided as an array"
        );
        assert_eq!(
            message(check_request(body(json!({"ips": []})))),
            "No IP addresses provided"
        );
        assert_eq!(
            message(check_request(body(json!({"ips": ["1.1.1.1", 2]})))),
            "IPs must be strings"
        );
        assert_eq!(
            message(check_request(body(json!({"ips": ["1.1.1.1"], "colorblind_mode": "yes"})))),
            "colorblind_mode must be a boolean"
        );
    }
}

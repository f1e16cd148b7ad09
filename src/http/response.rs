//! HTTP response building module
//!
//! Serializes handler output to wire responses and provides builders for the
//! status-code responses the dispatcher needs, decoupled from business logic.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::reply::{Reply, ReplyBody};
use crate::logger;

/// Render a handler reply to a wire response
///
/// JSON bodies are serialized compactly; a serialization failure degrades to
/// a generic 500. HEAD requests keep headers and Content-Length but drop the
/// body.
pub fn render(reply: &Reply, is_head: bool) -> Response<Full<Bytes>> {
    let (content_type, content) = match &reply.body {
        ReplyBody::Text(text) => ("text/plain; charset=utf-8", text.clone()),
        ReplyBody::Html(html) => ("text/html; charset=utf-8", html.clone()),
        ReplyBody::Json(value) => match serde_json::to_string(value) {
            Ok(json) => ("application/json", json),
            Err(e) => {
                logger::log_error(&format!("Failed to serialize JSON body: {e}"));
                return build_500_response();
            }
        },
    };

    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(reply.status)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("rendered", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build 413 Payload Too Large response
pub fn build_413_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(413)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("413 Payload Too Large")))
        .unwrap_or_else(|e| {
            log_build_error("413", &e);
            Response::new(Full::new(Bytes::from("413 Payload Too Large")))
        })
}

/// Build generic 500 Internal Server Error response
pub fn build_500_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("500 Internal Server Error")))
        .unwrap_or_else(|e| {
            log_build_error("500", &e);
            Response::new(Full::new(Bytes::from("500 Internal Server Error")))
        })
}

/// Build 302 redirect response
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(302)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("302", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Build OPTIONS response (preflight request)
pub fn build_options_response(enable_cors: bool) -> Response<Full<Bytes>> {
    let mut builder = Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS");

    if enable_cors {
        builder = builder
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "GET, HEAD, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .header("Access-Control-Max-Age", "86400");
    }

    builder.body(Full::new(Bytes::new())).unwrap_or_else(|e| {
        log_build_error("OPTIONS", &e);
        Response::new(Full::new(Bytes::new()))
    })
}

/// Stamp the configured Server header onto an outgoing response
///
/// Applied by the dispatcher to every response, including error responses.
pub fn set_server_header(response: &mut Response<Full<Bytes>>, server_name: &str) {
    match hyper::header::HeaderValue::from_str(server_name) {
        Ok(value) => {
            response.headers_mut().insert(hyper::header::SERVER, value);
        }
        Err(e) => {
            logger::log_warning(&format!("Invalid server_name '{server_name}': {e}"));
        }
    }
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    fn body_string(response: Response<Full<Bytes>>) -> String {
        use http_body_util::BodyExt;
        // Full<Bytes> resolves immediately, a current-thread runtime is enough
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let collected = rt.block_on(response.into_body().collect()).unwrap();
        String::from_utf8(collected.to_bytes().to_vec()).unwrap()
    }

    #[test]
    fn test_render_text_reply() {
        let reply = Reply::text("Hello from the DevOps Project!");
        let response = render(&reply, false);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response), "Hello from the DevOps Project!");
    }

    #[test]
    fn test_render_json_reply_compact() {
        let reply = Reply::json(serde_json::json!({"status": "healthy"}));
        let response = render(&reply, false);
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()["Content-Type"], "application/json");
        assert_eq!(body_string(response), r#"{"status":"healthy"}"#);
    }

    #[test]
    fn test_render_head_drops_body_keeps_length() {
        let reply = Reply::html("<html></html>");
        let response = render(&reply, true);
        assert_eq!(response.headers()["Content-Length"], "13");
        assert!(body_string(response).is_empty());
    }

    #[test]
    fn test_404_response() {
        let response = build_404_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response), "404 Not Found");
    }

    #[test]
    fn test_redirect_response_location() {
        let response = build_redirect_response("http://127.0.0.1:8001/admin/");
        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers()["Location"],
            "http://127.0.0.1:8001/admin/"
        );
    }

    #[test]
    fn test_set_server_header() {
        let mut response = build_404_response();
        set_server_header(&mut response, "Storefront/0.1");
        assert_eq!(response.headers()["Server"], "Storefront/0.1");
    }

    #[test]
    fn test_set_server_header_skips_invalid_name() {
        let mut response = build_404_response();
        set_server_header(&mut response, "bad\nname");
        assert!(!response.headers().contains_key("Server"));
    }

    #[test]
    fn test_options_response_cors_headers() {
        let response = build_options_response(true);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()["Access-Control-Allow-Origin"], "*");

        let plain = build_options_response(false);
        assert!(!plain.headers().contains_key("Access-Control-Allow-Origin"));
    }
}

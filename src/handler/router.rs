//! Request dispatch module
//!
//! Entry point for HTTP request processing: method validation, route
//! resolution, handler execution, and response rendering.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::handler::pages;
use crate::http::{self, Reply};
use crate::logger::{self, AccessLogEntry};
use crate::routing::RouteTarget;
use crate::state::AppState;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    // 1. Check HTTP method
    let response = if let Some(mut resp) = check_http_method(&method, state.config.http.enable_cors)
    {
        http::set_server_header(&mut resp, &state.config.http.server_name);
        resp
    // 2. Check body size
    } else if let Some(mut resp) = check_body_size(&req, state.config.http.max_body_size) {
        http::set_server_header(&mut resp, &state.config.http.server_name);
        resp
    // 3. Resolve and execute
    } else {
        dispatch(&path, is_head, &state)
    };

    if state.config.logging.access_log {
        log_access(&req, peer_addr, &response, &state);
    }

    Ok(response)
}

/// Check HTTP method and return the response for non-GET/HEAD methods
fn check_http_method(method: &Method, enable_cors: bool) -> Option<Response<Full<Bytes>>> {
    match *method {
        Method::GET | Method::HEAD => None,
        Method::OPTIONS => Some(http::build_options_response(enable_cors)),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            Some(http::build_405_response())
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
///
/// Malformed values, non-UTF-8 or unparsable alike, log a warning and skip
/// the check rather than reject the request.
fn check_body_size<B>(req: &Request<B>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    let Ok(size_str) = content_length.to_str() else {
        logger::log_warning("Invalid Content-Length header: not UTF-8, skipping size check");
        return None;
    };
    match size_str.parse::<u64>() {
        Ok(size) if size > max_body_size => {
            logger::log_error(&format!(
                "Request body too large: {size} bytes (max: {max_body_size})"
            ));
            Some(http::build_413_response())
        }
        Err(_) => {
            logger::log_warning(&format!(
                "Invalid Content-Length value: '{size_str}', skipping size check"
            ));
            None
        }
        _ => None,
    }
}

/// Resolve a path against the route table and run the matched handler
///
/// An unmatched path answers 404; a failing product provider answers 500.
/// Every response carries the configured Server header.
fn dispatch(path: &str, is_head: bool, state: &AppState) -> Response<Full<Bytes>> {
    let mut response = run_target(path, is_head, state);
    http::set_server_header(&mut response, &state.config.http.server_name);
    response
}

/// Run the matched route target and build its raw response
fn run_target(path: &str, is_head: bool, state: &AppState) -> Response<Full<Bytes>> {
    let Some(target) = state.routes.resolve(path) else {
        return http::build_404_response();
    };

    let reply = match target {
        RouteTarget::Home => home(),
        RouteTarget::ApiStatus => api_status(),
        RouteTarget::Health => health(),
        RouteTarget::ProductList => match product_list(state) {
            Ok(reply) => reply,
            Err(e) => {
                logger::log_error(&e.to_string());
                return http::build_500_response();
            }
        },
        RouteTarget::Redirect { target } => {
            return http::build_redirect_response(target);
        }
    };

    http::render(&reply, is_head)
}

/// Fixed greeting, kept byte-for-byte
fn home() -> Reply {
    Reply::text("Hello from the DevOps Project!")
}

/// Deployment status probe
fn api_status() -> Reply {
    Reply::json(serde_json::json!({"status": "healthy"}))
}

/// Liveness probe
fn health() -> Reply {
    Reply::json(serde_json::json!({"status": "ok"}))
}

/// Product listing page, fed by the Data Provider
fn product_list(state: &AppState) -> Result<Reply, crate::store::StoreError> {
    let products = state.catalog.list_all()?;
    Ok(Reply::html(pages::render_product_list(&products)))
}

/// Emit one access-log line for the finished request
fn log_access(
    req: &Request<hyper::body::Incoming>,
    peer_addr: SocketAddr,
    response: &Response<Full<Bytes>>,
    state: &AppState,
) {
    let mut entry = AccessLogEntry::new(
        peer_addr.ip().to_string(),
        req.method().to_string(),
        req.uri().path().to_string(),
    );
    entry.http_version = match req.version() {
        hyper::Version::HTTP_10 => "1.0".to_string(),
        _ => "1.1".to_string(),
    };
    entry.status = response.status().as_u16();
    entry.body_bytes = response
        .headers()
        .get("content-length")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse().ok())
        .unwrap_or(0);
    entry.referer = header_string(req, "referer");
    entry.user_agent = header_string(req, "user-agent");

    logger::log_access(&entry, &state.config.logging.access_log_format);
}

fn header_string(req: &Request<hyper::body::Incoming>, name: &str) -> Option<String> {
    req.headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(ToString::to_string)
}

//! Handler output types
//!
//! A handler produces a `Reply`: a status code plus a typed body. The reply
//! is built fresh per request, rendered once, and discarded.

use hyper::StatusCode;

/// Typed handler output body, serialized by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody {
    /// Plain text, served as `text/plain`
    Text(String),
    /// A rendered page, served as `text/html`
    Html(String),
    /// A JSON document, serialized by the renderer
    Json(serde_json::Value),
}

/// Structured handler output before wire serialization
#[derive(Debug, Clone)]
pub struct Reply {
    pub status: StatusCode,
    pub body: ReplyBody,
}

impl Reply {
    pub const fn new(status: StatusCode, body: ReplyBody) -> Self {
        Self { status, body }
    }

    /// 200 response with a plain text body
    pub fn text(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, ReplyBody::Text(body.into()))
    }

    /// 200 response with an HTML body
    pub fn html(body: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, ReplyBody::Html(body.into()))
    }

    /// 200 response with a JSON body
    pub const fn json(value: serde_json::Value) -> Self {
        Self::new(StatusCode::OK, ReplyBody::Json(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reply_is_200() {
        let reply = Reply::text("hello");
        assert_eq!(reply.status, StatusCode::OK);
        assert_eq!(reply.body, ReplyBody::Text("hello".to_string()));
    }

    #[test]
    fn test_json_reply_keeps_value() {
        let reply = Reply::json(serde_json::json!({"status": "ok"}));
        match reply.body {
            ReplyBody::Json(v) => assert_eq!(v["status"], "ok"),
            other => panic!("expected json body, got {other:?}"),
        }
    }
}

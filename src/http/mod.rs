//! HTTP protocol layer module
//!
//! Handler output types and wire serialization, decoupled from specific
//! business logic.

pub mod reply;
pub mod response;

// Re-export commonly used types
pub use reply::{Reply, ReplyBody};
pub use response::{
    build_404_response, build_405_response, build_413_response, build_500_response,
    build_options_response, build_redirect_response, render, set_server_header,
};

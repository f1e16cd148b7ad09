//! Request handler module
//!
//! Responsible for request dispatch and the endpoint handlers behind the
//! route table.

pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;

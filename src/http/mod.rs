//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, request ID, trace layer)
//!     → GET /metrics → collector invocation
//!     → 200 + raw stdout, or 500 on any collector failure
//!     → anything else falls through to Axum's 404/405 defaults
//! ```

pub mod server;

pub use server::HttpServer;

//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via the tracing crate
//! - RUST_LOG overrides the configured level for ad-hoc debugging
//! - Request IDs come from the HTTP layer and flow through trace spans
//! - The exporter keeps no metrics of its own; the payload it relays
//!   IS the metrics surface

pub mod logging;

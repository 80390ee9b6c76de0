//! ZFS Pool Prometheus Exporter Library

pub mod collector;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::ExporterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;

//! Observability for Storefront.
//!
//! Tracing subscriber initialization with structured logging and optional
//! OpenTelemetry trace export. Cart retrieval failures surface here as
//! warn-level diagnostics -- they are silent from the shopper's perspective.

pub mod tracing_setup;

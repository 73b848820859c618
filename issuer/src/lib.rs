//! Presigned upload URL issuer

#![deny(clippy::all, clippy::pedantic, clippy::nursery, dead_code)]

/// Invocation handling
pub mod issuer;

/// HTTP routes
pub mod routes;

/// Local HTTP server
pub mod server;

/// URL signing
pub mod signer;

/// Logging setup
pub mod telemetry;

/// Shared types
pub mod types;

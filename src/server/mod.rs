//! Server module exposing the directory over HTTP
//!
//! The core pipeline stays transport-agnostic; this module only wires the
//! catalog and configuration into axum routes.

pub mod builder;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;

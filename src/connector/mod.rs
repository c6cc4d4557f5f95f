//! # Connector Layer
//!
//! Adapters for external collaborators (the completion API, the filesystem)
//! and the HTTP API surface.

pub mod adapter;
pub mod api;
pub mod client;

pub use adapter::*;
pub use api::{router, serve, Container, ContainerConfig};
pub use client::*;

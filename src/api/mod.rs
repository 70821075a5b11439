//! HTTP API
//!
//! Typed wrappers around the QueueLeaf REST endpoints.

pub mod client;

pub use client::*;

//! API Layer
//!
//! HTTP client for the mood journal REST API.

pub mod client;

pub use client::*;

//! Shared types for the FrontDash backend
//!
//! Common types used across crates: domain models, request/response
//! payloads, the unified error system, and small utilities.

pub mod error;
pub mod models;
pub mod util;
pub mod validate;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

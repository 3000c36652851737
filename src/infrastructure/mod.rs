//! Infrastructure layer - External service integrations
//!
//! This layer contains:
//! - Document store clients (hosted REST store, in-memory sample store)
//! - Identity provider clients (hosted REST service, static stand-in)
//! - Tokio runtime bridge for async operations

pub mod identity;
pub mod runtime;
pub mod store;

//! REST API server for the in-memory roster service.
//!
//! Provides HTTP endpoints for entity CRUD operations and request routing.

pub mod handlers;
pub mod router;
pub mod server;

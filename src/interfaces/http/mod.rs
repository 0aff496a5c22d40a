//! HTTP REST API
//!
//! - `common`: error mapping and extractors shared by every handler
//! - `modules`: handlers and DTOs, one module per resource
//! - `router`: route table, middleware stack and OpenAPI document

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc};

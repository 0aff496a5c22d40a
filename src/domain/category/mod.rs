//! Category aggregate
//!
//! Categories are read-only here: they are seeded with the schema and only
//! ever looked up or listed.

pub mod model;
pub mod repository;

pub use model::Category;
pub use repository::CategoryRepository;

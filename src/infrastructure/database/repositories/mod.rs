//! Database repository implementations
//!
//! Per-aggregate SeaORM repositories + unified RepositoryProvider.

pub mod category_repository;
pub mod question_repository;
pub mod repository_provider;

pub use repository_provider::SeaOrmRepositoryProvider;

//! # Trivia API
//!
//! JSON web service over a store of trivia questions and categories:
//! paginated listing, search, create/delete, per-category listing and
//! random quiz questions.
//!
//! ## Architecture
//!
//! - **domain**: entities and repository traits
//! - **application**: the `TriviaService` use cases
//! - **infrastructure**: SeaORM persistence, migrations and an in-memory store
//! - **interfaces**: axum REST API with Swagger documentation
//! - **shared**: errors, pagination, shutdown coordination

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, run_migrations, DatabaseConfig};

pub use interfaces::create_api_router;

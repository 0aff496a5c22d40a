//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_categories;
mod m20240101_000002_create_questions;
mod m20240101_000003_seed_trivia;

pub use m20240101_000003_seed_trivia::{CATEGORIES as SEED_CATEGORIES, QUESTIONS as SEED_QUESTIONS};

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_categories::Migration),
            Box::new(m20240101_000002_create_questions::Migration),
            Box::new(m20240101_000003_seed_trivia::Migration),
        ]
    }
}

//! Storage implementations outside the relational database

mod memory;

pub use memory::{InMemoryCategoryRepository, InMemoryQuestionRepository, InMemoryRepositoryProvider};

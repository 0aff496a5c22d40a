//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::category::CategoryRepository;
use crate::domain::question::QuestionRepository;
use crate::domain::repositories::RepositoryProvider;

use super::category_repository::SeaOrmCategoryRepository;
use super::question_repository::SeaOrmQuestionRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let science = repos.categories().find_by_id(1).await?;
/// let total = repos.questions().count().await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    categories: SeaOrmCategoryRepository,
    questions: SeaOrmQuestionRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            categories: SeaOrmCategoryRepository::new(db.clone()),
            questions: SeaOrmQuestionRepository::new(db),
        }
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn questions(&self) -> &dyn QuestionRepository {
        &self.questions
    }
}

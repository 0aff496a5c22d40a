//! Question repository interface

use async_trait::async_trait;

use super::model::{NewQuestion, Question};
use crate::domain::DomainResult;

#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions ordered by id.
    async fn find_all(&self) -> DomainResult<Vec<Question>>;
    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Question>>;
    /// Questions whose category equals `category_id`, ordered by id.
    async fn find_by_category(&self, category_id: i32) -> DomainResult<Vec<Question>>;
    /// Questions whose text contains `term`, ignoring case, ordered by id.
    async fn search(&self, term: &str) -> DomainResult<Vec<Question>>;
    /// Questions in `category` (or any category when `None`) whose id is not
    /// in `exclude`.
    async fn find_quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> DomainResult<Vec<Question>>;
    async fn save(&self, question: NewQuestion) -> DomainResult<Question>;
    /// Fails with `NotFound` when no row was deleted.
    async fn delete(&self, id: i32) -> DomainResult<()>;
    async fn count(&self) -> DomainResult<u64>;
}

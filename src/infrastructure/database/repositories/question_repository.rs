//! SeaORM implementation of QuestionRepository

use async_trait::async_trait;
use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::{debug, info};

use crate::domain::question::{NewQuestion, Question, QuestionRepository};
use crate::domain::{DomainError, DomainResult};
use crate::infrastructure::database::entities::question;

const LIKE_ESCAPE: char = '\\';

fn entity_to_domain(q: question::Model) -> Question {
    Question {
        id: q.id,
        question: q.question,
        answer: q.answer,
        difficulty: q.difficulty,
        category: q.category,
    }
}

/// `%term%` with LIKE wildcards in `term` escaped. Case is left alone;
/// folding happens in SQL so both sides go through the same `LOWER()`.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// `LOWER(question) LIKE LOWER('%term%') ESCAPE '\'`
///
/// SQLite's `LOWER()` only folds ASCII, so a pattern lowercased in Rust
/// would miss stored non-ASCII capitals.
fn question_contains(term: &str) -> SimpleExpr {
    let pattern = SimpleExpr::Binary(
        Box::new(Func::lower(Expr::val(contains_pattern(term))).into()),
        BinOper::Escape,
        Box::new(SimpleExpr::Constant(LIKE_ESCAPE.into())),
    );
    Expr::expr(Func::lower(Expr::col(question::Column::Question))).binary(BinOper::Like, pattern)
}

pub struct SeaOrmQuestionRepository {
    db: DatabaseConnection,
}

impl SeaOrmQuestionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionRepository for SeaOrmQuestionRepository {
    async fn find_all(&self) -> DomainResult<Vec<Question>> {
        let models = question::Entity::find()
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Question>> {
        let model = question::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(entity_to_domain))
    }

    async fn find_by_category(&self, category_id: i32) -> DomainResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question::Column::Category.eq(category_id))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<Question>> {
        let models = question::Entity::find()
            .filter(question_contains(term))
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        debug!("Search '{}' matched {} questions", term, models.len());
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn find_quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> DomainResult<Vec<Question>> {
        let mut query = question::Entity::find();
        if let Some(category_id) = category {
            query = query.filter(question::Column::Category.eq(category_id));
        }
        if !exclude.is_empty() {
            query = query.filter(question::Column::Id.is_not_in(exclude.iter().copied()));
        }
        let models = query
            .order_by_asc(question::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(entity_to_domain).collect())
    }

    async fn save(&self, q: NewQuestion) -> DomainResult<Question> {
        let model = question::ActiveModel {
            question: Set(q.question),
            answer: Set(q.answer),
            difficulty: Set(q.difficulty),
            category: Set(q.category),
            ..Default::default()
        };
        let result = model.insert(&self.db).await?;
        info!("Question saved: {}", result.id);
        Ok(entity_to_domain(result))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = question::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(DomainError::not_found("Question", "id", id));
        }
        info!("Question deleted: {}", id);
        Ok(())
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(question::Entity::find().count(&self.db).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_wraps_and_keeps_case() {
        assert_eq!(contains_pattern("Title"), "%Title%");
        assert_eq!(contains_pattern("ÉCOLE"), "%ÉCOLE%");
    }

    #[test]
    fn search_folds_both_sides_in_sql() {
        use sea_orm::{DbBackend, QueryTrait};

        let sql = question::Entity::find()
            .filter(question_contains("ÉCOLE"))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains(r#"LOWER("questions"."question") LIKE LOWER("#), "{sql}");
        assert!(sql.contains("ÉCOLE"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }

    #[test]
    fn pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}

//! Trivia business logic service
//!
//! Every operation re-reads the store; nothing is cached between calls.

use std::sync::Arc;

use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::domain::{
    Category, DomainError, DomainResult, NewQuestion, Question, RepositoryProvider,
};
use crate::shared::pagination::{paginate, PageRequest};

/// One page of questions plus the size of the set it was cut from
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionPage {
    pub questions: Vec<Question>,
    pub total_questions: u64,
}

/// Result of the paginated question listing
#[derive(Debug, Clone, PartialEq)]
pub struct QuestionListing {
    pub page: QuestionPage,
    /// All categories, ordered by type
    pub categories: Vec<Category>,
}

/// Result of a create
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedQuestion {
    pub question: Question,
    pub page: QuestionPage,
}

/// Result of a category-scoped listing
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryQuestions {
    pub category: Category,
    pub page: QuestionPage,
}

/// Service for trivia operations
pub struct TriviaService {
    repos: Arc<dyn RepositoryProvider>,
    per_page: usize,
}

impl TriviaService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, per_page: usize) -> Self {
        Self { repos, per_page }
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub async fn question_count(&self) -> DomainResult<u64> {
        self.repos.questions().count().await
    }

    fn page_request(&self, page: i64) -> PageRequest {
        PageRequest::new(page, self.per_page)
    }

    /// All categories ordered by type. Fails with `NotFound` when there are none.
    pub async fn list_categories(&self) -> DomainResult<Vec<Category>> {
        let categories = self.repos.categories().find_all().await?;
        if categories.is_empty() {
            return Err(DomainError::not_found("Category", "any", "*"));
        }
        Ok(categories)
    }

    /// Page of all questions ordered by id. An empty page is `NotFound`.
    pub async fn list_questions(&self, page: i64) -> DomainResult<QuestionListing> {
        let all = self.repos.questions().find_all().await?;
        let total_questions = all.len() as u64;
        let questions = paginate(all, self.page_request(page));
        let categories = self.repos.categories().find_all().await?;

        if questions.is_empty() {
            return Err(DomainError::not_found("Question", "page", page));
        }

        Ok(QuestionListing {
            page: QuestionPage {
                questions,
                total_questions,
            },
            categories,
        })
    }

    /// Delete a question, then return the requested page of what is left.
    pub async fn delete_question(&self, id: i32, page: i64) -> DomainResult<QuestionPage> {
        if self.repos.questions().find_by_id(id).await?.is_none() {
            return Err(DomainError::not_found("Question", "id", id));
        }

        self.repos.questions().delete(id).await?;
        info!("Question {} deleted", id);

        self.current_page(page).await
    }

    pub async fn create_question(
        &self,
        question: NewQuestion,
        page: i64,
    ) -> DomainResult<CreatedQuestion> {
        let question = self.repos.questions().save(question).await?;
        info!(
            "Question {} created in category {}",
            question.id, question.category
        );

        let page = self.current_page(page).await?;
        Ok(CreatedQuestion { question, page })
    }

    /// Case-insensitive substring search over question text.
    ///
    /// A missing or empty term is `InvalidInput`; no matches is `NotFound`.
    /// `total_questions` counts the matches, not the whole table.
    pub async fn search_questions(
        &self,
        term: Option<&str>,
        page: i64,
    ) -> DomainResult<QuestionPage> {
        let term = match term {
            Some(term) if !term.is_empty() => term,
            _ => return Err(DomainError::InvalidInput("searchTerm is required".into())),
        };

        let matches = self.repos.questions().search(term).await?;
        if matches.is_empty() {
            return Err(DomainError::not_found("Question", "question", term));
        }

        let total_questions = matches.len() as u64;
        Ok(QuestionPage {
            questions: paginate(matches, self.page_request(page)),
            total_questions,
        })
    }

    /// Page of the questions in one category.
    ///
    /// `total_questions` is the count of all questions, matching the
    /// unscoped listing.
    pub async fn questions_in_category(
        &self,
        category_id: i32,
        page: i64,
    ) -> DomainResult<CategoryQuestions> {
        let category = self
            .repos
            .categories()
            .find_by_id(category_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", "id", category_id))?;

        let in_category = self.repos.questions().find_by_category(category_id).await?;
        let total_questions = self.repos.questions().count().await?;

        Ok(CategoryQuestions {
            category,
            page: QuestionPage {
                questions: paginate(in_category, self.page_request(page)),
                total_questions,
            },
        })
    }

    /// Pick a random question not in `previous`, optionally within one
    /// category. `None` or `Some(0)` means any category.
    ///
    /// Returns `Ok(None)` once every eligible question has been served.
    pub async fn next_quiz_question(
        &self,
        previous: &[i32],
        category: Option<i32>,
    ) -> DomainResult<Option<Question>> {
        let category = category.filter(|id| *id != 0);
        let candidates = self
            .repos
            .questions()
            .find_quiz_candidates(category, previous)
            .await?;

        debug!(
            "Quiz: {} candidates (category={:?}, excluded={})",
            candidates.len(),
            category,
            previous.len()
        );

        Ok(candidates.choose(&mut rand::thread_rng()).cloned())
    }

    async fn current_page(&self, page: i64) -> DomainResult<QuestionPage> {
        let all = self.repos.questions().find_all().await?;
        let total_questions = all.len() as u64;
        Ok(QuestionPage {
            questions: paginate(all, self.page_request(page)),
            total_questions,
        })
    }
}

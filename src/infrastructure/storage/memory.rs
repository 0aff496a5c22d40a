//! In-memory storage implementation

use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;

use crate::domain::{
    Category, CategoryRepository, DomainError, DomainResult, NewQuestion, Question,
    QuestionRepository, RepositoryProvider,
};
use crate::infrastructure::database::migrator::{SEED_CATEGORIES, SEED_QUESTIONS};

/// In-memory categories for development and testing
#[derive(Default)]
pub struct InMemoryCategoryRepository {
    categories: DashMap<i32, Category>,
}

impl InMemoryCategoryRepository {
    pub fn insert(&self, category: Category) {
        self.categories.insert(category.id, category);
    }

    pub fn remove(&self, id: i32) {
        self.categories.remove(&id);
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn find_all(&self) -> DomainResult<Vec<Category>> {
        let mut all: Vec<Category> = self.categories.iter().map(|c| c.value().clone()).collect();
        all.sort_by(|a, b| a.kind.cmp(&b.kind).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Category>> {
        Ok(self.categories.get(&id).map(|c| c.value().clone()))
    }
}

/// In-memory questions for development and testing
pub struct InMemoryQuestionRepository {
    questions: DashMap<i32, Question>,
    id_counter: AtomicI32,
}

impl InMemoryQuestionRepository {
    pub fn new() -> Self {
        Self {
            questions: DashMap::new(),
            id_counter: AtomicI32::new(1),
        }
    }

    /// Questions matching `filter`, ordered by id
    fn collect_sorted<F>(&self, filter: F) -> Vec<Question>
    where
        F: Fn(&Question) -> bool,
    {
        let mut found: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| filter(q.value()))
            .map(|q| q.value().clone())
            .collect();
        found.sort_by_key(|q| q.id);
        found
    }
}

impl Default for InMemoryQuestionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuestionRepository for InMemoryQuestionRepository {
    async fn find_all(&self) -> DomainResult<Vec<Question>> {
        Ok(self.collect_sorted(|_| true))
    }

    async fn find_by_id(&self, id: i32) -> DomainResult<Option<Question>> {
        Ok(self.questions.get(&id).map(|q| q.value().clone()))
    }

    async fn find_by_category(&self, category_id: i32) -> DomainResult<Vec<Question>> {
        Ok(self.collect_sorted(|q| q.category == category_id))
    }

    async fn search(&self, term: &str) -> DomainResult<Vec<Question>> {
        Ok(self.collect_sorted(|q| q.matches(term)))
    }

    async fn find_quiz_candidates(
        &self,
        category: Option<i32>,
        exclude: &[i32],
    ) -> DomainResult<Vec<Question>> {
        Ok(self.collect_sorted(|q| {
            category.map_or(true, |c| q.category == c) && !exclude.contains(&q.id)
        }))
    }

    async fn save(&self, question: NewQuestion) -> DomainResult<Question> {
        let id = self.id_counter.fetch_add(1, Ordering::SeqCst);
        let question = question.with_id(id);
        self.questions.insert(id, question.clone());
        Ok(question)
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        self.questions
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::not_found("Question", "id", id))
    }

    async fn count(&self) -> DomainResult<u64> {
        Ok(self.questions.len() as u64)
    }
}

/// In-memory repository provider
#[derive(Default)]
pub struct InMemoryRepositoryProvider {
    pub categories: InMemoryCategoryRepository,
    pub questions: InMemoryQuestionRepository,
}

impl InMemoryRepositoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider holding the same data set the seed migration inserts
    pub fn with_sample_data() -> Self {
        let provider = Self::new();
        for (idx, kind) in SEED_CATEGORIES.iter().enumerate() {
            provider.categories.insert(Category::new(idx as i32 + 1, *kind));
        }
        for (question, answer, difficulty, category) in SEED_QUESTIONS {
            let id = provider.questions.id_counter.fetch_add(1, Ordering::SeqCst);
            provider.questions.questions.insert(
                id,
                NewQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    difficulty,
                    category,
                }
                .with_id(id),
            );
        }
        provider
    }
}

impl RepositoryProvider for InMemoryRepositoryProvider {
    fn categories(&self) -> &dyn CategoryRepository {
        &self.categories
    }

    fn questions(&self) -> &dyn QuestionRepository {
        &self.questions
    }
}

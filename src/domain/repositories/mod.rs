//! Repository traits for the domain layer
//!
//! Contains:
//! - `RepositoryProvider`: unified access to all per-aggregate repositories
//! - `DomainResult`: standard result type for domain operations

use super::category::CategoryRepository;
use super::question::QuestionRepository;
use crate::shared::errors::DomainError;

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Provides access to all domain repositories.
///
/// Handlers receive this as an explicit handle through router state:
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let categories = repos.categories().find_all().await?;
///     let total = repos.questions().count().await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn categories(&self) -> &dyn CategoryRepository;
    fn questions(&self) -> &dyn QuestionRepository;
}

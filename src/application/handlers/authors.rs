//! Command and query handlers for authors.
//!
//! The list and detail read paths are cached; every write evicts the
//! matching author entries. Deleting an author cascades to their books
//! and sessions, so it also clears statistics and reading-derived
//! entries.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::cache::keys;
use crate::domain::catalog::Author;
use crate::domain::foundation::{AuthorId, DomainError, ErrorCode};
use crate::ports::{get_or_compute, AuthorRepository, ResponseCache};

/// Command to create a new author.
#[derive(Debug, Clone)]
pub struct CreateAuthorCommand {
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Handler for creating authors.
pub struct CreateAuthorHandler {
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl CreateAuthorHandler {
    pub fn new(authors: Arc<dyn AuthorRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { authors, cache }
    }

    pub async fn handle(&self, command: CreateAuthorCommand) -> Result<Author, DomainError> {
        let mut author = Author::new(AuthorId::new(), command.name)?;
        if command.bio.is_some() || command.image_url.is_some() {
            let name = author.name().to_string();
            author.update_details(name, command.bio, command.image_url)?;
        }
        self.authors.save(&author).await?;

        keys::invalidate_authors(self.cache.as_ref()).await;
        Ok(author)
    }
}

/// Query to fetch one author, cached under the author detail key.
#[derive(Debug, Clone)]
pub struct GetAuthorQuery {
    pub id: AuthorId,
}

/// Handler for fetching one author.
pub struct GetAuthorHandler {
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl GetAuthorHandler {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            authors,
            cache,
            ttl,
        }
    }

    pub async fn handle(&self, query: GetAuthorQuery) -> Result<Author, DomainError> {
        let authors = self.authors.clone();
        let id = query.id;
        get_or_compute(
            self.cache.as_ref(),
            &keys::author_detail(&id),
            Some(self.ttl),
            || async move {
                authors.find_by_id(&id).await?.ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::AuthorNotFound,
                        format!("Author not found: {}", id),
                    )
                })
            },
        )
        .await
    }
}

/// Handler for the cached author list.
pub struct ListAuthorsHandler {
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl ListAuthorsHandler {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            authors,
            cache,
            ttl,
        }
    }

    pub async fn handle(&self) -> Result<Vec<Author>, DomainError> {
        let authors = self.authors.clone();
        get_or_compute(
            self.cache.as_ref(),
            keys::AUTHORS_LIST,
            Some(self.ttl),
            || async move { authors.list().await },
        )
        .await
    }
}

/// Command to update an author.
#[derive(Debug, Clone)]
pub struct UpdateAuthorCommand {
    pub id: AuthorId,
    pub name: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
}

/// Handler for updating authors.
pub struct UpdateAuthorHandler {
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl UpdateAuthorHandler {
    pub fn new(authors: Arc<dyn AuthorRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { authors, cache }
    }

    pub async fn handle(&self, command: UpdateAuthorCommand) -> Result<Author, DomainError> {
        let mut author = self
            .authors
            .find_by_id(&command.id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::AuthorNotFound,
                    format!("Author not found: {}", command.id),
                )
            })?;

        author.update_details(command.name, command.bio, command.image_url)?;
        self.authors.update(&author).await?;

        keys::invalidate_author(self.cache.as_ref(), author.id()).await;
        // author names appear in the statistics rankings
        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(author)
    }
}

/// Handler for deleting authors.
pub struct DeleteAuthorHandler {
    authors: Arc<dyn AuthorRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl DeleteAuthorHandler {
    pub fn new(authors: Arc<dyn AuthorRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { authors, cache }
    }

    pub async fn handle(&self, id: AuthorId) -> Result<(), DomainError> {
        self.authors.delete(&id).await?;

        keys::invalidate_authors(self.cache.as_ref()).await;
        // books and sessions cascade with the author
        keys::invalidate_reading_data(self.cache.as_ref()).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::cache::InMemoryCache;
    use crate::application::handlers::test_support::MockAuthorRepository;
    use serde_json::json;

    const TTL: Duration = Duration::from_secs(60);

    #[tokio::test]
    async fn list_is_cached_between_calls() {
        let author = Author::new(AuthorId::new(), "Ted Chiang".to_string()).unwrap();
        let repo = Arc::new(MockAuthorRepository::with_authors(vec![author.clone()]));
        let cache = Arc::new(InMemoryCache::new());
        let handler = ListAuthorsHandler::new(repo.clone(), cache.clone(), TTL);

        let first = handler.handle().await.unwrap();
        assert_eq!(first.len(), 1);

        // a write bypassing the handlers is invisible until invalidation
        repo.save(&Author::new(AuthorId::new(), "New".to_string()).unwrap())
            .await
            .unwrap();
        let second = handler.handle().await.unwrap();
        assert_eq!(second.len(), 1);

        keys::invalidate_authors(cache.as_ref()).await;
        let third = handler.handle().await.unwrap();
        assert_eq!(third.len(), 2);
    }

    #[tokio::test]
    async fn get_author_misses_map_to_not_found() {
        let repo = Arc::new(MockAuthorRepository::default());
        let cache = Arc::new(InMemoryCache::new());
        let handler = GetAuthorHandler::new(repo, cache, TTL);

        let result = handler
            .handle(GetAuthorQuery {
                id: AuthorId::new(),
            })
            .await;
        assert!(matches!(
            result.unwrap_err().code,
            ErrorCode::AuthorNotFound
        ));
    }

    #[tokio::test]
    async fn create_author_evicts_author_entries() {
        let repo = Arc::new(MockAuthorRepository::default());
        let cache = Arc::new(InMemoryCache::new());
        cache.put(keys::AUTHORS_LIST, json!([]), None).await;

        let handler = CreateAuthorHandler::new(repo, cache.clone());
        handler
            .handle(CreateAuthorCommand {
                name: "Becky Chambers".to_string(),
                bio: None,
                image_url: None,
            })
            .await
            .unwrap();

        assert!(cache.get(keys::AUTHORS_LIST).await.is_none());
    }

    #[tokio::test]
    async fn update_author_evicts_detail_list_and_statistics() {
        let author = Author::new(AuthorId::new(), "Old Name".to_string()).unwrap();
        let repo = Arc::new(MockAuthorRepository::with_authors(vec![author.clone()]));
        let cache = Arc::new(InMemoryCache::new());
        cache
            .put(&keys::author_detail(author.id()), json!(1), None)
            .await;
        cache.put("stats:authors", json!(2), None).await;

        let handler = UpdateAuthorHandler::new(repo, cache.clone());
        handler
            .handle(UpdateAuthorCommand {
                id: *author.id(),
                name: "New Name".to_string(),
                bio: None,
                image_url: None,
            })
            .await
            .unwrap();

        assert!(cache.get(&keys::author_detail(author.id())).await.is_none());
        assert!(cache.get("stats:authors").await.is_none());
    }
}

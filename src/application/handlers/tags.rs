//! Command and query handlers for tags and their book assignments.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::cache::keys;
use crate::domain::catalog::{Tag, TagAssignment};
use crate::domain::foundation::{BookId, DomainError, ErrorCode, TagId};
use crate::ports::{get_or_compute, BookRepository, ResponseCache, TagRepository};

/// Command to create a new tag.
#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    pub name: String,
}

/// Handler for creating tags.
pub struct CreateTagHandler {
    tags: Arc<dyn TagRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl CreateTagHandler {
    pub fn new(tags: Arc<dyn TagRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { tags, cache }
    }

    pub async fn handle(&self, command: CreateTagCommand) -> Result<Tag, DomainError> {
        let tag = Tag::new(TagId::new(), command.name)?;
        self.tags.save(&tag).await?;

        keys::invalidate_tags(self.cache.as_ref()).await;
        Ok(tag)
    }
}

/// Query to fetch one tag, cached under the tag detail key.
#[derive(Debug, Clone)]
pub struct GetTagQuery {
    pub id: TagId,
}

/// Handler for fetching one tag.
pub struct GetTagHandler {
    tags: Arc<dyn TagRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl GetTagHandler {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self { tags, cache, ttl }
    }

    pub async fn handle(&self, query: GetTagQuery) -> Result<Tag, DomainError> {
        let tags = self.tags.clone();
        let id = query.id;
        get_or_compute(
            self.cache.as_ref(),
            &keys::tag_detail(&id),
            Some(self.ttl),
            || async move {
                tags.find_by_id(&id).await?.ok_or_else(|| {
                    DomainError::new(ErrorCode::TagNotFound, format!("Tag not found: {}", id))
                })
            },
        )
        .await
    }
}

/// Handler for the cached tag list.
pub struct ListTagsHandler {
    tags: Arc<dyn TagRepository>,
    cache: Arc<dyn ResponseCache>,
    ttl: Duration,
}

impl ListTagsHandler {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        cache: Arc<dyn ResponseCache>,
        ttl: Duration,
    ) -> Self {
        Self { tags, cache, ttl }
    }

    pub async fn handle(&self) -> Result<Vec<Tag>, DomainError> {
        let tags = self.tags.clone();
        get_or_compute(
            self.cache.as_ref(),
            keys::TAGS_LIST,
            Some(self.ttl),
            || async move { tags.list().await },
        )
        .await
    }
}

/// Command to rename a tag.
#[derive(Debug, Clone)]
pub struct UpdateTagCommand {
    pub id: TagId,
    pub name: String,
}

/// Handler for renaming tags.
pub struct UpdateTagHandler {
    tags: Arc<dyn TagRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl UpdateTagHandler {
    pub fn new(tags: Arc<dyn TagRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { tags, cache }
    }

    pub async fn handle(&self, command: UpdateTagCommand) -> Result<Tag, DomainError> {
        let mut tag = self.tags.find_by_id(&command.id).await?.ok_or_else(|| {
            DomainError::new(
                ErrorCode::TagNotFound,
                format!("Tag not found: {}", command.id),
            )
        })?;

        tag.rename(command.name)?;
        self.tags.update(&tag).await?;

        keys::invalidate_tag(self.cache.as_ref(), tag.id()).await;
        // tag names appear in the statistics rankings
        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(tag)
    }
}

/// Handler for deleting tags.
pub struct DeleteTagHandler {
    tags: Arc<dyn TagRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl DeleteTagHandler {
    pub fn new(tags: Arc<dyn TagRepository>, cache: Arc<dyn ResponseCache>) -> Self {
        Self { tags, cache }
    }

    pub async fn handle(&self, id: TagId) -> Result<(), DomainError> {
        self.tags.delete(&id).await?;

        keys::invalidate_tags(self.cache.as_ref()).await;
        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(())
    }
}

/// Command to attach or detach a tag on a book.
#[derive(Debug, Clone)]
pub struct TagAssignmentCommand {
    pub book_id: BookId,
    pub tag_id: TagId,
}

/// Handler for tag assignment changes.
pub struct AssignTagHandler {
    tags: Arc<dyn TagRepository>,
    books: Arc<dyn BookRepository>,
    cache: Arc<dyn ResponseCache>,
}

impl AssignTagHandler {
    pub fn new(
        tags: Arc<dyn TagRepository>,
        books: Arc<dyn BookRepository>,
        cache: Arc<dyn ResponseCache>,
    ) -> Self {
        Self {
            tags,
            books,
            cache,
        }
    }

    async fn check_pair(&self, command: &TagAssignmentCommand) -> Result<(), DomainError> {
        if self.books.find_by_id(&command.book_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::BookNotFound,
                format!("Book not found: {}", command.book_id),
            ));
        }
        if self.tags.find_by_id(&command.tag_id).await?.is_none() {
            return Err(DomainError::new(
                ErrorCode::TagNotFound,
                format!("Tag not found: {}", command.tag_id),
            ));
        }
        Ok(())
    }

    pub async fn assign(&self, command: TagAssignmentCommand) -> Result<(), DomainError> {
        self.check_pair(&command).await?;
        self.tags
            .assign(&TagAssignment::new(command.book_id, command.tag_id))
            .await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(())
    }

    pub async fn unassign(&self, command: TagAssignmentCommand) -> Result<(), DomainError> {
        self.tags
            .unassign(&TagAssignment::new(command.book_id, command.tag_id))
            .await?;

        keys::invalidate_statistics(self.cache.as_ref()).await;
        Ok(())
    }
}

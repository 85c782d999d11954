//! Article domain model.
//!
//! # Invariants
//! - `title` assigned through `set_title` is always 3..=50 characters.
//! - `author_id`/`magazine_id` are not checked against existing rows.

use crate::model::author::AuthorId;
use crate::model::magazine::MagazineId;
use crate::model::validation::{validate_article_title, ModelValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row id in the `articles` table.
pub type ArticleId = i64;

/// One piece of writing, owned by one author and published in one magazine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: Option<ArticleId>,
    title: String,
    content: String,
    author_id: AuthorId,
    magazine_id: MagazineId,
}

impl Article {
    /// Creates an in-memory article. The title is checked by `validate`, not
    /// here.
    pub fn new(
        id: Option<ArticleId>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: AuthorId,
        magazine_id: MagazineId,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            author_id,
            magazine_id,
        }
    }

    pub fn id(&self) -> Option<ArticleId> {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// # Errors
    /// - `ArticleTitleLength` when the title is 2 characters or shorter, or
    ///   51 characters or longer.
    pub fn set_title(&mut self, value: impl Into<String>) -> Result<(), ModelValidationError> {
        let value = value.into();
        validate_article_title(&value)?;
        self.title = value;
        Ok(())
    }

    /// Checks the current title against the length rule.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_article_title(&self.title)
    }

    pub(crate) fn set_id(&mut self, id: ArticleId) {
        self.id = Some(id);
    }
}

impl Display for Article {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Article {}>", self.title)
    }
}

//! Author domain model.
//!
//! # Responsibility
//! - Represent one writer row from `authors`.
//! - Guard the once-only name assignment.
//!
//! # Invariants
//! - `name` transitions from `None` to `Some` at most once and never changes
//!   afterwards.
//! - `id` is assigned by the store and never rewritten by callers.

use crate::model::validation::ModelValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row id in the `authors` table.
pub type AuthorId = i64;

/// A writer. Magazines are reached only through the author's articles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    id: Option<AuthorId>,
    /// `None` means the name has not been assigned yet.
    name: Option<String>,
}

impl Author {
    /// Creates an in-memory author whose name is already fixed.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Creates an author that still accepts exactly one name assignment.
    pub fn unnamed() -> Self {
        Self {
            id: None,
            name: None,
        }
    }

    /// Hydrates an author from a stored row.
    pub fn from_row(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: Some(name.into()),
        }
    }

    pub fn id(&self) -> Option<AuthorId> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn has_name(&self) -> bool {
        self.name.is_some()
    }

    /// Assigns the name if none was set before.
    ///
    /// # Errors
    /// - `ImmutableField { field: "name" }` once a name exists, even when the
    ///   new value is identical.
    pub fn assign_name(&mut self, value: impl Into<String>) -> Result<(), ModelValidationError> {
        if self.name.is_some() {
            return Err(ModelValidationError::ImmutableField { field: "name" });
        }
        self.name = Some(value.into());
        Ok(())
    }

    pub(crate) fn set_id(&mut self, id: AuthorId) {
        self.id = Some(id);
    }
}

impl Display for Author {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Author {}>", self.name.as_deref().unwrap_or(""))
    }
}

//! Magazine domain model.
//!
//! # Responsibility
//! - Represent one publication row from `magazines`.
//! - Validate `name` and `category` on assignment.
//!
//! # Invariants
//! - Setters validate before mutating; a rejected value leaves the magazine
//!   untouched.
//! - The constructor does not validate, so rows read back from the store are
//!   always representable.

use crate::model::validation::{
    validate_magazine_category, validate_magazine_name, ModelValidationError,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Row id in the `magazines` table.
pub type MagazineId = i64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    id: Option<MagazineId>,
    name: String,
    category: Option<String>,
}

impl Magazine {
    pub fn new(
        id: Option<MagazineId>,
        name: impl Into<String>,
        category: Option<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
        }
    }

    /// Shorthand for a new magazine without id or category.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(None, name, None)
    }

    pub fn id(&self) -> Option<MagazineId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    /// # Errors
    /// - `MagazineNameLength` when the name is not 2..=16 characters.
    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), ModelValidationError> {
        let value = value.into();
        validate_magazine_name(&value)?;
        self.name = value;
        Ok(())
    }

    /// # Errors
    /// - `EmptyCategory` for `Some("")`.
    pub fn set_category(&mut self, value: Option<String>) -> Result<(), ModelValidationError> {
        validate_magazine_category(value.as_deref())?;
        self.category = value;
        Ok(())
    }

    /// Checks both field rules against the current values.
    pub fn validate(&self) -> Result<(), ModelValidationError> {
        validate_magazine_name(&self.name)?;
        validate_magazine_category(self.category.as_deref())
    }

    pub(crate) fn set_id(&mut self, id: MagazineId) {
        self.id = Some(id);
    }
}

impl Default for Magazine {
    fn default() -> Self {
        Self::new(None, "", None)
    }
}

impl Display for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Magazine {}>", self.name)
    }
}

//! Domain model for the authors/magazines/articles store.
//!
//! # Responsibility
//! - Define the in-memory entities mirrored by each table row.
//! - Enforce field rules at assignment time, before any persistence.
//!
//! # Invariants
//! - Entity ids are `None` until a row exists for them.
//! - A failed assignment leaves the entity unchanged.

pub mod article;
pub mod author;
pub mod magazine;
pub mod validation;

//! Field rules shared by entity setters and repositories.
//!
//! Lengths are counted in characters, not bytes.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Inclusive bounds for `Magazine::name`.
pub const MAGAZINE_NAME_MIN_CHARS: usize = 2;
pub const MAGAZINE_NAME_MAX_CHARS: usize = 16;

/// Inclusive bounds for `Article::title`.
pub const ARTICLE_TITLE_MIN_CHARS: usize = 3;
pub const ARTICLE_TITLE_MAX_CHARS: usize = 50;

/// Rejected field assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelValidationError {
    /// Magazine name length is outside `2..=16`.
    MagazineNameLength { len: usize },
    /// Magazine category was given but empty.
    EmptyCategory,
    /// Article title length is outside `3..=50`.
    ArticleTitleLength { len: usize },
    /// Field may only be assigned once.
    ImmutableField { field: &'static str },
}

impl Display for ModelValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MagazineNameLength { len } => write!(
                f,
                "magazine name must be between {MAGAZINE_NAME_MIN_CHARS} and {MAGAZINE_NAME_MAX_CHARS} characters, got {len}"
            ),
            Self::EmptyCategory => write!(f, "magazine category cannot be empty"),
            Self::ArticleTitleLength { len } => write!(
                f,
                "article title must be between {ARTICLE_TITLE_MIN_CHARS} and {ARTICLE_TITLE_MAX_CHARS} characters, got {len}"
            ),
            Self::ImmutableField { field } => {
                write!(f, "field `{field}` cannot be changed once set")
            }
        }
    }
}

impl Error for ModelValidationError {}

pub fn validate_magazine_name(value: &str) -> Result<(), ModelValidationError> {
    let len = value.chars().count();
    if !(MAGAZINE_NAME_MIN_CHARS..=MAGAZINE_NAME_MAX_CHARS).contains(&len) {
        return Err(ModelValidationError::MagazineNameLength { len });
    }
    Ok(())
}

/// `None` is accepted; `Some("")` is not.
pub fn validate_magazine_category(value: Option<&str>) -> Result<(), ModelValidationError> {
    match value {
        Some(category) if category.is_empty() => Err(ModelValidationError::EmptyCategory),
        _ => Ok(()),
    }
}

pub fn validate_article_title(value: &str) -> Result<(), ModelValidationError> {
    let len = value.chars().count();
    if !(ARTICLE_TITLE_MIN_CHARS..=ARTICLE_TITLE_MAX_CHARS).contains(&len) {
        return Err(ModelValidationError::ArticleTitleLength { len });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{
        validate_article_title, validate_magazine_category, validate_magazine_name,
        ModelValidationError,
    };

    #[test]
    fn magazine_name_bounds_are_inclusive() {
        assert!(validate_magazine_name("AB").is_ok());
        assert!(validate_magazine_name(&"A".repeat(16)).is_ok());
        assert_eq!(
            validate_magazine_name("A"),
            Err(ModelValidationError::MagazineNameLength { len: 1 })
        );
        assert_eq!(
            validate_magazine_name(&"A".repeat(17)),
            Err(ModelValidationError::MagazineNameLength { len: 17 })
        );
    }

    #[test]
    fn magazine_name_counts_chars_not_bytes() {
        // 16 chars, 32 bytes.
        assert!(validate_magazine_name(&"é".repeat(16)).is_ok());
    }

    #[test]
    fn category_rejects_only_empty_string() {
        assert!(validate_magazine_category(None).is_ok());
        assert!(validate_magazine_category(Some("Tech")).is_ok());
        assert_eq!(
            validate_magazine_category(Some("")),
            Err(ModelValidationError::EmptyCategory)
        );
    }

    #[test]
    fn article_title_rejects_two_and_fifty_one_chars() {
        assert!(validate_article_title("ABC").is_ok());
        assert!(validate_article_title(&"A".repeat(50)).is_ok());
        assert_eq!(
            validate_article_title("AB"),
            Err(ModelValidationError::ArticleTitleLength { len: 2 })
        );
        assert_eq!(
            validate_article_title(&"A".repeat(51)),
            Err(ModelValidationError::ArticleTitleLength { len: 51 })
        );
    }
}

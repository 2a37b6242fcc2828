use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Maximum slug length in characters.
pub const SLUG_MAX_LEN: usize = 250;

/// URL-safe identifier for a post: ASCII letters, digits, hyphens and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate an explicit slug.
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::empty("slug"));
        }
        let len = value.chars().count();
        if len > SLUG_MAX_LEN {
            return Err(DomainError::too_long("slug", SLUG_MAX_LEN, len));
        }
        if let Some(bad) = value.chars().find(|c| !is_slug_char(*c)) {
            return Err(DomainError::Validation(format!(
                "slug may only contain letters, numbers, underscores or hyphens (found {bad:?})"
            )));
        }
        Ok(Self(value))
    }

    /// Derive a slug from a post title.
    ///
    /// Lowercases ASCII alphanumerics, collapses every other run of characters
    /// into a single hyphen and trims hyphens from both ends.
    pub fn from_title(title: &str) -> Result<Self, DomainError> {
        let mut slug = String::with_capacity(title.len());
        let mut pending_dash = false;

        for c in title.chars() {
            if c.is_ascii_alphanumeric() || c == '_' {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_dash = true;
            }
        }

        // Slug characters are ASCII, so byte truncation is char-safe.
        slug.truncate(SLUG_MAX_LEN);
        let slug = slug.trim_end_matches('-').to_string();

        if slug.is_empty() {
            return Err(DomainError::Validation(format!(
                "cannot derive a slug from title {title:?}"
            )));
        }
        Ok(Self(slug))
    }

    /// Wrap a value read back from storage, where it was validated on write.
    pub(crate) fn from_stored(value: String) -> Self {
        Self(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '-' || c == '_'
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_url_safe_values() {
        let slug = Slug::parse("hello-world_2024").unwrap();
        assert_eq!(slug.as_str(), "hello-world_2024");
    }

    #[test]
    fn test_parse_rejects_spaces_and_slashes() {
        assert!(Slug::parse("hello world").is_err());
        assert!(Slug::parse("a/b").is_err());
        assert!(Slug::parse("").is_err());
    }

    #[test]
    fn test_parse_enforces_max_length() {
        assert!(Slug::parse("a".repeat(SLUG_MAX_LEN)).is_ok());
        assert!(Slug::parse("a".repeat(SLUG_MAX_LEN + 1)).is_err());
    }

    #[test]
    fn test_from_title() {
        let slug = Slug::from_title("  Hello, World! Rust & You ").unwrap();
        assert_eq!(slug.as_str(), "hello-world-rust-you");
    }

    #[test]
    fn test_from_title_truncates() {
        let title = format!("{} tail", "x".repeat(SLUG_MAX_LEN));
        let slug = Slug::from_title(&title).unwrap();
        assert_eq!(slug.as_str().len(), SLUG_MAX_LEN);
    }

    #[test]
    fn test_from_title_without_usable_chars() {
        assert!(Slug::from_title("!!! ???").is_err());
    }
}

//! src/domain/subscriber_name.rs

use unicode_segmentation::UnicodeSegmentation;

use crate::domain::ValidationError;

/// A validated subscriber first name: non-empty, at most 256 graphemes, free
/// of characters that could break out of HTML or JSON contexts.
///
/// The inner field stays private so the value cannot bypass `parse` or be
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct SubscriberName(String);

impl SubscriberName {
    pub fn parse(s: String) -> Result<SubscriberName, ValidationError> {
        let is_empty_or_whitespace = s.trim().is_empty();
        let is_too_long = s.graphemes(true).count() > 256;
        let forbidden_characters = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];
        let contains_forbidden_characters = s.chars().any(|g| forbidden_characters.contains(&g));
        if is_empty_or_whitespace || is_too_long || contains_forbidden_characters {
            Err(ValidationError::InvalidName(s))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for SubscriberName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

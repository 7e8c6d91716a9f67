//! Template helpers - variable extraction and content checks

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `{{identifier}}` where identifier is one or more word characters
    static ref VARIABLE_RE: Regex = Regex::new(r"\{\{(\w+)\}\}").unwrap();
}

/// Minimum trimmed length for content to count as well-formed
pub const MIN_CONTENT_CHARS: usize = 10;

/// Extract template variable names in order of appearance, duplicates included
pub fn extract_variables(content: &str) -> Vec<String> {
    VARIABLE_RE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Advisory check: trimmed content must hold at least `MIN_CONTENT_CHARS` characters.
///
/// Stricter than the entity's own minimum and not applied on creation.
pub fn validate_content(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty() && trimmed.chars().count() >= MIN_CONTENT_CHARS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_variables_in_order() {
        assert_eq!(
            extract_variables("Hello {{name}}, day {{day}}."),
            vec!["name", "day"]
        );
    }

    #[test]
    fn test_extract_variables_keeps_duplicates() {
        assert_eq!(
            extract_variables("{{a}} {{b}} {{a}}"),
            vec!["a", "b", "a"]
        );
    }

    #[test]
    fn test_extract_variables_rejects_malformed() {
        assert!(extract_variables("{{}}").is_empty());
        assert!(extract_variables("{{var!}}").is_empty());
        assert!(extract_variables("{single} {{ spaced }}").is_empty());
        assert!(extract_variables("no variables here").is_empty());
    }

    #[test]
    fn test_extract_variables_word_characters() {
        assert_eq!(
            extract_variables("{{user_name1}} and {{2nd}}"),
            vec!["user_name1", "2nd"]
        );
    }

    #[test]
    fn test_validate_content() {
        assert!(!validate_content(""));
        assert!(!validate_content("          "));
        assert!(!validate_content("   short   "));
        assert!(validate_content("0123456789"));
        assert!(validate_content("  Valid content here.  "));
    }
}

//! Page lookup error types.

use super::PageId;
use thiserror::Error;

/// Errors raised when resolving a page by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("unknown page identifier `{0}` (expected one of: {expected})", expected = PageId::KEYS.join(", "))]
    UnknownPageIdentifier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_error_display() {
        let err = PageError::UnknownPageIdentifier("blog".to_string());
        let display = format!("{err}");
        assert!(display.contains("unknown page identifier"));
        assert!(display.contains("`blog`"));
        assert!(display.contains("contact"));
    }
}

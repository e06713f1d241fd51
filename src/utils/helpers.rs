//! Helper functions and utilities
//! 
//! This module contains common helper functions used throughout the application.

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Name used to greet a user, falling back when Telegram gives us nothing usable
pub fn greeting_name(first_name: Option<&str>) -> String {
    match first_name.map(normalize_whitespace) {
        Some(name) if !name.is_empty() => name,
        _ => "there".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
        assert_eq!(truncate_text("héllo wörld", 8), "héllo...");
    }

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  Track   Order \n"), "Track Order");
    }

    #[test]
    fn test_greeting_name() {
        assert_eq!(greeting_name(Some("Asha")), "Asha");
        assert_eq!(greeting_name(Some("   ")), "there");
        assert_eq!(greeting_name(None), "there");
    }
}

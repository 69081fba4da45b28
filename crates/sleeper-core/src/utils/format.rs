/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// One decimal place; a missing value renders as an empty field, not zero.
pub fn format_points(points: Option<f64>) -> String {
    points.map(|p| format!("{:.1}", p)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("Hello", 10), "Hello");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
        assert_eq!(truncate_string("Ünïcödé names", 7), "Ünïc...");
    }

    #[test]
    fn test_contains_ignore_case() {
        assert!(contains_ignore_case("2024 Dynasty League", "dynasty"));
        assert!(contains_ignore_case("2024 Dynasty League", "ASTY LEA"));
        assert!(!contains_ignore_case("2024 Keeper League", "dynasty"));
    }

    #[test]
    fn test_format_points() {
        assert_eq!(format_points(Some(24.36)), "24.4");
        assert_eq!(format_points(Some(0.0)), "0.0");
        assert_eq!(format_points(None), "");
    }
}

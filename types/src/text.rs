//! Small pure text helpers.

/// Truncate a string to a maximum length, adding `...` if needed.
///
/// - Trims surrounding whitespace before truncating.
/// - Uses `char` count (not bytes) to avoid splitting Unicode scalar values.
/// - Enforces a minimum `max` of 3 so the ellipsis fits.
#[must_use]
pub fn truncate_with_ellipsis(raw: &str, max: usize) -> String {
    let max = max.max(3);
    let trimmed = raw.trim();
    if trimmed.chars().count() <= max {
        return trimmed.to_string();
    }
    let head: String = trimmed.chars().take(max.saturating_sub(3)).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::truncate_with_ellipsis;

    #[test]
    fn short_string_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 10), "hello");
    }

    #[test]
    fn exact_length_unchanged() {
        assert_eq!(truncate_with_ellipsis("hello", 5), "hello");
    }

    #[test]
    fn long_string_truncated_within_budget() {
        assert_eq!(truncate_with_ellipsis("hello world", 8), "hello...");
    }

    #[test]
    fn surrounding_whitespace_trimmed_first() {
        assert_eq!(truncate_with_ellipsis("  hi  ", 10), "hi");
    }

    #[test]
    fn tiny_max_clamped_to_ellipsis() {
        assert_eq!(truncate_with_ellipsis("abcdef", 1), "...");
    }

    #[test]
    fn multibyte_not_split() {
        assert_eq!(truncate_with_ellipsis("héllo wörld", 8), "héllo...");
    }
}

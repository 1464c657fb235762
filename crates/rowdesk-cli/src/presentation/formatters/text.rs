/// Truncate to at most `max` characters, marking the cut with "…".
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let kept: String = text.chars().take(max - 1).collect();
    format!("{}…", kept)
}

/// Arrow for a serialized sort direction ("asc" / "desc").
pub fn sort_arrow(dir: &str) -> &'static str {
    match dir {
        "desc" => "▼",
        _ => "▲",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_is_untouched() {
        assert_eq!(truncate("Record 1", 20), "Record 1");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate("ääääää", 4), "äää…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_sort_arrow() {
        assert_eq!(sort_arrow("asc"), "▲");
        assert_eq!(sort_arrow("desc"), "▼");
    }
}

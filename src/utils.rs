/// Truncate text to at most `max_chars` characters. Indexes by char, never
/// by byte: Hangul and emoji are multi-byte and byte slicing would split them.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text.to_string(),
    }
}

/// Strip HTML tags from text and decode the common entities, collapsing
/// whitespace runs into single spaces.
pub fn strip_html(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
        .replace("&nbsp;", " ")
        .replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        let korean = "오픈AI가 새로운 추론 모델을 공개했다";
        let truncated = truncate_chars(korean, 5);
        assert_eq!(truncated, "오픈AI가");

        // Shorter than the limit passes through untouched
        assert_eq!(truncate_chars("short", 100), "short");
        assert_eq!(truncate_chars("", 10), "");
    }

    #[test]
    fn strip_html_removes_tags_and_entities() {
        let html = "<p>OpenAI &amp; Google announced <b>new</b>&nbsp;models.</p>";
        assert_eq!(strip_html(html), "OpenAI & Google announced new models.");
    }

    #[test]
    fn strip_html_collapses_whitespace() {
        let html = "<div>first\n\n  second</div>";
        assert_eq!(strip_html(html), "first second");
    }
}

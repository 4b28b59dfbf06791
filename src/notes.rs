//! Note content helpers: escaping, Markdown rendering, tag parsing and search.

use crate::models::{Note, COLOR_THEMES};
use pulldown_cmark::{Options, Parser};

// ============================================================================
// Text Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

// ============================================================================
// Markdown Rendering
// ============================================================================

pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(content, options);
    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);
    // Sanitize HTML to prevent XSS from raw HTML in markdown
    ammonia::clean(&html_output)
}

// ============================================================================
// Tags
// ============================================================================

/// Split a comma separated tag string. Blank entries and repeats are dropped,
/// first occurrence order is kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for name in raw.split(',').map(str::trim).filter(|n| !n.is_empty()) {
        if !tags.iter().any(|t| t == name) {
            tags.push(name.to_string());
        }
    }
    tags
}

/// A submitted color theme, if it is one the board knows.
pub fn known_color(raw: &str) -> Option<String> {
    let raw = raw.trim();
    COLOR_THEMES
        .iter()
        .find(|&&c| c == raw)
        .map(|c| c.to_string())
}

// ============================================================================
// Search
// ============================================================================

/// Case-insensitive substring match on title or content.
pub fn note_matches(note: &Note, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return false;
    }
    note.title.to_lowercase().contains(&q) || note.content.to_lowercase().contains(&q)
}

// ============================================================================
// Uploads
// ============================================================================

/// Reduce an uploaded file name to a safe basename.
pub fn sanitize_filename(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or("");
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_render_markdown_strips_script() {
        let html = render_markdown("# Title\n\n<script>alert(1)</script>\n\n**bold**");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("work, ideas ,, work,home"), vec!["work", "ideas", "home"]);
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_known_color() {
        assert_eq!(known_color(" card-red "), Some("card-red".to_string()));
        assert_eq!(known_color("red; background: url(x)"), None);
        assert_eq!(known_color(""), None);
    }

    #[test]
    fn test_note_matches() {
        let note = Note {
            id: 1,
            title: "Reading List".to_string(),
            content: "Dune, Neuromancer".to_string(),
            color: "card-blue".to_string(),
            image_filename: None,
            tags: vec![],
            is_public: false,
            public_id: None,
            created_at: Utc::now(),
        };
        assert!(note_matches(&note, "reading"));
        assert!(note_matches(&note, "NEURO"));
        assert!(!note_matches(&note, "foundation"));
        assert!(!note_matches(&note, "   "));
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("my photo (1).jpg"), "my_photo__1_.jpg");
        assert_eq!(sanitize_filename("C:\\Users\\me\\cat.png"), "cat.png");
        assert_eq!(sanitize_filename("..."), "upload");
    }
}

//! Standalone pages: public note view, search results and login.

use crate::models::Note;
use crate::notes::{html_escape, render_markdown};

use super::board::tag_chips;
use super::components::{base_html, AuthLink};

/// Public, read-only view of a shared note.
pub fn render_shared(note: &Note, image_url: Option<&str>) -> String {
    let image = match image_url {
        Some(url) => format!(
            r#"<div class="modal-image"><img src="{}" alt=""></div>"#,
            html_escape(url)
        ),
        None => String::new(),
    };

    let html = format!(
        r#"<article class="shared-note note-modal {color}">
            <h1>{title}</h1>
            {image}
            <div class="note-content">{content}</div>
            <div class="note-tags">{tags}</div>
            <p class="meta">{created}</p>
        </article>"#,
        color = html_escape(&note.color),
        title = html_escape(&note.title),
        image = image,
        content = render_markdown(&note.content),
        tags = tag_chips(&note.tags),
        created = note.created_at.format("%Y-%m-%d"),
    );

    base_html(&note.title, &html, None, AuthLink::None)
}

pub fn render_search(query: &str, results: &[Note], auth: AuthLink) -> String {
    if query.trim().is_empty() {
        return base_html("Search", "<p>Enter a search term.</p>", Some(query), auth);
    }

    let mut html = format!(
        "<h1>Search: \"{}\"</h1><p>{} results</p><div class=\"search-results\">",
        html_escape(query),
        results.len()
    );

    for note in results {
        let snippet: String = note.content.chars().take(160).collect();
        html.push_str(&format!(
            r#"<div class="result">
                <a href="/notes?open={}">{}</a>
                <div class="note-preview">{}</div>
            </div>"#,
            note.id,
            html_escape(&note.title),
            html_escape(&snippet)
        ));
    }

    html.push_str("</div>");
    base_html("Search", &html, Some(query), auth)
}

pub fn render_login(error: Option<&str>) -> String {
    let message = match error {
        Some(msg) => format!(r#"<div class="message error">{}</div>"#, html_escape(msg)),
        None => String::new(),
    };

    let html = format!(
        r#"
        <div class="login-form">
            {}
            <h1>Login</h1>
            <form method="POST" action="/login">
                <input type="password" name="password" placeholder="Password" autofocus required>
                <button type="submit" class="btn">Login</button>
            </form>
        </div>
    "#,
        message
    );

    base_html("Login", &html, None, AuthLink::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn note() -> Note {
        Note {
            id: 4,
            title: "Trip <plan>".to_string(),
            content: "**Day 1**\n\n<img src=x onerror=alert(1)>".to_string(),
            color: "card-green".to_string(),
            image_filename: None,
            tags: vec!["travel".to_string()],
            is_public: true,
            public_id: Some("pid".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_shared_page_sanitizes() {
        let html = render_shared(&note(), Some("/uploads/map.png"));
        assert!(html.contains("<strong>Day 1</strong>"));
        assert!(!html.contains("onerror"));
        assert!(html.contains("Trip &lt;plan&gt;"));
        assert!(html.contains(r#"src="/uploads/map.png""#));
        assert!(html.contains(r#"<span class="tag-chip">travel</span>"#));
    }

    #[test]
    fn test_search_page() {
        let html = render_search("trip", &[note()], AuthLink::None);
        assert!(html.contains("1 results"));
        assert!(html.contains(r#"href="/notes?open=4""#));

        let empty = render_search("  ", &[], AuthLink::None);
        assert!(empty.contains("Enter a search term."));
    }

    #[test]
    fn test_login_page_error() {
        assert!(render_login(Some("Invalid password.")).contains("Invalid password."));
        assert!(!render_login(None).contains("message error"));
    }
}

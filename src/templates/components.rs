//! Shared HTML components: navigation bar and the base page template.

use crate::notes::html_escape;

use super::styles::STYLE;

/// What the nav bar offers for authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthLink {
    /// No password configured.
    None,
    Login,
    Logout,
}

impl AuthLink {
    pub fn new(auth_enabled: bool, logged_in: bool) -> Self {
        match (auth_enabled, logged_in) {
            (false, _) => AuthLink::None,
            (true, true) => AuthLink::Logout,
            (true, false) => AuthLink::Login,
        }
    }
}

// ============================================================================
// Navigation Bar
// ============================================================================

pub fn nav_bar(search_query: Option<&str>, auth: AuthLink) -> String {
    let query_val = search_query.unwrap_or("");
    let auth_link = match auth {
        AuthLink::Logout => r#"<a href="/logout">Logout</a>"#,
        AuthLink::Login => r#"<a href="/login">Login</a>"#,
        AuthLink::None => "",
    };

    format!(
        r#"<nav class="nav-bar">
            <a href="/notes">Notes</a>
            <a href="/export_data">Export</a>
            <span class="spacer"></span>
            <form class="search-box" action="/search" method="get">
                <input type="text" name="q" placeholder="Search..." value="{}">
                <button type="submit">Go</button>
            </form>
            {}
        </nav>"#,
        html_escape(query_val),
        auth_link
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, search_query: Option<&str>, auth: AuthLink) -> String {
    page_shell(title, content, nav_bar(search_query, auth), "", "")
}

/// Base template with a body class and an inline script appended.
pub fn page_shell(
    title: &str,
    content: &str,
    nav: String,
    body_class: &str,
    script: &str,
) -> String {
    let body_attr = if body_class.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, body_class)
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body{body_attr}>
    {nav}
    <div class="container">
        {content}
    </div>
    {script}
</body>
</html>"#,
        title = html_escape(title),
        STYLE = STYLE,
        body_attr = body_attr,
        nav = nav,
        content = content,
        script = script,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_link() {
        assert_eq!(AuthLink::new(false, false), AuthLink::None);
        assert_eq!(AuthLink::new(false, true), AuthLink::None);
        assert_eq!(AuthLink::new(true, true), AuthLink::Logout);
        assert_eq!(AuthLink::new(true, false), AuthLink::Login);
    }

    #[test]
    fn test_nav_escapes_query() {
        let nav = nav_bar(Some("<b>"), AuthLink::Login);
        assert!(nav.contains("&lt;b&gt;"));
        assert!(nav.contains("/login"));
    }

    #[test]
    fn test_base_html_escapes_title() {
        let html = base_html("a & b", "<p>x</p>", None, AuthLink::None);
        assert!(html.contains("<title>a &amp; b</title>"));
        assert!(html.contains("<p>x</p>"));
        assert!(!html.contains("Logout"));
    }
}

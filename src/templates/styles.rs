//! CSS styles for the notes board.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base0: #839496;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --yellow: #b58900;
    --orange: #cb4b16;
    --red: #dc322f;
    --magenta: #d33682;
    --violet: #6c71c4;
    --blue: #268bd2;
    --cyan: #2aa198;
    --green: #859900;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
}
body.scroll-locked { overflow: hidden; }

.container { max-width: 1100px; margin: 0 auto; padding: 1rem; }

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

h1, h2, h3 { font-weight: 600; margin-top: 1em; margin-bottom: 0.5em; }
h1 { font-size: 1.5rem; }

.nav-bar {
    position: sticky;
    top: 0;
    background: var(--bg);
    border-bottom: 1px solid var(--border);
    padding: 0.5rem 1rem;
    display: flex;
    gap: 1rem;
    align-items: center;
    flex-wrap: wrap;
    z-index: 100;
}
.nav-bar a { font-size: 0.9rem; }
.nav-bar .spacer { flex: 1; }

.search-box { display: flex; gap: 0.5rem; }
.search-box input, .search-box button {
    padding: 0.4rem 0.75rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    background: var(--bg);
    color: var(--fg);
    font-size: 0.9rem;
}
.search-box button { background: var(--accent); cursor: pointer; }

.btn {
    padding: 0.5rem 1rem;
    border: 1px solid var(--base1);
    border-radius: 4px;
    background: var(--blue);
    color: var(--base3);
    cursor: pointer;
    font-size: 0.9rem;
    font-family: inherit;
    text-decoration: none;
    display: inline-block;
}
.btn:hover { background: var(--cyan); border-color: var(--cyan); }
.btn.secondary { background: var(--base2); color: var(--base00); border-color: var(--base1); }
.btn.danger { background: var(--red); border-color: var(--red); }
.btn[disabled] { opacity: 0.6; cursor: progress; }

.message { padding: 0.75rem 1rem; border-radius: 4px; margin: 1rem 0; }
.message.error { background: #fbe3e0; color: var(--red); }

/* Board header */
.board-header { display: flex; align-items: center; gap: 1rem; flex-wrap: wrap; }
.board-header .greeting { flex: 1; font-size: 1.2rem; }
#userNameDisplay:empty::before { content: attr(data-placeholder); color: var(--muted); }
.name-edit-btn { background: none; border: none; color: var(--muted); cursor: pointer; }

.view-switcher { display: flex; gap: 0.25rem; }
.view-btn {
    padding: 0.3rem 0.8rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    color: var(--fg);
}
.view-btn.active { background: var(--blue); color: var(--base3); border-color: var(--blue); }

.add-note { margin: 1rem 0; padding: 1rem; border: 1px solid var(--border); border-radius: 8px; }
.add-note input, .add-note textarea, .add-note select,
.note-modal input, .note-modal textarea, .note-modal select {
    width: 100%;
    padding: 0.4rem 0.6rem;
    margin-bottom: 0.5rem;
    border: 1px solid var(--border);
    border-radius: 4px;
    font-family: inherit;
    background: var(--bg);
    color: var(--fg);
}

/* Cards */
.notes-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(220px, 1fr));
    gap: 1rem;
}
.note-card {
    display: block;
    padding: 1rem;
    border-radius: 8px;
    color: var(--base02);
    overflow: hidden;
    border: 1px solid var(--border);
}
.note-card:hover { text-decoration: none; box-shadow: 0 2px 8px rgba(0,0,0,0.1); }
.note-card img { max-width: 100%; border-radius: 4px; }
.note-card h3 { margin-top: 0; font-size: 1rem; }
.note-preview { font-size: 0.85rem; white-space: pre-wrap; }

.card-blue { background: #e3f0fa; }
.card-green { background: #eef3d6; }
.card-yellow { background: #f8efcc; }
.card-red { background: #fbe3e0; }
.card-violet { background: #e9e9f7; }

.bento-view { grid-auto-rows: 160px; grid-auto-flow: dense; }
.bento-view .span-col-2 { grid-column: span 2; }
.bento-view .span-row-2 { grid-row: span 2; }
.bento-view .span-big { grid-column: span 2; grid-row: span 2; }

.gallery-view { display: flex; gap: 0.5rem; height: 420px; }
.gallery-view .note-card { flex: 0 0 60px; transition: flex 0.3s ease; }
.gallery-view .note-card.active { flex: 1 1 auto; }
.gallery-view .note-card:not(.active) .note-preview,
.gallery-view .note-card:not(.active) img { display: none; }

.tag-chip {
    display: inline-block;
    padding: 0.1rem 0.5rem;
    margin: 0.1rem;
    border-radius: 999px;
    background: var(--accent);
    font-size: 0.75rem;
}

/* Modal */
.note-modal-backdrop {
    position: fixed;
    inset: 0;
    background: rgba(0,0,0,0.5);
    z-index: 1001;
    display: none;
    align-items: center;
    justify-content: center;
}
.note-modal-backdrop.open { display: flex; }
.note-modal {
    border-radius: 8px;
    width: 90%;
    max-width: 700px;
    max-height: 90vh;
    overflow-y: auto;
    padding: 1.5rem;
    box-shadow: 0 8px 32px rgba(0,0,0,0.3);
}
.note-modal .modal-close { float: right; font-size: 1.5rem; color: var(--fg); }
.note-modal .modal-image img { max-width: 100%; border-radius: 4px; }
.note-modal .modal-content { margin: 1rem 0; }
.note-modal .modal-content.raw { white-space: pre-wrap; }
.modal-actions { display: flex; gap: 0.5rem; align-items: center; flex-wrap: wrap; }
.share-copied { color: #4ade80; }
.share-link[hidden] { display: none; }

/* Public page */
.shared-note { max-width: 760px; margin: 2rem auto; }
.shared-note .note-content { margin-top: 1rem; }

.search-results .result { padding: 0.5rem 0; border-bottom: 1px solid var(--border); }

.login-form { max-width: 320px; margin: 3rem auto; }
.login-form input { width: 100%; padding: 0.5rem; margin-bottom: 0.5rem; }
"#;

//! Renders the notes board from the `ui` page model.
//!
//! Everything the page shows is read off `NotesPage`: container and card
//! classes, switcher state, the bound modal and its form targets. Links carry
//! the interaction back to the server as query parameters on `/notes`.

use crate::models::{NoteId, NoteSummary, COLOR_THEMES};
use crate::notes::html_escape;
use crate::ui::gallery::active_index;
use crate::ui::modal::ModalBody;
use crate::ui::page::{NoteCard, NotesPage};
use crate::ui::share::ShareControls;
use crate::ui::view::ViewMode;

use super::components::{nav_bar, page_shell, AuthLink};

/// Characters of content shown on a card before it is cut off.
const PREVIEW_CHARS: usize = 280;

pub fn render_board(page: &NotesPage, auth: AuthLink) -> String {
    let mode = page
        .container
        .as_ref()
        .map(ViewMode::of_container)
        .unwrap_or_default();
    let active = if mode == ViewMode::Gallery {
        active_index(&page.cards).map(|i| page.cards[i].id())
    } else {
        None
    };

    let mut html = String::new();

    for message in &page.notifications {
        html.push_str(&format!(
            r#"<div class="message error">{}</div>"#,
            html_escape(message)
        ));
    }

    html.push_str(&render_header(page));
    html.push_str(&render_add_form());

    let container_class = page
        .container
        .as_ref()
        .map(|c| c.to_string())
        .unwrap_or_default();
    html.push_str(&format!(r#"<div class="{}" id="notesContainer">"#, container_class));
    if page.cards.is_empty() {
        html.push_str("<p>No notes yet.</p>");
    }
    for card in &page.cards {
        html.push_str(&render_card(card, active));
    }
    html.push_str("</div>");

    html.push_str(&render_modal(page, active));

    let body_class = if page.scroll_locked { "scroll-locked" } else { "" };
    page_shell("Notes", &html, nav_bar(None, auth), body_class, BOARD_SCRIPT)
}

fn render_header(page: &NotesPage) -> String {
    let greeting = match &page.name {
        Some(editor) => {
            // the placeholder comes from CSS so the editor never sees it as a name
            format!(
                r#"<span class="greeting">Hello, <span id="userNameDisplay" data-placeholder="there" data-width="{}">{}</span>
                <button type="button" class="name-edit-btn" id="editNameBtn" title="Edit name">&#9998;</button></span>"#,
                editor.input_width_ch(),
                html_escape(&editor.display)
            )
        }
        None => r#"<span class="greeting"></span>"#.to_string(),
    };

    let switcher = match &page.switcher {
        Some(switcher) => {
            let buttons: String = switcher
                .buttons
                .iter()
                .map(|b| {
                    format!(
                        r#"<a class="{}" href="/notes?view={}" data-view="{}">{}</a>"#,
                        b.classes,
                        b.mode.as_str(),
                        b.mode.as_str(),
                        b.mode.label()
                    )
                })
                .collect();
            format!(r#"<div class="view-switcher">{}</div>"#, buttons)
        }
        None => String::new(),
    };

    format!(r#"<div class="board-header">{}{}</div>"#, greeting, switcher)
}

fn color_options(selected: &str) -> String {
    COLOR_THEMES
        .iter()
        .map(|&color| {
            let sel = if color == selected { " selected" } else { "" };
            let label = color.trim_start_matches("card-");
            format!(r#"<option value="{}"{}>{}</option>"#, color, sel, label)
        })
        .collect()
}

fn render_add_form() -> String {
    format!(
        r#"<details class="add-note">
            <summary>Add a note</summary>
            <form method="POST" action="/notes/add" enctype="multipart/form-data">
                <input type="text" name="title" placeholder="Title">
                <textarea name="content" rows="4" placeholder="Write in Markdown..."></textarea>
                <select name="color">{}</select>
                <input type="text" name="tags" placeholder="Tags, comma separated">
                <input type="file" name="image" accept="image/*">
                <button type="submit" class="btn">Save</button>
            </form>
        </details>"#,
        color_options("")
    )
}

fn card_href(summary: &NoteSummary, active: Option<NoteId>) -> String {
    match active {
        Some(active) => format!("/notes?active={}&click={}", active, summary.id),
        None => format!("/notes?click={}", summary.id),
    }
}

fn render_card(card: &NoteCard, active: Option<NoteId>) -> String {
    let summary = &card.summary;

    let data_attrs: String = summary
        .data_attributes()
        .into_iter()
        .map(|(name, value)| format!(r#" data-{}="{}""#, name, html_escape(&value)))
        .collect();

    let image = match summary.image_url.as_deref().filter(|u| !u.is_empty()) {
        Some(url) => format!(r#"<img src="{}" alt="" loading="lazy">"#, html_escape(url)),
        None => String::new(),
    };

    let preview: String = summary.content.chars().take(PREVIEW_CHARS).collect();

    format!(
        r#"<a class="{classes}" href="{href}"{data_attrs}>
            {image}
            <h3>{title}</h3>
            <div class="note-preview">{preview}</div>
            <div class="note-tags">{tags}</div>
        </a>"#,
        classes = card.classes,
        href = card_href(summary, active),
        data_attrs = data_attrs,
        image = image,
        title = html_escape(&summary.title),
        preview = html_escape(&preview),
        tags = tag_chips(&summary.tags),
    )
}

pub(super) fn tag_chips(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!(r#"<span class="tag-chip">{}</span>"#, html_escape(t)))
        .collect()
}

/// Append the gallery selection to a board URL so a round trip keeps the
/// expanded card.
fn with_active(path: &str, active: Option<NoteId>) -> String {
    match active {
        Some(id) if path.contains('?') => format!("{}&active={}", path, id),
        Some(id) => format!("{}?active={}", path, id),
        None => path.to_string(),
    }
}

fn render_share(share: &ShareControls, active: Option<NoteId>) -> String {
    let disabled = if share.button.disabled { " disabled" } else { "" };
    let link = match &share.link {
        Some(link) => {
            let hidden = if link.visible { "" } else { " hidden" };
            format!(
                r#"<a class="share-link" id="publicLink" href="{href}" target="_blank"{hidden}>{href}</a>"#,
                href = html_escape(&link.href),
                hidden = hidden
            )
        }
        None => String::new(),
    };
    let note_id = share.note_id.map(|id| id.to_string()).unwrap_or_default();

    format!(
        r#"<form class="share-form" id="shareForm" method="POST" action="{action}" data-note-id="{note_id}">
            <button type="submit" class="btn secondary" id="shareBtn"{disabled}>{label}</button>
        </form>
        {link}"#,
        action = html_escape(&with_active(&share.action, active)),
        note_id = note_id,
        disabled = disabled,
        label = share.button.label,
        link = link,
    )
}

fn render_modal(page: &NotesPage, active: Option<NoteId>) -> String {
    let Some(modal) = &page.modal else {
        return String::new();
    };

    let close_href = html_escape(&with_active("/notes", active));

    let Some(note_id) = modal.note_id else {
        return format!(
            r#"<div class="{}" id="noteModal" data-close="{}"></div>"#,
            modal.backdrop, close_href
        );
    };

    let image = match &modal.image {
        Some(url) => format!(
            r#"<div class="modal-image"><img src="{}" alt=""></div>"#,
            html_escape(url)
        ),
        None => String::new(),
    };

    let body = match &modal.body {
        ModalBody::Html(html) => format!(r#"<div class="modal-content">{}</div>"#, html),
        ModalBody::Text(text) => format!(
            r#"<div class="modal-content raw">{}</div>"#,
            html_escape(text)
        ),
    };

    let share = page
        .share
        .as_ref()
        .map(|s| render_share(s, active))
        .unwrap_or_default();

    let delete = match &page.delete_form {
        Some(form) => format!(
            r#"<form method="POST" action="{}" onsubmit="return confirm('Delete this note?')">
                <button type="submit" class="btn danger">Delete</button>
            </form>"#,
            html_escape(&with_active(&form.action, active))
        ),
        None => String::new(),
    };

    format!(
        r#"<div class="{backdrop}" id="noteModal" data-close="{close}">
            <div class="{classes}">
                <a class="modal-close" href="{close}" title="Close">&times;</a>
                <h2>{title}</h2>
                {image}
                {body}
                <div class="note-tags">{tags}</div>
                <div class="modal-actions">{share}{delete}</div>
                <details>
                    <summary>Edit</summary>
                    <form method="POST" action="{update}">
                        <input type="text" name="title" value="{title}">
                        <textarea name="content" rows="8">{raw}</textarea>
                        <select name="color">{colors}</select>
                        <input type="text" name="tags" value="{joined_tags}">
                        <button type="submit" class="btn">Save</button>
                    </form>
                </details>
            </div>
        </div>"#,
        backdrop = modal.backdrop,
        close = close_href,
        classes = modal.classes,
        title = html_escape(&modal.title),
        image = image,
        body = body,
        tags = tag_chips(&modal.tags),
        share = share,
        delete = delete,
        update = html_escape(&with_active(&format!("/notes/update/{}", note_id), active)),
        raw = html_escape(&modal.raw_content),
        colors = color_options(&modal.color),
        joined_tags = html_escape(&modal.tags.join(", ")),
    )
}

/// Progressive enhancement: share toggles without a reload, Escape and
/// backdrop clicks close the modal, and the name can be edited in place.
const BOARD_SCRIPT: &str = r#"<script>
(function() {
    const modal = document.getElementById('noteModal');
    function closeModal() { window.location.href = modal.dataset.close || '/notes'; }
    if (modal && modal.classList.contains('open')) {
        document.addEventListener('keydown', e => { if (e.key === 'Escape') closeModal(); });
        modal.addEventListener('click', e => { if (e.target === modal) closeModal(); });
    }

    const form = document.getElementById('shareForm');
    if (form) {
        form.addEventListener('submit', async e => {
            e.preventDefault();
            const btn = document.getElementById('shareBtn');
            const link = document.getElementById('publicLink');
            const noteId = form.dataset.noteId;
            const previous = btn.textContent;
            btn.disabled = true;
            btn.textContent = '...';
            try {
                const res = await fetch(form.action, {
                    method: 'POST',
                    headers: { 'X-Requested-With': 'XMLHttpRequest' }
                });
                const data = await res.json();
                if (!res.ok || !data.success) throw new Error('share failed');
                if (data.is_public && !data.public_id) throw new Error('public note without id');

                const card = document.querySelector('.note-card[data-id="' + noteId + '"]');
                if (card) {
                    card.dataset.public = String(data.is_public);
                    card.dataset.publicId = data.is_public ? data.public_id : '';
                }

                if (data.is_public) {
                    const url = window.location.origin + '/shared/' + data.public_id;
                    if (link) { link.href = url; link.textContent = url; link.hidden = false; }
                    try {
                        await navigator.clipboard.writeText(url);
                        btn.textContent = 'Copied!';
                        btn.classList.add('share-copied');
                        setTimeout(() => {
                            if (btn.textContent === 'Copied!') {
                                btn.textContent = 'Unshare';
                                btn.classList.remove('share-copied');
                            }
                        }, 2000);
                    } catch (_) {
                        btn.textContent = 'Unshare';
                    }
                } else {
                    if (link) link.hidden = true;
                    btn.textContent = 'Share';
                }
            } catch (err) {
                console.error(err);
                btn.textContent = previous;
                alert('An error occurred while sharing.');
            } finally {
                btn.disabled = false;
            }
        });
    }

    const nameSpan = document.getElementById('userNameDisplay');
    const editBtn = document.getElementById('editNameBtn');
    if (nameSpan && editBtn) {
        editBtn.addEventListener('click', () => {
            if (nameSpan.querySelector('input')) return;
            const previous = nameSpan.textContent;
            const input = document.createElement('input');
            input.value = previous;
            input.style.width = nameSpan.dataset.width + 'ch';
            nameSpan.textContent = '';
            nameSpan.appendChild(input);
            input.focus();
            let saving = false;
            async function commit() {
                if (saving) return;
                saving = true;
                const name = input.value.trim() || previous;
                if (!name) { nameSpan.textContent = previous; return; }
                try {
                    const res = await fetch('/update_name', {
                        method: 'POST',
                        headers: { 'Content-Type': 'application/json', 'X-Requested-With': 'XMLHttpRequest' },
                        body: JSON.stringify({ name })
                    });
                    if (res.ok) { nameSpan.textContent = name; }
                    else { nameSpan.textContent = previous; alert('Failed to save name'); }
                } catch (_) {
                    nameSpan.textContent = previous;
                    alert('An error occurred while saving your name.');
                }
            }
            input.addEventListener('blur', commit);
            input.addEventListener('keydown', e => { if (e.key === 'Enter') input.blur(); });
        });
    }
})();
</script>"#;

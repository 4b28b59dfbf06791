//! HTML templates and styling for the notes board.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (nav bar, base template)
//! - `board` - The notes board rendered from the `ui` page model
//! - `pages` - Public note, search and login pages

mod board;
mod components;
mod pages;
mod styles;

pub use board::render_board;
pub use components::{base_html, nav_bar, page_shell, AuthLink};
pub use pages::{render_login, render_search, render_shared};
pub use styles::STYLE;

//! HTML rendering of the presentation components.
//!
//! Every component reads the active translator with `use_language()`, so
//! rendering must happen inside `LanguageProvider::provide`. Components return
//! HTML fragments as `String`s; `page` wraps them in a full document.

pub mod directory;
pub mod document;
pub mod highlights;
pub mod page;
pub mod reactions;
pub mod theme;
pub mod toggle;

pub use directory::SourceDirectory;
pub use document::{ClickEvent, ClickListener, Document, DocumentAttributes, DocumentEvents};
pub use highlights::ArticleHighlights;
pub use page::{render_page, PageContent};
pub use reactions::SocialReactions;
pub use theme::Theme;
pub use toggle::{LanguageToggle, ToggleState};

/// Escape text for HTML element content and quoted attribute values.
pub fn html_escape(value: &str) -> String {
    v_htmlescape::escape(value).to_string()
}

//! Language switcher: a button showing the active language and a dropdown of
//! every supported language.
//!
//! While the dropdown is open the toggle listens for document clicks; a click
//! outside the toggle closes it. The listener is removed whenever the dropdown
//! closes or the toggle is dropped.

use crate::i18n::{use_language, Language, LanguageContext, LanguageRegistry, TextKey};
use crate::ui::document::{ClickListener, DocumentEvents};
use crate::ui::html_escape;
use std::sync::{Arc, Mutex, Weak};
use tracing::debug;

/// Element id of the toggle root; clicks inside it do not close the dropdown.
pub const TOGGLE_ELEMENT_ID: &str = "language-toggle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleState {
    Closed,
    Open,
}

struct ToggleInner {
    state: ToggleState,
    outside_click: Option<ClickListener>,
}

pub struct LanguageToggle {
    events: DocumentEvents,
    inner: Arc<Mutex<ToggleInner>>,
}

impl LanguageToggle {
    pub fn new(events: DocumentEvents) -> Self {
        Self {
            events,
            inner: Arc::new(Mutex::new(ToggleInner {
                state: ToggleState::Closed,
                outside_click: None,
            })),
        }
    }

    pub fn state(&self) -> ToggleState {
        self.lock().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == ToggleState::Open
    }

    /// Open the dropdown. Opening an open dropdown changes nothing.
    pub fn open(&self) {
        let mut inner = self.lock();
        if inner.state == ToggleState::Open {
            return;
        }

        let weak = Arc::downgrade(&self.inner);
        inner.outside_click = Some(self.events.on_click(move |event| {
            if !event.is_within(TOGGLE_ELEMENT_ID) {
                debug!("Click outside language toggle, closing");
                close_inner(&weak);
            }
        }));
        inner.state = ToggleState::Open;
    }

    pub fn close(&self) {
        close_inner(&Arc::downgrade(&self.inner));
    }

    /// Flip between open and closed (the button's click).
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Pick a language from the dropdown.
    pub fn select(&self, context: &mut LanguageContext, language: Language) {
        context.set_language(language);
        self.close();
    }

    /// Render under the active translator.
    ///
    /// `return_to` is the site-relative URL of the current page without the
    /// `menu` parameter; the forms post back to it.
    pub fn render(&self, return_to: &str) -> String {
        let t = use_language();
        let active = t.language();
        let open = self.is_open();
        let button_href = if open {
            return_to.to_string()
        } else {
            with_menu_open(return_to)
        };

        let mut html = String::new();
        html.push_str(&format!(
            "<div id=\"{}\" class=\"language-toggle\">\n",
            TOGGLE_ELEMENT_ID
        ));
        html.push_str(&format!(
            "<a class=\"language-toggle-button\" href=\"{}\" title=\"{}\" aria-haspopup=\"listbox\" aria-expanded=\"{}\">\
             <span class=\"flag\">{}</span> <span class=\"language-name\">{}</span></a>\n",
            html_escape(&button_href),
            html_escape(t.t(TextKey::LanguageSelect)),
            open,
            active.flag(),
            html_escape(active.native_name())
        ));

        if open {
            html.push_str(&format!(
                "<a class=\"language-menu-backdrop\" href=\"{}\" aria-label=\"{}\"></a>\n",
                html_escape(return_to),
                html_escape(t.t(TextKey::CommonClose))
            ));
            html.push_str(&format!(
                "<ul class=\"language-menu\" role=\"listbox\" aria-label=\"{}\">\n",
                html_escape(t.t(TextKey::LanguageSelect))
            ));
            for config in LanguageRegistry::get().list_all() {
                let selected = config.language == active;
                html.push_str(&format!(
                    "<li><form method=\"post\" action=\"/language\">\
                     <input type=\"hidden\" name=\"code\" value=\"{code}\">\
                     <input type=\"hidden\" name=\"return_to\" value=\"{return_to}\">\
                     <button type=\"submit\" id=\"language-option-{code}\" class=\"language-option{class}\" role=\"option\" aria-selected=\"{selected}\" lang=\"{code}\">\
                     <span class=\"flag\">{flag}</span> {name}</button></form></li>\n",
                    code = config.code,
                    return_to = html_escape(return_to),
                    class = if selected { " active" } else { "" },
                    selected = selected,
                    flag = config.flag,
                    name = html_escape(config.native_name),
                ));
            }
            html.push_str("</ul>\n");
        }

        html.push_str("</div>\n");
        html
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ToggleInner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Drop for LanguageToggle {
    fn drop(&mut self) {
        let listener = self.lock().outside_click.take();
        drop(listener);
    }
}

/// Close the dropdown and release the click listener.
///
/// The listener is dropped after the state lock is released, since dropping
/// it locks the document's listener table.
fn close_inner(inner: &Weak<Mutex<ToggleInner>>) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let listener = {
        let mut inner = inner.lock().unwrap_or_else(|e| e.into_inner());
        inner.state = ToggleState::Closed;
        inner.outside_click.take()
    };
    drop(listener);
}

/// Append `menu=open` to a site-relative URL.
pub fn with_menu_open(url: &str) -> String {
    if url.contains('?') {
        format!("{}&menu=open", url)
    } else {
        format!("{}?menu=open", url)
    }
}

//! Scoped access to the active translator during a render.
//!
//! Components call `use_language()` instead of taking a translator argument.
//! The value is only available inside `LanguageProvider::provide`; reading it
//! anywhere else is a programming error and panics.

use crate::i18n::Translator;
use std::cell::Cell;

thread_local! {
    static CURRENT: Cell<Option<Translator>> = const { Cell::new(None) };
}

pub struct LanguageProvider;

impl LanguageProvider {
    /// Run `render` with `translator` available to `use_language()`.
    ///
    /// Providers nest; the outer value is restored when the inner one ends,
    /// including on panic.
    pub fn provide<R>(translator: Translator, render: impl FnOnce() -> R) -> R {
        let previous = CURRENT.with(|current| current.replace(Some(translator)));
        let _restore = Restore(previous);
        render()
    }
}

struct Restore(Option<Translator>);

impl Drop for Restore {
    fn drop(&mut self) {
        CURRENT.with(|current| current.set(self.0));
    }
}

/// The translator of the enclosing provider.
///
/// # Panics
/// When called outside `LanguageProvider::provide`.
pub fn use_language() -> Translator {
    CURRENT
        .with(Cell::get)
        .expect("use_language must be called within a LanguageProvider")
}

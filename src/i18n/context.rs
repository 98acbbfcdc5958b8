//! The active-language state shared by every component.
//!
//! `LanguageContext` owns the current language and the preference storage.
//! `set_language` is the only way to change the language; it persists the new
//! code and tells subscribers about the change.

use crate::i18n::catalog::{translate, translate_str};
use crate::i18n::preference::{
    resolve_initial_language, stored_language, PreferenceStorage, LANGUAGE_STORAGE_KEY,
};
use crate::i18n::{Language, TextDirection, TextKey, TranslationMetrics};
use std::borrow::Cow;
use std::fmt;
use tracing::{debug, info, warn};

/// Emitted after the active language changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleChange {
    pub previous: Language,
    pub current: Language,
}

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&LocaleChange) + Send + Sync>;

pub struct LanguageContext {
    language: Language,
    storage: Box<dyn PreferenceStorage>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl LanguageContext {
    /// Build a context, resolving the starting language from storage, then
    /// the user-agent tag, then the default.
    ///
    /// A language not already stored is persisted, so later startups keep it
    /// even if the user-agent tag changes.
    pub fn new(storage: Box<dyn PreferenceStorage>, user_agent_tag: Option<&str>) -> Self {
        let language = resolve_initial_language(storage.as_ref(), user_agent_tag);

        if stored_language(storage.as_ref()) != Some(language) {
            match storage.set(LANGUAGE_STORAGE_KEY, language.code()) {
                Ok(()) => debug!("Persisted startup language {}", language),
                Err(e) => warn!("Failed to persist language preference '{}': {}", language, e),
            }
        }

        Self {
            language,
            storage,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Make `language` active and persist it.
    ///
    /// A storage failure is logged and does not undo the change. Subscribers
    /// are only notified when the language actually differs.
    pub fn set_language(&mut self, language: Language) {
        let previous = self.language;
        self.language = language;

        if let Err(e) = self.storage.set(LANGUAGE_STORAGE_KEY, language.code()) {
            warn!("Failed to persist language preference '{}': {}", language, e);
        }

        if previous == language {
            debug!("Language already set to {}", language);
            return;
        }

        info!("Language changed: {} -> {}", previous, language);
        TranslationMetrics::global().record_language_change();

        let change = LocaleChange {
            previous,
            current: language,
        };
        for (_, listener) in &self.listeners {
            listener(&change);
        }
    }

    /// Register a listener for language changes.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&LocaleChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    /// Translate under the active language.
    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.language, key)
    }

    /// Translate a dotted key under the active language.
    pub fn t_str<'a>(&self, key: &'a str) -> Cow<'a, str> {
        translate_str(self.language, key)
    }

    pub fn language_name(&self, language: Language) -> &'static str {
        language.native_name()
    }

    pub fn language_flag(&self, language: Language) -> &'static str {
        language.flag()
    }

    pub fn direction(&self, language: Language) -> TextDirection {
        language.direction()
    }

    /// Snapshot of the active language for one render pass.
    pub fn translator(&self) -> Translator {
        Translator::new(self.language)
    }
}

impl fmt::Debug for LanguageContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageContext")
            .field("language", &self.language)
            .field("subscribers", &self.listeners.len())
            .finish()
    }
}

/// Read-only view of the active language, cheap to copy into a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translator {
    language: Language,
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn t(&self, key: TextKey) -> &'static str {
        translate(self.language, key)
    }

    pub fn t_str<'a>(&self, key: &'a str) -> Cow<'a, str> {
        translate_str(self.language, key)
    }

    pub fn direction(&self) -> TextDirection {
        self.language.direction()
    }
}

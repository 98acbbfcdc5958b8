//! Internationalization (i18n) module for multi-language support.
//!
//! All language-related logic, localized strings, and translation
//! infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported languages and their metadata
//! - `language`: The closed `Language` type
//! - `keys`: The closed set of localizable strings (`TextKey`)
//! - `strings`: Per-language string tables
//! - `catalog`: Lookup with fallback to the default language
//! - `preference`: Persisted language preference and startup resolution
//! - `context`: Active-language state with change notification
//! - `provider`: Scoped access to the active translator during a render
//! - `validator`: Catalog quality checks run at startup
//! - `metrics`: Lookup and fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use bias_buster::i18n::{LanguageContext, LanguageProvider, MemoryStorage, TextKey, use_language};
//!
//! let mut context = LanguageContext::new(Box::new(MemoryStorage::new()), Some("es-MX"));
//! let title = LanguageProvider::provide(context.translator(), || {
//!     use_language().t(TextKey::SourcesTitle)
//! });
//! context.set_language(Language::from_code("ja")?);
//! ```

pub mod catalog;
mod context;
mod keys;
mod language;
mod metrics;
pub mod preference;
mod provider;
mod registry;
pub mod strings;
mod validator;

pub use catalog::{format_template, resolve_all, translate, translate_str};
pub use context::{LanguageContext, LocaleChange, SubscriptionId, Translator};
pub use keys::TextKey;
pub use language::Language;
pub use metrics::{MetricsReport, TranslationMetrics};
pub use preference::{
    match_language_tag, resolve_initial_language, FileStorage, MemoryStorage, PreferenceStorage,
    StorageError, LANGUAGE_STORAGE_KEY,
};
pub use provider::{use_language, LanguageProvider};
pub use registry::{LanguageConfig, LanguageRegistry, TextDirection};
pub use validator::{CatalogEntry, CatalogValidator, ValidationReport};

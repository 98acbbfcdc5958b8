//! The document the components render into.
//!
//! `DocumentAttributes` mirrors the `lang`/`dir` attributes of the root
//! element and follows the active language through a context subscription.
//! `DocumentEvents` is a registry of document-level click listeners; a
//! registration lives as long as its `ClickListener` guard.

use crate::i18n::{Language, LanguageContext, SubscriptionId, TextDirection};
use std::sync::{Arc, Mutex, OnceLock, RwLock, Weak};
use tracing::debug;

/// `lang` and `dir` of the root element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub lang: &'static str,
    pub dir: TextDirection,
}

impl DocumentAttributes {
    pub fn for_language(language: Language) -> Self {
        Self {
            lang: language.code(),
            dir: language.direction(),
        }
    }
}

/// A click somewhere in the document.
///
/// `path` lists element ids from the clicked element up to the root.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickEvent {
    pub path: Vec<String>,
}

impl ClickEvent {
    pub fn on(path: &[&str]) -> Self {
        Self {
            path: path.iter().map(|id| id.to_string()).collect(),
        }
    }

    /// Whether the click landed on `element_id` or inside it.
    pub fn is_within(&self, element_id: &str) -> bool {
        self.path.iter().any(|id| id == element_id)
    }
}

type ClickHandler = Arc<dyn Fn(&ClickEvent) + Send + Sync>;

#[derive(Default)]
struct ListenerTable {
    next_id: u64,
    handlers: Vec<(u64, ClickHandler)>,
}

/// Document-level click listeners.
#[derive(Clone, Default)]
pub struct DocumentEvents {
    table: Arc<Mutex<ListenerTable>>,
}

impl DocumentEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a click handler until the returned guard is dropped.
    pub fn on_click<F>(&self, handler: F) -> ClickListener
    where
        F: Fn(&ClickEvent) + Send + Sync + 'static,
    {
        let mut table = self.table.lock().unwrap_or_else(|e| e.into_inner());
        let id = table.next_id;
        table.next_id += 1;
        table.handlers.push((id, Arc::new(handler)));
        debug!("Registered click listener {}", id);

        ClickListener {
            id,
            table: Arc::downgrade(&self.table),
        }
    }

    /// Deliver a click to every registered handler.
    ///
    /// Handlers run without the table locked, so they may drop their own
    /// guard.
    pub fn dispatch_click(&self, event: &ClickEvent) {
        let handlers: Vec<ClickHandler> = {
            let table = self.table.lock().unwrap_or_else(|e| e.into_inner());
            table.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };

        for handler in handlers {
            handler(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .handlers
            .len()
    }
}

/// Registration guard; dropping it removes the listener.
pub struct ClickListener {
    id: u64,
    table: Weak<Mutex<ListenerTable>>,
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Some(table) = self.table.upgrade() {
            let mut table = table.lock().unwrap_or_else(|e| e.into_inner());
            table.handlers.retain(|(id, _)| *id != self.id);
            debug!("Removed click listener {}", self.id);
        }
    }
}

/// Root document: attributes plus the event registry.
pub struct Document {
    attributes: RwLock<DocumentAttributes>,
    events: DocumentEvents,
    subscription: OnceLock<SubscriptionId>,
}

impl Document {
    pub fn new(language: Language) -> Self {
        Self {
            attributes: RwLock::new(DocumentAttributes::for_language(language)),
            events: DocumentEvents::new(),
            subscription: OnceLock::new(),
        }
    }

    /// Create a document whose attributes follow `context`'s language until
    /// `unbind` is called.
    pub fn bind(context: &mut LanguageContext) -> Arc<Document> {
        let document = Arc::new(Document::new(context.language()));
        let weak = Arc::downgrade(&document);

        let id = context.subscribe(move |change| {
            if let Some(document) = weak.upgrade() {
                document.apply_language(change.current);
            }
        });
        let _ = document.subscription.set(id);

        document
    }

    /// Stop following `context`. Returns `false` if this document was never
    /// bound to it or was already unbound.
    pub fn unbind(&self, context: &mut LanguageContext) -> bool {
        match self.subscription.get() {
            Some(id) => context.unsubscribe(*id),
            None => false,
        }
    }

    pub fn attributes(&self) -> DocumentAttributes {
        *self.attributes.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn events(&self) -> &DocumentEvents {
        &self.events
    }

    fn apply_language(&self, language: Language) {
        let mut attributes = self.attributes.write().unwrap_or_else(|e| e.into_inner());
        *attributes = DocumentAttributes::for_language(language);
        debug!("Document attributes: lang={} dir={}", attributes.lang, attributes.dir);
    }
}

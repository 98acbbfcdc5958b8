use crate::i18n::{LanguageContext, Translator};
use crate::ui::{Document, Theme};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared server state.
///
/// The language context is the single writer of the active language; render
/// passes copy a `Translator` out of it and release the lock before rendering.
#[derive(Clone)]
pub struct AppState {
    pub context: Arc<RwLock<LanguageContext>>,
    pub document: Arc<Document>,
    pub theme: Arc<RwLock<Theme>>,
    pub api_key: Option<Arc<str>>,
}

impl AppState {
    pub fn new(mut context: LanguageContext, theme: Theme, api_key: Option<String>) -> Self {
        let document = Document::bind(&mut context);
        Self {
            context: Arc::new(RwLock::new(context)),
            document,
            theme: Arc::new(RwLock::new(theme)),
            api_key: api_key.map(Arc::from),
        }
    }

    pub async fn translator(&self) -> Translator {
        self.context.read().await.translator()
    }

    pub async fn theme(&self) -> Theme {
        *self.theme.read().await
    }
}

use crate::analysis::ArticleAnalysis;
use crate::error::AppError;
use crate::i18n::{
    resolve_all, CatalogValidator, Language, LanguageConfig, LanguageProvider, LanguageRegistry,
    MetricsReport, TextKey, TranslationMetrics, ValidationReport,
};
use crate::security::verify_api_key;
use crate::sources::{filter_sources, BiasFilter, SourceRecord};
use crate::ui::{
    render_page, ArticleHighlights, DocumentAttributes, LanguageToggle, PageContent,
    SocialReactions, SourceDirectory,
};
use crate::web::AppState;
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, Uri};
use axum::response::{Html, Redirect};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

// ==================== Health ====================

pub async fn health() -> &'static str {
    "OK"
}

// ==================== Pages ====================

#[derive(Debug, Default, Deserialize)]
pub struct SourcesQuery {
    pub q: Option<String>,
    pub bias: Option<String>,
    pub menu: Option<String>,
}

/// Source directory page. `menu=open` renders the language dropdown open.
pub async fn sources_page(
    State(state): State<AppState>,
    uri: Uri,
    Query(query): Query<SourcesQuery>,
) -> Html<String> {
    let translator = state.translator().await;
    let theme = state.theme().await;
    let attributes = DocumentAttributes::for_language(translator.language());

    let toggle = LanguageToggle::new(state.document.events().clone());
    if query.menu.as_deref() == Some("open") {
        toggle.open();
    }

    let directory = SourceDirectory::new(
        query.q.unwrap_or_default(),
        BiasFilter::parse(query.bias.as_deref().unwrap_or("all")),
        theme,
    );
    let return_to = url_without_menu(&uri);

    let html = LanguageProvider::provide(translator, || {
        let content = PageContent {
            title: TextKey::SourcesTitle,
            body: directory.render(),
        };
        render_page(attributes, theme, &toggle, &return_to, &content)
    });

    Html(html)
}

/// The request URL with any `menu` parameter removed.
pub fn url_without_menu(uri: &Uri) -> String {
    let params: Vec<&str> = uri
        .query()
        .unwrap_or("")
        .split('&')
        .filter(|param| !param.is_empty() && *param != "menu" && !param.starts_with("menu="))
        .collect();

    if params.is_empty() {
        uri.path().to_string()
    } else {
        format!("{}?{}", uri.path(), params.join("&"))
    }
}

/// Render the highlights and reactions of an analysis as an HTML fragment.
pub async fn render_analysis(
    State(state): State<AppState>,
    Json(analysis): Json<ArticleAnalysis>,
) -> Html<String> {
    let translator = state.translator().await;
    let theme = state.theme().await;

    let html = LanguageProvider::provide(translator, || {
        let mut html = ArticleHighlights::new(&analysis.highlights, theme).render();
        html.push_str(&SocialReactions::new(&analysis.social_reactions, theme).render());
        html
    });

    Html(html)
}

// ==================== Forms ====================

#[derive(Debug, Deserialize)]
pub struct LanguageForm {
    pub code: String,
    pub return_to: Option<String>,
}

pub async fn set_language(
    State(state): State<AppState>,
    Form(form): Form<LanguageForm>,
) -> Result<Redirect, AppError> {
    let language =
        Language::from_code(form.code.trim()).map_err(|e| AppError::BadRequest(e.to_string()))?;

    // Storage writes may block on the filesystem.
    let mut context = Arc::clone(&state.context).write_owned().await;
    tokio::task::spawn_blocking(move || context.set_language(language))
        .await
        .map_err(anyhow::Error::from)?;

    Ok(Redirect::to(safe_return_to(form.return_to.as_deref())))
}

#[derive(Debug, Deserialize)]
pub struct ThemeForm {
    pub return_to: Option<String>,
}

pub async fn toggle_theme(
    State(state): State<AppState>,
    Form(form): Form<ThemeForm>,
) -> Redirect {
    let theme = {
        let mut theme = state.theme.write().await;
        *theme = theme.toggled();
        *theme
    };
    info!("Theme switched to {}", theme);

    Redirect::to(safe_return_to(form.return_to.as_deref()))
}

/// Only site-relative paths are followed; anything else goes home.
///
/// The path must be printable ASCII, since browsers drop tabs and newlines
/// before resolving a `Location` (`/\t/host` becomes `//host`).
pub fn safe_return_to(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if is_site_relative(path) => path,
        Some(other) => {
            warn!("Ignoring unsafe return_to: {:?}", other);
            "/"
        }
        None => "/",
    }
}

fn is_site_relative(path: &str) -> bool {
    path.bytes().all(|b| b.is_ascii_graphic())
        && path.starts_with('/')
        && !path.starts_with("//")
        && !path.contains('\\')
}

// ==================== JSON API ====================

pub async fn api_sources(Query(query): Query<SourcesQuery>) -> Json<Vec<&'static SourceRecord>> {
    let search = query.q.unwrap_or_default();
    let filter = BiasFilter::parse(query.bias.as_deref().unwrap_or("all"));
    Json(filter_sources(&search, filter))
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub current: Language,
    pub languages: &'static [LanguageConfig],
}

pub async fn api_language(State(state): State<AppState>) -> Json<LanguageInfo> {
    let current = state.context.read().await.language();
    Json(LanguageInfo {
        current,
        languages: LanguageRegistry::get().list_all(),
    })
}

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub lang: String,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub language: Language,
    pub entries: BTreeMap<&'static str, &'static str>,
}

/// Every key resolved (with fallback) for one language.
pub async fn catalog(Query(query): Query<CatalogQuery>) -> Result<Json<CatalogResponse>, AppError> {
    let language = Language::parse(&query.lang)
        .ok_or_else(|| AppError::NotFound(format!("Translations not found for: {}", query.lang)))?;

    Ok(Json(CatalogResponse {
        language,
        entries: resolve_all(language),
    }))
}

pub async fn metrics(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MetricsReport>, AppError> {
    authorize(&state, &headers)?;
    Ok(Json(TranslationMetrics::global().report()))
}

pub async fn validation(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ValidationReport>, AppError> {
    authorize(&state, &headers)?;
    Ok(Json(CatalogValidator::validate()))
}

/// Accepts the key as `X-Api-Key` or as an `Authorization: Bearer` token.
fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), AppError> {
    let presented = headers
        .get("x-api-key")
        .and_then(|v| v.to_str().ok())
        .or_else(|| {
            headers
                .get(header::AUTHORIZATION)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.strip_prefix("Bearer "))
        });

    if verify_api_key(state.api_key.as_deref(), presented) {
        Ok(())
    } else {
        warn!("Rejected i18n diagnostics request with missing or invalid API key");
        Err(AppError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{FileStorage, LanguageContext, MemoryStorage};
    use crate::ui::{Document, Theme};
    use axum::http::{HeaderValue, StatusCode};
    use axum::response::IntoResponse;

    fn state(api_key: Option<&str>) -> AppState {
        let context = LanguageContext::new(Box::new(MemoryStorage::new()), None);
        AppState::new(context, Theme::Dark, api_key.map(String::from))
    }

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
            .to_string()
    }

    // ==================== Page Tests ====================

    #[tokio::test]
    async fn test_sources_page_filters() {
        let state = state(None);
        let uri: Uri = "/sources?q=Fox".parse().unwrap();
        let query = SourcesQuery {
            q: Some("Fox".to_string()),
            ..Default::default()
        };

        let Html(html) = sources_page(State(state), uri, Query(query)).await;
        assert!(html.contains("<h3>Fox News</h3>"));
        assert_eq!(html.matches("<article class=\"source-card\">").count(), 1);
        assert!(html.contains("<html lang=\"en\""));
    }

    #[tokio::test]
    async fn test_sources_page_attributes_match_rendered_language() {
        let mut context = LanguageContext::new(Box::new(MemoryStorage::new()), None);
        context.set_language(Language::Spanish);
        let state = AppState {
            document: Arc::new(Document::new(Language::English)),
            ..AppState::new(context, Theme::Dark, None)
        };

        let uri: Uri = "/sources".parse().unwrap();
        let Html(html) = sources_page(State(state), uri, Query(SourcesQuery::default())).await;
        assert!(html.contains("<html lang=\"es\""));
        assert!(html.contains("Directorio de Fuentes de Noticias"));
    }

    #[tokio::test]
    async fn test_sources_page_open_menu_releases_listener() {
        let state = state(None);
        let uri: Uri = "/sources?menu=open".parse().unwrap();
        let query = SourcesQuery {
            menu: Some("open".to_string()),
            ..Default::default()
        };

        let Html(html) = sources_page(State(state.clone()), uri, Query(query)).await;
        assert!(html.contains("language-menu"));
        assert_eq!(state.document.events().listener_count(), 0);
    }

    #[tokio::test]
    async fn test_render_analysis_fragment() {
        let state = state(None);
        let analysis: ArticleAnalysis = serde_json::from_value(serde_json::json!({
            "highlights": [{"text": "outrageous", "type": "emotional", "explanation": "Charged"}],
            "socialReactions": [{"platform": "Reddit", "sentiment": "neutral", "engagement": 42}]
        }))
        .unwrap();

        let Html(html) = render_analysis(State(state), Json(analysis)).await;
        assert!(html.contains("Emotional Language"));
        assert!(html.contains("42 interactions"));
    }

    #[test]
    fn test_url_without_menu() {
        let uri: Uri = "/sources?q=bbc&menu=open&bias=center".parse().unwrap();
        assert_eq!(url_without_menu(&uri), "/sources?q=bbc&bias=center");

        let uri: Uri = "/?menu=open".parse().unwrap();
        assert_eq!(url_without_menu(&uri), "/");
    }

    // ==================== Form Tests ====================

    #[tokio::test]
    async fn test_set_language_switches_and_redirects() {
        let state = state(None);
        let form = LanguageForm {
            code: "es".to_string(),
            return_to: Some("/sources?q=bbc".to_string()),
        };

        let redirect = set_language(State(state.clone()), Form(form)).await.unwrap();
        assert_eq!(location(redirect), "/sources?q=bbc");
        assert_eq!(state.context.read().await.language(), Language::Spanish);
        assert_eq!(state.document.attributes().lang, "es");
    }

    #[tokio::test]
    async fn test_set_language_persists_to_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        let context = LanguageContext::new(Box::new(FileStorage::new(&path)), None);
        let state = AppState::new(context, Theme::Dark, None);
        let form = LanguageForm {
            code: "de".to_string(),
            return_to: None,
        };

        set_language(State(state.clone()), Form(form)).await.unwrap();
        assert_eq!(state.context.read().await.language(), Language::German);

        let reopened = LanguageContext::new(Box::new(FileStorage::new(&path)), Some("ja-JP"));
        assert_eq!(reopened.language(), Language::German);
    }

    #[tokio::test]
    async fn test_set_language_unknown_code_is_bad_request() {
        let state = state(None);
        let form = LanguageForm {
            code: "xx".to_string(),
            return_to: None,
        };

        let err = set_language(State(state.clone()), Form(form)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.context.read().await.language(), Language::English);
    }

    #[tokio::test]
    async fn test_toggle_theme() {
        let state = state(None);
        let redirect = toggle_theme(State(state.clone()), Form(ThemeForm { return_to: None })).await;

        assert_eq!(location(redirect), "/");
        assert_eq!(state.theme().await, Theme::Light);
    }

    #[test]
    fn test_safe_return_to() {
        assert_eq!(safe_return_to(Some("/sources?q=x")), "/sources?q=x");
        assert_eq!(safe_return_to(Some("//evil.example")), "/");
        assert_eq!(safe_return_to(Some("https://evil.example")), "/");
        assert_eq!(safe_return_to(Some("/\\evil.example")), "/");
        assert_eq!(safe_return_to(None), "/");
    }

    #[test]
    fn test_safe_return_to_rejects_control_characters() {
        assert_eq!(safe_return_to(Some("/\t/evil.example")), "/");
        assert_eq!(safe_return_to(Some("/\n/evil.example")), "/");
        assert_eq!(safe_return_to(Some("/sources\r\nSet-Cookie: a=b")), "/");
        assert_eq!(safe_return_to(Some("/x\u{7f}")), "/");
        assert_eq!(safe_return_to(Some("/fuentes/é")), "/");
    }

    #[tokio::test]
    async fn test_set_language_with_header_injection_redirects_home() {
        let state = state(None);
        let form = LanguageForm {
            code: "es".to_string(),
            return_to: Some("/x\nSet-Cookie: a=b".to_string()),
        };

        let redirect = set_language(State(state.clone()), Form(form)).await.unwrap();
        assert_eq!(location(redirect), "/");
        assert_eq!(state.context.read().await.language(), Language::Spanish);
    }

    #[tokio::test]
    async fn test_toggle_theme_with_control_character_redirects_home() {
        let state = state(None);
        let form = ThemeForm {
            return_to: Some("/\t/evil.example".to_string()),
        };

        let redirect = toggle_theme(State(state), Form(form)).await;
        assert_eq!(location(redirect), "/");
    }

    // ==================== API Tests ====================

    #[tokio::test]
    async fn test_api_sources() {
        let query = SourcesQuery {
            bias: Some("center".to_string()),
            ..Default::default()
        };
        let Json(records) = api_sources(Query(query)).await;

        let names: Vec<_> = records.iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Reuters", "Associated Press"]);
    }

    #[tokio::test]
    async fn test_api_language() {
        let Json(info) = api_language(State(state(None))).await;
        assert_eq!(info.current, Language::English);
        assert_eq!(info.languages.len(), 5);
    }

    #[tokio::test]
    async fn test_catalog_known_language() {
        let query = CatalogQuery {
            lang: "fr".to_string(),
        };
        let Json(response) = catalog(Query(query)).await.unwrap();

        assert_eq!(response.language, Language::French);
        assert_eq!(response.entries["social.negative"], "négatif");
    }

    #[tokio::test]
    async fn test_catalog_unknown_language_is_not_found() {
        let query = CatalogQuery {
            lang: "pt".to_string(),
        };
        let err = catalog(Query(query)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_diagnostics_open_without_api_key() {
        assert!(metrics(State(state(None)), HeaderMap::new()).await.is_ok());
        assert!(validation(State(state(None)), HeaderMap::new()).await.is_ok());
    }

    #[tokio::test]
    async fn test_diagnostics_require_configured_api_key() {
        let state = state(Some("s3cret"));

        let err = metrics(State(state.clone()), HeaderMap::new()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);

        let mut headers = HeaderMap::new();
        headers.insert("x-api-key", HeaderValue::from_static("s3cret"));
        assert!(metrics(State(state.clone()), headers).await.is_ok());

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer s3cret"));
        let Json(report) = validation(State(state), headers).await.unwrap();
        assert!(!report.has_errors());
    }
}

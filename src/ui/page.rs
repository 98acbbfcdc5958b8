//! Full HTML document around a rendered component.

use crate::i18n::{use_language, TextKey};
use crate::ui::document::DocumentAttributes;
use crate::ui::toggle::LanguageToggle;
use crate::ui::{html_escape, Theme};

/// Body of a page and the key of its title.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub title: TextKey,
    pub body: String,
}

const STYLE: &str = "\
    body { font-family: ui-sans-serif, -apple-system, Segoe UI, Roboto, Arial, sans-serif; margin: 0; }\n\
    .theme-dark { background: #0f1115; color: #e7ebf3; }\n\
    .theme-light { background: #f7f8fb; color: #111827; }\n\
    header { display: flex; align-items: center; gap: 16px; padding: 12px 24px; }\n\
    nav { display: flex; gap: 12px; flex: 1; }\n\
    main { padding: 24px; }\n\
    .source-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; }\n\
    .card, .source-card { border: 1px solid #2a3142; border-radius: 10px; padding: 14px; }\n\
    .language-toggle { position: relative; }\n\
    .language-menu { position: absolute; right: 0; list-style: none; padding: 4px; z-index: 2; }\n\
    .language-menu-backdrop { position: fixed; inset: 0; z-index: 1; }\n\
    .language-option.active { font-weight: bold; }\n\
    .factuality-high { color: #2cb67d; }\n\
    .factuality-medium { color: #e3b341; }\n\
    .factuality-low { color: #ef4565; }\n";

/// Render a complete page under the active translator.
///
/// `return_to` is the site-relative URL of this page without the `menu`
/// parameter, used by the language and theme forms.
pub fn render_page(
    attributes: DocumentAttributes,
    theme: Theme,
    toggle: &LanguageToggle,
    return_to: &str,
    content: &PageContent,
) -> String {
    let t = use_language();
    let mut html = String::new();

    html.push_str(&format!(
        "<!doctype html>\n<html lang=\"{}\" dir=\"{}\" class=\"{}\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
        attributes.lang,
        attributes.dir,
        theme.css_class()
    ));
    html.push_str(&format!(
        "<title>{} - {}</title>\n",
        html_escape(t.t(TextKey::HeaderTitle)),
        html_escape(t.t(content.title))
    ));
    html.push_str(&format!("<style>\n{}</style>\n</head>\n", STYLE));
    html.push_str(&format!("<body class=\"{}\">\n", theme.css_class()));

    html.push_str("<header>\n");
    html.push_str(&format!(
        "<h1><a href=\"/\">{}</a></h1>\n",
        html_escape(t.t(TextKey::HeaderTitle))
    ));
    html.push_str("<nav>\n");
    html.push_str(&format!(
        "<span class=\"nav-item\">{}</span>\n",
        html_escape(t.t(TextKey::HeaderAnalyzer))
    ));
    html.push_str(&format!(
        "<span class=\"nav-item\">{}</span>\n",
        html_escape(t.t(TextKey::HeaderDashboard))
    ));
    html.push_str(&format!(
        "<a class=\"nav-item\" href=\"/sources\">{}</a>\n",
        html_escape(t.t(TextKey::HeaderSources))
    ));
    html.push_str(&format!(
        "<span class=\"nav-item\">{}</span>\n",
        html_escape(t.t(TextKey::HeaderSettings))
    ));
    html.push_str("</nav>\n");
    html.push_str(&format!(
        "<form method=\"post\" action=\"/theme\"><input type=\"hidden\" name=\"return_to\" value=\"{}\">\
         <button type=\"submit\" id=\"theme-switch\">{}</button></form>\n",
        html_escape(return_to),
        html_escape(t.t(theme.switch_label()))
    ));
    html.push_str(&toggle.render(return_to));
    html.push_str("</header>\n");

    html.push_str("<main>\n");
    html.push_str(&content.body);
    html.push_str("</main>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, LanguageProvider, Translator};
    use crate::ui::document::DocumentEvents;

    fn render(language: Language, theme: Theme) -> String {
        let toggle = LanguageToggle::new(DocumentEvents::new());
        let content = PageContent {
            title: TextKey::SourcesTitle,
            body: "<p>body</p>".to_string(),
        };
        LanguageProvider::provide(Translator::new(language), || {
            render_page(
                DocumentAttributes::for_language(language),
                theme,
                &toggle,
                "/sources",
                &content,
            )
        })
    }

    #[test]
    fn test_page_root_attributes() {
        let html = render(Language::Japanese, Theme::Dark);
        assert!(html.contains("<html lang=\"ja\" dir=\"ltr\" class=\"theme-dark\">"));
    }

    #[test]
    fn test_page_header_localized() {
        let html = render(Language::French, Theme::Dark);

        assert!(html.contains("Détecteur de Biais"));
        assert!(html.contains("Répertoire des Sources"));
        assert!(html.contains("Passer en mode clair"));
        assert!(html.contains("language-toggle"));
        assert!(html.contains("<p>body</p>"));
    }

    #[test]
    fn test_theme_switch_label_follows_theme() {
        let html = render(Language::English, Theme::Light);
        assert!(html.contains("Switch to dark mode"));
        assert!(html.contains("class=\"theme-light\""));
    }
}

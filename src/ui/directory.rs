use crate::i18n::{format_template, use_language, TextKey, Translator};
use crate::sources::{filter_sources, BiasCategory, BiasFilter, SourceRecord};
use crate::ui::{html_escape, Theme};

/// Searchable, filterable grid of news sources.
#[derive(Debug, Clone)]
pub struct SourceDirectory {
    pub search: String,
    pub filter: BiasFilter,
    pub theme: Theme,
}

impl SourceDirectory {
    pub fn new(search: impl Into<String>, filter: BiasFilter, theme: Theme) -> Self {
        Self {
            search: search.into(),
            filter,
            theme,
        }
    }

    /// Records matching the current search and filter.
    pub fn results(&self) -> Vec<&'static SourceRecord> {
        filter_sources(&self.search, self.filter)
    }

    pub fn render(&self) -> String {
        let t = use_language();
        let results = self.results();
        let mut html = String::new();

        html.push_str(&format!(
            "<section class=\"source-directory {}\">\n",
            self.theme.css_class()
        ));
        html.push_str(&format!(
            "<h2>{}</h2>\n<p class=\"subtitle\">{}</p>\n",
            html_escape(t.t(TextKey::SourcesTitle)),
            html_escape(t.t(TextKey::SourcesSubtitle))
        ));

        html.push_str("<form class=\"source-search\" method=\"get\" action=\"/sources\">\n");
        html.push_str(&format!(
            "<input type=\"search\" name=\"q\" value=\"{}\" placeholder=\"{}\">\n",
            html_escape(&self.search),
            html_escape(t.t(TextKey::SourcesSearchPlaceholder))
        ));
        html.push_str("<select name=\"bias\">\n");
        html.push_str(&option_html(
            "all",
            t.t(TextKey::SourcesFilterAll),
            self.filter == BiasFilter::All,
        ));
        for bias in BiasCategory::ALL {
            html.push_str(&option_html(
                bias.as_str(),
                t.t(bias.text_key()),
                self.filter == BiasFilter::Only(bias),
            ));
        }
        html.push_str("</select>\n</form>\n");

        html.push_str(&format!(
            "<p class=\"result-count\">{}</p>\n",
            html_escape(&format_template(
                t.t(TextKey::SourcesResultCount),
                &[("count", &results.len().to_string())]
            ))
        ));

        if results.is_empty() {
            html.push_str(&format!(
                "<p class=\"empty-state\">{}</p>\n",
                html_escape(t.t(TextKey::SourcesNoResults))
            ));
        } else {
            html.push_str("<div id=\"sources-grid\" class=\"source-grid\">\n");
            for record in &results {
                html.push_str(&source_card(record, &t));
            }
            html.push_str("</div>\n");
        }

        html.push_str("</section>\n");
        html
    }
}

fn option_html(value: &str, label: &str, selected: bool) -> String {
    format!(
        "<option value=\"{}\"{}>{}</option>\n",
        value,
        if selected { " selected" } else { "" },
        html_escape(label)
    )
}

fn source_card(record: &SourceRecord, t: &Translator) -> String {
    let mut html = String::new();
    html.push_str("<article class=\"source-card\">\n");
    html.push_str(&format!(
        "<h3>{}</h3>\n<p class=\"country\">{}</p>\n",
        html_escape(record.name),
        html_escape(record.country)
    ));
    html.push_str(&format!(
        "<div class=\"row\"><span class=\"label\">{}</span><span class=\"bias-dot {}\"></span><span>{}</span></div>\n",
        html_escape(t.t(TextKey::SourcesPolitical)),
        record.bias.css_class(),
        html_escape(t.t(record.bias.text_key()))
    ));
    html.push_str(&format!(
        "<div class=\"row\"><span class=\"label\">{}</span><span class=\"{}\">{}/10</span></div>\n",
        html_escape(t.t(TextKey::BiasFactuality)),
        record.factuality_tier().css_class(),
        record.factuality
    ));
    html.push_str(&format!(
        "<div class=\"row\"><span class=\"label\">{}</span><span>{}</span></div>\n",
        html_escape(t.t(TextKey::SourcesCategory)),
        html_escape(record.category)
    ));
    html.push_str(&format!(
        "<p class=\"verified\">{}</p>\n",
        html_escape(t.t(TextKey::SourcesVerified))
    ));
    html.push_str("</article>\n");
    html
}

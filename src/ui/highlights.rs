use crate::analysis::{Highlight, HighlightKind};
use crate::i18n::{use_language, TextKey};
use crate::ui::{html_escape, Theme};

/// Card listing the flagged passages of an article.
pub struct ArticleHighlights<'a> {
    pub highlights: &'a [Highlight],
    pub theme: Theme,
}

impl<'a> ArticleHighlights<'a> {
    pub fn new(highlights: &'a [Highlight], theme: Theme) -> Self {
        Self { highlights, theme }
    }

    pub fn render(&self) -> String {
        let t = use_language();
        let mut html = String::new();

        html.push_str(&format!(
            "<section class=\"card highlights {}\">\n",
            self.theme.css_class()
        ));
        html.push_str(&format!(
            "<h3>{}</h3>\n",
            html_escape(t.t(TextKey::HighlightsTitle))
        ));
        html.push_str("<div class=\"highlight-list\">\n");

        for highlight in self.highlights {
            let kind_class = match highlight.kind {
                HighlightKind::Emotional => "highlight-emotional",
                HighlightKind::Bias => "highlight-bias",
            };
            html.push_str(&format!("<article class=\"highlight {}\">\n", kind_class));
            html.push_str(&format!(
                "<span class=\"badge\">{}</span>\n",
                html_escape(t.t(highlight.kind.text_key()))
            ));
            html.push_str(&format!(
                "<p class=\"highlight-text\">&quot;{}&quot;</p>\n",
                html_escape(&highlight.text)
            ));
            html.push_str(&format!(
                "<p class=\"highlight-explanation\">{}</p>\n",
                html_escape(&highlight.explanation)
            ));
            html.push_str("</article>\n");
        }

        html.push_str("</div>\n</section>\n");
        html
    }
}

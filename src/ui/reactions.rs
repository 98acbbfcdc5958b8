use crate::analysis::SocialReaction;
use crate::i18n::{use_language, TextKey};
use crate::ui::{html_escape, Theme};

/// Comments shown per reaction.
pub const MAX_COMMENTS: usize = 3;

/// Longer comments are cut to this many characters and get `...` appended.
pub const COMMENT_PREVIEW_CHARS: usize = 150;

/// Card summarizing how an article was received on social platforms.
pub struct SocialReactions<'a> {
    pub reactions: &'a [SocialReaction],
    pub theme: Theme,
}

impl<'a> SocialReactions<'a> {
    pub fn new(reactions: &'a [SocialReaction], theme: Theme) -> Self {
        Self { reactions, theme }
    }

    pub fn render(&self) -> String {
        let t = use_language();
        let mut html = String::new();

        html.push_str(&format!(
            "<section class=\"card social-reactions {}\">\n",
            self.theme.css_class()
        ));
        html.push_str(&format!(
            "<h3>{}</h3>\n",
            html_escape(t.t(TextKey::SocialTitle))
        ));

        for reaction in self.reactions {
            html.push_str("<article class=\"reaction\">\n");
            html.push_str(&format!(
                "<span class=\"platform-initial\">{}</span>\n",
                html_escape(&platform_initial(&reaction.platform))
            ));
            html.push_str(&format!(
                "<h4>{}</h4>\n",
                html_escape(&reaction.platform)
            ));
            html.push_str(&format!(
                "<p class=\"reaction-meta\"><span class=\"{}\">{}</span> &bull; {} {}</p>\n",
                reaction.sentiment.css_class(),
                html_escape(t.t(reaction.sentiment.text_key())),
                reaction.engagement,
                html_escape(t.t(TextKey::SocialInteractions))
            ));

            if !reaction.url.is_empty() {
                html.push_str(&format!(
                    "<a class=\"external-link\" href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>\n",
                    html_escape(&reaction.url),
                    html_escape(&reaction.platform)
                ));
            }

            if !reaction.top_comments.is_empty() {
                html.push_str("<div class=\"comments\">\n");
                html.push_str(&format!(
                    "<h5>{}</h5>\n",
                    html_escape(t.t(TextKey::SocialComments))
                ));
                for comment in reaction.top_comments.iter().take(MAX_COMMENTS) {
                    html.push_str(&format!(
                        "<blockquote>&quot;{}&quot;</blockquote>\n",
                        html_escape(&preview_comment(comment))
                    ));
                }
                html.push_str("</div>\n");
            }

            html.push_str("</article>\n");
        }

        html.push_str("</section>\n");
        html
    }
}

fn platform_initial(platform: &str) -> String {
    platform.chars().next().map(String::from).unwrap_or_default()
}

/// Cut a comment to `COMMENT_PREVIEW_CHARS` characters.
pub fn preview_comment(comment: &str) -> String {
    if comment.chars().count() > COMMENT_PREVIEW_CHARS {
        let cut: String = comment.chars().take(COMMENT_PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else {
        comment.to_string()
    }
}

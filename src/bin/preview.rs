//! Preview binary - renders a page to stdout without starting the server
//!
//! Usage:
//!   cargo run --bin preview                                  # Source directory in the default language
//!   cargo run --bin preview -- --lang ja --search times      # Japanese, filtered by name
//!   cargo run --bin preview -- --bias center --menu-open     # Filtered, language dropdown open
//!   cargo run --bin preview -- --analysis analysis.json      # Highlights + reactions fragment
//!
//! Optional:
//! - --out <path> writes the HTML to a file instead of stdout
//! - BROWSER_LANGUAGE / LANG pick the language when --lang is absent

use anyhow::{bail, Context, Result};
use bias_buster::analysis::ArticleAnalysis;
use bias_buster::config::Config;
use bias_buster::i18n::{Language, LanguageContext, LanguageProvider, MemoryStorage, TextKey};
use bias_buster::sources::BiasFilter;
use bias_buster::ui::{
    render_page, ArticleHighlights, Document, LanguageToggle, PageContent, SocialReactions,
    SourceDirectory,
};
use std::fs;
use tracing::info;

#[derive(Debug, Default)]
struct PreviewArgs {
    lang: Option<String>,
    search: String,
    bias: Option<String>,
    menu_open: bool,
    analysis: Option<String>,
    out: Option<String>,
}

impl PreviewArgs {
    fn parse(args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = PreviewArgs::default();
        let mut args = args.skip(1);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--lang" => parsed.lang = Some(args.next().context("--lang needs a value")?),
                "--search" => parsed.search = args.next().context("--search needs a value")?,
                "--bias" => parsed.bias = Some(args.next().context("--bias needs a value")?),
                "--menu-open" => parsed.menu_open = true,
                "--analysis" => {
                    parsed.analysis = Some(args.next().context("--analysis needs a path")?)
                }
                "--out" => parsed.out = Some(args.next().context("--out needs a path")?),
                other => bail!("Unknown argument: {}", other),
            }
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    // Initialize logging (stderr, so stdout stays clean HTML)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bias_buster=info".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = PreviewArgs::parse(std::env::args())?;
    let config = Config::from_env()?;

    let mut context = LanguageContext::new(
        Box::new(MemoryStorage::new()),
        config.browser_language.as_deref(),
    );
    if let Some(code) = &args.lang {
        context.set_language(Language::from_code(code)?);
    }
    let document = Document::bind(&mut context);
    info!("Rendering preview in {}", context.language().name());

    let html = match &args.analysis {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("Failed to read analysis file {}", path))?;
            let analysis: ArticleAnalysis =
                serde_json::from_str(&raw).context("Failed to parse analysis JSON")?;

            LanguageProvider::provide(context.translator(), || {
                let mut html = ArticleHighlights::new(&analysis.highlights, config.theme).render();
                html.push_str(&SocialReactions::new(&analysis.social_reactions, config.theme).render());
                html
            })
        }
        None => {
            let toggle = LanguageToggle::new(document.events().clone());
            if args.menu_open {
                toggle.open();
            }
            let directory = SourceDirectory::new(
                args.search.clone(),
                BiasFilter::parse(args.bias.as_deref().unwrap_or("all")),
                config.theme,
            );
            info!("{} matching source(s)", directory.results().len());

            LanguageProvider::provide(context.translator(), || {
                let content = PageContent {
                    title: TextKey::SourcesTitle,
                    body: directory.render(),
                };
                render_page(document.attributes(), config.theme, &toggle, "/sources", &content)
            })
        }
    };

    match &args.out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write {}", path))?;
            info!("Preview written to {}", path);
        }
        None => println!("{}", html),
    }

    Ok(())
}

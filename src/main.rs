//! `wiki-reflect`: print a random Wikipedia article to the terminal.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser, ValueEnum};
use tracing::{info, instrument, warn};
use wiki_reflect::{Config, ConsoleRenderer, LanguageCode, WikiReflector, run_until_signal};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Wikipedia edition to read from (e.g. en, de, uk)
    #[arg(short, long, value_name = "LANG")]
    language: Option<LanguageCode>,

    /// Fetch this article instead of a random one
    #[arg(short, long)]
    title: Option<String>,

    /// JSON configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// User-Agent sent to Wikipedia
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    format: OutputFormat,

    /// Maximum section nesting to keep
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    async fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.load_config()?;
        let reflector = WikiReflector::new(&config).context("invalid configuration")?;
        let renderer = ConsoleRenderer::new(&config.display);

        match run_until_signal(self.report(&reflector, &renderer, &config.language)).await {
            Some(result) => result,
            None => {
                eprintln!("Interrupted.");
                Ok(())
            }
        }
    }

    /// Config file (if any) with command line overrides applied on top
    fn load_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_json_file(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?,
            None => Config::default(),
        };

        if let Some(language) = &self.language {
            config.language = language.clone();
        }
        if let Some(user_agent) = &self.user_agent {
            config.wiki.user_agent = user_agent.clone();
        }
        if let Some(max_depth) = self.max_depth {
            config.display.max_section_depth = max_depth;
        }

        config.validate().context("invalid configuration")?;
        Ok(config)
    }

    /// Resolve, fetch and print one article
    ///
    /// Fetch failures are printed and count as a normal run; only writing to
    /// stdout can fail here.
    #[instrument(level = "debug", skip_all, fields(language = %language))]
    async fn report(
        &self,
        reflector: &WikiReflector,
        renderer: &ConsoleRenderer,
        language: &LanguageCode,
    ) -> anyhow::Result<()> {
        let mut out = io::stdout();

        let title = match &self.title {
            Some(title) => title.clone(),
            None => match reflector.resolver().resolve(language).await {
                Ok(reference) => reference.title().to_string(),
                Err(e) => {
                    warn!(error = %e, code = e.error_code(), "could not resolve a random title");
                    match self.format {
                        OutputFormat::Text => renderer.write_title_failure(&mut out, &e)?,
                        OutputFormat::Json => renderer.write_failure_json(&mut out, &e)?,
                    }
                    return Ok(());
                }
            },
        };

        if self.format == OutputFormat::Text {
            renderer.write_fetching(&mut out, &title)?;
            out.flush()?;
        }

        match reflector.article(&title, language).await {
            Ok(article) => {
                info!(title = %article.title, "article fetched");
                match self.format {
                    OutputFormat::Text => renderer.write_article(&mut out, &article)?,
                    OutputFormat::Json => renderer.write_article_json(&mut out, &article)?,
                }
            }
            Err(e) => {
                warn!(title = %title, error = %e, code = e.error_code(), "could not fetch article");
                match self.format {
                    OutputFormat::Text => renderer.write_failure(&mut out, &e)?,
                    OutputFormat::Json => renderer.write_failure_json(&mut out, &e)?,
                }
            }
        }

        out.flush()?;
        Ok(())
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the article
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Cli::parse().run().await
}

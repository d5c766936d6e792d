//! Tooltip and locale simulator.
//!
//! Usage:
//!   tippy-sim run                          # Start the page and print its markup
//!   tippy-sim run --lang sv-se             # Start, then switch language
//!   tippy-sim hover '#save'                # Hover an element, print the tooltip
//!   tippy-sim locales                      # List locale files under the base path
//!   tippy-sim --base-url http://localhost:4200/ run

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tippy_l10n::config::AppConfig;
use tippy_l10n::dom::{Document, Selector};
use tippy_l10n::event::{DomEvent, EventKind};
use tippy_l10n::i18n::{available_locales, HttpClient, ReqwestClient, StaticDirClient};
use tippy_l10n::markup::{parse_document_file, to_markup};
use tippy_l10n::Page;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tippy-sim")]
#[command(about = "Headless page simulator for delegated tooltips and locale loading")]
struct Cli {
    /// Config file (defaults to the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Page markup to load
    #[arg(long, global = true, default_value = "assets/index.xhtml")]
    page: PathBuf,

    /// Directory served as the web root when no --base-url is given
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Fetch locale files over HTTP from this origin
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the page and print the resulting markup
    Run {
        /// Switch to this language after startup
        #[arg(short, long)]
        lang: Option<String>,
    },

    /// Hover the first element matching a selector and print the tooltip
    Hover {
        selector: String,

        /// Leave the element again and print the restored markup
        #[arg(long)]
        leave: bool,
    },

    /// List locale ids available under the configured base path
    Locales,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    };

    if let Commands::Locales = cli.command {
        let dir = cli.root.join(config.i18n.base_path.trim_start_matches("./"));
        for locale in available_locales(&dir)? {
            println!("{locale}");
        }
        return Ok(());
    }

    match &cli.base_url {
        Some(origin) => {
            let client = ReqwestClient::new()?.with_origin(origin)?;
            run(&cli, &config, client).await
        }
        None => run(&cli, &config, StaticDirClient::new(&cli.root)).await,
    }
}

async fn run<C: HttpClient>(
    cli: &Cli,
    config: &AppConfig,
    client: C,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut page = Page::start(load_page(&cli.page)?, config, client).await?;

    match &cli.command {
        Commands::Run { lang } => {
            if let Some(lang) = lang {
                let change = page.change_language(lang).await?;
                eprintln!("Active language: {}", change.active());
            }
        }
        Commands::Hover { selector, leave } => {
            let selector = Selector::parse(selector)?;
            let body = page.document().body();
            let Some(target) = page.document().query_selector(body, &selector) else {
                return Err(format!("no element matches '{selector}'").into());
            };
            page.hover(target)?;
            println!("Tooltip: {}", page.tooltips().content());
            if *leave {
                page.dispatch(DomEvent::new(EventKind::MouseLeave, target));
            }
        }
        Commands::Locales => {}
    }

    let doc = page.document();
    println!("{}", to_markup(doc, doc.body()));
    Ok(())
}

fn load_page(path: &Path) -> tippy_l10n::Result<Document> {
    tracing::debug!("Loading page {}", path.display());
    parse_document_file(path)
}

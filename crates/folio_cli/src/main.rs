//! folio: command-line front end for the portfolio site core
//!
//! Drives the localization store and the timeline calculator for content
//! authors: translate keys, switch the saved site language, check that both
//! catalogs define the same keys, and preview timeline progress.

mod commands;
mod config;
mod project;

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use folio_i18n::{Locale, LocaleStore};
use folio_theme::{ColorScheme, ThemeState};
use folio_timeline::{compute_progress, compute_progress_now, Timeline};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::FolioConfig;

#[derive(Parser)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Localization and timeline tooling for the portfolio site")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (default: ./folio.toml if present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preference file holding the saved language
    #[arg(long, global = true, value_name = "PATH")]
    prefs: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create folio.toml and a sample timeline
    Init {
        /// Target directory
        #[arg(value_name = "PATH", default_value = ".")]
        path: PathBuf,

        /// Site name
        #[arg(short, long, default_value = "portfolio")]
        name: String,
    },

    /// Resolve a translation key
    Translate {
        /// Dot-delimited key, e.g. contact.email.title
        #[arg(value_name = "KEY")]
        key: String,

        /// Locale to use instead of the saved one
        #[arg(short, long, value_enum)]
        locale: Option<LocaleArg>,
    },

    /// Show or change the saved site language
    Locale {
        #[command(subcommand)]
        action: Option<LocaleAction>,
    },

    /// Verify that every key exists in every locale
    Check,

    /// Print milestones in order with the progress fill
    Timeline {
        /// Milestone document (default: [timeline] data from the config)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Evaluate as of this date (YYYY-MM-DD) instead of today
        #[arg(long, value_name = "DATE")]
        today: Option<NaiveDate>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the palette as CSS variables
    Theme {
        /// Scheme to print (default: [theme] scheme from the config)
        #[arg(short, long, value_enum)]
        scheme: Option<SchemeArg>,
    },
}

#[derive(Subcommand)]
enum LocaleAction {
    /// Print the saved language
    Show,
    /// Save a language
    Set {
        #[arg(value_enum)]
        locale: LocaleArg,
    },
    /// Switch to the other language
    Toggle,
}

// CLI argument types
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LocaleArg {
    Pt,
    En,
}

impl From<LocaleArg> for Locale {
    fn from(arg: LocaleArg) -> Self {
        match arg {
            LocaleArg::Pt => Locale::Pt,
            LocaleArg::En => Locale::En,
        }
    }
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum SchemeArg {
    Light,
    Dark,
}

impl From<SchemeArg> for ColorScheme {
    fn from(arg: SchemeArg) -> Self {
        match arg {
            SchemeArg::Light => ColorScheme::Light,
            SchemeArg::Dark => ColorScheme::Dark,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = FolioConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Init { path, name } => {
            project::create_site(&path, &name)?;
            println!("Created {}", path.join(config::CONFIG_FILE).display());
        }

        Commands::Translate { key, locale } => {
            let tables = commands::load_tables(&config)?;
            let store = match locale {
                Some(l) => commands::ephemeral_store(l.into(), tables),
                None => LocaleStore::initialize(
                    commands::open_preferences(cli.prefs.as_deref(), &config),
                    tables,
                ),
            };
            println!("{}", store.translate(&key));
        }

        Commands::Locale { action } => {
            let store = LocaleStore::initialize(
                commands::open_preferences(cli.prefs.as_deref(), &config),
                commands::load_tables(&config)?,
            );
            match action.unwrap_or(LocaleAction::Show) {
                LocaleAction::Show => {}
                LocaleAction::Set { locale } => store.set_locale(locale.into()),
                LocaleAction::Toggle => {
                    store.toggle_locale();
                }
            }
            println!(
                "{} ({})",
                store.active_locale(),
                store.translate("language.current")
            );
        }

        Commands::Check => {
            let report = commands::load_tables(&config)?.parity();
            print!("{}", commands::render_parity(&report));
            if !report.is_consistent() {
                bail!("translation catalogs define different keys");
            }
        }

        Commands::Timeline { file, today, json } => {
            let path = file.unwrap_or_else(|| config.timeline.data.clone());
            let timeline = Timeline::load(&path)?;
            let progress = match today {
                Some(day) => compute_progress(timeline.milestones(), day),
                None => compute_progress_now(timeline.milestones()),
            };

            if json {
                println!("{}", commands::timeline_json(&progress)?);
            } else {
                let store = LocaleStore::initialize(
                    commands::open_preferences(cli.prefs.as_deref(), &config),
                    commands::load_tables(&config)?,
                );
                print!("{}", commands::render_timeline(&progress, &store));
            }
        }

        Commands::Theme { scheme } => {
            let scheme = scheme.map(ColorScheme::from).unwrap_or(config.theme.scheme);
            print!("{}", ThemeState::new(scheme).to_css());
        }
    }

    Ok(())
}

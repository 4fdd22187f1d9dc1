//! Command implementations, kept free of argument parsing

use anyhow::{Context, Result};
use folio_i18n::{
    FilePreferences, Locale, LocaleStore, MemoryPreferences, Message, ParityReport,
    PreferenceStore, TranslationTables, LANGUAGE_KEY,
};
use folio_timeline::{Milestone, MilestoneStatus, TimelineProgress};
use serde::Serialize;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::config::FolioConfig;

/// Bundled catalogs, or `pt.yaml`/`en.yaml` from the configured directory.
pub fn load_tables(config: &FolioConfig) -> Result<TranslationTables> {
    let Some(dir) = &config.i18n.catalog_dir else {
        return TranslationTables::bundled().context("Bundled catalogs are invalid");
    };

    let mut tables = TranslationTables::new();
    for locale in Locale::ALL {
        let path = dir.join(format!("{}.yaml", locale.code()));
        let src = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        tables
            .load_str(locale, &src)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
    }
    Ok(tables)
}

/// Preference storage: `--prefs`, then `[preferences] path`, then the platform default.
pub fn open_preferences(
    explicit: Option<&Path>,
    config: &FolioConfig,
) -> Box<dyn PreferenceStore> {
    let configured = explicit
        .map(Path::to_path_buf)
        .or_else(|| config.preferences.path.clone());
    if let Some(path) = configured {
        return Box::new(FilePreferences::new(path));
    }
    match FilePreferences::default_location() {
        Some(prefs) => {
            tracing::debug!("preferences at {}", prefs.path().display());
            Box::new(prefs)
        }
        None => {
            tracing::warn!(
                "no config directory on this platform; language choice will not persist"
            );
            Box::new(MemoryPreferences::new())
        }
    }
}

/// A store pinned to `locale` that never touches the user's saved preference.
pub fn ephemeral_store(locale: Locale, tables: TranslationTables) -> LocaleStore {
    LocaleStore::initialize(
        MemoryPreferences::with(LANGUAGE_KEY, locale.code()),
        tables,
    )
}

pub fn render_parity(report: &ParityReport) -> String {
    if report.is_consistent() {
        return "catalogs are consistent\n".to_string();
    }
    let mut out = String::new();
    for locale in Locale::ALL {
        let missing = report.missing_in(locale);
        if missing.is_empty() {
            continue;
        }
        let _ = writeln!(out, "missing in {} ({}):", locale, missing.len());
        for key in missing {
            let _ = writeln!(out, "  {key}");
        }
    }
    out
}

/// Human-readable timeline, labels in the store's active locale.
pub fn render_timeline(progress: &TimelineProgress, store: &LocaleStore) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", store.translate("about.timeline.title"));

    if progress.total() == 0 {
        let _ = writeln!(out, "{}", store.translate("about.timeline.empty"));
        return out;
    }

    for (i, m) in progress.milestones().iter().enumerate() {
        let mark = if progress.is_reached(i) { "x" } else { " " };
        let status = store.translate(match m.status {
            MilestoneStatus::Completed => "about.timeline.completed",
            MilestoneStatus::Planned => "about.timeline.planned",
        });
        let _ = writeln!(
            out,
            "[{mark}] {}  {} - {} ({status})",
            m.date, m.title, m.institution
        );
    }

    let percent = format!("{:.0}", progress.percent());
    let msg = Message::new("about.timeline.progress").arg("percent", percent);
    let _ = writeln!(out, "{}", store.tr(&msg));
    out
}

#[derive(Serialize)]
struct TimelineReport<'a> {
    percent: f64,
    reached: usize,
    total: usize,
    next_upcoming: Option<&'a Milestone>,
    milestones: &'a [Milestone],
}

pub fn timeline_json(progress: &TimelineProgress) -> Result<String> {
    let report = TimelineReport {
        percent: progress.percent(),
        reached: progress.reached(),
        total: progress.total(),
        next_upcoming: progress.next_upcoming(),
        milestones: progress.milestones(),
    };
    serde_json::to_string_pretty(&report).context("Failed to serialize timeline")
}

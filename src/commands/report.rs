//! Text and JSON rendering for command output.
//!
//! Everything here returns a `String` so commands decide where it goes and
//! tests can inspect it. Color is only applied when the caller asks for it.

use crate::branches::{Branch, Catalog, DeletionLedger, RemoteOutcome, SECONDS_PER_DAY, SkipReason};
use crate::error::{KwgitError, Result};
use crate::prompt::plural;
use chrono::DateTime;
use owo_colors::Style;
use serde::Serialize;
use std::io::IsTerminal;

const INDEX_WIDTH: usize = 5;
const NAME_WIDTH: usize = 35;
const DATE_WIDTH: usize = 15;
const AGE_WIDTH: usize = 8;

/// Whether stdout should receive ANSI colors.
pub fn stdout_supports_color() -> bool {
    std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
}

/// Compact age: whole years, else months (30 days), else weeks, else days.
pub fn format_age(seconds: i64) -> String {
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    let (weeks, months, years) = (days / 7, days / 30, days / 365);

    if years > 0 {
        format!("{}y", years)
    } else if months > 0 {
        format!("{}m", months)
    } else if weeks > 0 {
        format!("{}w", weeks)
    } else {
        format!("{}d", days)
    }
}

/// Calendar date of a unix timestamp, e.g. `Mar 4, 2024` (UTC).
pub fn format_date(timestamp: i64) -> String {
    DateTime::from_timestamp(timestamp, 0)
        .map(|dt| dt.format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

/// How old a branch looks in the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Staleness {
    Fresh,
    Aging,
    Stale,
}

impl Staleness {
    /// Under a week is fresh, under a month is aging.
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 7 => Staleness::Fresh,
            d if d < 30 => Staleness::Aging,
            _ => Staleness::Stale,
        }
    }

    /// Staleness of `branch` at `now`.
    ///
    /// A creation date later than the last commit (a branch cut from an old
    /// commit) is what counts, so a freshly created branch is not flagged.
    pub fn of(branch: &Branch, now: i64) -> Self {
        let since = branch.creation_date.max(branch.last_commit_date);
        Self::from_days((now - since).div_euclid(SECONDS_PER_DAY))
    }

    fn style(self) -> Style {
        match self {
            Staleness::Fresh => Style::new(),
            Staleness::Aging => Style::new().yellow(),
            Staleness::Stale => Style::new().red(),
        }
    }
}

fn row_style(branch: &Branch, now: i64) -> Style {
    if branch.is_current {
        Style::new().cyan()
    } else if branch.is_protected {
        Style::new().dimmed()
    } else {
        Staleness::of(branch, now).style()
    }
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        style.style(text).to_string()
    } else {
        text.to_string()
    }
}

fn display_name(branch: &Branch) -> String {
    let mut name = branch.name.clone();
    if branch.is_remote {
        name.push_str(" (remote)");
    }
    if branch.is_protected {
        name.push_str(" (protected)");
    }
    if branch.is_current {
        name = format!("* {}", name);
    }
    name
}

/// The `list` table. Row indices are the ones `focus` accepts.
pub fn catalog_table(catalog: &Catalog, now: i64, color: bool) -> String {
    let headers = ["Index", "Branch", "Created", "Last Commit", "Age"];
    let widths = [INDEX_WIDTH, NAME_WIDTH, DATE_WIDTH, DATE_WIDTH, AGE_WIDTH];

    let mut rows = Vec::with_capacity(catalog.len() + 2);
    rows.push(
        headers
            .iter()
            .zip(widths)
            .map(|(h, w)| format!("{:w$}", h, w = w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    rows.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("  "),
    );

    for (index, branch) in catalog.iter().enumerate() {
        let style = row_style(branch, now);
        let name = format!("{:w$}", display_name(branch), w = NAME_WIDTH);
        let age = format!("{:w$}", format_age(now - branch.last_commit_date), w = AGE_WIDTH);

        let row = format!(
            "{:<iw$}  {}  {:dw$}  {:dw$}  {}",
            index,
            paint(&name, style, color),
            format_date(branch.creation_date),
            format_date(branch.last_commit_date),
            paint(&age, style, color),
            iw = INDEX_WIDTH,
            dw = DATE_WIDTH,
        );
        rows.push(row.trim_end().to_string());
    }

    rows.join("\n")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ListEntry<'a> {
    name: &'a str,
    creation_date: i64,
    last_commit_date: i64,
    age: String,
    is_protected: bool,
}

/// The `list --json` document.
pub fn catalog_json(catalog: &Catalog, now: i64) -> Result<String> {
    let entries: Vec<ListEntry<'_>> = catalog
        .iter()
        .map(|branch| ListEntry {
            name: &branch.name,
            creation_date: branch.creation_date,
            last_commit_date: branch.last_commit_date,
            age: format_age(now - branch.last_commit_date),
            is_protected: branch.is_protected,
        })
        .collect();
    to_json(&entries)
}

/// Full branch records, as printed by `focus --json`.
pub fn branches_json(branches: &[Branch]) -> Result<String> {
    to_json(branches)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| KwgitError::UserError(format!("failed to render JSON: {}", e)))
}

/// Bulleted list of branches with their markers.
pub fn bullet_list(branches: &[Branch]) -> String {
    branches
        .iter()
        .map(|branch| {
            let mut line = format!("  • {}", branch.name);
            if branch.is_remote {
                line.push_str(" (remote)");
            }
            if branch.is_current {
                line.push_str(" (current)");
            }
            if branch.is_protected {
                line.push_str(" (protected)");
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Per-branch outcome lines followed by the summary counts.
pub fn ledger_report(ledger: &DeletionLedger, remote: &str) -> String {
    let mut lines = Vec::new();

    for entry in &ledger.deleted {
        let branch = &entry.branch;
        if branch.is_remote {
            lines.push(format!("✓ Deleted remote branch: {}/{}", remote, branch.name));
            continue;
        }
        lines.push(format!("✓ Deleted local branch: {}", branch.name));
        match entry.remote {
            RemoteOutcome::Deleted => {
                lines.push(format!("✓ Deleted remote branch: {}/{}", remote, branch.name));
            }
            RemoteOutcome::Absent => lines.push(format!(
                "ⓘ Skipped remote delete: {}/{} does not exist.",
                remote, branch.name
            )),
            RemoteOutcome::NotRequested => {}
        }
    }

    for entry in &ledger.skipped {
        match entry.reason {
            SkipReason::Declined => lines.push(format!("  Skipped {}", entry.branch.label())),
            SkipReason::DryRun => lines.push(format!("  Would delete {}", entry.branch.label())),
        }
    }

    for entry in &ledger.failed {
        let kind = if entry.branch.is_remote { "remote branch " } else { "" };
        lines.push(format!(
            "✗ Failed to delete {}{}: {}",
            kind, entry.branch.name, entry.error
        ));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }

    let deleted = ledger.deleted.len();
    if deleted > 0 {
        lines.push(format!("✓ Successfully deleted {} {}.", deleted, plural(deleted)));
    }
    let skipped = ledger.skipped.len();
    if skipped > 0 {
        lines.push(format!("⊘ Skipped {} {}.", skipped, plural(skipped)));
    }
    let failed = ledger.failed.len();
    if failed > 0 {
        lines.push(format!("✗ Failed to delete {} {}.", failed, plural(failed)));
    }

    lines.join("\n")
}

//! One-shot load of the place dataset.
//!
//! Runs once at startup, before the server binds. Nothing here is fatal to
//! the process: a missing or unusable file produces `LoadOutcome::Failed`
//! and the service starts anyway, answering queries with a
//! data-unavailable error.

use crate::models::{PlaceRecord, RawPlaceRow};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{error, info, warn};

/// Result of the startup load.
///
/// `Empty` means the file parsed but held no data rows (header-only
/// input). `Failed` means the file could not be read, or every row it held
/// was unusable. Queries treat both as data-unavailable; logs and
/// `/api/stats` report them separately.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded(Vec<PlaceRecord>),
    Empty,
    Failed(String),
}

/// Row counters reported after the load.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadSummary {
    pub kept: usize,
    pub skipped: usize,
}

/// How many bad rows get an individual warning before we go quiet.
const MAX_ROW_WARNINGS: usize = 5;

pub fn load_places(path: &Path) -> (LoadOutcome, LoadSummary) {
    info!("Loading places from {}", path.display());

    // flexible() keeps ragged rows (trailing delimiters, missing columns)
    // from aborting the whole read; they fall out per-row below instead.
    let mut reader = match ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
    {
        Ok(reader) => reader,
        Err(e) => {
            error!("Failed to open {}: {}", path.display(), e);
            return (LoadOutcome::Failed(e.to_string()), LoadSummary::default());
        }
    };

    let mut places = Vec::new();
    let mut summary = LoadSummary::default();

    for (i, row) in reader.deserialize::<RawPlaceRow>().enumerate() {
        let parsed = row
            .map_err(anyhow::Error::from)
            .and_then(RawPlaceRow::into_place);
        match parsed {
            Ok(place) => {
                places.push(place);
                summary.kept += 1;
            }
            Err(e) => {
                if summary.skipped < MAX_ROW_WARNINGS {
                    // +2: one for the header line, one for zero-indexing
                    warn!("Skipping line {}: {}", i + 2, e);
                }
                summary.skipped += 1;
            }
        }
    }

    if summary.skipped > MAX_ROW_WARNINGS {
        warn!("{} rows skipped in total", summary.skipped);
    }

    if places.is_empty() {
        if summary.skipped > 0 {
            error!(
                "No usable rows in {} ({} rows all failed to parse)",
                path.display(),
                summary.skipped
            );
            return (
                LoadOutcome::Failed(format!("all {} rows failed to parse", summary.skipped)),
                summary,
            );
        }
        warn!("{} contained no data rows", path.display());
        return (LoadOutcome::Empty, summary);
    }

    info!(
        "Loaded {} valid place entries ({} rows skipped)",
        summary.kept, summary.skipped
    );
    (LoadOutcome::Loaded(places), summary)
}

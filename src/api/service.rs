//! Shared query logic over the loaded place table.
//!
//! The service owns the snapshot produced by the loader and is handed to
//! the handlers behind an `Arc`. The table is written once before the
//! server binds and never mutated afterwards, so no locking is involved;
//! every query is a bounded synchronous scan.

use crate::loader::{LoadOutcome, LoadSummary};
use crate::models::PlaceRecord;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq)]
pub enum QueryError {
    /// No dataset is available to query: the load failed or produced no
    /// rows. Distinct from a query with zero matches.
    #[error("Data not loaded")]
    DataUnavailable,
}

/// Load status document served by `/api/stats`.
#[derive(Debug, Serialize)]
pub struct ServiceStats {
    pub status: &'static str,
    pub places: usize,
    pub rows_skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub struct PlaceService {
    outcome: LoadOutcome,
    summary: LoadSummary,
}

impl PlaceService {
    pub fn new(outcome: LoadOutcome, summary: LoadSummary) -> Self {
        Self { outcome, summary }
    }

    /// Build a service directly over an in-memory table. Fixture path for
    /// tests; an empty table counts as nothing loaded.
    pub fn from_table(places: Vec<PlaceRecord>) -> Self {
        let summary = LoadSummary {
            kept: places.len(),
            skipped: 0,
        };
        let outcome = if places.is_empty() {
            LoadOutcome::Empty
        } else {
            LoadOutcome::Loaded(places)
        };
        Self::new(outcome, summary)
    }

    /// All coordinates whose place name ends with `raw`, in load order.
    ///
    /// The input is trimmed and lowercased before matching. An empty query
    /// returns an empty result before the availability check, so "no query
    /// yet" never reads as an error even when the load failed.
    pub fn query_by_ending(&self, raw: &str) -> Result<Vec<[f64; 2]>, QueryError> {
        let ending = raw.trim().to_lowercase();
        if ending.is_empty() {
            return Ok(Vec::new());
        }

        let places = match &self.outcome {
            LoadOutcome::Loaded(places) => places,
            LoadOutcome::Empty | LoadOutcome::Failed(_) => {
                return Err(QueryError::DataUnavailable)
            }
        };

        let coords: Vec<[f64; 2]> = places
            .iter()
            .filter(|place| place.name.ends_with(&ending))
            .map(|place| [place.latitude, place.longitude])
            .collect();

        info!("Found {} places ending with '{}'", coords.len(), ending);
        Ok(coords)
    }

    pub fn stats(&self) -> ServiceStats {
        match &self.outcome {
            LoadOutcome::Loaded(places) => ServiceStats {
                status: "loaded",
                places: places.len(),
                rows_skipped: self.summary.skipped,
                error: None,
            },
            LoadOutcome::Empty => ServiceStats {
                status: "empty",
                places: 0,
                rows_skipped: self.summary.skipped,
                error: None,
            },
            LoadOutcome::Failed(reason) => ServiceStats {
                status: "failed",
                places: 0,
                rows_skipped: self.summary.skipped,
                error: Some(reason.clone()),
            },
        }
    }
}

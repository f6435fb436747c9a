//! Branch lifecycle engine.
//!
//! Builds a reconciled, creation-ordered catalog of branches from the
//! backend, classifies deletion candidates (by age window or by
//! pattern/merge status), and runs deletion batches that record every
//! outcome in a [`DeletionLedger`] instead of stopping at the first error.

mod catalog;
mod classify;
mod deletion;
mod timestamps;
mod types;


pub use catalog::{CatalogOptions, build_catalog, parse_indices};
pub use classify::{AgeWindow, PatternQuery, classify_by_age, classify_by_pattern};
pub use deletion::{
    Confirmation, Confirmer, DeletionLedger, DeletionPolicy, RemoteOutcome, SkipReason,
    delete_batch, ensure_deletable,
};
#[cfg(test)]
pub use deletion::{DeletedEntry, FailedEntry, SkippedEntry};
pub use types::{Branch, Catalog};

/// Seconds per day used for all age computations.
pub const SECONDS_PER_DAY: i64 = 86_400;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::Country;

mod client;
pub use client::OlympicsClient;

/// Observable state of one fetch cycle, published through `on_update` after
/// each transition. `table_loading` covers only the window before the first
/// page resolves; `loading` covers the whole cycle.
#[derive(Debug, Clone, Default)]
pub struct LoadState {
    pub countries: Vec<Country>,
    pub table_loading: bool,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    pub(crate) fn started() -> Self {
        Self {
            countries: Vec::new(),
            table_loading: true,
            loading: true,
            error: None,
        }
    }
}

/// Outcome of a full fetch cycle. Failures keep every record from pages that
/// completed before the error, so callers can show partial data alongside the
/// failure instead of a blank error view.
#[derive(Debug)]
pub enum FetchOutcome {
    Complete(Vec<Country>),
    Partial {
        countries: Vec<Country>,
        error: anyhow::Error,
    },
    Cancelled {
        countries: Vec<Country>,
    },
}

impl FetchOutcome {
    pub fn countries(&self) -> &[Country] {
        match self {
            FetchOutcome::Complete(countries)
            | FetchOutcome::Partial { countries, .. }
            | FetchOutcome::Cancelled { countries } => countries,
        }
    }
}

/// Shared cancellation flag, checked before each page request after the
/// first. A cancelled cycle stops fetching and keeps what it accumulated.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

//! In-memory prediction statistics.
//!
//! `StatsAggregator` is created once at startup and shared by handle
//! (`Arc`). The counter triple lives behind a single `Mutex` so that
//! `total == high_risk + low_risk` holds for every observer. Counters are
//! never reset or persisted.
//!
//! The critical section cannot leave the triple half-updated, so a
//! poisoned lock is recovered rather than reported.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::Serialize;

use crate::models::RiskLevel;

/// Immutable copy of the counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total: u64,
    pub high_risk: u64,
    pub low_risk: u64,
}

/// Thread-safe prediction tally.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    counters: Mutex<StatsSnapshot>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, StatsSnapshot> {
        self.counters.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Count one successful prediction.
    pub fn record(&self, level: RiskLevel) {
        let mut counters = self.lock();
        counters.total += 1;
        match level {
            RiskLevel::High => counters.high_risk += 1,
            RiskLevel::Low => counters.low_risk += 1,
        }
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        *self.lock()
    }
}

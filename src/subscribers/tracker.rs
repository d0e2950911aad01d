//! # Initialization tracker with sequence-based ordering.
//!
//! Mirrors which units are initialized, using event sequence numbers to handle
//! out-of-order delivery.
//!
//! ## Architecture
//! ```text
//! Registry ──► Bus ──► SubscriberSet ──► InitTracker::on_event() ──► update()
//!                                                 │
//!                                                 ▼
//!                                   HashMap<String, UnitState>
//!                                     (id → {seq, initialized})
//! ```
//!
//! ## Rules
//! - Only `UnitInitialized` / `UnitReset` change the initialized state
//! - Read operations (`snapshot`, `is_initialized`) are **eventually consistent**
//! - Events with `seq <= last_seq` are **rejected** (stale)

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

#[derive(Debug, Clone)]
struct UnitState {
    last_seq: u64,
    initialized: bool,
}

/// Thread-safe mirror of unit initialization state.
#[derive(Default)]
pub struct InitTracker {
    state: RwLock<HashMap<String, UnitState>>,
}

impl InitTracker {
    /// Creates a new empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies an event if it is newer than the last one seen for its unit.
    ///
    /// Returns true if the initialized state was written.
    ///
    /// ```text
    /// update(UnitReset, seq=100)       → initialized=false, last_seq=100
    /// update(UnitInitialized, seq=99)  → rejected (stale)
    /// ```
    pub async fn update(&self, ev: &Event) -> bool {
        let initialized = match ev.kind {
            EventKind::UnitInitialized => true,
            EventKind::UnitReset => false,
            _ => return false,
        };
        let Some(id) = ev.unit.as_deref() else {
            return false;
        };

        let mut state = self.state.write().await;
        let entry = state.entry(id.to_string()).or_insert(UnitState {
            last_seq: 0,
            initialized: false,
        });
        if ev.seq <= entry.last_seq {
            return false;
        }
        entry.last_seq = ev.seq;
        entry.initialized = initialized;
        true
    }

    /// Returns sorted list of initialized unit identifiers.
    pub async fn snapshot(&self) -> Vec<String> {
        let state = self.state.read().await;
        let mut ids: Vec<String> = state
            .iter()
            .filter(|(_, st)| st.initialized)
            .map(|(id, _)| id.clone())
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Returns true if the unit is currently initialized.
    pub async fn is_initialized(&self, id: &str) -> bool {
        self.state
            .read()
            .await
            .get(id)
            .map(|st| st.initialized)
            .unwrap_or(false)
    }
}

#[async_trait]
impl Subscribe for InitTracker {
    async fn on_event(&self, event: &Event) {
        self.update(event).await;
    }

    fn name(&self) -> &'static str {
        "init-tracker"
    }
}

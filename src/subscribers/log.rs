//! # LogWriter: simple event printer
//!
//! A minimal subscriber that prints incoming [`Event`]s to stdout.
//! Use it for debugging or demos.
//!
//! ## Example output
//! ```text
//! [registered] unit="nav" always_run
//! [resolved] unit="gallery"
//! [initialized] unit="nav"
//! [skipped] unit="ghost" reason="unknown"
//! [controller-skipped] unit="home" reason="already_initialized"
//! [failed] unit="broken" err="unit_failed"
//! [page-ready] event="DOMContentLoaded"
//! ```

use async_trait::async_trait;

use crate::events::{Event, EventKind};
use crate::subscribers::Subscribe;

/// Event writer subscriber.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Subscribe for LogWriter {
    async fn on_event(&self, e: &Event) {
        let unit = e.unit.as_deref().unwrap_or("");
        let reason = e.reason.as_deref().unwrap_or("");
        match e.kind {
            EventKind::UnitRegistered => {
                println!("[registered] unit={unit:?} {reason}");
            }
            EventKind::UnitResolved => {
                println!("[resolved] unit={unit:?}");
            }
            EventKind::UnitInitialized => {
                println!("[initialized] unit={unit:?}");
            }
            EventKind::UnitSkipped => {
                println!("[skipped] unit={unit:?} reason={reason:?}");
            }
            EventKind::ControllerSkipped => {
                println!("[controller-skipped] unit={unit:?} reason={reason:?}");
            }
            EventKind::UnitReset => {
                println!("[reset] unit={unit:?}");
            }
            EventKind::UnitFailed => {
                println!("[failed] unit={unit:?} err={reason:?}");
            }
            EventKind::PageReady => {
                println!("[page-ready] event={reason:?}");
            }
            EventKind::PageStarted => {
                println!("[page-started] controller={unit:?}");
            }
            EventKind::PageCompleted => {
                println!("[page-completed] controller={unit:?}");
            }
            EventKind::SubscriberOverflow => {
                println!("[subscriber-overflow] subscriber={unit:?} reason={reason:?}");
            }
            EventKind::SubscriberPanicked => {
                println!("[subscriber-panicked] subscriber={unit} info={reason}");
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}

//! Process-wide log sink invoked by [`Record::log`].
//!
//! The default sink prints the record's JSON rendering to stdout. Replace it
//! with [`set_sink`] (e.g. with [`tracing_sink`]) and restore it with
//! [`reset_sink`]. Replacement is last-writer-wins: a `log` call that is
//! already running keeps the sink it picked up.
//!
//! There is one sink for both levels. A sink that wants separate handling
//! for errors and infos branches on [`Record::level`], as [`tracing_sink`]
//! does:
//!
//! ```
//! use typerr_core::{set_sink, Level, Record};
//!
//! set_sink(|record: &Record| match record.level() {
//!     Level::Error => eprintln!("{record}"),
//!     Level::Info => println!("{record}"),
//! });
//! # typerr_core::reset_sink();
//! ```

use crate::record::Record;
use crate::types::Level;
use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

/// Callback shape accepted by [`set_sink`].
pub type Sink = Arc<dyn Fn(&Record) + Send + Sync + 'static>;

static SINK: Lazy<RwLock<Sink>> = Lazy::new(|| {
    let sink: Sink = Arc::new(stdout_sink);
    RwLock::new(sink)
});

/// Replace the process-wide sink.
pub fn set_sink<F>(sink: F)
where
    F: Fn(&Record) + Send + Sync + 'static,
{
    let mut guard = SINK.write().unwrap_or_else(|poisoned| poisoned.into_inner());
    *guard = Arc::new(sink);
    tracing::debug!("log sink replaced");
}

/// Restore the default stdout sink.
pub fn reset_sink() {
    set_sink(stdout_sink);
}

/// Hand `record` to the current sink. The lock is released before the sink
/// runs, so a sink may itself call [`set_sink`].
pub(crate) fn emit(record: &Record) {
    let sink = {
        let guard = SINK.read().unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(&guard)
    };
    sink(record);
}

/// Default sink: one line of JSON on stdout. Serialization errors are
/// printed in place of the record, never returned.
pub fn stdout_sink(record: &Record) {
    match serde_json::to_string(record) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("{err}"),
    }
}

/// Forward records as `tracing` events: error-level records at `ERROR`,
/// info-level records at `INFO`. Debug entries go to the event only at
/// `DEBUG` verbosity.
pub fn tracing_sink(record: &Record) {
    match record.level() {
        Level::Error => tracing::error!(
            code = record.code(),
            http_status = record.http_status(),
            rpc_status = record.rpc_status(),
            info = ?record.info(),
            "{}",
            record.message()
        ),
        Level::Info => tracing::info!(
            code = record.code(),
            info = ?record.info(),
            "{}",
            record.message()
        ),
    }
    if !record.debug().is_empty() {
        tracing::debug!(code = record.code(), debug = ?record.debug(), "record debug entries");
    }
}

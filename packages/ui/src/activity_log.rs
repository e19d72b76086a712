//! Transient notifications and the session's activity history.
//!
//! Views report outcomes through [`log_activity`]. The newest entry that has not
//! been dismissed is shown as a toast until the user closes it or
//! [`TOAST_TICKS`] ticks of [`TOAST_TICK`] elapse. The ticking runs in
//! [`ActivityLogProvider`], so toasts expire even after the view that raised
//! them is gone. Dismissed entries stay in the history panel until it is
//! cleared.

use std::time::Duration;

use dioxus::prelude::*;

use crate::platform;
use crate::{ActivityLogPanel, ActivityToast};

pub const TOAST_TICK: Duration = Duration::from_secs(1);
pub const TOAST_TICKS: u32 = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Success,
    Error,
}

impl LogLevel {
    pub fn class(&self) -> &'static str {
        match self {
            LogLevel::Info => "info",
            LogLevel::Success => "success",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct LogEntry {
    pub id: u64,
    pub timestamp: String,
    pub level: LogLevel,
    pub message: String,
    pub dismissed: bool,
    /// Ticks left before the toast closes itself.
    ttl: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Vec<LogEntry>,
    next_id: u64,
    /// Whether the history panel is open.
    pub visible: bool,
}

impl ActivityLog {
    pub fn push(&mut self, level: LogLevel, message: impl Into<String>, timestamp: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(LogEntry {
            id,
            timestamp,
            level,
            message: message.into(),
            dismissed: false,
            ttl: TOAST_TICKS,
        });
        id
    }

    /// Hide the entry's toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.dismissed = true;
        }
    }

    /// Whether any toast is still waiting to expire.
    pub fn has_pending(&self) -> bool {
        self.entries.iter().any(|e| !e.dismissed)
    }

    /// Age every open toast by one tick, dismissing those that run out.
    pub fn tick(&mut self) {
        for entry in self.entries.iter_mut().filter(|e| !e.dismissed) {
            entry.ttl = entry.ttl.saturating_sub(1);
            if entry.ttl == 0 {
                entry.dismissed = true;
            }
        }
    }

    /// The entry to show as a toast, if any.
    pub fn toast(&self) -> Option<&LogEntry> {
        self.entries.iter().rev().find(|e| !e.dismissed)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn error_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.level == LogLevel::Error)
            .count()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

pub fn use_activity_log() -> Signal<ActivityLog> {
    use_context::<Signal<ActivityLog>>()
}

/// Record an outcome and show it as a toast that closes itself.
pub fn log_activity(log: &mut Signal<ActivityLog>, level: LogLevel, message: &str) {
    match level {
        LogLevel::Error => tracing::warn!(text = message, "activity"),
        _ => tracing::info!(text = message, "activity"),
    }
    log.write().push(level, message, platform::current_time());
}

/// Provides the [`ActivityLog`] context and renders the toast and history panel
/// above `children`.
#[component]
pub fn ActivityLogProvider(children: Element) -> Element {
    let mut log = use_signal(ActivityLog::default);
    use_context_provider(|| log);

    let _ticker = use_future(move || async move {
        loop {
            platform::sleep(TOAST_TICK).await;
            if log.peek().has_pending() {
                log.write().tick();
            }
        }
    });

    rsx! {
        {children}
        ActivityToast {}
        ActivityLogPanel {}
    }
}

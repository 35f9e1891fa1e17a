//! Bounded in-memory diagnostic log for connectivity troubleshooting.
//!
//! Newest entries sit at the front; once the ring is full the oldest are
//! dropped. Process-local only, nothing is persisted.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};

/// A single timestamped status line.
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Client-local capture time.
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

/// Prepend-only ring of human-readable status lines.
///
/// Success and failure entries are tagged with a leading glyph so the log
/// panel reads at a glance.
#[derive(Debug, Clone)]
pub struct DiagnosticLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl DiagnosticLog {
    /// Entries retained before the oldest are evicted.
    pub const DEFAULT_CAPACITY: usize = 8;

    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Prepend a timestamped entry, evicting the oldest past capacity.
    pub fn append(&mut self, message: impl Into<String>) {
        self.entries.push_front(LogEntry {
            timestamp: Utc::now(),
            message: message.into(),
        });
        self.entries.truncate(self.capacity);
    }

    /// Append a success entry (`✓` prefix).
    pub fn success(&mut self, message: impl AsRef<str>) {
        self.append(format!("✓ {}", message.as_ref()));
    }

    /// Append a failure entry (`✗` prefix).
    pub fn failure(&mut self, message: impl AsRef<str>) {
        self.append(format!("✗ {}", message.as_ref()));
    }

    /// Entries in reverse-chronological order, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &LogEntry> {
        self.entries.iter()
    }

    /// The most recent entry, if any.
    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DiagnosticLog {
    fn default() -> Self {
        Self::new()
    }
}

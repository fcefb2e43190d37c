//! Non-fatal diagnostics emitted while resolving breakpoints.
//!
//! Resolution never fails: an unknown breakpoint name is reported through a
//! [`DiagnosticSink`] and the affected bound is dropped. By default messages go
//! to the [`log`] facade at `warn` level. Resolvers can carry their own sink
//! (see [`Resolver::with_sink`](crate::Resolver::with_sink)), or the process-wide
//! sink can be replaced with [`set_diagnostic_sink`].

use once_cell::sync::Lazy;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Prefix attached to every diagnostic message.
pub const DIAGNOSTIC_PREFIX: &str = "styled-components-breakpoint";

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "styled_breakpoint";

/// Receives diagnostic messages.
pub trait DiagnosticSink: Send + Sync {
    /// Reports a single-line warning.
    fn warn(&self, message: &str);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn warn(&self, message: &str) {
        log::warn!(target: LOG_TARGET, "{}", message);
    }
}

/// Collects diagnostics in memory.
///
/// Clones share the same buffer, so a test can keep one handle and give the
/// other to a resolver.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{BreakpointTable, MemorySink, Resolver};
///
/// let sink = MemorySink::new();
/// let resolver = Resolver::new(BreakpointTable::defaults()).with_sink(sink.clone());
/// resolver.up("foobar");
///
/// assert_eq!(
///     sink.messages(),
///     vec![r#"styled-components-breakpoint: Breakpoint "foobar" was not found."#],
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the collected messages.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drops all collected messages.
    pub fn clear(&self) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl DiagnosticSink for MemorySink {
    fn warn(&self, message: &str) {
        self.messages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.to_string());
    }
}

static GLOBAL_SINK: Lazy<RwLock<Arc<dyn DiagnosticSink>>> =
    Lazy::new(|| RwLock::new(Arc::new(LogSink)));

/// Replaces the process-wide sink used by resolvers without their own.
///
/// This is mostly useful for tests that want to capture diagnostics from code
/// they do not construct themselves.
pub fn set_diagnostic_sink<S: DiagnosticSink + 'static>(sink: S) {
    let mut guard = GLOBAL_SINK.write().unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(sink);
}

/// Restores the default [`LogSink`] as the process-wide sink.
pub fn reset_diagnostic_sink() {
    set_diagnostic_sink(LogSink);
}

pub(crate) fn global_sink() -> Arc<dyn DiagnosticSink> {
    let guard = GLOBAL_SINK.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&*guard)
}

/// Formats a message with the crate prefix.
pub(crate) fn prefixed(message: impl std::fmt::Display) -> String {
    format!("{}: {}", DIAGNOSTIC_PREFIX, message)
}

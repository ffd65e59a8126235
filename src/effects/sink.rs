//! Diagnostic sinks that receive rendered transition lines.

use std::sync::{Arc, Mutex, PoisonError};

/// Append-only text stream written to by the logging decorator.
///
/// Environments expose this capability so that decorated machines can
/// record each transition while the folded effect runs.
pub trait DiagnosticSink {
    /// Append one line. Implementations must keep lines in call order.
    fn write_line(&self, line: &str);
}

/// Writes every line to standard error.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn write_line(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Keeps lines in memory. Clones share the same buffer.
///
/// # Example
///
/// ```rust
/// use statefold::effects::{DiagnosticSink, MemorySink};
///
/// let sink = MemorySink::new();
/// let handle = sink.clone();
/// sink.write_line("NoItems");
///
/// assert_eq!(handle.lines(), vec!["NoItems".to_string()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lines grouped into `(state, event)` pairs, in the order written.
    /// A trailing unpaired line is dropped.
    pub fn pairs(&self) -> Vec<(String, String)> {
        self.lines()
            .chunks_exact(2)
            .map(|pair| (pair[0].clone(), pair[1].clone()))
            .collect()
    }
}

impl DiagnosticSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(line.to_string());
    }
}

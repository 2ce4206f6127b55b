//! Operator-facing report stream
//!
//! Build runs describe what they do through a [`Reporter`]. The CLI prints
//! to the console; tests record lines with [`MemoryReporter`].

/// Severity of a report line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Informational status (mode selection, skipped builds)
    Comment,
    /// Plain progress line
    Info,
    /// Something was built
    Success,
    /// Non-fatal problem; the run continues
    Warning,
}

/// Sink for report lines
pub trait Reporter {
    /// Emit one line
    fn line(&mut self, severity: Severity, message: &str);

    /// Emit a blank separator line
    fn blank(&mut self);

    /// Emit a [`Severity::Comment`] line
    fn comment(&mut self, message: &str) {
        self.line(Severity::Comment, message);
    }

    /// Emit a [`Severity::Info`] line
    fn info(&mut self, message: &str) {
        self.line(Severity::Info, message);
    }

    /// Emit a [`Severity::Success`] line
    fn success(&mut self, message: &str) {
        self.line(Severity::Success, message);
    }

    /// Emit a [`Severity::Warning`] line
    fn warning(&mut self, message: &str) {
        self.line(Severity::Warning, message);
    }
}

/// A recorded report line; `None` is a blank separator
pub type ReportLine = Option<(Severity, String)>;

/// Reporter that keeps every line in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    /// Lines in emission order
    pub lines: Vec<ReportLine>,
}

impl MemoryReporter {
    /// Create an empty reporter
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages of the given severity, in order
    pub fn messages(&self, severity: Severity) -> Vec<&str> {
        self.lines
            .iter()
            .flatten()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.as_str())
            .collect()
    }

    /// Whether any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().flatten().any(|(_, m)| m.contains(needle))
    }

    /// Number of blank separators emitted
    pub fn blank_count(&self) -> usize {
        self.lines.iter().filter(|l| l.is_none()).count()
    }
}

impl Reporter for MemoryReporter {
    fn line(&mut self, severity: Severity, message: &str) {
        self.lines.push(Some((severity, message.to_string())));
    }

    fn blank(&mut self) {
        self.lines.push(None);
    }
}

//! Building multi-line log entries.

use std::fmt::{Display, Write};

use crate::resolution::Resolution;

const STEP_INDENT: &str = "  ";

/// Builds one log entry line by line.
///
/// Headlines go flush left; resolution steps are indented beneath them.
///
/// ```
/// use ccg_counters::log::Trace;
/// use ccg_counters::resolution::Resolution;
///
/// let mut trace = Trace::new();
/// trace.line("Vrestin enters with 2 counters.");
/// trace.steps(&Resolution::unmodified(2));
/// assert_eq!(trace.finish(), "Vrestin enters with 2 counters.");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Trace {
    text: String,
}

impl Trace {
    /// Start an empty entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a headline.
    pub fn line(&mut self, line: impl Display) {
        let _ = writeln!(self.text, "{line}");
    }

    /// Append a resolution's steps, indented.
    pub fn steps(&mut self, resolution: &Resolution) {
        for step in &resolution.steps {
            let _ = writeln!(self.text, "{STEP_INDENT}{step}");
        }
    }

    /// Append a headline followed by the steps that produced it.
    pub fn derived(&mut self, line: impl Display, resolution: &Resolution) {
        self.line(line);
        self.steps(resolution);
    }

    /// Finish the entry, without a trailing newline.
    #[must_use]
    pub fn finish(mut self) -> String {
        let trimmed = self.text.trim_end_matches('\n').len();
        self.text.truncate(trimmed);
        self.text
    }
}

//! Hierarchical progress reporting.
//!
//! A [`Reporter`] announces a top-level job; [`Reporter::start`] returns a
//! [`Task`] one indentation level deeper, and tasks open subtasks further in.
//! Every level indents by two spaces. Reporting is purely observational: the
//! lines go to a [`ReportOutput`] and nothing reads them back.
//!
//! ```text
//! deploy function
//!   - name: resize
//!     synthesize access policy
//!       uploads: 2 action(s)
//!       SUCCESS
//! deploy function: SUCCESS
//! ```

use std::error::Error;
use std::sync::{Arc, Mutex};

use tracing::info;

const INDENT: &str = "  ";

/// Where rendered report lines go.
pub trait ReportOutput: Send + Sync {
    fn write_line(&self, line: &str);
}

/// Writes lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleOutput;

impl ReportOutput for ConsoleOutput {
    fn write_line(&self, line: &str) {
        println!("{line}");
    }
}

/// Emits each line as a `tracing` event instead of printing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingOutput;

impl ReportOutput for TracingOutput {
    fn write_line(&self, line: &str) {
        info!(event = "Report", line = line);
    }
}

/// Keeps lines in memory.
#[derive(Debug, Default)]
pub struct BufferOutput {
    lines: Mutex<Vec<String>>,
}

impl BufferOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl ReportOutput for BufferOutput {
    fn write_line(&self, line: &str) {
        match self.lines.lock() {
            Ok(mut lines) => lines.push(line.to_string()),
            Err(poisoned) => poisoned.into_inner().push(line.to_string()),
        }
    }
}

/// A title with optional `name: value` attributes, printed in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    title: String,
    args: Vec<(String, String)>,
}

impl Message {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            args: Vec::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }
}

impl From<&str> for Message {
    fn from(title: &str) -> Self {
        Message::new(title)
    }
}

impl From<String> for Message {
    fn from(title: String) -> Self {
        Message::new(title)
    }
}

fn write_entry(
    output: &dyn ReportOutput,
    level: usize,
    title: &str,
    args: &[(String, String)],
) {
    let tab = INDENT.repeat(level);
    output.write_line(&format!("{tab}{title}"));
    for (name, value) in args {
        output.write_line(&format!("{tab}{INDENT}- {name}: {value}"));
    }
}

fn write_error(output: &dyn ReportOutput, level: usize, err: &dyn Error) {
    let tab = INDENT.repeat(level);
    output.write_line(&format!("{tab}{INDENT}error: {err}"));
    let mut source = err.source();
    while let Some(cause) = source {
        output.write_line(&format!("{tab}{INDENT}caused by: {cause}"));
        source = cause.source();
    }
}

/// The top-level entry of a report.
pub struct Reporter {
    output: Arc<dyn ReportOutput>,
    message: Message,
    level: usize,
}

impl Reporter {
    pub fn new(output: Arc<dyn ReportOutput>, message: impl Into<Message>) -> Self {
        Self {
            output,
            message: message.into(),
            level: 0,
        }
    }

    /// Print the title and attributes, and return the task for the work itself.
    pub fn start(&self) -> Task {
        write_entry(
            self.output.as_ref(),
            self.level,
            &self.message.title,
            &self.message.args,
        );
        Task {
            output: Arc::clone(&self.output),
            level: self.level + 1,
        }
    }

    pub fn success(&self) {
        let line = format!("{}: SUCCESS", self.message.title);
        write_entry(self.output.as_ref(), self.level, &line, &[]);
    }

    pub fn failure(&self, err: &dyn Error) {
        let line = format!("{}: FAILED", self.message.title);
        write_entry(self.output.as_ref(), self.level, &line, &[]);
        write_error(self.output.as_ref(), self.level, err);
    }
}

/// A unit of work inside a report.
pub struct Task {
    output: Arc<dyn ReportOutput>,
    level: usize,
}

impl Task {
    pub fn level(&self) -> usize {
        self.level
    }

    /// Open a nested reporter one level below this task and start it.
    pub fn subtask(&self, message: impl Into<Message>) -> Task {
        Reporter {
            output: Arc::clone(&self.output),
            message: message.into(),
            level: self.level + 1,
        }
        .start()
    }

    pub fn log(&self, message: impl Into<Message>) -> &Self {
        let message = message.into();
        write_entry(self.output.as_ref(), self.level, &message.title, &message.args);
        self
    }

    pub fn success(&self) {
        write_entry(self.output.as_ref(), self.level, "SUCCESS", &[]);
    }

    /// Report success together with result values.
    pub fn success_with<I, K, V>(&self, results: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let args: Vec<(String, String)> = results
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        write_entry(self.output.as_ref(), self.level, "SUCCESS:", &args);
    }

    pub fn failure(&self, err: &dyn Error) {
        write_entry(self.output.as_ref(), self.level, "FAILURE", &[]);
        write_error(self.output.as_ref(), self.level, err);
    }
}

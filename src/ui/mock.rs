//! Mock UI for tests.

use super::{OutputMode, Table, UserInterface};

/// Records everything written to it instead of printing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    /// All lines in emission order, prefixed by kind.
    pub lines: Vec<String>,
}

impl MockUI {
    /// Create a mock UI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock UI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            lines: Vec::new(),
        }
    }

    /// Check whether any recorded line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }

    /// Lines of a given kind, with the prefix stripped.
    pub fn of_kind(&self, kind: &str) -> Vec<&str> {
        let prefix = format!("{}:", kind);
        self.lines
            .iter()
            .filter_map(|l| l.strip_prefix(&prefix))
            .collect()
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.lines.push(format!("message:{}", msg));
    }

    fn success(&mut self, msg: &str) {
        self.lines.push(format!("success:{}", msg));
    }

    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("warning:{}", msg));
    }

    fn error(&mut self, msg: &str) {
        self.lines.push(format!("error:{}", msg));
    }

    fn show_header(&mut self, title: &str) {
        self.lines.push(format!("header:{}", title));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.lines.push(format!("kv:{}={}", key, value));
    }

    fn table(&mut self, table: &Table) {
        self.lines.push(format!("table:{}", table.render()));
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

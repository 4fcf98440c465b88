//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all output
//! for later assertion.
//!
//! # Example
//!
//! ```
//! use hoopdata::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Data ready to use!");
//!
//! assert!(ui.successes().contains(&"Data ready to use!".to_string()));
//! ```

use super::{OutputMode, UserInterface};

/// Mock UI implementation that records every interaction.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    headers: Vec<String>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// All plain messages shown so far.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// All success messages shown so far.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// All warnings shown so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// All errors shown so far.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// All hints shown so far.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// All headers shown so far.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Everything shown so far, flattened into one string for
    /// `contains`-style assertions.
    pub fn all_output(&self) -> String {
        let mut out = Vec::new();
        out.extend(self.headers.iter().cloned());
        out.extend(self.messages.iter().cloned());
        out.extend(self.successes.iter().cloned());
        out.extend(self.warnings.iter().cloned());
        out.extend(self.errors.iter().cloned());
        out.extend(self.hints.iter().cloned());
        out.join("\n")
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn hint(&mut self, msg: &str) {
        self.hints.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }
}

//! Terminal UI implementation.

use console::Term;
use std::io::Write;

use super::{should_use_colors, OutputMode, Theme, UserInterface};

const BANNER_WIDTH: usize = 60;

/// Terminal UI implementation.
pub struct TerminalUI {
    term: Term,
    theme: Theme,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode) -> Self {
        let theme = if should_use_colors() {
            Theme::new()
        } else {
            Theme::plain()
        };

        Self {
            term: Term::stdout(),
            theme,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_report() {
            writeln!(self.term, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_success(msg)).ok();
    }

    fn warning(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_warning(msg)).ok();
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.term, "{}", self.theme.format_error(msg)).ok();
    }

    fn hint(&mut self, msg: &str) {
        if self.mode.shows_report() {
            writeln!(self.term, "{}", self.theme.hint.apply_to(msg)).ok();
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_report() {
            let rule = "=".repeat(BANNER_WIDTH);
            writeln!(self.term, "{}", self.theme.border.apply_to(&rule)).ok();
            writeln!(self.term, "{}", self.theme.header.apply_to(title)).ok();
            writeln!(self.term, "{}", self.theme.border.apply_to(&rule)).ok();
        }
    }
}

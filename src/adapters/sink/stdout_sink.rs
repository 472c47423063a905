//! Terminal output sink.

use std::io::{self, Write};

use crate::ports::OutputSink;

/// Writes each line to stdout with a speaker prefix.
#[derive(Debug, Clone)]
pub struct StdoutSink {
    prefix: String,
}

impl StdoutSink {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn format_line(&self, line: &str) -> String {
        format!("{}{}", self.prefix, line)
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new("Bot: ")
    }
}

impl OutputSink for StdoutSink {
    fn emit(&self, lines: &[String]) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in lines {
            if writeln!(out, "{}", self.format_line(line)).is_err() {
                tracing::warn!("stdout closed, dropping output");
                return;
            }
        }
        let _ = out.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_prefix_marks_bot_lines() {
        assert_eq!(StdoutSink::default().format_line("Hi"), "Bot: Hi");
    }

    #[test]
    fn custom_prefix_is_used() {
        assert_eq!(StdoutSink::new("> ").format_line("Hi"), "> Hi");
    }
}

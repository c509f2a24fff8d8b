//! Leveled progress logging on stderr.
//!
//! A process-wide [`Logger`] is installed once from [`Settings`] with [`init`];
//! until then the defaults apply (info level, text format).

use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};

use crate::config::{LogFormat, Settings, Verbosity};

/// Log level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    /// Verbosity needed for this level to be printed.
    fn verbosity(self) -> Verbosity {
        match self {
            LogLevel::Info | LogLevel::Success => Verbosity::Info,
            LogLevel::Warning => Verbosity::Warning,
            LogLevel::Error => Verbosity::Error,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            LogLevel::Info => "   ",
            LogLevel::Success => "   ✓",
            LogLevel::Warning => "   ⚠️",
            LogLevel::Error => "   ❌",
        }
    }
}

/// A single log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Nesting depth for sub-steps
    #[serde(default)]
    pub indent: u8,
    pub timestamp: DateTime<Utc>,
}

impl LogEntry {
    fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            indent: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(LogLevel::Error, message)
    }

    pub fn with_indent(mut self, indent: u8) -> Self {
        self.indent = indent;
        self
    }
}

static LOGGER: OnceCell<Logger> = OnceCell::new();

/// Filters and renders log entries according to [`Settings`].
#[derive(Debug, Clone)]
pub struct Logger {
    settings: Settings,
}

impl Logger {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        self.settings.verbosity != Verbosity::Off && level.verbosity() <= self.settings.verbosity
    }

    /// Render an entry as one output line, or `None` if it is filtered out.
    pub fn render(&self, entry: &LogEntry) -> Option<String> {
        if !self.enabled(entry.level) {
            return None;
        }

        let text = || {
            let indent = "   ".repeat(entry.indent as usize);
            format!("{}{} {}", indent, entry.level.prefix(), entry.message)
        };

        match self.settings.log_format {
            LogFormat::Text => Some(text()),
            LogFormat::Json => Some(serde_json::to_string(entry).unwrap_or_else(|_| text())),
        }
    }

    /// Render the error that ends a run. Printed at every verbosity.
    pub fn render_fatal(&self, entry: &LogEntry) -> String {
        let text = || format!("❌ Error: {}", entry.message);
        match self.settings.log_format {
            LogFormat::Text => text(),
            LogFormat::Json => serde_json::to_string(entry).unwrap_or_else(|_| text()),
        }
    }

    pub fn log(&self, entry: LogEntry) {
        if let Some(line) = self.render(&entry) {
            eprintln!("{}", line);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

/// Install the global logger. Returns `false` if one was already installed.
pub fn init(settings: Settings) -> bool {
    LOGGER.set(Logger::new(settings)).is_ok()
}

fn logger() -> &'static Logger {
    LOGGER.get_or_init(Logger::default)
}

/// Convenient logging functions
pub fn log_info(msg: impl Into<String>) {
    logger().log(LogEntry::info(msg));
}

pub fn log_success(msg: impl Into<String>) {
    logger().log(LogEntry::success(msg));
}

pub fn log_warning(msg: impl Into<String>) {
    logger().log(LogEntry::warning(msg));
}

/// Report the failure that stops the run, whatever the verbosity.
pub fn log_fatal(msg: impl Into<String>) {
    eprintln!("{}", logger().render_fatal(&LogEntry::error(msg)));
}

pub fn log_info_indent(msg: impl Into<String>, indent: u8) {
    logger().log(LogEntry::info(msg).with_indent(indent));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logger_with(verbosity: Verbosity, log_format: LogFormat) -> Logger {
        Logger::new(Settings {
            verbosity,
            log_format,
        })
    }

    #[test]
    fn test_text_rendering() {
        let logger = Logger::default();
        let line = logger.render(&LogEntry::success("Read 2 rows")).unwrap();
        assert_eq!(line, "   ✓ Read 2 rows");

        let nested = logger
            .render(&LogEntry::info("College ID → CID").with_indent(1))
            .unwrap();
        assert_eq!(nested, "       College ID → CID");
    }

    #[test]
    fn test_json_rendering() {
        let logger = logger_with(Verbosity::Info, LogFormat::Json);
        let line = logger.render(&LogEntry::warning("1 column dropped")).unwrap();

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "warning");
        assert_eq!(value["message"], "1 column dropped");
        assert_eq!(value["indent"], 0);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_threshold_filters_lower_levels() {
        let logger = logger_with(Verbosity::Warning, LogFormat::Text);
        assert!(logger.render(&LogEntry::info("hidden")).is_none());
        assert!(logger.render(&LogEntry::success("hidden")).is_none());
        assert!(logger.render(&LogEntry::warning("shown")).is_some());
        assert!(logger.render(&LogEntry::error("shown")).is_some());
    }

    #[test]
    fn test_off_silences_everything() {
        let logger = logger_with(Verbosity::Off, LogFormat::Text);
        assert!(!logger.enabled(LogLevel::Error));
        assert!(logger.render(&LogEntry::error("hidden")).is_none());
    }

    #[test]
    fn test_fatal_ignores_verbosity() {
        let logger = logger_with(Verbosity::Off, LogFormat::Text);
        let line = logger.render_fatal(&LogEntry::error("Missing required column(s): TMUA score"));
        assert_eq!(line, "❌ Error: Missing required column(s): TMUA score");
    }

    #[test]
    fn test_fatal_json_rendering() {
        let logger = logger_with(Verbosity::Off, LogFormat::Json);
        let line = logger.render_fatal(&LogEntry::error("Failed to read absent.csv"));

        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "error");
        assert_eq!(value["message"], "Failed to read absent.csv");
    }
}

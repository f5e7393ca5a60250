//! Structured JSON logger
//!
//! - one log line = one event
//! - deterministic key ordering
//! - explicit severity levels
//! - synchronous, no buffering
//!
//! INFO and WARN go to stdout, ERROR and FATAL to stderr.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use chrono::Utc;
use serde_json::Value;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info,
    /// Recoverable issues
    Warn,
    /// Operation failures
    Error,
    /// Unrecoverable, process exits
    Fatal,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structured logger writing one JSON object per event.
pub struct Logger;

impl Logger {
    /// Log an event with the given severity and fields.
    pub fn log(severity: Severity, event: &str, fields: &[(&str, &str)]) {
        match severity {
            Severity::Info | Severity::Warn => {
                Self::log_to_writer(severity, event, fields, &mut io::stdout())
            }
            Severity::Error | Severity::Fatal => {
                Self::log_to_writer(severity, event, fields, &mut io::stderr())
            }
        }
    }

    fn log_to_writer<W: Write>(
        severity: Severity,
        event: &str,
        fields: &[(&str, &str)],
        writer: &mut W,
    ) {
        let mut line = serde_json::Map::new();
        line.insert("event".to_string(), Value::String(event.to_string()));
        line.insert(
            "severity".to_string(),
            Value::String(severity.as_str().to_string()),
        );
        line.insert("ts".to_string(), Value::String(Utc::now().to_rfc3339()));

        // Sort fields alphabetically so the line layout never depends on
        // the caller's field order.
        let sorted: BTreeMap<&str, &str> = fields.iter().copied().collect();
        for (key, value) in sorted {
            line.insert(key.to_string(), Value::String(value.to_string()));
        }

        let mut output = Value::Object(line).to_string();
        output.push('\n');

        let _ = writer.write_all(output.as_bytes());
        let _ = writer.flush();
    }

    /// Log at INFO level
    pub fn info(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Info, event, fields);
    }

    /// Log at WARN level
    pub fn warn(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Warn, event, fields);
    }

    /// Log at ERROR level
    pub fn error(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Error, event, fields);
    }

    /// Log at FATAL level
    pub fn fatal(event: &str, fields: &[(&str, &str)]) {
        Self::log(Severity::Fatal, event, fields);
    }
}

/// Capture a log line to a string for testing
#[cfg(test)]
pub fn capture_log(severity: Severity, event: &str, fields: &[(&str, &str)]) -> String {
    let mut buffer = Vec::new();
    Logger::log_to_writer(severity, event, fields, &mut buffer);
    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        assert!(Severity::Error < Severity::Fatal);
    }

    #[test]
    fn test_log_is_valid_json_with_leading_keys() {
        let output = capture_log(Severity::Info, "server_started", &[("port", "8000")]);

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "server_started");
        assert_eq!(parsed["severity"], "INFO");
        assert_eq!(parsed["port"], "8000");
        assert!(parsed["ts"].is_string());
    }

    #[test]
    fn test_log_field_order_is_deterministic() {
        let a = capture_log(Severity::Info, "e", &[("zebra", "1"), ("apple", "2")]);
        let b = capture_log(Severity::Info, "e", &[("apple", "2"), ("zebra", "1")]);

        // Strip the timestamps before comparing the rendered lines.
        let strip = |s: &str| {
            let mut v: Value = serde_json::from_str(s).unwrap();
            v.as_object_mut().unwrap().remove("ts");
            v.to_string()
        };
        assert_eq!(strip(&a), strip(&b));

        let apple = a.find("apple").unwrap();
        let zebra = a.find("zebra").unwrap();
        assert!(apple < zebra);
    }

    #[test]
    fn test_log_is_one_line() {
        let output = capture_log(Severity::Error, "boom", &[("detail", "line1\nline2")]);
        assert_eq!(output.chars().filter(|c| *c == '\n').count(), 1);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_log_escapes_special_chars() {
        let output = capture_log(Severity::Info, "e", &[("msg", "say \"hi\"")]);
        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["msg"], "say \"hi\"");
    }
}

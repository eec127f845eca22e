//! Command logging for replay
//!
//! Appends each recorded history entry to a file, either as a replayable
//! expression script or as JSON lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::CmdResult;
use crate::history::HistoryEntry;

/// Log file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One canonical call expression per line
    #[default]
    Script,
    /// One `{"cmdName", "cmdArgs"}` object per line
    JsonLines,
}

impl LogFormat {
    /// Detect format from file extension
    pub fn from_extension(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") | Some("jsonl") => LogFormat::JsonLines,
            _ => LogFormat::Script,
        }
    }
}

/// Command logger for recording executed commands
#[derive(Debug, Default)]
pub struct CommandLogger {
    writer: Option<BufWriter<File>>,
    format: LogFormat,
}

impl CommandLogger {
    /// Create an inactive logger
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a log file, replacing any log already open
    pub fn log_open(&mut self, path: &Path) -> CmdResult<()> {
        self.log_close()?;

        let format = LogFormat::from_extension(path);
        let mut writer = BufWriter::new(File::create(path)?);
        if format == LogFormat::Script {
            writeln!(writer, "# vecviz command log")?;
        }

        self.writer = Some(writer);
        self.format = format;

        log::info!("Logging to {:?} ({:?} format)", path, format);
        Ok(())
    }

    /// Record one entry; `call` is its canonical call expression
    ///
    /// Does nothing if logging is not active.
    pub fn log(&mut self, entry: &HistoryEntry, call: &str) {
        let Some(writer) = self.writer.as_mut() else {
            return;
        };

        let result = match self.format {
            LogFormat::Script => writeln!(writer, "{}", call),
            LogFormat::JsonLines => serde_json::to_string(entry)
                .map_err(std::io::Error::from)
                .and_then(|line| writeln!(writer, "{}", line)),
        };

        if let Err(e) = result {
            log::warn!("Failed to write to log: {}", e);
        }
    }

    /// Flush and close the log file
    pub fn log_close(&mut self) -> CmdResult<()> {
        if let Some(mut writer) = self.writer.take() {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.writer.is_some()
    }
}

impl Drop for CommandLogger {
    fn drop(&mut self) {
        let _ = self.log_close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::CommandArgs;

    fn temp_path(file: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("vecviz-{}-{}", std::process::id(), file))
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            LogFormat::from_extension(Path::new("session.json")),
            LogFormat::JsonLines
        );
        assert_eq!(
            LogFormat::from_extension(Path::new("session.rhai")),
            LogFormat::Script
        );
        assert_eq!(
            LogFormat::from_extension(Path::new("session")),
            LogFormat::Script
        );
    }

    #[test]
    fn test_inactive_logger_ignores_entries() {
        let mut logger = CommandLogger::new();
        assert!(!logger.is_active());
        logger.log(
            &HistoryEntry::new("listVectors", CommandArgs::new()),
            "listVectors()",
        );
        assert!(logger.log_close().is_ok());
    }

    #[test]
    fn test_json_lines_log() {
        let path = temp_path("log.jsonl");
        let mut logger = CommandLogger::new();
        logger.log_open(&path).unwrap();
        logger.log(
            &HistoryEntry::new("destroyVector", CommandArgs::new().with("vector", "up")),
            "destroyVector(\"up\")",
        );
        logger.log_close().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text.trim_end(),
            r#"{"cmdName":"destroyVector","cmdArgs":{"vector":"up"}}"#
        );
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_script_log() {
        let path = temp_path("log.rhai");
        let mut logger = CommandLogger::new();
        logger.log_open(&path).unwrap();
        logger.log(
            &HistoryEntry::new("destroyVector", CommandArgs::new().with("vector", "up")),
            "destroyVector(\"up\")",
        );
        logger.log_close().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["# vecviz command log", "destroyVector(\"up\")"]);
        let _ = std::fs::remove_file(&path);
    }
}

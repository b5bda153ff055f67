//! Logging utilities
//!
//! A shared in-memory log (shown in the logs dialog) with an optional file
//! writer under the XDG data directory. [`Logger::install`] wires the
//! `log` facade through fern into the same sink, so `log::debug!` lines
//! from other modules land in the dialog and the file too.

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

type SharedWriter = Arc<Mutex<BufWriter<File>>>;

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    enabled: bool,
    file_writer: Option<SharedWriter>,
}

impl Logger {
    /// In-memory only, file logging disabled.
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            enabled: false,
            file_writer: None,
        }
    }

    /// Build a logger according to the `[logging]` config section. When
    /// enabled, entries are also appended to the log file in the data dir.
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
        logger.enabled = enabled;

        if enabled {
            let path = Self::get_log_file_path()?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            logger.file_writer = Some(Arc::new(Mutex::new(BufWriter::new(file))));
        }

        Ok(logger)
    }

    /// Route the `log` facade into this logger via fern. Call once.
    pub fn install(&self) -> Result<()> {
        let level = if self.enabled {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        let sink = FacadeSink {
            logger: self.clone(),
            buf: Vec::new(),
        };
        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{} {}", record.level(), message)))
            .level(level)
            .chain(Box::new(sink) as Box<dyn Write + Send>)
            .apply()
            .context("Failed to install logger")?;
        Ok(())
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    pub fn file_writer(&self) -> Option<&SharedWriter> {
        self.file_writer.as_ref()
    }

    /// Where the log file lives (`<data_dir>/redditpains/redditpains.log`).
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("redditpains").join("redditpains.log"))
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(ref writer) = self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            let mut sorted_logs = logs.clone();
            sorted_logs.reverse();
            sorted_logs
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// Adapter feeding fern's output into the shared logger, one entry per
/// line.
struct FacadeSink {
    logger: Logger,
    buf: Vec<u8>,
}

impl Write for FacadeSink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buf.extend_from_slice(buf);
        while let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buf.drain(..=pos).collect();
            let text = String::from_utf8_lossy(&line).trim_end().to_string();
            if !text.is_empty() {
                self.logger.log(text);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if let Some(ref writer) = self.logger.file_writer {
            if let Ok(mut writer) = writer.lock() {
                writer.flush()?;
            }
        }
        Ok(())
    }
}

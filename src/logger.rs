use crate::constants::LOG_BUFFER_CAPACITY;
use anyhow::{Context, Result};
use chrono::Utc;
use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application.
///
/// Every entry is kept in a bounded in-memory buffer for the logs dialog.
/// When file logging is enabled the entries are also appended to
/// [`Logger::get_log_file_path`].
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            file_writer: None,
        }
    }

    /// Build a logger from the `logging.enabled` setting
    pub fn from_config(enabled: bool) -> Result<Self> {
        let mut logger = Self::new();
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

    /// Route records from the `log` facade into this logger.
    ///
    /// Can only succeed once per process.
    pub fn install(&self, level: log::LevelFilter) -> Result<()> {
        let sink = self.clone();
        fern::Dispatch::new()
            .format(|out, message, record| out.finish(format_args!("{:<5} {}", record.level(), message)))
            .level(level)
            .level_for("hyper", log::LevelFilter::Warn)
            .level_for("hyper_util", log::LevelFilter::Warn)
            .level_for("reqwest", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| sink.log(record.args().to_string())))
            .apply()
            .context("Failed to install logger")?;
        Ok(())
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        let timestamp = Utc::now().format("%H:%M:%S%.3f").to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() == LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
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

    pub fn has_file_writer(&self) -> bool {
        self.file_writer.is_some()
    }

    /// Flush pending file output
    pub fn flush(&self) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writer.flush();
            }
        }
    }

    /// Location of the log file when file logging is enabled
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
            .map(|dir| dir.join("gameshelf").join("gameshelf.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

//! File-based logger implementation.
//!
//! This module implements the [`log`] crate's logging facade, writing log
//! messages to both the console (terminal/debug output) and a `log.txt`
//! file next to the program.
//!
//! # Usage
//!
//! Initialize the logger once at the start of your program:
//!
//! ```ignore
//! use auriga::fs::logger;
//! use log::{info, warn, error, LevelFilter};
//!
//! fn main() {
//!     logger::init(LevelFilter::Debug).expect("Logger init failed");
//!
//!     info!("Program started");
//!     warn!("This is a warning");
//!     error!("This is an error");
//! }
//! ```
//!
//! # Log Output
//!
//! Each log entry includes:
//! - Log level (TRACE, DEBUG, INFO, WARN, ERROR)
//! - Timestamp (time since logger initialization)
//! - Target (module path)
//! - Message
//!
//! Example output:
//! ```text
//! INFO [2m 5s 123ms] auriga::tuning::watch - Watch Started: x
//! WARN [2m 5s 456ms] auriga::terminal::dispatcher - Unknown Command: z
//! ```

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    sync::{Mutex, OnceLock},
    time::{Duration, Instant},
};

use humantime::{FormattedDuration, format_duration};
use log::{LevelFilter, Metadata, Record, SetLoggerError};

/// A dual-output logger for the Auriga framework.
///
/// Writes log messages to both the console and a file (`log.txt`).
/// The file is created/truncated when the logger is initialized.
pub struct FileLogger {
    /// Buffered file writer for log output.
    ///
    /// Wrapped in a mutex for thread-safe access. May be `None` if
    /// the file could not be opened (e.g., read-only filesystem).
    file_writer: Mutex<Option<BufWriter<std::fs::File>>>,
}

impl FileLogger {
    fn new() -> Self {
        let file_writer = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open("log.txt")
            .ok()
            .map(BufWriter::new);

        Self {
            file_writer: Mutex::new(file_writer),
        }
    }
}

impl log::Log for FileLogger {
    fn enabled(&self, metadata: &Metadata) -> bool { metadata.level() <= log::max_level() }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let log_line = format!(
                "{} [{}] {} - {}\n",
                record.level(),
                get_time(),
                record.target(),
                record.args()
            );

            // Print to console
            print!("{}", log_line);

            if let Ok(mut writer_guard) = self.file_writer.lock() {
                if let Some(ref mut writer) = *writer_guard {
                    let _ = writer.write_all(log_line.as_bytes());
                }
            }
        }
    }

    fn flush(&self) {
        if let Ok(mut writer_guard) = self.file_writer.lock() {
            if let Some(ref mut writer) = *writer_guard {
                let _ = writer.flush();
            }
        }
    }
}

static LOGGER: OnceLock<FileLogger> = OnceLock::new();
static START: OnceLock<Instant> = OnceLock::new();

/// Initializes the Auriga logger.
///
/// This function must be called once before any logging macros are used.
/// It sets up the global logger to write to both the console and `log.txt`.
///
/// # Arguments
///
/// * `level` - The minimum log level to record. Messages below this level
///   will be ignored. Use [`LevelFilter::Trace`] for maximum verbosity or
///   [`LevelFilter::Error`] for critical messages only.
///
/// # Errors
///
/// Returns [`SetLoggerError`] if a logger has already been set.
///
/// # Example
///
/// ```ignore
/// use auriga::fs::logger;
/// use log::LevelFilter;
///
/// // Initialize with debug level logging
/// logger::init(LevelFilter::Debug)?;
/// ```
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    START.get_or_init(Instant::now);
    let logger = LOGGER.get_or_init(FileLogger::new);
    log::set_logger(logger).map(|()| log::set_max_level(level))
}

/// Returns the formatted duration since the logger was initialized,
/// truncated to milliseconds to keep log lines readable.
fn get_time() -> FormattedDuration {
    let uptime = START.get_or_init(Instant::now).elapsed();
    format_duration(Duration::from_millis(uptime.as_millis() as u64))
}

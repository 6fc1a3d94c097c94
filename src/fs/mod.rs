//! Filesystem utilities.
//!
//! This module provides the crate's file-backed logging, used for
//! recording telemetry and debug information from tuning sessions.
//!
//! # Logging
//!
//! The `logger` submodule provides a logger that writes to `log.txt`
//! next to the program. This is useful for reconstructing what happened
//! on the car after a run.
//!
//! # Example
//!
//! ```ignore
//! use auriga::fs::logger;
//! use log::{LevelFilter, info};
//!
//! // Initialize the logger at program start
//! logger::init(LevelFilter::Debug).expect("Failed to initialize logger");
//!
//! // Now you can use standard logging macros
//! info!("Console initialized");
//! ```

/// File-based logging.
///
/// Provides a logger implementation that writes to both the console
/// and a log file.
pub mod logger;

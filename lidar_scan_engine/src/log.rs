//! Internal logging system for the LidarScan3D engine
//!
//! Console logging for the scan pipeline:
//! - Pluggable sink through the Logger trait
//! - Ordered severities from Trace up to Error
//! - Colored console sink installed by default
//! - RwLock-guarded global slot, safe to swap from tests
//! - Error entries carry the emitting file and line

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for engine log entries.
///
/// Implement this to redirect engine output, e.g. into a scan session
/// file or a capture buffer in tests.
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::log::{Logger, LogEntry};
///
/// struct SessionLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for SessionLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Append to the session file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Process one entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The entry to record
    fn log(&self, entry: &LogEntry);
}

/// One emitted log record
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity of this record
    pub severity: LogSeverity,

    /// When the record was emitted
    pub timestamp: SystemTime,

    /// Emitting subsystem (e.g., "lidarscan::Scene", "lidarscan::ClipPlanes")
    pub source: String,

    /// Formatted message text
    pub message: String,

    /// Emitting file (error records only)
    pub file: Option<&'static str>,

    /// Emitting line (error records only)
    pub line: Option<u32>,
}

/// Severity of a log record, ordered least to most severe
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Per-frame spam (matrices, pass boundaries)
    Trace,

    /// Per-frame diagnostics worth keeping during development
    Debug,

    /// Lifecycle events (construction, files written)
    Info,

    /// Recoverable problems (device errors after a draw)
    Warn,

    /// Failures, recorded with their file and line
    Error,
}

/// Console sink used until a custom logger is installed.
///
/// Prints `[timestamp] [SEVERITY] [source] message`, with the emitting
/// `(file:line)` appended for error records. Severities are colored
/// (trace dim, debug cyan, info green, warn yellow, error bold red).
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Millisecond-resolution local time
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        // Fixed-width colored severity tag
        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        // Error records carry their origin
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== GLOBAL LOGGER =====

/// Global logger (initialized with DefaultLogger on first use)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)))
}

/// Install a custom logger in the global slot.
///
/// Everything the engine logs from this point on goes through the given
/// sink instead of the console.
///
/// # Arguments
///
/// * `logger` - Any type implementing the Logger trait
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::log::{self, Logger, LogEntry};
///
/// struct SessionLogger;
/// impl Logger for SessionLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Append to the session file...
///     }
/// }
///
/// log::set_logger(SessionLogger);
/// ```
pub fn set_logger<L: Logger + 'static>(logger: L) {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(logger);
    }
}

/// Put the console sink back in the global slot.
pub fn reset_logger() {
    if let Ok(mut lock) = logger_slot().write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Internal logging entry point (for simple logs without file:line)
///
/// Used by macros like scan_info!, scan_warn!, etc.
///
/// # Arguments
///
/// * `severity` - Log severity level
/// * `source` - Source module (e.g., "lidarscan::Scene")
/// * `message` - Log message
pub fn emit(severity: LogSeverity, source: &str, message: String) {
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Internal logging entry point with file:line information (for ERROR logs)
///
/// Used by the scan_error! macro to include source location.
///
/// # Arguments
///
/// * `severity` - Log severity level (typically Error)
/// * `source` - Source module (e.g., "lidarscan::Scene")
/// * `message` - Log message
/// * `file` - Source file path
/// * `line` - Source line number
pub fn emit_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    if let Ok(lock) = logger_slot().read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== SCAN MACROS =====

/// Trace a per-frame detail (matrix dumps, pass boundaries)
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::scan_trace;
///
/// scan_trace!("lidarscan::Scene", "Entering render pass");
/// ```
#[macro_export]
macro_rules! scan_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Record a development diagnostic
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::scan_debug;
///
/// scan_debug!("lidarscan::ClipPlanes", "Near plane: {}, far plane: {}", 25.74, 377.74);
/// ```
#[macro_export]
macro_rules! scan_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Record a lifecycle event (scene built, file written)
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::scan_info;
///
/// scan_info!("lidarscan::Scene", "Point cloud saved to '{}'", "scan.pcd");
/// ```
#[macro_export]
macro_rules! scan_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Record a recoverable problem
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::scan_warn;
///
/// scan_warn!("lidarscan::Scene", "Device error after draw: {}", "GL_INVALID_OPERATION");
/// ```
#[macro_export]
macro_rules! scan_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Record a failure, tagged with the emitting file and line
///
/// # Example
///
/// ```no_run
/// use lidar_scan_engine::scan_error;
///
/// scan_error!("lidarscan::Scene", "Failed to save point cloud: {}", "disk full");
/// ```
#[macro_export]
macro_rules! scan_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::emit_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;

//! # Logger
//!
//! Global diagnostics output for coupling front ends.
//! The adapter itself reports through an injected sink that forwards to `tracing`; this crate
//! installs the subscriber those events end up in: a compact console layer on stderr,
//! an optional non-blocking rolling file layer, and an `EnvFilter` honouring `RUST_LOG`.
//!
//! ## Example
//!
//! ```rust
//! # use vv_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("vvlink")
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 5;
const LOG_FILE_SUFFIX: &str = "log";

/// Maps a repeated `-v` count onto a level: none is `INFO`, one is `DEBUG`, more is `TRACE`.
#[must_use]
pub const fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// A builder for configuring and initializing the global tracing subscriber.
#[must_use = "The builder must be configured before it can be used to initialize the logger."]
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    directory: Option<PathBuf>,
    level: LevelFilter,
    env_filter: Option<String>,
    json: bool,
    rotation: Rotation,
    max_files: usize,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self {
            name: String::new(),
            console: true,
            directory: None,
            level: LevelFilter::INFO,
            env_filter: None,
            json: false,
            rotation: Rotation::NEVER,
            max_files: DEFAULT_MAX_FILES,
        }
    }
}

impl LoggerBuilder {
    /// Sets the logger name, used as the log file prefix.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Enables or disables the stderr console layer.
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Sets the minimum level emitted when no directive overrides it.
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds an explicit filter directive (e.g., `vv_adapter=trace`).
    ///
    /// `RUST_LOG` is ignored when a directive is set programmatically.
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Writes logs to rolling files inside `directory`.
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = Some(directory.into());
        self
    }

    /// Emits the file layer as JSON lines. Has no effect without [`LoggerBuilder::directory`].
    pub const fn json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub const fn max_files(mut self, max: usize) -> Self {
        self.max_files = max;
        self
    }

    /// Consumes the builder and installs the global tracing subscriber.
    ///
    /// The returned [`Logger`] owns the file writer guard; keep it alive until shutdown.
    ///
    /// # Errors
    /// * [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    ///   an unparsable filter, or when no layer is enabled.
    /// * [`LoggerError::Internal`] if the log directory cannot be created.
    /// * [`LoggerError::Appender`] if the rolling appender cannot be opened.
    /// * [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;

        let env_filter = self.build_env_filter()?;

        let mut layers = Vec::new();

        if self.console {
            layers.push(layer().compact().with_ansi(true).with_writer(std::io::stderr).boxed());
        }

        let guard = if let Some(directory) = self.directory {
            fs::create_dir_all(&directory).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create {}", directory.display()).into()),
            })?;

            let context = format!("Failed to open log files in {}", directory.display());
            let appender = RollingFileAppender::builder()
                .rotation(self.rotation)
                .filename_prefix(&self.name)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.max_files)
                .build(directory)
                .context(context)?;

            let (writer, guard) = tracing_appender::non_blocking(appender);
            let file_layer = layer().with_writer(writer).with_ansi(false);

            layers.push(if self.json { file_layer.json().boxed() } else { file_layer.boxed() });
            Some(guard)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry()
            .with(env_filter)
            .with(layers)
            .try_init()
            .context("A global subscriber is already installed")?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn build_env_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |filter| {
                builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{filter}': {e}").into(),
                    context: None,
                })
            },
        )
    }
}

/// Handle to the installed logging system.
///
/// Holds the background file writer guard; dropping it flushes and stops file output.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] with console output at `INFO`.
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::default()
    }

    /// Whether a file layer is active.
    #[must_use]
    pub const fn writes_files(&self) -> bool {
        self.guard.is_some()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::debug!("Logging system shutting down, flushing buffers...");
        }
    }
}

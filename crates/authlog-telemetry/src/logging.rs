//! Logger configuration and setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, MakeWriter, time::ChronoUtc},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

use crate::error::{TelemetryError, TelemetryResult};

/// Timestamp format applied to every log line: UTC, ISO-8601 with a numeric
/// zone offset (e.g. `2024-01-15T09:30:00+0000`).
pub const TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// A single log output destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// The standard-error stream.
    Stderr,
    /// The standard-output stream.
    Stdout,
    /// An append-mode log file at the given path.
    File(PathBuf),
}

impl LogOutput {
    /// Parse an output identifier: `"stderr"` and `"stdout"` select the
    /// corresponding stream, anything else is a file path.
    #[must_use]
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "stderr" => Self::Stderr,
            "stdout" => Self::Stdout,
            path => Self::File(PathBuf::from(path)),
        }
    }
}

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level filter (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_level")]
    pub level: String,
    /// Ordered output destinations; each gets its own encoder.
    #[serde(default = "default_outputs")]
    pub outputs: Vec<LogOutput>,
    /// Whether to record the calling file, line, and target on each event.
    #[serde(default = "default_true")]
    pub caller_info: bool,
    /// Filter directive overrides (e.g. `authlog_errors=debug`).
    #[serde(default)]
    pub directives: Vec<String>,
}

fn default_level() -> String {
    String::from("info")
}

fn default_outputs() -> Vec<LogOutput> {
    vec![LogOutput::Stderr]
}

fn default_true() -> bool {
    true
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            outputs: default_outputs(),
            caller_info: true,
            directives: Vec::new(),
        }
    }
}

impl LogConfig {
    /// Create a config with the given level and default outputs.
    #[must_use]
    pub fn new(level: impl Into<String>) -> Self {
        Self {
            level: level.into(),
            ..Self::default()
        }
    }

    /// Build a config from ordered output identifiers (`"stderr"`,
    /// `"stdout"`, or file paths).
    #[must_use]
    pub fn from_output_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            outputs: paths
                .into_iter()
                .map(|path| LogOutput::from_identifier(path.as_ref()))
                .collect(),
            ..Self::default()
        }
    }

    /// Append an output destination.
    #[must_use]
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.outputs.push(output);
        self
    }

    /// Replace the output list.
    #[must_use]
    pub fn with_outputs(mut self, outputs: Vec<LogOutput>) -> Self {
        self.outputs = outputs;
        self
    }

    /// Add a filter directive override.
    #[must_use]
    pub fn with_directive(mut self, directive: impl Into<String>) -> Self {
        self.directives.push(directive.into());
        self
    }

    /// Do not record caller file/line/target info.
    #[must_use]
    pub fn without_caller_info(mut self) -> Self {
        self.caller_info = false;
        self
    }

    /// Build the env filter from level and directives.
    fn build_filter(&self) -> TelemetryResult<EnvFilter> {
        let mut filter =
            EnvFilter::try_new(&self.level).map_err(|e| TelemetryError::Config(e.to_string()))?;

        for directive in &self.directives {
            filter = filter.add_directive(directive.parse().map_err(
                |e: tracing_subscriber::filter::ParseError| TelemetryError::Config(e.to_string()),
            )?);
        }

        Ok(filter)
    }
}

/// Install the global logger described by `config`.
///
/// Every output is opened eagerly: an unopenable destination, an invalid
/// filter, or an already installed subscriber is reported as an error,
/// never discarded.
///
/// # Errors
///
/// Returns [`TelemetryError`] if the configuration is invalid, an output
/// cannot be opened, or a global subscriber is already installed.
pub fn setup_logging(config: &LogConfig) -> TelemetryResult<()> {
    if config.outputs.is_empty() {
        return Err(TelemetryError::Config(String::from(
            "at least one log output is required",
        )));
    }
    let filter = config.build_filter()?;

    let mut layers = Vec::with_capacity(config.outputs.len());
    for output in &config.outputs {
        layers.push(match output {
            LogOutput::Stderr => writer_layer(config, std::io::stderr),
            LogOutput::Stdout => writer_layer(config, std::io::stdout),
            LogOutput::File(path) => writer_layer(config, file_appender(path)?),
        });
    }

    tracing_subscriber::registry()
        .with(filter)
        .with(layers)
        .try_init()
        .map_err(|e| TelemetryError::Init(e.to_string()))
}

/// Install a global logger writing to the given output identifiers, in
/// order (`"stderr"`, `"stdout"`, or file paths).
///
/// # Errors
///
/// Returns [`TelemetryError`] if an output cannot be opened or a global
/// subscriber is already installed.
pub fn setup_logging_to<I, S>(output_paths: I) -> TelemetryResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    setup_logging(&LogConfig::from_output_paths(output_paths))
}

/// Install the default logger (info level, stderr).
///
/// # Errors
///
/// Returns [`TelemetryError`] if a global subscriber is already installed.
pub fn setup_default_logging() -> TelemetryResult<()> {
    setup_logging(&LogConfig::default())
}

fn writer_layer<S, W>(config: &LogConfig, writer: W) -> Box<dyn Layer<S> + Send + Sync + 'static>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    fmt::layer()
        .json()
        .with_writer(writer)
        .with_timer(ChronoUtc::new(TIME_FORMAT.to_owned()))
        .with_target(true)
        .with_file(config.caller_info)
        .with_line_number(config.caller_info)
        .boxed()
}

fn file_appender(path: &Path) -> TelemetryResult<RollingFileAppender> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
        return Err(TelemetryError::Config(format!(
            "log output path has no file name: {}",
            path.display()
        )));
    };

    std::fs::create_dir_all(directory).map_err(|e| TelemetryError::OpenOutput {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| TelemetryError::OpenOutput {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn default_config() {
        let config = LogConfig::default();
        assert_eq!(config.level, "info");
        assert_eq!(config.outputs, vec![LogOutput::Stderr]);
        assert!(config.caller_info);
        assert!(config.directives.is_empty());
    }

    #[test]
    fn builder_methods() {
        let config = LogConfig::new("debug")
            .with_output(LogOutput::Stdout)
            .with_directive("hyper=warn")
            .without_caller_info();

        assert_eq!(config.level, "debug");
        assert_eq!(config.outputs, vec![LogOutput::Stderr, LogOutput::Stdout]);
        assert_eq!(config.directives, vec!["hyper=warn"]);
        assert!(!config.caller_info);
    }

    #[test]
    fn output_identifier_parsing() {
        assert_eq!(LogOutput::from_identifier("stderr"), LogOutput::Stderr);
        assert_eq!(LogOutput::from_identifier("stdout"), LogOutput::Stdout);
        assert_eq!(
            LogOutput::from_identifier("/var/log/auth.log"),
            LogOutput::File(PathBuf::from("/var/log/auth.log"))
        );
    }

    #[test]
    fn config_from_output_paths() {
        let config = LogConfig::from_output_paths(["stderr", "logs/auth.log"]);
        assert_eq!(
            config.outputs,
            vec![
                LogOutput::Stderr,
                LogOutput::File(PathBuf::from("logs/auth.log"))
            ]
        );
        assert_eq!(config.level, "info");
    }

    #[test]
    fn config_serde_round_trip() {
        let config = LogConfig::new("warn").with_output(LogOutput::File(PathBuf::from("auth.log")));

        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"level\":\"warn\""));

        let parsed: LogConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.level, "warn");
        assert_eq!(parsed.outputs, config.outputs);
    }

    #[test]
    fn build_filter_accepts_directives() {
        let config = LogConfig::new("debug").with_directive("authlog_errors=trace");
        assert!(config.build_filter().is_ok());
    }

    #[test]
    fn build_filter_rejects_bad_directive() {
        // EnvFilter is permissive with unknown targets, so test invalid syntax.
        let config = LogConfig::new("debug").with_directive("[invalid=syntax");
        assert!(matches!(
            config.build_filter(),
            Err(TelemetryError::Config(_))
        ));
    }

    #[test]
    fn file_appender_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/auth.log");
        assert!(file_appender(&path).is_ok());
        assert!(path.parent().unwrap().is_dir());
    }

    #[test]
    fn file_appender_rejects_path_without_file_name() {
        assert!(matches!(
            file_appender(Path::new("/")),
            Err(TelemetryError::Config(_))
        ));
    }

    #[test]
    fn time_format_renders_utc_offset() {
        let instant = chrono::Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        assert_eq!(
            instant.format(TIME_FORMAT).to_string(),
            "2024-01-15T09:30:00+0000"
        );
    }

    #[test]
    fn empty_output_list_is_rejected() {
        let config = LogConfig {
            outputs: Vec::new(),
            ..LogConfig::default()
        };
        assert!(matches!(
            setup_logging(&config),
            Err(TelemetryError::Config(_))
        ));
    }
}

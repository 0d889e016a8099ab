//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging for codec passes and controller transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=message=debug,state=debug` - scoped filtering
//! - `RUST_LOG=tagbox::entities=trace` - module-level filtering
//!
//! # Log Files
//!
//! With file logging on, logs are written to `~/.config/tagbox/logs/tagbox.log`
//! with daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::TextBoxModel;
use crate::util::char_len;

/// Initialize tracing subscriber with console and optional file logging
///
/// Console output respects RUST_LOG and defaults to `warn`.
pub fn init(file_logging: bool) {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = if file_logging {
        match crate::config_paths::ensure_logs_dir() {
            Ok(logs_dir) => {
                let file_appender =
                    tracing_appender::rolling::daily(logs_dir, crate::config_paths::LOG_FILE_NAME);
                Some(
                    fmt::layer()
                        .with_writer(file_appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_line_number(true)
                        .with_filter(EnvFilter::new("debug")),
                )
            }
            Err(e) => {
                eprintln!("Warning: Could not initialize file logging: {:#}", e);
                None
            }
        }
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight summary of text box state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateSummary {
    pub chars: usize,
    pub chars_left: i64,
    pub overflow_chars: usize,
    pub entity_count: usize,
}

impl StateSummary {
    pub fn from_model(model: &TextBoxModel) -> Self {
        let snapshot = model.snapshot();
        Self {
            chars: char_len(&snapshot.text),
            chars_left: snapshot.chars_left,
            overflow_chars: snapshot.overflow.as_deref().map_or(0, char_len),
            entity_count: snapshot.tags.hash.len()
                + snapshot.tags.mention.len()
                + snapshot.tags.cash.len()
                + snapshot.urls.len(),
        }
    }

    /// Generate a diff description between two summaries
    pub fn diff(&self, other: &StateSummary) -> Option<String> {
        let mut changes = Vec::new();

        if self.chars != other.chars {
            changes.push(format!("chars: {} → {}", self.chars, other.chars));
        }
        if self.chars_left != other.chars_left {
            changes.push(format!(
                "chars_left: {} → {}",
                self.chars_left, other.chars_left
            ));
        }
        if self.overflow_chars != other.overflow_chars {
            changes.push(format!(
                "overflow: {} → {}",
                self.overflow_chars, other.overflow_chars
            ));
        }
        if self.entity_count != other.entity_count {
            changes.push(format!(
                "entities: {} → {}",
                self.entity_count, other.entity_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

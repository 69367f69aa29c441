//! Logging utilities for SlotBook.
//!
//! This module provides a standardized approach to logging across all crates
//! in the workspace. It includes functions for initializing the tracing
//! subscriber and for logging results with context.

use slotbook_config::LoggingConfig;
use std::str::FromStr;
use tracing::{error, info, Level};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{config_error, SlotbookError};

/// Initialize the tracing subscriber with a specific log level.
///
/// The level applies to every `slotbook*` target; `RUST_LOG` may add further
/// directives.
pub fn init_with_level(level: Level) {
    let result = tracing_subscriber::registry()
        .with(console_layer())
        .with(filter_for(level))
        .try_init();

    // try_init fails when a global subscriber is already installed (tests)
    if result.is_ok() {
        info!("Logging initialized at level: {}", level);
    }
}

/// Initialize logging from the `[logging]` configuration section.
///
/// When `directory` is set, log lines are additionally written to a daily
/// rolling file `slotbook.log.<date>` in that directory. The returned guard
/// must be kept alive for the lifetime of the process so buffered lines are
/// flushed.
///
/// # Errors
///
/// Returns a configuration error for an unknown level name.
pub fn init_from_config(config: &LoggingConfig) -> Result<Option<WorkerGuard>, SlotbookError> {
    let level = Level::from_str(&config.level)
        .map_err(|_| config_error(format!("unknown log level '{}'", config.level)))?;

    let Some(directory) = config.directory.as_deref() else {
        init_with_level(level);
        return Ok(None);
    };

    let appender = tracing_appender::rolling::daily(directory, "slotbook.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let result = tracing_subscriber::registry()
        .with(console_layer())
        .with(fmt::layer().with_ansi(false).with_writer(writer))
        .with(filter_for(level))
        .try_init();

    if result.is_ok() {
        info!("Logging initialized at level: {} (files in {})", level, directory);
    }
    Ok(Some(guard))
}

fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
}

fn filter_for(level: Level) -> EnvFilter {
    let filter = EnvFilter::from_default_env();
    match format!("slotbook={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Log a result, with different messages for success and error cases.
///
/// Success is logged at INFO, failure at ERROR together with the context.
/// The original result is returned so this can be used in a chain.
pub fn log_result<T, E: std::fmt::Display>(
    result: Result<T, E>,
    success_message: &str,
    error_context: &str,
) -> Result<T, E> {
    match &result {
        Ok(_) => info!("{}", success_message),
        Err(e) => error!("{}: {}", error_context, e),
    }
    result
}

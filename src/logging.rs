//! Logging configuration for Spottr
//!
//! Structured logging setup with appropriate levels and formatting.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Initialize the application logging system
pub fn init_logging() {
    let default_filter = "spottr=info,tower_http=info,axum::rejection=trace".to_string();

    // Read log level from environment variable or use default
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| default_filter);

    // Parse filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    // Create the subscriber
    let subscriber = Registry::default()
        .with(env_filter)
        .with(json_layer())
        .with(console_layer());

    // Set as global subscriber
    subscriber.init();

    tracing::info!("Logging system initialized");
}

/// JSON logging layer for production
fn json_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(true)
        .with_thread_ids(true)
        .with_thread_names(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
}

/// Console logging layer for development
fn console_layer<S>() -> impl Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
        .with_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
}

/// Create a span for request logging
#[macro_export]
macro_rules! request_span {
    ($method:expr, $path:expr) => {
        tracing::info_span!(
            "http_request",
            method = %$method,
            path = %$path,
            status_code = tracing::field::Empty,
            duration_ms = tracing::field::Empty,
        )
    };
}

/// Create a span for workout session operations
#[macro_export]
macro_rules! workout_span {
    ($operation:expr, $session_id:expr) => {
        tracing::info_span!(
            "workout_operation",
            operation = %$operation,
            session_id = %$session_id,
            total_sets = tracing::field::Empty,
            completed_sets = tracing::field::Empty,
        )
    };
}

/// Log application startup
pub fn log_startup() {
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        git_commit = option_env!("GIT_COMMIT").unwrap_or("unknown"),
        "Spottr starting up"
    );
}

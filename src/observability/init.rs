//! Tracing initialization and subscriber setup.

use super::{tracer, SERVICE_NAME};
use crate::domain::error::Result;
use crate::infrastructure::paths::{get_data_dir, trace_file_path};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `trace_level` is not configured.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global tracing subscriber with file-based OTLP export.
///
/// The filter comes from the `trace_level` configuration key (an `EnvFilter`
/// directive such as `"debug"` or `"projboard::store=trace"`), defaulting to
/// `"info"`. Spans are written to `~/.local/share/zellij/projboard/projboard-otlp.json`.
///
/// Calling it again after a subscriber is installed has no effect.
///
/// # Errors
///
/// Returns [`crate::ProjboardError::Io`] if the data directory cannot be created.
/// The plugin keeps working without traces in that case.
pub fn init_tracing(config: &Config) -> Result<()> {
    let level = config.trace_level.as_deref().unwrap_or(DEFAULT_TRACE_LEVEL);
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL));

    std::fs::create_dir_all(get_data_dir())?;

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = tracer::create_tracer_provider(trace_file_path(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level = level, "tracing initialized");
    }
    Ok(())
}

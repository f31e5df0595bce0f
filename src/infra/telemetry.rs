use std::io::{self, IsTerminal};

use tracing_error::ErrorLayer;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::{Layer, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{LogFormat, LoggingSettings};

use super::error::InfraError;

/// Directive override read on top of the configured level, e.g.
/// `ACSIGNATURE_LOG=acsignature::export=debug`.
pub const LOG_FILTER_ENV: &str = "ACSIGNATURE_LOG";

/// Install a global tracing subscriber using the provided logging settings.
///
/// Events go to stderr so stdout stays reserved for generated signatures.
pub fn init(logging: &LoggingSettings) -> Result<(), InfraError> {
    tracing_subscriber::registry()
        .with(env_filter(logging))
        .with(ErrorLayer::default())
        .with(fmt_layer(logging.format, io::stderr().is_terminal()))
        .try_init()
        .map_err(|err| {
            InfraError::telemetry(format!("failed to install tracing subscriber: {err}"))
        })
}

fn env_filter(logging: &LoggingSettings) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(logging.level.into())
        .with_env_var(LOG_FILTER_ENV)
        .from_env_lossy()
}

/// Colour codes only when stderr is a terminal; redirected logs stay plain.
fn fmt_layer<S>(format: LogFormat, ansi: bool) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'span> tracing_subscriber::registry::LookupSpan<'span>,
{
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .with_target(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(true)
            .with_ansi(ansi)
            .with_writer(io::stderr)
            .boxed(),
    }
}

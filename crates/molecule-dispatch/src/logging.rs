//! Console logging setup.
use molecule_core::{CapabilityError, LoggingConfig};
use std::fmt::Write as _;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::{self, FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Default event format with a fixed tag in front of every line.
struct Prefixed<F> {
    prefix: Option<String>,
    inner: F,
}

impl<S, N, F> FormatEvent<S, N> for Prefixed<F>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    F: FormatEvent<S, N>,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        if let Some(prefix) = &self.prefix {
            write!(writer, "{} ", prefix)?;
        }
        self.inner.format_event(ctx, writer, event)
    }
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured directive.
pub fn env_filter(config: &LoggingConfig) -> Result<EnvFilter, CapabilityError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| CapabilityError::Config(format!("invalid log filter {:?}: {}", config.filter, e)))
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed, so calling
/// this twice is harmless.
pub fn init_logging(config: &LoggingConfig) -> Result<bool, CapabilityError> {
    let filter = env_filter(config)?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.pretty)
        .event_format(Prefixed {
            prefix: config.prefix.clone(),
            inner: format::Format::default(),
        })
        .try_init()
        .is_ok();
    Ok(installed)
}

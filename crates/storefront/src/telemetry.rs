//! Logging and error tracking setup.
//!
//! Sentry is initialised first (when `SENTRY_DSN` is set) so the tracing
//! layer installed afterwards can forward events to it. Without a DSN the
//! Sentry layer is still installed and its events go nowhere.

use sentry::integrations::tracing::{self as sentry_tracing, EventFilter};
use tracing::{Level, Metadata};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::StorefrontConfig;

/// Log filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "dreamfit_storefront=info,tower_http=debug";

/// Start Sentry and install the global tracing subscriber.
///
/// The returned guard flushes pending Sentry events on drop, so the caller
/// must hold it for the life of the process.
#[must_use]
pub fn init(config: &StorefrontConfig) -> Option<sentry::ClientInitGuard> {
    let guard = config.sentry_dsn.as_deref().map(|dsn| {
        sentry::init((
            dsn,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                environment: config.sentry_environment.clone().map(Into::into),
                sample_rate: config.sentry_sample_rate,
                traces_sample_rate: config.sentry_traces_sample_rate,
                attach_stacktrace: true,
                ..Default::default()
            },
        ))
    });

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    if guard.is_some() {
        tracing::info!(
            environment = config.sentry_environment.as_deref().unwrap_or("default"),
            "Sentry error tracking enabled"
        );
    }

    guard
}

/// Warnings and errors become Sentry events; info and debug become
/// breadcrumbs attached to the next event.
fn sentry_event_filter(metadata: &Metadata<'_>) -> EventFilter {
    level_to_event_filter(*metadata.level())
}

fn level_to_event_filter(level: Level) -> EventFilter {
    match level {
        Level::ERROR | Level::WARN => EventFilter::Event,
        Level::INFO | Level::DEBUG => EventFilter::Breadcrumb,
        _ => EventFilter::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_to_event_filter() {
        assert!(level_to_event_filter(Level::ERROR).bits() == EventFilter::Event.bits());
        assert!(level_to_event_filter(Level::WARN).bits() == EventFilter::Event.bits());
        assert!(level_to_event_filter(Level::INFO).bits() == EventFilter::Breadcrumb.bits());
        assert!(level_to_event_filter(Level::TRACE).bits() == EventFilter::Ignore.bits());
    }

    #[test]
    fn test_default_log_filter_parses() {
        assert!(DEFAULT_LOG_FILTER.parse::<EnvFilter>().is_ok());
    }
}

//! Where skill graph events end up.
//!
//! `skilltree-core` logs every add, disable, learnt update, wipe and topology
//! build at `debug` with `graph_id` / `skill_id` fields. A host installs one
//! subscriber for the whole process, optionally mirroring spans to an
//! OpenTelemetry stdout exporter:
//!
//! ```no_run
//! skilltree_observe::tracing_setup::init_tracing(false).unwrap();
//! // ... mutate a SkillGraph ...
//! skilltree_observe::tracing_setup::shutdown_tracing();
//! ```

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use std::sync::OnceLock;

/// Tracer name reported to OpenTelemetry.
pub const TRACER_NAME: &str = "skilltree";

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "info,skilltree_core=debug";

/// Set only after a subscriber carrying the OTel layer was installed.
static TRACER_PROVIDER: OnceLock<SdkTracerProvider> = OnceLock::new();

/// Install the process-wide subscriber.
///
/// Without `RUST_LOG`, graph mutations from `skilltree_core` show at `debug`
/// and everything else at `info`. With `enable_otel`, the tracer provider is
/// registered globally only once the subscriber is in place, so a rejected
/// second call leaves no dangling provider behind.
///
/// # Errors
///
/// Fails when a global subscriber is already installed, by this function or
/// by the host.
pub fn init_tracing(enable_otel: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    if enable_otel {
        let provider = SdkTracerProvider::builder()
            .with_simple_exporter(opentelemetry_stdout::SpanExporter::default())
            .build();
        let tracer = provider.tracer(TRACER_NAME);
        let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .try_init()?;

        let _ = TRACER_PROVIDER.set(provider.clone());
        opentelemetry::global::set_tracer_provider(provider);
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}

/// Flush and stop the OTel provider, if `init_tracing(true)` installed one.
pub fn shutdown_tracing() {
    let Some(provider) = TRACER_PROVIDER.get() else {
        return;
    };
    if let Err(err) = provider.shutdown() {
        tracing::warn!(%err, "otel tracer provider shutdown failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_is_rejected() {
        init_tracing(false).unwrap();
        tracing::debug!(target: "skilltree_core", "subscriber installed");

        assert!(init_tracing(false).is_err());
        assert!(init_tracing(true).is_err());
        assert!(TRACER_PROVIDER.get().is_none());

        shutdown_tracing();
    }
}

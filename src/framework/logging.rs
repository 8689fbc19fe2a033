use tracing::{trace, warn};
use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

const DEFAULT_FILTER: &str = "wordle_remix=info";

/// `RUST_LOG` wins over the configured filter, which wins over the default.
#[tracing::instrument]
pub fn init_tracing(configured: Option<&str>) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)) {
            Ok(filter) => (filter, None),
            Err(err) => (EnvFilter::new(DEFAULT_FILTER), Some(err)),
        },
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(err) = rejected {
        warn!(%err, "logs.filter in config is invalid, using {DEFAULT_FILTER}");
    }

    trace!("finished");
}

use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::Targets;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Installs two layers: `plain` events are printed bare for the demo output,
/// everything else goes through the usual formatter filtered by `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    let plain_fmt = tracing_subscriber::fmt::format()
        .without_time()
        .with_level(false)
        .with_target(false)
        .compact();
    let plain_layer = tracing_subscriber::fmt::layer()
        .event_format(plain_fmt)
        .with_filter(Targets::new().with_target("plain", LevelFilter::TRACE));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,jupiter_proto_client=info"));

    let rich_layer = tracing_subscriber::fmt::layer()
        .with_filter(filter)
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != "plain"
        }));

    tracing_subscriber::registry()
        .with(plain_layer)
        .with(rich_layer)
        .try_init()?;

    Ok(())
}

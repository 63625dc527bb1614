use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Console-only logging, used when observability is switched off.
///
/// `RUST_LOG` wins when set; otherwise `log_level` applies to our crates and
/// noisy dependencies are held at `warn`.
pub fn init_basic_console_logging(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(log_level));

    let console_layer = fmt::layer()
        .compact()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_filter(env_filter);

    // Ignore a second initialization (tests, embedded use).
    let _ = tracing_subscriber::registry().with(console_layer).try_init();

    eprintln!("Observability disabled: console logging only");
}

pub(crate) fn default_filter(log_level: &str) -> EnvFilter {
    EnvFilter::new(format!(
        "campus={level},campus_core={level},campus_db={level},campus_observability={level},\
         tower_http=warn,hyper=warn,tonic=warn,h2=warn,sqlx=warn",
        level = log_level
    ))
}

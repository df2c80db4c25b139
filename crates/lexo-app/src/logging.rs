use lexo_config::log::{LogConfig, LogFormat};
use tracing_subscriber::EnvFilter;

/// Logs go to stderr, stdout belongs to the view
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.with_ansi(atty::is(atty::Stream::Stderr)).init(),
    }
}

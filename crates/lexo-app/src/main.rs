use std::future::Future;

use anyhow::Context;
use clap::Parser;
use lexo_config::Config;
use lexo_config::log::LogFormat;
use lexo_ui::SearchRequest;
use tokio::signal;

mod cli;
mod controller;
mod logging;

use self::cli::Args;
use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load profile {}", path.display()))?,
        None => Config::load(),
    };
    if args.json_logs {
        config.log.format = LogFormat::Json;
    }
    logging::init(&config.log);

    // Shutdown future (Ctrl+C)
    let shutdown = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    run(args, config, shutdown).await
}

async fn run(args: Args, config: Config, shutdown: impl Future<Output = ()>) -> anyhow::Result<()> {
    let mode = args.mode.unwrap_or(config.default_mode);
    let controller = AppController::new(config)?;
    let cancel_token = controller.cancel_token();

    let one_shot = if args.is_one_shot() {
        Some(SearchRequest::new(args.word.unwrap_or_default(), mode)?)
    } else {
        None
    };

    let session = async {
        match one_shot {
            Some(request) => controller.run_once(request).await,
            None => controller.run_interactive(mode).await,
        }
    };

    tokio::select! {
        _ = shutdown => {
            tracing::info!("Shutdown requested");
            cancel_token.cancel();
            Ok(())
        }
        result = session => {
            if let Err(e) = &result {
                tracing::debug!("Session ended with error: {e:#}");
            }
            result
        }
    }
}

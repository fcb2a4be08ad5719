use anyhow::Result;
use csgoroll::{Config, Poller};
use log::{error, info};
use std::io;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<()> {
    csgoroll::setup_env();
    start_csgoroll().await?;
    Ok(())
}

async fn start_csgoroll() -> Result<()> {
    let config = Config::from_env()?;
    let poller = Poller::new(&config, config.retry_policy())?;

    let cancel = CancellationToken::new();
    let shutdown = cancel.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                shutdown.cancel();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {e}"),
        }
    });

    Ok(poller.run(&mut io::stdout(), &cancel).await?)
}

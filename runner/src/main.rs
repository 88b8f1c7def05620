use client::handler::DefaultGenerateEventHandler;
use runner::{load_settings, resolve_prompt, run};
use std::io;
use std::sync::Arc;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // stdout is reserved for the generated text
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    info!("Initializing generate runner");

    let settings = load_settings("config")?;
    let prompt = resolve_prompt(&settings, io::stdin().lock(), io::stdout())?;

    run(&settings, &prompt, Arc::new(DefaultGenerateEventHandler)).await?;

    Ok(())
}

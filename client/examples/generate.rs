use anyhow::Result;
use client::{Client, config::ClientConfig, handler::DefaultGenerateEventHandler};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::new(
        ClientConfig {
            base_url: "http://localhost:11434".to_string(),
            model_id: "mistral".to_string(),
            system: Some("You are a helpful assistant living inside a pocket gadget.".to_string()),
        },
        Arc::new(DefaultGenerateEventHandler),
    );

    println!("Sending request to {}...", client.config().generate_url());

    client.send("What is your purpose").await?;

    client.send("Tell me a joke about hackers.").await?;

    Ok(())
}

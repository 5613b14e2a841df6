use anyhow::Result;
use showrunner::config::Config;
use showrunner::llm;
use showrunner::producer::BibleProducer;
use showrunner::server::{self, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = match Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            eprintln!("Please ensure 'config.yml' is valid YAML, or remove it to use defaults.");
            return Err(e);
        }
    };

    let client = llm::create_client(&config)?;
    let state = Arc::new(AppState {
        producer: BibleProducer::new(client),
    });

    server::run(&config.bind_addr, state).await
}

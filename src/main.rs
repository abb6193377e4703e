use std::{env, fs::File};

use bank_account::{
    config::Config, dlq::TracingDlq, engine::Engine, ingestion::CsvReader, store::MemoryStore,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Stdout carries the report; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(env::args())?;
    tracing::info!(input = %config.input.display(), "replaying operations");

    let file = File::open(&config.input)?;

    let ingestion = CsvReader::new(file);
    let mut engine = Engine::new(ingestion, MemoryStore::new(), TracingDlq::default());

    engine.process().await?;
    engine.flush()?;

    Ok(())
}

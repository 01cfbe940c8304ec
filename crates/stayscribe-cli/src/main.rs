use std::sync::Arc;

use clap::Parser;

use stayscribe_ai::{DEFAULT_BASE_URL, DEFAULT_MODEL, GroqClient, ProfileGenerator};
use stayscribe_core::Catalog;

/// Generate a schema-valid hotel profile for a hotel name and location.
#[derive(Parser)]
#[command(name = "stayscribe", version, about)]
struct Args {
    /// Hotel name, echoed verbatim into the profile.
    #[arg(long)]
    hotel: String,

    /// Location, echoed verbatim into the profile.
    #[arg(long)]
    location: String,

    /// OpenAI-compatible endpoint base URL.
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Model identifier to request.
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// API key for the generation service.
    #[arg(long, env = "GROQ_API_KEY", hide_env_values = true)]
    api_key: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("stayscribe v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let catalog = Arc::new(Catalog::builtin());
    let client = GroqClient::new(args.base_url, args.api_key, args.model);
    let pipeline = ProfileGenerator::new(client, catalog);

    let profile = pipeline.generate(&args.hotel, &args.location).await?;
    println!("{}", serde_json::to_string_pretty(&profile)?);
    Ok(())
}

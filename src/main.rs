mod error;
mod magazine;
mod notify;
mod parser;
mod pipeline;
mod places;
mod settings;

use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::info;

use magazine::HttpFetcher;
use notify::{LogPublisher, Publisher, SnsPublisher};
use pipeline::{Pipeline, RunReport};
use places::PlacesClient;
use settings::Settings;

#[derive(Parser)]
#[command(
    name = "tft_notifier",
    about = "Publish the latest New Yorker Tables for Two pick, enriched from Google Places"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline and publish one notification
    Run {
        /// Log the notification instead of sending it to SNS
        #[arg(long)]
        dry_run: bool,
    },
    /// List the article paths found on the Tables for Two page
    Articles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load()?;
    let client = reqwest::Client::new();
    let pages = HttpFetcher::new(client.clone());

    match cli.command {
        Commands::Articles => {
            let references =
                pipeline::article_references(&pages, &settings.magazine_base_url).await?;
            if references.is_empty() {
                println!("No articles found.");
            }
            for reference in &references {
                println!("{}", reference);
            }
            Ok(())
        }
        Commands::Run { dry_run } => {
            settings.validate(!dry_run)?;
            info!(
                region = %settings.aws_region,
                topic = %settings.aws_sns_arn,
                dry_run,
                "Starting tables-for-two pipeline"
            );

            let places = PlacesClient::new(client, &settings);
            let publisher: Box<dyn Publisher> = if dry_run {
                Box::new(LogPublisher)
            } else {
                Box::new(SnsPublisher::from_region(&settings.aws_region).await)
            };

            let outcome = Pipeline::new(&settings, &pages, &places, publisher.as_ref())
                .run()
                .await;
            println!("{}", serde_json::to_string(&RunReport::from(&outcome))?);
            info!(elapsed_ms = t0.elapsed().as_millis() as u64, "Done");

            outcome.map(|_| ()).map_err(Into::into)
        }
    }
}

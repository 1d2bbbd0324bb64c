use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use hazardwatch_lib::content::EMERGENCY_MESSAGES_FILE;
use hazardwatch_lib::{
    ChatBot, ContentStore, EventService, FeedConfig, GeoPoint, DEFAULT_RADIUS_KM,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "HazardWatch safety data utilities")]
struct Cli {
    /// Override the upstream hazard feed URL.
    #[arg(long)]
    feed_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch current hazard events, optionally filtered around a position.
    Events {
        /// Origin latitude in degrees.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Origin longitude in degrees.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Search radius in kilometres.
        #[arg(long, default_value_t = DEFAULT_RADIUS_KM)]
        radius: f64,
        /// Print raw JSON instead of one line per event.
        #[arg(long)]
        json: bool,
    },
    /// List emergency safety messages from a content directory.
    Messages {
        /// Directory holding emergency_messages.json.
        #[arg(long)]
        content_dir: PathBuf,
        /// Only messages for this disaster type.
        #[arg(long)]
        disaster: Option<String>,
    },
    /// Ask the keyword-rule chat responder.
    Chat {
        /// The free-text question.
        message: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Events {
            lat,
            lon,
            radius,
            json,
        } => handle_events(cli.feed_url, lat, lon, radius, json).await,
        Command::Messages {
            content_dir,
            disaster,
        } => handle_messages(&content_dir, disaster.as_deref()),
        Command::Chat { message } => handle_chat(&message),
    }
}

async fn handle_events(
    feed_url: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    radius: f64,
    json: bool,
) -> Result<()> {
    let config = match feed_url {
        Some(url) => FeedConfig::with_base_url(url),
        None => FeedConfig::default(),
    };
    let service = EventService::new(config).context("failed to build the feed client")?;

    let origin = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(
            GeoPoint::checked(lat, lon)
                .with_context(|| format!("latitude/longitude out of range: {lat}, {lon}"))?,
        ),
        _ => None,
    };

    let events = service
        .relevant_events(origin, radius)
        .await
        .context("failed to fetch hazard events")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    for event in &events {
        match &event.location {
            Some(location) => println!(
                "- {} [{}] {} ({:.4}, {:.4})",
                event.title,
                event.category,
                event.observed_at,
                location.latitude,
                location.longitude
            ),
            None => println!("- {} [{}] {}", event.title, event.category, event.observed_at),
        }
    }
    println!("{} event(s)", events.len());

    Ok(())
}

fn handle_messages(content_dir: &Path, disaster: Option<&str>) -> Result<()> {
    let path = content_dir.join(EMERGENCY_MESSAGES_FILE);
    let store = ContentStore::load(&path)
        .with_context(|| format!("failed to load messages from {}", path.display()))?;

    for message in store.messages(disaster) {
        println!("[{}] {}", message.disaster, message.message);
    }

    Ok(())
}

fn handle_chat(message: &str) -> Result<()> {
    let bot = ChatBot::with_default_rules();
    println!("{}", bot.reply(message));
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Songdeck - headless catalog browser and playback walker
use clap::{Parser, Subcommand};
use songdeck_catalog::CatalogStore;
use songdeck_cli::{commands, AppConfig, WalkOptions};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "songdeck")]
#[command(about = "Browse a Songdeck catalog and walk albums headlessly", long_about = None)]
struct Cli {
    /// Configuration file path (default: ./songdeck.toml if present)
    #[arg(short, long, env = "SONGDECK_CONFIG")]
    config: Option<PathBuf>,

    /// Override the catalog base URL
    #[arg(long)]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums with their titles and descriptions
    Albums,
    /// List the playable tracks of an album
    Tracks {
        /// Album folder name
        album: String,
    },
    /// Play an album start to finish on a simulated clock
    Walk {
        /// Album folder name (default: the configured default album)
        album: Option<String>,

        /// Simulated length of each track in seconds
        #[arg(long, default_value_t = 3.0)]
        track_seconds: f64,

        /// Clock step in seconds
        #[arg(long, default_value_t = 1.0)]
        step: f64,

        /// Start the next track automatically when one ends
        #[arg(long)]
        auto_advance: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "songdeck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }
    config.validate()?;

    tracing::debug!(
        base_url = %config.catalog.base_url,
        strategy = ?config.catalog.strategy,
        "Configuration loaded"
    );
    let store = CatalogStore::from_settings(&config.catalog)?;

    match cli.command {
        Commands::Albums => {
            let albums = commands::list_albums(&store).await;
            if albums.is_empty() {
                tracing::warn!("No albums found");
            }
            for album in albums {
                println!("{}\t{}\t{}", album.id, album.title, album.description);
            }
        }
        Commands::Tracks { album } => {
            let tracks = commands::list_tracks(&store, &album).await;
            if tracks.is_empty() {
                tracing::warn!(album = %album, "No playable tracks");
            }
            for (index, track) in tracks.iter().enumerate() {
                println!("{:>3}. {}\t{}", index + 1, track.display_name, track.locator);
            }
        }
        Commands::Walk {
            album,
            track_seconds,
            step,
            auto_advance,
        } => {
            let album = album.unwrap_or_else(|| config.playback.default_album.clone());
            let mut playback = config.playback.clone();
            playback.auto_advance |= auto_advance;

            let options = WalkOptions {
                track_seconds,
                step_seconds: step,
            };
            let report = commands::walk(&store, playback, &album, &options).await?;

            for (index, name) in report.played.iter().enumerate() {
                println!("{:>3}. {}", index + 1, name);
            }
            println!("Finished: {:?}", report.final_state);
        }
    }

    Ok(())
}

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use resource_core::Config;
use tokio::runtime::Handle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user_client::{UserApiClient, UserRepository};
use user_viewer::{render, UserViewModel};

#[derive(Parser)]
#[command(name = "user-viewer")]
#[command(about = "Browse the remote user directory", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the user API (overrides USER_API_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Print the final screen state as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every user
    List,

    /// Show a single user
    Show {
        /// User id
        #[arg(short, long)]
        id: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(url) = cli.base_url {
        config.user_api_url = url;
    }

    info!(url = %config.user_api_url, "Using user API");

    let api = UserApiClient::new(&config)?;
    let view_model = UserViewModel::new(UserRepository::new(api), Handle::current());

    let mut states = view_model.subscribe();
    let mut task = match &cli.command {
        Commands::List => view_model.load_users(),
        Commands::Show { id } => view_model.load_user(*id),
    };

    loop {
        tokio::select! {
            joined = &mut task => {
                joined?;
                break;
            }
            changed = states.changed() => {
                if changed.is_err() {
                    break;
                }
                let loading = {
                    let state = states.borrow_and_update();
                    state.users.is_loading || state.selected.is_loading
                };
                if loading && !cli.json {
                    eprintln!("Loading...");
                }
            }
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted, cancelling fetch");
                view_model.cancel();
                break;
            }
        }
    }

    if view_model.is_cancelled() {
        eprintln!("Cancelled");
        return Ok(());
    }

    let state = view_model.state();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&state)?);
    }

    if let Some(error) = state.error() {
        bail!("{} (code {})", error.message, error.code);
    }

    if !cli.json {
        let text = match cli.command {
            Commands::List => render::render_users(&state.users),
            Commands::Show { .. } => render::render_user(&state.selected),
        };
        println!("{}", text);
    }

    Ok(())
}

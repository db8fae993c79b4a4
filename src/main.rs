use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use folio::api::{self, AppState};
use folio::config::Config;
use folio::db::{self, SharedStorage};
use folio::store::{ContentStore, SessionStore, UuidIds};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Personal portfolio content with an admin editing API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
    /// Print the current portfolio as JSON
    Show,
    /// Sign in as the admin
    Login { username: String, password: String },
    /// Sign out
    Logout,
    /// Print the signed-in identity, if any
    Whoami,
}

/// Initialize tracing with output to stderr (CLI commands) or stdout (server)
fn init_tracing(use_stderr: bool) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "folio=debug,tower_http=debug".into()),
    );

    if use_stderr {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

fn open_storage(config: &Config) -> anyhow::Result<SharedStorage> {
    let database = match &config.db_path {
        Some(path) => db::Database::open(path.clone())?,
        None => db::Database::open_default()?,
    };
    database.migrate()?;
    Ok(Arc::new(database))
}

async fn serve(config: Config, port: u16) -> anyhow::Result<()> {
    tracing::info!("Starting folio server on port {}", port);

    let storage = open_storage(&config)?;
    let state = AppState::load(storage, Box::new(UuidIds), config)?;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    tracing::info!("folio server listening on http://127.0.0.1:{}", port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Keep stdout clean for the commands that print JSON
    let use_stderr = !matches!(cli.command, None | Some(Commands::Serve { .. }));
    init_tracing(use_stderr);

    let config = Config::from_env();

    match cli.command {
        Some(Commands::Serve { port }) => serve(config, port).await?,
        None => serve(config, 3000).await?,
        Some(Commands::Show) => {
            let storage = open_storage(&config)?;
            let content = ContentStore::load(storage, Box::new(UuidIds))?;
            println!("{}", serde_json::to_string_pretty(content.get())?);
        }
        Some(Commands::Login { username, password }) => {
            let storage = open_storage(&config)?;
            let mut session = SessionStore::load(storage, config.credentials.clone())?;
            if session.login(&username, &password)? {
                println!("Signed in as {}", username);
            } else {
                anyhow::bail!("Invalid username or password");
            }
        }
        Some(Commands::Logout) => {
            let storage = open_storage(&config)?;
            let mut session = SessionStore::load(storage, config.credentials.clone())?;
            session.logout()?;
            println!("Signed out");
        }
        Some(Commands::Whoami) => {
            let storage = open_storage(&config)?;
            let session = SessionStore::load(storage, config.credentials.clone())?;
            match session.identity() {
                Some(identity) => println!("{}", serde_json::to_string_pretty(identity)?),
                None => println!("Not signed in"),
            }
        }
    }

    Ok(())
}

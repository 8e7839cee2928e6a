//! `imovia` — command-line front end for the Imovia marketplace backend.
//!
//! Every invocation is one "page load": the persisted credential store is
//! read, the session is resolved, and then a single command runs against
//! the live session.

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use imovia_client::config::ApiConfig;
use imovia_client::guard::{RouteDecision, RouteGuard};
use imovia_client::http::Api;
use imovia_client::services::auth::{AuthGateway as _, HttpAuthGateway, NewUser};
use imovia_client::services::listing::{ListingGateway, NewListing};
use imovia_client::session::SessionManager;
use imovia_client::store::FileStore;

#[derive(Parser)]
#[command(name = "imovia", about = "Client for the Imovia real-estate marketplace API")]
struct Cli {
    /// Backend base URL (defaults to IMOVIA_API_URL, then localhost).
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in and persist the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the persisted session.
    Logout,
    /// Show the signed-in account.
    Whoami,
    /// Create a new account.
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        password: String,
    },
    /// Listing operations.
    #[command(subcommand)]
    Listing(ListingCommand),
}

#[derive(Subcommand)]
enum ListingCommand {
    /// Fetch a listing by id.
    Get { id: String },
    /// Publish a listing from a JSON file ('-' for stdin).
    Create { file: String },
    /// Replace a listing from a JSON file ('-' for stdin).
    Update { id: String, file: String },
    /// Delete a listing.
    Delete { id: String },
}

fn read_listing(file: &str) -> Result<NewListing, Box<dyn Error>> {
    let raw = if file == "-" {
        std::io::read_to_string(std::io::stdin())?
    } else {
        std::fs::read_to_string(file)?
    };
    Ok(serde_json::from_str(&raw)?)
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.api_url.map_or_else(ApiConfig::from_env, |url| ApiConfig::new(&url));
    let api = Arc::new(Api::new(config));
    let store = FileStore::open(FileStore::default_path())?;

    let mut session =
        SessionManager::new(Arc::clone(&api), HttpAuthGateway::new(Arc::clone(&api)), store);
    session.initialize().await;
    tracing::debug!(authenticated = session.is_authenticated(), "session resolved");

    match cli.command {
        Command::Login { email, password } => {
            let user = session.login(&email, &password).await?;
            println!("signed in as {} <{}>", user.name, user.email);
        }
        Command::Logout => {
            session.logout();
            println!("signed out");
        }
        Command::Whoami => match RouteGuard::new().decide(session.snapshot()) {
            RouteDecision::Allow => {
                if let Some(user) = session.user() {
                    println!("{} <{}> role={} id={}", user.name, user.email, user.role, user.id);
                }
            }
            RouteDecision::Redirect { .. } | RouteDecision::Checking => {
                println!("not signed in (try `imovia login`)");
            }
        },
        Command::Register { name, email, phone, password } => {
            let gateway = HttpAuthGateway::new(Arc::clone(&api));
            let receipt = gateway.register(&NewUser { name, email, phone, password }).await?;
            println!("account created: {}", receipt.id);
        }
        Command::Listing(listing) => {
            let gateway = ListingGateway::new(Arc::clone(&api));
            match listing {
                ListingCommand::Get { id } => {
                    let found = gateway.fetch(&id).await?;
                    println!("{}", serde_json::to_string_pretty(&found)?);
                }
                ListingCommand::Create { file } => {
                    let receipt = gateway.create(&read_listing(&file)?).await?;
                    println!("listing created: {}", receipt.id);
                }
                ListingCommand::Update { id, file } => {
                    let updated = gateway.update(&id, &read_listing(&file)?).await?;
                    println!("{}", serde_json::to_string_pretty(&updated)?);
                }
                ListingCommand::Delete { id } => {
                    gateway.delete(&id).await?;
                    println!("listing {id} deleted");
                }
            }
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

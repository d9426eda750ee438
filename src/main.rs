//! Agricultural portal shell CLI.
//!
//! # Architecture Overview
//!
//! ```text
//!   agri-shell <command>
//!        │
//!        ├── routes / resolve / navigate ──▶ routing (RouteTable, Navigator)
//!        │                                        │
//!        │                                        ▼
//!        │                                  lazy components
//!        │
//!        └── get ──▶ http (ApiClient) ──▶ interceptors ──▶ reqwest ──▶ backend API
//!
//!   config (TOML, optional) and observability (tracing) wrap every command
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use agri_shell::config::load_or_default;
use agri_shell::observability::logging;
use agri_shell::routing::{app_routes, Navigator, RouteTable};
use agri_shell::ApiClient;

#[derive(Parser)]
#[command(name = "agri-shell")]
#[command(about = "Navigation shell for the agricultural management portal", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route with its absolute path
    Routes,
    /// Show the route stack matched by a path
    Resolve { path: String },
    /// Navigate through the given paths in order and print the final route
    Navigate {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Send a GET request to the backend API
    Get { path: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    if let Err(e) = logging::init(&config.observability) {
        eprintln!("Logging already initialized: {}", e);
    }

    tracing::debug!(
        base_url = %config.http.base_url,
        timeout_ms = config.http.timeout_ms,
        routing_base = %config.routing.base,
        "Configuration loaded"
    );

    let table = Arc::new(RouteTable::new(app_routes())?);

    match cli.command {
        Commands::Routes => {
            for route in table.flatten() {
                let loading = if route.lazy { "lazy" } else { "eager" };
                println!(
                    "{:indent$}{:<40} {:<24} {}",
                    "",
                    route.full_path,
                    route.name,
                    loading,
                    indent = route.depth * 2
                );
            }
        }
        Commands::Resolve { path } => {
            let route_match = table.resolve(&path)?;
            println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                "path": route_match.path,
                "name": route_match.name,
                "matched": route_match.names(),
                "params": route_match.params,
            }))?);
        }
        Commands::Navigate { paths } => {
            let navigator = Navigator::with_base(table, &config.routing.base);
            for path in &paths {
                navigator.navigate(path).await?;
            }
            if let Some(current) = navigator.current() {
                println!("{}", serde_json::to_string_pretty(&serde_json::json!({
                    "path": current.path,
                    "name": current.name,
                    "matched": current.matched,
                    "params": current.params,
                    "components": current.components.iter().map(|c| c.view()).collect::<Vec<_>>(),
                }))?);
            }
        }
        Commands::Get { path } => {
            let client = ApiClient::from_config(&config.http)?;
            let response = client.get(&path).await?;
            match response.json::<serde_json::Value>() {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", response.text()),
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use sim_shell::config::load_config;
use sim_shell::ui::ComponentRegistry;

#[derive(Parser)]
#[command(name = "shell-cli")]
#[command(about = "Management CLI for the simulation console shell", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the shell is up
    Health,
    /// List the route table
    Routes,
    /// Show how a path renders
    Render {
        /// Path to resolve, e.g. /simulation
        path: String,
    },
    /// Validate a configuration file without starting the server
    Check {
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/__shell/health", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Routes => {
            let res = client
                .get(format!("{}/__shell/routes", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Render { path } => {
            let res = client
                .get(format!("{}/__shell/tree", cli.url))
                .query(&[("path", path.as_str())])
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Check { file } => {
            let config = load_config(&file, &ComponentRegistry::builtin())?;
            println!("{} is valid", file.display());
            for route in &config.routes {
                println!("  {} -> {}", route.path, route.page);
            }
            println!("  fallback: {:?}", config.routing.fallback);
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: shell returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

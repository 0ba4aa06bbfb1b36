//! Wishwall CLI
//!
//! Command-line client for a running Wishwall server:
//! - List wishes
//! - Send a wish
//! - Check status
//! - Generate a config file

use anyhow::{bail, Context};
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use wishwall::api::dto::{CreateWishResponse, HealthResponse};
use wishwall::storage::Wish;

#[derive(Parser)]
#[command(name = "wishwall-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Command-line client for the Wishwall server")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL
    #[arg(long, default_value = "http://localhost:3001", global = true)]
    pub api_url: String,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all wishes
    List,

    /// Send a wish
    Add {
        /// Message text
        text: String,
        /// Timestamp to attach (default: now, RFC 3339)
        #[arg(short, long)]
        timestamp: Option<String>,
        /// Explicit numeric id (default: assigned by the server)
        #[arg(long)]
        id: Option<i64>,
        /// Sender label, sent as the x-user-agent header
        #[arg(long)]
        from: Option<String>,
    },

    /// Show server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::List => {
            let response = client
                .get(format!("{}/api/wishes", cli.api_url))
                .send()
                .await
                .with_context(|| format!("Cannot connect to Wishwall at {}", cli.api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                bail!("Failed to fetch wishes ({}): {}", status, text);
            }

            let wishes: Vec<Wish> = response.json().await?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&wishes)?),
                _ => print_table(&wishes),
            }
        }

        Commands::Add {
            text,
            timestamp,
            id,
            from,
        } => {
            let timestamp = timestamp
                .unwrap_or_else(|| Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));

            let mut body = serde_json::json!({
                "text": text,
                "timestamp": timestamp,
            });
            if let Some(id) = id {
                body["id"] = id.into();
            }

            let mut request = client
                .post(format!("{}/api/wishes", cli.api_url))
                .json(&body);
            if let Some(from) = from {
                request = request.header("x-user-agent", from);
            }

            let response = request
                .send()
                .await
                .with_context(|| format!("Cannot connect to Wishwall at {}", cli.api_url))?;

            if !response.status().is_success() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                bail!("Failed ({}): {}", status, text);
            }

            let created: CreateWishResponse = response.json().await?;
            println!(
                "Saved wish {} from {} at {}",
                created.wish.id, created.wish.from, created.wish.timestamp
            );
        }

        Commands::Status => {
            let response = client
                .get(format!("{}/health", cli.api_url))
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: HealthResponse = resp.json().await?;

                    println!("Wishwall v{}", health.version);
                    println!();
                    println!("API Status: {}", health.status);
                    println!("Wishes file: {}", health.wishes_file);
                    match health.total_wishes {
                        Some(total) => println!("Total wishes: {}", total),
                        None => println!("Total wishes: unavailable"),
                    }
                    println!();
                    println!("Uptime: {}", format_duration(health.uptime_seconds));
                }
                Ok(resp) => bail!("API returned error: {}", resp.status()),
                Err(e) => {
                    eprintln!("Cannot connect to Wishwall at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the Wishwall server is running:");
                    eprintln!("  cargo run --bin wishwall");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let config = wishwall::config::generate_default_config();

            match output {
                Some(path) => {
                    // Create parent directory if needed
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}

fn print_table(wishes: &[Wish]) {
    if wishes.is_empty() {
        println!("No wishes yet.");
        println!();
        println!("Send the first one with:");
        println!("  wishwall-cli add \"Happy Birthday!\"");
        return;
    }

    println!("{:<15} {:<26} {:<15} {}", "ID", "Timestamp", "From", "Text");
    println!("{}", "-".repeat(80));

    for wish in wishes {
        println!(
            "{:<15} {:<26} {:<15} {}",
            wish.id.to_string(),
            wish.timestamp,
            wish.from,
            wish.text
        );
    }

    println!();
    println!("Total: {}", wishes.len());
}

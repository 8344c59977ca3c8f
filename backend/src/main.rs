//! Mintkit CLI - Pin NFT metadata and serve the pin gateway
//!
//! # Main Commands
//!
//! ```bash
//! mintkit serve              # Start the pin gateway (port 3000)
//! mintkit pin metadata.json  # Pin a metadata file to IPFS
//! ```
//!
//! Both commands need `PINATA_JWT` and `PINATA_GATEWAY`, from the
//! environment or a `.env` file.

use clap::{Parser, Subcommand};
use mintkit::PinataClient;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mintkit")]
#[command(about = "Pin NFT metadata to IPFS and serve the pin gateway", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pin a metadata JSON file to IPFS
    Pin {
        /// Input JSON file
        input: PathBuf,

        /// Pin name shown in the Pinata dashboard (defaults to the
        /// content's own name field)
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Start HTTP server
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Pin { input, name } => cmd_pin(&input, name.as_deref()).await,
        Commands::Serve { port } => cmd_serve(port).await,
    };

    if let Err(e) = result {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

async fn cmd_pin(input: &Path, name: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    eprintln!("📌 Pinning: {}", input.display());

    let content = fs::read_to_string(input)?;
    let metadata: Value = serde_json::from_str(&content)?;

    let client = PinataClient::from_env()?;
    let receipt = client.pin_json(&metadata, name).await?;

    eprintln!("   CID:       {}", receipt.cid);
    eprintln!("   Pin size:  {} bytes", receipt.pin_size);
    eprintln!("   Timestamp: {}", receipt.timestamp.to_rfc3339());
    eprintln!("\n✨ Done!");

    println!("{}", client.gateway_url(&receipt.cid));

    Ok(())
}

async fn cmd_serve(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Credential problems must surface before the port is bound
    let client = PinataClient::from_env()?;
    mintkit::server::start_server(port, client).await
}

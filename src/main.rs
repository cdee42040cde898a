/// Main entry point for the Quest Tracker MCP server
///
/// This file sets up logging, parses command line arguments, and starts the
/// MCP server. The server listens for JSON-RPC requests over stdin/stdout
/// following the MCP protocol.

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use quest_tracker_mcp::QuestTrackerServer;

/// Pick a default snapshot location, falling back through writable candidates
fn get_default_snapshot_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
    // Candidate directories, most preferred first
    let candidates = [
        dirs::home_dir().map(|mut p| {
            p.push(".quest_tracker");
            p
        }),
        dirs::data_dir().map(|mut p| {
            p.push("quest_tracker");
            p
        }),
        dirs::config_dir().map(|mut p| {
            p.push("quest_tracker");
            p
        }),
        std::env::current_dir().ok().map(|mut p| {
            p.push(".quest_tracker");
            p
        }),
    ];

    for candidate in candidates.iter().flatten() {
        if std::fs::create_dir_all(candidate).is_ok() {
            // Only settle on a directory we can actually write to
            let probe = candidate.join(".test_write");
            if std::fs::write(&probe, "test").is_ok() {
                let _ = std::fs::remove_file(&probe);
                return Ok(candidate.join("guild.json"));
            }
        }
    }

    // Last resort: a temporary directory
    let mut temp_path = std::env::temp_dir();
    temp_path.push("quest_tracker");
    std::fs::create_dir_all(&temp_path)?;
    temp_path.push("guild.json");

    tracing::warn!("Using temporary directory for snapshot: {}", temp_path.display());
    Ok(temp_path)
}

/// Command line arguments for the Quest Tracker MCP server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the guild snapshot file
    /// If not provided, uses a default location in the user's home directory
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable verbose output (implies debug)
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set up logging based on command line flags
    let log_level = if args.verbose {
        "debug"
    } else if args.debug {
        "info"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(format!("quest_tracker_mcp={}", log_level))
        .with_writer(std::io::stderr) // Send logs to stderr, not stdout
        .init();

    info!("Starting Quest Tracker MCP server");

    // Determine snapshot path
    let snapshot_path = match args.snapshot {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.exists() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            path
        }
        None => get_default_snapshot_path()?,
    };

    info!("Using snapshot at: {}", snapshot_path.display());

    // Create and start the quest tracker server
    let server = QuestTrackerServer::new(snapshot_path).await?;

    // Run the MCP server - this will handle JSON-RPC communication over stdin/stdout
    server.run().await?;

    info!("Quest Tracker MCP server shutdown complete");
    Ok(())
}

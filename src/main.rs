//! To-do MCP Server - Main Entry Point
//!
//! This is the main entry point for the to-do MCP server application.
//! The actual implementation is in the `todo_mcp` library.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use std::path::PathBuf;
use todo_mcp::TodoServerHandler;
use todo_mcp::config::{Config, ConfigOverrides, FileConfig};
use todo_mcp::logging::init_logging;
use tracing::info;

/// To-do MCP Server - a prioritized to-do list via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tasks file (default: tasks.json)
    file: Option<PathBuf>,

    /// Enable git synchronization on save
    #[arg(long)]
    sync_git: bool,

    /// Initial sort mode: priority, creation_date or alphabetical
    #[arg(long)]
    sort: Option<String>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let file_config = args
        .config
        .as_deref()
        .map(FileConfig::load)
        .transpose()?;
    let config = Config::resolve(
        file_config,
        ConfigOverrides {
            tasks_file: args.file,
            sync_git: args.sync_git,
            sort: args.sort,
        },
    )?;
    info!(
        tasks_file = %config.tasks_file.display(),
        sync_git = config.sync_git,
        sort = %config.default_sort,
        "starting todo-mcp"
    );

    let handler = TodoServerHandler::from_config(&config);
    serve_stdio(handler).await?;
    Ok(())
}

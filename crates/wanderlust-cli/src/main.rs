//! Wanderlust CLI Application
//!
//! Terminal front-end for the Wanderlust travel dashboard: saved plans,
//! reference countries and the destination views.

mod args;
mod cli;
mod handlers;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use handlers::Cli;
use log::info;
use renderer::TerminalRenderer;
use wanderlust_core::DashboardBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        year,
        command,
    } = Args::parse();

    let dashboard = DashboardBuilder::new()
        .with_database_path(database_file)
        .with_year(year)
        .build()
        .await
        .context("Failed to initialize dashboard")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Wanderlust started");

    let cli = Cli::new(dashboard, renderer);
    match command {
        Some(Plans { command }) => cli.handle_plan_command(command),
        Some(Countries(args)) => cli.list_countries(&args).await,
        Some(Explore(args)) => cli.explore(&args).await,
        None => cli.handle_plan_command(None),
    }
}

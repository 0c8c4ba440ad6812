use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CountriesArgs, ExploreArgs, PlanCommands};

/// Terminal front-end for the Wanderlust travel dashboard
///
/// Pick a destination (country, then city, then year), browse what the data
/// sources know about it, and keep a list of saved holidays, events and long
/// weekends between runs. Data sources are read from a JSON fixture file.
#[derive(Parser)]
#[command(version, about, name = "wl")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/wanderlust/wanderlust.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Calendar year used by the holiday and long weekend views. Defaults to
    /// the current year
    #[arg(long, global = true)]
    pub year: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Wanderlust CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Manage saved plans
    #[command(alias = "p")]
    Plans {
        #[command(subcommand)]
        command: Option<PlanCommands>,
    },
    /// List the countries known to the data sources
    #[command(alias = "c")]
    Countries(CountriesArgs),
    /// Select a destination and show its views
    #[command(alias = "e")]
    Explore(ExploreArgs),
}

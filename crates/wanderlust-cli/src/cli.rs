//! Command-line argument wrappers.
//!
//! Each wrapper carries the clap attributes for one command and converts into
//! the matching parameter type from `wanderlust_core::params`, so the core
//! stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Dashboard
//! ```

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use wanderlust_core::{
    models::{PlanFilter, PlanType},
    params::{ClearPlans, ListPlans, RemovePlan, SavePlan},
};

/// List saved plans, optionally narrowed to one bucket
#[derive(Args, Default)]
pub struct ListPlansArgs {
    #[arg(
        short,
        long,
        value_enum,
        default_value_t = PlanFilterArg::All,
        help = "Only show plans of this kind"
    )]
    pub filter: PlanFilterArg,
}

impl From<ListPlansArgs> for ListPlans {
    fn from(val: ListPlansArgs) -> Self {
        ListPlans {
            filter: val.filter.into(),
        }
    }
}

/// Save a plan
///
/// Plans are unique by kind, name and date; saving the same plan twice
/// leaves the list unchanged.
#[derive(Args)]
pub struct SavePlanArgs {
    #[arg(value_enum, help = "Kind of plan")]
    pub plan_type: PlanTypeArg,
    #[arg(help = "Title of the plan")]
    pub name: String,
    #[arg(short, long, help = "Venue, date range or official name")]
    pub details: Option<String>,
    #[arg(long, help = "ISO date (YYYY-MM-DD)")]
    pub date: Option<String>,
}

impl From<SavePlanArgs> for SavePlan {
    fn from(val: SavePlanArgs) -> Self {
        SavePlan {
            plan_type: val.plan_type.into(),
            name: val.name,
            details: val.details,
            date: val.date,
        }
    }
}

/// Remove a saved plan by the index shown in the listing
#[derive(Args)]
pub struct RemovePlanArgs {
    #[arg(help = "Index shown next to the plan in `wl plans list`")]
    pub index: usize,
    /// Confirm the removal (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<RemovePlanArgs> for RemovePlan {
    fn from(val: RemovePlanArgs) -> Self {
        RemovePlan {
            index: val.index,
            confirmed: val.confirm,
        }
    }
}

/// Remove every saved plan
#[derive(Args)]
pub struct ClearPlansArgs {
    /// Confirm clearing the whole list
    #[arg(long)]
    pub confirm: bool,
}

impl From<ClearPlansArgs> for ClearPlans {
    fn from(val: ClearPlansArgs) -> Self {
        ClearPlans {
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum PlanCommands {
    /// List saved plans
    #[command(alias = "l")]
    List(ListPlansArgs),
    /// Save a plan
    #[command(alias = "s")]
    Save(SavePlanArgs),
    /// Remove a saved plan
    #[command(alias = "rm")]
    Remove(RemovePlanArgs),
    /// Remove every saved plan
    Clear(ClearPlansArgs),
    /// Show how many plans each filter matches
    Counts,
}

/// List the countries known to the data sources
#[derive(Args)]
pub struct CountriesArgs {
    #[arg(long, help = "JSON file answering every data source offline")]
    pub fixtures: PathBuf,
}

/// Select a destination and show its views
///
/// Runs the country → city cascade, then prints the selection badge,
/// destination banner and city list. With --confirm the country details,
/// calendar, events, weather and currency views are loaded as well.
#[derive(Args)]
pub struct ExploreArgs {
    #[arg(long, help = "JSON file answering every data source offline")]
    pub fixtures: PathBuf,
    #[arg(help = "ISO 3166 alpha-2 country code, e.g. PT")]
    pub country: String,
    #[arg(long, help = "City to select instead of the first available one")]
    pub city: Option<String>,
    #[arg(long, help = "Confirm explore and load the detailed views")]
    pub confirm: bool,
    #[arg(
        long,
        default_value = "USD",
        help = "Base currency for the exchange rate view"
    )]
    pub base: String,
}

/// Command-line representation of the plans view filters
#[derive(Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum PlanFilterArg {
    #[default]
    All,
    Holiday,
    Event,
    #[value(name = "longweekend", alias = "long-weekend")]
    LongWeekend,
}

impl From<PlanFilterArg> for PlanFilter {
    fn from(val: PlanFilterArg) -> Self {
        match val {
            PlanFilterArg::All => PlanFilter::All,
            PlanFilterArg::Holiday => PlanFilter::Holiday,
            PlanFilterArg::Event => PlanFilter::Event,
            PlanFilterArg::LongWeekend => PlanFilter::LongWeekend,
        }
    }
}

/// Command-line representation of plan kinds
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlanTypeArg {
    Holiday,
    Event,
    Weekend,
}

impl From<PlanTypeArg> for PlanType {
    fn from(val: PlanTypeArg) -> Self {
        match val {
            PlanTypeArg::Holiday => PlanType::Holiday,
            PlanTypeArg::Event => PlanType::Event,
            PlanTypeArg::Weekend => PlanType::Weekend,
        }
    }
}

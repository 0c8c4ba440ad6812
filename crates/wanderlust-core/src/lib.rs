//! Core library for the Wanderlust travel dashboard.
//!
//! This crate owns the dashboard's state: the destination selection
//! (country → city → year), the reference country cache, the city cascade
//! with its stale-response guard, the persisted collection of saved plans
//! and the projection every "current selection" indicator reads.
//!
//! # Architecture
//!
//! - **Selection** ([`selection`]): pure state transitions that report a
//!   [`SelectionChange`]
//! - **Cascade** ([`cascade`]): city loads tagged with a ticket, applied only
//!   while still current
//! - **Plans** ([`plan_store`]): ordered, duplicate-free, persisted as a whole
//!   in SQLite
//! - **Views** ([`view_sync`]): badge and banner derived from one projection
//!   and broadcast over `tokio::sync::watch`
//! - **Data sources** ([`collaborators`]): async contracts, results classified
//!   into [`DataOutcome`]
//!
//! # Quick Start
//!
//! ```rust
//! use wanderlust_core::{collaborators::FixtureSource, DashboardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = FixtureSource::from_path("travel.json")?;
//! let mut dashboard = DashboardBuilder::new()
//!     .with_database_path(Some("plans.db"))
//!     .build()
//!     .await?;
//!
//! dashboard.load_reference(&source).await?;
//! dashboard.select_country("PT", &source).await;
//!
//! if let Some(view) = dashboard.selection_view() {
//!     println!("{}", view.badge);
//! }
//! # Ok(())
//! # }
//! ```

pub mod cascade;
pub mod collaborators;
pub mod dashboard;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod plan_store;
pub mod reference;
pub mod selection;
pub mod view_sync;

// Re-export commonly used types
pub use cascade::{CascadeController, CityLoadOutcome, CityLoadState, CityLoadTicket, CityOption};
pub use collaborators::{DataOutcome, FixtureSource, SelectionLevel};
pub use dashboard::{Dashboard, DashboardBuilder, DashboardConfig};
pub use db::Database;
pub use display::{OperationStatus, PlanListing};
pub use error::{Result, WanderlustError};
pub use models::{FilterCounts, IndexedPlan, Plan, PlanFilter, PlanType, ReferenceCountry};
pub use params::{ClearPlans, ListPlans, RemovePlan, SavePlan};
pub use plan_store::{PlanStore, PLANS_SLOT};
pub use reference::ReferenceCache;
pub use selection::{CityPolicy, SelectionChange, SelectionState};
pub use view_sync::{DestinationBanner, SelectionBadge, SelectionView, ViewSync};

//! The explicitly owned dashboard state container.
//!
//! [`Dashboard`] ties the engine together: it owns the selection, the
//! reference cache, the city cascade, the saved plans and the view
//! broadcaster, and is passed by reference to whatever drives it.
//!
//! ```text
//! user action ──▶ SelectionState ──▶ CascadeController ──▶ ViewSync ──▶ views
//!                                                             ▲
//! save / remove ──▶ PlanStore ─────────── counts ─────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: configuration and construction
//! - `selection_ops`: country/city/year transitions and the city cascade
//! - `plan_ops`: saved-plan operations
//! - `data_ops`: selection-gated queries against the data sources
//!
//! Data sources are not owned by the dashboard. Every operation that needs
//! one takes it as an argument, so callers can plug in live clients or the
//! offline [`FixtureSource`](crate::collaborators::FixtureSource).
//!
//! ```rust
//! use wanderlust_core::{collaborators::FixtureSource, DashboardBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let source = FixtureSource::default();
//! let mut dashboard = DashboardBuilder::new().in_memory().build().await?;
//! dashboard.load_reference(&source).await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, time::Duration};

pub mod builder;
mod data_ops;
mod plan_ops;
mod selection_ops;

#[cfg(test)]
mod tests;

pub use builder::DashboardBuilder;
pub use data_ops::{CountryOverview, CurrencyBoard, LocalForecast};

use crate::{
    cascade::CascadeController,
    plan_store::PlanStore,
    reference::ReferenceCache,
    selection::{CityPolicy, SelectionState},
    view_sync::ViewSync,
};

/// Settings resolved by [`DashboardBuilder`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Upper bound for any single data source call
    pub collaborator_timeout: Duration,
    pub city_policy: CityPolicy,
    /// Year selected at startup
    pub default_year: String,
    /// `None` for an in-memory session
    pub database_path: Option<PathBuf>,
}

/// Main dashboard interface.
pub struct Dashboard {
    config: DashboardConfig,
    selection: SelectionState,
    reference: ReferenceCache,
    cascade: CascadeController,
    plans: PlanStore,
    view_sync: ViewSync,
}

impl Dashboard {
    pub(crate) fn new(config: DashboardConfig, plans: PlanStore) -> Self {
        let selection = SelectionState::new(config.default_year.clone(), config.city_policy);
        let view_sync = ViewSync::new();
        view_sync.publish_counts(plans.counts());

        Self {
            config,
            selection,
            reference: ReferenceCache::new(),
            cascade: CascadeController::new(),
            plans,
            view_sync,
        }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn reference(&self) -> &ReferenceCache {
        &self.reference
    }

    pub fn cascade(&self) -> &CascadeController {
        &self.cascade
    }

    pub fn plans(&self) -> &PlanStore {
        &self.plans
    }

    pub fn view_sync(&self) -> &ViewSync {
        &self.view_sync
    }

    fn publish_selection(&self) {
        self.view_sync.publish(&self.selection, &self.reference);
    }

    fn publish_counts(&self) {
        self.view_sync.publish_counts(self.plans.counts());
    }
}

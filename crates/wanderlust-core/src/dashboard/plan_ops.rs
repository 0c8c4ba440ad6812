//! Saved-plan operations.

use super::Dashboard;
use crate::{
    display::PlanListing,
    error::{Result, WanderlustError},
    models::{FilterCounts, Plan},
    params::{ClearPlans, ListPlans, RemovePlan, SavePlan},
};

impl Dashboard {
    /// Save a plan entered by hand.
    ///
    /// # Errors
    ///
    /// * `WanderlustError::InvalidInput` - Blank name or malformed date
    /// * `WanderlustError::DuplicatePlan` - Same type, name and date already saved
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use wanderlust_core::{models::PlanType, params::SavePlan, DashboardBuilder};
    /// # async {
    /// let mut dashboard = DashboardBuilder::new().build().await?;
    /// let params = SavePlan {
    ///     plan_type: PlanType::Event,
    ///     name: "Jazz in the Park".to_string(),
    ///     details: Some("Parque Eduardo VII".to_string()),
    ///     date: Some("2026-07-18".to_string()),
    /// };
    /// dashboard.save_plan(&params)?;
    /// # Result::<(), wanderlust_core::WanderlustError>::Ok(())
    /// # };
    /// ```
    pub fn save_plan(&mut self, params: &SavePlan) -> Result<Plan> {
        let plan = Plan::try_from(params)?;
        self.add_plan(plan)
    }

    /// Save a plan built from a data source record, e.g.
    /// `Plan::from(&holiday)`.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::DuplicatePlan` when already saved.
    pub fn add_plan(&mut self, plan: Plan) -> Result<Plan> {
        let saved = self.plans.save(plan)?.clone();
        log::info!("Saved {} '{}'", saved.plan_type, saved.name);
        self.publish_counts();
        Ok(saved)
    }

    /// Remove the plan at a backing-collection index.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::InvalidInput` if `confirmed` is false and
    /// `WanderlustError::IndexOutOfRange` for an unknown index.
    pub fn remove_plan(&mut self, params: &RemovePlan) -> Result<Plan> {
        if !params.confirmed {
            return Err(WanderlustError::invalid_input("confirmed").with_reason(
                "Removing a plan requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ));
        }

        let removed = self.plans.remove(params.index)?;
        log::info!("Removed {} '{}'", removed.plan_type, removed.name);
        self.publish_counts();
        Ok(removed)
    }

    /// Remove every saved plan. Returns how many were removed.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::InvalidInput` if `confirmed` is false.
    pub fn clear_plans(&mut self, params: &ClearPlans) -> Result<usize> {
        if !params.confirmed {
            return Err(WanderlustError::invalid_input("confirmed").with_reason(
                "Clearing all plans requires explicit confirmation. Set 'confirmed' to true to proceed.",
            ));
        }

        let removed = self.plans.clear()?;
        log::info!("Cleared {removed} saved plans");
        self.publish_counts();
        Ok(removed)
    }

    /// Plans in a filter bucket, with backing indices and every bucket count.
    pub fn list_plans(&self, params: &ListPlans) -> PlanListing {
        PlanListing {
            filter: params.filter,
            items: self.plans.filter(params.filter),
            counts: self.plans.counts(),
        }
    }

    pub fn plan_counts(&self) -> FilterCounts {
        self.plans.counts()
    }

    /// True if a plan with the same identity is saved.
    pub fn is_saved(&self, plan: &Plan) -> bool {
        self.plans.contains(&plan.identity())
    }
}

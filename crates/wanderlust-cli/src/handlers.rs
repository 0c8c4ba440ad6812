//! Command handlers that drive the dashboard and render its views.

use std::{fmt::Write, path::Path};

use anyhow::{Context, Result};
use jiff::Timestamp;
use log::{debug, info};
use wanderlust_core::{
    display::{CityOptions, Countries, Events, Holidays, LocalTime, LongWeekends},
    params::{ClearPlans, ListPlans, RemovePlan, SavePlan},
    CityLoadOutcome, Dashboard, FixtureSource, OperationStatus, WanderlustError,
};

use crate::{
    cli::{CountriesArgs, ExploreArgs, PlanCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    dashboard: Dashboard,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(dashboard: Dashboard, renderer: TerminalRenderer) -> Self {
        Self {
            dashboard,
            renderer,
        }
    }

    pub fn handle_plan_command(mut self, command: Option<PlanCommands>) -> Result<()> {
        match command {
            None => self.list_plans(&ListPlans::default()),
            Some(PlanCommands::List(args)) => self.list_plans(&args.into()),
            Some(PlanCommands::Save(args)) => self.save_plan(&args.into()),
            Some(PlanCommands::Remove(args)) => self.remove_plan(&args.into()),
            Some(PlanCommands::Clear(args)) => self.clear_plans(&args.into()),
            Some(PlanCommands::Counts) => self.show_counts(),
        }
    }

    pub fn list_plans(&self, params: &ListPlans) -> Result<()> {
        let listing = self.dashboard.list_plans(params);
        self.renderer
            .render(&format!("# Saved Plans\n\n{listing}"))
    }

    fn save_plan(&mut self, params: &SavePlan) -> Result<()> {
        match self.dashboard.save_plan(params) {
            Ok(plan) => self
                .renderer
                .render_status(&OperationStatus::success(format!("Saved {plan}"))),
            Err(e @ WanderlustError::DuplicatePlan { .. }) => self
                .renderer
                .render_status(&OperationStatus::info(e.to_string())),
            Err(e) => Err(e).context("Failed to save plan"),
        }
    }

    fn remove_plan(&mut self, params: &RemovePlan) -> Result<()> {
        let plan = self
            .dashboard
            .remove_plan(params)
            .context("Failed to remove plan")?;
        self.renderer
            .render_status(&OperationStatus::success(format!("Removed {plan}")))
    }

    fn clear_plans(&mut self, params: &ClearPlans) -> Result<()> {
        let removed = self
            .dashboard
            .clear_plans(params)
            .context("Failed to clear plans")?;
        self.renderer
            .render_status(&OperationStatus::success(format!("Removed {removed} saved plans")))
    }

    fn show_counts(&self) -> Result<()> {
        self.renderer
            .render(&format!("{}\n", self.dashboard.plan_counts()))
    }

    pub async fn list_countries(mut self, args: &CountriesArgs) -> Result<()> {
        let source = load_fixtures(&args.fixtures)?;
        self.dashboard
            .load_reference(&source)
            .await
            .context("Failed to load countries")?;
        self.renderer.render(&format!(
            "# Countries\n\n{}",
            Countries(self.dashboard.reference())
        ))
    }

    pub async fn explore(mut self, args: &ExploreArgs) -> Result<()> {
        let source = load_fixtures(&args.fixtures)?;
        let count = self
            .dashboard
            .load_reference(&source)
            .await
            .context("Failed to load countries")?;
        debug!("Loaded {count} countries");

        match self.dashboard.select_country(&args.country, &source).await {
            CityLoadOutcome::Applied { selected, .. } => {
                debug!("Auto-selected city: {selected:?}");
            }
            CityLoadOutcome::Failed { reason } => {
                self.renderer.render_status(&OperationStatus::failure(format!(
                    "Could not load cities: {reason}"
                )))?;
            }
            CityLoadOutcome::Stale => {}
        }

        if let Some(city) = &args.city {
            self.dashboard
                .select_city(city)
                .with_context(|| format!("Failed to select city '{city}'"))?;
        }
        if args.confirm {
            self.dashboard
                .confirm_explore()
                .context("Failed to confirm explore")?;
            info!("Exploring {}", args.country);
        }

        let mut out = String::new();
        if let Some(view) = self.dashboard.selection_view() {
            writeln!(out, "{}", view.badge)?;
            writeln!(out)?;
            write!(out, "{}", view.banner)?;
            writeln!(out)?;
        }
        writeln!(out, "### Cities")?;
        writeln!(out)?;
        if self.dashboard.cascade().cities().is_empty() {
            writeln!(out, "{}", self.dashboard.cascade().state())?;
        } else {
            write!(out, "{}", CityOptions(self.dashboard.cascade().cities()))?;
        }

        if !args.confirm {
            writeln!(out)?;
            writeln!(out, "Run again with --confirm to explore this destination.")?;
            return self.renderer.render(&out);
        }

        self.write_destination_views(&mut out, &source, &args.base)
            .await?;
        self.renderer.render(&out)
    }

    /// Append the views that need a confirmed explore.
    async fn write_destination_views(
        &mut self,
        out: &mut String,
        source: &FixtureSource,
        base: &str,
    ) -> Result<()> {
        let detail = self.dashboard.country_detail(source).await;
        writeln!(out)?;
        writeln!(out, "## Country")?;
        writeln!(out)?;
        write!(out, "{detail}")?;
        if let Some(now) = self.dashboard.country_local_time(Timestamp::now()) {
            writeln!(out, "- Local time: {}", LocalTime(&now))?;
        }

        let year = self.dashboard.selection().year().to_string();
        let holidays = self.dashboard.holidays(source).await.map(Holidays);
        writeln!(out)?;
        writeln!(out, "## Holidays {year}")?;
        writeln!(out)?;
        write!(out, "{holidays}")?;

        let weekends = self.dashboard.long_weekends(source).await.map(LongWeekends);
        writeln!(out)?;
        writeln!(out, "## Long Weekends {year}")?;
        writeln!(out)?;
        write!(out, "{weekends}")?;

        let events = self.dashboard.events(source).await.map(Events);
        writeln!(out)?;
        writeln!(out, "## Events")?;
        writeln!(out)?;
        write!(out, "{events}")?;

        let weather = self.dashboard.weather(source).await;
        writeln!(out)?;
        writeln!(out, "## Weather")?;
        writeln!(out)?;
        write!(out, "{weather}")?;
        let sun = self.dashboard.sun_times(source).await;
        if sun.is_ready() {
            write!(out, "{sun}")?;
        }

        let currency = self.dashboard.exchange_rates(source, base).await;
        writeln!(out)?;
        writeln!(out, "## Currency")?;
        writeln!(out)?;
        write!(out, "{currency}")?;

        Ok(())
    }
}

fn load_fixtures(path: &Path) -> Result<FixtureSource> {
    FixtureSource::from_path(path)
        .with_context(|| format!("Failed to read fixtures from {}", path.display()))
}

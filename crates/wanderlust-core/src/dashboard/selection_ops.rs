//! Selection transitions and the country → city cascade.

use jiff::{civil::DateTime, Timestamp};

use super::Dashboard;
use crate::{
    cascade::{CityLoadOutcome, CityLoadTicket},
    collaborators::{with_timeout, CitySource, CountryDetailSource, ReferenceSource},
    error::Result,
    models::ReferenceCountry,
    selection::SelectionChange,
    view_sync::SelectionView,
};

impl Dashboard {
    /// Populate the reference cache from both country lists.
    ///
    /// The two lists are fetched concurrently. When the details list fails
    /// the cache is built from the available list alone (every entry
    /// synthesized); when the available list fails the details list is used
    /// on its own. Returns the number of cached countries.
    ///
    /// # Errors
    ///
    /// Returns the available-list error when both lists fail. The previous
    /// cache is kept in that case.
    pub async fn load_reference<S>(&mut self, source: &S) -> Result<usize>
    where
        S: ReferenceSource + ?Sized,
    {
        let timeout = self.config.collaborator_timeout;
        let (available, details) = tokio::join!(
            with_timeout("reference", timeout, source.load_available_countries()),
            with_timeout("reference", timeout, source.load_country_details()),
        );

        match (available, details) {
            (Ok(available), Ok(details)) => self.reference.load_merged(&available, &details),
            (Ok(available), Err(e)) => {
                log::warn!("Country details unavailable, using minimal entries: {e}");
                self.reference.load_merged(&available, &[]);
            }
            (Err(e), Ok(details)) => {
                log::warn!("Available country list unavailable, using details only: {e}");
                self.reference.load(&details);
            }
            (Err(e), Err(_)) => return Err(e),
        }

        log::info!("Loaded {} reference countries", self.reference.len());
        self.publish_selection();
        Ok(self.reference.len())
    }

    /// Select a country and start a city load for it.
    ///
    /// The city is cleared immediately, before any city list arrives. The
    /// returned ticket must be handed to [`Dashboard::apply_city_load`]
    /// together with the result of [`Dashboard::load_cities`].
    pub fn begin_country_selection(&mut self, code: &str) -> (SelectionChange, Option<CityLoadTicket>) {
        let change = self.selection.set_country(code, &self.reference);
        let ticket = match self.selection.country_code() {
            Some(code) => Some(self.cascade.begin(code)),
            None => {
                self.cascade.reset();
                None
            }
        };
        self.publish_selection();
        (change, ticket)
    }

    /// Fetch the city list for a ticket.
    ///
    /// Cities are looked up by country display name. The name comes from the
    /// reference cache; countries missing from the cache are resolved through
    /// the detail source and, failing that, by their code.
    pub async fn load_cities<S>(&self, ticket: &CityLoadTicket, source: &S) -> Result<Vec<String>>
    where
        S: CitySource + CountryDetailSource + ?Sized,
    {
        let timeout = self.config.collaborator_timeout;
        let country_name = match self.reference.find(ticket.country()) {
            Some(country) => country.display_name.clone(),
            None => {
                match with_timeout("country", timeout, source.load_country_detail(ticket.country()))
                    .await
                {
                    Ok(record) => ReferenceCountry::from(&record).display_name,
                    Err(e) => {
                        log::debug!("No display name for {}: {e}", ticket.country());
                        ticket.country().to_string()
                    }
                }
            }
        };

        with_timeout("cities", timeout, source.load_cities(&country_name)).await
    }

    /// Apply a finished city load. Stale loads are dropped.
    pub fn apply_city_load(
        &mut self,
        ticket: &CityLoadTicket,
        result: Result<Vec<String>>,
    ) -> CityLoadOutcome {
        let outcome = self
            .cascade
            .complete(ticket, result, &mut self.selection, &self.reference);
        if !outcome.is_stale() {
            self.publish_selection();
        }
        outcome
    }

    /// Select a country and run its city cascade to completion.
    ///
    /// A blank code clears the selection and yields
    /// [`CityLoadOutcome::Applied`] with no city.
    pub async fn select_country<S>(&mut self, code: &str, source: &S) -> CityLoadOutcome
    where
        S: CitySource + CountryDetailSource + ?Sized,
    {
        let (change, ticket) = self.begin_country_selection(code);
        let Some(ticket) = ticket else {
            return CityLoadOutcome::Applied {
                selected: None,
                change,
            };
        };

        let result = self.load_cities(&ticket, source).await;
        self.apply_city_load(&ticket, result)
    }

    /// Select a city within the current country.
    ///
    /// # Errors
    ///
    /// See [`SelectionState::set_city`](crate::selection::SelectionState::set_city).
    pub fn select_city(&mut self, name: &str) -> Result<SelectionChange> {
        let change = self.selection.set_city(name)?;
        if !change.is_empty() {
            self.publish_selection();
        }
        Ok(change)
    }

    pub fn select_year(&mut self, year: &str) -> SelectionChange {
        let change = self.selection.set_year(year);
        if !change.is_empty() {
            self.publish_selection();
        }
        change
    }

    /// Confirm that the user wants details for the selected country.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::MissingSelection` without a country.
    pub fn confirm_explore(&mut self) -> Result<SelectionChange> {
        let change = self.selection.confirm_explore()?;
        self.publish_selection();
        Ok(change)
    }

    /// Drop the destination and invalidate any city load in flight.
    pub fn clear_selection(&mut self) -> SelectionChange {
        let change = self.selection.clear();
        self.cascade.reset();
        self.publish_selection();
        change
    }

    /// Current badge and banner projection.
    pub fn selection_view(&self) -> Option<SelectionView> {
        self.view_sync.current()
    }

    /// Wall-clock time in the selected country, once explore is confirmed.
    pub fn country_local_time(&self, now: Timestamp) -> Option<DateTime> {
        if !self.selection.explore_confirmed() {
            return None;
        }
        Some(self.selection.timezone().local_time(now))
    }
}

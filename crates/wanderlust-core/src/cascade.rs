//! Country → city loading cascade.
//!
//! A country selection starts a city load. Loads are tagged with a
//! [`CityLoadTicket`]; a completion is only applied when its ticket is still
//! the latest one issued *and* its country is still the selected one. Anything
//! else is a stale response and is dropped without touching the selection.

use crate::{
    error::Result,
    reference::ReferenceCache,
    selection::{SelectionChange, SelectionState},
};

/// Progress of the city list for the selected country.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityLoadState {
    /// No country selected
    #[default]
    Idle,
    Loading {
        country: String,
    },
    Ready {
        country: String,
    },
    Failed {
        country: String,
        reason: String,
    },
}

/// Tag handed out by [`CascadeController::begin`] and presented back on
/// completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityLoadTicket {
    country: String,
    generation: u64,
}

impl CityLoadTicket {
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Entry of the city selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityOption {
    pub name: String,

    /// True when the list was empty and the capital stands in for it
    pub is_capital_fallback: bool,
}

impl CityOption {
    fn city(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_capital_fallback: false,
        }
    }

    fn capital(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_capital_fallback: true,
        }
    }
}

/// What happened when a city load completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CityLoadOutcome {
    /// Options were replaced; `selected` is the auto-selected city, if any
    Applied {
        selected: Option<String>,
        change: SelectionChange,
    },
    /// The source failed; the selector shows an error and no city is selected
    Failed { reason: String },
    /// A newer load or a different country superseded this one
    Stale,
}

impl CityLoadOutcome {
    pub fn is_stale(&self) -> bool {
        matches!(self, CityLoadOutcome::Stale)
    }
}

/// Tracks the city options of the current country and guards them against
/// out-of-order completions.
#[derive(Debug, Default)]
pub struct CascadeController {
    state: CityLoadState,
    cities: Vec<CityOption>,
    generation: u64,
}

impl CascadeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading cities for `country`. Any load still in flight becomes
    /// stale.
    pub fn begin(&mut self, country: &str) -> CityLoadTicket {
        self.generation += 1;
        self.cities.clear();
        let country = country.trim().to_uppercase();
        self.state = CityLoadState::Loading {
            country: country.clone(),
        };
        log::debug!(
            "Loading cities for {country} (generation {})",
            self.generation
        );

        CityLoadTicket {
            country,
            generation: self.generation,
        }
    }

    /// Apply the result of a city load.
    ///
    /// On success the first city is auto-selected. An empty list falls back
    /// to the country's capital from `cache`, when it has one. A failure
    /// leaves the selection without a city.
    pub fn complete(
        &mut self,
        ticket: &CityLoadTicket,
        result: Result<Vec<String>>,
        selection: &mut SelectionState,
        cache: &ReferenceCache,
    ) -> CityLoadOutcome {
        if ticket.generation != self.generation
            || selection.country_code() != Some(ticket.country.as_str())
        {
            log::debug!(
                "Dropping stale city load for {} (generation {}, current {})",
                ticket.country,
                ticket.generation,
                self.generation
            );
            return CityLoadOutcome::Stale;
        }

        let cities = match result {
            Ok(cities) => cities,
            Err(e) => {
                log::warn!("City load for {} failed: {e}", ticket.country);
                self.cities.clear();
                selection.clear_city();
                let reason = e.to_string();
                self.state = CityLoadState::Failed {
                    country: ticket.country.clone(),
                    reason: reason.clone(),
                };
                return CityLoadOutcome::Failed { reason };
            }
        };

        self.cities = cities
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .map(CityOption::city)
            .collect();

        if self.cities.is_empty() {
            if let Some(capital) = cache
                .find(&ticket.country)
                .and_then(|country| country.capital.clone())
            {
                self.cities.push(CityOption::capital(capital));
            }
        }

        self.state = CityLoadState::Ready {
            country: ticket.country.clone(),
        };

        let (selected, change) = match self.cities.first() {
            Some(first) => {
                let name = first.name.clone();
                // country is selected, so this cannot hit the city precondition
                let change = selection.set_city(&name).unwrap_or_default();
                (Some(name), change)
            }
            None => (None, selection.clear_city()),
        };

        CityLoadOutcome::Applied { selected, change }
    }

    /// Forget the current options and invalidate any load in flight.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.cities.clear();
        self.state = CityLoadState::Idle;
    }

    pub fn state(&self) -> &CityLoadState {
        &self.state
    }

    pub fn cities(&self) -> &[CityOption] {
        &self.cities
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, CityLoadState::Loading { .. })
    }
}

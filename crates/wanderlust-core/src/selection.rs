//! The current destination selection (country → city → year).
//!
//! Every transition is a plain state mutation that returns a
//! [`SelectionChange`] describing which levels were touched. Reacting to the
//! change (reloading cities, refreshing badges) is left to the caller.

use crate::{
    error::{Result, WanderlustError},
    models::TimezoneOffset,
    reference::ReferenceCache,
};

/// How [`SelectionState::set_city`] treats a call made without a country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CityPolicy {
    /// Report `WanderlustError::Precondition`
    #[default]
    Strict,

    /// Ignore the call and leave the state unchanged
    Lenient,
}

/// Selection levels that a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionChange {
    pub country: bool,
    pub city: bool,
    pub year: bool,
    pub explore: bool,
}

impl SelectionChange {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        !(self.country || self.city || self.year || self.explore)
    }

    /// Combine two change descriptions.
    pub fn merge(self, other: Self) -> Self {
        Self {
            country: self.country || other.country,
            city: self.city || other.city,
            year: self.year || other.year,
            explore: self.explore || other.explore,
        }
    }
}

/// Single source of truth for the destination the user is looking at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    country_code: Option<String>,
    city_name: Option<String>,
    year: String,
    timezone: TimezoneOffset,
    explore_confirmed: bool,
    city_policy: CityPolicy,
}

impl SelectionState {
    /// Empty selection for the given default year.
    pub fn new(year: impl Into<String>, city_policy: CityPolicy) -> Self {
        Self {
            country_code: None,
            city_name: None,
            year: year.into(),
            timezone: TimezoneOffset::utc(),
            explore_confirmed: false,
            city_policy,
        }
    }

    pub fn country_code(&self) -> Option<&str> {
        self.country_code.as_deref()
    }

    pub fn city_name(&self) -> Option<&str> {
        self.city_name.as_deref()
    }

    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn timezone(&self) -> &TimezoneOffset {
        &self.timezone
    }

    pub fn explore_confirmed(&self) -> bool {
        self.explore_confirmed
    }

    pub fn city_policy(&self) -> CityPolicy {
        self.city_policy
    }

    /// Select a country.
    ///
    /// The code is normalized to uppercase. The timezone is taken from the
    /// cached entry's primary timezone; codes missing from the cache are
    /// still selected (their details may be fetched later) with a `UTC`
    /// timezone. The city and the explore confirmation are always reset.
    pub fn set_country(&mut self, code: &str, cache: &ReferenceCache) -> SelectionChange {
        let code = code.trim().to_uppercase();
        if code.is_empty() {
            return self.clear();
        }

        self.timezone = match cache.find(&code) {
            Some(country) => TimezoneOffset::new(country.primary_timezone()),
            None => {
                log::debug!("Country {code} is not in the reference cache yet");
                TimezoneOffset::utc()
            }
        };

        let change = SelectionChange {
            country: self.country_code.as_deref() != Some(code.as_str()),
            city: self.city_name.is_some(),
            explore: self.explore_confirmed,
            year: false,
        };

        self.country_code = Some(code);
        self.city_name = None;
        self.explore_confirmed = false;
        change
    }

    /// Select a city within the current country.
    ///
    /// # Errors
    ///
    /// * `WanderlustError::InvalidInput` - When the name is blank
    /// * `WanderlustError::Precondition` - When no country is selected and the
    ///   policy is [`CityPolicy::Strict`]
    pub fn set_city(&mut self, name: &str) -> Result<SelectionChange> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WanderlustError::invalid_input("city").with_reason("City name is empty"));
        }

        if self.country_code.is_none() {
            return match self.city_policy {
                CityPolicy::Strict => {
                    Err(WanderlustError::precondition("select a city", "a country"))
                }
                CityPolicy::Lenient => {
                    log::debug!("Ignoring city '{name}' without a selected country");
                    Ok(SelectionChange::none())
                }
            };
        }

        let changed = self.city_name.as_deref() != Some(name);
        self.city_name = Some(name.to_string());
        Ok(SelectionChange {
            city: changed,
            ..SelectionChange::none()
        })
    }

    /// Drop the selected city, keeping the country.
    pub fn clear_city(&mut self) -> SelectionChange {
        SelectionChange {
            city: self.city_name.take().is_some(),
            ..SelectionChange::none()
        }
    }

    /// Set the year. Availability of data for the year is not checked.
    pub fn set_year(&mut self, year: &str) -> SelectionChange {
        let year = year.trim();
        let changed = self.year != year;
        self.year = year.to_string();
        SelectionChange {
            year: changed,
            ..SelectionChange::none()
        }
    }

    /// Record the user's explicit "explore" confirmation.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::MissingSelection` when no country is
    /// selected; the confirmation flag stays false in that case.
    pub fn confirm_explore(&mut self) -> Result<SelectionChange> {
        if self.country_code.is_none() {
            self.explore_confirmed = false;
            return Err(WanderlustError::MissingSelection);
        }

        let changed = !self.explore_confirmed;
        self.explore_confirmed = true;
        Ok(SelectionChange {
            explore: changed,
            ..SelectionChange::none()
        })
    }

    /// Reset the destination. The year is a session preference and is kept.
    pub fn clear(&mut self) -> SelectionChange {
        let change = SelectionChange {
            country: self.country_code.take().is_some(),
            city: self.city_name.take().is_some(),
            explore: self.explore_confirmed,
            year: false,
        };
        self.explore_confirmed = false;
        self.timezone = TimezoneOffset::utc();
        change
    }

    /// Refresh the timezone from freshly fetched country details.
    pub(crate) fn set_timezone(&mut self, label: &str) {
        self.timezone = TimezoneOffset::new(label);
    }
}

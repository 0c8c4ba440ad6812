//! Contracts for the external data sources the dashboard consumes.
//!
//! Each source takes request parameters and returns typed records or fails.
//! Failures are never fatal: the dashboard turns them into a
//! [`DataOutcome::Failed`] for the affected view.

use std::{future::Future, time::Duration};

use async_trait::async_trait;

use crate::{
    error::{Result, WanderlustError},
    models::{
        AvailableCountry, Coordinates, Event, ExchangeRates, LongWeekend, PublicHoliday,
        RawCountryRecord, SunTimes, WeatherForecast,
    },
};

mod fixture;

pub use fixture::FixtureSource;

/// Country lists used to populate the reference cache.
#[async_trait]
pub trait ReferenceSource: Send + Sync {
    /// Codes and names of every country the calendar data covers
    async fn load_available_countries(&self) -> Result<Vec<AvailableCountry>>;

    /// Rich records for as many countries as the source knows
    async fn load_country_details(&self) -> Result<Vec<RawCountryRecord>>;
}

#[async_trait]
pub trait CitySource: Send + Sync {
    /// City names of a country, looked up by its display name
    async fn load_cities(&self, country_name: &str) -> Result<Vec<String>>;
}

#[async_trait]
pub trait CountryDetailSource: Send + Sync {
    async fn load_country_detail(&self, code: &str) -> Result<RawCountryRecord>;
}

#[async_trait]
pub trait CalendarSource: Send + Sync {
    async fn public_holidays(&self, year: &str, country: &str) -> Result<Vec<PublicHoliday>>;

    async fn long_weekends(&self, year: &str, country: &str) -> Result<Vec<LongWeekend>>;
}

#[async_trait]
pub trait EventSource: Send + Sync {
    async fn events(&self, city: &str, country: &str) -> Result<Vec<Event>>;
}

#[async_trait]
pub trait GeocodingSource: Send + Sync {
    /// Resolve a city name to coordinates; `None` when the name is unknown
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>>;
}

#[async_trait]
pub trait ForecastSource: Send + Sync {
    async fn weather(&self, location: &Coordinates) -> Result<WeatherForecast>;

    async fn sun_times(&self, location: &Coordinates) -> Result<SunTimes>;
}

#[async_trait]
pub trait CurrencySource: Send + Sync {
    async fn latest_rates(&self, base: &str) -> Result<ExchangeRates>;
}

/// Await a collaborator call, failing with
/// `WanderlustError::CollaboratorTimeout` once `timeout` elapses.
pub async fn with_timeout<T, F>(collaborator: &str, timeout: Duration, call: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(timeout, call).await {
        Ok(result) => result,
        Err(_) => Err(WanderlustError::CollaboratorTimeout {
            collaborator: collaborator.to_string(),
            timeout,
        }),
    }
}

/// Selection level a data view depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionLevel {
    Country,
    City,
    ExploreConfirmation,
}

impl SelectionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SelectionLevel::Country => "country",
            SelectionLevel::City => "city",
            SelectionLevel::ExploreConfirmation => "explore confirmation",
        }
    }
}

/// What a data view should render.
///
/// Distinguishes "nothing selected" from "request failed" from "no data", so
/// a view never has to guess why it is empty.
#[derive(Debug, Clone, PartialEq)]
pub enum DataOutcome<T> {
    /// The view's selection prerequisite is missing
    NothingSelected(SelectionLevel),

    /// The collaborator failed or timed out
    Failed { reason: String },

    /// The collaborator answered with no records
    Empty,

    Ready(T),
}

impl<T> DataOutcome<T> {
    /// Classify a collaborator result, treating `is_empty(value)` as
    /// [`DataOutcome::Empty`].
    pub fn from_result<F>(result: Result<T>, is_empty: F) -> Self
    where
        F: FnOnce(&T) -> bool,
    {
        match result {
            Ok(value) if is_empty(&value) => DataOutcome::Empty,
            Ok(value) => DataOutcome::Ready(value),
            Err(e) => Self::failed(&e),
        }
    }

    /// Record a collaborator failure.
    pub fn failed(error: &WanderlustError) -> Self {
        log::warn!("Treating collaborator failure as no data: {error}");
        DataOutcome::Failed {
            reason: error.to_string(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, DataOutcome::Ready(_))
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            DataOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_ready(self) -> Option<T> {
        match self {
            DataOutcome::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Split off the ready value; every other state is handed back as an
    /// outcome of the caller's type.
    pub fn try_ready<U>(self) -> std::result::Result<T, DataOutcome<U>> {
        match self {
            DataOutcome::Ready(value) => Ok(value),
            DataOutcome::NothingSelected(level) => Err(DataOutcome::NothingSelected(level)),
            DataOutcome::Failed { reason } => Err(DataOutcome::Failed { reason }),
            DataOutcome::Empty => Err(DataOutcome::Empty),
        }
    }

    pub fn map<U, F>(self, f: F) -> DataOutcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            DataOutcome::NothingSelected(level) => DataOutcome::NothingSelected(level),
            DataOutcome::Failed { reason } => DataOutcome::Failed { reason },
            DataOutcome::Empty => DataOutcome::Empty,
            DataOutcome::Ready(value) => DataOutcome::Ready(f(value)),
        }
    }
}

impl<T> DataOutcome<Vec<T>> {
    /// Classify a list result; an empty list is [`DataOutcome::Empty`].
    pub fn from_list(result: Result<Vec<T>>) -> Self {
        Self::from_result(result, Vec::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_with_timeout_passes_result_through() {
        let value = with_timeout("cities", Duration::from_secs(1), async { Ok(7) })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_with_timeout_expires() {
        let err = with_timeout("holidays", Duration::from_millis(50), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok::<_, WanderlustError>(())
        })
        .await
        .unwrap_err();

        assert!(matches!(
            err,
            WanderlustError::CollaboratorTimeout { ref collaborator, .. } if collaborator == "holidays"
        ));
    }

    #[test]
    fn test_outcome_classification() {
        let empty: DataOutcome<Vec<u8>> = DataOutcome::from_list(Ok(vec![]));
        assert_eq!(empty, DataOutcome::Empty);

        let ready = DataOutcome::from_list(Ok(vec![1, 2]));
        assert_eq!(ready.ready().map(Vec::len), Some(2));

        let failed: DataOutcome<Vec<u8>> = DataOutcome::from_list(Err(
            WanderlustError::collaborator("events").with_reason("HTTP 429"),
        ));
        assert!(matches!(failed, DataOutcome::Failed { ref reason } if reason.contains("429")));
    }
}

//! Offline data source backed by a JSON document.

use std::{collections::HashMap, path::Path};

use async_trait::async_trait;
use serde::Deserialize;

use super::{
    CalendarSource, CitySource, CountryDetailSource, CurrencySource, EventSource, ForecastSource,
    GeocodingSource, ReferenceSource,
};
use crate::{
    error::{Result, WanderlustError},
    models::{
        AvailableCountry, Coordinates, Event, ExchangeRates, LongWeekend, PublicHoliday,
        RawCountryRecord, SunTimes, WeatherForecast,
    },
};

/// Implements every collaborator contract from canned data.
///
/// Calendar data is keyed by `"<year>/<code>"`, events and coordinates by
/// city name, forecasts by the geocoded location name. Any collaborator named
/// in `failing` (`reference`, `cities`, `country`, `holidays`,
/// `long_weekends`, `events`, `geocoding`, `weather`, `sun`, `currency`)
/// fails every call, which is handy for exercising degraded views.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FixtureSource {
    pub available_countries: Vec<AvailableCountry>,
    pub country_details: Vec<RawCountryRecord>,
    /// City lists keyed by country display name
    pub cities: HashMap<String, Vec<String>>,
    pub holidays: HashMap<String, Vec<PublicHoliday>>,
    pub long_weekends: HashMap<String, Vec<LongWeekend>>,
    pub events: HashMap<String, Vec<Event>>,
    pub coordinates: HashMap<String, Coordinates>,
    pub weather: HashMap<String, WeatherForecast>,
    pub sun_times: HashMap<String, SunTimes>,
    /// Rate tables keyed by base currency
    pub rates: HashMap<String, ExchangeRates>,
    pub failing: Vec<String>,
}

impl FixtureSource {
    /// Load fixtures from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::FileSystem` if the file cannot be read and
    /// `WanderlustError::Serialization` if it is not a valid fixture document.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| WanderlustError::FileSystem {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Make every call of `collaborator` fail.
    pub fn with_failure(mut self, collaborator: impl Into<String>) -> Self {
        self.failing.push(collaborator.into());
        self
    }

    fn check(&self, collaborator: &str) -> Result<()> {
        if self.failing.iter().any(|name| name == collaborator) {
            return Err(WanderlustError::collaborator(collaborator).with_reason("fixture failure"));
        }
        Ok(())
    }

    fn calendar_key(year: &str, country: &str) -> String {
        format!("{}/{}", year.trim(), country.trim().to_uppercase())
    }
}

#[async_trait]
impl ReferenceSource for FixtureSource {
    async fn load_available_countries(&self) -> Result<Vec<AvailableCountry>> {
        self.check("reference")?;
        Ok(self.available_countries.clone())
    }

    async fn load_country_details(&self) -> Result<Vec<RawCountryRecord>> {
        self.check("reference")?;
        Ok(self.country_details.clone())
    }
}

#[async_trait]
impl CitySource for FixtureSource {
    async fn load_cities(&self, country_name: &str) -> Result<Vec<String>> {
        self.check("cities")?;
        Ok(self.cities.get(country_name).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl CountryDetailSource for FixtureSource {
    async fn load_country_detail(&self, code: &str) -> Result<RawCountryRecord> {
        self.check("country")?;
        self.country_details
            .iter()
            .find(|record| record.code() == code.trim().to_uppercase())
            .cloned()
            .ok_or_else(|| WanderlustError::CountryNotFound {
                code: code.trim().to_uppercase(),
            })
    }
}

#[async_trait]
impl CalendarSource for FixtureSource {
    async fn public_holidays(&self, year: &str, country: &str) -> Result<Vec<PublicHoliday>> {
        self.check("holidays")?;
        Ok(self
            .holidays
            .get(&Self::calendar_key(year, country))
            .cloned()
            .unwrap_or_default())
    }

    async fn long_weekends(&self, year: &str, country: &str) -> Result<Vec<LongWeekend>> {
        self.check("long_weekends")?;
        Ok(self
            .long_weekends
            .get(&Self::calendar_key(year, country))
            .cloned()
            .unwrap_or_default())
    }
}

#[async_trait]
impl EventSource for FixtureSource {
    async fn events(&self, city: &str, _country: &str) -> Result<Vec<Event>> {
        self.check("events")?;
        Ok(self.events.get(city).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl GeocodingSource for FixtureSource {
    async fn geocode(&self, city: &str) -> Result<Option<Coordinates>> {
        self.check("geocoding")?;
        Ok(self.coordinates.get(city).cloned())
    }
}

#[async_trait]
impl ForecastSource for FixtureSource {
    async fn weather(&self, location: &Coordinates) -> Result<WeatherForecast> {
        self.check("weather")?;
        self.weather
            .get(&location.name)
            .cloned()
            .ok_or_else(|| {
                WanderlustError::collaborator("weather")
                    .with_reason(format!("no forecast for {}", location.name))
            })
    }

    async fn sun_times(&self, location: &Coordinates) -> Result<SunTimes> {
        self.check("sun")?;
        self.sun_times.get(&location.name).cloned().ok_or_else(|| {
            WanderlustError::collaborator("sun")
                .with_reason(format!("no sun times for {}", location.name))
        })
    }
}

#[async_trait]
impl CurrencySource for FixtureSource {
    async fn latest_rates(&self, base: &str) -> Result<ExchangeRates> {
        self.check("currency")?;
        self.rates
            .get(&base.trim().to_uppercase())
            .cloned()
            .ok_or_else(|| {
                WanderlustError::collaborator("currency")
                    .with_reason(format!("no rates for base {base}"))
            })
    }
}

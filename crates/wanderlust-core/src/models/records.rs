//! Typed records returned by the calendar, event, forecast and currency
//! data sources.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Plan, PlanType};
use crate::error::{Result, WanderlustError};

/// Venue shown for events that do not name one.
pub const DEFAULT_VENUE: &str = "Local Venue";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PublicHoliday {
    /// ISO date
    pub date: String,
    /// Name in the local language
    pub local_name: String,
    /// English name
    pub name: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub global: bool,
    #[serde(default)]
    pub types: Vec<String>,
}

impl From<&PublicHoliday> for Plan {
    fn from(holiday: &PublicHoliday) -> Self {
        Plan::new(
            PlanType::Holiday,
            &holiday.local_name,
            &holiday.name,
            &holiday.date,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LongWeekend {
    pub start_date: String,
    pub end_date: String,
    pub day_count: u32,
    #[serde(default)]
    pub need_bridge_day: bool,
}

impl From<&LongWeekend> for Plan {
    fn from(weekend: &LongWeekend) -> Self {
        Plan::new(
            PlanType::Weekend,
            PlanType::Weekend.label(),
            format!("{} - {}", weekend.start_date, weekend.end_date),
            &weekend.start_date,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    /// ISO date of the first performance
    pub date: String,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl Event {
    pub fn venue_or_default(&self) -> &str {
        self.venue.as_deref().unwrap_or(DEFAULT_VENUE)
    }
}

impl From<&Event> for Plan {
    fn from(event: &Event) -> Self {
        Plan::new(
            PlanType::Event,
            &event.name,
            event.venue_or_default(),
            &event.date,
        )
    }
}

/// Geocoding result for a city name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyForecast {
    pub date: String,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub weather_code: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherForecast {
    pub temperature: f64,
    pub relative_humidity: u8,
    pub wind_speed: f64,
    pub weather_code: u8,
    #[serde(default)]
    pub daily: Vec<DailyForecast>,
}

impl WeatherForecast {
    pub fn condition(&self) -> WeatherCondition {
        WeatherCondition::from_code(self.weather_code)
    }
}

/// Coarse condition derived from a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeatherCondition {
    Clear,
    PartlyCloudy,
    Foggy,
    Rainy,
    Snowy,
    Stormy,
}

impl WeatherCondition {
    /// Map a WMO weather interpretation code onto a condition.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::models::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_code(0), WeatherCondition::Clear);
    /// assert_eq!(WeatherCondition::from_code(45), WeatherCondition::Foggy);
    /// assert_eq!(WeatherCondition::from_code(95), WeatherCondition::Stormy);
    /// ```
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => WeatherCondition::Clear,
            1..=3 => WeatherCondition::PartlyCloudy,
            4..=48 => WeatherCondition::Foggy,
            49..=67 => WeatherCondition::Rainy,
            68..=77 => WeatherCondition::Snowy,
            78..=82 => WeatherCondition::Rainy,
            _ => WeatherCondition::Stormy,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::PartlyCloudy => "Partly Cloudy",
            WeatherCondition::Foggy => "Foggy",
            WeatherCondition::Rainy => "Rainy",
            WeatherCondition::Snowy => "Snowy",
            WeatherCondition::Stormy => "Stormy",
        }
    }
}

/// Sunrise and sunset for a location, as RFC 3339 timestamps.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SunTimes {
    pub sunrise: String,
    pub sunset: String,
    pub solar_noon: String,
    /// Length of the day in seconds
    pub day_length: u32,
}

/// Exchange rates relative to a base currency.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExchangeRates {
    pub base: String,
    pub rates: IndexMap<String, f64>,
}

impl ExchangeRates {
    /// Rate of `currency` against the base currency.
    pub fn rate(&self, currency: &str) -> Option<f64> {
        if currency.eq_ignore_ascii_case(&self.base) {
            return Some(1.0);
        }
        self.rates
            .get(&currency.to_uppercase())
            .copied()
            .filter(|rate| *rate > 0.0)
    }

    /// Convert an amount between two currencies through the base currency.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::InvalidInput` for a non-positive amount or a
    /// currency missing from the rate table.
    pub fn convert(&self, amount: f64, from: &str, to: &str) -> Result<f64> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(WanderlustError::invalid_input("amount")
                .with_reason("Amount must be a positive number"));
        }
        let from_rate = self.rate(from).ok_or_else(|| {
            WanderlustError::invalid_input("from").with_reason(format!("Unknown currency: {from}"))
        })?;
        let to_rate = self.rate(to).ok_or_else(|| {
            WanderlustError::invalid_input("to").with_reason(format!("Unknown currency: {to}"))
        })?;
        Ok(amount / from_rate * to_rate)
    }
}

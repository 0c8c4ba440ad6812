//! Data models for the dashboard engine.
//!
//! This module contains all the core data structures used throughout the
//! engine, organized into logical submodules for better maintainability.

mod country;
mod filters;
mod plan;
mod records;
mod summary;
mod timezone;


pub use country::{
    flag_url_for, AvailableCountry, Car, CountryName, Currency, Flags, Idd, RawCountryRecord,
    ReferenceCountry, DEFAULT_TIMEZONE,
};
pub use filters::PlanFilter;
pub use plan::{Plan, PlanIdentity, PlanType};
pub use records::{
    Coordinates, DailyForecast, Event, ExchangeRates, LongWeekend, PublicHoliday, SunTimes,
    WeatherCondition, WeatherForecast, DEFAULT_VENUE,
};
pub use summary::{FilterCounts, IndexedPlan};
pub use timezone::{parse_utc_offset, TimezoneOffset};

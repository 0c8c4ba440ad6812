//! Display implementations for domain models and projections.

use std::fmt;

use super::dates::PlanDate;
use crate::{
    cascade::{CityLoadState, CityOption},
    collaborators::{DataOutcome, SelectionLevel},
    dashboard::{CountryOverview, CurrencyBoard, LocalForecast},
    models::{
        Event, FilterCounts, IndexedPlan, LongWeekend, Plan, PlanFilter, PlanType, PublicHoliday,
        SunTimes, WeatherCondition,
    },
    view_sync::{DestinationBanner, SelectionBadge},
};

impl fmt::Display for PlanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for PlanFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for SelectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**{}** {}", self.plan_type.label(), self.name)?;
        if !self.details.is_empty() {
            write!(f, " ({})", self.details)?;
        }
        if !self.date.is_empty() {
            write!(f, ", {}", PlanDate(&self.date))?;
        }
        Ok(())
    }
}

impl fmt::Display for IndexedPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- [{}] {}", self.index, self.plan)
    }
}

impl fmt::Display for FilterCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "All: {} | Holidays: {} | Events: {} | Long Weekends: {}",
            self.all, self.holiday, self.event, self.long_weekend
        )
    }
}

impl fmt::Display for SelectionBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {}",
            self.country_display_name, self.country_code, self.year
        )?;
        if !self.city_suffix.is_empty() {
            write!(f, " {}", self.city_suffix)?;
        }
        Ok(())
    }
}

impl fmt::Display for DestinationBanner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {}", self.country_display_name)?;
        if !self.city_line.is_empty() {
            write!(f, " {}", self.city_line)?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "![flag]({})", self.country_flag_url)
    }
}

impl fmt::Display for CityLoadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CityLoadState::Idle => write!(f, "Select a country first"),
            CityLoadState::Loading { country } => write!(f, "Loading cities for {country}..."),
            CityLoadState::Ready { .. } => write!(f, "Select a city"),
            CityLoadState::Failed { reason, .. } => write!(f, "Error loading cities: {reason}"),
        }
    }
}

impl fmt::Display for CityOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_capital_fallback {
            write!(f, "{} (Capital)", self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

impl fmt::Display for PublicHoliday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {}: **{}**", PlanDate(&self.date), self.local_name)?;
        if self.name != self.local_name {
            write!(f, " ({})", self.name)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for LongWeekend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} to {}: {} days",
            PlanDate(&self.start_date),
            PlanDate(&self.end_date),
            self.day_count
        )?;
        if self.need_bridge_day {
            write!(f, " (bridge day needed)")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {}: **{}** at {}",
            PlanDate(&self.date),
            self.name,
            self.venue_or_default()
        )?;
        if let Some(category) = &self.category {
            write!(f, " [{category}]")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for CountryOverview {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = &self.record;
        writeln!(f, "### {}", record.name.official)?;
        writeln!(f)?;
        if !record.capital.is_empty() {
            writeln!(f, "- Capital: {}", record.capital.join(", "))?;
        }
        if !record.region.is_empty() {
            write!(f, "- Region: {}", record.region)?;
            if !record.subregion.is_empty() {
                write!(f, " ({})", record.subregion)?;
            }
            writeln!(f)?;
        }
        if record.population > 0 {
            writeln!(f, "- Population: {}", record.population)?;
        }
        if record.area > 0.0 {
            writeln!(f, "- Area: {} km²", record.area)?;
        }
        if !record.languages.is_empty() {
            writeln!(f, "- Languages: {}", record.language_list())?;
        }
        if !record.currencies.is_empty() {
            writeln!(f, "- Currencies: {}", record.currency_list())?;
        }
        if let Some(calling_code) = record.calling_code() {
            writeln!(f, "- Calling code: {calling_code}")?;
        }
        if let Some(side) = &record.car.side {
            writeln!(f, "- Drives on the {side}")?;
        }
        if !record.borders.is_empty() {
            writeln!(f, "- Borders: {}", record.borders.join(", "))?;
        }
        writeln!(f, "- Timezone: {}", self.timezone)
    }
}

impl fmt::Display for LocalForecast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forecast = &self.forecast;
        writeln!(
            f,
            "### {}: {:.0}°C, {}",
            self.location.name,
            forecast.temperature,
            forecast.condition()
        )?;
        writeln!(f)?;
        writeln!(f, "- Humidity: {}%", forecast.relative_humidity)?;
        writeln!(f, "- Wind: {:.0} km/h", forecast.wind_speed)?;
        for day in &forecast.daily {
            writeln!(
                f,
                "- {}: {:.0}°/{:.0}° {}",
                PlanDate(&day.date),
                day.temperature_max,
                day.temperature_min,
                WeatherCondition::from_code(day.weather_code)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SunTimes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hours = self.day_length / 3600;
        let minutes = (self.day_length % 3600) / 60;
        writeln!(f, "- Sunrise: {}", self.sunrise)?;
        writeln!(f, "- Solar noon: {}", self.solar_noon)?;
        writeln!(f, "- Sunset: {}", self.sunset)?;
        writeln!(f, "- Day length: {hours}h {minutes}m")
    }
}

impl fmt::Display for CurrencyBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### 1 {}", self.rates.base)?;
        writeln!(f)?;
        for (currency, rate) in &self.rates.rates {
            let marker = if self.local_currency.as_deref() == Some(currency.as_str()) {
                " (local)"
            } else {
                ""
            };
            writeln!(f, "- {currency}: {rate:.4}{marker}")?;
        }
        Ok(())
    }
}

impl<T: fmt::Display> fmt::Display for DataOutcome<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataOutcome::NothingSelected(SelectionLevel::ExploreConfirmation) => {
                writeln!(f, "Confirm explore to load this view.")
            }
            DataOutcome::NothingSelected(level) => writeln!(f, "Select a {level} first."),
            DataOutcome::Failed { reason } => writeln!(f, "Request failed: {reason}"),
            DataOutcome::Empty => writeln!(f, "No data available."),
            DataOutcome::Ready(value) => write!(f, "{value}"),
        }
    }
}

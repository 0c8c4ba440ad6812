//! Selection-gated queries against the data sources.
//!
//! Every query checks its selection prerequisite first and reports
//! [`DataOutcome::NothingSelected`] without calling the source when it is
//! missing. Source failures and timeouts become [`DataOutcome::Failed`].

use serde::Serialize;

use super::Dashboard;
use crate::{
    collaborators::{
        with_timeout, CalendarSource, CountryDetailSource, CurrencySource, DataOutcome,
        EventSource, ForecastSource, GeocodingSource, SelectionLevel,
    },
    models::{
        Coordinates, Event, ExchangeRates, LongWeekend, PublicHoliday, RawCountryRecord, SunTimes,
        WeatherForecast,
    },
};

/// Country details shown once explore is confirmed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryOverview {
    pub record: RawCountryRecord,
    /// Timezone label now driving the local clock
    pub timezone: String,
}

/// Weather for the selected city.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalForecast {
    pub location: Coordinates,
    pub forecast: WeatherForecast,
}

/// Exchange rates plus the currency to preselect as conversion target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyBoard {
    pub rates: ExchangeRates,
    /// First currency of the selected country, when known and quoted
    pub local_currency: Option<String>,
}

impl Dashboard {
    fn require_country(&self) -> Result<&str, SelectionLevel> {
        self.selection.country_code().ok_or(SelectionLevel::Country)
    }

    fn require_city(&self) -> Result<(&str, &str), SelectionLevel> {
        let country = self.require_country()?;
        let city = self.selection.city_name().ok_or(SelectionLevel::City)?;
        Ok((city, country))
    }

    /// Full country record for the explore view.
    ///
    /// Requires a confirmed explore. When the record arrives and the same
    /// country is still selected, its primary timezone replaces the one
    /// derived from the reference cache.
    pub async fn country_detail<S>(&mut self, source: &S) -> DataOutcome<CountryOverview>
    where
        S: CountryDetailSource + ?Sized,
    {
        let code = match self.require_country() {
            Ok(code) => code.to_string(),
            Err(level) => return DataOutcome::NothingSelected(level),
        };
        if !self.selection.explore_confirmed() {
            return DataOutcome::NothingSelected(SelectionLevel::ExploreConfirmation);
        }

        let result = with_timeout(
            "country",
            self.config.collaborator_timeout,
            source.load_country_detail(&code),
        )
        .await;

        let record = match result {
            Ok(record) => record,
            Err(e) => return DataOutcome::failed(&e),
        };

        if self.selection.country_code() == Some(code.as_str()) {
            if let Some(timezone) = record.timezones.first() {
                self.selection.set_timezone(timezone);
            }
        } else {
            log::debug!("Selection moved away from {code}, keeping current timezone");
        }

        DataOutcome::Ready(CountryOverview {
            timezone: self.selection.timezone().as_str().to_string(),
            record,
        })
    }

    /// Public holidays of the selected country in the selected year.
    pub async fn holidays<S>(&self, source: &S) -> DataOutcome<Vec<PublicHoliday>>
    where
        S: CalendarSource + ?Sized,
    {
        let country = match self.require_country() {
            Ok(country) => country,
            Err(level) => return DataOutcome::NothingSelected(level),
        };
        DataOutcome::from_list(
            with_timeout(
                "holidays",
                self.config.collaborator_timeout,
                source.public_holidays(self.selection.year(), country),
            )
            .await,
        )
    }

    /// Long weekends of the selected country in the selected year.
    pub async fn long_weekends<S>(&self, source: &S) -> DataOutcome<Vec<LongWeekend>>
    where
        S: CalendarSource + ?Sized,
    {
        let country = match self.require_country() {
            Ok(country) => country,
            Err(level) => return DataOutcome::NothingSelected(level),
        };
        DataOutcome::from_list(
            with_timeout(
                "long_weekends",
                self.config.collaborator_timeout,
                source.long_weekends(self.selection.year(), country),
            )
            .await,
        )
    }

    /// Events in the selected city.
    pub async fn events<S>(&self, source: &S) -> DataOutcome<Vec<Event>>
    where
        S: EventSource + ?Sized,
    {
        let (city, country) = match self.require_city() {
            Ok(selected) => selected,
            Err(level) => return DataOutcome::NothingSelected(level),
        };
        DataOutcome::from_list(
            with_timeout(
                "events",
                self.config.collaborator_timeout,
                source.events(city, country),
            )
            .await,
        )
    }

    async fn locate_city<S>(&self, source: &S) -> DataOutcome<Coordinates>
    where
        S: GeocodingSource + ?Sized,
    {
        let (city, _) = match self.require_city() {
            Ok(selected) => selected,
            Err(level) => return DataOutcome::NothingSelected(level),
        };
        match with_timeout(
            "geocoding",
            self.config.collaborator_timeout,
            source.geocode(city),
        )
        .await
        {
            Ok(Some(location)) => DataOutcome::Ready(location),
            Ok(None) => {
                log::debug!("No coordinates for {city}");
                DataOutcome::Empty
            }
            Err(e) => DataOutcome::failed(&e),
        }
    }

    /// Current weather for the selected city, resolved through geocoding.
    pub async fn weather<S>(&self, source: &S) -> DataOutcome<LocalForecast>
    where
        S: GeocodingSource + ForecastSource + ?Sized,
    {
        let location = match self.locate_city(source).await.try_ready() {
            Ok(location) => location,
            Err(outcome) => return outcome,
        };
        let result = with_timeout(
            "weather",
            self.config.collaborator_timeout,
            source.weather(&location),
        )
        .await;
        DataOutcome::from_result(result, |_| false)
            .map(|forecast| LocalForecast { location, forecast })
    }

    /// Sunrise and sunset for the selected city.
    pub async fn sun_times<S>(&self, source: &S) -> DataOutcome<SunTimes>
    where
        S: GeocodingSource + ForecastSource + ?Sized,
    {
        let location = match self.locate_city(source).await.try_ready() {
            Ok(location) => location,
            Err(outcome) => return outcome,
        };
        DataOutcome::from_result(
            with_timeout(
                "sun",
                self.config.collaborator_timeout,
                source.sun_times(&location),
            )
            .await,
            |_| false,
        )
    }

    /// Exchange rates against `base`.
    ///
    /// Does not need a selection. With a selected country, its first listed
    /// currency is looked up and offered as the conversion target when the
    /// rate table quotes it.
    pub async fn exchange_rates<S>(&self, source: &S, base: &str) -> DataOutcome<CurrencyBoard>
    where
        S: CurrencySource + CountryDetailSource + ?Sized,
    {
        let timeout = self.config.collaborator_timeout;
        let rates = match with_timeout("currency", timeout, source.latest_rates(base)).await {
            Ok(rates) if rates.rates.is_empty() => return DataOutcome::Empty,
            Ok(rates) => rates,
            Err(e) => return DataOutcome::failed(&e),
        };

        let local_currency = match self.selection.country_code() {
            Some(code) => with_timeout("country", timeout, source.load_country_detail(code))
                .await
                .ok()
                .and_then(|record| record.primary_currency().map(str::to_string))
                .filter(|currency| rates.rate(currency).is_some()),
            None => None,
        };

        DataOutcome::Ready(CurrencyBoard {
            rates,
            local_currency,
        })
    }
}

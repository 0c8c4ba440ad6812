//! Country records as delivered by the reference data sources, and the
//! normalized cache entry derived from them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Timezone used whenever a country record carries none.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Flag image URL derived from a country code.
///
/// # Examples
///
/// ```rust
/// use wanderlust_core::models::flag_url_for;
///
/// assert_eq!(flag_url_for("FR"), "https://flagcdn.com/w40/fr.png");
/// ```
pub fn flag_url_for(code: &str) -> String {
    format!("https://flagcdn.com/w40/{}.png", code.trim().to_lowercase())
}

/// Entry of the "available countries" list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AvailableCountry {
    /// Two-letter country code
    #[serde(alias = "countryCode")]
    pub code: String,

    /// English country name
    #[serde(default)]
    pub name: String,
}

/// Common and official country names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryName {
    pub common: String,
    #[serde(default)]
    pub official: String,
}

/// Flag images in the formats offered by the details source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Flags {
    pub png: Option<String>,
    pub svg: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Currency {
    pub name: String,
    pub symbol: Option<String>,
}

/// International direct dialing prefix.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Idd {
    pub root: Option<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Car {
    pub side: Option<String>,
    #[serde(default)]
    pub signs: Vec<String>,
}

/// Rich country record from the details source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RawCountryRecord {
    pub cca2: String,
    pub name: CountryName,
    #[serde(default)]
    pub flags: Flags,
    #[serde(default)]
    pub timezones: Vec<String>,
    #[serde(default)]
    pub capital: Vec<String>,
    #[serde(default)]
    pub currencies: IndexMap<String, Currency>,
    #[serde(default)]
    pub languages: IndexMap<String, String>,
    #[serde(default)]
    pub borders: Vec<String>,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub area: f64,
    #[serde(default)]
    pub continents: Vec<String>,
    #[serde(default)]
    pub idd: Idd,
    #[serde(default)]
    pub car: Car,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
}

impl RawCountryRecord {
    /// Normalized (uppercase) country code.
    pub fn code(&self) -> String {
        self.cca2.trim().to_uppercase()
    }

    /// First listed currency code, used to preselect the converter target.
    pub fn primary_currency(&self) -> Option<&str> {
        self.currencies.keys().next().map(String::as_str)
    }

    /// Dialing code such as `+33`; only when the suffix is unambiguous.
    pub fn calling_code(&self) -> Option<String> {
        let root = self.idd.root.as_deref()?;
        match self.idd.suffixes.as_slice() {
            [suffix] => Some(format!("{root}{suffix}")),
            _ => Some(root.to_string()),
        }
    }

    /// Language names joined for display.
    pub fn language_list(&self) -> String {
        self.languages
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Currencies formatted as `Name (symbol)` and joined for display.
    pub fn currency_list(&self) -> String {
        self.currencies
            .values()
            .map(|currency| match &currency.symbol {
                Some(symbol) => format!("{} ({symbol})", currency.name),
                None => currency.name.clone(),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Normalized reference entry kept in the cache.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ReferenceCountry {
    /// Uppercase two-letter code, unique key
    pub code: String,

    /// Common name shown in selectors and badges
    pub display_name: String,

    pub flag_url: String,

    /// Ordered timezones, the first one is primary
    pub timezones: Vec<String>,

    /// First listed capital, used when a country has no city list
    pub capital: Option<String>,
}

impl ReferenceCountry {
    /// Minimal entry for a code the details source knows nothing about.
    pub fn synthesized(code: &str, name: Option<&str>) -> Self {
        let code = code.trim().to_uppercase();
        let display_name = name
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map_or_else(|| code.clone(), String::from);

        Self {
            flag_url: flag_url_for(&code),
            display_name,
            timezones: vec![DEFAULT_TIMEZONE.to_string()],
            capital: None,
            code,
        }
    }

    /// Primary timezone label, `UTC` when none is known.
    pub fn primary_timezone(&self) -> &str {
        self.timezones
            .first()
            .map_or(DEFAULT_TIMEZONE, String::as_str)
    }
}

impl From<&RawCountryRecord> for ReferenceCountry {
    fn from(record: &RawCountryRecord) -> Self {
        let code = record.code();
        let display_name = if record.name.common.trim().is_empty() {
            code.clone()
        } else {
            record.name.common.clone()
        };

        Self {
            flag_url: record
                .flags
                .png
                .clone()
                .unwrap_or_else(|| flag_url_for(&code)),
            display_name,
            timezones: record.timezones.clone(),
            capital: record
                .capital
                .iter()
                .find(|capital| !capital.trim().is_empty())
                .cloned(),
            code,
        }
    }
}

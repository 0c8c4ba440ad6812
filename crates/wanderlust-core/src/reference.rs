//! In-memory index of reference countries.
//!
//! The cache is populated once per session from the reference data sources
//! and is read-only afterwards. Reloading builds a complete new index and
//! swaps it in with a single assignment, so a reader never observes a
//! partially built cache.

use std::collections::{HashMap, HashSet};

use crate::{
    error::{Result, WanderlustError},
    models::{AvailableCountry, RawCountryRecord, ReferenceCountry},
};

/// Code-keyed index of [`ReferenceCountry`] entries, iterated in display-name
/// order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceCache {
    entries: Vec<ReferenceCountry>,
    by_code: HashMap<String, usize>,
}

impl ReferenceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cache with entries built from rich country records.
    ///
    /// Records without a code are skipped; when a code repeats, the first
    /// record wins.
    pub fn load(&mut self, records: &[RawCountryRecord]) {
        let entries = records
            .iter()
            .filter(|record| !record.code().is_empty())
            .map(ReferenceCountry::from)
            .collect();
        *self = Self::from_entries(entries);
    }

    /// Replace the cache by merging the "available countries" list with the
    /// rich details list.
    ///
    /// Every code of `available` yields exactly one entry. Codes that have no
    /// matching details record get a synthesized entry with a flag URL
    /// derived from the code and a `UTC` timezone. Details for codes that are
    /// not available are ignored.
    pub fn load_merged(&mut self, available: &[AvailableCountry], details: &[RawCountryRecord]) {
        let details_by_code: HashMap<String, &RawCountryRecord> = details
            .iter()
            .map(|record| (record.code(), record))
            .filter(|(code, _)| !code.is_empty())
            .collect();

        let mut seen = HashSet::new();
        let mut entries = Vec::with_capacity(available.len());
        let mut synthesized = 0usize;

        for country in available {
            let code = country.code.trim().to_uppercase();
            if code.is_empty() || !seen.insert(code.clone()) {
                continue;
            }
            match details_by_code.get(&code) {
                Some(record) => entries.push(ReferenceCountry::from(*record)),
                None => {
                    synthesized += 1;
                    entries.push(ReferenceCountry::synthesized(&code, Some(country.name.as_str())));
                }
            }
        }

        if synthesized > 0 {
            log::debug!("Synthesized {synthesized} reference entries without details");
        }
        *self = Self::from_entries(entries);
    }

    fn from_entries(mut entries: Vec<ReferenceCountry>) -> Self {
        // first occurrence of a code wins
        let mut seen = HashSet::new();
        entries.retain(|entry| seen.insert(entry.code.clone()));

        entries.sort_by_cached_key(|entry| (entry.display_name.to_lowercase(), entry.code.clone()));

        let by_code = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry.code.clone(), index))
            .collect();

        Self { entries, by_code }
    }

    /// Look up an entry by code (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::CountryNotFound` if the code is unknown.
    pub fn get(&self, code: &str) -> Result<&ReferenceCountry> {
        self.find(code)
            .ok_or_else(|| WanderlustError::CountryNotFound {
                code: code.trim().to_uppercase(),
            })
    }

    /// Like [`ReferenceCache::get`] but returns `None` on a miss.
    pub fn find(&self, code: &str) -> Option<&ReferenceCountry> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .and_then(|index| self.entries.get(*index))
    }

    pub fn contains(&self, code: &str) -> bool {
        self.find(code).is_some()
    }

    /// Entries in display-name order.
    pub fn iter(&self) -> std::slice::Iter<'_, ReferenceCountry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReferenceCache {
    type Item = &'a ReferenceCountry;
    type IntoIter = std::slice::Iter<'a, ReferenceCountry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CountryName, Flags};

    fn available(code: &str, name: &str) -> AvailableCountry {
        AvailableCountry {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    fn details(code: &str, name: &str, timezone: &str, capital: &str) -> RawCountryRecord {
        RawCountryRecord {
            cca2: code.to_string(),
            name: CountryName {
                common: name.to_string(),
                official: name.to_string(),
            },
            flags: Flags {
                png: Some(format!("https://img.example/{code}.png")),
                ..Default::default()
            },
            timezones: vec![timezone.to_string()],
            capital: vec![capital.to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_synthesizes_missing_details() {
        let mut cache = ReferenceCache::new();
        cache.load_merged(&[available("FR", "")], &[]);

        let entry = cache.get("FR").unwrap();
        assert_eq!(entry.timezones, vec!["UTC".to_string()]);
        assert_eq!(entry.flag_url, "https://flagcdn.com/w40/fr.png");
        assert_eq!(entry.display_name, "FR");
    }

    #[test]
    fn test_merge_uses_available_name_for_synthesized_entry() {
        let mut cache = ReferenceCache::new();
        cache.load_merged(&[available("xk", "Kosovo")], &[]);
        assert_eq!(cache.get("XK").unwrap().display_name, "Kosovo");
    }

    #[test]
    fn test_merge_one_entry_per_available_code() {
        let mut cache = ReferenceCache::new();
        cache.load_merged(
            &[
                available("DE", "Germany"),
                available("de", "Germany"),
                available("JP", "Japan"),
            ],
            &[
                details("DE", "Germany", "UTC+01:00", "Berlin"),
                details("US", "United States", "UTC-05:00", "Washington, D.C."),
            ],
        );

        assert_eq!(cache.len(), 2);
        assert!(cache.contains("de"));
        assert!(cache.contains("JP"));
        assert!(!cache.contains("US"));
        assert_eq!(cache.get("DE").unwrap().capital.as_deref(), Some("Berlin"));
    }

    #[test]
    fn test_entries_sorted_case_insensitively() {
        let mut cache = ReferenceCache::new();
        cache.load(&[
            details("ZA", "south Africa", "UTC+02:00", "Pretoria"),
            details("AT", "Austria", "UTC+01:00", "Vienna"),
            details("BR", "Brazil", "UTC-03:00", "Brasília"),
        ]);

        let names: Vec<_> = cache.iter().map(|c| c.display_name.as_str()).collect();
        assert_eq!(names, vec!["Austria", "Brazil", "south Africa"]);
    }

    #[test]
    fn test_reload_replaces_previous_entries() {
        let mut cache = ReferenceCache::new();
        cache.load(&[details("AT", "Austria", "UTC+01:00", "Vienna")]);
        cache.load(&[details("BR", "Brazil", "UTC-03:00", "Brasília")]);

        assert!(!cache.contains("AT"));
        assert!(cache.contains("BR"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_unknown_code_is_not_found() {
        let cache = ReferenceCache::new();
        let err = cache.get("zz").unwrap_err();
        assert!(matches!(err, WanderlustError::CountryNotFound { code } if code == "ZZ"));
    }
}

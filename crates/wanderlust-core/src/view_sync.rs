//! Projection of the selection onto its visible indicators.
//!
//! Both indicators (the header badge and the destination banner) are derived
//! from one pure projection of [`SelectionState`], so they cannot disagree.
//! [`ViewSync`] broadcasts the latest projection over `tokio::sync::watch`
//! channels: subscribers only ever see the most recent value.

use serde::Serialize;
use tokio::sync::watch;

use crate::{
    models::{flag_url_for, FilterCounts},
    reference::ReferenceCache,
    selection::SelectionState,
};

/// Compact header indicator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionBadge {
    pub country_code: String,
    pub country_display_name: String,
    pub country_flag_url: String,
    pub year: String,
    /// `• City` when a city is selected, otherwise empty
    pub city_suffix: String,
}

/// Banner shown above the dashboard views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationBanner {
    pub country_display_name: String,
    pub country_flag_url: String,
    /// `• City`, `• Capital: X` or empty
    pub city_line: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionView {
    pub badge: SelectionBadge,
    pub banner: DestinationBanner,
}

/// Project the selection onto its indicators.
///
/// Returns `None` when no country is selected, which hides both indicators.
/// Countries missing from the cache show their code and a code-derived flag.
pub fn project(selection: &SelectionState, cache: &ReferenceCache) -> Option<SelectionView> {
    let code = selection.country_code()?;
    let entry = cache.find(code);

    let display_name = entry.map_or_else(|| code.to_string(), |c| c.display_name.clone());
    let flag_url = entry.map_or_else(|| flag_url_for(code), |c| c.flag_url.clone());

    let city_suffix = selection
        .city_name()
        .map(|city| format!("• {city}"))
        .unwrap_or_default();

    let city_line = match (selection.city_name(), entry.and_then(|c| c.capital.as_deref())) {
        (Some(city), _) => format!("• {city}"),
        (None, Some(capital)) => format!("• Capital: {capital}"),
        (None, None) => String::new(),
    };

    Some(SelectionView {
        badge: SelectionBadge {
            country_code: code.to_string(),
            country_display_name: display_name.clone(),
            country_flag_url: flag_url.clone(),
            year: selection.year().to_string(),
            city_suffix,
        },
        banner: DestinationBanner {
            country_display_name: display_name,
            country_flag_url: flag_url,
            city_line,
        },
    })
}

/// Latest-value broadcaster for the selection indicators and the plan
/// filter counts.
#[derive(Debug)]
pub struct ViewSync {
    selection: watch::Sender<Option<SelectionView>>,
    counts: watch::Sender<FilterCounts>,
}

impl ViewSync {
    pub fn new() -> Self {
        let (selection, _) = watch::channel(None);
        let (counts, _) = watch::channel(FilterCounts::default());
        Self { selection, counts }
    }

    /// Re-project the selection and notify subscribers if it changed.
    pub fn publish(&self, selection: &SelectionState, cache: &ReferenceCache) {
        let view = project(selection, cache);
        self.selection.send_if_modified(|current| {
            if *current == view {
                false
            } else {
                *current = view;
                true
            }
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<SelectionView>> {
        self.selection.subscribe()
    }

    /// The most recently published projection.
    pub fn current(&self) -> Option<SelectionView> {
        self.selection.borrow().clone()
    }

    pub fn publish_counts(&self, counts: FilterCounts) {
        self.counts.send_if_modified(|current| {
            if *current == counts {
                false
            } else {
                *current = counts;
                true
            }
        });
    }

    pub fn subscribe_counts(&self) -> watch::Receiver<FilterCounts> {
        self.counts.subscribe()
    }

    pub fn current_counts(&self) -> FilterCounts {
        *self.counts.borrow()
    }
}

impl Default for ViewSync {
    fn default() -> Self {
        Self::new()
    }
}

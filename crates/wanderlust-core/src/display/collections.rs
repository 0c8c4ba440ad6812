//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{
    cascade::CityOption,
    models::{Event, FilterCounts, IndexedPlan, LongWeekend, PlanFilter, PublicHoliday},
    reference::ReferenceCache,
};

/// Snapshot of the plans view: one filter bucket plus every bucket count.
///
/// Items carry their index in the unfiltered collection, which is the index
/// removal expects.
///
/// ```rust
/// use wanderlust_core::{
///     display::PlanListing,
///     models::{FilterCounts, PlanFilter},
/// };
///
/// let listing = PlanListing {
///     filter: PlanFilter::Event,
///     items: vec![],
///     counts: FilterCounts::default(),
/// };
/// assert!(listing.to_string().contains("No event plans found."));
/// ```
#[derive(Debug, Clone)]
pub struct PlanListing {
    pub filter: PlanFilter,
    pub items: Vec<IndexedPlan>,
    pub counts: FilterCounts,
}

impl PlanListing {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndexedPlan> {
        self.items.iter()
    }
}

impl<'a> IntoIterator for &'a PlanListing {
    type Item = &'a IndexedPlan;
    type IntoIter = std::slice::Iter<'a, IndexedPlan>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for PlanListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.counts)?;
        writeln!(f)?;
        if self.items.is_empty() {
            return match self.filter {
                PlanFilter::All => writeln!(f, "No plans saved yet."),
                filter => writeln!(f, "No {filter} plans found."),
            };
        }
        for item in &self.items {
            write!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Country selector contents in display-name order.
pub struct Countries<'a>(pub &'a ReferenceCache);

impl fmt::Display for Countries<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No countries loaded.");
        }
        for country in self.0 {
            write!(f, "- **{}** {}", country.code, country.display_name)?;
            if let Some(capital) = &country.capital {
                write!(f, ", {capital}")?;
            }
            writeln!(f, " ({})", country.primary_timezone())?;
        }
        Ok(())
    }
}

/// City selector contents.
pub struct CityOptions<'a>(pub &'a [CityOption]);

impl fmt::Display for CityOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No cities available.");
        }
        for city in self.0 {
            writeln!(f, "- {city}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying a holiday list.
#[derive(Debug, Clone, PartialEq)]
pub struct Holidays(pub Vec<PublicHoliday>);

impl fmt::Display for Holidays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for holiday in &self.0 {
            write!(f, "{holiday}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LongWeekends(pub Vec<LongWeekend>);

impl fmt::Display for LongWeekends {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for weekend in &self.0 {
            write!(f, "{weekend}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Events(pub Vec<Event>);

impl fmt::Display for Events {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in &self.0 {
            write!(f, "{event}")?;
        }
        Ok(())
    }
}

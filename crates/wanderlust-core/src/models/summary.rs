//! Derived read-side views over the saved plan collection.

use serde::Serialize;

use super::{Plan, PlanFilter};

/// Per-bucket plan counts, derived from a single pass over the collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterCounts {
    pub all: usize,
    pub holiday: usize,
    pub event: usize,
    pub long_weekend: usize,
}

impl FilterCounts {
    /// Count every bucket over the given plans.
    pub fn from_plans<'a>(plans: impl IntoIterator<Item = &'a Plan>) -> Self {
        plans.into_iter().fold(Self::default(), |mut counts, plan| {
            counts.all += 1;
            if PlanFilter::Holiday.matches(plan) {
                counts.holiday += 1;
            }
            if PlanFilter::Event.matches(plan) {
                counts.event += 1;
            }
            if PlanFilter::LongWeekend.matches(plan) {
                counts.long_weekend += 1;
            }
            counts
        })
    }

    /// Count for a single bucket.
    pub fn get(&self, filter: PlanFilter) -> usize {
        match filter {
            PlanFilter::All => self.all,
            PlanFilter::Holiday => self.holiday,
            PlanFilter::Event => self.event,
            PlanFilter::LongWeekend => self.long_weekend,
        }
    }
}

/// A plan paired with its position in the unfiltered collection.
///
/// Filtered listings hand these out so that removal always addresses the
/// backing collection, never a position inside the filtered subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexedPlan {
    /// Index into the backing collection
    pub index: usize,
    pub plan: Plan,
}

//! Filter buckets for the plans view.

use std::str::FromStr;

use super::{Plan, PlanType};

/// Filter buckets offered by the plans view.
///
/// Every bucket is a predicate over the saved collection; counts are always
/// recomputed from the collection instead of being tracked separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanFilter {
    /// Every saved plan
    #[default]
    All,

    /// Public holidays
    Holiday,

    /// Local events
    Event,

    /// Long weekends (including records saved under the legacy label)
    LongWeekend,
}

impl PlanFilter {
    /// All buckets in view order.
    pub const ALL: [PlanFilter; 4] = [
        PlanFilter::All,
        PlanFilter::Holiday,
        PlanFilter::Event,
        PlanFilter::LongWeekend,
    ];

    /// Returns true if the plan belongs in this bucket.
    pub fn matches(&self, plan: &Plan) -> bool {
        match self {
            PlanFilter::All => true,
            PlanFilter::Holiday => plan.plan_type == PlanType::Holiday,
            PlanFilter::Event => plan.plan_type == PlanType::Event,
            PlanFilter::LongWeekend => plan.plan_type == PlanType::Weekend,
        }
    }

    /// Identifier used by the view and the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanFilter::All => "all",
            PlanFilter::Holiday => "holiday",
            PlanFilter::Event => "event",
            PlanFilter::LongWeekend => "longweekend",
        }
    }
}

impl FromStr for PlanFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" | "" => Ok(PlanFilter::All),
            "holiday" | "holidays" => Ok(PlanFilter::Holiday),
            "event" | "events" => Ok(PlanFilter::Event),
            "longweekend" | "long-weekend" | "weekend" | "weekends" => Ok(PlanFilter::LongWeekend),
            _ => Err(format!("Invalid plan filter: {s}")),
        }
    }
}

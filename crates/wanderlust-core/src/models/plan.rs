//! Saved plan model and its de-duplication identity.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of a saved plan.
///
/// Serialized with the capitalized labels used by the persisted collection.
/// Records written by older releases used `Long Weekend` for weekends; that
/// label is accepted on read and normalized to [`PlanType::Weekend`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlanType {
    /// A public holiday
    Holiday,

    /// A local event (concert, festival, exhibition)
    Event,

    /// A long weekend
    #[serde(alias = "Long Weekend")]
    Weekend,
}

impl FromStr for PlanType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "holiday" => Ok(PlanType::Holiday),
            "event" => Ok(PlanType::Event),
            "weekend" | "long weekend" | "longweekend" | "long-weekend" => Ok(PlanType::Weekend),
            _ => Err(format!("Invalid plan type: {s}")),
        }
    }
}

impl PlanType {
    /// Persisted string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PlanType::Holiday => "Holiday",
            PlanType::Event => "Event",
            PlanType::Weekend => "Weekend",
        }
    }

    /// Human readable label used by the plans view.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use wanderlust_core::models::PlanType;
    ///
    /// assert_eq!(PlanType::Weekend.label(), "Long Weekend");
    /// assert_eq!(PlanType::Holiday.label(), "Holiday");
    /// ```
    pub fn label(&self) -> &'static str {
        match self {
            PlanType::Holiday => "Holiday",
            PlanType::Event => "Event",
            PlanType::Weekend => "Long Weekend",
        }
    }
}

/// A plan the user saved from one of the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plan {
    /// Kind of plan
    #[serde(rename = "type")]
    pub plan_type: PlanType,

    /// Display title
    pub name: String,

    /// Secondary description (venue, date range, official holiday name)
    #[serde(default)]
    pub details: String,

    /// ISO date, empty for undated plans
    #[serde(default)]
    pub date: String,
}

impl Plan {
    /// Create a plan from its parts.
    pub fn new(
        plan_type: PlanType,
        name: impl Into<String>,
        details: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            plan_type,
            name: name.into(),
            details: details.into(),
            date: date.into(),
        }
    }

    /// The `(type, name, date)` triple two plans are compared by.
    pub fn identity(&self) -> PlanIdentity<'_> {
        PlanIdentity {
            plan_type: self.plan_type,
            name: &self.name,
            date: &self.date,
        }
    }
}

/// De-duplication key of a [`Plan`]. Details are not part of the identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanIdentity<'a> {
    pub plan_type: PlanType,
    pub name: &'a str,
    pub date: &'a str,
}

//! Parameter structures for dashboard operations.
//!
//! These structures carry no interface-specific derives. Front-ends wrap them
//! in their own argument types (clap `Args` in the CLI) and convert with
//! `.into()`.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WanderlustError},
    models::{Plan, PlanFilter, PlanType},
};

/// Parameters for saving a plan by hand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavePlan {
    pub plan_type: PlanType,
    /// Display title, must not be blank
    pub name: String,
    #[serde(default)]
    pub details: Option<String>,
    /// ISO date (`YYYY-MM-DD`); omitted for undated plans
    #[serde(default)]
    pub date: Option<String>,
}

impl TryFrom<&SavePlan> for Plan {
    type Error = WanderlustError;

    fn try_from(params: &SavePlan) -> Result<Self> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(WanderlustError::invalid_input("name").with_reason("Plan name is empty"));
        }

        let date = match params.date.as_deref().map(str::trim) {
            Some(date) if !date.is_empty() => {
                date.parse::<Date>().map_err(|e| {
                    WanderlustError::invalid_input("date")
                        .with_reason(format!("'{date}' is not an ISO date: {e}"))
                })?;
                date.to_string()
            }
            _ => String::new(),
        };

        Ok(Plan::new(
            params.plan_type,
            name,
            params.details.as_deref().map(str::trim).unwrap_or_default(),
            date,
        ))
    }
}

/// Parameters for removing a plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemovePlan {
    /// Index into the unfiltered collection
    pub index: usize,
    /// Removal is refused unless confirmed
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for clearing every saved plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClearPlans {
    #[serde(default)]
    pub confirmed: bool,
}

/// Parameters for listing saved plans.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListPlans {
    #[serde(default, with = "filter_name")]
    pub filter: PlanFilter,
}

mod filter_name {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::models::PlanFilter;

    pub fn serialize<S: Serializer>(filter: &PlanFilter, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(filter.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PlanFilter, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

//! Persistent collection of saved plans.
//!
//! The collection is kept in memory in insertion order and written back as a
//! whole JSON array after every mutation. A failed write rolls the in-memory
//! collection back so the two never diverge.

use std::collections::HashSet;

use serde_json::Value;

use crate::{
    db::Database,
    error::{Result, WanderlustError},
    models::{FilterCounts, IndexedPlan, Plan, PlanFilter, PlanIdentity},
};

/// Storage key of the saved plan collection.
pub const PLANS_SLOT: &str = "wanderlust_plans";

/// Ordered, duplicate-free list of saved plans.
pub struct PlanStore {
    items: Vec<Plan>,
    db: Database,
}

impl PlanStore {
    /// Load the collection from `db`.
    ///
    /// A missing slot yields an empty store. Corrupt data never fails the
    /// load: an unreadable array is treated as empty, invalid entries are
    /// skipped and repeated identities keep their first occurrence.
    pub fn open(db: Database) -> Result<Self> {
        let items = match db.read_slot(PLANS_SLOT)? {
            Some(raw) => decode_plans(&raw),
            None => Vec::new(),
        };
        log::debug!("Loaded {} saved plans", items.len());
        Ok(Self { items, db })
    }

    /// Append a plan.
    ///
    /// # Errors
    ///
    /// * `WanderlustError::DuplicatePlan` - A plan with the same type, name and
    ///   date is already saved; the collection is unchanged
    /// * `WanderlustError::Database` - The write failed; the collection is
    ///   rolled back
    pub fn save(&mut self, plan: Plan) -> Result<&Plan> {
        if self.contains(&plan.identity()) {
            return Err(WanderlustError::DuplicatePlan {
                plan_type: plan.plan_type,
                name: plan.name,
                date: plan.date,
            });
        }

        self.items.push(plan);
        if let Err(e) = self.persist() {
            self.items.pop();
            return Err(e);
        }

        let index = self.items.len() - 1;
        Ok(&self.items[index])
    }

    /// Remove the plan at `index` of the unfiltered collection.
    ///
    /// # Errors
    ///
    /// Returns `WanderlustError::IndexOutOfRange` for an index past the end.
    pub fn remove(&mut self, index: usize) -> Result<Plan> {
        if index >= self.items.len() {
            return Err(WanderlustError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        let removed = self.items.remove(index);
        if let Err(e) = self.persist() {
            self.items.insert(index, removed);
            return Err(e);
        }
        Ok(removed)
    }

    /// Remove every plan. Returns how many were removed.
    pub fn clear(&mut self) -> Result<usize> {
        let previous = std::mem::take(&mut self.items);
        if let Err(e) = self.persist() {
            self.items = previous;
            return Err(e);
        }
        Ok(previous.len())
    }

    pub fn contains(&self, identity: &PlanIdentity<'_>) -> bool {
        self.items.iter().any(|plan| plan.identity() == *identity)
    }

    /// Plans in a filter bucket, paired with their index in the collection.
    pub fn filter(&self, filter: PlanFilter) -> Vec<IndexedPlan> {
        self.filter_by(|plan| filter.matches(plan))
    }

    /// Plans matching an arbitrary predicate, with their backing indices.
    pub fn filter_by<F>(&self, predicate: F) -> Vec<IndexedPlan>
    where
        F: Fn(&Plan) -> bool,
    {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, plan)| predicate(plan))
            .map(|(index, plan)| IndexedPlan {
                index,
                plan: plan.clone(),
            })
            .collect()
    }

    pub fn count_by<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Plan) -> bool,
    {
        self.items.iter().filter(|plan| predicate(plan)).count()
    }

    pub fn count(&self, filter: PlanFilter) -> usize {
        self.count_by(|plan| filter.matches(plan))
    }

    /// Counts of every filter bucket.
    pub fn counts(&self) -> FilterCounts {
        FilterCounts::from_plans(&self.items)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[Plan] {
        &self.items
    }

    fn persist(&mut self) -> Result<()> {
        let encoded = serde_json::to_string(&self.items)?;
        self.db.write_slot(PLANS_SLOT, &encoded)
    }
}

fn decode_plans(raw: &str) -> Vec<Plan> {
    let entries = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Saved plans are unreadable, starting empty: {e}");
            return Vec::new();
        }
    };

    let mut plans: Vec<Plan> = Vec::with_capacity(entries.len());
    let mut skipped = 0usize;
    for entry in entries {
        match serde_json::from_value::<Plan>(entry) {
            Ok(plan) => plans.push(plan),
            Err(e) => {
                skipped += 1;
                log::debug!("Skipping invalid saved plan: {e}");
            }
        }
    }

    let mut seen = HashSet::new();
    let before = plans.len();
    plans.retain(|plan| seen.insert((plan.plan_type, plan.name.clone(), plan.date.clone())));
    let duplicates = before - plans.len();

    if skipped > 0 || duplicates > 0 {
        log::warn!("Dropped {skipped} invalid and {duplicates} duplicate saved plans");
    }
    plans
}

//! Display formatting for engine projections.
//!
//! Domain types implement `Display` directly (see [`models`]); collections
//! and projections that need extra context are wrapped in newtypes. All
//! output is markdown so front-ends can render it richly or print it as is.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrappers (PlanListing, Countries, Holidays, ...)
//! - [`status`]: Status and confirmation messages (OperationStatus)
//! - [`dates`]: Date and local time formatting
//! - [`models`]: Display implementations for domain models
//!
//! ```rust
//! use wanderlust_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Saved Holiday 'Carnaval'".to_string());
//! assert!(status.to_string().starts_with("Success:"));
//! ```

pub mod collections;
pub mod dates;
pub mod models;
pub mod status;

pub use collections::{CityOptions, Countries, Events, Holidays, LongWeekends, PlanListing};
pub use dates::{LocalTime, PlanDate};
pub use status::{OperationStatus, StatusKind};

//! Core data model for Blueprint.
//!
//! These types represent what flows through the generator:
//! the form inputs going in, and the plans coming out.

mod form;
mod plan;

pub use form::{FormState, GOALS, PLATFORMS, VIBES, in_catalog};
pub use plan::{AutomationStep, Plan, PostingSlot, ScriptVariation};

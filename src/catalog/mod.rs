//! Step catalog — the static tour definitions and their per-demo-type copy.
//!
//! Steps are defined once, in order; position is identity. Copy lives in a
//! `(step id, demo type)` lookup table built at startup, so switching the
//! demo type swaps content strings without touching step count or order.

pub mod content;
pub mod dashboard;
pub mod model;
pub mod sections;

pub use content::ContentTable;
pub use dashboard::DASHBOARD_STEPS;
pub use model::{DemoType, Placement, StepCatalog, StepDescriptor, TourStep};
pub use sections::SectionId;

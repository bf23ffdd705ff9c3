//! Guided tour system — state machine, coordinator, and host surface.
//!
//! The tour walks the dashboard step catalog in order. An external
//! rendering collaborator displays each step and reports back exactly one
//! tagged event per user action; the coordinator owns all state and is the
//! only writer. The persisted completion flag decides whether the tour
//! auto-runs on the next visit.

pub mod coordinator;
pub mod routes;
pub mod state;

pub use coordinator::{TourCoordinator, TourStatus, TourUpdate};
pub use routes::tour_routes;
pub use state::{EndReason, TourEvent, TourState};

//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and shape store rows into the
//! results controllers answer with: registration lookup and listing,
//! attendance confirmation, and the event listing.

pub mod attendance;
pub mod event;
pub mod registration;

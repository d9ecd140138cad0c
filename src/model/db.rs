//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the
//! application, so signatures don't import from the generated `entity` crate
//! directly.

/// Type alias for the event database model.
///
/// A seminar/session attendees register for. Events are created by an
/// external registration process; this server only reads them.
pub type EventModel = entity::event::Model;

/// Type alias for the registration database model.
///
/// One attendee's record for one event, carrying the badge code, the
/// digits-only national ID number, and the monotonic `confirmed` flag this
/// server flips on check-in.
pub type RegistrationModel = entity::registration::Model;

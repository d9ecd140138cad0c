//! Data access layer repositories.
//!
//! This module contains the database repository implementations for the
//! application, organizing data access by domain (events and registrations).
//! Repositories provide an abstraction layer over SeaORM operations.

pub mod event;
pub mod registration;

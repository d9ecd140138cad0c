pub use super::event::Entity as Event;
pub use super::registration::Entity as Registration;

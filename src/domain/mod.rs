//! Domain entities and value objects for the conference schedule.

pub mod conference;
pub mod speaker;
pub mod talk;
pub mod types;

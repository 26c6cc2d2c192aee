//! Helpers for HTTP integration tests.

use techsummit::repository::InMemoryRepository;
use techsummit::repository::seed;
use tera::Tera;

/// Repository seeded with the embedded schedule, as the binary uses.
pub fn repo() -> InMemoryRepository {
    seed::summit_2026().expect("Seed data failed validation")
}

/// Template engine loaded from the crate's templates directory.
pub fn tera() -> Tera {
    Tera::new("templates/**/*.html").expect("Failed to load templates")
}

use serde::{Deserialize, Serialize};

use crate::domain::types::NonEmptyString;

/// Metadata describing the conference itself, rendered on the index page.
///
/// The `date` and `location` fields are display strings; nothing in the
/// application interprets them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Conference {
    pub name: NonEmptyString,
    pub date: NonEmptyString,
    pub location: NonEmptyString,
    pub description: NonEmptyString,
}

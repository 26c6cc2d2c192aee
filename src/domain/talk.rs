use serde::{Deserialize, Serialize};

use crate::domain::speaker::Speaker;
use crate::domain::types::{CategoryId, SpeakerId, TalkId, TalkTitle};

/// A scheduled entry on the conference agenda.
///
/// Entries without a category are non-session slots (breaks, meals). They
/// appear on the schedule but are never returned by the search filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Talk {
    pub id: TalkId,
    pub title: TalkTitle,
    /// Ordered references into the speaker table; empty for non-session slots.
    pub speaker_ids: Vec<SpeakerId>,
    pub category: Option<CategoryId>,
    pub description: String,
    /// Opaque display range such as `"09:00 AM - 10:00 AM"`; never parsed.
    pub time: String,
}

impl Talk {
    /// Whether this entry is a real session as opposed to a break or meal.
    pub fn is_session(&self) -> bool {
        self.category.is_some()
    }
}

/// A [`Talk`] with its speaker references resolved into full records.
///
/// Serialized without `speaker_ids`: the `speakers` sequence replaces it,
/// preserving order and length. Ids that do not resolve appear as `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TalkWithSpeakers {
    pub id: TalkId,
    pub title: TalkTitle,
    pub category: Option<CategoryId>,
    pub description: String,
    pub time: String,
    pub speakers: Vec<Option<Speaker>>,
}

impl TalkWithSpeakers {
    /// Combine a talk with its resolved speakers.
    ///
    /// The caller is responsible for supplying one entry per `speaker_ids`
    /// reference, in the same order.
    pub fn new(talk: Talk, speakers: Vec<Option<Speaker>>) -> Self {
        Self {
            id: talk.id,
            title: talk.title,
            category: talk.category,
            description: talk.description,
            time: talk.time,
            speakers,
        }
    }
}

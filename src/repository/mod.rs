use std::sync::Arc;

use crate::domain::conference::Conference;
use crate::domain::speaker::Speaker;
use crate::domain::talk::Talk;
use crate::domain::types::SpeakerId;
use crate::repository::errors::RepositoryResult;

pub mod conference;
pub mod errors;
pub mod seed;
pub mod speaker;
pub mod talk;

/// Repository backed by immutable in-memory tables.
///
/// The tables are populated once at process start and never mutated, so the
/// repository is a cheap-to-clone handle that can be passed around freely
/// between handlers.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    inner: Arc<Tables>,
}

#[derive(Debug)]
struct Tables {
    conference: Conference,
    speakers: Vec<Speaker>,
    talks: Vec<Talk>,
}

impl InMemoryRepository {
    /// Create a repository from fully validated tables.
    pub fn new(conference: Conference, speakers: Vec<Speaker>, talks: Vec<Talk>) -> Self {
        Self {
            inner: Arc::new(Tables {
                conference,
                speakers,
                talks,
            }),
        }
    }

    fn conference(&self) -> &Conference {
        &self.inner.conference
    }

    fn speakers(&self) -> &[Speaker] {
        &self.inner.speakers
    }

    fn talks(&self) -> &[Talk] {
        &self.inner.talks
    }
}

/// Read-only access to the conference metadata.
pub trait ConferenceReader {
    /// Retrieve the conference record.
    fn get_conference(&self) -> RepositoryResult<Conference>;
}

/// Read-only operations for speaker entities.
pub trait SpeakerReader {
    /// List all speakers in table order.
    fn list_speakers(&self) -> RepositoryResult<Vec<Speaker>>;
    /// Retrieve a speaker by its identifier.
    fn get_speaker_by_id(&self, id: SpeakerId) -> RepositoryResult<Option<Speaker>>;
}

/// Read-only operations for talk entities.
pub trait TalkReader {
    /// List all talks in table order.
    fn list_talks(&self) -> RepositoryResult<Vec<Talk>>;
}

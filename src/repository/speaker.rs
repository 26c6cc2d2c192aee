use crate::domain::speaker::Speaker;
use crate::domain::types::SpeakerId;
use crate::repository::errors::RepositoryResult;
use crate::repository::{InMemoryRepository, SpeakerReader};

impl SpeakerReader for InMemoryRepository {
    fn list_speakers(&self) -> RepositoryResult<Vec<Speaker>> {
        Ok(self.speakers().to_vec())
    }

    fn get_speaker_by_id(&self, id: SpeakerId) -> RepositoryResult<Option<Speaker>> {
        // Linear scan; the table holds a few dozen records at most.
        Ok(self.speakers().iter().find(|s| s.id == id).cloned())
    }
}

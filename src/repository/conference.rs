use crate::domain::conference::Conference;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ConferenceReader, InMemoryRepository};

impl ConferenceReader for InMemoryRepository {
    fn get_conference(&self) -> RepositoryResult<Conference> {
        Ok(self.conference().clone())
    }
}

use crate::domain::talk::Talk;
use crate::repository::errors::RepositoryResult;
use crate::repository::{InMemoryRepository, TalkReader};

impl TalkReader for InMemoryRepository {
    fn list_talks(&self) -> RepositoryResult<Vec<Talk>> {
        Ok(self.talks().to_vec())
    }
}

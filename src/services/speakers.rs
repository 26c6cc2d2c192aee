use crate::domain::speaker::Speaker;
use crate::repository::SpeakerReader;

use super::{ServiceError, ServiceResult};

/// Core business logic for the `/api/speakers` endpoint.
///
/// Returns the speaker table in order, unmodified.
pub fn list_speakers<R>(repo: &R) -> ServiceResult<Vec<Speaker>>
where
    R: SpeakerReader,
{
    match repo.list_speakers() {
        Ok(speakers) => Ok(speakers),
        Err(e) => {
            log::error!("Failed to list speakers: {e}");
            Err(ServiceError::Internal)
        }
    }
}

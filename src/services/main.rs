use crate::domain::conference::Conference;
use crate::domain::talk::TalkWithSpeakers;
use crate::repository::{ConferenceReader, SpeakerReader, TalkReader};

use super::talks::list_talks;
use super::{ServiceError, ServiceResult};

/// Core business logic for rendering the index page.
///
/// Returns the conference metadata together with the full schedule, speakers
/// resolved, in table order. Non-session entries are kept: the schedule shows
/// breaks even though search never returns them.
pub fn show_index<R>(repo: &R) -> ServiceResult<(Conference, Vec<TalkWithSpeakers>)>
where
    R: ConferenceReader + TalkReader + SpeakerReader,
{
    let conference = match repo.get_conference() {
        Ok(conference) => conference,
        Err(e) => {
            log::error!("Failed to load conference metadata: {e}");
            return Err(ServiceError::Internal);
        }
    };

    let talks = list_talks(repo)?;

    Ok((conference, talks))
}

use crate::domain::talk::{Talk, TalkWithSpeakers};
use crate::repository::{SpeakerReader, TalkReader};

use super::{ServiceError, ServiceResult};

/// Resolve a talk's speaker references into full records.
///
/// The resulting `speakers` sequence has the same order and length as the
/// talk's `speaker_ids`. A reference that does not resolve produces `None`
/// rather than an error; the rendering layer decides how to present it.
pub fn talk_with_speakers<R>(talk: Talk, repo: &R) -> ServiceResult<TalkWithSpeakers>
where
    R: SpeakerReader,
{
    let mut speakers = Vec::with_capacity(talk.speaker_ids.len());
    for speaker_id in &talk.speaker_ids {
        match repo.get_speaker_by_id(*speaker_id) {
            Ok(speaker) => speakers.push(speaker),
            Err(e) => {
                log::error!("Failed to resolve speaker {speaker_id}: {e}");
                return Err(ServiceError::Internal);
            }
        }
    }
    Ok(TalkWithSpeakers::new(talk, speakers))
}

/// Core business logic for the `/api/talks` endpoint.
///
/// Returns every talk in table order with its speakers resolved.
pub fn list_talks<R>(repo: &R) -> ServiceResult<Vec<TalkWithSpeakers>>
where
    R: TalkReader + SpeakerReader,
{
    let talks = match repo.list_talks() {
        Ok(talks) => talks,
        Err(e) => {
            log::error!("Failed to list talks: {e}");
            return Err(ServiceError::Internal);
        }
    };

    talks
        .into_iter()
        .map(|talk| talk_with_speakers(talk, repo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conference::Conference;
    use crate::domain::speaker::Speaker;
    use crate::domain::types::{
        LinkedinUrl, NonEmptyString, PersonName, SpeakerId, TalkId, TalkTitle,
    };
    use crate::repository::InMemoryRepository;

    fn sample_conference() -> Conference {
        Conference {
            name: NonEmptyString::new("Test Summit").unwrap(),
            date: NonEmptyString::new("March 15, 2026").unwrap(),
            location: NonEmptyString::new("Somewhere").unwrap(),
            description: NonEmptyString::new("A test conference").unwrap(),
        }
    }

    fn sample_speaker(id: i32, first: &str, last: &str) -> Speaker {
        Speaker {
            id: SpeakerId::new(id).unwrap(),
            first_name: PersonName::new(first).unwrap(),
            last_name: PersonName::new(last).unwrap(),
            linkedin: LinkedinUrl::new("https://www.linkedin.com/in/test").unwrap(),
        }
    }

    fn sample_talk(id: i32, speaker_ids: &[i32]) -> Talk {
        Talk {
            id: TalkId::new(id).unwrap(),
            title: TalkTitle::new("Sample Talk").unwrap(),
            speaker_ids: speaker_ids
                .iter()
                .map(|&sid| SpeakerId::new(sid).unwrap())
                .collect(),
            category: None,
            description: "A sample".into(),
            time: "09:00 AM - 10:00 AM".into(),
        }
    }

    #[test]
    fn resolves_speakers_in_reference_order() {
        let repo = InMemoryRepository::new(
            sample_conference(),
            vec![sample_speaker(1, "Sarah", "Chen"), sample_speaker(2, "David", "Kim")],
            vec![],
        );

        let formatted = talk_with_speakers(sample_talk(1, &[2, 1]), &repo).unwrap();

        assert_eq!(formatted.speakers.len(), 2);
        assert_eq!(formatted.speakers[0].as_ref().unwrap().id, 2);
        assert_eq!(formatted.speakers[1].as_ref().unwrap().id, 1);
    }

    #[test]
    fn unresolvable_reference_becomes_none() {
        let repo = InMemoryRepository::new(
            sample_conference(),
            vec![sample_speaker(1, "Sarah", "Chen")],
            vec![],
        );

        let formatted = talk_with_speakers(sample_talk(1, &[1, 99]), &repo).unwrap();

        assert_eq!(formatted.speakers.len(), 2);
        assert!(formatted.speakers[0].is_some());
        assert!(formatted.speakers[1].is_none());
    }

    #[test]
    fn lists_talks_in_table_order() {
        let repo = InMemoryRepository::new(
            sample_conference(),
            vec![sample_speaker(1, "Sarah", "Chen")],
            vec![sample_talk(3, &[1]), sample_talk(1, &[]), sample_talk(2, &[1])],
        );

        let talks = list_talks(&repo).unwrap();

        let ids: Vec<i32> = talks.iter().map(|t| t.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

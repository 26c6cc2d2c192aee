//! Embedded schedule data.
//!
//! The conference, speaker and talk tables are configuration baked into the
//! binary. They are validated through the domain constructors once at startup
//! and never touched again.

use crate::domain::conference::Conference;
use crate::domain::speaker::Speaker;
use crate::domain::talk::Talk;
use crate::domain::types::{
    CategoryId, LinkedinUrl, NonEmptyString, PersonName, SpeakerId, TalkId, TalkTitle,
};
use crate::repository::InMemoryRepository;
use crate::repository::errors::RepositoryResult;

fn speaker(id: i32, first: &str, last: &str, linkedin: &str) -> RepositoryResult<Speaker> {
    Ok(Speaker {
        id: SpeakerId::new(id)?,
        first_name: PersonName::new(first)?,
        last_name: PersonName::new(last)?,
        linkedin: LinkedinUrl::new(linkedin)?,
    })
}

fn talk(
    id: i32,
    title: &str,
    speaker_ids: &[i32],
    category: Option<i32>,
    description: &str,
    time: &str,
) -> RepositoryResult<Talk> {
    Ok(Talk {
        id: TalkId::new(id)?,
        title: TalkTitle::new(title)?,
        speaker_ids: speaker_ids
            .iter()
            .map(|&sid| SpeakerId::new(sid))
            .collect::<Result<Vec<_>, _>>()?,
        category: category.map(CategoryId::new).transpose()?,
        description: description.to_string(),
        time: time.to_string(),
    })
}

fn conference() -> RepositoryResult<Conference> {
    Ok(Conference {
        name: NonEmptyString::new("Google Cloud Tech Summit 2026")?,
        date: NonEmptyString::new("March 15, 2026")?,
        location: NonEmptyString::new("San Francisco Convention Center, CA")?,
        description: NonEmptyString::new(
            "A one-day technical conference exploring the latest in Google Cloud Technologies",
        )?,
    })
}

fn speakers() -> RepositoryResult<Vec<Speaker>> {
    Ok(vec![
        speaker(1, "Sarah", "Chen", "https://www.linkedin.com/in/sarahchen")?,
        speaker(
            2,
            "Michael",
            "Rodriguez",
            "https://www.linkedin.com/in/michaelrodriguez",
        )?,
        speaker(
            3,
            "Emily",
            "Johnson",
            "https://www.linkedin.com/in/emilyjohnson",
        )?,
        speaker(4, "David", "Kim", "https://www.linkedin.com/in/davidkim")?,
        speaker(
            5,
            "Jessica",
            "Martinez",
            "https://www.linkedin.com/in/jessicamartinez",
        )?,
        speaker(
            6,
            "Robert",
            "Thompson",
            "https://www.linkedin.com/in/robertthompson",
        )?,
        speaker(7, "Amanda", "Lee", "https://www.linkedin.com/in/amandalee")?,
        speaker(
            8,
            "James",
            "Wilson",
            "https://www.linkedin.com/in/jameswilson",
        )?,
        speaker(
            9,
            "Lisa",
            "Anderson",
            "https://www.linkedin.com/in/lisaanderson",
        )?,
        speaker(
            10,
            "Daniel",
            "Brown",
            "https://www.linkedin.com/in/danielbrown",
        )?,
        speaker(
            11,
            "Rachel",
            "Foster",
            "https://www.linkedin.com/in/rachelfoster",
        )?,
        speaker(12, "Kevin", "Zhang", "https://www.linkedin.com/in/kevinzhang")?,
    ])
}

fn talks() -> RepositoryResult<Vec<Talk>> {
    Ok(vec![
        talk(
            1,
            "Keynote: The Future of Cloud Computing",
            &[1],
            Some(1),
            "Explore the cutting-edge innovations in cloud computing and how Google Cloud \
             is shaping the future of technology infrastructure.",
            "09:00 AM - 10:00 AM",
        )?,
        talk(
            2,
            "Building Scalable Applications with Google Kubernetes Engine",
            &[2, 3],
            Some(1),
            "Learn best practices for deploying and managing containerized applications \
             at scale using GKE.",
            "10:15 AM - 11:15 AM",
        )?,
        talk(
            3,
            "Machine Learning on Google Cloud Platform",
            &[4],
            Some(2),
            "Discover how to leverage Google Cloud's ML tools including Vertex AI, AutoML, \
             and TensorFlow for your AI projects.",
            "11:30 AM - 12:30 PM",
        )?,
        talk(
            4,
            "Lunch Break",
            &[],
            None,
            "Networking lunch with fellow attendees",
            "12:30 PM - 01:30 PM",
        )?,
        talk(
            5,
            "Serverless Architecture with Cloud Functions and Cloud Run",
            &[5, 6],
            Some(1),
            "Deep dive into building event-driven, serverless applications that scale \
             automatically.",
            "01:30 PM - 02:30 PM",
        )?,
        talk(
            6,
            "Data Analytics with BigQuery and Looker",
            &[7],
            Some(2),
            "Transform your data into actionable insights using Google Cloud's powerful \
             analytics platform.",
            "02:45 PM - 03:45 PM",
        )?,
        talk(
            7,
            "Security Best Practices for Google Cloud",
            &[8, 9],
            Some(1),
            "Learn how to implement robust security measures and compliance frameworks in \
             your cloud infrastructure.",
            "04:00 PM - 05:00 PM",
        )?,
        talk(
            8,
            "Cloud Migration Strategies and Success Stories",
            &[10],
            Some(2),
            "Real-world case studies and proven strategies for successful cloud migration \
             projects.",
            "05:15 PM - 06:15 PM",
        )?,
    ])
}

/// Build the repository holding the Google Cloud Tech Summit 2026 schedule.
pub fn summit_2026() -> RepositoryResult<InMemoryRepository> {
    Ok(InMemoryRepository::new(conference()?, speakers()?, talks()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{SpeakerReader, TalkReader};

    #[test]
    fn seed_tables_validate() {
        let repo = summit_2026().unwrap();
        assert_eq!(repo.list_speakers().unwrap().len(), 12);
        assert_eq!(repo.list_talks().unwrap().len(), 8);
    }

    #[test]
    fn every_speaker_reference_resolves() {
        let repo = summit_2026().unwrap();
        for talk in repo.list_talks().unwrap() {
            for sid in &talk.speaker_ids {
                let speaker = repo.get_speaker_by_id(*sid).unwrap();
                assert_eq!(speaker.unwrap().id, *sid);
            }
        }
    }

    #[test]
    fn lunch_break_is_the_only_non_session_entry() {
        let repo = summit_2026().unwrap();
        let non_sessions: Vec<_> = repo
            .list_talks()
            .unwrap()
            .into_iter()
            .filter(|t| !t.is_session())
            .collect();
        assert_eq!(non_sessions.len(), 1);
        assert_eq!(non_sessions[0].id, 4);
        assert!(non_sessions[0].speaker_ids.is_empty());
    }
}

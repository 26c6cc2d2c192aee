use serde::{Deserialize, Serialize};

use crate::domain::types::{LinkedinUrl, PersonName, SpeakerId};

/// A person presenting one or more talks at the conference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Speaker {
    pub id: SpeakerId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub linkedin: LinkedinUrl,
}

impl Speaker {
    /// Display name in `"first last"` form, as used by the search filter.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{LinkedinUrl, PersonName, SpeakerId};

    #[test]
    fn full_name_joins_with_single_space() {
        let speaker = Speaker {
            id: SpeakerId::new(1).unwrap(),
            first_name: PersonName::new("Sarah").unwrap(),
            last_name: PersonName::new("Chen").unwrap(),
            linkedin: LinkedinUrl::new("https://www.linkedin.com/in/sarahchen").unwrap(),
        };
        assert_eq!(speaker.full_name(), "Sarah Chen");
    }
}

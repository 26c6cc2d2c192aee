use crate::domain::talk::TalkWithSpeakers;
use crate::repository::{SpeakerReader, TalkReader};

use super::talks::talk_with_speakers;
use super::{ServiceError, ServiceResult};

/// Decision table for the `/api/search` endpoint.
///
/// The four cases make the asymmetric inclusion rule explicit: a request with
/// no filters returns every session talk, while a request carrying any filter
/// returns only matching talks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkFilter {
    /// No filters supplied; every session talk is included.
    All,
    /// Free-text filter, lowercased and guaranteed non-empty.
    Query(String),
    /// Category filter. Held as a raw integer: codes are not validated
    /// against the schedule, an unknown code simply matches nothing.
    Category(i32),
    /// Both filters supplied; a talk matching either is included.
    QueryAndCategory(String, i32),
}

impl TalkFilter {
    /// Build a filter from the raw `q` and `category` request parameters.
    ///
    /// Absent or empty parameters mean "no filter". A `category` value that
    /// does not parse as an integer is rejected so the route can answer with
    /// a client error instead of guessing.
    pub fn parse(q: Option<&str>, category: Option<&str>) -> ServiceResult<Self> {
        let query = q.unwrap_or_default().to_lowercase();
        let category = match category {
            Some(raw) if !raw.is_empty() => Some(raw.trim().parse::<i32>().map_err(|_| {
                ServiceError::InvalidParameter(format!(
                    "category must be an integer, got '{raw}'"
                ))
            })?),
            _ => None,
        };

        Ok(match (query.is_empty(), category) {
            (true, None) => Self::All,
            (false, None) => Self::Query(query),
            (true, Some(code)) => Self::Category(code),
            (false, Some(code)) => Self::QueryAndCategory(query, code),
        })
    }

    fn matches(&self, talk: &TalkWithSpeakers) -> bool {
        match self {
            Self::All => true,
            Self::Query(query) => query_matches(query, talk),
            Self::Category(code) => category_matches(*code, talk),
            Self::QueryAndCategory(query, code) => {
                category_matches(*code, talk) || query_matches(query, talk)
            }
        }
    }
}

fn category_matches(code: i32, talk: &TalkWithSpeakers) -> bool {
    talk.category.is_some_and(|category| category == code)
}

/// Case-insensitive substring match against the title or any resolved
/// speaker's `"first last"` name. The first matching speaker short-circuits
/// the remaining checks for the talk.
fn query_matches(query: &str, talk: &TalkWithSpeakers) -> bool {
    if talk.title.to_lowercase().contains(query) {
        return true;
    }
    talk.speakers
        .iter()
        .flatten()
        .any(|speaker| speaker.full_name().to_lowercase().contains(query))
}

/// Core business logic for the `/api/search` endpoint.
///
/// Non-session entries (breaks, meals) are excluded before filtering, so they
/// never appear in search results regardless of the filter. Output preserves
/// table order.
pub fn search_talks<R>(filter: &TalkFilter, repo: &R) -> ServiceResult<Vec<TalkWithSpeakers>>
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

    let mut results = Vec::new();
    for talk in talks {
        if !talk.is_session() {
            continue;
        }
        let formatted = talk_with_speakers(talk, repo)?;
        if filter.matches(&formatted) {
            results.push(formatted);
        }
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::seed;

    fn ids(talks: &[TalkWithSpeakers]) -> Vec<i32> {
        talks.iter().map(|t| t.id.get()).collect()
    }

    #[test]
    fn parses_the_four_filter_cases() {
        assert_eq!(TalkFilter::parse(None, None).unwrap(), TalkFilter::All);
        assert_eq!(TalkFilter::parse(Some(""), Some("")).unwrap(), TalkFilter::All);
        assert_eq!(
            TalkFilter::parse(Some("Cloud"), None).unwrap(),
            TalkFilter::Query("cloud".into())
        );
        assert_eq!(
            TalkFilter::parse(None, Some("2")).unwrap(),
            TalkFilter::Category(2)
        );
        assert_eq!(
            TalkFilter::parse(Some("ml"), Some("2")).unwrap(),
            TalkFilter::QueryAndCategory("ml".into(), 2)
        );
    }

    #[test]
    fn rejects_non_integer_category() {
        let err = TalkFilter::parse(None, Some("two")).unwrap_err();
        assert_eq!(
            err,
            ServiceError::InvalidParameter("category must be an integer, got 'two'".into())
        );
    }

    #[test]
    fn accepts_unknown_category_codes() {
        // Codes are not validated against the schedule; they just match nothing.
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(None, Some("-7")).unwrap();
        assert!(search_talks(&filter, &repo).unwrap().is_empty());
    }

    #[test]
    fn unfiltered_search_returns_every_session_talk() {
        let repo = seed::summit_2026().unwrap();
        let results = search_talks(&TalkFilter::All, &repo).unwrap();
        // Everything except the lunch break, in table order.
        assert_eq!(ids(&results), vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn matches_titles_case_insensitively() {
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(Some("CLOUD"), None).unwrap();
        let results = search_talks(&filter, &repo).unwrap();
        assert!(ids(&results).contains(&1));
        // "Lunch Break" has no category and is excluded even though an empty
        // query would match it.
        assert!(!ids(&results).contains(&4));
    }

    #[test]
    fn matches_speaker_full_names() {
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(Some("Sarah Chen"), None).unwrap();
        let results = search_talks(&filter, &repo).unwrap();
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn category_filter_uses_exact_equality() {
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(None, Some("1")).unwrap();
        let results = search_talks(&filter, &repo).unwrap();
        assert_eq!(ids(&results), vec![1, 2, 5, 7]);
    }

    #[test]
    fn combined_filters_include_a_match_on_either() {
        let repo = seed::summit_2026().unwrap();
        // "bigquery" only matches talk 6 (category 2); category 1 matches
        // talks 1, 2, 5 and 7. The union is returned in table order.
        let filter = TalkFilter::parse(Some("BigQuery"), Some("1")).unwrap();
        let results = search_talks(&filter, &repo).unwrap();
        assert_eq!(ids(&results), vec![1, 2, 5, 6, 7]);
    }

    #[test]
    fn non_matching_query_returns_empty() {
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(Some("quantum"), None).unwrap();
        assert!(search_talks(&filter, &repo).unwrap().is_empty());
    }

    #[test]
    fn repeated_searches_are_idempotent() {
        let repo = seed::summit_2026().unwrap();
        let filter = TalkFilter::parse(Some("cloud"), Some("2")).unwrap();
        let first = search_talks(&filter, &repo).unwrap();
        let second = search_talks(&filter, &repo).unwrap();
        assert_eq!(first, second);
    }
}

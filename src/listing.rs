//! List Fetch & Filter helpers
//!
//! Client-side filtering and local pagination over the fetched content
//! collection, plus the request ticket used to discard stale fetches.

use crate::models::Content;

/// Server fetch ceiling; there is no true pagination on the backend
pub const MAX_CARDS_TO_FETCH: usize = 200;
/// Local page size for the card grid
pub const CARDS_PER_PAGE: usize = 12;

/// Case-insensitive substring match on title OR body text
pub fn matches_search(card: &Content, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    card.content_title.to_lowercase().contains(&term)
        || card.content_text.to_lowercase().contains(&term)
}

/// Any-of tag filter; an empty selection matches everything
pub fn matches_tags(card: &Content, filter: &[i32]) -> bool {
    filter.is_empty() || filter.iter().any(|id| card.content_tags.contains(id))
}

pub fn filter_contents(cards: &[Content], term: &str, filter_tags: &[i32]) -> Vec<Content> {
    cards
        .iter()
        .filter(|c| matches_search(c, term) && matches_tags(c, filter_tags))
        .cloned()
        .collect()
}

/// Number of local pages for `n` filtered cards, never zero
pub fn page_count(n: usize) -> usize {
    n.div_ceil(CARDS_PER_PAGE).max(1)
}

/// Slice of `cards` shown on 1-based `page`
pub fn page_slice(cards: &[Content], page: usize) -> &[Content] {
    let start = CARDS_PER_PAGE * page.saturating_sub(1);
    let end = (start + CARDS_PER_PAGE).min(cards.len());
    if start >= cards.len() {
        &[]
    } else {
        &cards[start..end]
    }
}

/// Monotonic request tickets. Each fetch takes a ticket; a response is only
/// applied if its ticket is still the newest, so a slow earlier fetch can
/// never overwrite the results of a later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchGuard {
    latest: u64,
}

impl FetchGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new fetch, superseding all earlier ones
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Ticket of the newest fetch
    pub fn current(&self) -> u64 {
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i32, title: &str, text: &str, tags: &[i32]) -> Content {
        Content {
            content_id: Some(id),
            content_title: title.to_string(),
            content_text: text.to_string(),
            content_language: "ENGLISH".to_string(),
            content_metadata: serde_json::json!({}),
            content_tags: tags.to_vec(),
            positive_votes: 0,
            negative_votes: 0,
            created_datetime_utc: String::new(),
            updated_datetime_utc: String::new(),
        }
    }

    #[test]
    fn search_is_case_insensitive_over_title_or_text() {
        let cards = vec![
            card(1, "Malaria prevention", "Use bed nets", &[]),
            card(2, "Nutrition", "malaria risks rise in rainy season", &[]),
            card(3, "Vaccination", "Schedule for infants", &[]),
        ];
        let hits = filter_contents(&cards, "MALARIA", &[]);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].content_id, Some(1));
        assert_eq!(hits[1].content_id, Some(2));
    }

    #[test]
    fn empty_search_matches_everything() {
        let cards = vec![card(1, "a", "b", &[]), card(2, "c", "d", &[])];
        assert_eq!(filter_contents(&cards, "", &[]).len(), 2);
    }

    #[test]
    fn tag_filter_is_any_of() {
        let cards = vec![
            card(1, "a", "", &[1, 2]),
            card(2, "b", "", &[3]),
            card(3, "c", "", &[]),
        ];
        let hits = filter_contents(&cards, "", &[2, 3]);
        assert_eq!(hits.len(), 2);
        // no tags selected: tag filter is a no-op
        assert_eq!(filter_contents(&cards, "", &[]).len(), 3);
    }

    #[test]
    fn search_and_tags_combine() {
        let cards = vec![card(1, "water", "", &[1]), card(2, "water", "", &[2])];
        let hits = filter_contents(&cards, "water", &[2]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].content_id, Some(2));
    }

    #[test]
    fn page_math() {
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(12), 1);
        assert_eq!(page_count(13), 2);
        assert_eq!(page_count(200), 17);

        let cards: Vec<Content> = (0..30).map(|i| card(i, "t", "x", &[])).collect();
        assert_eq!(page_slice(&cards, 1).len(), 12);
        assert_eq!(page_slice(&cards, 3).len(), 6);
        assert_eq!(page_slice(&cards, 3)[0].content_id, Some(24));
        assert!(page_slice(&cards, 4).is_empty());
    }

    #[test]
    fn stale_tickets_are_discarded() {
        let mut guard = FetchGuard::new();
        let first = guard.issue();
        let second = guard.issue();
        assert!(!guard.is_current(first));
        assert!(guard.is_current(second));
    }
}

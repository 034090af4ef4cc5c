use std::collections::HashMap;

use entities::{artist, venue};
use serde::Serialize;

pub trait Named {
    fn id(&self) -> i32;
    fn name(&self) -> &str;
}

impl Named for venue::Model {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for artist::Model {
    fn id(&self) -> i32 {
        self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchResults<T> {
    pub count: usize,
    pub data: Vec<T>,
}

#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct SearchHit {
    pub id: i32,
    pub name: String,
    pub num_upcoming_shows: usize,
}

/// Case-insensitive substring match on the name. An empty term matches everything.
pub fn search_by_name<T: Named>(term: &str, items: Vec<T>) -> SearchResults<T> {
    let needle = term.to_lowercase();
    let data: Vec<T> = items
        .into_iter()
        .filter(|item| item.name().to_lowercase().contains(&needle))
        .collect();
    SearchResults {
        count: data.len(),
        data,
    }
}

impl<T: Named> SearchResults<T> {
    pub fn into_hits(self, upcoming: &HashMap<i32, usize>) -> SearchResults<SearchHit> {
        SearchResults {
            count: self.count,
            data: self
                .data
                .iter()
                .map(|item| SearchHit {
                    id: item.id(),
                    name: item.name().to_string(),
                    num_upcoming_shows: upcoming.get(&item.id()).copied().unwrap_or(0),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Entry(i32, &'static str);

    impl Named for Entry {
        fn id(&self) -> i32 {
            self.0
        }
        fn name(&self) -> &str {
            self.1
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry(1, "The Musical Hop"),
            Entry(2, "The Dueling Pianos Bar"),
            Entry(3, "Park Square Live Music & Coffee"),
        ]
    }

    #[test]
    fn empty_term_matches_everything() {
        let results = search_by_name("", entries());
        assert_eq!(results.count, 3);
        let ids: Vec<i32> = results.data.iter().map(|e| e.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn no_match_is_empty() {
        let results = search_by_name("zzz", entries());
        assert_eq!(results.count, 0);
        assert!(results.data.is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let results = search_by_name("hOp", entries());
        assert_eq!(results.count, 1);
        assert_eq!(results.data[0].0, 1);

        let results = search_by_name("MUSIC", entries());
        let ids: Vec<i32> = results.data.iter().map(|e| e.0).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn hits_carry_upcoming_counts() {
        let upcoming = HashMap::from([(2, 4)]);
        let hits = search_by_name("the", entries()).into_hits(&upcoming);
        assert_eq!(hits.count, 2);
        assert_eq!(hits.data[0].num_upcoming_shows, 0);
        assert_eq!(hits.data[1].num_upcoming_shows, 4);
    }
}

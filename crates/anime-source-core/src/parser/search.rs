//! Search page mapper
//!
//! Maps upstream search items into host [`SearchResult`]s.

use crate::types::{SearchResult, SubOrDub};
use crate::upstream::SearchItem;

/// Maps the items of one search page, preserving their order
pub fn map_search_results(items: Vec<SearchItem>) -> Vec<SearchResult> {
    items.into_iter().map(map_search_item).collect()
}

fn map_search_item(item: SearchItem) -> SearchResult {
    SearchResult {
        sub_or_dub: SubOrDub::from_counts(item.sub, item.dub),
        id: item.id,
        title: item.title,
        url: item.url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, sub: u32, dub: u32) -> SearchItem {
        SearchItem {
            id: id.to_string(),
            title: id.to_uppercase(),
            url: format!("https://hianime.to/{}", id),
            sub,
            dub,
        }
    }

    #[test]
    fn test_map_search_results_classifies_each_item() {
        let results = map_search_results(vec![
            item("a", 2, 0),
            item("b", 0, 3),
            item("c", 1, 1),
            item("d", 0, 0),
        ]);

        let kinds: Vec<SubOrDub> = results.iter().map(|r| r.sub_or_dub).collect();
        assert_eq!(
            kinds,
            vec![SubOrDub::Sub, SubOrDub::Dub, SubOrDub::Both, SubOrDub::Sub]
        );
    }

    #[test]
    fn test_map_search_results_copies_fields() {
        let results = map_search_results(vec![item("naruto-677", 220, 220)]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "naruto-677");
        assert_eq!(results[0].title, "NARUTO-677");
        assert_eq!(results[0].url, "https://hianime.to/naruto-677");
    }

    #[test]
    fn test_map_empty_page() {
        assert!(map_search_results(Vec::new()).is_empty());
    }
}

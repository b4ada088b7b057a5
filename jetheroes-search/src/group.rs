use jetheroes_model::{GroupKey, GroupedView, Hero, HeroGroup, fold_case};
use std::collections::BTreeMap;
use tracing::warn;

/// A query folded once, ready to test many names against.
#[derive(Debug, Clone)]
pub struct QueryMatcher {
    needle: String,
}

impl QueryMatcher {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold_case(query),
        }
    }

    /// Case-insensitive substring test. An empty query matches every name.
    pub fn matches(&self, name: &str) -> bool {
        fold_case(name).contains(&self.needle)
    }
}

/// One-off form of [`QueryMatcher::matches`].
pub fn matches_query(name: &str, query: &str) -> bool {
    QueryMatcher::new(query).matches(name)
}

/// Builds the grouped view of `heroes` for `query`.
///
/// Filters first so a key with no matching hero never produces a group. Heroes
/// with an empty name cannot be keyed and are left out. Members are sorted by
/// case-folded name with a stable sort, so equal names keep their stored order.
pub fn build_view(heroes: &[Hero], query: &str) -> GroupedView {
    let matcher = QueryMatcher::new(query);

    // BTreeMap keeps keys ascending; each bucket keeps stored order until sorted.
    let mut buckets: BTreeMap<GroupKey, Vec<Hero>> = BTreeMap::new();
    for hero in heroes.iter().filter(|h| matcher.matches(&h.name)) {
        let Some(key) = GroupKey::of(&hero.name) else {
            warn!(hero_id = %hero.id, "Skipping hero with empty name");
            continue;
        };
        buckets.entry(key).or_default().push(hero.clone());
    }

    let groups = buckets
        .into_iter()
        .map(|(key, mut members)| {
            members.sort_by_cached_key(Hero::folded_name);
            HeroGroup {
                key,
                heroes: members,
            }
        })
        .collect();

    GroupedView::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jetheroes_types::HeroId;

    fn hero(id: u64, name: &str) -> Hero {
        Hero::new(HeroId::from(id), name, "")
    }

    #[test]
    fn matches_is_case_insensitive() {
        assert!(matches_query("Gajah Mada", "GA"));
        assert!(matches_query("Gajah Mada", "h m"));
        assert!(!matches_query("Gajah Mada", "zz"));
    }

    #[test]
    fn final_sigma_matches_any_sigma() {
        for query in ["Σ", "σ", "ς", "ρης"] {
            assert!(matches_query("ΑΡΗΣ", query), "query {query:?}");
        }
        let view = build_view(&[hero(1, "ΑΡΗΣ")], "Σ");
        assert_eq!(view.hero_count(), 1);
    }

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("anything", ""));
        assert!(matches_query("", ""));
    }

    #[test]
    fn empty_name_is_excluded_without_dropping_others() {
        let view = build_view(&[hero(1, ""), hero(2, "Sudirman")], "");
        assert_eq!(view.hero_count(), 1);
        assert_eq!(view.keys().next().unwrap().as_str(), "S");
    }

    #[test]
    fn lower_and_upper_initials_share_a_group() {
        let view = build_view(&[hero(1, "bung tomo"), hero(2, "Budi Utomo")], "");
        assert_eq!(view.len(), 1);
        let names: Vec<&str> = view.heroes().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Budi Utomo", "bung tomo"]);
    }
}

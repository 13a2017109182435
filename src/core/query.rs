//! Query state and the filter → sort pipeline

use crate::core::collation;
use crate::core::error::QueryError;
use crate::core::installer::{Installer, SkillLevel};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Wire value meaning "no restriction" for the skill and city filters
pub const ALL: &str = "all";

/// Sort order applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    #[default]
    NameAsc,
    NameDesc,
    ExperienceHigh,
    ExperienceLow,
    SkillLevel,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::ExperienceHigh,
        SortKey::ExperienceLow,
        SortKey::SkillLevel,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::ExperienceHigh => "experience-high",
            SortKey::ExperienceLow => "experience-low",
            SortKey::SkillLevel => "skill-level",
        }
    }

    /// Comparator for this key; callers must use a stable sort
    pub fn compare(self, a: &Installer, b: &Installer) -> Ordering {
        match self {
            SortKey::NameAsc => collation::compare(&a.name, &b.name),
            SortKey::NameDesc => collation::compare(&b.name, &a.name),
            SortKey::ExperienceHigh => b.years_experience.cmp(&a.years_experience),
            SortKey::ExperienceLow => a.years_experience.cmp(&b.years_experience),
            SortKey::SkillLevel => a.skill_level.rank().cmp(&b.skill_level.rank()),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "category-rank" {
            return Ok(SortKey::SkillLevel);
        }
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| QueryError::UnknownSortKey {
                value: s.to_string(),
                expected: Self::ALL
                    .iter()
                    .map(|key| key.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl Serialize for SortKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Skill filter: everything, or one exact tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkillFilter {
    #[default]
    All,
    Only(SkillLevel),
}

impl SkillFilter {
    pub fn matches(self, level: SkillLevel) -> bool {
        match self {
            SkillFilter::All => true,
            SkillFilter::Only(wanted) => wanted == level,
        }
    }
}

impl FromStr for SkillFilter {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == ALL || s.is_empty() {
            Ok(SkillFilter::All)
        } else {
            s.parse().map(SkillFilter::Only)
        }
    }
}

/// City filter: everything, or one exact city name
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CityFilter {
    #[default]
    All,
    Only(String),
}

impl CityFilter {
    pub fn matches(&self, city: &str) -> bool {
        match self {
            CityFilter::All => true,
            CityFilter::Only(wanted) => wanted == city,
        }
    }
}

impl From<&str> for CityFilter {
    fn from(s: &str) -> Self {
        if s == ALL || s.is_empty() {
            CityFilter::All
        } else {
            CityFilter::Only(s.to_string())
        }
    }
}

/// One removable filter, as shown on an "active filters" chip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    Search,
    Skill,
    City,
}

/// User-controlled filter and sort parameters
///
/// `search_term` is stored as typed; trimming happens when filtering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryState {
    pub search_term: String,
    pub skill_filter: SkillFilter,
    pub city_filter: CityFilter,
    pub sort_key: SortKey,
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_skill(mut self, filter: SkillFilter) -> Self {
        self.skill_filter = filter;
        self
    }

    pub fn with_city(mut self, filter: CityFilter) -> Self {
        self.city_filter = filter;
        self
    }

    pub fn with_sort(mut self, key: SortKey) -> Self {
        self.sort_key = key;
        self
    }

    /// Whether a record passes every active filter
    pub fn matches(&self, installer: &Installer) -> bool {
        self.matches_search(installer)
            && self.skill_filter.matches(installer.skill_level)
            && self.city_filter.matches(&installer.city)
    }

    fn matches_search(&self, installer: &Installer) -> bool {
        let term = self.search_term.trim();
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        [&installer.name, &installer.city, &installer.about]
            .into_iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }

    /// Filters the user has set, in chip order
    pub fn active_filters(&self) -> Vec<FilterKey> {
        [
            (FilterKey::Search, !self.search_term.is_empty()),
            (FilterKey::Skill, self.skill_filter != SkillFilter::All),
            (FilterKey::City, self.city_filter != CityFilter::All),
        ]
        .into_iter()
        .filter_map(|(key, active)| active.then_some(key))
        .collect()
    }

    /// Number of filters the user has set, for "N filters active" badges
    pub fn active_filter_count(&self) -> usize {
        self.active_filters().len()
    }

    /// Drop a single filter, leaving the others and the sort order alone
    pub fn remove_filter(&mut self, key: FilterKey) {
        match key {
            FilterKey::Search => self.search_term.clear(),
            FilterKey::Skill => self.skill_filter = SkillFilter::All,
            FilterKey::City => self.city_filter = CityFilter::All,
        }
    }

    /// Reset filters, keeping the chosen sort order
    pub fn clear_filters(&mut self) {
        for key in [FilterKey::Search, FilterKey::Skill, FilterKey::City] {
            self.remove_filter(key);
        }
    }
}

/// Filter `records` by `query`, then stable-sort a copy by its sort key
///
/// The input is left untouched. An empty result means "no matches" and is
/// not an error.
pub fn apply(records: &[Installer], query: &QueryState) -> Vec<Installer> {
    let mut view: Vec<Installer> = records
        .iter()
        .filter(|installer| query.matches(installer))
        .cloned()
        .collect();
    view.sort_by(|a, b| query.sort_key.compare(a, b));
    view
}

/// Raw query parameters as they arrive from a query string
///
/// # Example
/// ```text
/// GET /installers?search=austin&skillLevel=Master&city=all&sort=experience-high
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QueryParams {
    pub search: Option<String>,
    pub skill_level: Option<String>,
    pub city: Option<String>,
    pub sort: Option<String>,
}

impl QueryParams {
    /// Parse into a typed state; unknown sort keys and skill labels are rejected
    pub fn into_state(self, default_sort: SortKey) -> Result<QueryState, QueryError> {
        let skill_filter = match self.skill_level.as_deref() {
            None => SkillFilter::All,
            Some(raw) => raw.parse()?,
        };
        let sort_key = match self.sort.as_deref() {
            None => default_sort,
            Some(raw) => raw.parse()?,
        };
        Ok(QueryState {
            search_term: self.search.unwrap_or_default(),
            skill_filter,
            city_filter: self.city.as_deref().map(CityFilter::from).unwrap_or_default(),
            sort_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn installer(id: &str, name: &str, city: &str, level: SkillLevel, years: u32) -> Installer {
        Installer::new(id, name, city, level, years, "")
    }

    #[test]
    fn test_query_state_defaults() {
        let state = QueryState::default();
        assert_eq!(state.search_term, "");
        assert_eq!(state.skill_filter, SkillFilter::All);
        assert_eq!(state.city_filter, CityFilter::All);
        assert_eq!(state.sort_key, SortKey::NameAsc);
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn test_sort_key_round_trip_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert_eq!("category-rank".parse::<SortKey>(), Ok(SortKey::SkillLevel));
    }

    #[test]
    fn test_unknown_sort_key_fails_loudly() {
        let err = "rating-high".parse::<SortKey>().unwrap_err();
        assert!(matches!(err, QueryError::UnknownSortKey { ref value, .. } if value == "rating-high"));
    }

    #[test]
    fn test_sort_key_serde() {
        let json = serde_json::to_string(&SortKey::ExperienceHigh).unwrap();
        assert_eq!(json, "\"experience-high\"");
        let parsed: SortKey = serde_json::from_str("\"skill-level\"").unwrap();
        assert_eq!(parsed, SortKey::SkillLevel);
        assert!(serde_json::from_str::<SortKey>("\"newest\"").is_err());
    }

    #[test]
    fn test_search_matches_any_field_case_insensitive() {
        let mut record = installer("1", "Alpha Greens", "Austin", SkillLevel::Master, 5);
        record.about = "Synthetic turf specialists".to_string();

        assert!(QueryState::new().with_search("ALPHA").matches(&record));
        assert!(QueryState::new().with_search("austin").matches(&record));
        assert!(QueryState::new().with_search("turf").matches(&record));
        assert!(!QueryState::new().with_search("boston").matches(&record));
    }

    #[test]
    fn test_search_is_trimmed_at_filter_time() {
        let record = installer("1", "Alpha Greens", "Austin", SkillLevel::Master, 5);
        let state = QueryState::new().with_search("  austin  ");
        assert!(state.matches(&record));
        assert_eq!(state.search_term, "  austin  ");
    }

    #[test]
    fn test_skill_filter_parse() {
        assert_eq!("all".parse::<SkillFilter>(), Ok(SkillFilter::All));
        assert_eq!("".parse::<SkillFilter>(), Ok(SkillFilter::All));
        assert_eq!(
            "Novice".parse::<SkillFilter>(),
            Ok(SkillFilter::Only(SkillLevel::Novice))
        );
        assert!("novice".parse::<SkillFilter>().is_err());
    }

    #[test]
    fn test_city_filter_is_exact() {
        let filter = CityFilter::from("Austin");
        assert!(filter.matches("Austin"));
        assert!(!filter.matches("austin"));
        assert_eq!(CityFilter::from("all"), CityFilter::All);
        assert_eq!(CityFilter::from(""), CityFilter::All);
    }

    #[test]
    fn test_active_filter_count_and_clear() {
        let mut state = QueryState::new()
            .with_search(" ")
            .with_skill(SkillFilter::Only(SkillLevel::Master))
            .with_city(CityFilter::from("Austin"))
            .with_sort(SortKey::ExperienceLow);
        assert_eq!(state.active_filter_count(), 3);

        state.clear_filters();
        assert_eq!(state.active_filter_count(), 0);
        assert_eq!(state.sort_key, SortKey::ExperienceLow);
    }

    #[test]
    fn test_remove_single_filter() {
        let mut state = QueryState::new()
            .with_search("greens")
            .with_skill(SkillFilter::Only(SkillLevel::Novice))
            .with_city(CityFilter::from("Boston"))
            .with_sort(SortKey::NameDesc);
        assert_eq!(
            state.active_filters(),
            vec![FilterKey::Search, FilterKey::Skill, FilterKey::City]
        );

        state.remove_filter(FilterKey::Skill);
        assert_eq!(state.active_filters(), vec![FilterKey::Search, FilterKey::City]);
        assert_eq!(state.search_term, "greens");
        assert_eq!(state.city_filter, CityFilter::Only("Boston".to_string()));

        state.remove_filter(FilterKey::Search);
        assert_eq!(state.active_filters(), vec![FilterKey::City]);
        assert_eq!(state.sort_key, SortKey::NameDesc);
    }

    #[test]
    fn test_apply_skill_rank_is_stable() {
        let records = vec![
            installer("1", "C", "X", SkillLevel::Novice, 1),
            installer("2", "B", "X", SkillLevel::Master, 1),
            installer("3", "A", "X", SkillLevel::Novice, 1),
            installer("4", "D", "X", SkillLevel::Master, 1),
            installer("5", "E", "X", SkillLevel::Intermediate, 1),
        ];
        let view = apply(&records, &QueryState::new().with_sort(SortKey::SkillLevel));
        let ids: Vec<&str> = view.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4", "5", "1", "3"]);
    }

    #[test]
    fn test_apply_does_not_mutate_input() {
        let records = vec![
            installer("1", "Zulu", "X", SkillLevel::Novice, 1),
            installer("2", "Alpha", "X", SkillLevel::Novice, 1),
        ];
        let before = records.clone();
        let view = apply(&records, &QueryState::new());
        assert_eq!(records, before);
        assert_eq!(view[0].name, "Alpha");
    }

    #[test]
    fn test_params_into_state() {
        let params = QueryParams {
            search: Some("green".to_string()),
            skill_level: Some("Intermediate".to_string()),
            city: Some("Denver".to_string()),
            sort: Some("experience-low".to_string()),
        };
        let state = params.into_state(SortKey::NameAsc).unwrap();
        assert_eq!(state.search_term, "green");
        assert_eq!(state.skill_filter, SkillFilter::Only(SkillLevel::Intermediate));
        assert_eq!(state.city_filter, CityFilter::Only("Denver".to_string()));
        assert_eq!(state.sort_key, SortKey::ExperienceLow);
    }

    #[test]
    fn test_params_default_sort_and_rejections() {
        let state = QueryParams::default().into_state(SortKey::SkillLevel).unwrap();
        assert_eq!(state.sort_key, SortKey::SkillLevel);

        let bad_sort = QueryParams {
            sort: Some("popular".to_string()),
            ..Default::default()
        };
        assert!(bad_sort.into_state(SortKey::NameAsc).is_err());

        let bad_skill = QueryParams {
            skill_level: Some("Expert".to_string()),
            ..Default::default()
        };
        assert!(bad_skill.into_state(SortKey::NameAsc).is_err());
    }
}

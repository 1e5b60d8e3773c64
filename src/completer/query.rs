use std::fmt;

use fuzzy_matcher::{FuzzyMatcher, skim::SkimMatcherV2};
use serde::Deserialize;

use crate::completer::highlight::{
    Highlights, LowercaseSearch, MatchRanges, char_indices_to_ranges,
};

/// How the query is matched against candidates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// The lowercased candidate contains the lowercased query literally.
    #[default]
    Substring,
    /// Skim-style fuzzy matching.
    Fuzzy,
}

/// Matches one query against candidates, for both filtering and
/// highlighting.
pub struct QueryMatcher {
    mode: FilterMode,
    query: String,
    lowered: String,
    fuzzy: SkimMatcherV2,
}

impl fmt::Debug for QueryMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryMatcher")
            .field("mode", &self.mode)
            .field("query", &self.query)
            .finish()
    }
}

impl QueryMatcher {
    pub fn new(mode: FilterMode, query: &str) -> Self {
        Self {
            mode,
            query: query.to_string(),
            lowered: query.to_lowercase(),
            fuzzy: SkimMatcherV2::default(),
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn is_match(&self, candidate: &str) -> bool {
        if self.query.is_empty() {
            return true;
        }

        match self.mode {
            FilterMode::Substring => {
                candidate.to_lowercase().contains(&self.lowered)
            }
            FilterMode::Fuzzy => {
                self.fuzzy.fuzzy_match(candidate, &self.query).is_some()
            }
        }
    }

    pub fn highlight<'a>(&self, candidate: &'a str) -> Highlights<'a> {
        if self.query.is_empty() {
            return Highlights::new(candidate, MatchRanges::None);
        }

        let ranges = match self.mode {
            FilterMode::Substring => MatchRanges::Literal(LowercaseSearch::new(
                candidate,
                self.lowered.clone(),
            )),
            FilterMode::Fuzzy => {
                match self.fuzzy.fuzzy_indices(candidate, &self.query) {
                    Some((_, indices)) => MatchRanges::Fixed {
                        ranges: char_indices_to_ranges(candidate, &indices),
                        next: 0,
                    },
                    None => MatchRanges::None,
                }
            }
        };

        Highlights::new(candidate, ranges)
    }
}

/// Owns the candidate universe, the query text and the derived filtered
/// list.
#[derive(Debug)]
pub struct QueryEngine {
    candidates: Vec<String>,
    filtered: Vec<String>,
    query: String,
    matcher: QueryMatcher,
}

impl QueryEngine {
    pub fn new(candidates: Vec<String>, mode: FilterMode) -> Self {
        Self {
            filtered: candidates.clone(),
            candidates,
            query: String::new(),
            matcher: QueryMatcher::new(mode, ""),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn filtered(&self) -> &[String] {
        &self.filtered
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn matcher(&self) -> &QueryMatcher {
        &self.matcher
    }

    pub fn is_candidate(&self, value: &str) -> bool {
        self.candidates.iter().any(|c| c == value)
    }

    /// Replaces the query and recomputes the filtered list.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.matcher = QueryMatcher::new(self.matcher.mode(), query);
        self.update_filter();
    }

    fn update_filter(&mut self) {
        if self.query.is_empty() {
            self.filtered = self.candidates.clone();
        } else {
            self.filtered = self
                .candidates
                .iter()
                .filter(|item| self.matcher.is_match(item))
                .cloned()
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(items: &[&str], mode: FilterMode) -> QueryEngine {
        QueryEngine::new(items.iter().map(|s| s.to_string()).collect(), mode)
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut engine = engine(&["b", "a", "b"], FilterMode::Substring);
        engine.set_query("");
        assert_eq!(engine.filtered(), ["b", "a", "b"]);
    }

    #[test]
    fn substring_filter_is_case_insensitive_and_ordered() {
        let mut engine =
            engine(&["Apple", "Banana", "Cherry", "avocado"], FilterMode::Substring);
        engine.set_query("A");
        assert_eq!(engine.filtered(), ["Apple", "Banana", "avocado"]);
        engine.set_query("an");
        assert_eq!(engine.filtered(), ["Banana"]);
    }

    #[test]
    fn no_match_yields_empty_list() {
        let mut engine = engine(&["Apple"], FilterMode::Substring);
        engine.set_query("zzz");
        assert!(engine.filtered().is_empty());
    }

    #[test]
    fn special_characters_match_literally() {
        let mut engine =
            engine(&["C++", "C#", "Cobol", "a.b"], FilterMode::Substring);
        engine.set_query("+");
        assert_eq!(engine.filtered(), ["C++"]);
        engine.set_query(".");
        assert_eq!(engine.filtered(), ["a.b"]);
        engine.set_query("[");
        assert!(engine.filtered().is_empty());
    }

    #[test]
    fn fuzzy_filter_accepts_scattered_characters() {
        let mut engine =
            engine(&["Looong Option4", "Option 1", "Banana"], FilterMode::Fuzzy);
        engine.set_query("lo4");
        assert_eq!(engine.filtered(), ["Looong Option4"]);
    }

    #[test]
    fn fuzzy_highlight_marks_matched_characters() {
        let matcher = QueryMatcher::new(FilterMode::Fuzzy, "ace");
        let matched: String = matcher
            .highlight("Apple Cake")
            .filter(|s| s.is_match)
            .map(|s| s.text)
            .collect();
        assert_eq!(matched.to_lowercase(), "ace");
    }

    #[test]
    fn substring_filter_compares_lowercase_forms() {
        let mut engine = engine(
            &["s", "Straße", "İstanbul", "Kelvin", "ΟΔΟΣ"],
            FilterMode::Substring,
        );
        engine.set_query("ſ");
        assert!(engine.filtered().is_empty());
        engine.set_query("i\u{307}");
        assert_eq!(engine.filtered(), ["İstanbul"]);
        engine.set_query("\u{212A}");
        assert_eq!(engine.filtered(), ["Kelvin"]);
        engine.set_query("ς");
        assert_eq!(engine.filtered(), ["ΟΔΟΣ"]);
    }
}

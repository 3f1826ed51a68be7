//! Set differences between two dependency sections

use super::DependencySet;
use std::collections::BTreeSet;

/// The derived name sets of a comparison between "mine" and "foreign"
///
/// `only_in_mine`, `only_in_foreign` and `in_both` partition the union of
/// both sections' names; `in_both_diff_version` is always a subset of
/// `in_both`. Computed once per run, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyDiff {
    only_in_mine: BTreeSet<String>,
    only_in_foreign: BTreeSet<String>,
    in_both: BTreeSet<String>,
    in_both_diff_version: BTreeSet<String>,
}

impl DependencyDiff {
    /// Computes the diff between two dependency sets
    ///
    /// Names and version specifiers are compared as exact strings; `"1.0.0"`
    /// and `"=1.0.0"` count as different versions.
    pub fn between(mine: &DependencySet, foreign: &DependencySet) -> Self {
        let mut diff = Self::default();
        for (name, version) in mine.iter() {
            match foreign.get(name) {
                Some(foreign_version) => {
                    diff.in_both.insert(name.to_string());
                    if foreign_version != version {
                        diff.in_both_diff_version.insert(name.to_string());
                    }
                }
                None => {
                    diff.only_in_mine.insert(name.to_string());
                }
            }
        }
        for name in foreign.names() {
            if !mine.contains(name) {
                diff.only_in_foreign.insert(name.to_string());
            }
        }
        diff
    }

    /// Names present in mine but not in foreign
    pub fn only_in_mine(&self) -> &BTreeSet<String> {
        &self.only_in_mine
    }

    /// Names present in foreign but not in mine
    pub fn only_in_foreign(&self) -> &BTreeSet<String> {
        &self.only_in_foreign
    }

    /// Names present in both sections, regardless of version
    pub fn in_both(&self) -> &BTreeSet<String> {
        &self.in_both
    }

    /// Names present in both sections whose version specifiers differ
    pub fn in_both_diff_version(&self) -> &BTreeSet<String> {
        &self.in_both_diff_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(set: &BTreeSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_between_empty_sets() {
        let diff = DependencyDiff::between(&DependencySet::new(), &DependencySet::new());
        assert!(diff.only_in_mine().is_empty());
        assert!(diff.only_in_foreign().is_empty());
        assert!(diff.in_both().is_empty());
        assert!(diff.in_both_diff_version().is_empty());
    }

    #[test]
    fn test_between_partitions_names() {
        let mine: DependencySet = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let foreign: DependencySet = [("b", "2"), ("c", "9"), ("d", "4")].into_iter().collect();

        let diff = DependencyDiff::between(&mine, &foreign);
        assert_eq!(names(diff.only_in_mine()), vec!["a"]);
        assert_eq!(names(diff.only_in_foreign()), vec!["d"]);
        assert_eq!(names(diff.in_both()), vec!["b", "c"]);
        assert_eq!(names(diff.in_both_diff_version()), vec!["c"]);
    }

    #[test]
    fn test_between_identical_sections() {
        let mine: DependencySet = [("lodash", "^4.17.21"), ("react", "^18.2.0")]
            .into_iter()
            .collect();
        let diff = DependencyDiff::between(&mine, &mine.clone());
        assert!(diff.only_in_mine().is_empty());
        assert!(diff.only_in_foreign().is_empty());
        assert_eq!(diff.in_both().len(), 2);
        assert!(diff.in_both_diff_version().is_empty());
    }

    #[test]
    fn test_between_empty_mine() {
        let foreign: DependencySet = [("a", "1"), ("b", "2")].into_iter().collect();
        let diff = DependencyDiff::between(&DependencySet::new(), &foreign);
        assert!(diff.only_in_mine().is_empty());
        assert_eq!(names(diff.only_in_foreign()), vec!["a", "b"]);
        assert!(diff.in_both().is_empty());
    }

    #[test]
    fn test_between_empty_foreign() {
        let mine: DependencySet = [("a", "1")].into_iter().collect();
        let diff = DependencyDiff::between(&mine, &DependencySet::new());
        assert_eq!(names(diff.only_in_mine()), vec!["a"]);
        assert!(diff.only_in_foreign().is_empty());
    }

    #[test]
    fn test_version_comparison_is_exact() {
        let mine: DependencySet = [("pkg", "1.0.0")].into_iter().collect();
        let foreign: DependencySet = [("pkg", "=1.0.0")].into_iter().collect();
        let diff = DependencyDiff::between(&mine, &foreign);
        assert_eq!(names(diff.in_both_diff_version()), vec!["pkg"]);
    }

    #[test]
    fn test_diff_version_is_subset_of_in_both() {
        let mine: DependencySet = [("a", "1"), ("b", "2"), ("c", "3")].into_iter().collect();
        let foreign: DependencySet = [("a", "9"), ("b", "2"), ("d", "1")].into_iter().collect();
        let diff = DependencyDiff::between(&mine, &foreign);
        assert!(diff.in_both_diff_version().is_subset(diff.in_both()));
    }

    #[test]
    fn test_between_is_deterministic() {
        let mine: DependencySet = [("x", "1"), ("y", "2")].into_iter().collect();
        let foreign: DependencySet = [("y", "3"), ("z", "4")].into_iter().collect();
        assert_eq!(
            DependencyDiff::between(&mine, &foreign),
            DependencyDiff::between(&mine, &foreign)
        );
    }
}

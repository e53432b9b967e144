//! Category hierarchy collaborator consulted during filtering.
//!
//! The category tree lives outside this crate and can be renamed or
//! restructured at any time, so membership is a point-in-time query per
//! evaluation; nothing here caches descendant relationships.

/// Membership query over the external category tree.
pub trait CategoryHierarchy: Send + Sync {
    /// Whether `path` names `ancestor` itself or one of its descendants.
    fn is_descendant_or_equal(&self, path: &str, ancestor: &str) -> bool;
}

/// Nested categories, where `/`-separated path segments define the tree.
///
/// `Movies/Action` is a descendant of `Movies`; `Moviesx` is not.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathHierarchy;

impl CategoryHierarchy for PathHierarchy {
    fn is_descendant_or_equal(&self, path: &str, ancestor: &str) -> bool {
        if ancestor.is_empty() {
            return path.is_empty();
        }
        if path == ancestor {
            return true;
        }
        path.strip_prefix(ancestor)
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Flat category namespace: only exact names match.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlatHierarchy;

impl CategoryHierarchy for FlatHierarchy {
    fn is_descendant_or_equal(&self, path: &str, ancestor: &str) -> bool {
        path == ancestor
    }
}

#[cfg(test)]
mod tests {
    use super::{CategoryHierarchy, FlatHierarchy, PathHierarchy};

    #[test]
    fn nested_membership_respects_segment_boundaries() {
        let tree = PathHierarchy;
        assert!(tree.is_descendant_or_equal("Movies", "Movies"));
        assert!(tree.is_descendant_or_equal("Movies/Action", "Movies"));
        assert!(tree.is_descendant_or_equal("Movies/Action/1970s", "Movies/Action"));
        assert!(!tree.is_descendant_or_equal("Moviesx", "Movies"));
        assert!(!tree.is_descendant_or_equal("Movies", "Movies/Action"));
    }

    #[test]
    fn empty_ancestor_matches_only_the_empty_path() {
        let tree = PathHierarchy;
        assert!(tree.is_descendant_or_equal("", ""));
        assert!(!tree.is_descendant_or_equal("Movies", ""));
    }

    #[test]
    fn flat_membership_is_exact() {
        let flat = FlatHierarchy;
        assert!(flat.is_descendant_or_equal("Movies", "Movies"));
        assert!(!flat.is_descendant_or_equal("Movies/Action", "Movies"));
    }
}

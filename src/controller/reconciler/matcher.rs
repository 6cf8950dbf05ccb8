//! # Role Matcher
//!
//! Decides whether two roles denote the same Keycloak role.
//!
//! When both roles carry an id the ids alone decide, so a role whose name
//! changed is still recognised as the same role (a rename). Otherwise the
//! names decide.

use crate::crd::RoleRepresentation;
use std::collections::HashSet;

/// Whether `a` and `b` denote the same role
#[must_use]
pub fn role_matches(a: &RoleRepresentation, b: &RoleRepresentation) -> bool {
    if a.has_id() && b.has_id() {
        return a.id == b.id;
    }
    a.name == b.name
}

/// Whether any role in `roles` matches `role`
#[must_use]
pub fn has_matching_role(roles: &[RoleRepresentation], role: &RoleRepresentation) -> bool {
    roles.iter().any(|r| role_matches(r, role))
}

/// Lookup structure answering [`has_matching_role`] without scanning
///
/// An id-carrying role matches either a role with the same id or an id-less role with
/// the same name; an id-less role matches any role with the same name.
#[derive(Debug)]
struct RoleIndex<'a> {
    ids: HashSet<&'a str>,
    names_without_id: HashSet<&'a str>,
    names: HashSet<&'a str>,
}

impl<'a> RoleIndex<'a> {
    fn new(roles: &'a [RoleRepresentation]) -> Self {
        let mut index = Self {
            ids: HashSet::with_capacity(roles.len()),
            names_without_id: HashSet::new(),
            names: HashSet::with_capacity(roles.len()),
        };
        for role in roles {
            if role.has_id() {
                index.ids.insert(role.id.as_str());
            } else {
                index.names_without_id.insert(role.name.as_str());
            }
            index.names.insert(role.name.as_str());
        }
        index
    }

    fn matches(&self, role: &RoleRepresentation) -> bool {
        if role.has_id() {
            self.ids.contains(role.id.as_str())
                || self.names_without_id.contains(role.name.as_str())
        } else {
            self.names.contains(role.name.as_str())
        }
    }
}

/// Split `source` into roles with no match in `other` and roles with one
///
/// Returns `(unmatched, matched)`. Both halves borrow from `source` and keep its order.
#[must_use]
pub fn difference_intersection<'a>(
    source: &'a [RoleRepresentation],
    other: &[RoleRepresentation],
) -> (Vec<&'a RoleRepresentation>, Vec<&'a RoleRepresentation>) {
    let index = RoleIndex::new(other);
    source.iter().partition(|role| !index.matches(role))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(roles: &[&RoleRepresentation]) -> Vec<String> {
        roles.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    fn test_ids_decide_when_both_present() {
        let a = RoleRepresentation::with_id("1", "reader");
        let renamed = RoleRepresentation::with_id("1", "viewer");
        let other = RoleRepresentation::with_id("2", "reader");
        assert!(role_matches(&a, &renamed));
        assert!(!role_matches(&a, &other));
    }

    #[test]
    fn test_names_decide_when_an_id_is_missing() {
        let with_id = RoleRepresentation::with_id("1", "reader");
        let without_id = RoleRepresentation::named("reader");
        let different = RoleRepresentation::named("writer");
        assert!(role_matches(&with_id, &without_id));
        assert!(role_matches(&without_id, &with_id));
        assert!(!role_matches(&without_id, &different));
    }

    #[test]
    fn test_difference_intersection_keeps_source_order() {
        let source = vec![
            RoleRepresentation::named("c"),
            RoleRepresentation::named("a"),
            RoleRepresentation::named("b"),
        ];
        let other = vec![RoleRepresentation::with_id("9", "a")];
        let (unmatched, matched) = difference_intersection(&source, &other);
        assert_eq!(names(&unmatched), vec!["c", "b"]);
        assert_eq!(names(&matched), vec!["a"]);
    }

    #[test]
    fn test_id_mismatch_beats_name_coincidence() {
        let source = vec![RoleRepresentation::with_id("1", "admin")];
        let other = vec![RoleRepresentation::with_id("2", "admin")];
        let (unmatched, matched) = difference_intersection(&source, &other);
        assert_eq!(unmatched.len(), 1);
        assert!(matched.is_empty());
    }

    #[test]
    fn test_empty_collections() {
        let roles = vec![RoleRepresentation::named("a")];
        let (unmatched, matched) = difference_intersection(&roles, &[]);
        assert_eq!(unmatched.len(), 1);
        assert!(matched.is_empty());

        let (unmatched, matched) = difference_intersection(&[], &roles);
        assert!(unmatched.is_empty());
        assert!(matched.is_empty());
    }

    #[test]
    fn test_index_agrees_with_pairwise_scan() {
        let pool = vec![
            RoleRepresentation::named("a"),
            RoleRepresentation::named("b"),
            RoleRepresentation::with_id("1", "a"),
            RoleRepresentation::with_id("1", "c"),
            RoleRepresentation::with_id("2", "b"),
            RoleRepresentation::with_id("3", "d"),
            RoleRepresentation::named("d"),
        ];
        // every prefix/suffix split of the pool against every other split
        for split in 0..=pool.len() {
            let (left, right) = pool.split_at(split);
            for (source, other) in [(left, right), (right, left), (&pool[..], left)] {
                let (unmatched, matched) = difference_intersection(source, other);
                for role in &matched {
                    assert!(has_matching_role(other, role), "{role:?} should match");
                }
                for role in &unmatched {
                    assert!(!has_matching_role(other, role), "{role:?} should not match");
                }
                assert_eq!(unmatched.len() + matched.len(), source.len());
            }
        }
    }
}

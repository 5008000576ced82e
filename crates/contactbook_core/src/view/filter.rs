//! List projections: name search, favorites and display order.
//!
//! # Invariants
//! - Filters keep the relative order of their input.
//! - `sorted_by_name` is stable: equal names keep their input order.

use crate::model::contact::Contact;
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Keeps contacts whose name contains `query`, ignoring case.
///
/// An empty query matches every contact.
pub fn filter_by_name(contacts: &[Contact], query: &str) -> Vec<Contact> {
    let needle = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| contact.name.to_lowercase().contains(needle.as_str()))
        .cloned()
        .collect()
}

/// Keeps contacts flagged as favorite.
pub fn favorites_only(contacts: &[Contact]) -> Vec<Contact> {
    contacts
        .iter()
        .filter(|contact| contact.is_favorite)
        .cloned()
        .collect()
}

/// Sorts by name, ascending, the way a locale-aware UI list does.
///
/// Letters compare case- and accent-insensitively first (`alice < Bob`),
/// then accents break ties, then lowercase sorts before uppercase.
pub fn sorted_by_name(contacts: &[Contact]) -> Vec<Contact> {
    let mut keyed = contacts
        .iter()
        .map(|contact| (CollationKey::new(&contact.name), contact))
        .collect::<Vec<_>>();
    keyed.sort_by(|(left, _), (right, _)| left.cmp(right));
    keyed
        .into_iter()
        .map(|(_, contact)| contact.clone())
        .collect()
}

/// Contact list screen order: search filter, then name order.
pub fn display_list(contacts: &[Contact], query: &str) -> Vec<Contact> {
    sorted_by_name(&filter_by_name(contacts, query))
}

/// Favorites screen order: favorites subset, then name order.
pub fn favorites_display_list(contacts: &[Contact]) -> Vec<Contact> {
    sorted_by_name(&favorites_only(contacts))
}

/// Compares two names with [`sorted_by_name`] semantics.
pub fn compare_names(left: &str, right: &str) -> Ordering {
    CollationKey::new(left).cmp(&CollationKey::new(right))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    /// Combining marks attached to each base character, in order.
    /// An unmarked character (empty list) ranks before any marked one.
    accents: Vec<Vec<char>>,
    uppercase: Vec<bool>,
}

impl CollationKey {
    fn new(name: &str) -> Self {
        let mut base = String::new();
        let mut accents: Vec<Vec<char>> = Vec::new();
        let mut uppercase = Vec::new();

        for c in name.nfd() {
            if is_combining_mark(c) {
                match accents.last_mut() {
                    Some(marks) => marks.push(c),
                    None => accents.push(vec![c]),
                }
                continue;
            }
            base.extend(c.to_lowercase());
            accents.push(Vec::new());
            uppercase.push(c.is_uppercase());
        }

        Self {
            base,
            accents,
            uppercase,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::compare_names;
    use std::cmp::Ordering;

    #[test]
    fn case_is_ignored_before_it_breaks_ties() {
        assert_eq!(compare_names("alice", "Bob"), Ordering::Less);
        assert_eq!(compare_names("Bob", "alice"), Ordering::Greater);
        assert_eq!(compare_names("bob", "Bob"), Ordering::Less);
    }

    #[test]
    fn accents_rank_after_base_letters() {
        assert_eq!(compare_names("Eve", "Éva"), Ordering::Greater);
        assert_eq!(compare_names("Elise", "Élise"), Ordering::Less);
    }

    #[test]
    fn unmarked_letter_beats_marked_letter_outside_latin() {
        assert_eq!(compare_names("Ελα", "Έλα"), Ordering::Less);
        assert_eq!(compare_names("Еж", "Ёж"), Ordering::Less);
        assert_eq!(compare_names("Eo", "Éo"), Ordering::Less);
    }

    #[test]
    fn prefix_sorts_first() {
        assert_eq!(compare_names("Bob", "Bobby"), Ordering::Less);
    }
}

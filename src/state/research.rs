//! Research list state.

use crate::catalog::Publication;
use std::collections::HashSet;

/// Oversees the publication list and which abstracts are expanded.
///
#[derive(Debug, Clone)]
pub struct PublicationList {
    publications: Vec<Publication>,
    expanded: HashSet<String>,
}

impl PublicationList {
    /// Return a new list with every abstract collapsed.
    ///
    pub fn new(publications: Vec<Publication>) -> Self {
        PublicationList {
            publications,
            expanded: HashSet::new(),
        }
    }

    pub fn publications(&self) -> &[Publication] {
        &self.publications
    }

    /// Flip the abstract of the publication. Unknown ids are ignored.
    ///
    pub fn toggle_expanded(&mut self, id: &str) {
        if !self.publications.iter().any(|p| p.id == id) {
            log::warn!("Ignoring toggle for unknown publication '{}'.", id);
            return;
        }
        if !self.expanded.remove(id) {
            self.expanded.insert(id.to_owned());
        }
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_toggle_expanded() {
        let mut list = PublicationList::new(catalog::publications());
        assert!(!list.is_expanded("2"));

        list.toggle_expanded("2");
        assert!(list.is_expanded("2"));
        assert!(!list.is_expanded("1"));

        list.toggle_expanded("2");
        assert!(!list.is_expanded("2"));
    }

    #[test]
    fn test_toggle_unknown_is_ignored() {
        let mut list = PublicationList::new(catalog::publications());
        list.toggle_expanded("missing");
        assert!(!list.is_expanded("missing"));
    }

    #[test]
    fn test_keeps_catalog_order() {
        let list = PublicationList::new(catalog::publications());
        let ids: Vec<&str> = list.publications().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }
}

//! Deletion request builder
//!
//! Checked thumbnails are collected in display order and sent to the device
//! as a single `sketchlist` of comma-terminated names (`cat,dog,`).

use crate::listing::{ENTRY_SEPARATOR, FIELD_SEPARATOR};

/// Query parameter carrying the names to delete.
pub const SKETCHLIST_PARAM: &str = "sketchlist";

/// A batch of sketch names to delete in one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionRequest {
    names: Vec<String>,
}

impl DeletionRequest {
    /// Build a request from the selected names, or `None` if nothing is
    /// selected.
    pub fn from_selected<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The `sketchlist` value: each name followed by `,`.
    pub fn sketchlist(&self) -> String {
        let mut list = String::new();
        for name in &self.names {
            list.push_str(name);
            list.push(FIELD_SEPARATOR);
        }
        list
    }
}

/// Whether `name` can be sent in a sketchlist without changing its meaning.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(|c| c == FIELD_SEPARATOR || c == ENTRY_SEPARATOR)
}

/// Split a `sketchlist` value back into names.
pub fn parse_sketchlist(list: &str) -> Vec<String> {
    list.split(FIELD_SEPARATOR)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sketchlist_keeps_trailing_separator() {
        let request = DeletionRequest::from_selected(["cat", "dog"]).unwrap();
        assert_eq!(request.sketchlist(), "cat,dog,");
    }

    #[test]
    fn single_name() {
        let request = DeletionRequest::from_selected(vec!["cat".to_string()]).unwrap();
        assert_eq!(request.sketchlist(), "cat,");
        assert_eq!(request.len(), 1);
    }

    #[test]
    fn empty_selection_builds_nothing() {
        assert!(DeletionRequest::from_selected(Vec::<String>::new()).is_none());
    }

    #[test]
    fn parse_sketchlist_drops_trailing_empty() {
        assert_eq!(parse_sketchlist("cat,dog,"), vec!["cat", "dog"]);
        assert!(parse_sketchlist("").is_empty());
    }

    #[test]
    fn names_with_separators_are_invalid() {
        assert!(is_valid_name("cat"));
        assert!(is_valid_name("my cat"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("cat,dog"));
        assert!(!is_valid_name("cat|dog"));
    }

    #[test]
    fn round_trip_preserves_order() {
        let names = vec!["zeta", "alpha", "mid"];
        let request = DeletionRequest::from_selected(names.clone()).unwrap();
        assert_eq!(parse_sketchlist(&request.sketchlist()), names);
    }
}

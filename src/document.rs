//! Minimal page model the carousel drives.
//!
//! The carousel never holds on to elements: it asks a [`Document`] for the
//! current slides and indicators every time it updates, then toggles a class
//! on the handles it got back.

use std::collections::BTreeSet;

/// Opaque handle to an element inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

/// Splits a compound class selector (`.a` or `.a.b`) into its class names.
///
/// Anything else (tag names, combinators, whitespace, empty segments) is
/// not understood and yields `None`.
pub fn parse_class_selector(selector: &str) -> Option<Vec<&str>> {
    let classes: Vec<&str> = selector.strip_prefix('.')?.split('.').collect();
    let valid = |class: &&str| {
        !class.is_empty()
            && class
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    };
    if classes.iter().all(valid) {
        Some(classes)
    } else {
        None
    }
}

pub trait Document {
    /// Returns every element matching `selector`, in document order.
    fn query_selector_all(&self, selector: &str) -> Vec<NodeId>;
    fn add_class(&mut self, node: NodeId, class: &str);
    fn remove_class(&mut self, node: NodeId, class: &str);
    fn has_class(&self, node: NodeId, class: &str) -> bool;
}

#[derive(Debug, Default, Clone)]
struct Element {
    classes: BTreeSet<String>,
    removed: bool,
}

/// Arena-backed [`Document`] supporting `.class` selectors.
///
/// Removed elements keep their slot so outstanding handles never alias a
/// newer element; they simply stop matching queries.
#[derive(Debug, Default, Clone)]
pub struct MemoryDocument {
    elements: Vec<Element>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element carrying the given classes and returns its handle.
    pub fn append<I, S>(&mut self, classes: I) -> NodeId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let classes = classes.into_iter().map(Into::into).collect();
        self.elements.push(Element { classes, removed: false });
        NodeId(self.elements.len() - 1)
    }

    /// Appends `count` elements with the single class `class`.
    pub fn append_many(&mut self, class: &str, count: usize) -> Vec<NodeId> {
        (0..count).map(|_| self.append([class])).collect()
    }

    /// Detaches an element. Returns false if it was already gone.
    pub fn remove(&mut self, node: NodeId) -> bool {
        match self.elements.get_mut(node.0) {
            Some(element) if !element.removed => {
                element.removed = true;
                true
            }
            _ => false,
        }
    }

    /// Live elements carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<NodeId> {
        self.live()
            .filter(|(_, element)| element.classes.contains(class))
            .map(|(id, _)| id)
            .collect()
    }

    fn live(&self) -> impl Iterator<Item = (NodeId, &Element)> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| !element.removed)
            .map(|(i, element)| (NodeId(i), element))
    }

    fn live_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        self.elements.get_mut(node.0).filter(|element| !element.removed)
    }
}

impl Document for MemoryDocument {
    fn query_selector_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(wanted) = parse_class_selector(selector.trim()) else {
            log::trace!("unsupported selector {:?}", selector);
            return Vec::new();
        };

        self.live()
            .filter(|(_, element)| wanted.iter().all(|class| element.classes.contains(*class)))
            .map(|(id, _)| id)
            .collect()
    }

    fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.live_mut(node) {
            element.classes.insert(class.to_string());
        }
    }

    fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(element) = self.live_mut(node) {
            element.classes.remove(class);
        }
    }

    fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.elements
            .get(node.0)
            .is_some_and(|element| !element.removed && element.classes.contains(class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_returns_matches_in_document_order() {
        let mut doc = MemoryDocument::new();
        let a = doc.append(["carousel-item"]);
        let _dot = doc.append(["indicator"]);
        let b = doc.append(["carousel-item", "wide"]);

        assert_eq!(doc.query_selector_all(".carousel-item"), vec![a, b]);
        assert_eq!(doc.query_selector_all(".carousel-item.wide"), vec![b]);
    }

    #[test]
    fn unsupported_selectors_match_nothing() {
        let mut doc = MemoryDocument::new();
        doc.append(["carousel-item"]);

        assert!(doc.query_selector_all("div").is_empty());
        assert!(doc.query_selector_all(".").is_empty());
        assert!(doc.query_selector_all(".carousel-item..x").is_empty());
    }

    #[test]
    fn parses_compound_class_selectors_only() {
        assert_eq!(parse_class_selector(".carousel-item"), Some(vec!["carousel-item"]));
        assert_eq!(parse_class_selector(".a.b_c"), Some(vec!["a", "b_c"]));
        for bad in ["", ".", "a", ".a..b", ".a.", ".a .b", ".a>.b", "div.a", ".a,.b"] {
            assert_eq!(parse_class_selector(bad), None, "{:?}", bad);
        }
    }

    #[test]
    fn removed_elements_stop_matching_and_ignore_mutation() {
        let mut doc = MemoryDocument::new();
        let a = doc.append(["indicator"]);
        let b = doc.append(["indicator"]);

        assert!(doc.remove(a));
        assert!(!doc.remove(a));
        assert_eq!(doc.query_selector_all(".indicator"), vec![b]);

        doc.add_class(a, "active");
        assert!(!doc.has_class(a, "active"));
    }

    #[test]
    fn class_mutation_round_trip() {
        let mut doc = MemoryDocument::new();
        let node = doc.append(["carousel-item"]);

        doc.add_class(node, "active");
        assert!(doc.has_class(node, "active"));
        assert_eq!(doc.with_class("active"), vec![node]);

        doc.remove_class(node, "active");
        assert!(!doc.has_class(node, "active"));
        assert!(doc.with_class("active").is_empty());
    }
}

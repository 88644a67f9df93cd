use indexmap::IndexMap;
use std::fmt;

/// Handle to a node stored in a [`Document`](crate::Document) arena.
///
/// Ids are only meaningful for the document that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in its document's arena.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload of a document node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeData {
    Document,
    Doctype(String),
    Element(ElementData),
    Text(String),
    Comment(String),
}

/// Tag name and attributes of an element.
///
/// Attributes keep their source order so that serialization is stable.
/// The `class` attribute doubles as the element's class list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ElementData {
    pub name: String,
    pub attrs: IndexMap<String, String>,
}

impl ElementData {
    /// Create an element with a lowercase tag name and no attributes.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: IndexMap::new(),
        }
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Set (or overwrite) an attribute value.
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        self.attrs.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        self.attrs.shift_remove(name)
    }

    /// The element's `id` attribute.
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    /// Iterate over the class list.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_ascii_whitespace()
    }

    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Add a class if it is not already present.
    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let mut list: Vec<&str> = self.classes().collect();
        list.push(class);
        let joined = list.join(" ");
        self.set_attr("class", joined);
    }

    /// Remove every occurrence of a class. Drops the attribute once the list is empty.
    pub fn remove_class(&mut self, class: &str) {
        if !self.has_class(class) {
            return;
        }
        let joined = self
            .classes()
            .filter(|c| *c != class)
            .collect::<Vec<_>>()
            .join(" ");
        if joined.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", joined);
        }
    }
}

/// A node in the arena together with its tree links.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
    pub data: NodeData,
}

impl Node {
    pub(crate) fn new(data: NodeData) -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            data,
        }
    }

    #[must_use]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    #[must_use]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(text) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_list_operations() {
        let mut el = ElementData::new("TH");
        assert_eq!(el.name, "th");
        assert!(!el.has_class("a"));

        el.add_class("a");
        el.add_class("b");
        el.add_class("a");
        assert_eq!(el.attr("class"), Some("a b"));

        el.remove_class("a");
        assert_eq!(el.attr("class"), Some("b"));
        el.remove_class("b");
        assert_eq!(el.attr("class"), None);
    }
}

//! Element lookup by tag name and class

use crate::document::Document;
use crate::node::{ElementData, NodeId};

/// An element filter: an optional tag name plus required classes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    tag: Option<String>,
    classes: Vec<String>,
}

impl Selector {
    /// Selector matching elements that carry `class`.
    #[must_use]
    pub fn class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }

    /// Selector matching elements by tag name.
    #[must_use]
    pub fn tag(tag: &str) -> Self {
        Self {
            tag: Some(tag.to_ascii_lowercase()),
            ..Self::default()
        }
    }

    /// Add a class requirement.
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    #[must_use]
    pub fn matches(&self, element: &ElementData) -> bool {
        if self.tag.as_deref().is_some_and(|tag| tag != element.name) {
            return false;
        }
        self.classes.iter().all(|class| element.has_class(class))
    }
}

impl Document {
    /// All descendant elements of `scope` matching `selector`, in tree order.
    #[must_use]
    pub fn select(&self, scope: NodeId, selector: &Selector) -> Vec<NodeId> {
        self.descendants(scope)
            .filter(|id| self.element(*id).is_some_and(|el| selector.matches(el)))
            .collect()
    }

    /// First descendant element of `scope` matching `selector`.
    #[must_use]
    pub fn select_first(&self, scope: NodeId, selector: &Selector) -> Option<NodeId> {
        self.descendants(scope)
            .find(|id| self.element(*id).is_some_and(|el| selector.matches(el)))
    }

    /// Document-wide lookup by `id` attribute.
    #[must_use]
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.descendants(self.root())
            .find(|node| self.element(*node).is_some_and(|el| el.id() == Some(id)))
    }

    /// Document-wide lookup by class.
    #[must_use]
    pub fn elements_by_class(&self, class: &str) -> Vec<NodeId> {
        self.select(self.root(), &Selector::class(class))
    }

    /// Document-wide lookup by tag name.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.select(self.root(), &Selector::tag(tag))
    }
}

//! The document arena and its tree mutation primitives.

use crate::error::{DomError, Result};
use crate::node::{ElementData, Node, NodeData, NodeId};

/// An HTML-like document tree.
///
/// Nodes live in an arena and are addressed by [`NodeId`]. Removing a node
/// only detaches it; the slot stays allocated until the document is dropped,
/// so ids held elsewhere never dangle or get reused.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document holding only the root node.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeData::Document)],
            root: NodeId(0),
        }
    }

    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0)
    }

    pub(crate) fn create_node(&mut self, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(data));
        id
    }

    /// Create a detached element.
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.create_node(NodeData::Element(ElementData::new(name)))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.create_node(NodeData::Text(text.into()))
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Children of a node; empty for unknown ids.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map(Node::children).unwrap_or_default()
    }

    #[must_use]
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(Node::as_element)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.get_mut(id).and_then(Node::as_element_mut)
    }

    /// Lowercase tag name of an element node.
    #[must_use]
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        self.element(id).map(|el| el.name.as_str())
    }

    /// Whether the node is an element with the given tag name.
    #[must_use]
    pub fn is_element_named(&self, id: NodeId, name: &str) -> bool {
        self.tag_name(id).is_some_and(|tag| tag.eq_ignore_ascii_case(name))
    }

    /// Child nodes that are elements, in order.
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.element(*child).is_some())
    }

    #[must_use]
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    #[must_use]
    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id).and_then(|el| el.attr(name))
    }

    /// Whether `ancestor` is `node` or one of its ancestors.
    #[must_use]
    pub fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn check(&self, id: NodeId) -> Result<()> {
        if self.get(id).is_some() {
            Ok(())
        } else {
            Err(DomError::NodeNotFound(id))
        }
    }

    fn check_insertion(&self, parent: NodeId, child: NodeId) -> Result<()> {
        self.check(parent)?;
        self.check(child)?;
        if child == self.root {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "the document root cannot be moved",
            });
        }
        if self.is_inclusive_ancestor(child, parent) {
            return Err(DomError::HierarchyRequest {
                parent,
                child,
                reason: "a node cannot be inserted into itself or a descendant",
            });
        }
        Ok(())
    }

    /// Link a freshly parsed node under its parent without the insertion checks.
    pub(crate) fn attach_parsed(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// Detach a node from its parent. The node and its subtree stay intact.
    pub fn detach(&mut self, id: NodeId) -> Result<()> {
        self.check(id)?;
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|child| *child != id);
        }
        Ok(())
    }

    /// Remove a node from the tree (an alias for [`Document::detach`]).
    pub fn remove(&mut self, id: NodeId) -> Result<()> {
        self.detach(id)
    }

    /// Append `child` as the last child of `parent`, moving it if it is attached elsewhere.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.insert_before(parent, child, None)
    }

    /// Insert `child` before `reference` under `parent` (or append when `reference` is `None`).
    pub fn insert_before(
        &mut self,
        parent: NodeId,
        child: NodeId,
        reference: Option<NodeId>,
    ) -> Result<()> {
        self.check_insertion(parent, child)?;
        if let Some(reference) = reference {
            if reference == child {
                return Ok(());
            }
            if self.parent(reference) != Some(parent) {
                return Err(DomError::NotAChild { parent, reference });
            }
        }

        self.detach(child)?;
        let siblings = &mut self.nodes[parent.0].children;
        let position = reference
            .and_then(|reference| siblings.iter().position(|id| *id == reference))
            .unwrap_or(siblings.len());
        siblings.insert(position, child);
        self.nodes[child.0].parent = Some(parent);
        Ok(())
    }

    /// Put `replacement` where `old` is and detach `old`.
    pub fn replace_with(&mut self, old: NodeId, replacement: NodeId) -> Result<()> {
        self.check(old)?;
        let Some(parent) = self.parent(old) else {
            // A detached node has no position to take over.
            return self.detach(replacement);
        };
        if old == replacement {
            return Ok(());
        }
        self.insert_before(parent, replacement, Some(old))?;
        self.detach(old)
    }

    /// Concatenated text of all descendant text nodes.
    #[must_use]
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        if let Some(text) = self.get(id).and_then(Node::as_text) {
            out.push_str(text);
            return out;
        }
        for node in self.descendants(id) {
            if let Some(text) = self.get(node).and_then(Node::as_text) {
                out.push_str(text);
            }
        }
        out
    }

    /// Pre-order iterator over the descendants of `id` (excluding `id` itself).
    #[must_use]
    pub fn descendants(&self, id: NodeId) -> Descendants<'_> {
        let stack = self.children(id).iter().rev().copied().collect();
        Descendants { doc: self, stack }
    }
}

/// Iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(doc: &mut Document) -> (NodeId, Vec<NodeId>) {
        let ul = doc.create_element("ul");
        let root = doc.root();
        doc.append_child(root, ul).unwrap();
        let items = (0..3)
            .map(|i| {
                let li = doc.create_element("li");
                let text = doc.create_text(format!("item {i}"));
                doc.append_child(li, text).unwrap();
                doc.append_child(ul, li).unwrap();
                li
            })
            .collect();
        (ul, items)
    }

    #[test]
    fn test_append_child_moves_existing_node() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc);

        doc.append_child(ul, items[0]).unwrap();
        assert_eq!(doc.children(ul), &[items[1], items[2], items[0]]);
        assert_eq!(doc.parent(items[0]), Some(ul));
    }

    #[test]
    fn test_insert_before_and_replace() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc);

        doc.insert_before(ul, items[2], Some(items[0])).unwrap();
        assert_eq!(doc.children(ul), &[items[2], items[0], items[1]]);

        let fresh = doc.create_element("li");
        doc.replace_with(items[0], fresh).unwrap();
        assert_eq!(doc.children(ul), &[items[2], fresh, items[1]]);
        assert_eq!(doc.parent(items[0]), None);
    }

    #[test]
    fn test_cannot_insert_into_descendant() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc);

        let err = doc.append_child(items[0], ul).unwrap_err();
        assert!(matches!(err, DomError::HierarchyRequest { .. }));
    }

    #[test]
    fn test_insert_before_requires_child_reference() {
        let mut doc = Document::new();
        let (ul, _) = list(&mut doc);
        let stray = doc.create_element("li");
        let other = doc.create_element("li");

        let err = doc.insert_before(ul, stray, Some(other)).unwrap_err();
        assert!(matches!(err, DomError::NotAChild { .. }));
    }

    #[test]
    fn test_text_content_and_descendants() {
        let mut doc = Document::new();
        let (ul, items) = list(&mut doc);

        assert_eq!(doc.text_content(ul), "item 0item 1item 2");
        let order: Vec<NodeId> = doc
            .descendants(ul)
            .filter(|id| doc.element(*id).is_some())
            .collect();
        assert_eq!(order, items);
    }

    #[test]
    fn test_unknown_node_is_reported() {
        let mut doc = Document::new();
        let err = doc.detach(NodeId(99)).unwrap_err();
        assert!(matches!(err, DomError::NodeNotFound(NodeId(99))));
    }
}

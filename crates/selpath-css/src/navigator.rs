//! Read-only tree access used by the selector builder.
//!
//! The builder never touches a concrete tree type. Anything that can answer
//! the questions in [`SelectorNavigator`] can have selectors synthesized for
//! its elements; [`DomTree`] is the adapter shipped with this workspace.

use std::borrow::Cow;

use selpath_dom::{DomTree, NodeId, NodeType};

/// Navigation capability over a caller-owned document tree.
///
/// Implementations must answer consistently for the duration of one
/// selector build: the tree is assumed not to change mid-walk.
pub trait SelectorNavigator {
    /// Handle to a node of the tree.
    type Node: Copy + Eq;

    /// Whether the node is an element.
    fn is_element(&self, node: Self::Node) -> bool;

    /// The value of the named attribute, or `None` if absent.
    fn attribute(&self, node: Self::Node, name: &str) -> Option<&str>;

    /// [§ 4.9](https://dom.spec.whatwg.org/#dom-element-localname)
    /// The node's local name, `None` for nodes without one.
    fn local_name(&self, node: Self::Node) -> Option<&str>;

    /// [§ 4.4](https://dom.spec.whatwg.org/#dom-node-nodename)
    /// The node's qualified name (`nodeName`).
    fn qualified_name(&self, node: Self::Node) -> Cow<'_, str>;

    /// The node's parent, of any node type.
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Whether the node is the document itself.
    fn is_document_root(&self, node: Self::Node) -> bool;

    /// The node's element children, in tree order.
    fn element_children(&self, node: Self::Node) -> impl Iterator<Item = Self::Node> + '_;
}

impl SelectorNavigator for DomTree {
    type Node = NodeId;

    fn is_element(&self, node: NodeId) -> bool {
        Self::is_element(self, node)
    }

    fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.as_element(node)?.attribute(name)
    }

    fn local_name(&self, node: NodeId) -> Option<&str> {
        self.as_element(node)
            .map(|element| element.local_name.as_str())
            .filter(|name| !name.is_empty())
    }

    fn qualified_name(&self, node: NodeId) -> Cow<'_, str> {
        let Some(n) = self.get(node) else {
            return Cow::Borrowed("");
        };
        match &n.node_type {
            NodeType::Element(element) if element.prefix.is_none() => {
                Cow::Borrowed(element.local_name.as_str())
            }
            NodeType::Element(element) => Cow::Owned(element.qualified_name()),
            NodeType::Document => Cow::Borrowed("#document"),
            NodeType::DocumentFragment => Cow::Borrowed("#document-fragment"),
            NodeType::Text(_) => Cow::Borrowed("#text"),
            NodeType::Comment(_) => Cow::Borrowed("#comment"),
        }
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        Self::parent(self, node)
    }

    fn is_document_root(&self, node: NodeId) -> bool {
        self.is_document(node)
    }

    fn element_children(&self, node: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        Self::element_children(self, node)
    }
}

#[cfg(test)]
mod tests {
    use selpath_dom::{ElementData, Namespace};

    use super::*;

    #[test]
    fn test_qualified_names_follow_node_name() {
        let mut tree = DomTree::new();
        let html = tree
            .append_element(NodeId::ROOT, ElementData::html("html"))
            .unwrap();
        let item = tree
            .append_element(
                html,
                ElementData::new(Namespace::Other("urn:x".to_string()), Some("x"), "item"),
            )
            .unwrap();
        let text = tree.alloc(NodeType::Text("hi".to_string()));
        tree.append_child(html, text);

        assert_eq!(SelectorNavigator::qualified_name(&tree, html), "html");
        assert_eq!(SelectorNavigator::qualified_name(&tree, item), "x:item");
        assert_eq!(SelectorNavigator::qualified_name(&tree, text), "#text");
        assert_eq!(SelectorNavigator::qualified_name(&tree, NodeId::ROOT), "#document");
        assert_eq!(SelectorNavigator::local_name(&tree, item), Some("item"));
        assert_eq!(SelectorNavigator::local_name(&tree, text), None);
    }

    #[test]
    fn test_attribute_lookup_on_non_element() {
        let tree = DomTree::new();
        assert_eq!(SelectorNavigator::attribute(&tree, NodeId::ROOT, "id"), None);
        assert!(SelectorNavigator::is_document_root(&tree, NodeId::ROOT));
    }
}

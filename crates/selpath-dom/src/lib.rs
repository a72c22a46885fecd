//! Document tree for the selpath selector builder.
//!
//! This crate provides an arena-based tree structure following the
//! [DOM Living Standard](https://dom.spec.whatwg.org/), carrying just enough
//! of an element (namespace, prefix, local name, attributes) to synthesize
//! selectors against it.
//!
//! # Design
//!
//! The tree uses arena allocation with [`NodeId`] indices for all relationships,
//! providing O(1) access and traversal without borrow checker issues.

use std::collections::HashMap;

use strum_macros::EnumString;
use thiserror::Error;

/// Map of attribute names to values for an element.
pub type AttributesMap = HashMap<String, String>;

/// A type-safe index into the document tree.
///
/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
/// "Each node has an associated node document..."
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root document node is always at index 0.
    pub const ROOT: Self = Self(0);
}

/// Errors raised by the checked tree mutation methods.
///
/// [§ 4.2.3 Mutation algorithms](https://dom.spec.whatwg.org/#mutation-algorithms)
/// "To ensure pre-insertion validity of a node into a parent before a child..."
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The id does not index a node of this tree.
    #[error("node {0:?} does not exist in this tree")]
    UnknownNode(NodeId),
    /// "If parent is not a Document, DocumentFragment, or Element node,
    /// then throw a HierarchyRequestError."
    #[error("node {0:?} cannot have children")]
    NotAContainer(NodeId),
    /// The child is already attached somewhere; the arena never re-parents.
    #[error("node {0:?} already has a parent")]
    AlreadyAttached(NodeId),
    /// "If node is a host-including inclusive ancestor of parent, then throw
    /// a HierarchyRequestError." Also raised for inserting a document.
    #[error("inserting {child:?} under {parent:?} would break the tree hierarchy")]
    HierarchyRequest {
        /// The would-be parent.
        parent: NodeId,
        /// The rejected child.
        child: NodeId,
    },
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Node is an abstract interface that is used by all nodes in a tree."
#[derive(Debug, Clone)]
pub struct Node {
    /// "Each node has an associated node type"
    pub node_type: NodeType,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-parent)
    /// "An object that participates in a tree has a parent, which is either
    /// null or an object."
    pub parent: Option<NodeId>,

    /// [§ 4.4](https://dom.spec.whatwg.org/#concept-tree-child)
    /// "A node has an associated list of children"
    pub children: Vec<NodeId>,
}

/// [§ 4.4 Interface Node](https://dom.spec.whatwg.org/#interface-node)
///
/// "Each node has an associated node type"
#[derive(Debug, Clone)]
pub enum NodeType {
    /// [§ 4.5 Interface Document](https://dom.spec.whatwg.org/#interface-document)
    Document,
    /// [§ 4.7 Interface DocumentFragment](https://dom.spec.whatwg.org/#interface-documentfragment)
    /// A parent that is neither an element nor the document, e.g. a detached
    /// subtree or a shadow root.
    DocumentFragment,
    /// [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element)
    /// "Element nodes are simply known as elements."
    Element(ElementData),
    /// [§ 4.10 Interface Text](https://dom.spec.whatwg.org/#interface-text)
    Text(String),
    /// [§ 4.7 Interface Comment](https://dom.spec.whatwg.org/#interface-comment)
    Comment(String),
}

impl NodeType {
    /// Whether nodes of this type may have children appended.
    const fn is_container(&self) -> bool {
        matches!(self, Self::Document | Self::DocumentFragment | Self::Element(_))
    }
}

/// [§ 1.6 Namespaces](https://infra.spec.whatwg.org/#namespaces)
///
/// Parsed from a namespace URI; any URI outside the three the HTML parser
/// produces is kept verbatim in [`Namespace::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
pub enum Namespace {
    /// "The HTML namespace is `http://www.w3.org/1999/xhtml`."
    #[strum(serialize = "http://www.w3.org/1999/xhtml")]
    Html,
    /// "The SVG namespace is `http://www.w3.org/2000/svg`."
    #[strum(serialize = "http://www.w3.org/2000/svg")]
    Svg,
    /// "The MathML namespace is `http://www.w3.org/1998/Math/MathML`."
    #[strum(serialize = "http://www.w3.org/1998/Math/MathML")]
    MathMl,
    /// Any other namespace URI.
    #[strum(default)]
    Other(String),
}

/// Element-specific data.
///
/// Per [§ 4.9 Interface Element](https://dom.spec.whatwg.org/#interface-element):
/// "Elements have an associated namespace, namespace prefix, local name, custom element state,
/// custom element definition, is value."
///
/// Custom element state is not modelled.
#[derive(Debug, Clone)]
pub struct ElementData {
    /// "An element's namespace"
    pub namespace: Namespace,
    /// "An element's namespace prefix"
    pub prefix: Option<String>,
    /// "An element's local name"
    pub local_name: String,
    /// "An element has an associated attribute list"
    pub attrs: AttributesMap,
}

impl ElementData {
    /// Create an element with an explicit namespace and prefix.
    #[must_use]
    pub fn new(namespace: Namespace, prefix: Option<&str>, local_name: &str) -> Self {
        Self {
            namespace,
            prefix: prefix.map(str::to_string),
            local_name: local_name.to_string(),
            attrs: AttributesMap::new(),
        }
    }

    /// Create an unprefixed element in the HTML namespace.
    ///
    /// The HTML parser lowercases tag names; callers are expected to pass
    /// them that way.
    #[must_use]
    pub fn html(local_name: &str) -> Self {
        Self::new(Namespace::Html, None, local_name)
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let _ = self.attrs.insert(name.to_string(), value.to_string());
        self
    }

    /// [§ 4.9](https://dom.spec.whatwg.org/#concept-element-qualified-name)
    ///
    /// "An element's qualified name is its local name if its namespace prefix
    /// is null; otherwise its namespace prefix, followed by ":", followed by
    /// its local name."
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}:{}", self.local_name),
            None => self.local_name.clone(),
        }
    }

    /// Returns the value of the named attribute, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns the element's id attribute value if present.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The id attribute specifies its element's unique identifier (ID)."
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.attribute("id")
    }

    /// Returns the class names from the class attribute, in document order.
    ///
    /// Per [§ 3.2.6 Global attributes](https://html.spec.whatwg.org/multipage/dom.html#global-attributes):
    /// "The class attribute, if specified, must have a value that is a set of
    /// space-separated tokens representing the various classes that the element belongs to."
    #[must_use]
    pub fn classes(&self) -> Vec<&str> {
        self.attribute("class")
            .map(|classlist| classlist.split_whitespace().collect())
            .unwrap_or_default()
    }
}

/// Arena-based document tree with O(1) node access and traversal.
///
/// [§ 4 Nodes](https://dom.spec.whatwg.org/#nodes)
///
/// "The DOM represents a document as a tree."
#[derive(Debug, Clone)]
pub struct DomTree {
    /// All nodes in the tree, indexed by `NodeId`.
    /// The Document node is always at index 0 (`NodeId::ROOT`).
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a new tree with just the Document node.
    #[must_use]
    pub fn new() -> Self {
        let document = Node {
            node_type: NodeType::Document,
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![document],
        }
    }

    /// Get a node by its ID.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0)
    }

    /// Get the number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the tree is empty (should always have at least the Document).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Allocate a new node and return its ID.
    /// The node is not yet attached to the tree.
    pub fn alloc(&mut self, node_type: NodeType) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            node_type,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    /// [§ 4.2.2 Append](https://dom.spec.whatwg.org/#concept-node-append)
    ///
    /// "To append a node to a parent, pre-insert node into parent before null."
    ///
    /// Appends `child` as the last child of `parent` without validation.
    ///
    /// # Panics
    ///
    /// Panics if either id is out of bounds. Use [`DomTree::try_append_child`]
    /// for untrusted ids.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    /// [§ 4.2.3 Pre-insert](https://dom.spec.whatwg.org/#concept-node-pre-insert)
    ///
    /// Checked variant of [`DomTree::append_child`].
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if either node is unknown, `parent` cannot hold
    /// children, `child` is already attached, or the insertion would create a
    /// cycle or place a document inside another node.
    pub fn try_append_child(&mut self, parent: NodeId, child: NodeId) -> Result<(), DomError> {
        let parent_node = self.get(parent).ok_or(DomError::UnknownNode(parent))?;
        let child_node = self.get(child).ok_or(DomError::UnknownNode(child))?;

        if !parent_node.node_type.is_container() {
            return Err(DomError::NotAContainer(parent));
        }
        if child_node.parent.is_some() {
            return Err(DomError::AlreadyAttached(child));
        }
        if matches!(child_node.node_type, NodeType::Document)
            || parent == child
            || self.is_descendant_of(parent, child)
        {
            return Err(DomError::HierarchyRequest { parent, child });
        }

        self.append_child(parent, child);
        Ok(())
    }

    /// Allocate an element and append it under `parent` in one step.
    ///
    /// # Errors
    ///
    /// Same as [`DomTree::try_append_child`].
    pub fn append_element(
        &mut self,
        parent: NodeId,
        element: ElementData,
    ) -> Result<NodeId, DomError> {
        let id = self.alloc(NodeType::Element(element));
        self.try_append_child(parent, id)?;
        Ok(id)
    }

    /// Get the parent of a node.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(|n| n.parent)
    }

    /// Get all children of a node.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.get(id).map_or(&[], |n| n.children.as_slice())
    }

    /// [§ 4.2.6 ParentNode](https://dom.spec.whatwg.org/#dom-parentnode-children)
    ///
    /// "The children getter steps are to return an HTMLCollection collection
    /// rooted at this matching only element children."
    pub fn element_children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.children(id)
            .iter()
            .copied()
            .filter(|&child| self.is_element(child))
    }

    /// [§ 4.2.6 Descendant](https://dom.spec.whatwg.org/#concept-tree-descendant)
    ///
    /// Check if `descendant` is a descendant of `ancestor`.
    #[must_use]
    pub fn is_descendant_of(&self, descendant: NodeId, ancestor: NodeId) -> bool {
        self.ancestors(descendant).any(|id| id == ancestor)
    }

    /// Iterate over all ancestors of a node, from parent to root.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> AncestorIterator<'_> {
        AncestorIterator {
            tree: self,
            current: self.parent(id),
        }
    }

    /// Get element data if this node is an element.
    #[must_use]
    pub fn as_element(&self, id: NodeId) -> Option<&ElementData> {
        self.get(id).and_then(|n| match &n.node_type {
            NodeType::Element(data) => Some(data),
            _ => None,
        })
    }

    /// Whether the node exists and is an element.
    #[must_use]
    pub fn is_element(&self, id: NodeId) -> bool {
        self.as_element(id).is_some()
    }

    /// Whether the node is a Document node.
    #[must_use]
    pub fn is_document(&self, id: NodeId) -> bool {
        self.get(id)
            .is_some_and(|n| matches!(n.node_type, NodeType::Document))
    }

    /// [§ 3.1.1 The document element](https://html.spec.whatwg.org/multipage/dom.html#the-html-element-2)
    ///
    /// "The document element of a document is the element whose parent is that
    /// document, if it exists; otherwise null."
    #[must_use]
    pub fn document_element(&self) -> Option<NodeId> {
        self.element_children(NodeId::ROOT).next()
    }

    /// [§ 3.1.3 The body element](https://html.spec.whatwg.org/multipage/dom.html#the-body-element-2)
    ///
    /// "The body element of a document is the first of the html element's children
    /// that is either a body element or a frameset element, or null if there is
    /// no such element."
    #[must_use]
    pub fn body(&self) -> Option<NodeId> {
        let html = self.document_element()?;

        self.element_children(html).find(|&id| {
            self.as_element(id).is_some_and(|e| {
                e.namespace == Namespace::Html
                    && (e.local_name == "body" || e.local_name == "frameset")
            })
        })
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over ancestors of a node.
pub struct AncestorIterator<'a> {
    tree: &'a DomTree,
    current: Option<NodeId>,
}

impl Iterator for AncestorIterator<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.tree.parent(id);
        Some(id)
    }
}

//! A thin wrapper over `roxmltree` that resolves element names against the
//! feed's root namespace.

use crate::error::CatalogError;
use roxmltree::Node;

/// A parsed catalog feed.
///
/// Holds the whole document in memory; every index and mapper built from it
/// borrows nodes out of this value.
pub struct FeedDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> FeedDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, CatalogError> {
        let doc = roxmltree::Document::parse(text)?;
        Ok(Self { doc })
    }

    /// The namespace declared on the document element, if any. All catalog
    /// elements are looked up in this namespace.
    pub fn namespace(&self) -> Namespace<'_> {
        Namespace(self.doc.root_element().tag_name().namespace())
    }

    /// The document node (parent of the document element).
    pub fn root(&self) -> Node<'_, 'input> {
        self.doc.root()
    }

    pub fn text_pos_at(&self, pos: usize) -> roxmltree::TextPos {
        self.doc.text_pos_at(pos)
    }
}

/// The namespace that qualifies every element name in the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespace<'a>(Option<&'a str>);

impl<'a> Namespace<'a> {
    pub fn uri(self) -> Option<&'a str> {
        self.0
    }

    /// True if `node` is an element with the given local name in this namespace.
    pub fn is(self, node: Node<'_, '_>, local: &str) -> bool {
        if !node.is_element() {
            return false;
        }
        let tag = node.tag_name();
        tag.name() == local && tag.namespace() == self.0
    }

    /// First direct child element with the given local name.
    pub fn child<'d, 'input>(
        self,
        node: Node<'d, 'input>,
        local: &str,
    ) -> Option<Node<'d, 'input>> {
        node.children().find(|c| self.is(*c, local))
    }

    /// All descendant elements with the given local name, in document order.
    /// The node itself is not included.
    pub fn descendants<'d, 'input, 'n>(
        self,
        node: Node<'d, 'input>,
        local: &'n str,
    ) -> impl Iterator<Item = Node<'d, 'input>> {
        node.descendants()
            .skip(1)
            .filter(move |n| self.is(*n, local))
    }
}

/// The string-value of an element: all descendant text concatenated.
pub fn text_value(node: Node<'_, '_>) -> String {
    node.descendants()
        .filter(|n| n.is_text())
        .filter_map(|n| n.text())
        .collect()
}

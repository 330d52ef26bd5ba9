//! Reads scalar fields off a single catalog element.

use crate::document::{Namespace, text_value};
use crate::error::CatalogError;
use roxmltree::Node;
use std::str::FromStr;

/// Field accessor bound to one `product` element.
///
/// Every lookup is namespace-qualified and looks only at direct children,
/// except [`FieldReader::custom_attribute`] which searches all descendants.
#[derive(Clone, Copy)]
pub struct FieldReader<'a, 'input> {
    element: Node<'a, 'input>,
    namespace: Namespace<'a>,
    product_id: &'a str,
}

impl<'a, 'input> FieldReader<'a, 'input> {
    pub fn new(element: Node<'a, 'input>, namespace: Namespace<'a>, product_id: &'a str) -> Self {
        Self { element, namespace, product_id }
    }

    /// Text of the named child, `None` when the child is absent.
    /// A present but empty child yields `Some("")`.
    pub fn text(&self, name: &str) -> Option<String> {
        self.namespace.child(self.element, name).map(text_value)
    }

    /// Text of the named child, or `default` when the child is absent.
    pub fn text_or(&self, name: &str, default: &str) -> String {
        self.text(name).unwrap_or_else(|| default.to_string())
    }

    /// Parses the named child as a number. Absent, empty or whitespace-only
    /// values give `T::default()`; anything else must parse.
    pub fn number<T>(&self, name: &str) -> Result<T, CatalogError>
    where
        T: FromStr + Default,
    {
        let Some(raw) = self.text(name) else {
            return Ok(T::default());
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(T::default());
        }
        trimmed.parse().map_err(|_| CatalogError::InvalidNumber {
            product_id: self.product_id.to_string(),
            field: name.to_string(),
            value: raw,
        })
    }

    /// Text of the first descendant `custom-attribute` whose `attribute-id`
    /// equals `attribute_id`.
    pub fn custom_attribute(&self, attribute_id: &str) -> Option<String> {
        self.namespace
            .descendants(self.element, "custom-attribute")
            .find(|attr| attr.attribute("attribute-id") == Some(attribute_id))
            .map(text_value)
    }
}

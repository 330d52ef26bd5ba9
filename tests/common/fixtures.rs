/// Wraps product elements in a namespaced catalog root.
pub fn catalog(products: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<catalog xmlns="urn:test:catalog">
{}
</catalog>"#,
        products.join("\n")
    )
}

/// A parent product listing the given variant ids.
pub fn parent(id: &str, makat: &str, variants: &[&str]) -> String {
    let variants: String = variants
        .iter()
        .map(|v| format!(r#"<variant product-id="{v}"/>"#))
        .collect();
    format!(
        r#"<product product-id="{id}"><makat>{makat}</makat><variations><variants>{variants}</variants></variations></product>"#
    )
}

/// A product element with arbitrary children and no variations.
pub fn product(id: &str, children: &str) -> String {
    format!(r#"<product product-id="{id}">{children}</product>"#)
}

/// A custom attribute element.
pub fn custom_attribute(attribute_id: &str, value: &str) -> String {
    format!(r#"<custom-attribute attribute-id="{attribute_id}">{value}</custom-attribute>"#)
}

mod common;

use admonis_export::{
    CatalogError, CatalogIndex, DEFAULT_SUG_NAME_1, DEFAULT_SUG_NAME_1_TITLE,
    DEFAULT_SUG_NAME_2_TITLE, FeedDocument, PipelineError, ProductMapper, Strictness,
};
use common::fixtures::{catalog, custom_attribute, parent, product};
use common::{TestResult, convert};
use rust_decimal::Decimal;

#[test]
fn two_parents_with_two_and_zero_variants() -> TestResult {
    let xml = catalog(&[
        parent("P1", "MK-1", &["O1", "O2"]),
        parent("P2", "MK-2", &[]),
        product("O1", "<option-makat>O-1</option-makat>"),
        product("O2", "<option-makat>O-2</option-makat>"),
    ]);
    let report = convert(&xml, Strictness::Strict)?;

    assert_eq!(report.products.len(), 2);
    let first = &report.products[0];
    assert_eq!(first.makat.as_deref(), Some("MK-1"));
    assert_eq!(first.options.len(), 2);
    assert_eq!(first.options[0].makat.as_deref(), Some("O-1"));
    assert_eq!(first.options[1].makat.as_deref(), Some("O-2"));
    assert!(first.options.iter().all(|o| o.product_makat == first.makat));
    assert!(report.products[1].options.is_empty());
    Ok(())
}

#[test]
fn product_count_equals_elements_with_variations() -> TestResult {
    let xml = catalog(&[
        parent("A", "a", &[]),
        product("B", "<makat>b</makat>"),
        product("C", "<variations/>"),
        product("D", "<nested><variations/></nested>"),
    ]);
    let report = convert(&xml, Strictness::Strict)?;
    // D only has a nested `variations`, which does not make it a parent.
    assert_eq!(report.products.len(), 2);
    Ok(())
}

#[test]
fn video_link_comes_from_custom_attribute() -> TestResult {
    let with_video = product(
        "V",
        &format!(
            "<variations/><custom-attributes>{}{}</custom-attributes>",
            custom_attribute("f54ProductColor", "Red"),
            custom_attribute("f54ProductVideo", "http://video")
        ),
    );
    let xml = catalog(&[with_video, product("N", "<variations/>")]);
    let report = convert(&xml, Strictness::Strict)?;

    assert_eq!(report.products[0].video_link.as_deref(), Some("http://video"));
    assert_eq!(report.products[1].video_link, None);
    Ok(())
}

#[test]
fn missing_fields_default_without_errors() -> TestResult {
    let xml = catalog(&[
        parent("P", "M", &["O"]),
        product("O", "<price-cost>   </price-cost>"),
    ]);
    let report = convert(&xml, Strictness::Strict)?;
    let product = &report.products[0];

    assert_eq!(product.customer_id, 0);
    assert_eq!(product.price_cost_customer, Decimal::ZERO);
    assert_eq!(product.price_publish, Decimal::ZERO);
    assert_eq!(product.name, None);
    assert_eq!(product.storage_location, None);

    let option = &product.options[0];
    assert_eq!(option.price_cost, Decimal::ZERO);
    assert_eq!(option.price_market, Decimal::ZERO);
    assert_eq!(option.makat, None);
    assert_eq!(option.upc, None);
    assert_eq!(option.sug_name_1, "צבע");
    assert_eq!(option.sug_name_1_title, "בחר צבע");
    assert_eq!(option.sug_name_2_title, "בחר מידה");
    assert_eq!(option.sug_name_1, DEFAULT_SUG_NAME_1);
    assert_eq!(option.sug_name_1_title, DEFAULT_SUG_NAME_1_TITLE);
    assert_eq!(option.sug_name_2_title, DEFAULT_SUG_NAME_2_TITLE);
    Ok(())
}

#[test]
fn option_sug_name_uses_source_text_when_present() -> TestResult {
    let xml = catalog(&[
        parent("P", "M", &["O"]),
        product("O", "<option-sug-name-1>Shade</option-sug-name-1>"),
    ]);
    let report = convert(&xml, Strictness::Strict)?;
    assert_eq!(report.products[0].options[0].sug_name_1, "Shade");
    Ok(())
}

#[test]
fn variant_ids_keep_order_duplicates_and_skip_blanks() -> TestResult {
    let xml = catalog(&[
        parent("P", "M", &["B", "", "A", "B"]),
        product("A", "<option-makat>a</option-makat>"),
        product("B", "<option-makat>b</option-makat>"),
    ]);
    let report = convert(&xml, Strictness::Strict)?;
    let makats: Vec<_> = report.products[0]
        .options
        .iter()
        .map(|o| o.makat.as_deref())
        .collect();
    assert_eq!(makats, [Some("b"), Some("a"), Some("b")]);
    Ok(())
}

#[test]
fn option_elements_can_also_be_parents() -> TestResult {
    let xml = catalog(&[
        parent("P", "M", &["Q"]),
        parent("Q", "N", &[]),
    ]);
    let report = convert(&xml, Strictness::Strict)?;
    assert_eq!(report.products.len(), 2);
    assert_eq!(report.products[0].options[0].product_makat.as_deref(), Some("M"));
    Ok(())
}

#[test]
fn unresolved_variant_policy() -> TestResult {
    let xml = catalog(&[parent("P", "M", &["GHOST", "O"]), product("O", "")]);

    let report = convert(&xml, Strictness::Lenient)?;
    assert_eq!(report.products[0].options.len(), 1);
    assert_eq!(report.unresolved.len(), 1);
    assert_eq!(report.unresolved[0].product_id, "P");
    assert_eq!(report.unresolved[0].variant_id, "GHOST");

    let err = convert(&xml, Strictness::Strict).unwrap_err();
    assert!(matches!(
        err,
        PipelineError::Catalog(CatalogError::UnresolvedVariant { .. })
    ));
    Ok(())
}

#[test]
fn index_contains_last_element_per_id() -> TestResult {
    let xml = catalog(&[
        product("X", "<makat>old</makat>"),
        product("Y", ""),
        product("X", "<makat>new</makat><variations/>"),
        "<product><makat>anonymous</makat></product>".to_string(),
    ]);
    let doc = FeedDocument::parse(&xml)?;
    let index = CatalogIndex::build(&doc, Strictness::Lenient)?;

    assert_eq!(index.len(), 2);
    assert_eq!(index.skipped(), 1);
    let products = ProductMapper::new(&index).get_products()?;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].makat.as_deref(), Some("new"));
    Ok(())
}

#[test]
fn malformed_document_fails_to_convert() {
    let err = convert("<catalog><product>", Strictness::Lenient).unwrap_err();
    assert!(matches!(err, PipelineError::Catalog(CatalogError::Xml(_))));
}

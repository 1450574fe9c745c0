use std::collections::BTreeMap;

use catalog::{ProductOption, ProductStatus, ProductVariant};
use time::macros::datetime;

use super::*;

fn variant(id: &str, size: &str, price: Option<f64>, qty: Option<i64>) -> ProductVariant {
    ProductVariant {
        id: id.to_owned(),
        sku: Some(format!("CT-{id}")),
        price,
        compare_at_price: None,
        image: None,
        inventory_quantity: qty,
        options: BTreeMap::from([("Size".to_owned(), size.to_owned())]),
    }
}

fn piece() -> Product {
    Product {
        id: "p1".to_owned(),
        store_id: None,
        title: "Convergence".to_owned(),
        slug: "convergence".to_owned(),
        price: 1000.0,
        compare_at_price: Some(1500.0),
        images: vec!["https://cdn.test/convergence.jpg".to_owned()],
        status: ProductStatus::Active,
        created_at: datetime!(2024-01-01 00:00:00 UTC),
        description: Some("<p>Enamel on canvas.</p>".to_owned()),
        options: vec![ProductOption { name: "Size".to_owned(), values: vec!["Small".to_owned(), "Large".to_owned()] }],
        variants: vec![
            variant("s", "Small", None, Some(0)),
            variant("l", "Large", Some(1200.0), Some(3)),
        ],
    }
}

fn loaded() -> ProductPageState {
    let mut state = ProductPageState::default();
    state.loaded(Ok(Some(piece())));
    state
}

#[test]
fn default_is_loading_with_quantity_one() {
    let state = ProductPageState::default();
    assert!(state.loading);
    assert!(!state.not_found);
    assert_eq!(state.quantity, 1);
}

#[test]
fn loaded_seeds_first_in_stock_variant() {
    let state = loaded();
    assert!(!state.loading);
    assert_eq!(state.selection.get("Size"), Some("Large"));
    assert!(state.in_stock());
    assert_eq!(state.action_label(), "Acquire Piece");
    assert_eq!(state.edition_label(), "CT-l");
    assert_eq!(state.stock_label(), "3 in stock");
}

#[test]
fn missing_and_failed_fetches_show_not_found() {
    let mut state = ProductPageState::default();
    state.loaded(Ok(None));
    assert!(state.not_found);
    state.start_loading();
    assert!(state.loading && !state.not_found);
    state.loaded(Err(ApiError::Request("offline".into())));
    assert!(state.not_found);
    assert!(!state.loading);
    assert_eq!(state.action_label(), "Currently Unavailable");
}

#[test]
fn sold_out_values_cannot_be_selected() {
    let mut state = loaded();
    assert!(!state.is_value_available("Size", "Small"));
    state.select_option("Size", "Small");
    assert_eq!(state.selection.get("Size"), Some("Large"));
}

#[test]
fn quantity_never_drops_below_one() {
    let mut state = loaded();
    assert!(!state.can_decrement());
    state.decrement();
    assert_eq!(state.quantity, 1);
    state.increment();
    state.increment();
    assert_eq!(state.quantity, 3);
    assert!(state.can_decrement());
    state.set_quantity(0);
    assert_eq!(state.quantity, 1);
}

#[test]
fn price_labels_follow_variant() {
    let state = loaded();
    let money = MoneyFormat::default();
    assert_eq!(state.price_label(&money), "$1,200.00");
    assert_eq!(state.compare_at_label(&money).as_deref(), Some("$1,500.00"));
}

#[test]
fn image_falls_back_to_product_then_placeholder() {
    let mut state = loaded();
    assert_eq!(state.image_src(), "https://cdn.test/convergence.jpg");
    if let Some(product) = state.product.as_mut() {
        product.images.clear();
    }
    assert_eq!(state.image_src(), crate::state::catalog::PLACEHOLDER_IMAGE);
}

#[test]
fn cart_line_uses_matching_variant_and_quantity() {
    let mut state = loaded();
    state.increment();
    let line = state.cart_line().unwrap();
    assert_eq!(line.product_id, "p1");
    assert_eq!(line.variant_id.as_deref(), Some("l"));
    assert_eq!(line.quantity, 2);
}

#[test]
fn no_cart_line_when_sold_out() {
    let mut product = piece();
    for v in &mut product.variants {
        v.inventory_quantity = Some(0);
    }
    let mut state = ProductPageState::default();
    state.loaded(Ok(Some(product)));
    assert!(!state.in_stock());
    assert!(state.cart_line().is_none());
}

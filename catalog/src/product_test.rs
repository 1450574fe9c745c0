use super::*;
use time::macros::datetime;

fn product(id: &str, status: ProductStatus, created_at: OffsetDateTime) -> Product {
    Product {
        id: id.to_owned(),
        store_id: Some("store-1".to_owned()),
        title: format!("Piece {id}"),
        slug: format!("piece-{id}"),
        price: 1200.0,
        compare_at_price: None,
        images: vec![format!("https://cdn.test/{id}.jpg")],
        status,
        created_at,
        description: None,
        options: Vec::new(),
        variants: Vec::new(),
    }
}

#[test]
fn status_parses_known_values_case_insensitively() {
    assert_eq!(ProductStatus::from("active".to_owned()), ProductStatus::Active);
    assert_eq!(ProductStatus::from("Draft".to_owned()), ProductStatus::Draft);
    assert_eq!(ProductStatus::from(" ARCHIVED ".to_owned()), ProductStatus::Archived);
}

#[test]
fn status_keeps_unknown_values() {
    let status = ProductStatus::from("pending_review".to_owned());
    assert_eq!(status, ProductStatus::Other("pending_review".to_owned()));
    assert_eq!(status.as_str(), "pending_review");
    assert!(!status.is_active());
}

#[test]
fn product_deserializes_backend_row() {
    let row = serde_json::json!({
        "id": "p1",
        "store_id": "store-1",
        "title": "Lavender Mist",
        "slug": "lavender-mist",
        "price": 4200.5,
        "images": null,
        "status": "active",
        "created_at": "2024-03-01T12:00:00+00:00",
        "options": null,
        "variants": [
            { "id": "v1", "sku": "LM-1", "options": { "Size": "Large" }, "inventory_quantity": 1 }
        ]
    });
    let product: Product = serde_json::from_value(row).expect("row should parse");
    assert_eq!(product.slug, "lavender-mist");
    assert!(product.images.is_empty());
    assert!(product.options.is_empty());
    assert_eq!(product.variants.len(), 1);
    assert_eq!(product.variants[0].options.get("Size").map(String::as_str), Some("Large"));
    assert_eq!(product.created_at, datetime!(2024-03-01 12:00:00 UTC));
}

#[test]
fn product_serializes_status_as_lowercase_string() {
    let p = product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC));
    let value = serde_json::to_value(&p).expect("serialize");
    assert_eq!(value["status"], "active");
    assert_eq!(value["created_at"], "2024-01-01T00:00:00Z");
}

#[test]
fn primary_image_skips_blank_entries() {
    let mut p = product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC));
    p.images = vec![String::new(), "  ".to_owned(), "https://cdn.test/x.jpg".to_owned()];
    assert_eq!(p.primary_image(), Some("https://cdn.test/x.jpg"));
    p.images.clear();
    assert_eq!(p.primary_image(), None);
}

#[test]
fn route_uses_slug() {
    let p = product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC));
    assert_eq!(p.route(), "/products/piece-a");
    assert_eq!(product_route("blue-poles"), "/products/blue-poles");
}

#[test]
fn query_filters_inactive_and_foreign_store_rows() {
    let query = ProductQuery::active("store-1");
    let mut foreign = product("f", ProductStatus::Active, datetime!(2024-01-05 00:00:00 UTC));
    foreign.store_id = Some("store-2".to_owned());
    let rows = vec![
        product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC)),
        product("d", ProductStatus::Draft, datetime!(2024-01-02 00:00:00 UTC)),
        foreign,
    ];
    let selected = query.apply(rows);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "a");
}

#[test]
fn query_treats_missing_store_id_as_scoped() {
    let query = ProductQuery::active("store-1");
    let mut p = product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC));
    p.store_id = None;
    assert!(query.matches(&p));
}

#[test]
fn query_with_empty_store_id_only_filters_status() {
    let query = ProductQuery::active("");
    let mut p = product("a", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC));
    p.store_id = Some("store-9".to_owned());
    assert!(query.matches(&p));
    p.status = ProductStatus::Archived;
    assert!(!query.matches(&p));
}

#[test]
fn query_orders_newest_first() {
    let query = ProductQuery::active("store-1");
    let rows = vec![
        product("old", ProductStatus::Active, datetime!(2023-06-01 00:00:00 UTC)),
        product("new", ProductStatus::Active, datetime!(2024-06-01 00:00:00 UTC)),
        product("mid", ProductStatus::Active, datetime!(2024-01-01 00:00:00 UTC)),
    ];
    let ids = query
        .apply(rows)
        .into_iter()
        .map(|p| p.id)
        .collect::<Vec<_>>();
    assert_eq!(ids, vec!["new", "mid", "old"]);
}

#[test]
fn rest_params_encode_store_status_and_order() {
    let params = ProductQuery::active("abc").rest_params();
    assert!(params.contains(&("store_id", "eq.abc".to_owned())));
    assert!(params.contains(&("status", "eq.active".to_owned())));
    assert!(params.contains(&("order", "created_at.desc".to_owned())));
}

#[test]
fn collection_defaults_status_to_active() {
    let row = serde_json::json!({ "id": "c1", "name": "Drips" });
    let collection: Collection = serde_json::from_value(row).expect("collection");
    assert!(collection.status.is_active());
    assert!(collection.image.is_none());
}

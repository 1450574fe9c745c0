use super::*;

#[test]
fn product_endpoint_formats_expected_path() {
    assert_eq!(product_endpoint("blue-poles"), "/api/products/blue-poles");
}

#[test]
fn product_endpoint_escapes_reserved_characters() {
    assert_eq!(product_endpoint("no 5/1948"), "/api/products/no%205%2F1948");
    assert_eq!(product_endpoint("autumn?rhythm"), "/api/products/autumn%3Frhythm");
}

#[test]
fn encode_path_segment_escapes_utf8_bytes() {
    assert_eq!(encode_path_segment("niño"), "ni%C3%B1o");
}

#[test]
fn only_404_is_not_found() {
    assert!(is_not_found(404));
    assert!(!is_not_found(500));
    assert!(!is_not_found(200));
}

#[test]
fn api_error_maps_onto_source_error() {
    assert_eq!(SourceError::from(ApiError::Status(502)), SourceError::Status(502));
    assert_eq!(
        SourceError::from(ApiError::Parse("eof".into())),
        SourceError::Parse("eof".into())
    );
    assert_eq!(
        SourceError::from(ApiError::Unavailable),
        SourceError::Request("not available on server".into())
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_fetches_are_unavailable() {
    let result = futures::executor::block_on(fetch_products());
    assert_eq!(result, Err(ApiError::Unavailable));
    let result = futures::executor::block_on(fetch_product("anything"));
    assert_eq!(result, Err(ApiError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_source_surfaces_unavailable_as_request_error() {
    let query = ProductQuery::active("store-1");
    let result = futures::executor::block_on(gallery::source::load_active(&HttpProductSource, &query));
    assert!(matches!(result, Err(SourceError::Request(_))));
}

use crate::category::PlaceCategory;
use crate::client::{LocalSearchClient, RawDocument};
use maru_core::config::SearchConfig;
use maru_core::Place;

// ========== Category Codes ==========

#[test]
fn test_category_codes() {
    assert_eq!(PlaceCategory::RealEstateAgency.code(), "AG2");
    assert_eq!(PlaceCategory::Cafe.code(), "CE7");
    assert_eq!(PlaceCategory::SubwayStation.code(), "SW8");
    assert_eq!(PlaceCategory::Pharmacy.code(), "PM9");
}

#[test]
fn test_category_from_query_ko() {
    assert_eq!(
        PlaceCategory::from_query("이 근처 부동산 어디 있어요?"),
        Some(PlaceCategory::RealEstateAgency)
    );
    assert_eq!(
        PlaceCategory::from_query("약국 찾아줘"),
        Some(PlaceCategory::Pharmacy)
    );
    assert_eq!(
        PlaceCategory::from_query("지하철역까지 얼마나 걸려?"),
        Some(PlaceCategory::SubwayStation)
    );
}

#[test]
fn test_category_from_query_en() {
    assert_eq!(
        PlaceCategory::from_query("best coffee around"),
        Some(PlaceCategory::Cafe)
    );
    assert_eq!(PlaceCategory::from_query("a good GYM"), None);
}

#[test]
fn test_category_from_query_none() {
    assert_eq!(PlaceCategory::from_query("아무거나 추천해줘"), None);
}

#[test]
fn test_category_display_is_code() {
    assert_eq!(PlaceCategory::Mart.to_string(), "MT1");
}

// ========== Document Mapping ==========

#[test]
fn test_raw_document_to_place() {
    let raw: RawDocument = serde_json::from_str(
        r#"{
            "place_name": "마루 공인중개사",
            "address_name": "서울 강남구 역삼동 123",
            "road_address_name": "서울 강남구 테헤란로 1",
            "category_name": "부동산 > 중개업소",
            "phone": "02-555-0000",
            "x": "127.0337",
            "y": "37.4999",
            "distance": "482"
        }"#,
    )
    .unwrap();
    let place = Place::from(raw);
    assert_eq!(place.name, "마루 공인중개사");
    assert_eq!(place.road_address.as_deref(), Some("서울 강남구 테헤란로 1"));
    assert!((place.x - 127.0337).abs() < 1e-9);
    assert_eq!(place.distance_m, Some(482));
}

#[test]
fn test_raw_document_missing_fields() {
    let raw: RawDocument =
        serde_json::from_str(r#"{"place_name": "이름만 있는 곳"}"#).unwrap();
    let place = Place::from(raw);
    assert_eq!(place.name, "이름만 있는 곳");
    assert!(place.road_address.is_none());
    assert!(place.phone.is_none());
    assert_eq!(place.x, 0.0);
    assert_eq!(place.distance_m, None);
}

#[test]
fn test_raw_document_bad_coordinates() {
    let raw: RawDocument = serde_json::from_str(
        r#"{"place_name": "좌표 이상", "x": "not-a-number", "distance": ""}"#,
    )
    .unwrap();
    let place = Place::from(raw);
    assert_eq!(place.x, 0.0);
    assert_eq!(place.distance_m, None);
}

// ========== Client Failure Design ==========

#[tokio::test]
async fn test_missing_api_key_short_circuits() {
    let client = LocalSearchClient::new(&SearchConfig::default()).unwrap();
    // Default config has a blank key: no request is issued at all
    let places = client.search_keyword("카페", Some(PlaceCategory::Cafe), 5).await;
    assert!(places.is_empty());
}

#[tokio::test]
async fn test_unreachable_upstream_returns_empty() {
    let config = SearchConfig {
        base_url: "http://127.0.0.1:1".into(),
        api_key: "test-key".into(),
        timeout_seconds: 1,
        page_size: 5,
    };
    let client = LocalSearchClient::new(&config).unwrap();
    let places = client.search_keyword("카페", None, 5).await;
    assert!(places.is_empty());
}

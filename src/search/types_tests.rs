//! Tests for search types

use super::*;
use proptest::prelude::*;

#[test]
fn test_plain_string_record() {
    let records: Vec<CityRecord> = serde_json::from_str(r#"["Paris", "Parma"]"#).unwrap();
    let cities: Vec<City> = records.into_iter().map(City::from).collect();
    assert_eq!(cities, vec![City::new("Paris"), City::new("Parma")]);
}

#[test]
fn test_object_record_with_extra_fields() {
    let json = r#"[{"name": "Paris", "country": "FR", "score": 42, "lat": "48.85"}]"#;
    let records: Vec<CityRecord> = serde_json::from_str(json).unwrap();
    let city = City::from(records[0].clone());
    assert_eq!(city.name, "Paris");
    assert_eq!(city.country.as_deref(), Some("FR"));
    assert_eq!(city.score, Some(42));
}

#[test]
fn test_object_record_name_only() {
    let records: Vec<CityRecord> = serde_json::from_str(r#"[{"name": "Oslo"}]"#).unwrap();
    assert_eq!(City::from(records[0].clone()), City::new("Oslo"));
}

#[test]
fn test_empty_country_is_dropped() {
    let records: Vec<CityRecord> =
        serde_json::from_str(r#"[{"name": "Oslo", "country": ""}]"#).unwrap();
    assert!(City::from(records[0].clone()).country.is_none());
}

#[test]
fn test_mixed_records() {
    let records: Vec<CityRecord> =
        serde_json::from_str(r#"["Paris", {"name": "Parma", "country": "IT"}]"#).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(City::from(records[1].clone()).country.as_deref(), Some("IT"));
}

#[test]
fn test_object_without_name_is_rejected() {
    let result: Result<Vec<CityRecord>, _> = serde_json::from_str(r#"[{"country": "FR"}]"#);
    assert!(result.is_err());
}

#[test]
fn test_number_record_is_rejected() {
    let result: Result<Vec<CityRecord>, _> = serde_json::from_str("[1, 2]");
    assert!(result.is_err());
}

#[test]
fn test_reference_point_valid() {
    let point = ReferencePoint::new(2.35, 48.85).unwrap();
    assert_eq!(point.lng(), 2.35);
    assert_eq!(point.lat(), 48.85);
}

#[test]
fn test_reference_point_longitude_out_of_range() {
    let err = ReferencePoint::new(180.5, 0.0).unwrap_err();
    assert!(err.to_string().contains("'lng'"));
}

#[test]
fn test_reference_point_latitude_out_of_range() {
    let err = ReferencePoint::new(0.0, -90.1).unwrap_err();
    assert!(err.to_string().contains("'lat'"));
}

#[test]
fn test_reference_point_polar_latitude_is_clamped() {
    let north = ReferencePoint::new(0.0, 90.0).unwrap();
    assert_eq!(north.lat(), 85.051_128_78);
    let south = ReferencePoint::new(0.0, -88.0).unwrap();
    assert_eq!(south.lat(), -85.051_128_78);
}

#[test]
fn test_reference_point_parse() {
    let point = ReferencePoint::parse("13.40, 52.52").unwrap();
    assert_eq!(point.lng(), 13.40);
    assert_eq!(point.lat(), 52.52);
}

#[test]
fn test_reference_point_parse_rejects_garbage() {
    assert!(ReferencePoint::parse("13.40").is_err());
    assert!(ReferencePoint::parse("east,52").is_err());
}

#[test]
fn test_response_accessors() {
    let response = SearchResponse::Failed {
        query: "Par".to_string(),
        request_id: 7,
        error: "boom".to_string(),
    };
    assert_eq!(response.request_id(), 7);
    assert_eq!(response.query(), "Par");
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_reference_point_stays_in_indexed_band(
        lng in -180.0f64..=180.0,
        lat in -90.0f64..=90.0,
    ) {
        let point = ReferencePoint::new(lng, lat).unwrap();
        prop_assert!(point.lat() <= MAX_LAT_INDEXED);
        prop_assert!(point.lat() >= -MAX_LAT_INDEXED);
        prop_assert_eq!(point.lng(), lng);
    }
}

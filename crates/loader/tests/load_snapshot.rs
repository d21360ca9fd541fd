use std::io::Write;

use chrono::NaiveTime;

use checkout_analytics::AggregationEngine;
use checkout_loader::{LoadError, load_from_path};

const DOCUMENT: &str = r#"{
    "name": "scenario",
    "openTime": "09:00",
    "closingTime": "10:00",
    "products": [
        { "code": "1", "description": "A", "price": 2.00 },
        { "code": "2", "description": "B", "price": 3.00 }
    ],
    "customers": [
        { "queuedAt": "09:20", "zipCode": "1000BB",
          "items": [{ "product": "1", "number": 1 }, { "product": "2", "number": 1 }] },
        { "queuedAt": "09:05", "zipCode": "1000AA",
          "items": [{ "product": "1", "number": 2 }] },
        { "queuedAt": "09:10", "zipCode": "1000AA",
          "items": [{ "product": "2", "number": 1 }] }
    ]
}"#;

#[test]
fn loads_document_from_disk_and_answers_queries() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOCUMENT.as_bytes()).unwrap();

    let snapshot = load_from_path(file.path()).unwrap();
    assert_eq!(snapshot.name(), "scenario");
    assert_eq!(snapshot.products().len(), 2);

    let arrivals: Vec<NaiveTime> = snapshot.customers().iter().map(|c| c.queued_at()).collect();
    assert_eq!(
        arrivals,
        vec![
            NaiveTime::from_hms_opt(9, 5, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 10, 0).unwrap(),
            NaiveTime::from_hms_opt(9, 20, 0).unwrap(),
        ]
    );

    let engine = AggregationEngine::new(&snapshot);
    assert_eq!(engine.total_revenue(), 12.00);
    assert_eq!(engine.highest_bill(), 5.00);
    assert_eq!(engine.total_items_sold(), 5);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");

    match load_from_path(&path) {
        Err(LoadError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn closing_before_opening_is_refused() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{ "name": "night", "openTime": "22:00", "closingTime": "06:00" }"#)
        .unwrap();

    let err = load_from_path(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Domain(_)));
    assert!(err.to_string().contains("after closing time"));
}

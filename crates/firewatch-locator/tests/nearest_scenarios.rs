//! End-to-end nearest-station scenarios against the public API.

use firewatch_locator::{
    distance, find_nearest, Candidate, Coordinate, CoordinateField, LocatorError, PointRef,
    StationCatalog, MAX_DISTANCE_KM,
};

fn coord(latitude: f64, longitude: f64) -> Coordinate {
    Coordinate::new(latitude, longitude).unwrap()
}

fn labelled(label: &str, latitude: f64, longitude: f64) -> Candidate<String> {
    Candidate::new(coord(latitude, longitude), label.to_string())
}

#[test]
fn test_bhubaneswar_prefers_cuttack_over_berhampur() {
    let query = coord(20.2961, 85.8245);
    let catalog = vec![
        labelled("A", 20.4766, 85.8756),
        labelled("B", 19.3126, 84.7895),
    ];

    let nearest = find_nearest(query, &catalog).unwrap().unwrap();
    assert_eq!(nearest.payload(), "A");
    assert!((nearest.distance_km - 20.765).abs() < 0.01, "{}", nearest.distance_km);

    let to_b = distance(query, catalog[1].coordinate).unwrap();
    assert!(nearest.distance_km < to_b);
    assert!((to_b - 153.895).abs() < 0.01, "{}", to_b);
}

#[test]
fn test_query_on_catalog_entry_is_zero() {
    let catalog = vec![
        labelled("Baleswar", 21.49499, 86.93787),
        labelled("Berhampur", 19.31256, 84.78953),
    ];
    let nearest = find_nearest(coord(19.31256, 84.78953), &catalog)
        .unwrap()
        .unwrap();
    assert_eq!(nearest.payload(), "Berhampur");
    assert_eq!(format!("{:.3}", nearest.distance_km), "0.000");
}

#[test]
fn test_antipodal_entry() {
    let query = coord(20.2961, 85.8245);
    let antipode = query.antipode();
    let catalog = vec![Candidate::new(antipode, "far side".to_string())];

    let nearest = find_nearest(query, &catalog).unwrap().unwrap();
    assert!((nearest.distance_km - 20015.09).abs() < 0.1, "{}", nearest.distance_km);
    assert!(nearest.distance_km <= MAX_DISTANCE_KM);
}

#[test]
fn test_empty_catalog_is_distinct_from_a_match() {
    let empty: Vec<Candidate<String>> = Vec::new();
    assert!(find_nearest(coord(0.0, 0.0), &empty).unwrap().is_none());

    let same_spot = vec![labelled("here", 0.0, 0.0)];
    let hit = find_nearest(coord(0.0, 0.0), &same_spot).unwrap();
    assert!(hit.is_some());
}

#[test]
fn test_duplicate_coordinates_first_wins_repeatedly() {
    let catalog = vec![
        labelled("Fire Station", 20.33344, 85.80953),
        labelled("Sambalpur Fire Station", 20.33344, 85.80953),
    ];
    let query = coord(20.2961, 85.8245);
    for _ in 0..100 {
        let nearest = find_nearest(query, &catalog).unwrap().unwrap();
        assert_eq!(nearest.index, 0);
        assert_eq!(nearest.payload(), "Fire Station");
    }
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let good = vec![labelled("ok", 20.0, 85.0)];

    let bad_query = Coordinate {
        latitude: 91.0,
        longitude: 85.0,
    };
    assert_eq!(
        find_nearest(bad_query, &good).unwrap_err().point(),
        PointRef::Query
    );

    let nan_candidate = vec![
        labelled("ok", 20.0, 85.0),
        Candidate::new(
            Coordinate {
                latitude: 20.0,
                longitude: f64::NAN,
            },
            "nan".to_string(),
        ),
    ];
    let err = find_nearest(coord(20.0, 85.0), &nan_candidate).unwrap_err();
    let LocatorError::InvalidCoordinate { point, source } = err;
    assert_eq!(point, PointRef::Candidate(1));
    assert_eq!(source.field, CoordinateField::Longitude);
    assert!(source.value.is_nan());
}

#[test]
fn test_concurrent_searches_share_catalog() {
    let catalog = StationCatalog::builtin();
    let queries = [
        (coord(20.2961, 85.8245), "Baramunda Fire Station"),
        (coord(19.3126, 84.7895), "Berhampur Fire Station"),
        (coord(22.2604, 84.8536), "Rourkela Fire Station"),
        (coord(21.4669, 83.9812), "Sambalpur Fire Station"),
    ];

    std::thread::scope(|scope| {
        for (query, expected) in queries {
            let catalog = &catalog;
            scope.spawn(move || {
                for _ in 0..50 {
                    let nearest = find_nearest(query, catalog.stations()).unwrap().unwrap();
                    assert_eq!(nearest.payload().name, expected);
                }
            });
        }
    });
}

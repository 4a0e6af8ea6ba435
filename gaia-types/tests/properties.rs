use approx::{assert_abs_diff_eq, assert_relative_eq};
use gaia_types::geo::{distance, heading, interpolate, offset};
use gaia_types::polygon::contains_position;
use gaia_types::polyline::{decode, encode};
use gaia_types::{
    latlon, Circle, CoordinateBounds, GeoPoint, GeoPoint2d, NewGeoPoint, Polygon, Precision, Shape,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample_points() -> Vec<GeoPoint2d> {
    vec![
        latlon!(37.7749, -122.4194),
        latlon!(-33.8688, 151.2093),
        latlon!(51.5074, -0.1278),
        latlon!(0.0, 0.0),
        latlon!(64.1466, -21.9426),
        latlon!(-54.8019, -68.3030),
    ]
}

#[test]
fn distance_is_symmetric_and_zero_to_self() {
    let points = sample_points();
    for a in &points {
        assert_eq!(distance(a, a), 0.0);
        for b in &points {
            assert_eq!(distance(a, b), distance(b, a));
        }
    }
}

#[test]
fn distance_to_invalid_point_is_infinite() {
    let valid = latlon!(10.0, 20.0);
    for invalid in [
        latlon!(f64::NAN, 0.0),
        latlon!(0.0, f64::NAN),
        latlon!(90.5, 0.0),
        latlon!(0.0, -181.0),
        GeoPoint2d::INVALID,
    ] {
        assert_eq!(distance(&valid, &invalid), f64::INFINITY);
        assert_eq!(invalid.distance_to(&valid), f64::INFINITY);
    }
}

#[test]
fn polyline_round_trip_within_precision() {
    init_logger();

    let points = sample_points();
    for (precision, epsilon) in [(Precision::E5, 1e-5), (Precision::E6, 1e-6)] {
        let decoded = decode(&encode(&points, precision), precision).expect("valid polyline");
        assert_eq!(decoded.len(), points.len());
        for (actual, expected) in decoded.iter().zip(&points) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = epsilon);
        }
    }
}

#[test]
fn corrupt_polyline_decodes_to_none() {
    init_logger();

    let encoded = encode(&sample_points(), Precision::E5);
    for end in 1..encoded.len() {
        let prefix = &encoded[..end];
        if let Some(points) = decode(prefix, Precision::E5) {
            // Only prefixes ending on a point boundary are well formed.
            assert!(points.len() < sample_points().len());
        }
    }

    assert_eq!(decode("_p~iF~ps|U_ulLnnqC_mqNvxq", Precision::E5), None);
    assert_eq!(decode("_p~iF~ps|U_ulLnnqC_mqNvxq`", Precision::E5), None);
    assert_eq!(decode("\n", Precision::E5), None);
}

#[test]
fn google_reference_vector() {
    let path = [
        latlon!(38.5, -120.2),
        latlon!(40.7, -120.95),
        latlon!(43.252, -126.453),
    ];
    let encoded = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

    assert_eq!(encode(&path, Precision::E5), encoded);
    assert_eq!(decode(encoded, Precision::E5), Some(path.to_vec()));
}

#[test]
fn bounds_contain_their_coordinates() {
    let points = sample_points();
    let bounds = CoordinateBounds::from_coordinates(&points);

    assert!(!bounds.crosses_antimeridian());
    for point in &points {
        assert!(bounds.south_west().lat() <= point.lat());
        assert!(point.lat() <= bounds.north_east().lat());
        assert!(bounds.south_west().lon() <= point.lon());
        assert!(point.lon() <= bounds.north_east().lon());
        assert!(bounds.contains(point));
    }
}

#[test]
fn square_contains_center() {
    let square = Polygon::new(vec![
        latlon!(0.0, 0.0),
        latlon!(0.0, 10.0),
        latlon!(10.0, 10.0),
        latlon!(10.0, 0.0),
    ]);

    for geodesic in [true, false] {
        assert!(contains_position(square.vertices(), &latlon!(5.0, 5.0), geodesic));
        assert!(!contains_position(square.vertices(), &latlon!(20.0, 20.0), geodesic));
        assert!(square.contains_position(&latlon!(5.0, 5.0), geodesic));
    }
}

#[test]
fn heading_and_offset_are_inverse() {
    for origin in sample_points() {
        for heading_deg in [10.0, 45.0, 100.0, 180.0, 260.0, 350.0] {
            for meters in [25.0, 1_000.0, 9_500.0] {
                let target = offset(&origin, meters, heading_deg);
                assert_relative_eq!(distance(&origin, &target), meters, max_relative = 1e-3);
                assert_abs_diff_eq!(heading(&origin, &target), heading_deg, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn interpolate_returns_endpoints() {
    let points = sample_points();
    for pair in points.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert_abs_diff_eq!(interpolate(a, b, 0.0), *a, epsilon = 1e-9);
        assert_abs_diff_eq!(interpolate(a, b, 1.0), *b, epsilon = 1e-9);
    }
}

#[test]
fn bounds_of_mixed_shapes() {
    init_logger();

    let polygon = Polygon::from_encoded("_p~iF~ps|U_ulLnnqC_mqNvxq`@", Precision::E5)
        .expect("valid polyline");
    let circle = Circle::new(GeoPoint2d::latlon(45.0, -110.0), 50_000.0);
    let shapes: [&dyn Shape; 2] = [&polygon, &circle];

    let bounds = CoordinateBounds::from_shapes(shapes).expect("shapes have bounds");
    assert!(bounds.contains(&circle.center()));
    for vertex in polygon.vertices() {
        assert!(bounds.contains(vertex));
    }

    assert_eq!(CoordinateBounds::from_shapes(Vec::<&Circle>::new()), None);
}

#[test]
fn bounds_fit_distance_range() {
    let bounds = CoordinateBounds::from_corners(&latlon!(48.80, 2.25), &latlon!(48.90, 2.42));
    let visible = bounds.diagonal_distance();

    let limited = bounds.bound_to_distance(1_000.0, 5_000.0);
    assert_relative_eq!(limited.diagonal_distance(), 5_000.0, max_relative = 1e-3);
    assert!(bounds.contains(&limited.center()));

    let kept = bounds.bound_to_distance(1_000.0, visible * 2.0);
    assert_eq!(kept, bounds);
}

//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{Address, BoundingRegion, Coordinate, Route, RouteStyle, TransportMode};
use proptest::prelude::*;

fn coordinate_strategy() -> impl Strategy<Value = Coordinate> {
    (-90.0f64..=90.0f64, -180.0f64..=180.0f64)
        .prop_map(|(lat, lon)| Coordinate::new(lat, lon).unwrap())
}

fn mode_strategy() -> impl Strategy<Value = TransportMode> {
    prop_oneof![Just(TransportMode::Walking), Just(TransportMode::Driving)]
}

// ============================================================================
// Coordinate Property Tests
// ============================================================================

mod coordinate_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let coord = Coordinate::new(lat, lon);
            prop_assert!(coord.is_ok());

            let coord = coord.unwrap();
            prop_assert!((coord.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((coord.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Coordinate::new(lat, lon).is_err());
        }

        #[test]
        fn distance_is_symmetric(a in coordinate_strategy(), b in coordinate_strategy()) {
            prop_assert!((a.distance_km(&b) - b.distance_km(&a)).abs() < 1e-6);
        }
    }
}

// ============================================================================
// Address Property Tests
// ============================================================================

mod address_tests {
    use super::*;

    proptest! {
        #[test]
        fn whitespace_only_is_rejected(input in "[ \t\r\n]*") {
            prop_assert!(Address::parse(&input).is_err());
        }

        #[test]
        fn non_blank_is_accepted_and_trimmed(
            core in "[A-Za-z0-9][A-Za-z0-9 ,.-]{0,30}[A-Za-z0-9]",
            pad in "[ \t]{0,3}"
        ) {
            let input = format!("{pad}{core}{pad}");
            let address = Address::parse(&input).unwrap();
            prop_assert_eq!(address.as_str(), core.as_str());
        }
    }
}

// ============================================================================
// Route / BoundingRegion Property Tests
// ============================================================================

mod route_tests {
    use super::*;

    proptest! {
        #[test]
        fn bounds_contain_every_point(
            points in prop::collection::vec(coordinate_strategy(), 1..50),
            mode in mode_strategy()
        ) {
            let route = Route::new(mode, points.clone(), 100.0, 60.0).unwrap();
            let bounds = route.bounds();
            prop_assert!(points.iter().all(|p| bounds.contains(p)));
            prop_assert_eq!(route.mode(), mode);
        }

        #[test]
        fn padded_region_contains_original(
            points in prop::collection::vec(coordinate_strategy(), 1..20),
            fraction in 0.0f64..1.0f64
        ) {
            let region = BoundingRegion::from_coordinates(&points).unwrap();
            let padded = region.padded(fraction);
            prop_assert!(padded.contains(&region.south_west()));
            prop_assert!(padded.contains(&region.north_east()));
        }

        #[test]
        fn opposite_modes_never_share_a_stroke(mode in mode_strategy()) {
            let other = match mode {
                TransportMode::Walking => TransportMode::Driving,
                TransportMode::Driving => TransportMode::Walking,
            };
            prop_assert_ne!(
                RouteStyle::for_mode(mode).stroke,
                RouteStyle::for_mode(other).stroke
            );
        }
    }
}

use unihelp_core::models::Coordinate;

/// Mean Earth radius in meters, matching the backend's convention
const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Great-circle distance between two points in whole meters
///
/// Either side absent means "no distance info" and maps to 0 so that records
/// without a location fix sort first instead of failing. Non-finite
/// intermediate results (garbage coordinates) collapse to 0 as well.
pub fn distance_meters(a: Option<&Coordinate>, b: Option<&Coordinate>) -> f64 {
    let (a, b) = match (a, b) {
        (Some(a), Some(b)) => (a, b),
        _ => return 0.0,
    };

    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let delta_phi = (b.latitude - a.latitude).to_radians();
    let delta_lambda = (b.longitude - a.longitude).to_radians();

    let h = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    let meters = (EARTH_RADIUS_METERS * c).round();
    if meters.is_finite() {
        meters
    } else {
        0.0
    }
}

/// Human-readable distance label: meters below 1 km, one-decimal km above
pub fn format_distance(meters: f64) -> String {
    if meters < 1000.0 {
        format!("{}m", meters as i64)
    } else {
        format!("{:.1}km", meters / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude)
    }

    #[test]
    fn test_distance_is_symmetric() {
        let seoul = coord(37.5665, 126.978);
        let busan = coord(35.1796, 129.0756);

        assert_eq!(
            distance_meters(Some(&seoul), Some(&busan)),
            distance_meters(Some(&busan), Some(&seoul))
        );
    }

    #[test]
    fn test_missing_side_maps_to_zero() {
        let seoul = coord(37.5665, 126.978);

        assert_eq!(distance_meters(None, Some(&seoul)), 0.0);
        assert_eq!(distance_meters(Some(&seoul), None), 0.0);
        assert_eq!(distance_meters(None, None), 0.0);
    }

    #[test]
    fn test_identical_points_are_zero_apart() {
        let p = coord(37.5665, 126.978);
        assert_eq!(distance_meters(Some(&p), Some(&p)), 0.0);
    }

    #[test]
    fn test_known_distance_seoul_to_busan() {
        let seoul = coord(37.5665, 126.978);
        let busan = coord(35.1796, 129.0756);

        let d = distance_meters(Some(&seoul), Some(&busan));
        // ~325 km as the crow flies
        assert!((320_000.0..330_000.0).contains(&d), "got {}", d);
    }

    #[test]
    fn test_garbage_coordinates_collapse_to_zero() {
        let bad = coord(f64::NAN, 126.978);
        let good = coord(37.5665, 126.978);

        assert_eq!(distance_meters(Some(&bad), Some(&good)), 0.0);
    }

    #[test]
    fn test_format_boundaries() {
        assert_eq!(format_distance(999.0), "999m");
        assert_eq!(format_distance(1000.0), "1.0km");
        assert_eq!(format_distance(1500.0), "1.5km");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_distance(0.0), "0m");
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn arb_coord() -> impl Strategy<Value = Coordinate> {
            (-90.0f64..90.0, -180.0f64..180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
        }

        proptest! {
            #[test]
            fn distance_is_symmetric(a in arb_coord(), b in arb_coord()) {
                prop_assert_eq!(
                    distance_meters(Some(&a), Some(&b)),
                    distance_meters(Some(&b), Some(&a))
                );
            }

            #[test]
            fn distance_is_non_negative_and_finite(a in arb_coord(), b in arb_coord()) {
                let d = distance_meters(Some(&a), Some(&b));
                prop_assert!(d >= 0.0);
                prop_assert!(d.is_finite());
            }

            #[test]
            fn distance_to_self_is_zero(a in arb_coord()) {
                prop_assert_eq!(distance_meters(Some(&a), Some(&a)), 0.0);
            }

            #[test]
            fn distance_is_whole_meters(a in arb_coord(), b in arb_coord()) {
                let d = distance_meters(Some(&a), Some(&b));
                prop_assert_eq!(d, d.round());
            }
        }
    }
}

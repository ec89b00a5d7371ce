use crate::geo::distance_meters;
use crate::geo::models::{Coordinate, Region, Span};

#[test]
fn distance_to_itself_is_zero() {
    let tokyo = Coordinate::new(35.6812, 139.7671);
    assert_eq!(distance_meters(tokyo, tokyo), 0.0);
}

#[test]
fn one_degree_of_latitude_is_about_111_km() {
    let distance = distance_meters(Coordinate::new(0.0, 0.0), Coordinate::new(1.0, 0.0));
    assert!((distance - 111_195.0).abs() < 10.0, "got {distance}");
}

#[test]
fn region_around_uses_default_span() {
    let region = Region::around(Coordinate::new(35.0, 139.0));
    assert_eq!(
        region.span,
        Span {
            latitude_delta: 0.1,
            longitude_delta: 0.1,
        }
    );
    assert!((region.min_latitude() - 34.95).abs() < 1e-9);
    assert!((region.max_longitude() - 139.05).abs() < 1e-9);
}

//! Geographic primitives shared by the boundary engine and the map canvas.
//!
//! Coordinates are plain (latitude, longitude) pairs in degrees. Derived
//! geometry deliberately uses flat-earth approximations: areas come from the
//! planar shoelace formula scaled by a fixed meters-per-degree constant, and
//! the "center" of a polygon is the midpoint of its axis-aligned bounding
//! box. Both match the behavior the rest of the application was built
//! around; they degrade for large or high-latitude regions.

use bevy::prelude::Vec2;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG, METERS_PER_DEGREE, MIN_BOUNDARY_VERTICES,
    WORLD_UNITS_PER_DEGREE,
};

/// One geographic coordinate: latitude and longitude in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Both components are finite (no NaN/infinity from the view layer)
    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lng.is_finite()
    }
}

/// Axis-aligned bounding box over a set of geographic points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    /// Compute the bounds of a point set. Returns `None` for an empty set.
    pub fn of(points: &[GeoPoint]) -> Option<Self> {
        let first = points.first()?;
        let mut bounds = Self {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };
        for p in &points[1..] {
            bounds.min_lat = bounds.min_lat.min(p.lat);
            bounds.max_lat = bounds.max_lat.max(p.lat);
            bounds.min_lng = bounds.min_lng.min(p.lng);
            bounds.max_lng = bounds.max_lng.max(p.lng);
        }
        Some(bounds)
    }

    /// Midpoint of the bounding box extremes. This is the cheap centroid
    /// stand-in used for saved boundaries, not the polygon's area centroid.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lng + self.max_lng) / 2.0,
        )
    }
}

/// Planar polygon area in square meters via the shoelace formula.
///
/// The vertex sequence is treated as (x = longitude, y = latitude) and the
/// raw square-degree area is scaled by [`METERS_PER_DEGREE`] squared.
/// Returns 0.0 for fewer than three vertices.
pub fn polygon_area(points: &[GeoPoint]) -> f64 {
    if points.len() < MIN_BOUNDARY_VERTICES {
        return 0.0;
    }

    let mut sum = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        sum += points[i].lng * points[j].lat;
        sum -= points[j].lng * points[i].lat;
    }
    (sum / 2.0).abs() * METERS_PER_DEGREE * METERS_PER_DEGREE
}

/// Ray-casting point-in-polygon test.
///
/// The polygon is the vertex sequence with an implicit closing edge from the
/// last vertex back to the first. Degenerate polygons (< 3 vertices) contain
/// nothing.
pub fn point_in_polygon(point: GeoPoint, polygon: &[GeoPoint]) -> bool {
    if polygon.len() < MIN_BOUNDARY_VERTICES {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (pi, pj) = (polygon[i], polygon[j]);
        if (pi.lat > point.lat) != (pj.lat > point.lat)
            && point.lng < (pj.lng - pi.lng) * (point.lat - pi.lat) / (pj.lat - pi.lat) + pi.lng
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Project a geographic coordinate onto the canvas (equirectangular,
/// anchored at the default map center so f32 world coordinates stay small).
pub fn geo_to_world(point: GeoPoint) -> Vec2 {
    Vec2::new(
        ((point.lng - DEFAULT_CENTER_LNG) * WORLD_UNITS_PER_DEGREE) as f32,
        ((point.lat - DEFAULT_CENTER_LAT) * WORLD_UNITS_PER_DEGREE) as f32,
    )
}

/// Inverse of [`geo_to_world`].
pub fn world_to_geo(pos: Vec2) -> GeoPoint {
    GeoPoint::new(
        DEFAULT_CENTER_LAT + pos.y as f64 / WORLD_UNITS_PER_DEGREE,
        DEFAULT_CENTER_LNG + pos.x as f64 / WORLD_UNITS_PER_DEGREE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(lat: f64, lng: f64) -> GeoPoint {
        GeoPoint::new(lat, lng)
    }

    fn unit_square() -> Vec<GeoPoint> {
        vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 1.0), p(1.0, 0.0)]
    }

    // polygon_area tests

    #[test]
    fn test_area_unit_square() {
        // 1 deg^2 * 111000^2 = 12,321,000,000 m^2
        assert_eq!(polygon_area(&unit_square()), 12_321_000_000.0);
    }

    #[test]
    fn test_area_below_three_vertices_is_zero() {
        assert_eq!(polygon_area(&[]), 0.0);
        assert_eq!(polygon_area(&[p(1.0, 1.0)]), 0.0);
        assert_eq!(polygon_area(&[p(1.0, 1.0), p(2.0, 2.0)]), 0.0);
    }

    #[test]
    fn test_area_invariant_under_rotation() {
        let square = unit_square();
        let expected = polygon_area(&square);
        for shift in 1..square.len() {
            let mut rotated = square.clone();
            rotated.rotate_left(shift);
            assert_eq!(polygon_area(&rotated), expected, "rotation by {}", shift);
        }
    }

    #[test]
    fn test_area_invariant_under_reversal() {
        let mut reversed = unit_square();
        reversed.reverse();
        assert_eq!(polygon_area(&reversed), polygon_area(&unit_square()));
    }

    #[test]
    fn test_area_triangle() {
        // Right triangle with legs of 1 degree: 0.5 deg^2
        let tri = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0)];
        assert_eq!(polygon_area(&tri), 0.5 * 111_000.0 * 111_000.0);
    }

    #[test]
    fn test_area_degenerate_collinear_is_zero() {
        let line = vec![p(0.0, 0.0), p(0.0, 1.0), p(0.0, 2.0)];
        assert_eq!(polygon_area(&line), 0.0);
    }

    // GeoBounds tests

    #[test]
    fn test_bounds_of_empty_is_none() {
        assert!(GeoBounds::of(&[]).is_none());
    }

    #[test]
    fn test_bounds_center_is_bbox_midpoint() {
        let quad = vec![p(10.0, 10.0), p(10.0, 20.0), p(20.0, 20.0), p(20.0, 10.0)];
        let bounds = GeoBounds::of(&quad).unwrap();
        assert_eq!(bounds.center(), p(15.0, 15.0));
    }

    #[test]
    fn test_bounds_center_not_polygon_centroid() {
        // An L-ish point set: the bbox midpoint ignores the shape entirely
        let points = vec![p(0.0, 0.0), p(0.0, 4.0), p(1.0, 4.0), p(1.0, 0.0)];
        let bounds = GeoBounds::of(&points).unwrap();
        assert_eq!(bounds.center(), p(0.5, 2.0));
    }

    #[test]
    fn test_bounds_single_point() {
        let bounds = GeoBounds::of(&[p(3.0, 7.0)]).unwrap();
        assert_eq!(bounds.center(), p(3.0, 7.0));
    }

    // point_in_polygon tests

    #[test]
    fn test_point_inside_square() {
        assert!(point_in_polygon(p(0.5, 0.5), &unit_square()));
    }

    #[test]
    fn test_point_outside_square() {
        assert!(!point_in_polygon(p(1.5, 0.5), &unit_square()));
        assert!(!point_in_polygon(p(-0.5, 0.5), &unit_square()));
        assert!(!point_in_polygon(p(0.5, 2.0), &unit_square()));
    }

    #[test]
    fn test_point_in_degenerate_polygon() {
        assert!(!point_in_polygon(p(0.0, 0.0), &[]));
        assert!(!point_in_polygon(p(0.0, 0.0), &[p(0.0, 0.0), p(1.0, 1.0)]));
    }

    #[test]
    fn test_point_in_concave_polygon() {
        // U shape opening upward; the notch center is outside
        let u = vec![
            p(0.0, 0.0),
            p(0.0, 3.0),
            p(2.0, 3.0),
            p(2.0, 2.0),
            p(1.0, 2.0),
            p(1.0, 1.0),
            p(2.0, 1.0),
            p(2.0, 0.0),
        ];
        assert!(point_in_polygon(p(0.5, 1.5), &u));
        assert!(!point_in_polygon(p(1.5, 1.5), &u));
    }

    // projection tests

    #[test]
    fn test_projection_center_maps_to_origin() {
        let center = p(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG);
        assert_eq!(geo_to_world(center), Vec2::ZERO);
    }

    #[test]
    fn test_projection_round_trip() {
        let original = p(33.69, 73.05);
        let back = world_to_geo(geo_to_world(original));
        // f32 world coordinates cost some precision; a fraction of a meter here
        assert!((back.lat - original.lat).abs() < 1e-5);
        assert!((back.lng - original.lng).abs() < 1e-5);
    }

    #[test]
    fn test_projection_axes() {
        // East is +x, north is +y
        let east = geo_to_world(p(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG + 0.01));
        let north = geo_to_world(p(DEFAULT_CENTER_LAT + 0.01, DEFAULT_CENTER_LNG));
        assert!(east.x > 0.0 && east.y.abs() < 1e-3);
        assert!(north.y > 0.0 && north.x.abs() < 1e-3);
    }

    #[test]
    fn test_is_finite() {
        assert!(p(1.0, 2.0).is_finite());
        assert!(!p(f64::NAN, 2.0).is_finite());
        assert!(!p(1.0, f64::INFINITY).is_finite());
    }
}

#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn point_approx_eq(a: Point, b: Point) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y)
}

// --- Point ---

#[test]
fn point_new() {
    let p = Point::new(3.0, 4.0);
    assert_eq!(p.x, 3.0);
    assert_eq!(p.y, 4.0);
}

#[test]
fn point_copy() {
    let p = Point::new(1.0, 2.0);
    let q = p;
    assert!(point_approx_eq(p, q));
}

#[test]
fn point_equality() {
    assert_eq!(Point::new(1.0, 2.0), Point::new(1.0, 2.0));
    assert_ne!(Point::new(1.0, 2.0), Point::new(1.0, 3.0));
}

// --- Mapping defaults ---

#[test]
fn mapping_default_is_identity() {
    let map = Mapping::default();
    assert_eq!(map.rect_left, 0.0);
    assert_eq!(map.rect_top, 0.0);
    assert_eq!(map.scale_x, 1.0);
    assert_eq!(map.scale_y, 1.0);
}

// --- Mapping construction ---

#[test]
fn mapping_one_to_one_display() {
    let map = Mapping::new(400, 200, 0.0, 0.0, 400.0, 200.0);
    assert!(approx_eq(map.scale_x, 1.0));
    assert!(approx_eq(map.scale_y, 1.0));
}

#[test]
fn mapping_double_size_display_halves_scale() {
    let map = Mapping::new(400, 200, 0.0, 0.0, 800.0, 400.0);
    assert!(approx_eq(map.scale_x, 0.5));
    assert!(approx_eq(map.scale_y, 0.5));
}

#[test]
fn mapping_half_size_display_doubles_scale() {
    let map = Mapping::new(400, 200, 0.0, 0.0, 200.0, 100.0);
    assert!(approx_eq(map.scale_x, 2.0));
    assert!(approx_eq(map.scale_y, 2.0));
}

#[test]
fn mapping_axes_scale_independently() {
    let map = Mapping::new(400, 200, 0.0, 0.0, 800.0, 200.0);
    assert!(approx_eq(map.scale_x, 0.5));
    assert!(approx_eq(map.scale_y, 1.0));
}

#[test]
fn mapping_zero_displayed_extent_falls_back_to_identity_scale() {
    let map = Mapping::new(400, 200, 10.0, 20.0, 0.0, 0.0);
    assert!(approx_eq(map.scale_x, 1.0));
    assert!(approx_eq(map.scale_y, 1.0));
}

// --- to_surface ---

#[test]
fn to_surface_identity() {
    let map = Mapping::new(400, 200, 0.0, 0.0, 400.0, 200.0);
    let p = map.to_surface(Point::new(50.0, 75.0));
    assert!(point_approx_eq(p, Point::new(50.0, 75.0)));
}

#[test]
fn to_surface_subtracts_rect_origin() {
    let map = Mapping::new(400, 200, 100.0, 50.0, 400.0, 200.0);
    let p = map.to_surface(Point::new(100.0, 50.0));
    assert!(point_approx_eq(p, Point::new(0.0, 0.0)));
}

#[test]
fn to_surface_applies_scale_after_offset() {
    // Rect at (10, 10), displayed at half the pixel size: scale is 2.
    let map = Mapping::new(400, 200, 10.0, 10.0, 200.0, 100.0);
    let p = map.to_surface(Point::new(110.0, 60.0));
    assert!(point_approx_eq(p, Point::new(200.0, 100.0)));
}

#[test]
fn to_surface_displayed_corner_maps_to_pixel_corner() {
    let map = Mapping::new(400, 200, 30.0, 40.0, 800.0, 400.0);
    let p = map.to_surface(Point::new(30.0 + 800.0, 40.0 + 400.0));
    assert!(point_approx_eq(p, Point::new(400.0, 200.0)));
}

#[test]
fn to_surface_scale_invariant_across_display_sizes() {
    // The same relative pointer path must land on the same surface pixels
    // whether the canvas is displayed at 1x or 2x.
    let at_1x = Mapping::new(400, 200, 0.0, 0.0, 400.0, 200.0);
    let at_2x = Mapping::new(400, 200, 0.0, 0.0, 800.0, 400.0);

    for (fx, fy) in [(0.0, 0.0), (0.25, 0.5), (0.5, 0.1), (1.0, 1.0)] {
        let p1 = at_1x.to_surface(Point::new(fx * 400.0, fy * 200.0));
        let p2 = at_2x.to_surface(Point::new(fx * 800.0, fy * 400.0));
        assert!(point_approx_eq(p1, p2), "diverged at fraction ({fx}, {fy})");
    }
}

#[test]
fn to_surface_fractional_display_size() {
    let map = Mapping::new(400, 200, 13.5, 7.25, 333.0, 111.0);
    let p = map.to_surface(Point::new(13.5, 7.25));
    assert!(point_approx_eq(p, Point::new(0.0, 0.0)));
}

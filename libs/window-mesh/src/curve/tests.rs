//! # Curve Conversion Tests
//!
//! Checks for CurveData::to_mesh across fill modes and extrusion settings.

use super::*;
use approx::assert_abs_diff_eq;
use glam::DVec2;

fn pointed_loop() -> BezierSpline {
    BezierSpline::new(
        vec![
            BezierPoint::new(DVec2::new(-1.0, 0.0), HandleType::Vector),
            BezierPoint::new(DVec2::new(-1.0, 1.0), HandleType::AutoClamped),
            BezierPoint::new(DVec2::new(0.0, 2.0), HandleType::Vector),
            BezierPoint::new(DVec2::new(1.0, 1.0), HandleType::AutoClamped),
            BezierPoint::new(DVec2::new(1.0, 0.0), HandleType::Vector),
        ],
        true,
    )
}

/// Triangles in one cap of the tessellated loop.
fn cap_triangles() -> usize {
    let profile = Polygon2D::new(pointed_loop().tessellate(CURVE_RESOLUTION_U)).to_ccw();
    triangulate_polygon(&profile.outer).unwrap().len()
}

fn curve(extrude: f64, fill_mode: FillMode) -> CurveData {
    let mut data = CurveData {
        extrude,
        fill_mode,
        ..CurveData::new()
    };
    data.add_spline(pointed_loop());
    data
}

#[test]
fn test_extruded_curve_bounds() {
    let mesh = curve(0.5, FillMode::Both).to_mesh().unwrap();
    let (min, max) = mesh.bounding_box();
    assert_abs_diff_eq!(min.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(min.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(min.z, -0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(max.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.y, 2.0, epsilon = 1e-12);
    assert_abs_diff_eq!(max.z, 0.5, epsilon = 1e-12);
}

#[test]
fn test_extruded_curve_is_closed_solid() {
    let mesh = curve(0.5, FillMode::Both).to_mesh().unwrap();
    let samples = pointed_loop().tessellate(CURVE_RESOLUTION_U);
    let n = samples.len();
    // Side quads plus two caps
    assert_eq!(mesh.vertex_count(), 2 * n);
    assert_eq!(mesh.triangle_count(), 2 * n + 2 * cap_triangles());
    assert!(cap_triangles() <= n - 2);
    assert!(mesh.validate());
}

#[test]
fn test_fill_modes_select_caps() {
    let both = curve(0.5, FillMode::Both).to_mesh().unwrap();
    let front = curve(0.5, FillMode::Front).to_mesh().unwrap();
    let none = curve(0.5, FillMode::None).to_mesh().unwrap();
    let n = pointed_loop().tessellate(CURVE_RESOLUTION_U).len();
    assert_eq!(none.triangle_count(), 2 * n);
    assert_eq!(front.triangle_count(), 2 * n + cap_triangles());
    assert_eq!(both.triangle_count(), 2 * n + 2 * cap_triangles());
}

#[test]
fn test_flat_curve_fills_profile() {
    let mesh = curve(0.0, FillMode::Both).to_mesh().unwrap();
    assert_eq!(mesh.triangle_count(), cap_triangles());
    assert!(mesh.validate());
    let (min, max) = mesh.bounding_box();
    assert_eq!(min.z, 0.0);
    assert_eq!(max.z, 0.0);
}

#[test]
fn test_bevel_is_unsupported() {
    let mut data = curve(0.5, FillMode::Both);
    data.bevel_depth = 0.1;
    assert!(matches!(data.to_mesh(), Err(MeshError::Unsupported { .. })));
}

#[test]
fn test_open_spline_is_unsupported() {
    let mut data = curve(0.5, FillMode::Both);
    data.splines[0].set_cyclic(false);
    assert!(matches!(data.to_mesh(), Err(MeshError::Unsupported { .. })));
}

#[test]
fn test_negative_extrude_is_degenerate() {
    let data = curve(-1.0, FillMode::Both);
    assert!(matches!(data.to_mesh(), Err(MeshError::DegenerateGeometry { .. })));
}

#[test]
fn test_empty_curve_gives_empty_mesh() {
    assert!(CurveData::new().to_mesh().unwrap().is_empty());
}

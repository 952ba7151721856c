//! Polygon triangulation utilities
//!
//! Wrapper around earcutr for filling closed 2D profiles.

use crate::error::MeshError;
use crate::mesh::is_sliver;
use config::constants::approx_zero;
use glam::DVec2;

/// Signed area of a closed polygon (positive when counter-clockwise).
///
/// # Example
///
/// ```rust
/// use window_mesh::triangulation::signed_area;
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert_eq!(signed_area(&square), 1.0);
/// ```
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

/// Check if a polygon is convex (all turns have the same sign)
fn is_convex(points: &[DVec2]) -> bool {
    let n = points.len();
    let mut sign = 0.0f64;

    for i in 0..n {
        let p0 = points[i];
        let p1 = points[(i + 1) % n];
        let p2 = points[(i + 2) % n];
        let (e0, e1) = (p1 - p0, p2 - p1);
        let scale = e0.length() * e1.length();
        if scale == 0.0 {
            continue;
        }
        // Sine of the turn angle
        let cross = e0.perp_dot(e1) / scale;

        if !approx_zero(cross) {
            if sign == 0.0 {
                sign = cross.signum();
            } else if sign != cross.signum() {
                return false;
            }
        }
    }

    true
}

/// Triangulate a simple polygon (no holes).
///
/// Returns triangles as index triples into `points`, each wound
/// counter-clockwise regardless of the input orientation. Sliver ears, as
/// produced around collinear samples, are dropped; they cover no area.
///
/// # Example
///
/// ```rust
/// use window_mesh::triangulation::triangulate_polygon;
/// use glam::DVec2;
///
/// let l_shape = [
///     DVec2::new(0.0, 0.0),
///     DVec2::new(2.0, 0.0),
///     DVec2::new(2.0, 1.0),
///     DVec2::new(1.0, 1.0),
///     DVec2::new(1.0, 2.0),
///     DVec2::new(0.0, 2.0),
/// ];
/// let triangles = triangulate_polygon(&l_shape).unwrap();
/// assert_eq!(triangles.len(), 4);
/// ```
pub fn triangulate_polygon(points: &[DVec2]) -> Result<Vec<[usize; 3]>, MeshError> {
    let n = points.len();

    if n < 3 {
        return Err(MeshError::triangulation(
            "Need at least 3 points to triangulate",
        ));
    }

    let indices = if is_convex(points) {
        // Fan from the first vertex
        (1..n - 1).flat_map(|i| [0, i, i + 1]).collect()
    } else {
        let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        earcutr::earcut(&flat, &[], 2)
            .map_err(|e| MeshError::triangulation(format!("{:?}", e)))?
    };

    let triangles: Vec<[usize; 3]> = indices
        .chunks_exact(3)
        .filter(|tri| {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| points[i].extend(0.0));
            !is_sliver(a, b, c)
        })
        .map(|tri| {
            let [a, b, c] = [tri[0], tri[1], tri[2]];
            if (points[b] - points[a]).perp_dot(points[c] - points[a]) < 0.0 {
                [a, c, b]
            } else {
                [a, b, c]
            }
        })
        .collect();

    if triangles.is_empty() {
        return Err(MeshError::triangulation("Polygon has no area"));
    }

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area_of(points: &[DVec2], triangles: &[[usize; 3]]) -> f64 {
        triangles
            .iter()
            .map(|t| 0.5 * (points[t[1]] - points[t[0]]).perp_dot(points[t[2]] - points[t[0]]))
            .sum()
    }

    #[test]
    fn test_signed_area_orientation() {
        let ccw = [DVec2::ZERO, DVec2::X, DVec2::Y];
        let cw = [DVec2::ZERO, DVec2::Y, DVec2::X];
        assert!(signed_area(&ccw) > 0.0);
        assert!(signed_area(&cw) < 0.0);
    }

    #[test]
    fn test_triangle_passthrough() {
        let points = [DVec2::ZERO, DVec2::X, DVec2::Y];
        assert_eq!(triangulate_polygon(&points).unwrap(), vec![[0, 1, 2]]);
    }

    #[test]
    fn test_clockwise_input_is_rewound() {
        let points = [DVec2::ZERO, DVec2::Y, DVec2::ONE, DVec2::X];
        let triangles = triangulate_polygon(&points).unwrap();
        assert_eq!(triangles.len(), 2);
        for t in &triangles {
            assert!((points[t[1]] - points[t[0]]).perp_dot(points[t[2]] - points[t[0]]) > 0.0);
        }
    }

    #[test]
    fn test_concave_area_preserved() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(0.0, 4.0),
        ];
        let triangles = triangulate_polygon(&points).unwrap();
        assert_eq!(triangles.len(), 3);
        let expected = signed_area(&points).abs();
        assert!((area_of(&points, &triangles) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_collinear_samples_leave_no_slivers() {
        // Concave outline with a sample exactly midway along one edge
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(3.0, 2.5),
            DVec2::new(2.0, 1.0),
            DVec2::new(0.0, 4.0),
        ];
        let triangles = triangulate_polygon(&points).unwrap();
        for t in &triangles {
            let [a, b, c] = t.map(|i| points[i].extend(0.0));
            assert!(!is_sliver(a, b, c), "sliver {:?}", t);
        }
        let expected = signed_area(&points).abs();
        assert!((area_of(&points, &triangles) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_tiny_concave_polygon_uses_ear_clipping() {
        let points: Vec<DVec2> = [
            DVec2::new(0.0, 0.0),
            DVec2::new(4.0, 0.0),
            DVec2::new(4.0, 4.0),
            DVec2::new(2.0, 1.0),
            DVec2::new(0.0, 4.0),
        ]
        .iter()
        .map(|p| *p * 1e-6)
        .collect();
        let triangles = triangulate_polygon(&points).unwrap();
        let expected = signed_area(&points).abs();
        assert!((area_of(&points, &triangles) - expected).abs() < expected * 1e-9);
        for t in &triangles {
            assert!((points[t[1]] - points[t[0]]).perp_dot(points[t[2]] - points[t[0]]) > 0.0);
        }
    }

    #[test]
    fn test_too_few_points() {
        assert!(triangulate_polygon(&[DVec2::ZERO, DVec2::X]).is_err());
    }
}

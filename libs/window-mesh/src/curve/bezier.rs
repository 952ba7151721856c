//! # Bezier Splines
//!
//! Cubic Bezier splines with per-side handle types. Handles of `Vector`,
//! `Auto` and `AutoClamped` points are recomputed from the neighbouring
//! control points whenever the spline is built or edited.

use config::constants::{approx_zero, AUTO_HANDLE_DIVISOR, VECTOR_HANDLE_FRACTION};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// How a handle position is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleType {
    /// Kept exactly where it was placed
    Free,
    /// Points a third of the way to the neighbour (sharp corner)
    Vector,
    /// Smooth tangent from both neighbours
    Auto,
    /// Smooth tangent that never overshoots its neighbours on any axis
    AutoClamped,
}

/// A control point and its two handles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierPoint {
    pub co: DVec2,
    pub handle_left: DVec2,
    pub handle_right: DVec2,
    pub handle_left_type: HandleType,
    pub handle_right_type: HandleType,
}

impl BezierPoint {
    /// Creates a point whose handles share one type.
    pub fn new(co: DVec2, handle_type: HandleType) -> Self {
        Self::with_handle_types(co, handle_type, handle_type)
    }

    /// Creates a point with independent left/right handle types.
    pub fn with_handle_types(co: DVec2, left: HandleType, right: HandleType) -> Self {
        Self {
            co,
            handle_left: co,
            handle_right: co,
            handle_left_type: left,
            handle_right_type: right,
        }
    }
}

/// A cubic Bezier spline, optionally closed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierSpline {
    points: Vec<BezierPoint>,
    cyclic: bool,
}

impl BezierSpline {
    /// Creates a spline and derives its automatic handles.
    ///
    /// # Example
    ///
    /// ```rust
    /// use window_mesh::curve::{BezierPoint, BezierSpline, HandleType};
    /// use glam::DVec2;
    ///
    /// let spline = BezierSpline::new(
    ///     vec![
    ///         BezierPoint::new(DVec2::ZERO, HandleType::Vector),
    ///         BezierPoint::new(DVec2::new(3.0, 0.0), HandleType::Vector),
    ///     ],
    ///     false,
    /// );
    /// assert_eq!(spline.points()[0].handle_right, DVec2::new(1.0, 0.0));
    /// ```
    pub fn new(points: Vec<BezierPoint>, cyclic: bool) -> Self {
        let mut spline = Self { points, cyclic };
        spline.recalculate_handles();
        spline
    }

    /// Control points in order.
    pub fn points(&self) -> &[BezierPoint] {
        &self.points
    }

    /// Whether the last point connects back to the first.
    pub fn is_cyclic(&self) -> bool {
        self.cyclic
    }

    /// Opens or closes the spline, re-deriving handles.
    pub fn set_cyclic(&mut self, cyclic: bool) {
        self.cyclic = cyclic;
        self.recalculate_handles();
    }

    /// Number of cubic segments.
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.cyclic => n,
            n => n - 1,
        }
    }

    /// Recomputes every non-free handle from its neighbours.
    pub fn recalculate_handles(&mut self) {
        let n = self.points.len();
        if n < 2 {
            return;
        }

        let solved: Vec<(DVec2, DVec2)> = (0..n)
            .map(|i| {
                let (prev, next) = self.neighbours(i);
                solve_handles(&self.points[i], prev, next)
            })
            .collect();

        for (point, (left, right)) in self.points.iter_mut().zip(solved) {
            point.handle_left = left;
            point.handle_right = right;
        }
    }

    /// Neighbouring positions, mirrored across the point at open ends.
    fn neighbours(&self, i: usize) -> (DVec2, DVec2) {
        let n = self.points.len();
        let co = self.points[i].co;
        let prev = if i > 0 {
            Some(self.points[i - 1].co)
        } else if self.cyclic {
            Some(self.points[n - 1].co)
        } else {
            None
        };
        let next = if i + 1 < n {
            Some(self.points[i + 1].co)
        } else if self.cyclic {
            Some(self.points[0].co)
        } else {
            None
        };

        match (prev, next) {
            (Some(p), Some(q)) => (p, q),
            (None, Some(q)) => (co * 2.0 - q, q),
            (Some(p), None) => (p, co * 2.0 - p),
            (None, None) => (co, co),
        }
    }

    /// The four control points of segment `index`.
    pub fn segment(&self, index: usize) -> [DVec2; 4] {
        let a = &self.points[index];
        let b = &self.points[(index + 1) % self.points.len()];
        [a.co, a.handle_right, b.handle_left, b.co]
    }

    /// Evaluates segment `index` at `t` in `[0, 1]`.
    pub fn evaluate(&self, index: usize, t: f64) -> DVec2 {
        let [p0, p1, p2, p3] = self.segment(index);
        let u = 1.0 - t;
        p0 * (u * u * u) + p1 * (3.0 * u * u * t) + p2 * (3.0 * u * t * t) + p3 * (t * t * t)
    }

    /// True when both handles of a segment lie on its chord.
    pub fn is_segment_straight(&self, index: usize) -> bool {
        let [p0, p1, p2, p3] = self.segment(index);
        let chord = p3 - p0;
        let length = chord.length();
        if approx_zero(length) {
            return true;
        }
        // Handle distance from the chord, relative to segments longer than 1
        let off_chord = |p: DVec2| (p - p0).perp_dot(chord) / (length * length.max(1.0));
        approx_zero(off_chord(p1)) && approx_zero(off_chord(p2))
    }

    /// Samples the spline into a polyline.
    ///
    /// Each segment contributes its start point, plus `resolution - 1`
    /// interior samples when it is curved. Open splines also emit their
    /// final point.
    pub fn tessellate(&self, resolution: u32) -> Vec<DVec2> {
        let resolution = resolution.max(1);
        let mut samples = Vec::new();

        for index in 0..self.segment_count() {
            samples.push(self.points[index].co);
            if self.is_segment_straight(index) {
                continue;
            }
            for step in 1..resolution {
                samples.push(self.evaluate(index, step as f64 / resolution as f64));
            }
        }

        if !self.cyclic {
            if let Some(last) = self.points.last() {
                samples.push(last.co);
            }
        }

        samples
    }
}

/// Derives the (left, right) handles of one point.
fn solve_handles(point: &BezierPoint, prev: DVec2, next: DVec2) -> (DVec2, DVec2) {
    let co = point.co;
    let to_prev = prev - co;
    let to_next = next - co;

    let smooth = smooth_handles(co, to_prev, to_next, point);

    let left = match point.handle_left_type {
        HandleType::Free => point.handle_left,
        HandleType::Vector => co + to_prev * VECTOR_HANDLE_FRACTION,
        HandleType::Auto | HandleType::AutoClamped => smooth.map_or(co + to_prev * VECTOR_HANDLE_FRACTION, |s| s.0),
    };
    let right = match point.handle_right_type {
        HandleType::Free => point.handle_right,
        HandleType::Vector => co + to_next * VECTOR_HANDLE_FRACTION,
        HandleType::Auto | HandleType::AutoClamped => smooth.map_or(co + to_next * VECTOR_HANDLE_FRACTION, |s| s.1),
    };

    (left, right)
}

/// Shared tangent for smooth handle types, `None` when no tangent exists
/// (coincident neighbours or a cusp).
fn smooth_handles(co: DVec2, to_prev: DVec2, to_next: DVec2, point: &BezierPoint) -> Option<(DVec2, DVec2)> {
    let len_prev = to_prev.length();
    let len_next = to_next.length();
    if approx_zero(len_prev) || approx_zero(len_next) {
        return None;
    }

    let clamped = point.handle_left_type == HandleType::AutoClamped
        || point.handle_right_type == HandleType::AutoClamped;

    let incoming = -to_prev;
    let mut tangent = incoming / len_prev + to_next / len_next;

    if clamped {
        // Flatten every axis on which the point is a local extremum
        if incoming.x * to_next.x <= 0.0 {
            tangent.x = 0.0;
        }
        if incoming.y * to_next.y <= 0.0 {
            tangent.y = 0.0;
        }
    }

    let tangent = tangent.try_normalize()?;

    let mut left_len = len_prev / AUTO_HANDLE_DIVISOR;
    let mut right_len = len_next / AUTO_HANDLE_DIVISOR;
    if clamped {
        left_len = clamp_to_neighbour(tangent, left_len, to_prev);
        right_len = clamp_to_neighbour(tangent, right_len, to_next);
    }

    Some((co - tangent * left_len, co + tangent * right_len))
}

/// Shortens a handle so it never passes its neighbour on any axis.
fn clamp_to_neighbour(tangent: DVec2, length: f64, offset: DVec2) -> f64 {
    let mut length = length;
    for axis in 0..2 {
        let component = tangent[axis].abs();
        if !approx_zero(component) {
            length = length.min(offset[axis].abs() / component);
        }
    }
    length
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corner(x: f64, y: f64) -> BezierPoint {
        BezierPoint::new(DVec2::new(x, y), HandleType::Vector)
    }

    #[test]
    fn test_vector_handles_point_at_neighbours() {
        let spline = BezierSpline::new(vec![corner(0.0, 0.0), corner(3.0, 0.0), corner(3.0, 3.0)], false);
        let mid = spline.points()[1];
        assert_eq!(mid.handle_left, DVec2::new(2.0, 0.0));
        assert_eq!(mid.handle_right, DVec2::new(3.0, 1.0));
    }

    #[test]
    fn test_segment_count() {
        let open = BezierSpline::new(vec![corner(0.0, 0.0), corner(1.0, 0.0), corner(1.0, 1.0)], false);
        assert_eq!(open.segment_count(), 2);
        let mut closed = open.clone();
        closed.set_cyclic(true);
        assert_eq!(closed.segment_count(), 3);
    }

    #[test]
    fn test_vector_segments_are_straight() {
        let spline = BezierSpline::new(vec![corner(0.0, 0.0), corner(2.0, 0.0), corner(1.0, 2.0)], true);
        assert!((0..3).all(|i| spline.is_segment_straight(i)));
        assert_eq!(spline.tessellate(12).len(), 3);
    }

    #[test]
    fn test_auto_handles_are_collinear() {
        let spline = BezierSpline::new(
            vec![
                corner(0.0, 0.0),
                BezierPoint::new(DVec2::new(1.0, 1.0), HandleType::Auto),
                corner(2.0, 0.0),
            ],
            false,
        );
        let p = spline.points()[1];
        let left = p.handle_left - p.co;
        let right = p.handle_right - p.co;
        assert!(left.perp_dot(right).abs() < 1e-12);
        assert!(left.dot(right) < 0.0);
        // Peak of a symmetric hump has a horizontal tangent
        assert!(left.y.abs() < 1e-12);
    }

    #[test]
    fn test_auto_clamped_flattens_extremum_axis() {
        // Point is the minimum x of its neighbours, so its tangent is vertical
        let spline = BezierSpline::new(
            vec![
                corner(-1.0, 0.0),
                BezierPoint::new(DVec2::new(-1.0, 2.0), HandleType::AutoClamped),
                corner(0.0, 3.0),
            ],
            false,
        );
        let p = spline.points()[1];
        assert_eq!(p.handle_left.x, -1.0);
        assert_eq!(p.handle_right.x, -1.0);
        assert!(p.handle_right.y <= 3.0);
        assert!(p.handle_left.y >= 0.0);
    }

    #[test]
    fn test_auto_clamped_never_overshoots() {
        // Wide, shallow rise: an unclamped handle would climb past the peak
        let spline = BezierSpline::new(
            vec![
                corner(-10.0, 0.0),
                BezierPoint::new(DVec2::new(-10.0, 0.6), HandleType::AutoClamped),
                corner(0.0, 1.0),
            ],
            false,
        );
        for sample in spline.tessellate(32) {
            assert!(sample.y <= 1.0 + 1e-12);
            assert!(sample.x >= -10.0 - 1e-12);
        }
    }

    #[test]
    fn test_free_handles_untouched() {
        let mut free = BezierPoint::new(DVec2::ZERO, HandleType::Free);
        free.handle_right = DVec2::new(0.5, 0.5);
        let spline = BezierSpline::new(vec![free, corner(1.0, 0.0)], false);
        assert_eq!(spline.points()[0].handle_right, DVec2::new(0.5, 0.5));
    }

    #[test]
    fn test_evaluate_endpoints() {
        let spline = BezierSpline::new(
            vec![
                corner(0.0, 0.0),
                BezierPoint::new(DVec2::new(1.0, 1.0), HandleType::Auto),
                corner(2.0, 0.0),
            ],
            false,
        );
        assert_eq!(spline.evaluate(0, 0.0), DVec2::ZERO);
        assert!((spline.evaluate(0, 1.0) - DVec2::ONE).length() < 1e-12);
    }

    #[test]
    fn test_tessellate_curved_open_spline() {
        let spline = BezierSpline::new(
            vec![
                corner(0.0, 0.0),
                BezierPoint::new(DVec2::new(1.0, 1.0), HandleType::Auto),
                corner(2.0, 0.0),
            ],
            false,
        );
        // 2 curved segments * 4 samples + final point
        assert_eq!(spline.tessellate(4).len(), 9);
    }
}

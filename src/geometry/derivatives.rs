//! Erste Ableitung quadratischer und kubischer Bézier-Kurven.
//!
//! Das Ergebnis ist ein Richtungsvektor (Geschwindigkeit), keine Position.

use glam::Vec2;

use crate::core::Point;

/// B'(t) = -2(1-t)·P0 + 2(1-2t)·P1 + 2t·P2
#[inline]
pub fn quadratic_bezier_derivative(p0: Point, p1: Point, p2: Point, t: f32) -> Vec2 {
    -2.0 * (1.0 - t) * p0 + 2.0 * (1.0 - 2.0 * t) * p1 + 2.0 * t * p2
}

/// B'(t) = -3(1-t)²·P0 + 3(1-t)(1-3t)·P1 + 3t(2-3t)·P2 + 3t²·P3
#[inline]
pub fn cubic_bezier_derivative(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Vec2 {
    let inv = 1.0 - t;
    -3.0 * inv * inv * p0
        + 3.0 * inv * (1.0 - 3.0 * t) * p1
        + 3.0 * t * (2.0 - 3.0 * t) * p2
        + 3.0 * t * t * p3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::interpolation::{cubic_bezier, quadratic_bezier};

    fn central_difference(f: impl Fn(f32) -> Point, t: f32) -> Vec2 {
        let h = 1e-3;
        (f(t + h) - f(t - h)) / (2.0 * h)
    }

    #[test]
    fn quadratic_derivative_at_endpoints_points_to_control() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(5.0, 10.0);
        let p2 = Point::new(10.0, 0.0);

        assert_eq!(quadratic_bezier_derivative(p0, p1, p2, 0.0), 2.0 * (p1 - p0));
        assert_eq!(quadratic_bezier_derivative(p0, p1, p2, 1.0), 2.0 * (p2 - p1));
    }

    #[test]
    fn cubic_derivative_at_endpoints_points_to_controls() {
        let p0 = Point::new(0.0, 0.0);
        let p1 = Point::new(3.0, 10.0);
        let p2 = Point::new(7.0, 10.0);
        let p3 = Point::new(10.0, 0.0);

        assert_eq!(cubic_bezier_derivative(p0, p1, p2, p3, 0.0), 3.0 * (p1 - p0));
        assert_eq!(cubic_bezier_derivative(p0, p1, p2, p3, 1.0), 3.0 * (p3 - p2));
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let p0 = Point::new(1.0, 2.0);
        let p1 = Point::new(4.0, 9.0);
        let p2 = Point::new(8.0, -3.0);
        let p3 = Point::new(12.0, 5.0);

        for t in [0.1, 0.35, 0.5, 0.8] {
            let quad = quadratic_bezier_derivative(p0, p1, p2, t);
            let quad_fd = central_difference(|s| quadratic_bezier(p0, p1, p2, s), t);
            assert!((quad - quad_fd).length() < 0.05, "quad t={t}: {quad} vs {quad_fd}");

            let cubic = cubic_bezier_derivative(p0, p1, p2, p3, t);
            let cubic_fd = central_difference(|s| cubic_bezier(p0, p1, p2, p3, s), t);
            assert!((cubic - cubic_fd).length() < 0.05, "cubic t={t}: {cubic} vs {cubic_fd}");
        }
    }
}

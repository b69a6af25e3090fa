//! Bogenlänge: schnelle Polylinien-Schätzung und genaue adaptive Integration.

use crate::core::{distance_f64, Path, PathElement, PathSegment, Point};
use crate::error::IntegrationError;

use super::derivatives::{cubic_bezier_derivative, quadratic_bezier_derivative};
use super::quadrature::{integrate, QuadratureOptions};

/// Anzahl Teilstrecken der schnellen Längenschätzung (21 Stützstellen).
pub const QUICK_LENGTH_DIVISIONS: usize = 20;

/// Schnelle Länge eines Segments als Summe der Abstände zwischen
/// `QUICK_LENGTH_DIVISIONS + 1` gleichverteilten Stützstellen.
///
/// `MoveTo` hat die Länge 0, `Close` misst den Rückweg zum Subpfad-Start.
pub fn quick_length(segment: &PathSegment) -> f64 {
    match segment.element {
        PathElement::MoveTo(_) => 0.0,
        PathElement::Line(end) => distance_f64(segment.start, end),
        PathElement::Close => distance_f64(segment.start, segment.subpath_start),
        PathElement::Quad { .. } | PathElement::Cubic { .. } => {
            let mut length = 0.0;
            let mut previous = segment.start;
            for i in 1..=QUICK_LENGTH_DIVISIONS {
                let t = i as f32 / QUICK_LENGTH_DIVISIONS as f32;
                let p = segment.point_at(t);
                length += distance_f64(previous, p);
                previous = p;
            }
            length
        }
    }
}

/// Schnelle Längen aller Elemente, 1:1 zur Elementfolge.
pub fn quick_lengths(path: &Path) -> Vec<f64> {
    path.segments().map(|segment| quick_length(&segment)).collect()
}

/// Summe aller schnellen Elementlängen.
pub fn quick_total_length(path: &Path) -> f64 {
    path.segments().map(|segment| quick_length(&segment)).sum()
}

/// Genaue Länge einer quadratischen Bézier über `[from, to]`.
pub fn quadratic_bezier_length(
    p0: Point,
    p1: Point,
    p2: Point,
    from: f32,
    to: f32,
    options: &QuadratureOptions,
) -> Result<f64, IntegrationError> {
    let speed = |t: f64| f64::from(quadratic_bezier_derivative(p0, p1, p2, t as f32).length());
    integrate(speed, f64::from(from), f64::from(to), options).map(|r| r.integral)
}

/// Genaue Länge einer kubischen Bézier über `[from, to]`.
pub fn cubic_bezier_length(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    from: f32,
    to: f32,
    options: &QuadratureOptions,
) -> Result<f64, IntegrationError> {
    let speed = |t: f64| f64::from(cubic_bezier_derivative(p0, p1, p2, p3, t as f32).length());
    integrate(speed, f64::from(from), f64::from(to), options).map(|r| r.integral)
}

/// Genaue Länge eines Segments über `[from, to]`.
///
/// Linien und `Close` sind exakt (Sehnenanteil), `MoveTo` hat die Länge 0.
/// Nur Kurven laufen durch die Integration und können fehlschlagen.
pub fn accurate_length(
    segment: &PathSegment,
    from: f32,
    to: f32,
    options: &QuadratureOptions,
) -> Result<f64, IntegrationError> {
    let span = f64::from(to - from);
    match segment.element {
        PathElement::MoveTo(_) => Ok(0.0),
        PathElement::Line(end) => Ok(distance_f64(segment.start, end) * span),
        PathElement::Close => Ok(distance_f64(segment.start, segment.subpath_start) * span),
        PathElement::Quad { end, control } => {
            quadratic_bezier_length(segment.start, control, end, from, to, options)
        }
        PathElement::Cubic {
            end,
            control1,
            control2,
        } => cubic_bezier_length(segment.start, control1, control2, end, from, to, options),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment(start: Point, element: PathElement) -> PathSegment {
        PathSegment {
            start,
            subpath_start: Point::ZERO,
            element,
        }
    }

    #[test]
    fn quick_lengths_align_with_elements() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(3.0, 4.0)),
            PathElement::Line(Point::new(3.0, 0.0)),
            PathElement::Close,
        ]);

        let lengths = quick_lengths(&path);
        assert_eq!(lengths.len(), 4);
        assert_eq!(lengths[0], 0.0);
        assert_relative_eq!(lengths[1], 5.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[2], 4.0, epsilon = 1e-9);
        assert_relative_eq!(lengths[3], 3.0, epsilon = 1e-9);
        assert_relative_eq!(quick_total_length(&path), 12.0, epsilon = 1e-9);
    }

    #[test]
    fn quick_length_of_straight_quad_matches_chord() {
        let quad = segment(
            Point::ZERO,
            PathElement::Quad {
                end: Point::new(10.0, 0.0),
                control: Point::new(5.0, 0.0),
            },
        );

        assert_relative_eq!(quick_length(&quad), 10.0, epsilon = 1e-4);
    }

    #[test]
    fn quick_length_underestimates_curves_slightly() {
        let cubic = segment(
            Point::ZERO,
            PathElement::Cubic {
                end: Point::new(100.0, 0.0),
                control1: Point::new(0.0, 100.0),
                control2: Point::new(100.0, 100.0),
            },
        );

        let quick = quick_length(&cubic);
        let accurate = accurate_length(&cubic, 0.0, 1.0, &QuadratureOptions::default())
            .expect("glatte Kurve muss konvergieren");

        assert!(quick <= accurate + 1e-3);
        assert_relative_eq!(quick, accurate, max_relative = 1e-2);
    }

    #[test]
    fn accurate_length_of_degenerate_quad_is_chord() {
        let length = quadratic_bezier_length(
            Point::new(0.0, 0.0),
            Point::new(5.0, 5.0),
            Point::new(10.0, 10.0),
            0.0,
            1.0,
            &QuadratureOptions::default(),
        )
        .expect("Gerade muss konvergieren");

        assert_relative_eq!(length, 200f64.sqrt(), epsilon = 1e-2);
    }

    #[test]
    fn accurate_length_respects_sub_range() {
        let line = segment(Point::ZERO, PathElement::Line(Point::new(10.0, 0.0)));
        let options = QuadratureOptions::default();

        assert_relative_eq!(
            accurate_length(&line, 0.25, 0.75, &options).expect("Linie"),
            5.0,
            epsilon = 1e-6
        );

        let quad = segment(
            Point::ZERO,
            PathElement::Quad {
                end: Point::new(10.0, 0.0),
                control: Point::new(5.0, 0.0),
            },
        );
        assert_relative_eq!(
            accurate_length(&quad, 0.0, 0.5, &options).expect("Quad"),
            5.0,
            epsilon = 1e-2
        );
    }

    #[test]
    fn move_to_has_no_length() {
        let m = segment(Point::new(4.0, 4.0), PathElement::MoveTo(Point::new(9.0, 9.0)));

        assert_eq!(quick_length(&m), 0.0);
        assert_eq!(
            accurate_length(&m, 0.0, 1.0, &QuadratureOptions::default()),
            Ok(0.0)
        );
    }
}

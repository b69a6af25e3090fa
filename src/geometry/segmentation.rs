//! Segmentierung: Teilkurve über `[from, to]` als neue Kurve gleichen Grades.
//!
//! Quadratisch und kubisch über die Matrixform der Bézier-Kurve:
//! `P' = C⁻¹ · R(s, f) · C · P`, wobei `C` die Bernstein→Potenzbasis-Matrix und
//! `R` die Umparametrisierung `t → s + (f - s)·t` in der Potenzbasis ist.
//! `C⁻¹` ist fest und als Konstante hinterlegt.
//!
//! Vorbedingung (nicht geprüft): `0 ≤ from < to ≤ 1`.

use glam::{Mat3, Mat4, Vec3, Vec4};

use crate::core::{PathElement, PathSegment, Point};

use super::interpolation::linear_interpolation;

// glam-Matrizen sind spaltenweise; die Kommentare zeigen die Zeilen.

/// Zeilen: [1 0 0] [-2 2 0] [1 -2 1]
const QUAD_COEFFICIENTS: Mat3 = Mat3::from_cols(
    Vec3::new(1.0, -2.0, 1.0),
    Vec3::new(0.0, 2.0, -2.0),
    Vec3::new(0.0, 0.0, 1.0),
);

/// Zeilen: [1 0 0] [1 ½ 0] [1 1 1]
const QUAD_COEFFICIENTS_INV: Mat3 = Mat3::from_cols(
    Vec3::new(1.0, 1.0, 1.0),
    Vec3::new(0.0, 0.5, 1.0),
    Vec3::new(0.0, 0.0, 1.0),
);

/// Zeilen: [1 0 0 0] [-3 3 0 0] [3 -6 3 0] [-1 3 -3 1]
const CUBIC_COEFFICIENTS: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, -3.0, 3.0, -1.0),
    Vec4::new(0.0, 3.0, -6.0, 3.0),
    Vec4::new(0.0, 0.0, 3.0, -3.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Zeilen: [1 0 0 0] [1 ⅓ 0 0] [1 ⅔ ⅓ 0] [1 1 1 1]
const CUBIC_COEFFICIENTS_INV: Mat4 = Mat4::from_cols(
    Vec4::new(1.0, 1.0, 1.0, 1.0),
    Vec4::new(0.0, 1.0 / 3.0, 2.0 / 3.0, 1.0),
    Vec4::new(0.0, 0.0, 1.0 / 3.0, 1.0),
    Vec4::new(0.0, 0.0, 0.0, 1.0),
);

/// Zeilen: [1 s s²] [0 d 2sd] [0 0 d²] mit d = f - s
fn quad_restriction(s: f32, f: f32) -> Mat3 {
    let d = f - s;
    Mat3::from_cols(
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(s, d, 0.0),
        Vec3::new(s * s, 2.0 * s * d, d * d),
    )
}

/// Zeilen: [1 s s² s³] [0 d 2sd 3s²d] [0 0 d² 3sd²] [0 0 0 d³]
fn cubic_restriction(s: f32, f: f32) -> Mat4 {
    let d = f - s;
    Mat4::from_cols(
        Vec4::new(1.0, 0.0, 0.0, 0.0),
        Vec4::new(s, d, 0.0, 0.0),
        Vec4::new(s * s, 2.0 * s * d, d * d, 0.0),
        Vec4::new(s * s * s, 3.0 * s * s * d, 3.0 * s * d * d, d * d * d),
    )
}

/// Teilstrecke einer Linie: `[L(from), L(to)]`.
pub fn segment_line(p0: Point, p1: Point, from: f32, to: f32) -> [Point; 2] {
    debug_assert!(from <= to, "Segmentierung erwartet from <= to");
    [
        linear_interpolation(p0, p1, from),
        linear_interpolation(p0, p1, to),
    ]
}

/// Kontrollpunkte `[start, control, end]` der quadratischen Teilkurve.
pub fn segment_quadratic(p0: Point, p1: Point, p2: Point, from: f32, to: f32) -> [Point; 3] {
    debug_assert!(from <= to, "Segmentierung erwartet from <= to");
    let transform = QUAD_COEFFICIENTS_INV * quad_restriction(from, to) * QUAD_COEFFICIENTS;
    let xs = transform * Vec3::new(p0.x, p1.x, p2.x);
    let ys = transform * Vec3::new(p0.y, p1.y, p2.y);
    [
        Point::new(xs.x, ys.x),
        Point::new(xs.y, ys.y),
        Point::new(xs.z, ys.z),
    ]
}

/// Kontrollpunkte `[start, control1, control2, end]` der kubischen Teilkurve.
pub fn segment_cubic(
    p0: Point,
    p1: Point,
    p2: Point,
    p3: Point,
    from: f32,
    to: f32,
) -> [Point; 4] {
    debug_assert!(from <= to, "Segmentierung erwartet from <= to");
    let transform = CUBIC_COEFFICIENTS_INV * cubic_restriction(from, to) * CUBIC_COEFFICIENTS;
    let xs = transform * Vec4::new(p0.x, p1.x, p2.x, p3.x);
    let ys = transform * Vec4::new(p0.y, p1.y, p2.y, p3.y);
    [
        Point::new(xs.x, ys.x),
        Point::new(xs.y, ys.y),
        Point::new(xs.z, ys.z),
        Point::new(xs.w, ys.w),
    ]
}

/// Teilkurve eines Segments über `[from, to]` als neues Element.
///
/// Der Startpunkt der Teilkurve ist nicht Teil des Elements; der Aufrufer
/// setzt die Elementfolge so fort, dass der Vorgänger dort endet.
/// `Close` wird als Linie zum Subpfad-Start segmentiert, `MoveTo` bleibt
/// unverändert.
pub fn segment(segment: &PathSegment, from: f32, to: f32) -> PathElement {
    match segment.element {
        PathElement::MoveTo(_) => segment.element,
        PathElement::Line(end) => PathElement::Line(segment_line(segment.start, end, from, to)[1]),
        PathElement::Close => {
            PathElement::Line(segment_line(segment.start, segment.subpath_start, from, to)[1])
        }
        PathElement::Quad { end, control } => {
            let [_, control, end] = segment_quadratic(segment.start, control, end, from, to);
            PathElement::Quad { end, control }
        }
        PathElement::Cubic {
            end,
            control1,
            control2,
        } => {
            let [_, control1, control2, end] =
                segment_cubic(segment.start, control1, control2, end, from, to);
            PathElement::Cubic {
                end,
                control1,
                control2,
            }
        }
    }
}

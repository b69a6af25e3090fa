//! Geschlossene Auswertung von Linie und Bézier-Kurven am Parameter t.
//!
//! Keine Begrenzung von t: Werte außerhalb von [0, 1] extrapolieren.
//!
//! Kurven werden per de Casteljau aus [`linear_interpolation`] aufgebaut.
//! Damit liefern zusammenfallende Punkte für jedes t exakt diesen Punkt,
//! und die Endpunkte bei t = 0 und t = 1 sind exakt.

use crate::core::{PathElement, PathSegment, Point};

/// L(t) = (1-t)·P0 + t·P1
///
/// Ab t = 0.5 wird vom Endpunkt aus gerechnet, damit t = 1 exakt P1 ergibt.
#[inline]
pub fn linear_interpolation(p0: Point, p1: Point, t: f32) -> Point {
    let delta = p1 - p0;
    if t < 0.5 {
        p0 + delta * t
    } else {
        p1 - delta * (1.0 - t)
    }
}

/// B(t) = (1-t)²·P0 + 2(1-t)t·P1 + t²·P2
#[inline]
pub fn quadratic_bezier(p0: Point, p1: Point, p2: Point, t: f32) -> Point {
    let a = linear_interpolation(p0, p1, t);
    let b = linear_interpolation(p1, p2, t);
    linear_interpolation(a, b, t)
}

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
#[inline]
pub fn cubic_bezier(p0: Point, p1: Point, p2: Point, p3: Point, t: f32) -> Point {
    let a = linear_interpolation(p0, p1, t);
    let b = linear_interpolation(p1, p2, t);
    let c = linear_interpolation(p2, p3, t);
    quadratic_bezier(a, b, c, t)
}

impl PathSegment {
    /// Position auf dem Segment bei Parameter `t`.
    ///
    /// `Close` verläuft als Linie zurück zum Subpfad-Start, `MoveTo` ist ein
    /// Punkt und liefert für jedes t seine eigene Position.
    pub fn point_at(&self, t: f32) -> Point {
        match self.element {
            PathElement::MoveTo(p) => p,
            PathElement::Line(end) => linear_interpolation(self.start, end, t),
            PathElement::Quad { end, control } => quadratic_bezier(self.start, control, end, t),
            PathElement::Cubic {
                end,
                control1,
                control2,
            } => cubic_bezier(self.start, control1, control2, end, t),
            PathElement::Close => linear_interpolation(self.start, self.subpath_start, t),
        }
    }
}

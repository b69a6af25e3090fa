//! Punkt- und Offset-Typen für Pfadgeometrie.
//!
//! Positionen sind `f32` (glam `Vec2`). Längen und Distanzvergleiche laufen
//! über `f64`, damit Summen über viele Samples nicht driften.

use glam::Vec2;

/// Absolute Position im Pfad-Koordinatensystem.
pub type Point = Vec2;

/// Ausstehende Drag-Verschiebung (dx, dy), wird auf eine `Point` addiert.
pub type Offset = Vec2;

/// Euklidische Distanz zweier Punkte in doppelter Genauigkeit.
#[inline]
pub fn distance_f64(a: Point, b: Point) -> f64 {
    (b.as_dvec2() - a.as_dvec2()).length()
}

/// Quadrierte euklidische Distanz in doppelter Genauigkeit.
#[inline]
pub fn distance_squared_f64(a: Point, b: Point) -> f64 {
    (b.as_dvec2() - a.as_dvec2()).length_squared()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn distance_matches_pythagoras() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);

        assert_relative_eq!(distance_f64(a, b), 5.0);
        assert_relative_eq!(distance_squared_f64(a, b), 25.0);
    }

    #[test]
    fn offset_adds_to_point() {
        let p = Point::new(10.0, 10.0);
        let o = Offset::new(-2.5, 3.0);

        assert_eq!(p + o, Point::new(7.5, 13.0));
    }
}

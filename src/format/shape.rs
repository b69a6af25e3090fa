//! Normalisierte Koordinaten für den Export als Form (0..1, skaliert mit
//! Breite/Höhe).

use crate::core::{BoundingBox, Path, Point};

/// Stützstellen je Element für die Ausdehnung der Kurve.
pub const SHAPE_SAMPLE_DIVISIONS: usize = 20;

impl BoundingBox {
    /// Box über alle End- und Steuerpunkte eines Pfads.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.bounds()
    }

    /// Box über die tatsächliche Kurvenausdehnung.
    ///
    /// Jedes zeichnende Element wird an `SHAPE_SAMPLE_DIVISIONS` Stellen
    /// ausgewertet, `MoveTo` trägt seinen Punkt bei.
    pub fn from_samples(path: &Path) -> Option<Self> {
        let samples = path.segments().flat_map(|segment| {
            let count = if segment.element.draws() {
                SHAPE_SAMPLE_DIVISIONS
            } else {
                1
            };
            (1..=count).map(move |i| segment.point_at(i as f32 / count as f32))
        });
        Self::from_points(samples)
    }
}

/// Normalisiert einen Punkt auf `[0, 1]` bezüglich `bounds`.
pub fn normalize(point: Point, bounds: &BoundingBox) -> Point {
    bounds.normalize(point)
}

/// Pfad mit auf `[0, 1]` normalisierten und mit `(width, height)`
/// skalierten Punkten. Die Elementstruktur bleibt erhalten.
///
/// Grundlage ist die Kurvenausdehnung ([`BoundingBox::from_samples`]).
pub fn normalized_path(path: &Path, width: f32, height: f32) -> Path {
    let Some(bounds) = BoundingBox::from_samples(path) else {
        return path.clone();
    };
    let scale = Point::new(width, height);
    path.elements()
        .iter()
        .map(|element| element.map_points(|_, p| bounds.normalize(p) * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathElement;
    use approx::assert_relative_eq;

    #[test]
    fn sample_bounds_follow_curve_not_control_points() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Quad {
                end: Point::new(10.0, 0.0),
                control: Point::new(5.0, 10.0),
            },
        ]);

        let hull = BoundingBox::from_path(&path).expect("Punkte");
        let curve = BoundingBox::from_samples(&path).expect("Punkte");

        assert_eq!(hull.max.y, 10.0);
        assert_relative_eq!(curve.max.y, 5.0, epsilon = 1e-4);
    }

    #[test]
    fn normalized_path_scales_into_target_size() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(10.0, 10.0)),
            PathElement::Line(Point::new(30.0, 10.0)),
            PathElement::Line(Point::new(30.0, 50.0)),
            PathElement::Close,
        ]);

        let normalized = normalized_path(&path, 100.0, 200.0);

        assert_eq!(
            normalized.elements(),
            &[
                PathElement::MoveTo(Point::new(0.0, 0.0)),
                PathElement::Line(Point::new(100.0, 0.0)),
                PathElement::Line(Point::new(100.0, 200.0)),
                PathElement::Close,
            ]
        );
    }

    #[test]
    fn empty_path_stays_empty() {
        assert!(normalized_path(&Path::new(), 1.0, 1.0).is_empty());
        assert_eq!(BoundingBox::from_samples(&Path::new()), None);
    }
}

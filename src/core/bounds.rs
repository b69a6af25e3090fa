//! Achsenparallele Bounding-Box und Normalisierung in den Einheitsbereich.

use super::Point;

/// Achsenparallele Box über eine Punktmenge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    /// Box um einen einzelnen Punkt.
    pub const fn from_point(p: Point) -> Self {
        Self { min: p, max: p }
    }

    /// Kleinste Box über alle Punkte. `None` bei leerer Eingabe.
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |mut bounds, p| {
            bounds.include(p);
            bounds
        }))
    }

    /// Erweitert die Box so, dass `p` enthalten ist.
    pub fn include(&mut self, p: Point) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> Point {
        self.max - self.min
    }

    /// Bildet `p` auf `[0, 1]²` ab: Minimum abziehen, durch Spannweite teilen.
    ///
    /// Eine Achse ohne Ausdehnung wird auf 0 abgebildet.
    pub fn normalize(&self, p: Point) -> Point {
        let size = self.size();
        let axis = |value: f32, min: f32, range: f32| {
            if range > 0.0 {
                (value - min) / range
            } else {
                0.0
            }
        };
        Point::new(
            axis(p.x, self.min.x, size.x),
            axis(p.y, self.min.y, size.y),
        )
    }
}

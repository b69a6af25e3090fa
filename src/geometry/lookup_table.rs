//! Lookup-Table: nach Bogenlänge annähernd gleichverteilte Stützpunkte eines
//! ganzen Pfads, plus Nächster-Punkt- und Prozent-Abfragen.
//!
//! Die Tabelle ist eine Momentaufnahme. Nach einer Pfadänderung muss sie neu
//! gebaut werden.

use serde::{Deserialize, Serialize};

use crate::core::{distance_f64, distance_squared_f64, Path, PathElement, Point};

use super::arc_length::quick_lengths;

/// Standard-Kapazität (Ziel-Anzahl Stützpunkte über den ganzen Pfad)
pub const DEFAULT_LOOKUP_CAPACITY: usize = 500;
/// Standard-Mindestabstand zwischen aufeinanderfolgenden Stützpunkten
pub const DEFAULT_LOOKUP_THRESHOLD: f64 = 1.0;

/// Dichte-Parameter der Lookup-Table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupTableOptions {
    pub capacity: usize,
    /// In Pfad-Einheiten, unskaliert
    pub threshold: f64,
}

impl Default for LookupTableOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_LOOKUP_CAPACITY,
            threshold: DEFAULT_LOOKUP_THRESHOLD,
        }
    }
}

/// Geordnete Stützpunkte entlang eines Pfads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LookupTable {
    points: Vec<Point>,
}

impl LookupTable {
    /// Baut die Tabelle für `path`.
    ///
    /// Jedes Element erhält ein Budget von `capacity · Länge / Gesamtlänge`
    /// Stützstellen. Ein Punkt wird nur übernommen, wenn er weiter als
    /// `threshold` vom zuletzt übernommenen entfernt liegt. `MoveTo` wird
    /// immer übernommen. Pfade der Gesamtlänge 0 ergeben eine leere Tabelle.
    pub fn build(path: &Path, options: &LookupTableOptions) -> Self {
        let lengths = quick_lengths(path);
        let total: f64 = lengths.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            log::debug!("Lookup-Table: Gesamtlänge {total}, Tabelle bleibt leer");
            return Self::default();
        }

        let mut points: Vec<Point> = Vec::new();

        for (segment, length) in path.segments().zip(lengths) {
            if let PathElement::MoveTo(p) = segment.element {
                points.push(p);
                continue;
            }

            let budget = options.capacity as f64 * length / total;
            for i in 0..=budget as usize {
                let t = if budget > 0.0 { i as f64 / budget } else { 0.0 };
                push_if_apart(&mut points, segment.point_at(t as f32), options.threshold);
            }
        }

        log::debug!(
            "Lookup-Table: {} Punkte aus {} Elementen (Gesamtlänge {total:.3})",
            points.len(),
            path.len()
        );
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Index des nächstgelegenen Stützpunkts (erstes Minimum bei Gleichstand).
    pub fn closest_index(&self, query: Point) -> Option<usize> {
        self.points
            .iter()
            .enumerate()
            .map(|(index, &p)| (index, distance_squared_f64(query, p)))
            .min_by(|(_, l), (_, r)| l.total_cmp(r))
            .map(|(index, _)| index)
    }

    /// Nächstgelegener Stützpunkt; `None` bei leerer Tabelle.
    pub fn closest_point(&self, query: Point) -> Option<Point> {
        self.closest_index(query).map(|index| self.points[index])
    }

    /// Relative Position des nächstgelegenen Stützpunkts in `[0, 1]`.
    ///
    /// Gibt 0 zurück, wenn die Tabelle weniger als 2 Punkte enthält.
    pub fn percent(&self, query: Point) -> f32 {
        if self.points.len() < 2 {
            return 0.0;
        }
        self.closest_index(query)
            .map_or(0.0, |index| index as f32 / (self.points.len() - 1) as f32)
    }
}

/// Leere Tabelle übernimmt den ersten Punkt ohne Abstandsprüfung.
fn push_if_apart(points: &mut Vec<Point>, p: Point, threshold: f64) {
    match points.last() {
        Some(&last) if distance_f64(last, p) <= threshold => {}
        _ => points.push(p),
    }
}

impl From<Vec<Point>> for LookupTable {
    fn from(points: Vec<Point>) -> Self {
        Self { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PathElement;
    use approx::assert_relative_eq;

    fn square() -> Path {
        Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(10.0, 0.0)),
            PathElement::Line(Point::new(10.0, 10.0)),
            PathElement::Line(Point::new(0.0, 10.0)),
            PathElement::Close,
        ])
    }

    #[test]
    fn zero_length_path_gives_empty_table() {
        let p = Point::new(3.0, 3.0);
        let path = Path::from_elements(vec![
            PathElement::MoveTo(p),
            PathElement::Line(p),
            PathElement::Quad { end: p, control: p },
            PathElement::Close,
        ]);

        let table = LookupTable::build(&path, &LookupTableOptions::default());
        assert!(table.is_empty());
        assert_eq!(table.closest_point(Point::ZERO), None);
        assert_eq!(table.percent(Point::ZERO), 0.0);
    }

    #[test]
    fn straight_line_is_sampled_by_budget() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(100.0, 0.0)),
        ]);
        let options = LookupTableOptions {
            capacity: 100,
            threshold: 0.5,
        };

        let table = LookupTable::build(&path, &options);

        // MoveTo + 100 Stützstellen; t = 0 fällt auf den MoveTo-Punkt
        assert_eq!(table.len(), 101);
        assert_eq!(table.points()[0], Point::ZERO);
        assert_relative_eq!(table.points()[100].x, 100.0, epsilon = 1e-4);
    }

    #[test]
    fn threshold_drops_near_duplicates() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(100.0, 0.0)),
        ]);
        let options = LookupTableOptions {
            capacity: 100,
            threshold: 1.5,
        };

        let table = LookupTable::build(&path, &options);

        for pair in table.points().windows(2) {
            assert!(distance_f64(pair[0], pair[1]) > 1.5);
        }
        assert!(table.len() < 101);
    }

    #[test]
    fn close_runs_back_to_subpath_start() {
        let options = LookupTableOptions {
            capacity: 40,
            threshold: 0.5,
        };
        let table = LookupTable::build(&square(), &options);

        let last = *table.points().last().expect("Tabelle nicht leer");
        assert!(last.distance(Point::ZERO) < 1e-4);
        // Start und Ende liegen auf (0, 0): das erste Minimum gewinnt
        assert_eq!(table.closest_index(Point::ZERO), Some(0));
        assert_eq!(table.percent(Point::ZERO), 0.0);
    }

    #[test]
    fn move_to_is_always_recorded() {
        let joint = Point::new(10.5, 0.0);
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(10.0, 0.0)),
            PathElement::MoveTo(joint),
            PathElement::Line(Point::new(20.0, 0.0)),
        ]);
        // Schwelle größer als der ganze Pfad: nur MoveTo-Punkte überleben
        let options = LookupTableOptions {
            capacity: 100,
            threshold: 100.0,
        };

        let table = LookupTable::build(&path, &options);

        assert_eq!(table.points(), &[Point::ZERO, joint]);
    }

    #[test]
    fn move_to_follows_samples_of_previous_subpath() {
        let joint = Point::new(10.5, 0.0);
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Line(Point::new(10.0, 0.0)),
            PathElement::MoveTo(joint),
            PathElement::Line(Point::new(20.0, 0.0)),
        ]);

        let table = LookupTable::build(&path, &LookupTableOptions::default());
        let index = table
            .points()
            .iter()
            .position(|p| *p == joint)
            .expect("MoveTo-Punkt fehlt");

        assert!(index > 1);
        assert!(table.points()[..index].iter().all(|p| p.x <= 10.0));
        assert!(table.points()[index + 1..].iter().all(|p| p.x > 10.5));
    }

    #[test]
    fn degenerate_curve_has_zero_quick_length() {
        let p = Point::new(3.0, 3.0);
        let path = Path::from_elements(vec![
            PathElement::MoveTo(p),
            PathElement::Quad { end: p, control: p },
            PathElement::Cubic {
                end: p,
                control1: p,
                control2: p,
            },
        ]);

        assert_eq!(quick_lengths(&path), vec![0.0, 0.0, 0.0]);
        assert!(LookupTable::build(&path, &LookupTableOptions::default()).is_empty());
    }

    #[test]
    fn path_without_move_to_seeds_first_sample() {
        let path = Path::from_elements(vec![PathElement::Line(Point::new(10.0, 0.0))]);

        let table = LookupTable::build(&path, &LookupTableOptions::default());

        assert_eq!(table.points()[0], Point::ZERO);
        assert!(table.len() > 1);
    }

    #[test]
    fn closest_point_on_unit_square_corners() {
        let table = LookupTable::from(vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ]);

        assert_eq!(table.closest_point(Point::ZERO), Some(Point::ZERO));
        assert_eq!(table.closest_point(Point::new(0.9, 1.2)), Some(Point::ONE));
    }

    #[test]
    fn percent_on_two_point_table() {
        let table = LookupTable::from(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]);

        assert_eq!(table.percent(Point::new(9.0, 1.0)), 1.0);
        assert_eq!(table.percent(Point::new(1.0, -1.0)), 0.0);
        assert_eq!(LookupTable::from(vec![Point::ONE]).percent(Point::ZERO), 0.0);
    }

    #[test]
    fn capacity_bounds_table_size() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Cubic {
                end: Point::new(400.0, 0.0),
                control1: Point::new(100.0, 300.0),
                control2: Point::new(300.0, -300.0),
            },
        ]);

        let table = LookupTable::build(&path, &LookupTableOptions::default());

        assert!(table.len() <= DEFAULT_LOOKUP_CAPACITY + 2);
        assert!(table.len() > DEFAULT_LOOKUP_CAPACITY / 2);
    }
}

//! Einzelne Pfad-Elemente (MoveTo, Linie, quadratische/kubische Bézier, Close).

use super::Point;
use serde::{Deserialize, Serialize};

/// Typ eines Pfad-Elements ohne Punktdaten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    /// Startet einen neuen Subpfad
    MoveTo,
    /// Gerade Linie zum Endpunkt
    Line,
    /// Quadratische Bézier: 1 Steuerpunkt
    Quad,
    /// Kubische Bézier: 2 Steuerpunkte
    Cubic,
    /// Schließt den aktuellen Subpfad zurück zu seinem Startpunkt
    Close,
}

impl ElementKind {
    /// Anzahl der Punkte, die ein Element dieses Typs trägt.
    pub const fn point_count(self) -> usize {
        match self {
            Self::Close => 0,
            Self::MoveTo | Self::Line => 1,
            Self::Quad => 2,
            Self::Cubic => 3,
        }
    }

    /// Kommandobuchstabe der Textform.
    pub const fn command(self) -> char {
        match self {
            Self::MoveTo => 'm',
            Self::Line => 'l',
            Self::Quad => 'q',
            Self::Cubic => 'c',
            Self::Close => 'h',
        }
    }

    /// Umkehrung von [`ElementKind::command`].
    pub const fn from_command(command: char) -> Option<Self> {
        match command {
            'm' => Some(Self::MoveTo),
            'l' => Some(Self::Line),
            'q' => Some(Self::Quad),
            'c' => Some(Self::Cubic),
            'h' => Some(Self::Close),
            _ => None,
        }
    }
}

/// Ein Element eines Pfads.
///
/// Punktreihenfolge für alle Zugriffe per Index: `[end, control1, control2]`.
/// Der Startpunkt eines Segments ist nie Teil des Elements, er ergibt sich
/// aus dem Endpunkt des Vorgängers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathElement {
    MoveTo(Point),
    Line(Point),
    Quad { end: Point, control: Point },
    Cubic {
        end: Point,
        control1: Point,
        control2: Point,
    },
    Close,
}

impl PathElement {
    /// Baut ein Element aus Typ und Punktliste `[end, control1, control2]`.
    ///
    /// Gibt `None` zurück, wenn die Punktanzahl nicht zum Typ passt.
    pub fn from_points(kind: ElementKind, points: &[Point]) -> Option<Self> {
        if points.len() != kind.point_count() {
            return None;
        }
        Some(match kind {
            ElementKind::MoveTo => Self::MoveTo(points[0]),
            ElementKind::Line => Self::Line(points[0]),
            ElementKind::Quad => Self::Quad {
                end: points[0],
                control: points[1],
            },
            ElementKind::Cubic => Self::Cubic {
                end: points[0],
                control1: points[1],
                control2: points[2],
            },
            ElementKind::Close => Self::Close,
        })
    }

    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::MoveTo(_) => ElementKind::MoveTo,
            Self::Line(_) => ElementKind::Line,
            Self::Quad { .. } => ElementKind::Quad,
            Self::Cubic { .. } => ElementKind::Cubic,
            Self::Close => ElementKind::Close,
        }
    }

    pub const fn point_count(&self) -> usize {
        self.kind().point_count()
    }

    /// Alle Punkte in der Reihenfolge `[end, control1, control2]`.
    pub fn points(&self) -> Vec<Point> {
        match *self {
            Self::MoveTo(p) | Self::Line(p) => vec![p],
            Self::Quad { end, control } => vec![end, control],
            Self::Cubic {
                end,
                control1,
                control2,
            } => vec![end, control1, control2],
            Self::Close => Vec::new(),
        }
    }

    /// Endpunkt des Elements (`None` für Close).
    pub fn end_point(&self) -> Option<Point> {
        match *self {
            Self::MoveTo(end)
            | Self::Line(end)
            | Self::Quad { end, .. }
            | Self::Cubic { end, .. } => Some(end),
            Self::Close => None,
        }
    }

    pub fn point(&self, index: usize) -> Option<Point> {
        self.points().get(index).copied()
    }

    /// Veränderbarer Zugriff auf einen Punkt per Index.
    pub fn point_mut(&mut self, index: usize) -> Option<&mut Point> {
        match (self, index) {
            (Self::MoveTo(p) | Self::Line(p), 0) => Some(p),
            (Self::Quad { end, .. } | Self::Cubic { end, .. }, 0) => Some(end),
            (Self::Quad { control, .. }, 1) => Some(control),
            (Self::Cubic { control1, .. }, 1) => Some(control1),
            (Self::Cubic { control2, .. }, 2) => Some(control2),
            _ => None,
        }
    }

    /// Neues Element mit transformierten Punkten; `f` erhält Index und Punkt.
    pub fn map_points(&self, mut f: impl FnMut(usize, Point) -> Point) -> Self {
        let mut mapped = *self;
        for index in 0..self.point_count() {
            if let Some(p) = mapped.point_mut(index) {
                *p = f(index, *p);
            }
        }
        mapped
    }

    /// `true` für Elemente, die eine Kurve/Linie zeichnen (inkl. Close).
    pub const fn draws(&self) -> bool {
        !matches!(self, Self::MoveTo(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_are_ordered_end_first() {
        let cubic = PathElement::Cubic {
            end: Point::new(3.0, 3.0),
            control1: Point::new(1.0, 1.0),
            control2: Point::new(2.0, 2.0),
        };

        assert_eq!(
            cubic.points(),
            vec![
                Point::new(3.0, 3.0),
                Point::new(1.0, 1.0),
                Point::new(2.0, 2.0)
            ]
        );
        assert_eq!(cubic.end_point(), Some(Point::new(3.0, 3.0)));
    }

    #[test]
    fn close_has_no_points() {
        assert!(PathElement::Close.points().is_empty());
        assert_eq!(PathElement::Close.end_point(), None);
        assert_eq!(PathElement::Close.point_count(), 0);
    }

    #[test]
    fn from_points_rejects_wrong_count() {
        assert!(PathElement::from_points(ElementKind::Quad, &[Point::ZERO]).is_none());
        assert_eq!(
            PathElement::from_points(ElementKind::Line, &[Point::ONE]),
            Some(PathElement::Line(Point::ONE))
        );
    }

    #[test]
    fn move_to_and_line_stay_distinct() {
        let m = PathElement::from_points(ElementKind::MoveTo, &[Point::ONE]).unwrap();
        let l = PathElement::from_points(ElementKind::Line, &[Point::ONE]).unwrap();

        assert_ne!(m, l);
        assert_eq!(m.kind(), ElementKind::MoveTo);
        assert_eq!(l.kind(), ElementKind::Line);
    }

    #[test]
    fn map_points_touches_every_point() {
        let quad = PathElement::Quad {
            end: Point::new(1.0, 0.0),
            control: Point::new(0.0, 1.0),
        };
        let shifted = quad.map_points(|_, p| p + Point::new(10.0, 10.0));

        assert_eq!(
            shifted,
            PathElement::Quad {
                end: Point::new(11.0, 10.0),
                control: Point::new(10.0, 11.0),
            }
        );
    }

    #[test]
    fn command_letters_roundtrip() {
        for kind in [
            ElementKind::MoveTo,
            ElementKind::Line,
            ElementKind::Quad,
            ElementKind::Cubic,
            ElementKind::Close,
        ] {
            assert_eq!(ElementKind::from_command(kind.command()), Some(kind));
        }
        assert_eq!(ElementKind::from_command('z'), None);
    }
}

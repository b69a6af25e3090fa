//! Pfad als geordnete Folge von Elementen, inkl. Segment-Iteration.

use super::{BoundingBox, PathElement, Point};
use serde::{Deserialize, Serialize};

/// Ein Pfad aus einem oder mehreren Subpfaden.
///
/// Wohlgeformt, wenn das erste Element ein `MoveTo` ist. Ein `Close` bezieht
/// sich immer auf das letzte vorangehende `MoveTo`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    elements: Vec<PathElement>,
}

impl Path {
    /// Erstellt einen leeren Pfad.
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn from_elements(elements: Vec<PathElement>) -> Self {
        Self { elements }
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<PathElement> {
        self.elements
    }

    pub fn push(&mut self, element: PathElement) {
        self.elements.push(element);
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// `true`, wenn der Pfad leer ist oder mit einem `MoveTo` beginnt.
    pub fn is_well_formed(&self) -> bool {
        matches!(self.elements.first(), None | Some(PathElement::MoveTo(_)))
    }

    /// Position des ersten `MoveTo`.
    pub fn start_point(&self) -> Option<Point> {
        self.elements.iter().find_map(|element| match element {
            PathElement::MoveTo(p) => Some(*p),
            _ => None,
        })
    }

    /// Endpunkt des letzten zeichnenden Kurven-Elements (Line/Quad/Cubic).
    pub fn end_point(&self) -> Option<Point> {
        self.elements.iter().rev().find_map(|element| match element {
            PathElement::MoveTo(_) | PathElement::Close => None,
            other => other.end_point(),
        })
    }

    /// Alle Punkte aller Elemente (End- und Steuerpunkte).
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.elements.iter().flat_map(PathElement::points)
    }

    /// Achsenparallele Box über alle End- und Steuerpunkte.
    pub fn bounds(&self) -> Option<BoundingBox> {
        BoundingBox::from_points(self.points())
    }

    /// Iteriert über die Elemente mit ihrem jeweiligen Segment-Kontext.
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.elements)
    }
}

impl From<Vec<PathElement>> for Path {
    fn from(elements: Vec<PathElement>) -> Self {
        Self::from_elements(elements)
    }
}

impl FromIterator<PathElement> for Path {
    fn from_iter<I: IntoIterator<Item = PathElement>>(iter: I) -> Self {
        Self::from_elements(iter.into_iter().collect())
    }
}

/// Ein Element zusammen mit seinem Startpunkt und dem Start des aktiven Subpfads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    /// Aktueller Punkt vor dem Element (Endpunkt des Vorgängers)
    pub start: Point,
    /// Position des letzten `MoveTo`
    pub subpath_start: Point,
    pub element: PathElement,
}

impl PathSegment {
    /// Segment ab `start`, dessen Subpfad ebenfalls bei `start` beginnt.
    pub fn new(start: Point, element: PathElement) -> Self {
        Self {
            start,
            subpath_start: start,
            element,
        }
    }

    /// Punkt, an dem das Segment endet.
    ///
    /// `Close` endet am Subpfad-Start, `MoveTo` an seiner eigenen Position.
    pub fn end(&self) -> Point {
        self.element.end_point().unwrap_or(self.subpath_start)
    }
}

/// Iterator, der für jedes Element aktuellen Punkt und Subpfad-Start mitführt.
///
/// Beginnt der Pfad nicht mit `MoveTo`, starten beide im Ursprung.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    elements: std::slice::Iter<'a, PathElement>,
    current: Point,
    subpath_start: Point,
}

impl<'a> Segments<'a> {
    pub fn new(elements: &'a [PathElement]) -> Self {
        Self {
            elements: elements.iter(),
            current: Point::ZERO,
            subpath_start: Point::ZERO,
        }
    }
}

impl Iterator for Segments<'_> {
    type Item = PathSegment;

    fn next(&mut self) -> Option<Self::Item> {
        let element = *self.elements.next()?;
        if let PathElement::MoveTo(p) = element {
            self.subpath_start = p;
        }

        let segment = PathSegment {
            start: self.current,
            subpath_start: self.subpath_start,
            element,
        };
        self.current = segment.end();
        Some(segment)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.elements.size_hint()
    }
}

impl ExactSizeIterator for Segments<'_> {}

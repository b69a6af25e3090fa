//! Editierbare Pfad-Elemente mit stabiler ID und ausstehenden Drag-Offsets.
//!
//! Der Typ wird explizit über das gekapselte `PathElement` geführt und nie
//! aus der Punktanzahl abgeleitet, damit `MoveTo` und `Line` (je ein Punkt)
//! nicht verwechselt werden können.

use super::{ElementKind, Offset, PathElement, Point};
use serde::{Deserialize, Serialize};

/// Stabile Identität eines editierbaren Elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementId(pub u64);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ein Pfad-Element, wie es der Editor hält.
///
/// Invariante: `offsets.len() == element.point_count()`.
#[derive(Debug, Clone, PartialEq)]
pub struct EditableElement {
    id: ElementId,
    /// Basis-Positionen inkl. Typ
    element: PathElement,
    /// Ausstehende Drag-Verschiebung je Punkt `[end, control1, control2]`
    offsets: Vec<Offset>,
}

impl EditableElement {
    /// Erstellt ein Element ohne ausstehende Offsets.
    pub fn new(id: ElementId, element: PathElement) -> Self {
        Self {
            id,
            offsets: vec![Offset::ZERO; element.point_count()],
            element,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.element.kind()
    }

    pub fn is_move_to(&self) -> bool {
        self.kind() == ElementKind::MoveTo
    }

    /// Element mit Basis-Positionen (ohne Offsets).
    pub fn base_element(&self) -> PathElement {
        self.element
    }

    pub fn positions(&self) -> Vec<Point> {
        self.element.points()
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets
    }

    /// Summe aus Position und Offset für jeden Punkt.
    pub fn current_positions(&self) -> Vec<Point> {
        self.current_element().points()
    }

    /// Wirksames Element (Positionen + Offsets).
    pub fn current_element(&self) -> PathElement {
        self.element
            .map_points(|index, p| p + self.offsets.get(index).copied().unwrap_or(Offset::ZERO))
    }

    /// Setzt die Basis-Position eines Punkts. `false` bei ungültigem Index.
    pub fn set_position(&mut self, index: usize, position: Point) -> bool {
        match self.element.point_mut(index) {
            Some(p) => {
                *p = position;
                true
            }
            None => false,
        }
    }

    /// Setzt den Drag-Offset eines Punkts. `false` bei ungültigem Index.
    pub fn set_offset(&mut self, index: usize, offset: Offset) -> bool {
        match self.offsets.get_mut(index) {
            Some(o) => {
                *o = offset;
                true
            }
            None => false,
        }
    }

    /// Übernimmt alle Offsets in die Positionen (Drag-Ende).
    pub fn commit_offsets(&mut self) {
        self.element = self.current_element();
        self.offsets.iter_mut().for_each(|o| *o = Offset::ZERO);
    }

    /// `true`, solange mindestens ein Punkt einen Offset trägt.
    pub fn is_dragging(&self) -> bool {
        self.offsets.iter().any(|o| *o != Offset::ZERO)
    }

    fn replace_keeping_end(&mut self, kind: ElementKind, controls: &[Point]) {
        let Some(end) = self.element.end_point() else {
            return;
        };
        let end_offset = self.offsets.first().copied().unwrap_or(Offset::ZERO);

        let mut points = Vec::with_capacity(1 + controls.len());
        points.push(end);
        points.extend_from_slice(controls);

        if let Some(element) = PathElement::from_points(kind, &points) {
            self.element = element;
            self.offsets = vec![Offset::ZERO; points.len()];
            self.offsets[0] = end_offset;
        }
    }

    /// Wandelt eine Kurve in eine Linie um. `MoveTo`/`Close` bleiben unverändert.
    pub fn to_line(&mut self) {
        if self.element.draws() && self.kind() != ElementKind::Close {
            self.replace_keeping_end(ElementKind::Line, &[]);
        }
    }

    /// Wandelt in eine quadratische Bézier mit Steuerpunkt bei `end + d` um.
    pub fn to_quad(&mut self, control_offset: f32) {
        if let Some(end) = self.curve_end() {
            let d = Point::splat(control_offset);
            self.replace_keeping_end(ElementKind::Quad, &[end + d]);
        }
    }

    /// Wandelt in eine kubische Bézier mit Steuerpunkten bei `end ± d` um.
    pub fn to_cubic(&mut self, control_offset: f32) {
        if let Some(end) = self.curve_end() {
            let d = Point::splat(control_offset);
            self.replace_keeping_end(ElementKind::Cubic, &[end + d, end - d]);
        }
    }

    /// Zyklischer Typwechsel Line → Quad → Cubic → Line.
    pub fn toggle_kind(&mut self, control_offset: f32) {
        match self.kind() {
            ElementKind::Line => self.to_quad(control_offset),
            ElementKind::Quad => self.to_cubic(control_offset),
            ElementKind::Cubic => self.to_line(),
            ElementKind::MoveTo | ElementKind::Close => {}
        }
    }

    fn curve_end(&self) -> Option<Point> {
        match self.kind() {
            ElementKind::Line | ElementKind::Quad | ElementKind::Cubic => self.element.end_point(),
            ElementKind::MoveTo | ElementKind::Close => None,
        }
    }
}

//! Editierbarer Pfad: besitzt die Elemente, vergibt IDs und meldet jede
//! Änderung an registrierte Listener.

use indexmap::IndexSet;

use super::{EditableElement, ElementId, ElementKind, Offset, Path, PathElement, Point};
use crate::error::ParseError;
use crate::format::{parse_path, write_path};
use crate::geometry::subdivide_path;
use crate::shared::options::CONTROL_POINT_OFFSET;

/// Callback, der nach jeder Mutation die neue Elementfolge erhält.
pub type ChangeListener = Box<dyn FnMut(&[EditableElement]) + Send>;

/// Ein Pfad aus editierbaren Elementen.
///
/// Alle Mutationen laufen über explizite Methoden und benachrichtigen danach
/// die Listener aus [`PolyBezier::on_change`].
pub struct PolyBezier {
    elements: Vec<EditableElement>,
    next_id: u64,
    /// Abstand neuer Steuerpunkte zum Endpunkt
    control_offset: f32,
    listeners: Vec<ChangeListener>,
}

impl std::fmt::Debug for PolyBezier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolyBezier")
            .field("elements", &self.elements)
            .field("next_id", &self.next_id)
            .field("control_offset", &self.control_offset)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl Default for PolyBezier {
    fn default() -> Self {
        Self::new()
    }
}

impl PolyBezier {
    /// Erstellt einen leeren Pfad.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            next_id: 1,
            control_offset: CONTROL_POINT_OFFSET,
            listeners: Vec::new(),
        }
    }

    /// Übernimmt die Elemente eines Pfads mit frischen IDs.
    pub fn from_path(path: &Path) -> Self {
        let mut poly = Self::new();
        poly.elements = poly.make_elements(path.elements().iter().copied());
        poly
    }

    /// Setzt den Abstand neuer Steuerpunkte (Builder).
    pub fn with_control_offset(mut self, control_offset: f32) -> Self {
        self.control_offset = control_offset;
        self
    }

    pub fn elements(&self) -> &[EditableElement] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn element(&self, id: ElementId) -> Option<&EditableElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Registriert einen Listener für Änderungen.
    pub fn on_change(&mut self, listener: impl FnMut(&[EditableElement]) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Wirksamer Pfad (Positionen + Offsets).
    pub fn to_path(&self) -> Path {
        self.elements
            .iter()
            .map(EditableElement::current_element)
            .collect()
    }

    /// Textform des wirksamen Pfads.
    pub fn to_path_string(&self) -> String {
        write_path(&self.to_path())
    }

    /// Ersetzt den Inhalt durch den geparsten Text.
    ///
    /// Bei einem Parse-Fehler bleibt der Inhalt unverändert.
    pub fn update_from_str(&mut self, text: &str) -> Result<(), ParseError> {
        let path = parse_path(text)?;
        self.elements = self.make_elements(path.into_elements());
        self.notify();
        Ok(())
    }

    // ── Struktur ────────────────────────────────────────────────────

    /// Fasst direkt aufeinanderfolgende `Close` zu einem zusammen.
    pub fn clean_up(&mut self) {
        self.collapse_closes();
        self.notify();
    }

    /// Löscht die ausgewählten Elemente.
    ///
    /// - Bei genau zwei Elementen, von denen eines `Close` ist, wird geleert.
    /// - Bleibt nichts übrig, wird geleert.
    /// - Das erste verbleibende Element wird zum `MoveTo` an seinem Endpunkt.
    ///   Ein führendes `Close` wird durch ein `MoveTo` am nächsten Punkt
    ///   ersetzt oder entfällt, wenn es keinen gibt.
    pub fn delete(&mut self, ids: &IndexSet<ElementId>) {
        if self.elements.len() < 2 || !self.elements.iter().any(|e| ids.contains(&e.id())) {
            return;
        }

        let has_close = self
            .elements
            .iter()
            .any(|e| e.kind() == ElementKind::Close);
        let remainder: Vec<EditableElement> = self
            .elements
            .iter()
            .filter(|e| !ids.contains(&e.id()))
            .cloned()
            .collect();

        if (self.elements.len() == 2 && has_close) || remainder.is_empty() {
            self.clear_to_start();
        } else {
            self.elements = remainder;
            self.restart_with_move_to();
        }

        log::debug!("{} Element(e) gelöscht, {} verbleiben", ids.len(), self.elements.len());
        self.collapse_closes();
        self.notify();
    }

    /// Hängt eine Linie oder Kurve an, ausgehend vom aktuellen Endpunkt.
    ///
    /// `MoveTo` und `Close` werden ignoriert, dafür gibt es
    /// [`PolyBezier::new_subpath`] und [`PolyBezier::close_subpath`].
    pub fn add(&mut self, kind: ElementKind) -> Option<ElementId> {
        if matches!(kind, ElementKind::MoveTo | ElementKind::Close) {
            return None;
        }

        let anchor = self.current_point();
        if self.elements.is_empty() {
            let start = self.make_element(PathElement::MoveTo(anchor));
            self.elements.push(start);
        }

        let end = anchor + Offset::splat(2.0 * self.control_offset);
        let mut element = self.make_element(PathElement::Line(end));
        match kind {
            ElementKind::Quad => element.to_quad(self.control_offset),
            ElementKind::Cubic => element.to_cubic(self.control_offset),
            _ => {}
        }

        let id = element.id();
        self.elements.push(element);
        self.notify();
        Some(id)
    }

    /// Beginnt einen neuen Subpfad bei `at`.
    pub fn new_subpath(&mut self, at: Point) -> ElementId {
        let element = self.make_element(PathElement::MoveTo(at));
        let id = element.id();
        self.elements.push(element);
        self.notify();
        id
    }

    /// Schließt Subpfade.
    ///
    /// Ohne Auswahl wird am Ende ein `Close` angehängt (falls nicht schon
    /// vorhanden). Mit Auswahl wird hinter jedem ausgewählten Element, das
    /// kein `MoveTo` ist, ein `Close` eingefügt.
    pub fn close_subpath(&mut self, ids: &IndexSet<ElementId>) {
        if ids.is_empty() {
            let already_closed = self
                .elements
                .last()
                .is_none_or(|e| e.kind() == ElementKind::Close);
            if !already_closed {
                let close = self.make_element(PathElement::Close);
                self.elements.push(close);
            }
        } else {
            let selected: Vec<usize> = self
                .elements
                .iter()
                .enumerate()
                .filter(|(_, e)| ids.contains(&e.id()) && !e.is_move_to())
                .map(|(index, _)| index)
                .collect();
            for index in selected.into_iter().rev() {
                let close = self.make_element(PathElement::Close);
                self.elements.insert(index + 1, close);
            }
        }

        self.collapse_closes();
        self.notify();
    }

    /// Reduziert den Pfad auf seinen Startpunkt als `MoveTo`.
    pub fn clear(&mut self) {
        self.clear_to_start();
        self.notify();
    }

    /// Unterteilt jedes Element in `n` Teile (neue IDs).
    pub fn subdivide(&mut self, n: usize) {
        let path = self.to_path();
        let subdivided = subdivide_path(path.elements(), n);
        self.elements = self.make_elements(subdivided);
        self.collapse_closes();
        self.notify();
    }

    // ── Drag & Typwechsel ──────────────────────────────────────────

    /// Setzt den Drag-Offset eines Punkts. `false`, wenn ID oder Index ungültig sind.
    pub fn set_offset(&mut self, id: ElementId, index: usize, offset: Offset) -> bool {
        let changed = self
            .element_mut(id)
            .is_some_and(|e| e.set_offset(index, offset));
        if changed {
            self.notify();
        }
        changed
    }

    /// Übernimmt die Offsets des Elements in seine Positionen.
    pub fn end_drag(&mut self, id: ElementId) -> bool {
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.commit_offsets();
        self.notify();
        true
    }

    /// Zyklischer Typwechsel Line → Quad → Cubic → Line.
    pub fn toggle_kind(&mut self, id: ElementId) -> bool {
        let control_offset = self.control_offset;
        let Some(element) = self.element_mut(id) else {
            return false;
        };
        element.toggle_kind(control_offset);
        self.notify();
        true
    }

    // ── intern ─────────────────────────────────────────────────────

    fn element_mut(&mut self, id: ElementId) -> Option<&mut EditableElement> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    fn make_element(&mut self, element: PathElement) -> EditableElement {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        EditableElement::new(id, element)
    }

    fn make_elements(
        &mut self,
        elements: impl IntoIterator<Item = PathElement>,
    ) -> Vec<EditableElement> {
        elements
            .into_iter()
            .map(|element| self.make_element(element))
            .collect()
    }

    /// Aktueller Punkt am Ende des wirksamen Pfads (Ursprung, wenn leer).
    fn current_point(&self) -> Point {
        self.to_path()
            .segments()
            .last()
            .map_or(Point::ZERO, |segment| segment.end())
    }

    /// Position des ersten Elements mit Punkten.
    fn first_point(&self) -> Option<Point> {
        self.elements
            .iter()
            .find_map(|e| e.current_element().end_point())
    }

    fn clear_to_start(&mut self) {
        match self.first_point() {
            Some(start) => {
                let id = self.elements[0].id();
                self.elements = vec![EditableElement::new(id, PathElement::MoveTo(start))];
            }
            None => self.elements.clear(),
        }
    }

    /// Sorgt dafür, dass die Folge mit einem `MoveTo` beginnt.
    fn restart_with_move_to(&mut self) {
        let Some(first) = self.elements.first() else {
            return;
        };
        if first.is_move_to() {
            return;
        }

        if first.kind() == ElementKind::Close {
            self.elements.remove(0);
            let start = self.first_point();
            match (self.elements.first(), start) {
                (Some(next), _) if next.is_move_to() => {}
                (_, Some(start)) => {
                    let head = self.make_element(PathElement::MoveTo(start));
                    self.elements.insert(0, head);
                }
                (_, None) => self.elements.clear(),
            }
        } else if let Some(start) = first.current_element().end_point() {
            let id = first.id();
            self.elements[0] = EditableElement::new(id, PathElement::MoveTo(start));
        }
    }

    fn collapse_closes(&mut self) {
        self.elements.dedup_by(|current, previous| {
            current.kind() == ElementKind::Close && previous.kind() == ElementKind::Close
        });
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.elements);
        }
    }
}

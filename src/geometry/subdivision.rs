//! Gleichmäßige Unterteilung: jedes Element wird in `n` Elemente gleichen
//! Grades über gleich breite Parameterintervalle zerlegt.
//!
//! Die Teilstücke sind im Parameter gleich lang, nicht in der Bogenlänge.

use crate::core::{PathElement, PathSegment, Point, Segments};

use super::segmentation::segment;

/// Parametergrenzen `((i-1)/n, i/n)` für `i` in `1..=n`.
fn intervals(n: usize) -> impl Iterator<Item = (f32, f32)> {
    (1..=n).map(move |i| ((i - 1) as f32 / n as f32, i as f32 / n as f32))
}

fn subdivide_segment(seg: &PathSegment, n: usize) -> Vec<PathElement> {
    if n == 0 {
        return vec![seg.element];
    }
    intervals(n).map(|(from, to)| segment(seg, from, to)).collect()
}

/// Teilt eine Linie in `n` Linien. `n == 0` liefert die Linie unverändert.
pub fn subdivide_line(start: Point, end: Point, n: usize) -> Vec<PathElement> {
    subdivide_segment(&PathSegment::new(start, PathElement::Line(end)), n)
}

/// Teilt eine quadratische Bézier in `n` quadratische Bézier.
pub fn subdivide_quadratic(start: Point, control: Point, end: Point, n: usize) -> Vec<PathElement> {
    subdivide_segment(&PathSegment::new(start, PathElement::Quad { end, control }), n)
}

/// Teilt eine kubische Bézier in `n` kubische Bézier.
pub fn subdivide_cubic(
    start: Point,
    control1: Point,
    control2: Point,
    end: Point,
    n: usize,
) -> Vec<PathElement> {
    subdivide_segment(
        &PathSegment::new(
            start,
            PathElement::Cubic {
                end,
                control1,
                control2,
            },
        ),
        n,
    )
}

/// Teilt die schließende Linie zum Subpfad-Start in `n - 1` Linien plus ein
/// abschließendes `Close`.
pub fn subdivide_closing_line(start: Point, subpath_start: Point, n: usize) -> Vec<PathElement> {
    let closing = PathSegment {
        start,
        subpath_start,
        element: PathElement::Close,
    };
    let mut elements: Vec<PathElement> = intervals(n)
        .take(n.saturating_sub(1))
        .map(|(from, to)| segment(&closing, from, to))
        .collect();
    elements.push(PathElement::Close);
    elements
}

/// Unterteilt jedes Element einer Elementfolge in `n` Teile.
///
/// `MoveTo` wird unverändert übernommen und setzt den Subpfad-Start für ein
/// späteres `Close`. `n == 0` lässt die Folge unverändert.
pub fn subdivide_path(elements: &[PathElement], n: usize) -> Vec<PathElement> {
    let mut subdivided = Vec::new();

    for seg in Segments::new(elements) {
        match seg.element {
            PathElement::MoveTo(_) => subdivided.push(seg.element),
            PathElement::Close => {
                subdivided.extend(subdivide_closing_line(seg.start, seg.subpath_start, n));
            }
            PathElement::Line(_) | PathElement::Quad { .. } | PathElement::Cubic { .. } => {
                subdivided.extend(subdivide_segment(&seg, n));
            }
        }
    }

    log::debug!(
        "Unterteilung n={n}: {} → {} Elemente",
        elements.len(),
        subdivided.len()
    );
    subdivided
}

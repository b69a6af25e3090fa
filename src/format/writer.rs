//! Writer für die Pfad-Textform.

use std::fmt::{self, Write as _};

use crate::core::{Path, PathElement};

/// Schreibt einen Pfad als Textform, ein Kommando pro Zeile.
///
/// Zahlen nutzen die kürzeste Darstellung, die beim Parsen denselben `f32`
/// ergibt. Damit gilt `parse_path(&write_path(p)) == p` für endliche Koordinaten.
pub fn write_path(path: &Path) -> String {
    let mut output = String::new();
    for element in path.elements() {
        // Schreiben in einen String schlägt nicht fehl
        let _ = write_element(&mut output, element);
        output.push('\n');
    }
    output
}

fn write_element(out: &mut impl fmt::Write, element: &PathElement) -> fmt::Result {
    write!(out, "{}", element.kind().command())?;
    for point in element.points() {
        write!(out, " {} {}", point.x, point.y)?;
    }
    Ok(())
}

impl fmt::Display for PathElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_element(f, self)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&write_path(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;
    use crate::format::parse_path;

    #[test]
    fn writes_one_command_per_line() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.0, 0.0)),
            PathElement::Quad {
                end: Point::new(20.0, 10.0),
                control: Point::new(20.5, -0.25),
            },
            PathElement::Close,
        ]);

        assert_eq!(write_path(&path), "m 0 0\nq 20 10 20.5 -0.25\nh\n");
        assert_eq!(path.to_string(), write_path(&path));
    }

    #[test]
    fn element_display_has_no_newline() {
        let cubic = PathElement::Cubic {
            end: Point::new(3.0, 3.0),
            control1: Point::new(1.0, 1.0),
            control2: Point::new(2.0, 2.0),
        };

        assert_eq!(cubic.to_string(), "c 3 3 1 1 2 2");
    }

    #[test]
    fn awkward_floats_survive_a_round_trip() {
        let path = Path::from_elements(vec![
            PathElement::MoveTo(Point::new(0.1, 1.0 / 3.0)),
            PathElement::Line(Point::new(1e-7, -123_456.79)),
            PathElement::Line(Point::new(f32::MAX, f32::MIN_POSITIVE)),
        ]);

        assert_eq!(parse_path(&write_path(&path)).expect("Round-Trip"), path);
    }
}

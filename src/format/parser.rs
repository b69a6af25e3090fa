//! Parser für die Pfad-Textform (`m x y`, `l x y`, `q x y cx cy`,
//! `c x y c1x c1y c2x c2y`, `h`).

use std::str::FromStr;

use crate::core::{ElementKind, Path, PathElement, Point};
use crate::error::ParseError;

/// Zerlegt an Whitespace und Kommas, leere Tokens entfallen.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn as_command(token: &str) -> Option<ElementKind> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => ElementKind::from_command(c),
        _ => None,
    }
}

/// Parst die Textform in einen Pfad.
///
/// Koordinaten folgen der Punktreihenfolge `[end, control1, control2]`, je
/// Punkt `x y`. Nicht-endliche Zahlen werden abgelehnt.
pub fn parse_path(text: &str) -> Result<Path, ParseError> {
    let tokens: Vec<&str> = tokenize(text).collect();
    let mut path = Path::new();
    let mut index = 0;

    while index < tokens.len() {
        let command_index = index;
        let token = tokens[index];
        let kind = as_command(token).ok_or_else(|| ParseError::UnknownCommand {
            token: token.to_string(),
            index,
        })?;
        index += 1;

        let expected = kind.point_count() * 2;
        let mut coordinates = Vec::with_capacity(expected);
        while coordinates.len() < expected {
            let Some(&token) = tokens.get(index).filter(|t| as_command(t).is_none()) else {
                return Err(ParseError::MissingCoordinate {
                    kind,
                    expected,
                    found: coordinates.len(),
                    index: command_index,
                });
            };
            let value = token
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ParseError::InvalidNumber {
                    token: token.to_string(),
                    index,
                })?;
            coordinates.push(value);
            index += 1;
        }

        let points: Vec<Point> = coordinates
            .chunks_exact(2)
            .map(|xy| Point::new(xy[0], xy[1]))
            .collect();
        if let Some(element) = PathElement::from_points(kind, &points) {
            path.push(element);
        }
    }

    log::debug!("{} Pfad-Elemente aus {} Tokens geparst", path.len(), tokens.len());
    Ok(path)
}

impl FromStr for Path {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_path(s)
    }
}

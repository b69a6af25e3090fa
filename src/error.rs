//! Fehlertypen der Bibliothek.

use crate::core::ElementKind;
use thiserror::Error;

/// Fehlschlag der adaptiven Längenintegration.
///
/// Bedeutet "Länge unbekannt", nie "Länge 0".
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntegrationError {
    /// Fehlerschätzung blieb über der Toleranz, obwohl alle Teilintervalle verbraucht sind
    #[error(
        "Integration nicht konvergiert: {intervals} Teilintervalle, Fehler {estimated_error:e} > Toleranz {tolerance:e}"
    )]
    NotConverged {
        intervals: usize,
        estimate: f64,
        estimated_error: f64,
        tolerance: f64,
    },
    /// Integrand lieferte NaN oder ±∞
    #[error("Integrand nicht endlich bei x = {x}")]
    NonFiniteIntegrand { x: f64 },
}

/// Fehler beim Parsen der Pfad-Textform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Unbekanntes Kommando '{token}' an Token {index}")]
    UnknownCommand { token: String, index: usize },
    #[error("Kommando '{}' erwartet {expected} Koordinaten, gefunden {found} (Token {index})", .kind.command())]
    MissingCoordinate {
        kind: ElementKind,
        expected: usize,
        found: usize,
        index: usize,
    },
    #[error("Ungültige Zahl '{token}' an Token {index}")]
    InvalidNumber { token: String, index: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_token() {
        let err = ParseError::UnknownCommand {
            token: "z".into(),
            index: 4,
        };
        assert_eq!(err.to_string(), "Unbekanntes Kommando 'z' an Token 4");

        let err = ParseError::MissingCoordinate {
            kind: ElementKind::Quad,
            expected: 4,
            found: 2,
            index: 0,
        };
        assert!(err.to_string().starts_with("Kommando 'q' erwartet 4"));
    }
}

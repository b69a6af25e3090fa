//! Geteilte Konfiguration für Bibliothek und Binary.

pub mod options;

pub use options::GeometryOptions;
pub use options::{CONTROL_POINT_OFFSET, SUBDIVISION_SEGMENTS};

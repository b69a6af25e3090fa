//! Textform von Pfaden (Import/Export) und normalisierte Form-Koordinaten.

pub mod parser;
pub mod shape;
pub mod writer;

pub use parser::parse_path;
pub use shape::{normalize, normalized_path, SHAPE_SAMPLE_DIVISIONS};
pub use writer::write_path;

//! Core-Datenmodell: Punkte, Pfad-Elemente, Pfade und editierbare Kurven.

pub mod bounds;
pub mod editable;
pub mod element;
pub mod path;
pub mod point;
pub mod poly_bezier;

pub use bounds::BoundingBox;
pub use editable::{EditableElement, ElementId};
pub use element::{ElementKind, PathElement};
pub use path::{Path, PathSegment, Segments};
pub use point::{distance_f64, distance_squared_f64, Offset, Point};
pub use poly_bezier::PolyBezier;

//! bez_path Library.
//! Bézier-/Polylinien-Pfade: Auswertung, Bogenlänge, Lookup-Table,
//! Segmentierung, Unterteilung und Textform. Als Library exportiert für
//! die Binary, Tests und Wiederverwendung.

pub mod core;
pub mod error;
pub mod format;
pub mod geometry;
pub mod shared;

pub use core::{
    BoundingBox, EditableElement, ElementId, ElementKind, Offset, Path, PathElement, PathSegment,
    Point, PolyBezier,
};
pub use error::{IntegrationError, ParseError};
pub use format::{normalized_path, parse_path, write_path};
pub use geometry::{
    accurate_length, quick_lengths, segment, subdivide_path, LookupTable, LookupTableOptions,
    QuadratureOptions,
};
pub use shared::GeometryOptions;

//! Numerik auf Pfaden: Auswertung, Ableitung, Bogenlänge, Lookup-Table,
//! Segmentierung und Unterteilung.
//!
//! Alle Funktionen sind rein und erzeugen neue Werte; kein Pfad wird an Ort
//! und Stelle verändert.

pub mod arc_length;
pub mod derivatives;
pub mod interpolation;
pub mod lookup_table;
pub mod quadrature;
pub mod segmentation;
pub mod subdivision;

pub use arc_length::{
    accurate_length, cubic_bezier_length, quadratic_bezier_length, quick_length, quick_lengths,
    quick_total_length, QUICK_LENGTH_DIVISIONS,
};
pub use derivatives::{cubic_bezier_derivative, quadratic_bezier_derivative};
pub use interpolation::{cubic_bezier, linear_interpolation, quadratic_bezier};
pub use lookup_table::{LookupTable, LookupTableOptions};
pub use quadrature::{integrate, QuadResult, QuadratureOptions};
pub use segmentation::{segment, segment_cubic, segment_line, segment_quadratic};
pub use subdivision::{
    subdivide_closing_line, subdivide_cubic, subdivide_line, subdivide_path, subdivide_quadratic,
};

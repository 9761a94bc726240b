pub mod clip_line;
pub mod overlap;
pub mod triangulate;

pub use clip_line::LineTriangleIntersect;
pub use overlap::{overlap, EntryRule, OverlapParams, TriangleOverlap};
pub use triangulate::TriangulateConvex;

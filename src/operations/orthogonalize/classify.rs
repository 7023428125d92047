use crate::geometry::Path;
use crate::math::frame::BaseFrame;
use crate::math::Vector2;

/// Orientation of a source edge relative to the base vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeLabel {
    /// Runs along the base vector.
    Along,
    /// Runs along the perpendicular of the base vector.
    Perpendicular,
}

/// Labels a single edge vector.
///
/// Equal projections fall to `Perpendicular`.
#[must_use]
pub fn classify_edge(frame: &BaseFrame, edge: &Vector2) -> EdgeLabel {
    let along = frame.along_component(edge).abs();
    let perp = frame.perp_component(edge).abs();
    if along > perp {
        EdgeLabel::Along
    } else {
        EdgeLabel::Perpendicular
    }
}

/// Labels every edge of `path`, one label per edge in path order.
#[must_use]
pub fn classify_edges(path: &Path, frame: &BaseFrame) -> Vec<EdgeLabel> {
    path.edges().map(|edge| classify_edge(frame, &edge)).collect()
}

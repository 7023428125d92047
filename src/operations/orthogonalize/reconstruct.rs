use super::classify::EdgeLabel;
use super::group::DirectionGroup;
use crate::geometry::Path;
use crate::math::cyclic;
use crate::math::frame::BaseFrame;

/// The two line constants meeting at one output node.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NodeLines {
    /// Offset of the `Along` group through this node.
    pub along_offset: f64,
    /// Offset of the `Perpendicular` group through this node.
    pub perp_offset: f64,
}

/// Collects, for every group, the lines meeting at its starting node:
/// its own line and the line of the group before it.
#[must_use]
pub fn node_lines(groups: &[DirectionGroup]) -> Vec<NodeLines> {
    let m = groups.len();
    (0..m)
        .map(|k| {
            let mut lines = NodeLines::default();
            for group in [&groups[cyclic::prev(k, m)], &groups[k]] {
                match group.label {
                    EdgeLabel::Along => lines.along_offset = group.offset,
                    EdgeLabel::Perpendicular => lines.perp_offset = group.offset,
                }
            }
            lines
        })
        .collect()
}

/// Builds the closed output path, one node per group plus the closing node.
///
/// Node `k` is the intersection of the lines of groups `k - 1` and `k`. In
/// the orthonormal base frame that intersection has the perpendicular
/// group's offset as its base coordinate and the along group's offset as
/// its perpendicular coordinate, so rotating back to world space is all
/// that is left.
#[must_use]
pub fn reconstruct_nodes(groups: &[DirectionGroup], frame: &BaseFrame) -> Path {
    let lines = node_lines(groups);
    let mut path = Path::with_capacity(lines.len() + 1);
    for l in &lines {
        path.push(frame.to_world(l.perp_offset, l.along_offset));
    }
    if let Some(&first) = path.first() {
        path.push(first);
    }
    path
}

use super::classify::EdgeLabel;
use super::group::DirectionGroup;
use crate::geometry::Path;
use crate::math::cyclic::{self, cyclic_range};

/// Runs one collapse pass over the reconstructed `output`.
///
/// Output edge `k` lies on the line of `groups[k]`. Every output edge
/// shorter than `collapse_length` relabels its source group, together with
/// the first edge of the following group, to the label of the edge just
/// before the group. The last group wraps around to the first edge of the
/// ring. Groups are processed in order against the labels as already
/// rewritten by this pass, so a run of consecutive short groups merges as
/// a unit.
///
/// Returns `true` if any label changed. Does nothing when
/// `collapse_length` is not positive.
pub fn collapse_short_edges(
    output: &Path,
    groups: &[DirectionGroup],
    labels: &mut [EdgeLabel],
    collapse_length: f64,
) -> bool {
    let n = labels.len();
    if n == 0 || collapse_length.is_nan() || collapse_length <= 0.0 {
        return false;
    }
    let limit_sq = collapse_length * collapse_length;

    let mut changed = false;
    for (group, edge) in groups.iter().zip(output.edges()) {
        if edge.norm_squared() >= limit_sq {
            continue;
        }
        let merged_label = labels[cyclic::prev(group.start, n)];
        for i in cyclic_range(group.start, group.len + 1, n) {
            if labels[i] != merged_label {
                labels[i] = merged_label;
                changed = true;
            }
        }
    }
    changed
}

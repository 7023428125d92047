use super::classify::EdgeLabel;
use crate::geometry::Path;
use crate::math::cyclic::{self, cyclic_range};
use crate::math::frame::BaseFrame;

/// A maximal cyclic run of source edges sharing one label.
///
/// The run covers edges `start, start + 1, ..., start + len - 1`, taken
/// modulo the edge count, so it may cross the closing node of the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionGroup {
    pub label: EdgeLabel,
    /// Index of the first edge of the run.
    pub start: usize,
    /// Number of edges in the run.
    pub len: usize,
    /// Averaged line constant of the run.
    ///
    /// For an `Along` run this is the coordinate on the perpendicular
    /// axis (`x * by - y * bx`); for a `Perpendicular` run the coordinate
    /// on the base axis (`x * bx + y * by`).
    pub offset: f64,
}

impl DirectionGroup {
    /// One past the last edge of the run, not reduced modulo the edge count.
    #[must_use]
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Splits the cyclic label sequence into direction groups.
///
/// Groups are returned in path order, starting with the first edge whose
/// label differs from its predecessor's, so a run that crosses the closing
/// node stays whole. If every edge shares one label the result is a single
/// group spanning the whole ring.
#[must_use]
pub fn aggregate_groups(labels: &[EdgeLabel], path: &Path, frame: &BaseFrame) -> Vec<DirectionGroup> {
    let n = labels.len();
    if n == 0 {
        return Vec::new();
    }

    let Some(first) = (0..n).find(|&i| labels[i] != labels[cyclic::prev(i, n)]) else {
        return vec![build_group(labels[0], 0, n, path, frame)];
    };

    let mut groups = Vec::new();
    let mut run_begin = 0;
    for k in 1..=n {
        let run_label = labels[cyclic::wrap(first + run_begin, n)];
        if k == n || labels[cyclic::wrap(first + k, n)] != run_label {
            let start = cyclic::wrap(first + run_begin, n);
            groups.push(build_group(run_label, start, k - run_begin, path, frame));
            run_begin = k;
        }
    }
    groups
}

/// Averages the line constant over both end nodes of every edge in the run.
///
/// Interior nodes are shared by two edges but counted once, so a run of
/// `len` edges samples `len + 1` nodes.
fn build_group(
    label: EdgeLabel,
    start: usize,
    len: usize,
    path: &Path,
    frame: &BaseFrame,
) -> DirectionGroup {
    let points = path.points();
    let n = path.edge_count();
    let samples = len + 1;

    let sum: f64 = cyclic_range(start, samples, n)
        .map(|i| {
            let p = points[i].coords;
            match label {
                EdgeLabel::Along => frame.perp_component(&p),
                EdgeLabel::Perpendicular => frame.along_component(&p),
            }
        })
        .sum();

    #[allow(clippy::cast_precision_loss)]
    let offset = sum / samples as f64;

    DirectionGroup {
        label,
        start,
        len,
        offset,
    }
}

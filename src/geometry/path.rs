use crate::math::{Point2, Vector2};

/// An ordered sequence of 2D nodes describing a polygonal path.
///
/// A closed path repeats its first node as its last one, so a closed
/// polygon with `k` corners holds `k + 1` nodes and `k` edges. Edge `i`
/// runs from node `i` to node `i + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point2>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty path with room for `capacity` nodes.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Creates a path from its nodes.
    #[must_use]
    pub fn from_points(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Creates a path from `(x, y)` pairs.
    #[must_use]
    pub fn from_coords(coords: &[(f64, f64)]) -> Self {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    /// Appends a node.
    pub fn push(&mut self, point: Point2) {
        self.points.push(point);
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The nodes of the path.
    #[must_use]
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    #[must_use]
    pub fn first(&self) -> Option<&Point2> {
        self.points.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Point2> {
        self.points.last()
    }

    /// Returns `true` if the path has at least one node and its first and
    /// last nodes are coordinate-equal.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(a), Some(b)) => a.x == b.x && a.y == b.y,
            _ => false,
        }
    }

    /// Number of edges between consecutive nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Vector of edge `i`, from node `i` to node `i + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.edge_count()`.
    #[must_use]
    pub fn edge(&self, i: usize) -> Vector2 {
        self.points[i + 1] - self.points[i]
    }

    /// Iterates the edge vectors in path order.
    pub fn edges(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.points.windows(2).map(|w| w[1] - w[0])
    }

    /// Consumes the path, returning its nodes.
    #[must_use]
    pub fn into_points(self) -> Vec<Point2> {
        self.points
    }
}

impl FromIterator<Point2> for Path {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Path {
        Path::from_coords(&[(0.0, 0.0), (2.0, 0.0), (2.0, 2.0), (0.0, 2.0), (0.0, 0.0)])
    }

    #[test]
    fn closed_square() {
        let path = square();
        assert!(path.is_closed());
        assert_eq!(path.len(), 5);
        assert_eq!(path.edge_count(), 4);
    }

    #[test]
    fn open_path_is_not_closed() {
        let path = Path::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        assert!(!path.is_closed());
    }

    #[test]
    fn empty_path() {
        let path = Path::new();
        assert!(path.is_empty());
        assert!(!path.is_closed());
        assert_eq!(path.edge_count(), 0);
        assert_eq!(path.edges().count(), 0);
    }

    #[test]
    fn edges_follow_node_order() {
        let path = square();
        let edges: Vec<Vector2> = path.edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Vector2::new(2.0, 0.0));
        assert_eq!(edges[3], Vector2::new(0.0, -2.0));
        assert_eq!(path.edge(1), Vector2::new(0.0, 2.0));
    }

    #[test]
    fn push_and_capacity() {
        let mut path = Path::with_capacity(8);
        assert!(path.is_empty());
        path.push(Point2::new(1.0, 2.0));
        path.push(Point2::new(3.0, 4.0));
        assert_eq!(path.len(), 2);
        assert_eq!(path.first(), Some(&Point2::new(1.0, 2.0)));
        assert_eq!(path.last(), Some(&Point2::new(3.0, 4.0)));
        assert_eq!(path.into_points().len(), 2);
    }
}

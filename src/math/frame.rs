use super::{Point2, Vector2};

/// An orthonormal frame spanned by a unit base vector and its perpendicular.
///
/// The perpendicular axis is the base vector rotated by -90°, so a point's
/// perpendicular coordinate is `x * by - y * bx`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseFrame {
    along: Vector2,
}

impl BaseFrame {
    /// Creates a frame from a unit base vector.
    ///
    /// The caller is responsible for normalization.
    #[must_use]
    pub fn new(along: Vector2) -> Self {
        Self { along }
    }

    /// The base (along) axis.
    #[must_use]
    pub fn along(&self) -> Vector2 {
        self.along
    }

    /// The perpendicular axis.
    #[must_use]
    pub fn perp(&self) -> Vector2 {
        Vector2::new(self.along.y, -self.along.x)
    }

    /// Signed component of `v` along the base axis.
    #[must_use]
    pub fn along_component(&self, v: &Vector2) -> f64 {
        v.dot(&self.along)
    }

    /// Signed component of `v` along the perpendicular axis.
    #[must_use]
    pub fn perp_component(&self, v: &Vector2) -> f64 {
        v.dot(&self.perp())
    }

    /// Converts frame coordinates back to a world point.
    ///
    /// `along_coord` is the coordinate on the base axis and `perp_coord`
    /// the coordinate on the perpendicular axis.
    #[must_use]
    pub fn to_world(&self, along_coord: f64, perp_coord: f64) -> Point2 {
        Point2::from(self.along * along_coord + self.perp() * perp_coord)
    }
}

use tracing::debug;

use super::validate_source;
use crate::error::{OperationError, Result};
use crate::geometry::Path;
use crate::math::frame::BaseFrame;
use crate::math::Vector2;

/// Angle range an edge vector is folded into before summation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoldVariant {
    /// Folded into `[0°, 90°)`.
    Quadrant,
    /// Folded into `(-45°, 45°]`.
    HalfQuadrant,
}

/// The estimated dominant orientation of a closed path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseDirection {
    /// Frame spanned by the unit base vector and its perpendicular.
    pub frame: BaseFrame,
    /// Sum over all edges of the squared deviation from the nearest axis.
    pub residual: f64,
    /// Which folding produced the base vector.
    pub variant: FoldVariant,
}

/// Estimates the base direction of a closed path.
///
/// Every edge is weighted by its squared length, then folded into both
/// `[0°, 90°)` and `(-45°, 45°]`. Each folded sum gives a candidate axis;
/// the candidate whose frame leaves the smaller residual wins. A tie keeps
/// the `[0°, 90°)` candidate.
///
/// Two foldings are needed because edges near the fold boundary of one
/// range (0°/90° for the first, ±45° for the second) split between both
/// ends of it and bias the sum.
///
/// # Errors
///
/// - `PathError::TooFewNodes` / `PathError::NotClosed` for invalid input
/// - `OperationError::DegenerateDirection` if both folded sums vanish or overflow
pub fn estimate_base_direction(path: &Path) -> Result<BaseDirection> {
    validate_source(path)?;

    let mut quadrant_sum = Vector2::zeros();
    let mut half_quadrant_sum = Vector2::zeros();
    for edge in path.edges() {
        let weighted = edge * edge.norm_squared();
        let v = if weighted.x < 0.0 { -weighted } else { weighted };
        quadrant_sum += fold_quadrant(v);
        half_quadrant_sum += fold_half_quadrant(v);
    }

    let candidates = [
        unit(quadrant_sum).map(|axis| candidate(path, axis, FoldVariant::Quadrant)),
        unit(half_quadrant_sum).map(|axis| candidate(path, axis, FoldVariant::HalfQuadrant)),
    ];

    let chosen = match candidates {
        [Some(a), Some(b)] => {
            if a.residual > b.residual {
                b
            } else {
                a
            }
        }
        [Some(c), None] | [None, Some(c)] => c,
        [None, None] => return Err(OperationError::DegenerateDirection.into()),
    };

    debug!(
        x = chosen.frame.along().x,
        y = chosen.frame.along().y,
        residual = chosen.residual,
        variant = ?chosen.variant,
        "base direction estimated"
    );
    Ok(chosen)
}

/// Sum over all edges of `min(along², perp²)` in the given frame.
#[must_use]
pub fn residual(path: &Path, frame: &BaseFrame) -> f64 {
    path.edges()
        .map(|edge| {
            let along = frame.along_component(&edge);
            let perp = frame.perp_component(&edge);
            (along * along).min(perp * perp)
        })
        .sum()
}

fn candidate(path: &Path, axis: Vector2, variant: FoldVariant) -> BaseDirection {
    let frame = BaseFrame::new(axis);
    BaseDirection {
        frame,
        residual: residual(path, &frame),
        variant,
    }
}

fn unit(v: Vector2) -> Option<Vector2> {
    let norm = v.norm();
    (norm.is_finite() && norm > 0.0).then(|| v / norm)
}

/// Folds a vector with `x >= 0` into `[0°, 90°)`.
fn fold_quadrant(v: Vector2) -> Vector2 {
    if v.y < 0.0 {
        Vector2::new(-v.y, v.x)
    } else {
        v
    }
}

/// Folds a vector with `x >= 0` into `(-45°, 45°]`.
fn fold_half_quadrant(v: Vector2) -> Vector2 {
    if v.y < 0.0 {
        if -v.y < v.x {
            v
        } else {
            Vector2::new(-v.y, v.x)
        }
    } else if v.y <= v.x {
        v
    } else {
        Vector2::new(v.y, -v.x)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{OrthoError, PathError};
    use approx::assert_abs_diff_eq;

    fn angle_deg(v: Vector2) -> f64 {
        v.y.atan2(v.x).to_degrees()
    }

    #[test]
    fn quadrant_fold_range() {
        for deg in [-89.0_f64, -45.0, -10.0, 0.0, 30.0, 89.0] {
            let r = deg.to_radians();
            let folded = fold_quadrant(Vector2::new(r.cos(), r.sin()));
            let a = angle_deg(folded);
            assert!((0.0..90.0).contains(&a), "{deg} folded to {a}");
        }
        // Straight down sits on the boundary and lands on 0°.
        let down = fold_quadrant(Vector2::new(0.0, -1.0));
        assert_abs_diff_eq!(angle_deg(down), 0.0);
    }

    #[test]
    fn half_quadrant_fold_range() {
        for deg in [-90.0_f64, -60.0, -45.0, -10.0, 0.0, 30.0, 45.0, 60.0, 90.0] {
            let r = deg.to_radians();
            let v = Vector2::new(r.cos().max(0.0), r.sin());
            let a = angle_deg(fold_half_quadrant(v));
            assert!(a > -45.0 - 1e-9 && a <= 45.0 + 1e-9, "{deg} folded to {a}");
        }
        let folded = fold_half_quadrant(Vector2::new(1.0, 2.0));
        assert_abs_diff_eq!(folded.x, 2.0);
        assert_abs_diff_eq!(folded.y, -1.0);
    }

    #[test]
    fn axis_aligned_rectangle_gives_x_axis() {
        let path = Path::from_coords(&[(0.0, 0.0), (8.0, 0.0), (8.0, 3.0), (0.0, 3.0), (0.0, 0.0)]);
        let base = estimate_base_direction(&path).unwrap();
        let along = base.frame.along();
        // Either axis is a valid base for a rectangle; this one lands on x.
        assert_abs_diff_eq!(along.x.abs(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(along.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(base.residual, 0.0, epsilon = 1e-12);
        assert_eq!(base.variant, FoldVariant::HalfQuadrant);
    }

    #[test]
    fn rotated_square_recovers_rotation() {
        let angle: f64 = 30.0_f64.to_radians();
        let (c, s) = (angle.cos(), angle.sin());
        let corners = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)];
        let rotated: Vec<(f64, f64)> = corners
            .iter()
            .map(|&(x, y)| (x * c - y * s, x * s + y * c))
            .collect();
        let base = estimate_base_direction(&Path::from_coords(&rotated)).unwrap();
        let along = base.frame.along();
        // The recovered axis is the rotation modulo 90°.
        let folded = angle_deg(along).rem_euclid(90.0);
        assert_abs_diff_eq!(folded, 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(base.residual, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn base_vector_is_unit_length() {
        let path = Path::from_coords(&[
            (0.0, 0.0),
            (10.0, 0.1),
            (10.1, 10.0),
            (0.0, 9.9),
            (0.0, 0.0),
        ]);
        let base = estimate_base_direction(&path).unwrap();
        assert_abs_diff_eq!(base.frame.along().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn residual_penalizes_skew() {
        let path = Path::from_coords(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
        let straight = residual(&path, &BaseFrame::new(Vector2::new(1.0, 0.0)));
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let skewed = residual(&path, &BaseFrame::new(Vector2::new(s, s)));
        assert_abs_diff_eq!(straight, 0.0);
        assert!(skewed > 1.0);
    }

    #[test]
    fn coincident_nodes_are_degenerate() {
        let path = Path::from_coords(&[(1.0, 1.0); 5]);
        let err = estimate_base_direction(&path).unwrap_err();
        assert!(matches!(
            err,
            OrthoError::Operation(OperationError::DegenerateDirection)
        ));
    }

    #[test]
    fn overflowing_weights_are_degenerate() {
        // Squared-length weights overflow to infinity at this scale.
        let path = Path::from_coords(&[
            (0.0, 0.0),
            (1e150, 2e149),
            (8e149, 1.2e150),
            (-2e149, 1e150),
            (0.0, 0.0),
        ]);
        let err = estimate_base_direction(&path).unwrap_err();
        assert!(matches!(
            err,
            OrthoError::Operation(OperationError::DegenerateDirection)
        ));
    }

    #[test]
    fn rejects_short_path() {
        let path = Path::from_coords(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 0.0)]);
        let err = estimate_base_direction(&path).unwrap_err();
        assert!(matches!(
            err,
            OrthoError::Path(PathError::TooFewNodes { count: 4 })
        ));
    }
}

pub mod base_direction;
pub mod classify;
pub mod collapse;
pub mod group;
pub mod reconstruct;

use tracing::{debug, warn};

use crate::error::{OperationError, PathError, Result};
use crate::geometry::Path;

pub use base_direction::{estimate_base_direction, BaseDirection, FoldVariant};
pub use classify::{classify_edges, EdgeLabel};
pub use collapse::collapse_short_edges;
pub use group::{aggregate_groups, DirectionGroup};
pub use reconstruct::{reconstruct_nodes, NodeLines};

/// Minimum node count of a source path: four corners plus the closing node.
pub const MIN_NODES: usize = 5;

/// Minimum group count of a reconstructable shape. Groups alternate
/// between the two labels, so fewer than four cannot enclose an area.
pub const MIN_GROUPS: usize = 4;

/// Parameters controlling orthogonalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthogonalizeParams {
    /// Output edges shorter than this are collapsed. Non-positive disables
    /// collapsing.
    pub collapse_length: f64,
    /// Cap on collapse passes. `None` allows one pass per source edge.
    pub max_iterations: Option<usize>,
}

impl Default for OrthogonalizeParams {
    fn default() -> Self {
        Self {
            collapse_length: 0.0,
            max_iterations: None,
        }
    }
}

/// Result of an orthogonalization with its diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Orthogonalized {
    /// The closed rectilinear output path.
    pub path: Path,
    /// The base direction the output is aligned to.
    pub base: BaseDirection,
    /// Number of collapse passes applied.
    pub collapse_passes: usize,
}

/// Converts a closed path into a rectilinear approximation.
///
/// # Algorithm
///
/// 1. Estimate the base direction from the length-weighted edge angles
/// 2. Label each source edge as along or perpendicular to it
/// 3. Merge cyclic runs of equal labels into groups, each with one
///    averaged line constant
/// 4. Intersect consecutive group lines to get the output nodes
/// 5. While output edges are shorter than the collapse length, fold their
///    groups into the preceding label and repeat from step 3
#[derive(Debug)]
pub struct Orthogonalize {
    path: Path,
    params: OrthogonalizeParams,
}

impl Orthogonalize {
    /// Creates a new orthogonalization with default parameters.
    #[must_use]
    pub fn new(path: Path) -> Self {
        Self {
            path,
            params: OrthogonalizeParams::default(),
        }
    }

    /// Sets the minimal output edge length.
    #[must_use]
    pub fn with_collapse_length(mut self, collapse_length: f64) -> Self {
        self.params.collapse_length = collapse_length;
        self
    }

    /// Sets all parameters at once.
    #[must_use]
    pub fn with_params(mut self, params: OrthogonalizeParams) -> Self {
        self.params = params;
        self
    }

    /// Executes the operation, returning the closed output path.
    ///
    /// # Errors
    ///
    /// - `PathError::TooFewNodes` if the source has fewer than 5 nodes
    /// - `PathError::NotClosed` if its first and last nodes differ
    /// - `OperationError::DegenerateDirection` if no base direction exists
    /// - `OperationError::DegenerateShape` if the edges do not form at
    ///   least four direction groups
    /// - `OperationError::CollapsedShape` if collapsing short edges leaves
    ///   fewer than four direction groups
    /// - `OperationError::CollapseLimit` if short edges remain after
    ///   `max_iterations` collapse passes
    pub fn execute(&self) -> Result<Path> {
        self.execute_detailed().map(|result| result.path)
    }

    /// Executes the operation, returning the output path with diagnostics.
    ///
    /// # Errors
    ///
    /// Same as [`Orthogonalize::execute`].
    pub fn execute_detailed(&self) -> Result<Orthogonalized> {
        let base = estimate_base_direction(&self.path)?;
        let frame = base.frame;

        let mut labels = classify_edges(&self.path, &frame);
        let mut groups = aggregate_groups(&labels, &self.path, &frame);
        if groups.len() < MIN_GROUPS {
            return Err(OperationError::DegenerateShape {
                groups: groups.len(),
            }
            .into());
        }
        let mut output = reconstruct_nodes(&groups, &frame);
        debug!(groups = groups.len(), "initial reconstruction");

        let collapse_length = self.params.collapse_length;
        let max_passes = self.params.max_iterations.unwrap_or(labels.len());
        let mut collapse_passes = 0;

        if collapse_length > 0.0 {
            while collapse_short_edges(&output, &groups, &mut labels, collapse_length) {
                if collapse_passes >= max_passes {
                    warn!(max_passes, "collapse pass limit reached, short edges remain");
                    return Err(OperationError::CollapseLimit {
                        passes: collapse_passes,
                    }
                    .into());
                }
                groups = aggregate_groups(&labels, &self.path, &frame);
                if groups.len() < MIN_GROUPS {
                    warn!(groups = groups.len(), "collapse degenerated the shape");
                    return Err(OperationError::CollapsedShape {
                        groups: groups.len(),
                    }
                    .into());
                }

                collapse_passes += 1;
                output = reconstruct_nodes(&groups, &frame);
                debug!(pass = collapse_passes, groups = groups.len(), "collapse pass");
            }
        }

        Ok(Orthogonalized {
            path: output,
            base,
            collapse_passes,
        })
    }
}

/// Checks the preconditions every source path must meet.
///
/// # Errors
///
/// - `PathError::TooFewNodes` if `path` has fewer than [`MIN_NODES`] nodes
/// - `PathError::NotClosed` if its first and last nodes differ
pub fn validate_source(path: &Path) -> Result<()> {
    if path.len() < MIN_NODES {
        return Err(PathError::TooFewNodes { count: path.len() }.into());
    }
    if !path.is_closed() {
        return Err(PathError::NotClosed.into());
    }
    Ok(())
}

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod text;

pub use error::{OrthoError, Result};
pub use geometry::path::Path;
pub use operations::orthogonalize::{Orthogonalize, OrthogonalizeParams, Orthogonalized};

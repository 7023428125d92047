pub mod orthogonalize;

pub use orthogonalize::{Orthogonalize, OrthogonalizeParams, Orthogonalized};

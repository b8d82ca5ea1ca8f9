pub mod distance;
pub mod vector;

pub use vector::{IndexError, VectorIndex};

pub mod sampling;
pub mod summary;

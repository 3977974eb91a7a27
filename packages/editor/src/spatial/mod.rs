pub mod dirty;
pub mod grid;

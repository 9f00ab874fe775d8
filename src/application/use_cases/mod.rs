pub mod filter_operations;

pub use filter_operations::*;

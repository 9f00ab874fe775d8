pub mod validation;

pub use validation::FilterOptionValidator;

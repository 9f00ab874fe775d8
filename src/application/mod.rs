pub mod dto;
pub mod use_case_container;
pub mod use_cases;

#[cfg(test)]
pub mod test_support;

pub use use_case_container::UseCaseContainer;

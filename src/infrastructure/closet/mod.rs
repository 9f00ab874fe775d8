pub mod memory_store;
pub mod state_repository;

pub use memory_store::InMemoryClosetStore;
pub use state_repository::ClosetStateRepository;

pub mod closet_store;

pub use closet_store::ClosetStore;

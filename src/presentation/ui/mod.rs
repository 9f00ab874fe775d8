pub mod app;
pub mod screens;

pub use app::WardrobeApp;

pub mod closet;
pub mod config_repository;

pub use config_repository::ConfigRepository;

use std::path::PathBuf;

pub fn config_dir() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config").join("wardrobe")
    } else {
        PathBuf::from(".")
    }
}

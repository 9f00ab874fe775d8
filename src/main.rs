mod application;
mod domain;
mod infrastructure;
mod presentation;

use application::UseCaseContainer;
use domain::repositories::ClosetStore;
use infrastructure::ConfigRepository;
use infrastructure::closet::{ClosetStateRepository, InMemoryClosetStore};
use presentation::services::init_log_capture;
use presentation::ui::WardrobeApp;
use std::sync::Arc;

fn main() -> eframe::Result<()> {
    let log_rx = init_log_capture();

    let config_repository = ConfigRepository::new();
    let config = config_repository.load().unwrap_or_else(|e| {
        tracing::warn!("Using default settings: {:#}", e);
        Default::default()
    });

    let closet_store: Arc<dyn ClosetStore> =
        match InMemoryClosetStore::persistent(ClosetStateRepository::new()) {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!("Starting with an empty closet state: {:#}", e);
                Arc::new(InMemoryClosetStore::default())
            }
        };
    let use_cases = Arc::new(UseCaseContainer::new(closet_store));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 820.0])
            .with_min_inner_size([360.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Wardrobe",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(WardrobeApp::new(
                use_cases,
                config,
                config_repository,
                log_rx,
            )))
        }),
    )
}

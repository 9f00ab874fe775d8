use crate::presentation::components::LogManager;
use eframe::egui;

pub enum LogAction {
    CopyAll,
    Clear,
}

pub struct LogPanel;

impl LogPanel {
    pub fn show(ui: &mut egui::Ui, log_manager: &LogManager) -> Vec<LogAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Activity").strong());
            if ui.small_button("📋 Copy All").clicked() {
                actions.push(LogAction::CopyAll);
            }
            if ui.small_button("🗑 Clear").clicked() {
                actions.push(LogAction::Clear);
            }
        });

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.set_style({
                    let mut style = (*ui.ctx().style()).clone();
                    style.override_font_id = Some(egui::FontId::monospace(12.0));
                    style
                });

                for entry in log_manager.filtered_logs_reversed() {
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new(format!("[{}]", entry.format_timestamp()))
                                .color(egui::Color32::GRAY)
                                .monospace(),
                        );
                        ui.monospace(&entry.message);
                    });
                }
            });

        actions
    }
}

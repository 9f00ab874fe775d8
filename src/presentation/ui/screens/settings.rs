use crate::domain::entities::{AppConfig, FlagCommitMode, ThemeMode};
use crate::presentation::components::{LogLevel, LogManager};
use eframe::egui;

pub enum SettingsAction {
    SaveConfig,
    ApplyTheme,
    Back,
}

pub struct SettingsScreen;

impl SettingsScreen {
    pub fn show(
        ui: &mut egui::Ui,
        config: &mut AppConfig,
        log_manager: &mut LogManager,
    ) -> Vec<SettingsAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            if ui.button("← Back").clicked() {
                actions.push(SettingsAction::Back);
            }
            ui.heading("Settings");
        });
        ui.separator();

        ui.group(|ui| {
            ui.heading("General");

            ui.horizontal(|ui| {
                ui.label("Theme:");
                egui::ComboBox::new("theme_combo", "")
                    .selected_text(format!("{:?}", config.theme))
                    .show_ui(ui, |ui| {
                        for (mode, label) in [
                            (ThemeMode::System, "System"),
                            (ThemeMode::Light, "Light"),
                            (ThemeMode::Dark, "Dark"),
                        ] {
                            if ui.selectable_value(&mut config.theme, mode, label).clicked() {
                                actions.push(SettingsAction::SaveConfig);
                                actions.push(SettingsAction::ApplyTheme);
                            }
                        }
                    });
            });
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.heading("Applying Filters");
            ui.label("How the favorite, sale and outfit switches are written to your closet:");
            for mode in [FlagCommitMode::Assign, FlagCommitMode::Toggle] {
                if ui
                    .radio_value(&mut config.flag_commit_mode, mode, mode.label())
                    .changed()
                {
                    actions.push(SettingsAction::SaveConfig);
                }
            }
            if config.flag_commit_mode == FlagCommitMode::Toggle {
                ui.label(
                    egui::RichText::new(
                        "Unchecked switches are left as they are, and re-applying a checked switch turns it off.",
                    )
                    .small()
                    .weak(),
                );
            }
        });

        ui.add_space(10.0);

        ui.group(|ui| {
            ui.heading("Log Levels");
            for level in LogLevel::ALL {
                let mut visible = log_manager.is_level_visible(level);
                if ui.checkbox(&mut visible, level.label()).changed() {
                    log_manager.set_level_visible(level, visible);
                }
            }
        });

        actions
    }
}

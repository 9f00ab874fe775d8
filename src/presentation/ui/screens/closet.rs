use crate::domain::entities::{ClosetFilters, TextField};
use crate::presentation::style::ACCENT;
use eframe::egui;

pub enum ClosetAction {
    OpenFilters,
    OpenSettings,
}

pub struct ClosetScreen;

impl ClosetScreen {
    pub fn show(ui: &mut egui::Ui, filters: &ClosetFilters) -> Vec<ClosetAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            ui.heading("My Closet");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    actions.push(ClosetAction::OpenSettings);
                }
                let label = match filters.active_count() {
                    0 => "Filter & Sort".to_string(),
                    n => format!("Filter & Sort ({})", n),
                };
                if ui.button(label).clicked() {
                    actions.push(ClosetAction::OpenFilters);
                }
            });
        });
        ui.separator();

        ui.label(egui::RichText::new("Active filters").strong());
        let chips = active_chips(filters);
        if chips.is_empty() {
            ui.label(egui::RichText::new("Showing everything in your closet").weak());
        } else {
            ui.horizontal_wrapped(|ui| {
                for chip in chips {
                    ui.label(egui::RichText::new(chip).color(ACCENT));
                }
            });
        }

        ui.add_space(8.0);
        ui.label(format!("Condition: {}", filters.condition.label()));
        ui.label(format!(
            "Sorted by {} ({})",
            filters.sort_field.label(),
            filters.sort_direction_label()
        ));

        actions
    }
}

fn active_chips(filters: &ClosetFilters) -> Vec<String> {
    let mut chips = Vec::new();
    if !filters.category.is_empty() {
        chips.push(TextField::Category.display_value(&filters.category).to_string());
    }
    if !filters.brand.is_empty() {
        chips.push(TextField::Brand.display_value(&filters.brand).to_string());
    }
    if filters.only_favorited {
        chips.push("★ Favorites".to_string());
    }
    if filters.only_on_sale {
        chips.push("For sale".to_string());
    }
    if filters.only_in_outfits {
        chips.push("In outfits".to_string());
    }
    chips
}

use crate::domain::entities::{Condition, FieldUpdate, FilterDraft, QuickPreset, SortField, TextField};
use eframe::egui;

pub enum FilterAction {
    Update(FieldUpdate),
    Preset(&'static str),
    ClearAll,
    Apply,
    Cancel,
}

pub struct FiltersScreen;

impl FiltersScreen {
    pub fn show(ui: &mut egui::Ui, draft: &FilterDraft) -> Vec<FilterAction> {
        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            if ui.button("✕ Cancel").clicked() {
                actions.push(FilterAction::Cancel);
            }
            ui.heading("Filter & Sort");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear All").clicked() {
                    actions.push(FilterAction::ClearAll);
                }
            });
        });
        ui.separator();

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.group(|ui| {
                    ui.label(egui::RichText::new("Quick Filters").strong());
                    ui.horizontal_wrapped(|ui| {
                        for preset in QuickPreset::ALL {
                            if ui.button(preset.label()).clicked() {
                                actions.push(FilterAction::Preset(preset.id()));
                            }
                        }
                    });
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.label(egui::RichText::new("Filters").strong());
                    option_combo(ui, "Category", TextField::Category, draft, &mut actions);
                    option_combo(ui, "Brand", TextField::Brand, draft, &mut actions);
                    option_combo(ui, "Size", TextField::Size, draft, &mut actions);
                    option_combo(ui, "Color", TextField::Color, draft, &mut actions);
                    ui.label(
                        egui::RichText::new("Size and color narrow this form only.")
                            .small()
                            .weak(),
                    );

                    ui.horizontal(|ui| {
                        ui.label("Condition:");
                        egui::ComboBox::new("condition_combo", "")
                            .selected_text(draft.condition.label())
                            .show_ui(ui, |ui| {
                                for condition in Condition::ALL {
                                    if ui
                                        .selectable_label(draft.condition == condition, condition.label())
                                        .clicked()
                                    {
                                        actions.push(FilterAction::Update(FieldUpdate::Condition(
                                            condition,
                                        )));
                                    }
                                }
                            });
                    });
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.label(egui::RichText::new("Show Only").strong());

                    let mut favorited = draft.only_favorited;
                    if ui.checkbox(&mut favorited, "Favorites").changed() {
                        actions.push(FilterAction::Update(FieldUpdate::OnlyFavorited(favorited)));
                    }

                    let mut on_sale = draft.only_on_sale;
                    if ui.checkbox(&mut on_sale, "Items for sale").changed() {
                        actions.push(FilterAction::Update(FieldUpdate::OnlyOnSale(on_sale)));
                    }

                    let mut in_outfits = draft.only_in_outfits;
                    if ui.checkbox(&mut in_outfits, "Items in outfits").changed() {
                        actions.push(FilterAction::Update(FieldUpdate::OnlyInOutfits(in_outfits)));
                    }
                });

                ui.add_space(8.0);

                ui.group(|ui| {
                    ui.label(egui::RichText::new("Sort By").strong());
                    ui.horizontal(|ui| {
                        egui::ComboBox::new("sort_field_combo", "")
                            .selected_text(draft.sort_field.label())
                            .show_ui(ui, |ui| {
                                for field in SortField::ALL {
                                    if ui
                                        .selectable_label(draft.sort_field == field, field.label())
                                        .clicked()
                                    {
                                        actions.push(FilterAction::Update(FieldUpdate::SortField(
                                            field,
                                        )));
                                    }
                                }
                            });

                        if ui
                            .selectable_label(draft.sort_ascending, "↑ Ascending")
                            .clicked()
                            && !draft.sort_ascending
                        {
                            actions.push(FilterAction::Update(FieldUpdate::SortAscending(true)));
                        }
                        if ui
                            .selectable_label(!draft.sort_ascending, "↓ Descending")
                            .clicked()
                            && draft.sort_ascending
                        {
                            actions.push(FilterAction::Update(FieldUpdate::SortAscending(false)));
                        }
                    });
                });

                ui.add_space(12.0);

                ui.vertical_centered_justified(|ui| {
                    if ui.button("Apply Filters").clicked() {
                        actions.push(FilterAction::Apply);
                    }
                });
            });

        actions
    }
}

fn option_combo(
    ui: &mut egui::Ui,
    label: &str,
    field: TextField,
    draft: &FilterDraft,
    actions: &mut Vec<FilterAction>,
) {
    let current = draft.text(field);

    ui.horizontal(|ui| {
        ui.label(format!("{}:", label));
        egui::ComboBox::new(format!("{}_combo", field), "")
            .selected_text(field.display_value(current))
            .show_ui(ui, |ui| {
                for option in field.options() {
                    if ui
                        .selectable_label(*option == current, field.display_value(option))
                        .clicked()
                    {
                        actions.push(FilterAction::Update(FieldUpdate::Text(
                            field,
                            option.to_string(),
                        )));
                    }
                }
            });
    });
}

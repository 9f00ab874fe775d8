use crate::application::UseCaseContainer;
use crate::domain::entities::AppConfig;
use crate::infrastructure::ConfigRepository;
use crate::presentation::components::{
    FilterFormController, FormOutcome, LogManager, NavigationStack, Screen,
};
use crate::presentation::style::configure_style;
use crate::presentation::ui::screens::{
    ClosetAction, ClosetScreen, FilterAction, FiltersScreen, LogAction, LogPanel, SettingsAction,
    SettingsScreen,
};
use std::sync::Arc;
use std::sync::mpsc::Receiver;

pub struct WardrobeApp {
    navigation: NavigationStack,
    filter_form: Option<FilterFormController>,
    log_manager: LogManager,
    log_rx: Receiver<String>,

    use_cases: Arc<UseCaseContainer>,
    config: AppConfig,
    config_repository: ConfigRepository,

    style_applied: bool,
    status_message: String,
}

impl WardrobeApp {
    pub fn new(
        use_cases: Arc<UseCaseContainer>,
        config: AppConfig,
        config_repository: ConfigRepository,
        log_rx: Receiver<String>,
    ) -> Self {
        Self {
            navigation: NavigationStack::new(),
            filter_form: None,
            log_manager: LogManager::new(),
            log_rx,
            use_cases,
            config,
            config_repository,
            style_applied: false,
            status_message: String::new(),
        }
    }

    fn drain_logs(&mut self) {
        self.log_manager.extend(self.log_rx.try_iter());
    }

    fn open_filters(&mut self) {
        self.filter_form = Some(FilterFormController::open(&self.use_cases));
        self.navigation.push(Screen::Filters);
        tracing::info!("Opened filter screen");
    }

    fn close_filters(&mut self) {
        if let Some(form) = self.filter_form.take() {
            match form.outcome() {
                FormOutcome::Committed => self.status_message = "Filters applied".to_string(),
                FormOutcome::Cancelled => self.status_message = "Filters unchanged".to_string(),
                FormOutcome::Editing => {}
            }
        }
        self.navigation.pop();
    }

    fn handle_filter_actions(&mut self, actions: Vec<FilterAction>) {
        let Some(form) = self.filter_form.as_mut() else {
            return;
        };

        for action in actions {
            match action {
                FilterAction::Update(update) => form.set_field(update),
                FilterAction::Preset(id) => form.apply_quick_preset(id),
                FilterAction::ClearAll => form.clear_all(),
                FilterAction::Apply => {
                    if let Err(e) = form.commit(self.config.flag_commit_mode) {
                        self.status_message = format!("Could not apply filters: {:#}", e);
                    }
                }
                FilterAction::Cancel => form.cancel(),
            }
        }

        if form.is_closed() {
            self.close_filters();
        }
    }

    fn handle_settings_actions(&mut self, ctx: &egui::Context, actions: Vec<SettingsAction>) {
        for action in actions {
            match action {
                SettingsAction::SaveConfig => {
                    if let Err(e) = self.config_repository.save(&self.config) {
                        tracing::error!("Failed to save config: {:#}", e);
                        self.status_message = format!("Failed to save settings: {}", e);
                    }
                }
                SettingsAction::ApplyTheme => configure_style(ctx, self.config.theme),
                SettingsAction::Back => {
                    self.navigation.pop();
                }
            }
        }
    }

    fn handle_log_actions(&mut self, ctx: &egui::Context, actions: Vec<LogAction>) {
        for action in actions {
            match action {
                LogAction::CopyAll => ctx.copy_text(self.log_manager.export_text()),
                LogAction::Clear => self.log_manager.clear(),
            }
        }
    }
}

impl eframe::App for WardrobeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_applied {
            configure_style(ctx, self.config.theme);
            self.style_applied = true;
        }

        self.drain_logs();

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_message);
            });
        });

        let log_actions = egui::TopBottomPanel::bottom("activity_panel")
            .resizable(true)
            .default_height(160.0)
            .show(ctx, |ui| LogPanel::show(ui, &self.log_manager))
            .inner;
        self.handle_log_actions(ctx, log_actions);

        egui::CentralPanel::default().show(ctx, |ui| match self.navigation.current() {
            Screen::Closet => {
                let filters = self.use_cases.get_filters.execute();
                for action in ClosetScreen::show(ui, &filters) {
                    match action {
                        ClosetAction::OpenFilters => self.open_filters(),
                        ClosetAction::OpenSettings => self.navigation.push(Screen::Settings),
                    }
                }
            }
            Screen::Filters => {
                let actions = self
                    .filter_form
                    .as_ref()
                    .map(|form| FiltersScreen::show(ui, form.draft()));
                match actions {
                    Some(actions) => self.handle_filter_actions(actions),
                    None => {
                        self.navigation.pop();
                    }
                }
            }
            Screen::Settings => {
                let actions = SettingsScreen::show(ui, &mut self.config, &mut self.log_manager);
                self.handle_settings_actions(ctx, actions);
            }
        });

        // Log lines are pushed without a UI event.
        ctx.request_repaint_after(std::time::Duration::from_millis(250));
    }
}

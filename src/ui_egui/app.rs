use crate::models::settings::GridSettings;
use crate::services::grid::WeekGrid;
use crate::services::settings::SettingsService;
use crate::ui_egui::views::WeekGridView;

pub struct WeekGridApp {
    /// Settings as last applied to the grid
    settings: GridSettings,
    /// Toolbar edits, applied once they validate
    draft: GridSettings,
    settings_error: Option<String>,
    settings_service: SettingsService,
    grid: WeekGrid,
    view: WeekGridView,
}

impl eframe::App for WeekGridApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("week_grid_toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.view.show(ui, &mut self.grid);
        });

        // Deferred work must not be visible to the handlers that scheduled it.
        self.grid.end_turn();
    }
}

impl WeekGridApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        settings: GridSettings,
        settings_service: SettingsService,
    ) -> Self {
        log::info!(
            "Week grid {:02}:{:02}-{:02}:{:02}, {:?}",
            settings.start_hour,
            settings.start_minute,
            settings.end_hour,
            settings.end_minute,
            settings.direction
        );
        Self {
            grid: WeekGrid::new(&settings),
            draft: settings.clone(),
            settings,
            settings_error: None,
            settings_service,
            view: WeekGridView::new(),
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("From");
            ui.add(egui::DragValue::new(&mut self.draft.start_hour).clamp_range(0..=23));
            ui.label(":");
            ui.add(
                egui::DragValue::new(&mut self.draft.start_minute)
                    .clamp_range(0..=45)
                    .speed(0.2)
                    .custom_formatter(|n, _| format!("{:02}", n)),
            );
            ui.separator();
            ui.label("To");
            ui.add(egui::DragValue::new(&mut self.draft.end_hour).clamp_range(0..=24));
            ui.label(":");
            ui.add(
                egui::DragValue::new(&mut self.draft.end_minute)
                    .clamp_range(0..=45)
                    .speed(0.2)
                    .custom_formatter(|n, _| format!("{:02}", n)),
            );

            ui.separator();
            if ui.button("Save").clicked() {
                self.save_settings();
            }

            ui.separator();
            ui.label(format!("{} events", self.grid.events().len()));

            if let Some(err) = &self.settings_error {
                ui.colored_label(ui.visuals().error_fg_color, err);
            }
        });

        self.apply_draft_window();
    }

    /// Push a changed time window into the grid once it validates.
    fn apply_draft_window(&mut self) {
        if self.draft.window() == self.settings.window() {
            return;
        }
        // Minutes snap to the slot grid while dragging the value.
        self.draft.start_minute -= self.draft.start_minute % 15;
        self.draft.end_minute -= self.draft.end_minute % 15;

        match self.draft.validate() {
            Ok(()) => {
                self.settings_error = None;
                self.settings = self.draft.clone();
                self.grid.set_window(self.settings.window());
            }
            Err(err) => {
                log::warn!("Rejected time window: {}", err);
                self.settings_error = Some(err.to_string());
            }
        }
    }

    fn save_settings(&mut self) {
        match self.settings_service.update(&self.settings) {
            Ok(()) => {
                log::info!("Saved settings to {}", self.settings_service.path().display());
                self.settings_error = None;
            }
            Err(err) => {
                log::error!("Failed to save settings: {:#}", err);
                self.settings_error = Some(format!("{:#}", err));
            }
        }
    }
}

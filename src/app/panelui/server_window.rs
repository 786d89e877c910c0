use eframe::egui::{self, Button, Color32, DragValue, Grid, Window};

use crate::app::panel_config::{
    Rgb, ServerEntry, DEFAULT_CHECK_INTERVAL, DEFAULT_COLOR_OFFLINE, DEFAULT_COLOR_ONLINE,
};

/// Modal for adding a monitored server row to the panel.
pub struct AddServerWindow {
    /// Whether to show the window
    pub show: bool,
    pub name: String,
    pub host: String,
    /// Port as typed; empty means "no port" and round-trips as null.
    pub port: String,
    pub check_interval: u32,
    pub color_online: Rgb,
    pub color_offline: Rgb,
}

impl Default for AddServerWindow {
    fn default() -> Self {
        Self {
            show: false,
            name: String::new(),
            host: String::new(),
            port: String::new(),
            check_interval: DEFAULT_CHECK_INTERVAL,
            color_online: DEFAULT_COLOR_ONLINE,
            color_offline: DEFAULT_COLOR_OFFLINE,
        }
    }
}

impl AddServerWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window with fresh defaults.
    pub fn open(&mut self) {
        self.name.clear();
        self.host.clear();
        self.port.clear();
        self.check_interval = DEFAULT_CHECK_INTERVAL;
        self.color_online = DEFAULT_COLOR_ONLINE;
        self.color_offline = DEFAULT_COLOR_OFFLINE;
        self.show = true;
    }

    /// Show the window; returns the new entry when Add is clicked.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ServerEntry> {
        if !self.show {
            return None;
        }

        let mut result = None;
        let mut close_window = false;
        let mut show_window = self.show;

        Window::new("Add Server")
            .open(&mut show_window)
            .min_width(320.0)
            .resizable(false)
            .show(ctx, |ui| {
                Grid::new("add_server_grid")
                    .num_columns(2)
                    .spacing([10.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Name:");
                        ui.text_edit_singleline(&mut self.name);
                        ui.end_row();

                        ui.label("Host:");
                        ui.text_edit_singleline(&mut self.host)
                            .on_hover_text("Hostname or IP address to check");
                        ui.end_row();

                        ui.label("Port:");
                        ui.text_edit_singleline(&mut self.port)
                            .on_hover_text("Leave empty to check the host without a port");
                        ui.end_row();

                        ui.label("Check every:");
                        ui.add(
                            DragValue::new(&mut self.check_interval)
                                .range(1..=3600)
                                .suffix(" s"),
                        );
                        ui.end_row();

                        ui.label("Online color:");
                        ui.color_edit_button_srgb(&mut self.color_online);
                        ui.end_row();

                        ui.label("Offline color:");
                        ui.color_edit_button_srgb(&mut self.color_offline);
                        ui.end_row();
                    });

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        close_window = true;
                    }

                    // Add button - enabled only when the form is valid
                    let valid = self.validation_error().is_none();
                    let add_button = ui.add_enabled(valid, Button::new("Add"));
                    if add_button.clicked() {
                        result = Some(self.build_entry());
                        close_window = true;
                    }

                    if let Some(message) = self.validation_error() {
                        ui.colored_label(Color32::GRAY, message);
                    }
                });
            });

        // Update show state
        self.show = show_window;

        // Close window if requested
        if close_window {
            self.show = false;
        }

        result
    }

    /// First problem with the form, or None when it can be submitted.
    fn validation_error(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() || self.host.trim().is_empty() {
            return Some("Name and host are required");
        }
        if !self.port.trim().is_empty() && self.port.trim().parse::<u16>().is_err() {
            return Some("Port must be a number up to 65535");
        }
        None
    }

    /// Builds the entry from the validated form state.
    fn build_entry(&self) -> ServerEntry {
        let port = self.port.trim().parse::<u16>().ok();
        let mut entry = ServerEntry::new(self.name.trim(), self.host.trim(), port);
        entry.check_interval = self.check_interval;
        entry.color_online = self.color_online;
        entry.color_offline = self.color_offline;
        entry
    }
}

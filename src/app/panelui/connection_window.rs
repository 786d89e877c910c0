use eframe::egui::{self, Button, Color32, RichText, Window};

use crate::app::api_client::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Modal for pointing the designer at a different panel service.
#[derive(Default)]
pub struct ConnectionWindow {
    /// Whether to show the window
    pub show: bool,
    pub base_url: String,
}

impl ConnectionWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the window pre-filled with the current base URL.
    pub fn open(&mut self, current: &str) {
        self.base_url = current.to_string();
        self.show = true;
    }

    /// Show the window; returns the new base URL when Connect is clicked.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<String> {
        if !self.show {
            return None;
        }

        let mut result = None;
        let mut close_window = false;
        let mut show_window = self.show;

        Window::new("Connection Settings")
            .open(&mut show_window)
            .min_width(360.0)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Panel service URL:");
                ui.text_edit_singleline(&mut self.base_url);

                ui.label(
                    RichText::new(format!(
                        "Set {} to override this at startup. Reconnecting reloads \
                         the configuration and widget list.",
                        BASE_URL_ENV
                    ))
                    .small()
                    .color(ui.visuals().weak_text_color()),
                );

                ui.separator();

                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        close_window = true;
                    }

                    let valid = self.validation_error().is_none();
                    let connect_button = ui.add_enabled(valid, Button::new("Connect"));
                    if connect_button.clicked() {
                        result = Some(self.base_url.trim().to_string());
                        close_window = true;
                    }

                    if ui.button("Reset to Default").clicked() {
                        self.base_url = DEFAULT_BASE_URL.to_string();
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

    fn validation_error(&self) -> Option<&'static str> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Some("A URL is required");
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Some("The URL must start with http:// or https://");
        }
        None
    }
}

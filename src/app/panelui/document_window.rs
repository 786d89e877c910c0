use eframe::egui::{self, Color32, ScrollArea, Window};
use egui_json_tree::{DefaultExpand, JsonTree};

use crate::app::panel_config::PanelConfig;

/// Read-only JSON view of the working document: exactly what a save would POST,
/// including backend-owned fields the editor never touches.
#[derive(Default)]
pub struct DocumentWindow {
    /// Whether to show the window
    pub show: bool,
    search_term: String,
}

impl DocumentWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.show = true;
    }

    pub fn show(&mut self, ctx: &egui::Context, config: &PanelConfig) {
        if !self.show {
            return;
        }

        let mut show_window = self.show;

        Window::new("Raw Document")
            .open(&mut show_window)
            .min_width(380.0)
            .min_height(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                let value = match serde_json::to_value(config) {
                    Ok(value) => value,
                    Err(e) => {
                        ui.colored_label(
                            Color32::from_rgb(220, 50, 50),
                            format!("Failed to render document: {}", e),
                        );
                        return;
                    }
                };

                ui.horizontal(|ui| {
                    ui.label("Search:");
                    ui.text_edit_singleline(&mut self.search_term);
                    if ui.small_button("✖").clicked() {
                        self.search_term.clear();
                    }
                    if ui.button("Copy JSON").clicked() {
                        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
                            ui.ctx().copy_text(pretty);
                        }
                    }
                });
                ui.separator();

                let expand_mode = if self.search_term.is_empty() {
                    DefaultExpand::All
                } else {
                    DefaultExpand::SearchResults(&self.search_term)
                };

                ScrollArea::vertical().show(ui, |ui| {
                    JsonTree::new("panel_document_tree", &value)
                        .default_expand(expand_mode)
                        .show(ui);
                });
            });

        self.show = show_window;
    }
}

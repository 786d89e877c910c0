//! UI rendering for the menu bar, status bar, panels, and windows

use super::{DesignerApp, PendingAction};
use crate::app::notifications::details_window::NotificationDetailsWindow;
use crate::app::panelui::{canvas, menu, palette, properties_panel};
use eframe::egui;
use std::time::Duration;

impl DesignerApp {
    /// Render the top menu bar
    pub(super) fn render_top_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                let menu_action = menu::build_menu(
                    ui,
                    ctx,
                    &mut self.theme,
                    &mut self.log_window.open,
                    self.service_status,
                    &self.base_url,
                    self.save_in_flight,
                );

                // Handle menu actions
                match menu_action {
                    menu::MenuAction::ThemeChanged => {
                        tracing::info!("Theme changed to {}", self.theme);
                    }
                    menu::MenuAction::Save => {
                        self.spawn_save(false);
                    }
                    menu::MenuAction::SaveAndRestart => {
                        self.spawn_save(true);
                    }
                    menu::MenuAction::ReloadFromService => {
                        self.reload_from_service();
                    }
                    menu::MenuAction::ShowDocument => {
                        self.document_window.open();
                    }
                    menu::MenuAction::ShowConnectionSettings => {
                        self.connection_window.open(&self.base_url);
                    }
                    menu::MenuAction::ClearAll => {
                        self.confirm_clear_all = true;
                    }
                    menu::MenuAction::Quit => {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        tracing::info!("Quit requested from Designer menu");
                    }
                    menu::MenuAction::None => {}
                }
            });
        });
    }

    /// Bottom status strip: notifications on the left, build info on the right.
    pub(super) fn render_status_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("bottom_panel")
            .show_separator_line(false)
            .resizable(false)
            .min_height(0.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    self.notification_manager.render_status_bar_indicator(ui);

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if cfg!(debug_assertions) {
                            let git_branch = env!("GIT_BRANCH");
                            let git_commit = env!("GIT_COMMIT");
                            ui.label(
                                egui::RichText::new(format!(
                                    "Debug Build - {}@{}",
                                    git_branch, git_commit
                                ))
                                .small()
                                .color(egui::Color32::from_rgb(255, 165, 0)),
                            );
                        }
                    });
                });
            });
    }

    pub(super) fn render_palette_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("palette_panel")
            .default_width(220.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    palette::show_palette(
                        ui,
                        &self.catalog,
                        &self.store,
                        &mut self.pending_actions,
                    );
                });
            });
    }

    pub(super) fn render_properties_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("properties_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                properties_panel::show_properties(
                    ui,
                    &self.store,
                    &self.catalog,
                    self.selection,
                    &mut self.pending_actions,
                );
            });
    }

    pub(super) fn render_canvas_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if !self.config_loaded {
                ui.vertical_centered(|ui| {
                    ui.add_space(50.0);
                    ui.spinner();
                    ui.label("Loading the panel configuration…");
                });
                return;
            }

            ui.vertical_centered(|ui| {
                canvas::show_canvas(
                    ui,
                    &self.store,
                    &self.catalog,
                    self.selection,
                    &mut self.pending_actions,
                );
            });
        });
    }

    pub(super) fn handle_add_server_window(&mut self, ctx: &egui::Context) {
        if let Some(entry) = self.add_server_window.show(ctx) {
            self.pending_actions.push(PendingAction::AddServer(entry));
        }
    }

    pub(super) fn handle_connection_window(&mut self, ctx: &egui::Context) {
        if let Some(new_url) = self.connection_window.show(ctx) {
            // Reconnecting to the same URL is a deliberate retry; do it anyway.
            self.base_url = new_url;
            self.connect();
        }
    }

    pub(super) fn handle_document_window(&mut self, ctx: &egui::Context) {
        self.document_window.show(ctx, self.store.document());
    }

    pub(super) fn handle_log_window(&mut self, ctx: &egui::Context) {
        self.log_window.show(ctx);
    }

    pub(super) fn handle_notification_details_window(&mut self, ctx: &egui::Context) {
        NotificationDetailsWindow::show(&mut self.notification_manager, ctx);
    }

    /// Confirmation step in front of [`PendingAction::ClearAll`].
    pub(super) fn handle_clear_all_confirmation(&mut self, ctx: &egui::Context) {
        if !self.confirm_clear_all {
            return;
        }

        let screen_rect = ctx.screen_rect();
        egui::Window::new("Clear All Widgets")
            .fixed_pos(egui::pos2(
                screen_rect.center().x - 160.0,
                screen_rect.center().y - 60.0,
            ))
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Remove every widget and server from the panel?");
                ui.label(
                    egui::RichText::new("The service keeps its own copy until you save.")
                        .small()
                        .color(ui.visuals().weak_text_color()),
                );
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.confirm_clear_all = false;
                    }
                    let clear =
                        egui::RichText::new("Clear All").color(egui::Color32::from_rgb(220, 50, 50));
                    if ui.button(clear).clicked() {
                        self.pending_actions.push(PendingAction::ClearAll);
                        self.confirm_clear_all = false;
                    }
                });
            });
    }

    /// Handle continuous repainting logic
    pub(super) fn handle_continuous_repainting(&mut self, ctx: &egui::Context) {
        if self.log_window.open
            || self.add_server_window.show
            || self.connection_window.show
            || self.document_window.show
            || self.confirm_clear_all
        {
            ctx.request_repaint();
        }

        // Poller and save results arrive over channels; wake up for them even
        // when the user provides no input.
        ctx.request_repaint_after(Duration::from_secs(1));
    }
}

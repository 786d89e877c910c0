use crate::app::panelui::app::ThemeChoice;
use crate::app::service_status::ServiceStatus;
use eframe::egui;
use egui::{Color32, RichText};

#[derive(Debug, PartialEq)]
pub enum MenuAction {
    None,
    ThemeChanged,
    Save,
    SaveAndRestart,
    ReloadFromService,
    ShowDocument,
    ShowConnectionSettings,
    ClearAll,
    Quit,
}

pub fn build_menu(
    ui: &mut egui::Ui,
    ctx: &egui::Context,
    theme: &mut ThemeChoice,
    log_window_open: &mut bool,
    service_status: ServiceStatus,
    base_url: &str,
    save_in_flight: bool,
) -> MenuAction {
    let mut menu_action = MenuAction::None;
    let original_theme = *theme;

    ui.menu_button("Designer", |ui| {
        if ui
            .add_enabled(!save_in_flight, egui::Button::new("Save"))
            .clicked()
        {
            menu_action = MenuAction::Save;
        }
        if ui
            .add_enabled(!save_in_flight, egui::Button::new("Save and Restart"))
            .clicked()
        {
            menu_action = MenuAction::SaveAndRestart;
        }
        ui.separator();
        if ui.button("Reload from Service").clicked() {
            menu_action = MenuAction::ReloadFromService;
        }
        if ui.button("Raw Document").clicked() {
            menu_action = MenuAction::ShowDocument;
        }
        if ui.button("Connection Settings").clicked() {
            menu_action = MenuAction::ShowConnectionSettings;
        }
        ui.separator();
        if ui.button("Clear All Widgets").clicked() {
            menu_action = MenuAction::ClearAll;
        }
        ui.separator();
        if ui.button("Quit").clicked() {
            menu_action = MenuAction::Quit;
        }
    });

    ui.menu_button(RichText::new("🎨").size(18.0), |ui| {
        if ui.button("Latte").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::LATTE);
            *theme = ThemeChoice::Latte;
        }
        if ui.button("Frappe").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::FRAPPE);
            *theme = ThemeChoice::Frappe;
        }
        if ui.button("Macchiato").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MACCHIATO);
            *theme = ThemeChoice::Macchiato;
        }
        if ui.button("Mocha").clicked() {
            catppuccin_egui::set_theme(ctx, catppuccin_egui::MOCHA);
            *theme = ThemeChoice::Mocha;
        }
    });

    let theme_changed = original_theme != *theme;

    show_service_status(ui, service_status, base_url);

    if save_in_flight {
        ui.spinner();
        ui.label(
            RichText::new("Saving…")
                .size(12.0)
                .color(ui.visuals().weak_text_color()),
        );
    }

    // Log window toggle, far right of the menu strip.
    if ui.button(RichText::new("📜").size(16.0)).clicked() {
        *log_window_open = !*log_window_open;
        log_debug!("Log button clicked");
    }

    if menu_action != MenuAction::None {
        menu_action
    } else if theme_changed {
        MenuAction::ThemeChanged
    } else {
        MenuAction::None
    }
}

/// Colored indicator for the panel service, fed by the status poller.
fn show_service_status(ui: &mut egui::Ui, status: ServiceStatus, base_url: &str) {
    let color = match status {
        ServiceStatus::Running => Color32::from_rgb(50, 200, 80),
        ServiceStatus::Stopped => Color32::from_rgb(200, 50, 50),
        ServiceStatus::Unknown => Color32::from_rgb(180, 180, 180),
    };

    let response = ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("Service: {}", status.label()))
                .strong()
                .size(12.0)
                .color(color),
        );
    });

    response
        .response
        .on_hover_text(format!("{} (checked every 10 seconds)", base_url));
}

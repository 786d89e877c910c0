//! Properties panel for the currently selected canvas widget.
//!
//! Controls are presence-driven: an editor appears only for fields the
//! widget's config entry actually defines, so the panel never invents
//! fields the backend does not render. An empty prefix still counts as
//! present and gets a text field.

use eframe::egui;

use super::app::PendingAction;
use super::canvas::Placement;
use crate::app::catalog::WidgetCatalog;
use crate::app::panel_config::{ConfigStore, WidgetSlot};

pub fn show_properties(
    ui: &mut egui::Ui,
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    selection: Option<Placement>,
    actions: &mut Vec<PendingAction>,
) {
    ui.heading("Properties");
    ui.add_space(6.0);

    match selection {
        None => {
            ui.label(
                egui::RichText::new("Click a widget on the preview to edit it.")
                    .color(ui.visuals().weak_text_color()),
            );
        }
        Some(Placement::Server(index)) => show_server_selection(ui, store, index),
        Some(Placement::Slot(slot)) => show_slot_editors(ui, store, catalog, slot, actions),
    }
}

/// Server rows have no catalog descriptor and no editable sub-object here.
fn show_server_selection(ui: &mut egui::Ui, store: &ConfigStore, index: usize) {
    match store.server(index) {
        Some(server) => {
            ui.label(egui::RichText::new(format!("🖥 {}", server.name)).strong());
            let target = match server.port {
                Some(port) => format!("{}:{}", server.host, port),
                None => server.host.clone(),
            };
            ui.label(
                egui::RichText::new(format!("Checks {} every {} s", target, server.check_interval))
                    .small()
                    .color(ui.visuals().weak_text_color()),
            );
            ui.add_space(4.0);
            ui.label(
                egui::RichText::new(
                    "Server rows are configured when added. Remove the row and add \
                     it again to change its settings.",
                )
                .color(ui.visuals().weak_text_color()),
            );
        }
        None => {
            ui.label(
                egui::RichText::new("The selected server no longer exists.")
                    .color(ui.visuals().weak_text_color()),
            );
        }
    }
}

fn show_slot_editors(
    ui: &mut egui::Ui,
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    slot: WidgetSlot,
    actions: &mut Vec<PendingAction>,
) {
    let title = match catalog.descriptor_for_slot(slot) {
        Some(descriptor) if !descriptor.icon.is_empty() => {
            format!("{} {}", descriptor.icon, descriptor.name)
        }
        Some(descriptor) => descriptor.name.clone(),
        None => slot.config_key().to_string(),
    };
    ui.label(egui::RichText::new(title).strong());
    ui.add_space(6.0);

    let Some(entry) = store.entry(slot) else {
        ui.label(
            egui::RichText::new("This widget is not on the panel.")
                .color(ui.visuals().weak_text_color()),
        );
        return;
    };

    let mut any_editor = false;
    egui::Grid::new(("properties_grid", slot))
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            if let Some(color) = entry.color {
                any_editor = true;
                ui.label("Color");
                let mut rgb = color;
                if ui.color_edit_button_srgb(&mut rgb).changed() {
                    actions.push(PendingAction::SetColor(slot, rgb));
                }
                ui.end_row();
            }

            if let Some(prefix) = &entry.prefix {
                any_editor = true;
                ui.label("Prefix");
                let mut text = prefix.clone();
                if ui.text_edit_singleline(&mut text).changed() {
                    actions.push(PendingAction::SetPrefix(slot, text));
                }
                ui.end_row();
            }

            if let Some(show_bar) = entry.show_bar {
                any_editor = true;
                ui.label("Show bar");
                let mut flag = show_bar;
                if ui.checkbox(&mut flag, "").changed() {
                    actions.push(PendingAction::SetShowBar(slot, flag));
                }
                ui.end_row();
            }
        });

    if !any_editor {
        ui.label(
            egui::RichText::new("This widget has no editable properties.")
                .color(ui.visuals().weak_text_color()),
        );
    }
}

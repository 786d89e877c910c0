//! Palette panel: draggable widget list, display settings, server controls.

use eframe::egui;

use super::app::PendingAction;
use crate::app::catalog::{CatalogEntry, WidgetCatalog};
use crate::app::panel_config::ConfigStore;

/// Renders the left-hand palette.
///
/// Catalog entries whose config path mapped to a slot are drag sources
/// carrying the widget id; dropping one on the canvas enables it. Entries
/// without a slot render as disabled rows. Everything reported here is a
/// [`PendingAction`]; the palette never mutates the store itself.
pub fn show_palette(
    ui: &mut egui::Ui,
    catalog: &WidgetCatalog,
    store: &ConfigStore,
    actions: &mut Vec<PendingAction>,
) {
    ui.heading("Widgets");
    ui.label(
        egui::RichText::new("Drag onto the panel preview")
            .small()
            .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(6.0);

    if catalog.is_empty() {
        ui.label(egui::RichText::new("Widget list unavailable").weak());
        ui.label(
            egui::RichText::new("Reconnect to the panel service to load it.")
                .small()
                .color(ui.visuals().weak_text_color()),
        );
    } else {
        for entry in catalog.entries() {
            show_palette_row(ui, store, entry, actions);
        }
    }

    ui.add_space(8.0);
    ui.separator();
    show_display_section(ui, store, actions);

    ui.add_space(8.0);
    ui.separator();
    show_servers_section(ui, store, actions);
}

fn show_palette_row(
    ui: &mut egui::Ui,
    store: &ConfigStore,
    entry: &CatalogEntry,
    actions: &mut Vec<PendingAction>,
) {
    let descriptor = &entry.descriptor;
    let label = if descriptor.icon.is_empty() {
        descriptor.name.clone()
    } else {
        format!("{} {}", descriptor.icon, descriptor.name)
    };

    let Some(slot) = entry.slot else {
        // Path did not map to a known slot; visible but not placeable.
        ui.add_enabled(false, egui::Label::new(egui::RichText::new(&label).weak()))
            .on_disabled_hover_text(format!(
                "Unrecognized config path '{}'; this widget cannot be placed",
                descriptor.config_key
            ));
        return;
    };

    let on_canvas = store.is_enabled(slot);
    let response = ui.dnd_drag_source(
        egui::Id::new("palette_widget").with(&descriptor.id),
        descriptor.id.clone(),
        |ui| {
            ui.horizontal(|ui| {
                if on_canvas {
                    ui.add_enabled(
                        false,
                        egui::Label::new(egui::RichText::new(&label).weak()),
                    );
                } else {
                    ui.label(&label);
                }
            });
        },
    );

    let hover = if on_canvas {
        "Already on the panel".to_string()
    } else if descriptor.description.is_empty() {
        "Drag onto the preview, or double-click to add".to_string()
    } else {
        descriptor.description.clone()
    };
    let response = response.response.on_hover_text(hover);

    // Double-click as an alternative to dragging.
    if response.double_clicked() && !on_canvas {
        actions.push(PendingAction::EnableWidget(descriptor.id.clone()));
    }
}

fn show_display_section(ui: &mut egui::Ui, store: &ConfigStore, actions: &mut Vec<PendingAction>) {
    ui.heading("Display");
    egui::Grid::new("display_settings_grid")
        .num_columns(2)
        .spacing([8.0, 6.0])
        .show(ui, |ui| {
            ui.label("Background");
            let mut bg = store.background_color();
            if ui.color_edit_button_srgb(&mut bg).changed() {
                actions.push(PendingAction::SetBackgroundColor(bg));
            }
            ui.end_row();

            ui.label("Refresh every");
            let mut interval = store.update_interval();
            if ui
                .add(egui::DragValue::new(&mut interval).range(1..=3600).suffix(" s"))
                .changed()
            {
                actions.push(PendingAction::SetUpdateInterval(interval));
            }
            ui.end_row();
        });
}

fn show_servers_section(ui: &mut egui::Ui, store: &ConfigStore, actions: &mut Vec<PendingAction>) {
    ui.heading("Servers");

    let servers = store.servers();
    if servers.is_empty() {
        ui.label(egui::RichText::new("No servers monitored").weak());
    }
    for (index, server) in servers.iter().enumerate() {
        ui.horizontal(|ui| {
            let mut enabled = server.enabled;
            if ui.checkbox(&mut enabled, "").changed() {
                actions.push(PendingAction::SetServerEnabled(index, enabled));
            }
            let target = match server.port {
                Some(port) => format!("{}:{}", server.host, port),
                None => server.host.clone(),
            };
            ui.label(&server.name)
                .on_hover_text(format!("Pings {} every {} s", target, server.check_interval));
            if ui
                .small_button("🗑")
                .on_hover_text("Remove this server")
                .clicked()
            {
                actions.push(PendingAction::RemoveServer(index));
            }
        });
    }

    ui.add_space(4.0);
    if ui.button("➕ Add Server").clicked() {
        actions.push(PendingAction::OpenAddServerWindow);
    }
}

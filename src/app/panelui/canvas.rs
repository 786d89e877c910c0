//! Canvas panel: a scaled mock of the 320x170 TFT screen.
//!
//! The canvas never owns state. Every frame it re-derives the placed-widget
//! list from the config document via [`layout_placed_widgets`], draws one chip
//! per placement, and reports clicks and drops back to the app as
//! [`PendingAction`] events. Because placements are recomputed from the
//! document each frame, enabling, disabling or removing an entry needs no
//! bookkeeping here.

use eframe::egui;

use super::app::PendingAction;
use crate::app::catalog::WidgetCatalog;
use crate::app::panel_config::{ConfigStore, WidgetSlot};

/// Horizontal resolution of the physical panel, in pixels.
pub const PANEL_WIDTH: f32 = 320.0;
/// Vertical resolution of the physical panel, in pixels.
pub const PANEL_HEIGHT: f32 = 170.0;
/// Offset of the first stacked widget from the top edge of the panel.
pub const STACK_TOP_OFFSET: f32 = 10.0;
/// The time widget renders in a large font on the device and takes more room.
pub const TIME_WIDGET_HEIGHT: f32 = 60.0;
/// Height of every widget other than the clock.
pub const WIDGET_HEIGHT: f32 = 30.0;

/// What occupies a spot on the canvas: a fixed-slot widget or a server row.
///
/// Doubles as the selection type for the properties panel. Server placements
/// carry the index into the document's server list, so they go stale whenever
/// a server is removed; the app clears server selections on removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Slot(WidgetSlot),
    Server(usize),
}

/// One widget placed on the screen mock, in panel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWidget {
    pub placement: Placement,
    /// Top edge, pixels from the top of the panel.
    pub offset: f32,
    pub height: f32,
}

/// Derives the placed-widget list from the current document.
///
/// Enabled slot widgets come first in their fixed stack order, then enabled
/// servers in document order. Disabled entries take no vertical space, so the
/// stack closes up exactly like it does on the device.
pub fn layout_placed_widgets(store: &ConfigStore) -> Vec<PlacedWidget> {
    let mut placed = Vec::new();
    let mut offset = STACK_TOP_OFFSET;

    for slot in WidgetSlot::STACK_ORDER {
        if !store.is_enabled(slot) {
            continue;
        }
        let height = if slot == WidgetSlot::Time {
            TIME_WIDGET_HEIGHT
        } else {
            WIDGET_HEIGHT
        };
        placed.push(PlacedWidget {
            placement: Placement::Slot(slot),
            offset,
            height,
        });
        offset += height;
    }

    for (index, server) in store.servers().iter().enumerate() {
        if !server.enabled {
            continue;
        }
        placed.push(PlacedWidget {
            placement: Placement::Server(index),
            offset,
            height: WIDGET_HEIGHT,
        });
        offset += WIDGET_HEIGHT;
    }

    placed
}

/// Renders the screen mock inside a drop zone and reports interactions.
pub fn show_canvas(
    ui: &mut egui::Ui,
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    selection: Option<Placement>,
    actions: &mut Vec<PendingAction>,
) {
    ui.label(
        egui::RichText::new(format!(
            "Panel preview ({}x{})",
            PANEL_WIDTH as u32, PANEL_HEIGHT as u32
        ))
        .small()
        .color(ui.visuals().weak_text_color()),
    );
    ui.add_space(4.0);

    let frame = egui::Frame::default()
        .inner_margin(egui::Margin::same(10))
        .stroke(egui::Stroke::new(1.0, ui.visuals().weak_text_color()))
        .fill(ui.visuals().faint_bg_color);

    let (_response, payload) = ui.dnd_drop_zone::<String, ()>(frame, |ui| {
        draw_screen_mock(ui, store, catalog, selection, actions);
    });

    if let Some(widget_id) = payload {
        actions.push(PendingAction::EnableWidget((*widget_id).clone()));
    }
}

/// Paints the panel rectangle and its widget chips at the current scale.
fn draw_screen_mock(
    ui: &mut egui::Ui,
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    selection: Option<Placement>,
    actions: &mut Vec<PendingAction>,
) {
    let scale = (ui.available_width() / PANEL_WIDTH).clamp(1.0, 3.0);
    let size = egui::vec2(PANEL_WIDTH * scale, PANEL_HEIGHT * scale);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    if !ui.is_rect_visible(rect) {
        return;
    }
    // Chips are placed on top of this rect and win their own clicks.
    if response.clicked() {
        actions.push(PendingAction::ClearSelection);
    }

    let bg = store.background_color();
    ui.painter()
        .rect_filled(rect, 4.0, egui::Color32::from_rgb(bg[0], bg[1], bg[2]));
    ui.painter().rect_stroke(
        rect,
        4.0,
        egui::Stroke::new(2.0, ui.visuals().widgets.active.bg_stroke.color),
        egui::StrokeKind::Outside,
    );

    let placed = layout_placed_widgets(store);

    if placed.is_empty() {
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            "Drag widgets here",
            egui::FontId::proportional(14.0),
            egui::Color32::from_gray(140),
        );
        return;
    }

    for widget in &placed {
        draw_widget_chip(ui, rect, scale, store, catalog, widget, selection, actions);
    }
}

/// Paints one placed widget as a clickable chip with a remove button.
#[allow(clippy::too_many_arguments)]
fn draw_widget_chip(
    ui: &mut egui::Ui,
    panel_rect: egui::Rect,
    scale: f32,
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    widget: &PlacedWidget,
    selection: Option<Placement>,
    actions: &mut Vec<PendingAction>,
) {
    let (label, text_color) = chip_appearance(store, catalog, widget.placement);

    let chip_rect = egui::Rect::from_min_size(
        egui::pos2(
            panel_rect.left() + 6.0 * scale,
            panel_rect.top() + widget.offset * scale,
        ),
        egui::vec2(
            (PANEL_WIDTH - 12.0) * scale,
            widget.height * scale - 3.0 * scale,
        ),
    );

    let is_selected = selection == Some(widget.placement);
    let stroke = if is_selected {
        egui::Stroke::new(2.0, ui.visuals().selection.stroke.color)
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(90))
    };

    let chip = egui::Button::new(
        egui::RichText::new(label)
            .color(text_color)
            .size((11.0 * scale).clamp(11.0, 20.0)),
    )
    .fill(egui::Color32::from_rgba_unmultiplied(70, 70, 70, 160))
    .stroke(stroke);

    let chip_response = ui.put(chip_rect, chip);
    if chip_response.clicked() {
        actions.push(PendingAction::Select(widget.placement));
    }

    // Remove button sits on top of the chip's right edge and wins the click.
    let close_rect = egui::Rect::from_center_size(
        egui::pos2(chip_rect.right() - 12.0, chip_rect.center().y),
        egui::vec2(16.0, 16.0),
    );
    let close = egui::Button::new(
        egui::RichText::new("✕")
            .size(10.0)
            .color(egui::Color32::from_gray(200)),
    )
    .frame(false);
    let close_response = ui
        .put(close_rect, close)
        .on_hover_text("Remove from panel");
    if close_response.clicked() {
        match widget.placement {
            Placement::Slot(slot) => actions.push(PendingAction::DisableWidget(slot)),
            Placement::Server(index) => actions.push(PendingAction::RemoveServer(index)),
        }
    }
}

/// Resolves the label text and text color for a placement.
///
/// Slot labels come from the catalog when it loaded; otherwise the raw config
/// key is shown so an already-enabled widget never disappears just because
/// the widget list failed to load.
fn chip_appearance(
    store: &ConfigStore,
    catalog: &WidgetCatalog,
    placement: Placement,
) -> (String, egui::Color32) {
    match placement {
        Placement::Slot(slot) => {
            let label = match catalog.descriptor_for_slot(slot) {
                Some(descriptor) if !descriptor.icon.is_empty() => {
                    format!("{} {}", descriptor.icon, descriptor.name)
                }
                Some(descriptor) => descriptor.name.clone(),
                None => slot.config_key().to_string(),
            };
            let color = store
                .entry(slot)
                .and_then(|entry| entry.color)
                .map(|c| egui::Color32::from_rgb(c[0], c[1], c[2]))
                .unwrap_or(egui::Color32::WHITE);
            (label, color)
        }
        Placement::Server(index) => match store.server(index) {
            Some(server) => {
                let c = server.color_online;
                (
                    format!("🖥 {}", server.name),
                    egui::Color32::from_rgb(c[0], c[1], c[2]),
                )
            }
            None => ("🖥 ?".to_string(), egui::Color32::WHITE),
        },
    }
}

//! Modular implementation of DesignerApp
//!
//! This module contains the implementation of DesignerApp split into logical
//! components:
//! - initialization: App creation, connection, and the initial load task
//! - theme: Theme management
//! - tasks: Background task channels, timers, and pending-action application
//! - rendering: Menu bar, status bar, panels, and window handling

use std::sync::mpsc::{channel, Receiver, Sender};
use std::time::Instant;

use eframe::egui;

use super::canvas::Placement;
use super::connection_window::ConnectionWindow;
use super::document_window::DocumentWindow;
use super::log_window::LogWindow;
use super::server_window::AddServerWindow;
use crate::app::api_client::{ApiResponse, PanelApiClient, DEFAULT_BASE_URL};
use crate::app::catalog::{WidgetCatalog, WidgetDescriptor};
use crate::app::notifications::NotificationManager;
use crate::app::panel_config::{ConfigStore, PanelConfig, Rgb, ServerEntry, WidgetSlot};
use crate::app::service_status::{ServiceStatus, ServiceStatusMonitor};

// Module declarations
mod initialization;
mod rendering;
mod tasks;
mod theme;

#[derive(serde::Deserialize, serde::Serialize, Clone, Copy, PartialEq, Default)]
pub enum ThemeChoice {
    #[default]
    Latte,
    Frappe,
    Macchiato,
    Mocha,
}

impl std::fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeChoice::Latte => write!(f, "Latte"),
            ThemeChoice::Frappe => write!(f, "Frappe"),
            ThemeChoice::Macchiato => write!(f, "Macchiato"),
            ThemeChoice::Mocha => write!(f, "Mocha"),
        }
    }
}

/// Result of the initial (or reconnect) load task.
pub enum LoadEvent {
    Config(Result<PanelConfig, String>),
    Catalog(Result<Vec<WidgetDescriptor>, String>),
}

/// Result of a background save or restart call.
pub enum PersistEvent {
    SaveFinished(Result<ApiResponse, String>),
    RestartFinished(Result<ApiResponse, String>),
}

/// Edits reported by render code, applied once per frame after all panels
/// have drawn. Server indices inside actions refer to the document as it was
/// rendered this frame; applying them in one place keeps them valid.
#[derive(Debug, Clone)]
pub enum PendingAction {
    /// Enable the widget with this catalog id (from a drop or double-click).
    EnableWidget(String),
    DisableWidget(WidgetSlot),
    Select(Placement),
    ClearSelection,
    SetColor(WidgetSlot, Rgb),
    SetPrefix(WidgetSlot, String),
    SetShowBar(WidgetSlot, bool),
    SetBackgroundColor(Rgb),
    SetUpdateInterval(u32),
    AddServer(ServerEntry),
    RemoveServer(usize),
    SetServerEnabled(usize, bool),
    OpenAddServerWindow,
    ClearAll,
}

#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DesignerApp {
    pub theme: ThemeChoice,
    /// Base URL of the panel service; persisted so the designer reconnects
    /// to the same device next session.
    pub base_url: String,

    #[serde(skip)]
    pub store: ConfigStore,
    #[serde(skip)]
    pub catalog: WidgetCatalog,
    #[serde(skip)]
    pub api: Option<PanelApiClient>,
    #[serde(skip)]
    pub status_monitor: Option<ServiceStatusMonitor>,
    #[serde(skip)]
    pub service_status: ServiceStatus,
    #[serde(skip)]
    pub selection: Option<Placement>,
    #[serde(skip)]
    pub notification_manager: NotificationManager,
    #[serde(skip)]
    pub log_window: LogWindow,
    #[serde(skip)]
    pub document_window: DocumentWindow,
    #[serde(skip)]
    pub add_server_window: AddServerWindow,
    #[serde(skip)]
    pub connection_window: ConnectionWindow,
    #[serde(skip)]
    load_receiver: Receiver<LoadEvent>,
    #[serde(skip)]
    load_sender: Sender<LoadEvent>,
    #[serde(skip)]
    persist_receiver: Receiver<PersistEvent>,
    #[serde(skip)]
    persist_sender: Sender<PersistEvent>,
    #[serde(skip)]
    save_in_flight: bool,
    #[serde(skip)]
    restart_recheck_at: Option<Instant>,
    #[serde(skip)]
    pending_actions: Vec<PendingAction>,
    #[serde(skip)]
    confirm_clear_all: bool,
    #[serde(skip)]
    config_loaded: bool,
}

impl Default for DesignerApp {
    fn default() -> Self {
        let (load_sender, load_receiver) = channel();
        let (persist_sender, persist_receiver) = channel();

        Self {
            theme: ThemeChoice::default(),
            base_url: DEFAULT_BASE_URL.to_string(),
            store: ConfigStore::default(),
            catalog: WidgetCatalog::default(),
            api: None,
            status_monitor: None,
            service_status: ServiceStatus::default(),
            selection: None,
            notification_manager: NotificationManager::new(),
            log_window: LogWindow::new(),
            document_window: DocumentWindow::new(),
            add_server_window: AddServerWindow::new(),
            connection_window: ConnectionWindow::new(),
            load_receiver,
            load_sender,
            persist_receiver,
            persist_sender,
            save_in_flight: false,
            restart_recheck_at: None,
            pending_actions: Vec::new(),
            confirm_clear_all: false,
            config_loaded: false,
        }
    }
}

impl eframe::App for DesignerApp {
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Drain background results before anything renders
        self.drain_load_events();
        self.drain_persist_events();
        self.drain_status_updates();
        self.process_restart_recheck();

        // Render UI components
        self.render_top_menu_bar(ctx);
        self.render_status_bar(ctx);
        self.render_palette_panel(ctx);
        self.render_properties_panel(ctx);
        self.render_canvas_panel(ctx);

        // Handle different windows
        self.handle_add_server_window(ctx);
        self.handle_connection_window(ctx);
        self.handle_document_window(ctx);
        self.handle_log_window(ctx);
        self.handle_clear_all_confirmation(ctx);
        self.handle_notification_details_window(ctx);

        // Apply this frame's edits in one place
        self.apply_pending_actions();

        self.handle_continuous_repainting(ctx);
    }
}

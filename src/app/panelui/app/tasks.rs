//! Background task channels, timers, and pending-action application

use std::time::{Duration, Instant};

use super::super::canvas::Placement;
use super::{DesignerApp, LoadEvent, PendingAction, PersistEvent};
use crate::app::catalog::WidgetCatalog;
use crate::app::notifications::{Notification, NotificationDetail};
use crate::app::panel_config::WidgetSlot;

/// How long after a restart attempt before the status indicator is re-checked.
const RESTART_RECHECK_DELAY: Duration = Duration::from_secs(2);

impl DesignerApp {
    /// Drain results from the config/catalog load task.
    pub(super) fn drain_load_events(&mut self) {
        while let Ok(event) = self.load_receiver.try_recv() {
            match event {
                LoadEvent::Config(Ok(config)) => {
                    log_info!("Configuration document loaded");
                    self.store.replace(config);
                    self.selection = None;
                    self.config_loaded = true;
                }
                LoadEvent::Config(Err(message)) => {
                    log_error!("Failed to load configuration: {}", message);
                    // Leave an empty, editable document rather than a spinner.
                    self.config_loaded = true;
                    self.notification_manager
                        .add_notification(Notification::new_error(
                            "config-load-failed".to_string(),
                            "Could not load the panel configuration".to_string(),
                            vec![NotificationDetail {
                                message: "The editor is showing an empty document.".to_string(),
                                details: Some(message),
                            }],
                            "Configuration Load".to_string(),
                        ));
                }
                LoadEvent::Catalog(Ok(descriptors)) => {
                    log_info!("Widget catalog loaded: {} descriptors", descriptors.len());
                    self.catalog = WidgetCatalog::from_descriptors(descriptors);
                }
                LoadEvent::Catalog(Err(message)) => {
                    // Degraded palette only; the rest of the editor keeps working.
                    log_warn!("Failed to load widget catalog: {}", message);
                    self.catalog = WidgetCatalog::default();
                }
            }
        }
    }

    /// Drain results from save/restart tasks.
    pub(super) fn drain_persist_events(&mut self) {
        while let Ok(event) = self.persist_receiver.try_recv() {
            match event {
                PersistEvent::SaveFinished(result) => {
                    self.save_in_flight = false;
                    self.handle_save_result(result);
                }
                PersistEvent::RestartFinished(result) => {
                    // Re-check the indicator shortly after the attempt,
                    // whatever the outcome was.
                    self.restart_recheck_at = Some(Instant::now() + RESTART_RECHECK_DELAY);
                    self.handle_restart_result(result);
                }
            }
        }
    }

    fn handle_save_result(&mut self, result: Result<crate::app::api_client::ApiResponse, String>) {
        match result {
            Ok(response) if response.success => {
                log_info!("Configuration saved");
                let message = response
                    .message
                    .unwrap_or_else(|| "The panel configuration was saved.".to_string());
                self.notification_manager
                    .add_notification(Notification::new_success(
                        "config-save".to_string(),
                        "Saved".to_string(),
                        message,
                        "Configuration Save".to_string(),
                    ));
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "The service rejected the configuration.".to_string());
                log_error!("Save rejected: {}", message);
                self.notification_manager
                    .add_notification(Notification::new_error(
                        "config-save".to_string(),
                        "Save failed".to_string(),
                        vec![NotificationDetail {
                            message,
                            details: None,
                        }],
                        "Configuration Save".to_string(),
                    ));
            }
            Err(message) => {
                log_error!("Save failed: {}", message);
                self.notification_manager
                    .add_notification(Notification::new_error(
                        "config-save".to_string(),
                        "Save failed".to_string(),
                        vec![NotificationDetail {
                            message: "The configuration could not be sent to the service."
                                .to_string(),
                            details: Some(message),
                        }],
                        "Configuration Save".to_string(),
                    ));
            }
        }
    }

    fn handle_restart_result(
        &mut self,
        result: Result<crate::app::api_client::ApiResponse, String>,
    ) {
        match result {
            Ok(response) if response.success => {
                log_info!("Service restart requested");
                let message = response
                    .message
                    .unwrap_or_else(|| "The panel service is restarting.".to_string());
                self.notification_manager
                    .add_notification(Notification::new_info(
                        "service-restart".to_string(),
                        "Restarting".to_string(),
                        message,
                        "Service Restart".to_string(),
                    ));
            }
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "The service declined to restart.".to_string());
                log_error!("Restart rejected: {}", message);
                self.notification_manager
                    .add_notification(Notification::new_error(
                        "service-restart".to_string(),
                        "Restart failed".to_string(),
                        vec![NotificationDetail {
                            message,
                            details: None,
                        }],
                        "Service Restart".to_string(),
                    ));
            }
            Err(message) => {
                log_error!("Restart failed: {}", message);
                self.notification_manager
                    .add_notification(Notification::new_error(
                        "service-restart".to_string(),
                        "Restart failed".to_string(),
                        vec![NotificationDetail {
                            message: "The restart request did not reach the service.".to_string(),
                            details: Some(message),
                        }],
                        "Service Restart".to_string(),
                    ));
            }
        }
    }

    /// Take the latest status from the poller, if any arrived.
    pub(super) fn drain_status_updates(&mut self) {
        if let Some(monitor) = &self.status_monitor {
            if let Some(status) = monitor.poll() {
                if status != self.service_status {
                    log_debug!(
                        "Service status changed: {:?} -> {:?}",
                        self.service_status,
                        status
                    );
                }
                self.service_status = status;
            }
        }
    }

    /// Fire the delayed post-restart status check once its timer elapses.
    pub(super) fn process_restart_recheck(&mut self) {
        if let Some(due) = self.restart_recheck_at {
            if Instant::now() >= due {
                self.restart_recheck_at = None;
                if let Some(monitor) = &self.status_monitor {
                    monitor.check_now();
                }
            }
        }
    }

    /// POST the current snapshot on a background thread. With `restart_after`
    /// the same thread issues the restart call, but only when the save itself
    /// went through.
    pub(super) fn spawn_save(&mut self, restart_after: bool) {
        let Some(client) = self.api.clone() else {
            self.notification_manager
                .add_notification(Notification::new_error(
                    "config-save".to_string(),
                    "Save failed".to_string(),
                    vec![NotificationDetail {
                        message: "Not connected to a panel service.".to_string(),
                        details: None,
                    }],
                    "Configuration Save".to_string(),
                ));
            return;
        };

        let snapshot = self.store.snapshot();
        let sender = self.persist_sender.clone();
        self.save_in_flight = true;
        log_info!("Saving configuration (restart_after: {})", restart_after);

        std::thread::spawn(move || {
            let save_result = client
                .save_config(&snapshot)
                .map_err(|e| format!("{:#}", e));
            let save_succeeded = matches!(&save_result, Ok(response) if response.success);
            if sender.send(PersistEvent::SaveFinished(save_result)).is_err() {
                return; // App is gone
            }

            if restart_after && save_succeeded {
                let restart_result = client.restart_service().map_err(|e| format!("{:#}", e));
                let _ = sender.send(PersistEvent::RestartFinished(restart_result));
            }
        });
    }

    /// Re-fetch config and catalog from the service, discarding local edits.
    pub(super) fn reload_from_service(&self) {
        match &self.api {
            Some(client) => self.spawn_initial_load(client.clone()),
            None => log_warn!("Reload requested without a connection"),
        }
    }

    /// Apply every edit reported by render code this frame.
    ///
    /// At most one server removal is honored per frame; a second splice would
    /// act on indices that shifted under it. Any further server-index action
    /// after a removal is dropped for the same reason.
    pub(super) fn apply_pending_actions(&mut self) {
        if self.pending_actions.is_empty() {
            return;
        }

        let actions: Vec<PendingAction> = self.pending_actions.drain(..).collect();
        let mut server_list_changed = false;

        for action in actions {
            match action {
                PendingAction::EnableWidget(id) => match self.catalog.slot_of(&id) {
                    Some(slot) => {
                        self.store.enable(slot);
                        self.selection = Some(Placement::Slot(slot));
                    }
                    None => {
                        log_debug!("Ignoring enable for unknown widget id '{}'", id);
                    }
                },
                PendingAction::DisableWidget(slot) => {
                    self.store.disable(slot);
                    if self.selection == Some(Placement::Slot(slot)) {
                        self.selection = None;
                    }
                }
                PendingAction::Select(placement) => self.selection = Some(placement),
                PendingAction::ClearSelection => self.selection = None,
                PendingAction::SetColor(slot, rgb) => {
                    self.store.set_color(slot, rgb);
                    self.notify_widget_updated(slot);
                }
                PendingAction::SetPrefix(slot, text) => {
                    self.store.set_prefix(slot, text);
                    self.notify_widget_updated(slot);
                }
                PendingAction::SetShowBar(slot, flag) => {
                    self.store.set_show_bar(slot, flag);
                    self.notify_widget_updated(slot);
                }
                PendingAction::SetBackgroundColor(rgb) => self.store.set_background_color(rgb),
                PendingAction::SetUpdateInterval(secs) => self.store.set_update_interval(secs),
                PendingAction::AddServer(entry) => {
                    let index = self.store.add_server(entry);
                    self.selection = Some(Placement::Server(index));
                }
                PendingAction::RemoveServer(index) => {
                    if server_list_changed {
                        log_debug!("Skipping extra server removal in the same frame");
                        continue;
                    }
                    if self.store.remove_server(index) {
                        server_list_changed = true;
                        // Indices shifted; any server selection is stale now.
                        if matches!(self.selection, Some(Placement::Server(_))) {
                            self.selection = None;
                        }
                    }
                }
                PendingAction::SetServerEnabled(index, enabled) => {
                    if server_list_changed {
                        log_debug!("Skipping server toggle after a removal in the same frame");
                        continue;
                    }
                    if let Some(server) = self.store.server_mut(index) {
                        server.enabled = enabled;
                    }
                }
                PendingAction::OpenAddServerWindow => self.add_server_window.open(),
                PendingAction::ClearAll => {
                    self.store.clear_all();
                    self.selection = None;
                }
            }
        }
    }

    /// Transient confirmation that a property edit reached the working
    /// document. Stable per-slot id, so dragging a color picker keeps a
    /// single entry instead of stacking one per frame.
    fn notify_widget_updated(&mut self, slot: WidgetSlot) {
        let name = self
            .catalog
            .descriptor_for_slot(slot)
            .map(|d| d.name.clone())
            .unwrap_or_else(|| slot.config_key().to_string());
        self.notification_manager
            .add_notification(Notification::new_success(
                format!("widget-updated-{}", slot.config_key()),
                "Widget updated".to_string(),
                format!("{} changed. Save to apply it to the panel.", name),
                "Properties".to_string(),
            ));
    }
}

//! App creation, connection management, and the initial load task

use super::{DesignerApp, LoadEvent};
use crate::app::api_client::{startup_base_url, PanelApiClient};
use crate::app::notifications::{Notification, NotificationDetail};
use crate::app::service_status::{ServiceStatus, ServiceStatusMonitor};

impl DesignerApp {
    /// Create a new DesignerApp instance from creation context
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        // Apply the saved theme
        app.apply_theme(&cc.egui_ctx);

        // The environment variable wins over the persisted URL at startup
        app.base_url = startup_base_url(Some(&app.base_url));

        app.connect();

        app
    }

    /// (Re)build the API client and status poller for the current base URL,
    /// then kick off the background load of config and catalog.
    pub(super) fn connect(&mut self) {
        log_info!("Connecting to panel service at {}", self.base_url);

        // Dropping the old monitor disconnects its channel, which stops the
        // poller thread on its next tick.
        self.status_monitor = None;
        self.service_status = ServiceStatus::Unknown;
        self.config_loaded = false;

        match PanelApiClient::new(&self.base_url) {
            Ok(client) => {
                self.status_monitor = Some(ServiceStatusMonitor::start(client.clone()));
                self.spawn_initial_load(client.clone());
                self.api = Some(client);
            }
            Err(e) => {
                log_error!(
                    "Failed to create API client for {}: {:#}",
                    self.base_url,
                    e
                );
                self.api = None;
                // No load is coming; show the empty document instead of a spinner.
                self.config_loaded = true;
                self.notification_manager
                    .add_notification(Notification::new_error(
                        "connection-failed".to_string(),
                        "Connection failed".to_string(),
                        vec![NotificationDetail {
                            message: format!("Could not prepare a client for {}", self.base_url),
                            details: Some(format!("{:#}", e)),
                        }],
                        "Connection".to_string(),
                    ));
            }
        }
    }

    /// Fetch the configuration document and widget catalog off the UI thread.
    ///
    /// Results arrive as [`LoadEvent`]s drained at the top of each frame. The
    /// config comes first so the canvas can populate even if the widget list
    /// request later fails.
    pub(super) fn spawn_initial_load(&self, client: PanelApiClient) {
        let sender = self.load_sender.clone();
        std::thread::spawn(move || {
            let config = client.fetch_config().map_err(|e| format!("{:#}", e));
            if sender.send(LoadEvent::Config(config)).is_err() {
                return; // App is gone
            }
            let widgets = client.fetch_widgets().map_err(|e| format!("{:#}", e));
            let _ = sender.send(LoadEvent::Catalog(widgets));
        });
    }
}

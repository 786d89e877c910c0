use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub mod details_window;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum NotificationType {
    Error,
    Warning,
    Info,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationDetail {
    pub message: String,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub notification_type: NotificationType,
    pub messages: Vec<NotificationDetail>,
    #[serde(skip, default = "Instant::now")]
    pub created_at: Instant,
    #[serde(skip, default)]
    pub expires_at: Option<Instant>,
    pub dismissible: bool,
    pub source: String, // e.g., "Configuration Save", "Service Restart"
}

impl Notification {
    pub fn new_error(
        id: String,
        title: String,
        messages: Vec<NotificationDetail>,
        source: String,
    ) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Error,
            messages,
            created_at: Instant::now(),
            expires_at: None, // Errors don't auto-expire
            dismissible: true,
            source,
        }
    }

    pub fn new_warning(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Warning,
            messages: vec![NotificationDetail {
                message,
                details: None,
            }],
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(30)),
            dismissible: true,
            source,
        }
    }

    pub fn new_info(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Info,
            messages: vec![NotificationDetail {
                message,
                details: None,
            }],
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(10)),
            dismissible: true,
            source,
        }
    }

    pub fn new_success(id: String, title: String, message: String, source: String) -> Self {
        Self {
            id,
            title,
            notification_type: NotificationType::Success,
            messages: vec![NotificationDetail {
                message,
                details: None,
            }],
            created_at: Instant::now(),
            expires_at: Some(Instant::now() + Duration::from_secs(5)),
            dismissible: true,
            source,
        }
    }

    pub fn is_expired(&self) -> bool {
        if let Some(expires_at) = self.expires_at {
            Instant::now() > expires_at
        } else {
            false
        }
    }

    pub fn get_color(&self) -> Color32 {
        match self.notification_type {
            NotificationType::Error => Color32::from_rgb(220, 50, 50),
            NotificationType::Warning => Color32::from_rgb(255, 150, 0),
            NotificationType::Info => Color32::from_rgb(70, 130, 200),
            NotificationType::Success => Color32::from_rgb(40, 180, 40),
        }
    }

    pub fn get_icon(&self) -> &'static str {
        match self.notification_type {
            NotificationType::Error => "✗",
            NotificationType::Warning => "⚠",
            NotificationType::Info => "ℹ",
            NotificationType::Success => "✓",
        }
    }
}

#[derive(Default)]
pub struct NotificationManager {
    notifications: HashMap<String, Notification>,
    pub show_details_window: bool,
    pub selected_notification_id: Option<String>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self {
            notifications: HashMap::new(),
            show_details_window: false,
            selected_notification_id: None,
        }
    }

    /// Inserting with an id that already exists replaces the old
    /// notification, so repeated saves keep one "saved" entry alive instead
    /// of stacking duplicates.
    pub fn add_notification(&mut self, notification: Notification) {
        self.notifications
            .insert(notification.id.clone(), notification);
    }

    pub fn dismiss_notification(&mut self, id: &str) {
        self.notifications.remove(id);
        if let Some(selected_id) = &self.selected_notification_id {
            if selected_id == id {
                self.selected_notification_id = None;
                self.show_details_window = false;
            }
        }
    }

    pub fn clear_expired(&mut self) {
        self.notifications
            .retain(|_, notification| !notification.is_expired());
    }

    pub fn get_active_notifications(&self) -> Vec<&Notification> {
        let mut notifications: Vec<&Notification> = self.notifications.values().collect();
        notifications.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        notifications
    }

    pub fn get_notification(&self, id: &str) -> Option<&Notification> {
        self.notifications.get(id)
    }

    pub fn get_error_count(&self) -> usize {
        self.notifications
            .values()
            .filter(|n| matches!(n.notification_type, NotificationType::Error))
            .count()
    }

    pub fn get_warning_count(&self) -> usize {
        self.notifications
            .values()
            .filter(|n| matches!(n.notification_type, NotificationType::Warning))
            .count()
    }

    pub fn show_notification_details(&mut self, notification_id: String) {
        self.selected_notification_id = Some(notification_id);
        self.show_details_window = true;
    }

    /// Newest success/info notification, used as the transient readout in
    /// the status bar.
    fn newest_transient(&self) -> Option<&Notification> {
        self.notifications
            .values()
            .filter(|n| {
                matches!(
                    n.notification_type,
                    NotificationType::Success | NotificationType::Info
                )
            })
            .max_by_key(|n| n.created_at)
    }

    pub fn render_status_bar_indicator(&mut self, ui: &mut egui::Ui) {
        self.clear_expired();

        let error_count = self.get_error_count();
        let warning_count = self.get_warning_count();
        let transient = self
            .newest_transient()
            .map(|n| (n.id.clone(), n.get_icon(), n.get_color(), n.title.clone()));

        if error_count == 0 && warning_count == 0 && transient.is_none() {
            return;
        }

        ui.separator();

        // Most recent confirmation first; it expires on its own.
        if let Some((id, icon, color, title)) = transient {
            if ui
                .colored_label(color, format!("{} {}", icon, title))
                .clicked()
            {
                self.show_notification_details(id);
            }
        }

        if error_count > 0 {
            let error_text = if error_count == 1 {
                "1 error".to_string()
            } else {
                format!("{} errors", error_count)
            };

            if ui
                .colored_label(Color32::from_rgb(220, 50, 50), format!("✗ {}", error_text))
                .clicked()
            {
                // Find the first error notification and show it
                if let Some(error_notification) = self
                    .get_active_notifications()
                    .iter()
                    .find(|n| matches!(n.notification_type, NotificationType::Error))
                {
                    self.show_notification_details(error_notification.id.clone());
                }
            }
        }

        if warning_count > 0 {
            let warning_text = if warning_count == 1 {
                "1 warning".to_string()
            } else {
                format!("{} warnings", warning_count)
            };

            if ui
                .colored_label(
                    Color32::from_rgb(255, 150, 0),
                    format!("⚠ {}", warning_text),
                )
                .clicked()
            {
                // Find the first warning notification and show it
                if let Some(warning_notification) = self
                    .get_active_notifications()
                    .iter()
                    .find(|n| matches!(n.notification_type, NotificationType::Warning))
                {
                    self.show_notification_details(warning_notification.id.clone());
                }
            }
        }
    }
}

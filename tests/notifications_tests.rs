#[cfg(test)]
mod tests {
    use pixeldash::app::notifications::{
        Notification, NotificationDetail, NotificationManager, NotificationType,
    };
    use std::time::Instant;

    fn error(id: &str, title: &str) -> Notification {
        Notification::new_error(
            id.to_string(),
            title.to_string(),
            vec![NotificationDetail {
                message: "boom".to_string(),
                details: Some("stacktrace".to_string()),
            }],
            "Test".to_string(),
        )
    }

    #[test]
    fn test_errors_do_not_auto_expire() {
        let notification = error("e1", "Save failed");

        assert!(notification.expires_at.is_none());
        assert!(!notification.is_expired());
        assert!(matches!(
            notification.notification_type,
            NotificationType::Error
        ));
    }

    #[test]
    fn test_transient_notifications_carry_an_expiry() {
        let success = Notification::new_success(
            "s1".to_string(),
            "Saved".to_string(),
            "ok".to_string(),
            "Test".to_string(),
        );
        let info = Notification::new_info(
            "i1".to_string(),
            "FYI".to_string(),
            "ok".to_string(),
            "Test".to_string(),
        );
        let warning = Notification::new_warning(
            "w1".to_string(),
            "Careful".to_string(),
            "ok".to_string(),
            "Test".to_string(),
        );

        for n in [&success, &info, &warning] {
            assert!(n.expires_at.expect("should expire") > n.created_at);
            assert!(!n.is_expired());
        }
        // Warnings linger longer than confirmations.
        assert!(warning.expires_at.unwrap() > success.expires_at.unwrap());
    }

    #[test]
    fn test_same_id_replaces_instead_of_stacking() {
        let mut manager = NotificationManager::new();

        manager.add_notification(error("config-save", "Save failed"));
        manager.add_notification(error("config-save", "Save failed again"));

        let active = manager.get_active_notifications();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].title, "Save failed again");
    }

    #[test]
    fn test_error_and_warning_counts() {
        let mut manager = NotificationManager::new();
        manager.add_notification(error("e1", "one"));
        manager.add_notification(error("e2", "two"));
        manager.add_notification(Notification::new_warning(
            "w1".to_string(),
            "careful".to_string(),
            "msg".to_string(),
            "Test".to_string(),
        ));
        manager.add_notification(Notification::new_success(
            "s1".to_string(),
            "saved".to_string(),
            "msg".to_string(),
            "Test".to_string(),
        ));

        assert_eq!(manager.get_error_count(), 2);
        assert_eq!(manager.get_warning_count(), 1);
    }

    #[test]
    fn test_dismiss_clears_details_selection() {
        let mut manager = NotificationManager::new();
        manager.add_notification(error("e1", "one"));
        manager.show_notification_details("e1".to_string());
        assert!(manager.show_details_window);

        manager.dismiss_notification("e1");

        assert!(manager.get_notification("e1").is_none());
        assert!(manager.selected_notification_id.is_none());
        assert!(!manager.show_details_window);
    }

    #[test]
    fn test_dismissing_other_notification_keeps_selection() {
        let mut manager = NotificationManager::new();
        manager.add_notification(error("e1", "one"));
        manager.add_notification(error("e2", "two"));
        manager.show_notification_details("e1".to_string());

        manager.dismiss_notification("e2");

        assert_eq!(manager.selected_notification_id.as_deref(), Some("e1"));
        assert!(manager.show_details_window);
    }

    #[test]
    fn test_clear_expired_removes_only_expired() {
        let mut manager = NotificationManager::new();
        manager.add_notification(error("e1", "stays"));

        let mut expired = Notification::new_success(
            "s1".to_string(),
            "goes".to_string(),
            "msg".to_string(),
            "Test".to_string(),
        );
        // Backdate the expiry; Instant::now() has advanced past it by the
        // time clear_expired compares.
        expired.expires_at = Some(expired.created_at);
        manager.add_notification(expired);

        manager.clear_expired();

        assert!(manager.get_notification("e1").is_some());
        assert!(manager.get_notification("s1").is_none());
    }

    #[test]
    fn test_active_notifications_newest_first() {
        let mut manager = NotificationManager::new();
        let older = error("e1", "older");
        let mut newer = error("e2", "newer");
        // Instant resolution can make back-to-back constructors tie.
        newer.created_at = Instant::now() + std::time::Duration::from_millis(1);
        manager.add_notification(older);
        manager.add_notification(newer);

        let active = manager.get_active_notifications();
        assert_eq!(active[0].id, "e2");
        assert_eq!(active[1].id, "e1");
    }
}

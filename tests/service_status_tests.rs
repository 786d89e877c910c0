#[cfg(test)]
mod tests {
    use pixeldash::app::api_client::PanelApiClient;
    use pixeldash::app::service_status::{ServiceStatus, ServiceStatusMonitor, POLL_INTERVAL};
    use std::thread;
    use std::time::{Duration, Instant};

    /// Spins on [`ServiceStatusMonitor::poll`] until the worker produces a
    /// result or the deadline passes.
    fn wait_for_status(monitor: &ServiceStatusMonitor, deadline: Duration) -> ServiceStatus {
        let give_up = Instant::now() + deadline;
        loop {
            if let Some(status) = monitor.poll() {
                return status;
            }
            if Instant::now() > give_up {
                panic!("status monitor produced no result within {:?}", deadline);
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    #[test]
    fn test_default_status_is_unknown() {
        assert_eq!(ServiceStatus::default(), ServiceStatus::Unknown);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ServiceStatus::Running.label(), "Running");
        assert_eq!(ServiceStatus::Stopped.label(), "Stopped");
        assert_eq!(ServiceStatus::Unknown.label(), "Unknown");
    }

    #[test]
    fn test_unreachable_service_reports_unknown() {
        // Nothing listens on the loopback discard port, so the check fails
        // with a refused connection. Failures must read as Unknown, never
        // as Stopped; Stopped means the service answered.
        let client = PanelApiClient::new("http://127.0.0.1:9").unwrap();
        let monitor = ServiceStatusMonitor::start(client);

        let status = wait_for_status(&monitor, Duration::from_secs(15));

        assert_eq!(status, ServiceStatus::Unknown);
    }

    #[test]
    fn test_check_now_forces_an_early_recheck() {
        let client = PanelApiClient::new("http://127.0.0.1:9").unwrap();
        let monitor = ServiceStatusMonitor::start(client);

        // First result comes from the startup check.
        wait_for_status(&monitor, Duration::from_secs(15));

        // The next scheduled check is a full poll interval away; a second
        // result arriving sooner can only come from the command channel.
        monitor.check_now();
        let early = Duration::from_secs(8);
        assert!(early < POLL_INTERVAL);
        let status = wait_for_status(&monitor, early);

        assert_eq!(status, ServiceStatus::Unknown);
    }
}

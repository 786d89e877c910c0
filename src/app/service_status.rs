//! # Service Status Monitor
//!
//! Background polling of the service's `/api/status` endpoint. One worker
//! thread checks once at startup and then every [`POLL_INTERVAL`]; the UI
//! drains the latest result each frame via [`ServiceStatusMonitor::poll`].
//! A restart can request an out-of-schedule check with
//! [`ServiceStatusMonitor::check_now`] so the indicator does not lag a full
//! poll interval behind.

use crate::app::api_client::PanelApiClient;
use crate::log_debug;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Time between unsolicited status checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(10);

/// What the status indicator can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ServiceStatus {
    /// Service reachable, renderer reported `running: true`.
    Running,
    /// Service reachable, renderer reported `running: false`.
    Stopped,
    /// Service unreachable or its response was malformed.
    #[default]
    Unknown,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Running => "Running",
            ServiceStatus::Stopped => "Stopped",
            ServiceStatus::Unknown => "Unknown",
        }
    }
}

enum Command {
    CheckNow,
}

/// Handle to the polling worker.
///
/// Dropping the handle closes the command channel, which the worker treats
/// as its shutdown signal at the next wakeup. Reconnecting to a different
/// base URL is just dropping the old monitor and starting a new one.
pub struct ServiceStatusMonitor {
    status_rx: mpsc::Receiver<ServiceStatus>,
    command_tx: mpsc::Sender<Command>,
}

impl ServiceStatusMonitor {
    /// Spawns the worker against the given client.
    pub fn start(client: PanelApiClient) -> Self {
        let (status_tx, status_rx) = mpsc::channel();
        let (command_tx, command_rx) = mpsc::channel::<Command>();

        thread::spawn(move || {
            log_debug!("Status monitor started for {}", client.base_url());
            loop {
                let status = match client.fetch_status() {
                    Ok(true) => ServiceStatus::Running,
                    Ok(false) => ServiceStatus::Stopped,
                    Err(e) => {
                        // Any failure mode collapses to Unknown; the panel
                        // being down and the network being down look the
                        // same from here.
                        log_debug!("Status check failed: {:#}", e);
                        ServiceStatus::Unknown
                    }
                };

                if status_tx.send(status).is_err() {
                    break;
                }

                match command_rx.recv_timeout(POLL_INTERVAL) {
                    Ok(Command::CheckNow) => continue,
                    Err(mpsc::RecvTimeoutError::Timeout) => continue,
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
            log_debug!("Status monitor stopped");
        });

        Self {
            status_rx,
            command_tx,
        }
    }

    /// The newest status produced since the last call, if any. Drains the
    /// channel so a backlog collapses to the most recent result.
    pub fn poll(&self) -> Option<ServiceStatus> {
        let mut latest = None;
        while let Ok(status) = self.status_rx.try_recv() {
            latest = Some(status);
        }
        latest
    }

    /// Requests an immediate re-check, ahead of the regular schedule.
    pub fn check_now(&self) {
        let _ = self.command_tx.send(Command::CheckNow);
    }
}

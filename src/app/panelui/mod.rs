//! Desktop user interface for the PixelDash designer.
//!
//! The interface is built as an egui/eframe application with one coordinating
//! state struct ([`app::DesignerApp`]) and a window-per-concern layout:
//!
//! - [`palette`] - draggable widget list, display settings, server controls
//! - [`canvas`] - the 320x170 screen mock with placed widgets and drop zone
//! - [`properties_panel`] - presence-driven editors for the selected widget
//! - [`menu`] - top menu bar, theme picker, and service status indicator
//! - [`server_window`] - modal for adding a monitored server
//! - [`connection_window`] - backend base URL settings
//! - [`document_window`] - read-only JSON tree of the working document
//! - [`log_window`] - tail view of the application log file
//!
//! Render code never mutates the configuration store directly: panels report
//! [`app::PendingAction`] events that the app applies once per frame, after
//! every panel has drawn, so server indices can never go stale mid-frame.

pub mod app;
pub mod canvas;
pub mod connection_window;
pub mod document_window;
pub mod log_window;
pub mod menu;
pub mod palette;
pub mod properties_panel;
pub mod server_window;

pub use app::DesignerApp;

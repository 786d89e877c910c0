//! PixelDash Designer - visual layout editor for the PixelDash status panel
//!
//! PixelDash Designer is a desktop companion app for a small TFT status panel.
//! The panel firmware renders a vertical stack of widgets (clock, CPU load,
//! temperatures, server reachability rows, ...) from a JSON configuration
//! document it serves over HTTP. This application fetches that document, shows
//! the resulting layout on a screen mock, and lets you rearrange it by direct
//! manipulation instead of hand-editing JSON.
//!
//! # Core Features
//!
//! - **Screen mock**: a scaled preview of the 320x170 panel with the widgets
//!   laid out exactly as the firmware stacks them
//! - **Drag and drop**: drag widgets from the palette onto the preview to
//!   enable them, remove them with a click
//! - **Property editing**: colors, prefixes, and bar toggles for widgets that
//!   carry them, plus display-wide settings
//! - **Server rows**: add, enable, and remove monitored servers
//! - **Save and restart**: push the edited document back to the service and
//!   optionally restart it so the panel picks the changes up
//! - **Status polling**: a background poller keeps the service state visible
//!   in the menu bar
//!
//! # Architecture Overview
//!
//! - **UI Layer** ([`app::panelui`]): egui-based desktop interface
//! - **Configuration model** ([`app::panel_config`]): the JSON document and
//!   the typed edits applied to it
//! - **Service client** ([`app::api_client`]): blocking HTTP client used from
//!   short-lived background threads
//!
//! The UI never blocks on the network: loads, saves, and the status poller
//! run on worker threads and report back over channels drained once per
//! frame. See [`DesignerApp`] for the coordination details.

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::DesignerApp;

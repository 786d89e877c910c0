//! Core application modules for PixelDash Designer.
//!
//! This module contains the configuration model, the panel service client,
//! and the egui user interface built on top of them.
//!
//! # Module Organization
//!
//! ## Configuration and Service
//! - [`panel_config`] - the JSON configuration document and the typed edits
//!   applied to it
//! - [`catalog`] - the widget catalog fetched from the service, mapping
//!   widget ids to positions in the document
//! - [`api_client`] - blocking HTTP client for the panel service
//! - [`service_status`] - background poller for the service health endpoint
//!
//! ## UI and Infrastructure
//! - [`panelui`] - complete user interface implementation with window management
//! - [`notifications`] - notification system for user feedback
//!
//! # Architecture
//!
//! The application follows a simple layered architecture:
//! - [`panel_config`] owns the document being edited; nothing else mutates it
//! - [`api_client`] moves the document between the editor and the service
//! - [`service_status`] keeps the service state current without blocking the UI
//! - [`panelui`] coordinates the user interface and window management

pub mod api_client;
pub mod catalog;
pub mod notifications;
pub mod panel_config;
pub mod panelui;
pub mod service_status;

pub use panelui::app::DesignerApp;

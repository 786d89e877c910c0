#![warn(clippy::all, rust_2018_idioms)]

use eframe::egui;
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

const MAX_LOG_LINES: usize = 1000;
const UPDATE_INTERVAL_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn from_str(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "ERROR" | "ERRO" => LogLevel::Error,
            "WARN" | "WARNING" => LogLevel::Warn,
            "INFO" => LogLevel::Info,
            "DEBUG" | "DEBG" => LogLevel::Debug,
            "TRACE" | "TRCE" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }

    fn should_show(&self, filter_level: &LogLevel) -> bool {
        match filter_level {
            LogLevel::Error => matches!(self, LogLevel::Error),
            LogLevel::Warn => matches!(self, LogLevel::Error | LogLevel::Warn),
            LogLevel::Info => matches!(self, LogLevel::Error | LogLevel::Warn | LogLevel::Info),
            LogLevel::Debug => matches!(
                self,
                LogLevel::Error | LogLevel::Warn | LogLevel::Info | LogLevel::Debug
            ),
            LogLevel::Trace => true, // Show all
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warn => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
            LogLevel::Trace => "TRACE",
        }
    }
}

#[derive(Clone)]
pub struct LogMessage {
    pub timestamp: String,
    pub level: String,
    pub message: String,
    pub full_line: String,
}

/// Tail view of the application's own log file.
///
/// A watcher thread polls the file for appended lines and ships them over a
/// channel; the window drains the channel each frame. Holds at most
/// [`MAX_LOG_LINES`] parsed lines.
pub struct LogWindow {
    pub open: bool,
    log_path: PathBuf,
    log_messages: Arc<Mutex<VecDeque<LogMessage>>>,
    log_receiver: Receiver<Vec<LogMessage>>,
    auto_scroll: bool,
    search_query: String,
    filter_level: LogLevel,
    watcher_thread: Option<thread::JoinHandle<()>>,
}

impl Default for LogWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl LogWindow {
    pub fn new() -> Self {
        let log_path = Self::get_log_path();
        let (sender, receiver) = channel();

        let mut window = Self {
            open: false,
            log_path: log_path.clone(),
            log_messages: Arc::new(Mutex::new(VecDeque::with_capacity(MAX_LOG_LINES))),
            log_receiver: receiver,
            auto_scroll: true,
            search_query: String::new(),
            filter_level: LogLevel::Info, // Default to INFO level
            watcher_thread: None,
        };

        window.start_watcher(sender);

        window
    }

    fn get_log_path() -> PathBuf {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "pixeldash") {
            let log_dir = proj_dirs.data_dir().join("logs");
            log_dir.join("pixeldash.log")
        } else {
            // Fallback path
            PathBuf::from("./pixeldash.log")
        }
    }

    fn start_watcher(&mut self, sender: Sender<Vec<LogMessage>>) {
        let log_path = self.log_path.clone();

        let handle = thread::spawn(move || {
            let mut last_position = 0u64;

            loop {
                thread::sleep(Duration::from_millis(UPDATE_INTERVAL_MS));

                // The file may not exist until the first line is logged
                let file = match File::open(&log_path) {
                    Ok(f) => f,
                    Err(_) => continue,
                };

                let mut reader = BufReader::new(file);

                if let Ok(metadata) = std::fs::metadata(&log_path) {
                    let current_size = metadata.len();

                    // If file was truncated or is new, reset position
                    if current_size < last_position {
                        last_position = 0;
                    }

                    if reader.seek(SeekFrom::Start(last_position)).is_ok() {
                        let mut new_messages = Vec::new();
                        let mut line = String::new();

                        while reader.read_line(&mut line).unwrap_or(0) > 0 {
                            if !line.trim().is_empty() {
                                if let Some(msg) = Self::parse_log_line(&line) {
                                    new_messages.push(msg);
                                }
                            }
                            line.clear();
                        }

                        if let Ok(pos) = reader.stream_position() {
                            last_position = pos;
                        }

                        if !new_messages.is_empty() && sender.send(new_messages).is_err() {
                            // Window dropped; nobody is listening anymore
                            break;
                        }
                    }
                }
            }
        });

        self.watcher_thread = Some(handle);
    }

    fn parse_log_line(line: &str) -> Option<LogMessage> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        // Parse tracing/log format: TIMESTAMP LEVEL MODULE: MESSAGE
        // Example: 2025-05-30T00:20:07.991790Z DEBUG pixeldash::app::panelui::menu: Log button clicked
        let parts: Vec<&str> = trimmed.splitn(4, ' ').collect();

        if parts.len() >= 3 {
            let timestamp = parts[0].to_string();
            let level = parts[1].to_string();
            let module_and_message = parts[2..].join(" ");

            // Split on first colon to separate module from message
            if let Some(colon_pos) = module_and_message.find(':') {
                let module = module_and_message[..colon_pos].to_string();
                let message = module_and_message[colon_pos + 1..].trim().to_string();

                return Some(LogMessage {
                    timestamp,
                    level,
                    message: format!("{}: {}", module, message),
                    full_line: line.to_string(),
                });
            }
        }

        // Fallback for bracketed format: TIMESTAMP [LEVEL] MESSAGE
        if let Some(bracket_start) = trimmed.find('[') {
            if let Some(bracket_end) = trimmed.find(']') {
                if bracket_end > bracket_start {
                    let timestamp = trimmed[..bracket_start].trim().to_string();
                    let level = trimmed[bracket_start + 1..bracket_end].to_string();
                    let message = trimmed[bracket_end + 1..].trim().to_string();

                    return Some(LogMessage {
                        timestamp,
                        level,
                        message,
                        full_line: line.to_string(),
                    });
                }
            }
        }

        // Space-separated format without brackets: TIMESTAMP LEVEL MESSAGE
        let parts: Vec<&str> = trimmed.splitn(3, ' ').collect();
        if parts.len() >= 3 {
            let potential_level = parts[1].to_uppercase();
            if matches!(
                potential_level.as_str(),
                "ERROR" | "WARN" | "INFO" | "DEBUG" | "TRACE"
            ) {
                return Some(LogMessage {
                    timestamp: parts[0].to_string(),
                    level: potential_level,
                    message: parts[2].to_string(),
                    full_line: line.to_string(),
                });
            }
        }

        // Fallback: treat whole line as message
        Some(LogMessage {
            timestamp: String::new(),
            level: "INFO".to_string(),
            message: trimmed.to_string(),
            full_line: line.to_string(),
        })
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        self.drain_new_messages();

        // Constrain the window to the screen
        let screen_rect = ctx.screen_rect();
        let max_width = screen_rect.width() * 0.9;
        let max_height = screen_rect.height() * 0.9;
        let default_width = 800.0_f32.min(max_width);
        let default_height = 400.0_f32.min(max_height);

        let mut open = self.open;
        egui::Window::new("Log Viewer")
            .open(&mut open)
            .default_size([default_width, default_height])
            .max_size([max_width, max_height])
            .constrain(true)
            .resizable(true)
            .movable(true)
            .show(ctx, |ui| {
                self.render_controls(ui);
                ui.separator();
                self.render_messages(ui);
            });
        self.open = open;

        // Keep tailing even when the user provides no input
        ctx.request_repaint_after(Duration::from_millis(UPDATE_INTERVAL_MS));
    }

    fn drain_new_messages(&mut self) {
        while let Ok(new_messages) = self.log_receiver.try_recv() {
            if let Ok(mut messages) = self.log_messages.lock() {
                for msg in new_messages {
                    messages.push_back(msg);

                    while messages.len() > MAX_LOG_LINES {
                        messages.pop_front();
                    }
                }
            }
        }
    }

    fn render_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Log file:");
            ui.monospace(self.log_path.display().to_string());

            ui.separator();

            ui.checkbox(&mut self.auto_scroll, "Auto-scroll");

            ui.separator();

            ui.label("Level:");
            egui::ComboBox::from_label("Filter Level")
                .selected_text(self.filter_level.as_str())
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut self.filter_level, LogLevel::Error, "ERROR");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Warn, "WARN");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Info, "INFO");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Debug, "DEBUG");
                    ui.selectable_value(&mut self.filter_level, LogLevel::Trace, "TRACE");
                });

            ui.separator();

            ui.label("Search:");
            ui.text_edit_singleline(&mut self.search_query);

            if ui.button("Clear").clicked() {
                if let Ok(mut messages) = self.log_messages.lock() {
                    messages.clear();
                }
            }
        });
    }

    fn render_messages(&mut self, ui: &mut egui::Ui) {
        egui::ScrollArea::both()
            .auto_shrink([false; 2])
            .stick_to_bottom(self.auto_scroll)
            .show(ui, |ui| {
                if let Ok(messages) = self.log_messages.lock() {
                    let total_messages = messages.len();
                    let mut shown_messages = 0;

                    for msg in messages.iter() {
                        let msg_level = LogLevel::from_str(&msg.level);
                        if !msg_level.should_show(&self.filter_level) {
                            continue;
                        }

                        if !self.search_query.is_empty()
                            && !msg
                                .full_line
                                .to_lowercase()
                                .contains(&self.search_query.to_lowercase())
                        {
                            continue;
                        }

                        shown_messages += 1;

                        ui.horizontal(|ui| {
                            ui.style_mut().wrap_mode = Some(egui::TextWrapMode::Extend);
                            ui.style_mut().text_styles.insert(
                                egui::TextStyle::Monospace,
                                egui::FontId::new(10.0, egui::FontFamily::Monospace),
                            );

                            if !msg.timestamp.is_empty() {
                                ui.monospace(&msg.timestamp);
                            }

                            let (level_color, level_text) = level_style(&msg.level);
                            ui.colored_label(level_color, level_text);

                            ui.monospace(&msg.message);
                        });
                    }

                    if shown_messages < total_messages {
                        ui.separator();
                        ui.label(format!(
                            "Showing {} of {} messages (filtered by level: {})",
                            shown_messages,
                            total_messages,
                            self.filter_level.as_str()
                        ));
                    }
                }
            });
    }
}

fn level_style(level: &str) -> (egui::Color32, &str) {
    match level {
        "ERROR" | "ERRO" => (egui::Color32::from_rgb(255, 100, 100), "ERROR"),
        "WARN" | "WARNING" => (egui::Color32::from_rgb(255, 200, 100), "WARN"),
        "INFO" => (egui::Color32::from_rgb(100, 200, 255), "INFO"),
        "DEBUG" | "DEBG" => (egui::Color32::from_rgb(150, 150, 150), "DEBUG"),
        "TRACE" | "TRCE" => (egui::Color32::from_rgb(120, 120, 120), "TRACE"),
        other => (egui::Color32::from_rgb(200, 200, 200), other),
    }
}

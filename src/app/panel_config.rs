//! # Panel Configuration Document
//!
//! Typed model of the PixelDash service configuration together with the
//! [`ConfigStore`] that owns the working copy while the designer is open.
//!
//! The service persists its configuration as JSON. Rather than mutating a
//! dynamic JSON tree with dotted path strings, the document is deserialized
//! into the structs below once at load time and every edit goes through a
//! typed method on [`ConfigStore`]. Fields the designer never edits (display
//! formats, custom text, panel geometry) are retained verbatim in per-struct
//! `extra` maps so a load/save cycle never drops anything the service wrote.
//!
//! ## Document Shape
//!
//! ```json
//! {
//!   "time": { "enabled": true, "color": [255, 255, 255] },
//!   "network": { "local_ip": { "enabled": true, "prefix": "IP: " } },
//!   "system": { "cpu_usage": { "enabled": true, "show_bar": true } },
//!   "display": { "background_color": [0, 0, 0], "update_interval": 1 },
//!   "servers": [ { "name": "web", "host": "10.0.0.2", "port": 80 } ]
//! }
//! ```
//!
//! The widget entries live at fixed positions in this tree; [`WidgetSlot`]
//! enumerates those positions and is the only currency the rest of the
//! application uses to address a widget.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// RGB color triple as stored in the configuration document.
pub type Rgb = [u8; 3];

/// Default function for serde to return true
fn default_true() -> bool {
    true
}

fn default_check_interval() -> u32 {
    DEFAULT_CHECK_INTERVAL
}

fn default_color_online() -> Rgb {
    DEFAULT_COLOR_ONLINE
}

fn default_color_offline() -> Rgb {
    DEFAULT_COLOR_OFFLINE
}

/// Background color used when the document does not carry one.
pub const DEFAULT_BACKGROUND: Rgb = [0, 0, 0];

/// Refresh interval in seconds used when the document does not carry one.
pub const DEFAULT_UPDATE_INTERVAL: u32 = 1;

/// Probe interval in seconds for a freshly added server row.
pub const DEFAULT_CHECK_INTERVAL: u32 = 10;

/// Marker color for a reachable server.
pub const DEFAULT_COLOR_ONLINE: Rgb = [0, 255, 0];

/// Marker color for an unreachable server.
pub const DEFAULT_COLOR_OFFLINE: Rgb = [255, 0, 0];

/// A single widget entry in the configuration document.
///
/// Only `enabled` is guaranteed to be present; the optional properties are
/// serialized only when set so the saved document stays minimal. Properties
/// the designer does not model (e.g. `format` on the time widget) survive in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetEntry {
    /// Whether the service renders this widget.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Text color as RGB, when customized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,

    /// Label drawn before the value, when customized.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Whether a usage bar is drawn next to the percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_bar: Option<bool>,

    /// Properties owned by the service that the designer round-trips.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for WidgetEntry {
    fn default() -> Self {
        Self {
            enabled: true,
            color: None,
            prefix: None,
            show_bar: None,
            extra: Map::new(),
        }
    }
}

/// Network address widgets, grouped as in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_ip: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tailscale_ip: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<WidgetEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// System metric widgets, grouped as in the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_usage: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_usage: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_usage: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<WidgetEntry>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Panel-wide display settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Panel background as RGB.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Rgb>,

    /// Seconds between panel refreshes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_interval: Option<u32>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One monitored server row.
///
/// `port` is deliberately serialized even when `None`: the service treats an
/// explicit `null` as "ping only" and the designer must not turn that into a
/// missing key on save.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Display name shown on the panel.
    #[serde(default)]
    pub name: String,

    /// Hostname or IP address to probe.
    #[serde(default)]
    pub host: String,

    /// TCP port to probe, or `None` for an ICMP-style reachability check.
    #[serde(default)]
    pub port: Option<u16>,

    /// Whether the service probes and renders this server.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Seconds between probes.
    #[serde(default = "default_check_interval")]
    pub check_interval: u32,

    /// Marker color when the probe succeeds.
    #[serde(default = "default_color_online")]
    pub color_online: Rgb,

    /// Marker color when the probe fails.
    #[serde(default = "default_color_offline")]
    pub color_offline: Rgb,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ServerEntry {
    /// A new server row with the service's documented defaults.
    pub fn new(name: impl Into<String>, host: impl Into<String>, port: Option<u16>) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
            enabled: true,
            check_interval: DEFAULT_CHECK_INTERVAL,
            color_online: DEFAULT_COLOR_ONLINE,
            color_offline: DEFAULT_COLOR_OFFLINE,
            extra: Map::new(),
        }
    }
}

/// The whole configuration document.
///
/// Every section is optional so that a sparse document coming from the
/// service deserializes cleanly; accessors on [`ConfigStore`] create missing
/// sections on demand when an edit targets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<WidgetEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<NetworkConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display: Option<DisplaySettings>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servers: Option<Vec<ServerEntry>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Address of a widget entry inside [`PanelConfig`].
///
/// The service describes widgets with dotted key strings such as
/// `"system.cpu_usage"`; those strings are parsed exactly once, when the
/// widget catalog is loaded, and everything downstream works with this enum.
/// A slot always resolves to the same place in the document, so lookups can
/// never fail with a typo'd path at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetSlot {
    Time,
    Date,
    Hostname,
    LocalIp,
    TailscaleIp,
    PublicIp,
    CpuUsage,
    MemoryUsage,
    DiskUsage,
    Temperature,
}

impl WidgetSlot {
    /// Vertical stacking order the panel renders widgets in, top to bottom.
    pub const STACK_ORDER: [WidgetSlot; 10] = [
        WidgetSlot::Time,
        WidgetSlot::Date,
        WidgetSlot::Hostname,
        WidgetSlot::LocalIp,
        WidgetSlot::TailscaleIp,
        WidgetSlot::PublicIp,
        WidgetSlot::CpuUsage,
        WidgetSlot::MemoryUsage,
        WidgetSlot::DiskUsage,
        WidgetSlot::Temperature,
    ];

    /// Parses a dotted configuration key from the widget catalog.
    ///
    /// Returns `None` for keys the designer does not model; callers decide
    /// whether that is worth reporting.
    pub fn from_config_key(key: &str) -> Option<Self> {
        match key {
            "time" => Some(WidgetSlot::Time),
            "date" => Some(WidgetSlot::Date),
            "hostname" => Some(WidgetSlot::Hostname),
            "network.local_ip" => Some(WidgetSlot::LocalIp),
            "network.tailscale_ip" => Some(WidgetSlot::TailscaleIp),
            "network.public_ip" => Some(WidgetSlot::PublicIp),
            "system.cpu_usage" => Some(WidgetSlot::CpuUsage),
            "system.memory_usage" => Some(WidgetSlot::MemoryUsage),
            "system.disk_usage" => Some(WidgetSlot::DiskUsage),
            "system.temperature" => Some(WidgetSlot::Temperature),
            _ => None,
        }
    }

    /// The dotted key this slot corresponds to in the service's catalog.
    pub fn config_key(&self) -> &'static str {
        match self {
            WidgetSlot::Time => "time",
            WidgetSlot::Date => "date",
            WidgetSlot::Hostname => "hostname",
            WidgetSlot::LocalIp => "network.local_ip",
            WidgetSlot::TailscaleIp => "network.tailscale_ip",
            WidgetSlot::PublicIp => "network.public_ip",
            WidgetSlot::CpuUsage => "system.cpu_usage",
            WidgetSlot::MemoryUsage => "system.memory_usage",
            WidgetSlot::DiskUsage => "system.disk_usage",
            WidgetSlot::Temperature => "system.temperature",
        }
    }
}

/// Owner of the working configuration while the designer is open.
///
/// All mutation goes through the methods here; UI code never touches the
/// document directly. Targeting a slot whose parent section is absent
/// materializes the section first, so enabling `system.cpu_usage` on an
/// empty document produces `{"system": {"cpu_usage": {"enabled": true}}}`.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    config: PanelConfig,
}

impl ConfigStore {
    pub fn new(config: PanelConfig) -> Self {
        Self { config }
    }

    /// Read-only view of the working document.
    pub fn document(&self) -> &PanelConfig {
        &self.config
    }

    /// Deep copy of the working document, for saving or inspection.
    pub fn snapshot(&self) -> PanelConfig {
        self.config.clone()
    }

    /// Swaps in a freshly loaded document, discarding local edits.
    pub fn replace(&mut self, config: PanelConfig) {
        self.config = config;
    }

    /// The widget entry at `slot`, if its section and entry both exist.
    pub fn entry(&self, slot: WidgetSlot) -> Option<&WidgetEntry> {
        match slot {
            WidgetSlot::Time => self.config.time.as_ref(),
            WidgetSlot::Date => self.config.date.as_ref(),
            WidgetSlot::Hostname => self.config.hostname.as_ref(),
            WidgetSlot::LocalIp => self.config.network.as_ref()?.local_ip.as_ref(),
            WidgetSlot::TailscaleIp => self.config.network.as_ref()?.tailscale_ip.as_ref(),
            WidgetSlot::PublicIp => self.config.network.as_ref()?.public_ip.as_ref(),
            WidgetSlot::CpuUsage => self.config.system.as_ref()?.cpu_usage.as_ref(),
            WidgetSlot::MemoryUsage => self.config.system.as_ref()?.memory_usage.as_ref(),
            WidgetSlot::DiskUsage => self.config.system.as_ref()?.disk_usage.as_ref(),
            WidgetSlot::Temperature => self.config.system.as_ref()?.temperature.as_ref(),
        }
    }

    /// The widget entry at `slot`, creating the entry and any missing parent
    /// section along the way.
    pub fn entry_mut(&mut self, slot: WidgetSlot) -> &mut WidgetEntry {
        match slot {
            WidgetSlot::Time => self.config.time.get_or_insert_with(WidgetEntry::default),
            WidgetSlot::Date => self.config.date.get_or_insert_with(WidgetEntry::default),
            WidgetSlot::Hostname => self.config.hostname.get_or_insert_with(WidgetEntry::default),
            WidgetSlot::LocalIp => self
                .config
                .network
                .get_or_insert_with(NetworkConfig::default)
                .local_ip
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::TailscaleIp => self
                .config
                .network
                .get_or_insert_with(NetworkConfig::default)
                .tailscale_ip
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::PublicIp => self
                .config
                .network
                .get_or_insert_with(NetworkConfig::default)
                .public_ip
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::CpuUsage => self
                .config
                .system
                .get_or_insert_with(SystemConfig::default)
                .cpu_usage
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::MemoryUsage => self
                .config
                .system
                .get_or_insert_with(SystemConfig::default)
                .memory_usage
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::DiskUsage => self
                .config
                .system
                .get_or_insert_with(SystemConfig::default)
                .disk_usage
                .get_or_insert_with(WidgetEntry::default),
            WidgetSlot::Temperature => self
                .config
                .system
                .get_or_insert_with(SystemConfig::default)
                .temperature
                .get_or_insert_with(WidgetEntry::default),
        }
    }

    /// Whether the widget at `slot` is currently enabled.
    pub fn is_enabled(&self, slot: WidgetSlot) -> bool {
        self.entry(slot).map(|e| e.enabled).unwrap_or(false)
    }

    /// Marks the widget at `slot` enabled, materializing its entry.
    pub fn enable(&mut self, slot: WidgetSlot) {
        self.entry_mut(slot).enabled = true;
    }

    /// Marks the widget at `slot` disabled, materializing its entry.
    ///
    /// The entry stays in the document so its color/prefix customizations are
    /// still there when the widget is re-enabled later.
    pub fn disable(&mut self, slot: WidgetSlot) {
        self.entry_mut(slot).enabled = false;
    }

    pub fn set_color(&mut self, slot: WidgetSlot, color: Rgb) {
        self.entry_mut(slot).color = Some(color);
    }

    pub fn set_prefix(&mut self, slot: WidgetSlot, prefix: impl Into<String>) {
        self.entry_mut(slot).prefix = Some(prefix.into());
    }

    pub fn set_show_bar(&mut self, slot: WidgetSlot, show_bar: bool) {
        self.entry_mut(slot).show_bar = Some(show_bar);
    }

    /// The server list, empty when the document has none.
    pub fn servers(&self) -> &[ServerEntry] {
        self.config.servers.as_deref().unwrap_or(&[])
    }

    /// The server at `index`, if the list is that long.
    pub fn server(&self, index: usize) -> Option<&ServerEntry> {
        self.servers().get(index)
    }

    /// Mutable access to the server at `index`.
    pub fn server_mut(&mut self, index: usize) -> Option<&mut ServerEntry> {
        self.config.servers.as_mut()?.get_mut(index)
    }

    /// Appends a server row, materializing the list, and returns its index.
    pub fn add_server(&mut self, server: ServerEntry) -> usize {
        let servers = self.config.servers.get_or_insert_with(Vec::new);
        servers.push(server);
        servers.len() - 1
    }

    /// Removes the server at `index`. Later rows shift down by one, so any
    /// index the caller derived earlier in the same pass is stale after this
    /// returns `true`.
    pub fn remove_server(&mut self, index: usize) -> bool {
        match self.config.servers.as_mut() {
            Some(servers) if index < servers.len() => {
                servers.remove(index);
                true
            }
            _ => false,
        }
    }

    /// Panel background, falling back to the service default.
    pub fn background_color(&self) -> Rgb {
        self.config
            .display
            .as_ref()
            .and_then(|d| d.background_color)
            .unwrap_or(DEFAULT_BACKGROUND)
    }

    /// Panel refresh interval in seconds, falling back to the service default.
    pub fn update_interval(&self) -> u32 {
        self.config
            .display
            .as_ref()
            .and_then(|d| d.update_interval)
            .unwrap_or(DEFAULT_UPDATE_INTERVAL)
    }

    pub fn set_background_color(&mut self, color: Rgb) {
        self.config
            .display
            .get_or_insert_with(DisplaySettings::default)
            .background_color = Some(color);
    }

    pub fn set_update_interval(&mut self, seconds: u32) {
        self.config
            .display
            .get_or_insert_with(DisplaySettings::default)
            .update_interval = Some(seconds);
    }

    /// Disables every widget and empties the server list.
    ///
    /// Entries and their customizations are kept; only `enabled` flips, and
    /// the `servers` key stays present as an empty array so the service sees
    /// an explicit "no servers" rather than an untouched old list.
    pub fn clear_all(&mut self) {
        for slot in WidgetSlot::STACK_ORDER {
            if self.entry(slot).is_some() {
                self.entry_mut(slot).enabled = false;
            }
        }
        self.config.servers = Some(Vec::new());
    }
}

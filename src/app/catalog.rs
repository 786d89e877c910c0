//! # Widget Catalog
//!
//! The palette's source of truth: the ordered list of widget descriptors the
//! service advertises on `/api/widgets`. The catalog is fetched once per
//! connection and is read-only afterwards.
//!
//! Each descriptor carries a dotted `config_key` naming where the widget
//! lives in the configuration document. Those strings are parsed here,
//! exactly once, into [`WidgetSlot`]s; a descriptor whose key does not map
//! to a known slot is kept for display but can never be enabled, and the
//! mismatch is logged at load time instead of failing silently later.

use crate::app::panel_config::WidgetSlot;
use crate::log_warn;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One widget as advertised by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetDescriptor {
    /// Stable identifier, unique within the catalog.
    pub id: String,

    /// Human-readable palette label.
    pub name: String,

    /// Short glyph shown next to the label.
    #[serde(default)]
    pub icon: String,

    /// Optional longer description for tooltips.
    #[serde(default)]
    pub description: String,

    /// Dotted path to the widget's entry in the configuration document.
    pub config_key: String,
}

/// A descriptor paired with its resolved document slot.
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub descriptor: WidgetDescriptor,
    /// `None` when `config_key` named a path this designer does not model.
    pub slot: Option<WidgetSlot>,
}

/// Indexed, immutable view of the descriptor list.
///
/// Lookup by id and by slot are both O(1); palette order is the service's
/// order, preserved in [`WidgetCatalog::entries`].
#[derive(Debug, Clone, Default)]
pub struct WidgetCatalog {
    entries: Vec<CatalogEntry>,
    by_id: HashMap<String, usize>,
    by_slot: HashMap<WidgetSlot, usize>,
}

impl WidgetCatalog {
    /// Builds the catalog from a fetched descriptor list, resolving every
    /// `config_key` up front.
    pub fn from_descriptors(descriptors: Vec<WidgetDescriptor>) -> Self {
        let mut entries = Vec::with_capacity(descriptors.len());
        let mut by_id = HashMap::new();
        let mut by_slot = HashMap::new();

        for descriptor in descriptors {
            let slot = WidgetSlot::from_config_key(&descriptor.config_key);
            if slot.is_none() {
                log_warn!(
                    "Widget '{}' has unrecognized config key '{}'; it will be shown but cannot be placed",
                    descriptor.id,
                    descriptor.config_key
                );
            }

            let index = entries.len();
            if by_id.insert(descriptor.id.clone(), index).is_some() {
                log_warn!("Duplicate widget id '{}' in catalog; later entry wins", descriptor.id);
            }
            if let Some(slot) = slot {
                by_slot.insert(slot, index);
            }
            entries.push(CatalogEntry { descriptor, slot });
        }

        Self {
            entries,
            by_id,
            by_slot,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// All entries in the service's palette order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// The entry for a widget id, if the catalog knows it.
    pub fn resolve(&self, id: &str) -> Option<&CatalogEntry> {
        self.by_id.get(id).map(|&i| &self.entries[i])
    }

    /// The document slot a widget id maps to, if any.
    ///
    /// `None` covers both unknown ids and ids whose config key did not
    /// resolve; callers treat either as "nothing to do".
    pub fn slot_of(&self, id: &str) -> Option<WidgetSlot> {
        self.resolve(id).and_then(|entry| entry.slot)
    }

    /// The descriptor occupying `slot`, used when rendering placed widgets.
    pub fn descriptor_for_slot(&self, slot: WidgetSlot) -> Option<&WidgetDescriptor> {
        self.by_slot.get(&slot).map(|&i| &self.entries[i].descriptor)
    }
}

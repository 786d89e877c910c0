#[cfg(test)]
mod tests {
    use pixeldash::app::panel_config::{
        ConfigStore, PanelConfig, ServerEntry, WidgetSlot, DEFAULT_BACKGROUND,
        DEFAULT_CHECK_INTERVAL, DEFAULT_COLOR_OFFLINE, DEFAULT_COLOR_ONLINE,
        DEFAULT_UPDATE_INTERVAL,
    };
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn store_from_json(document: Value) -> ConfigStore {
        let config: PanelConfig =
            serde_json::from_value(document).expect("test document should deserialize");
        ConfigStore::new(config)
    }

    fn to_json(store: &ConfigStore) -> Value {
        serde_json::to_value(store.document()).expect("document should serialize")
    }

    #[test]
    fn test_default_document_is_empty() {
        let store = ConfigStore::default();

        assert_eq!(to_json(&store), json!({}));
        assert!(store.servers().is_empty());
        for slot in WidgetSlot::STACK_ORDER {
            assert!(!store.is_enabled(slot));
            assert!(store.entry(slot).is_none());
        }
    }

    #[test]
    fn test_enable_materializes_missing_sections() {
        let mut store = ConfigStore::default();

        store.enable(WidgetSlot::CpuUsage);

        assert_eq!(
            to_json(&store),
            json!({"system": {"cpu_usage": {"enabled": true}}})
        );
        assert!(store.is_enabled(WidgetSlot::CpuUsage));
    }

    #[test]
    fn test_enable_is_idempotent() {
        let mut store = ConfigStore::default();

        store.enable(WidgetSlot::Time);
        let first = to_json(&store);
        store.enable(WidgetSlot::Time);

        assert_eq!(to_json(&store), first);
    }

    #[test]
    fn test_disable_keeps_entry_and_customizations() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Temperature);
        store.set_color(WidgetSlot::Temperature, [255, 128, 0]);
        store.set_prefix(WidgetSlot::Temperature, "T: ");

        store.disable(WidgetSlot::Temperature);

        assert!(!store.is_enabled(WidgetSlot::Temperature));
        let entry = store
            .entry(WidgetSlot::Temperature)
            .expect("entry should survive disabling");
        assert_eq!(entry.color, Some([255, 128, 0]));
        assert_eq!(entry.prefix.as_deref(), Some("T: "));

        store.enable(WidgetSlot::Temperature);
        let entry = store.entry(WidgetSlot::Temperature).unwrap();
        assert!(entry.enabled);
        assert_eq!(entry.color, Some([255, 128, 0]));
    }

    #[test]
    fn test_set_show_bar() {
        let mut store = ConfigStore::default();

        store.set_show_bar(WidgetSlot::MemoryUsage, false);

        let entry = store.entry(WidgetSlot::MemoryUsage).unwrap();
        assert_eq!(entry.show_bar, Some(false));
    }

    #[test]
    fn test_add_server_returns_index() {
        let mut store = ConfigStore::default();

        let first = store.add_server(ServerEntry::new("web", "10.0.0.2", Some(80)));
        let second = store.add_server(ServerEntry::new("nas", "10.0.0.3", None));

        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(store.servers().len(), 2);
        assert_eq!(store.server(1).unwrap().name, "nas");
    }

    #[test]
    fn test_new_server_gets_service_defaults() {
        let server = ServerEntry::new("web", "10.0.0.2", Some(80));

        assert!(server.enabled);
        assert_eq!(server.check_interval, DEFAULT_CHECK_INTERVAL);
        assert_eq!(server.color_online, DEFAULT_COLOR_ONLINE);
        assert_eq!(server.color_offline, DEFAULT_COLOR_OFFLINE);
    }

    #[test]
    fn test_remove_server_shifts_later_rows() {
        let mut store = ConfigStore::default();
        store.add_server(ServerEntry::new("a", "10.0.0.1", None));
        store.add_server(ServerEntry::new("b", "10.0.0.2", None));
        store.add_server(ServerEntry::new("c", "10.0.0.3", None));

        assert!(store.remove_server(1));

        assert_eq!(store.servers().len(), 2);
        assert_eq!(store.server(0).unwrap().name, "a");
        assert_eq!(store.server(1).unwrap().name, "c");
    }

    #[test]
    fn test_remove_server_out_of_bounds() {
        let mut store = ConfigStore::default();
        store.add_server(ServerEntry::new("a", "10.0.0.1", None));

        assert!(!store.remove_server(5));
        assert!(!ConfigStore::default().remove_server(0));
        assert_eq!(store.servers().len(), 1);
    }

    #[test]
    fn test_display_defaults() {
        let store = ConfigStore::default();

        assert_eq!(store.background_color(), DEFAULT_BACKGROUND);
        assert_eq!(store.update_interval(), DEFAULT_UPDATE_INTERVAL);
    }

    #[test]
    fn test_display_settings_materialize_on_write() {
        let mut store = ConfigStore::default();

        store.set_background_color([10, 20, 30]);
        store.set_update_interval(5);

        assert_eq!(store.background_color(), [10, 20, 30]);
        assert_eq!(store.update_interval(), 5);
        assert_eq!(
            to_json(&store),
            json!({"display": {"background_color": [10, 20, 30], "update_interval": 5}})
        );
    }

    #[test]
    fn test_clear_all_disables_widgets_and_empties_servers() {
        let mut store = store_from_json(json!({
            "time": {"enabled": true, "color": [200, 200, 200]},
            "system": {"cpu_usage": {"enabled": true, "show_bar": true}},
            "display": {"background_color": [1, 2, 3]},
            "servers": [{"name": "web", "host": "10.0.0.2", "port": 80}]
        }));

        store.clear_all();

        assert!(!store.is_enabled(WidgetSlot::Time));
        assert!(!store.is_enabled(WidgetSlot::CpuUsage));
        // Customizations and display settings survive; only `enabled` flips.
        assert_eq!(
            store.entry(WidgetSlot::Time).unwrap().color,
            Some([200, 200, 200])
        );
        assert_eq!(store.background_color(), [1, 2, 3]);
        // An explicit empty list, not a missing key.
        assert_eq!(to_json(&store)["servers"], json!([]));
    }

    #[test]
    fn test_clear_all_does_not_materialize_absent_entries() {
        let mut store = store_from_json(json!({"time": {"enabled": true}}));

        store.clear_all();

        assert!(store.entry(WidgetSlot::Hostname).is_none());
        assert!(store.entry(WidgetSlot::CpuUsage).is_none());
    }

    #[test]
    fn test_unknown_fields_survive_round_trip() {
        // Keys the designer does not model, at every level of the tree.
        let document = json!({
            "time": {"enabled": true, "format": "%H:%M", "font_size": 42},
            "system": {
                "cpu_usage": {"enabled": false, "warn_above": 90},
                "uptime": {"enabled": true}
            },
            "display": {"background_color": [0, 0, 0], "brightness": 80},
            "servers": [{
                "name": "web",
                "host": "10.0.0.2",
                "port": 80,
                "timeout_ms": 500
            }],
            "custom_text": {"enabled": true, "text": "hello"}
        });

        let store = store_from_json(document.clone());

        assert_eq!(to_json(&store), document);
    }

    #[test]
    fn test_null_port_round_trips_as_null() {
        // The service reads an explicit null port as "ping only"; a save must
        // not turn it into a missing key.
        let document = json!({
            "servers": [{"name": "nas", "host": "10.0.0.3", "port": null}]
        });

        let store = store_from_json(document);

        assert_eq!(store.server(0).unwrap().port, None);
        assert_eq!(to_json(&store)["servers"][0]["port"], Value::Null);
    }

    #[test]
    fn test_sparse_server_row_gets_defaults() {
        let store = store_from_json(json!({
            "servers": [{"name": "web", "host": "10.0.0.2"}]
        }));

        let server = store.server(0).unwrap();
        assert!(server.enabled);
        assert_eq!(server.port, None);
        assert_eq!(server.check_interval, DEFAULT_CHECK_INTERVAL);
        assert_eq!(server.color_online, DEFAULT_COLOR_ONLINE);
        assert_eq!(server.color_offline, DEFAULT_COLOR_OFFLINE);
    }

    #[test]
    fn test_widget_slot_config_key_round_trip() {
        for slot in WidgetSlot::STACK_ORDER {
            assert_eq!(WidgetSlot::from_config_key(slot.config_key()), Some(slot));
        }
        assert_eq!(WidgetSlot::from_config_key("custom_text"), None);
        assert_eq!(WidgetSlot::from_config_key(""), None);
    }

    #[test]
    fn test_replace_discards_local_edits() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Date);

        store.replace(PanelConfig::default());

        assert!(!store.is_enabled(WidgetSlot::Date));
        assert_eq!(to_json(&store), json!({}));
    }

    #[test]
    fn test_snapshot_is_independent_of_later_edits() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Time);

        let snapshot = store.snapshot();
        store.disable(WidgetSlot::Time);

        assert!(snapshot.time.unwrap().enabled);
        assert!(!store.is_enabled(WidgetSlot::Time));
    }
}

#[cfg(test)]
mod tests {
    use pixeldash::app::catalog::{WidgetCatalog, WidgetDescriptor};
    use pixeldash::app::panel_config::WidgetSlot;

    fn descriptor(id: &str, name: &str, config_key: &str) -> WidgetDescriptor {
        WidgetDescriptor {
            id: id.to_string(),
            name: name.to_string(),
            icon: String::new(),
            description: String::new(),
            config_key: config_key.to_string(),
        }
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = WidgetCatalog::default();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert!(catalog.resolve("time").is_none());
        assert!(catalog.slot_of("time").is_none());
    }

    #[test]
    fn test_config_keys_resolve_to_slots() {
        let catalog = WidgetCatalog::from_descriptors(vec![
            descriptor("time", "Time", "time"),
            descriptor("cpu", "CPU Usage", "system.cpu_usage"),
            descriptor("local_ip", "Local IP", "network.local_ip"),
        ]);

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.slot_of("time"), Some(WidgetSlot::Time));
        assert_eq!(catalog.slot_of("cpu"), Some(WidgetSlot::CpuUsage));
        assert_eq!(catalog.slot_of("local_ip"), Some(WidgetSlot::LocalIp));
    }

    #[test]
    fn test_unrecognized_config_key_is_kept_but_unplaceable() {
        let catalog = WidgetCatalog::from_descriptors(vec![
            descriptor("time", "Time", "time"),
            descriptor("custom", "Custom Text", "custom_text"),
        ]);

        // Still listed, so the palette can show it.
        assert_eq!(catalog.len(), 2);
        let entry = catalog.resolve("custom").expect("entry should be listed");
        assert!(entry.slot.is_none());
        // But it never maps to a document slot.
        assert_eq!(catalog.slot_of("custom"), None);
    }

    #[test]
    fn test_unknown_id_resolves_to_none() {
        let catalog = WidgetCatalog::from_descriptors(vec![descriptor("time", "Time", "time")]);

        assert!(catalog.resolve("nope").is_none());
        assert_eq!(catalog.slot_of("nope"), None);
    }

    #[test]
    fn test_palette_order_is_service_order() {
        let catalog = WidgetCatalog::from_descriptors(vec![
            descriptor("cpu", "CPU Usage", "system.cpu_usage"),
            descriptor("time", "Time", "time"),
            descriptor("date", "Date", "date"),
        ]);

        let ids: Vec<&str> = catalog
            .entries()
            .iter()
            .map(|e| e.descriptor.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cpu", "time", "date"]);
    }

    #[test]
    fn test_duplicate_id_later_entry_wins() {
        let catalog = WidgetCatalog::from_descriptors(vec![
            descriptor("cpu", "CPU (old)", "system.cpu_usage"),
            descriptor("cpu", "CPU (new)", "system.memory_usage"),
        ]);

        // Both stay in the palette list, but id lookups hit the later entry.
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.resolve("cpu").unwrap().descriptor.name, "CPU (new)");
        assert_eq!(catalog.slot_of("cpu"), Some(WidgetSlot::MemoryUsage));
    }

    #[test]
    fn test_descriptor_for_slot() {
        let catalog = WidgetCatalog::from_descriptors(vec![
            descriptor("time", "Time", "time"),
            descriptor("temp", "Temperature", "system.temperature"),
        ]);

        assert_eq!(
            catalog
                .descriptor_for_slot(WidgetSlot::Temperature)
                .unwrap()
                .id,
            "temp"
        );
        assert!(catalog.descriptor_for_slot(WidgetSlot::DiskUsage).is_none());
    }

    #[test]
    fn test_descriptor_deserializes_with_optional_fields_missing() {
        let descriptors: Vec<WidgetDescriptor> = serde_json::from_str(
            r#"[{"id": "time", "name": "Time", "config_key": "time"}]"#,
        )
        .expect("minimal descriptor should deserialize");

        assert_eq!(descriptors[0].icon, "");
        assert_eq!(descriptors[0].description, "");

        let catalog = WidgetCatalog::from_descriptors(descriptors);
        assert_eq!(catalog.slot_of("time"), Some(WidgetSlot::Time));
    }
}

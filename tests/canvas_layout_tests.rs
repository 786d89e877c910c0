#[cfg(test)]
mod tests {
    use pixeldash::app::panel_config::{ConfigStore, PanelConfig, ServerEntry, WidgetSlot};
    use pixeldash::app::panelui::canvas::{
        layout_placed_widgets, Placement, PANEL_HEIGHT, STACK_TOP_OFFSET, TIME_WIDGET_HEIGHT,
        WIDGET_HEIGHT,
    };
    use serde_json::json;

    fn store_from_json(document: serde_json::Value) -> ConfigStore {
        let config: PanelConfig =
            serde_json::from_value(document).expect("test document should deserialize");
        ConfigStore::new(config)
    }

    #[test]
    fn test_empty_document_places_nothing() {
        let placed = layout_placed_widgets(&ConfigStore::default());

        assert!(placed.is_empty());
    }

    #[test]
    fn test_time_widget_is_taller_than_the_rest() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Time);
        store.enable(WidgetSlot::Date);

        let placed = layout_placed_widgets(&store);

        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].placement, Placement::Slot(WidgetSlot::Time));
        assert_eq!(placed[0].offset, STACK_TOP_OFFSET);
        assert_eq!(placed[0].height, TIME_WIDGET_HEIGHT);
        assert_eq!(placed[1].placement, Placement::Slot(WidgetSlot::Date));
        assert_eq!(placed[1].offset, STACK_TOP_OFFSET + TIME_WIDGET_HEIGHT);
        assert_eq!(placed[1].height, WIDGET_HEIGHT);
    }

    #[test]
    fn test_stack_follows_fixed_order_not_enable_order() {
        let mut store = ConfigStore::default();
        // Enabled in reverse of the panel's stacking order.
        store.enable(WidgetSlot::CpuUsage);
        store.enable(WidgetSlot::LocalIp);
        store.enable(WidgetSlot::Time);

        let placed = layout_placed_widgets(&store);

        let order: Vec<Placement> = placed.iter().map(|p| p.placement).collect();
        assert_eq!(
            order,
            vec![
                Placement::Slot(WidgetSlot::Time),
                Placement::Slot(WidgetSlot::LocalIp),
                Placement::Slot(WidgetSlot::CpuUsage),
            ]
        );
        assert_eq!(placed[1].offset, 70.0);
        assert_eq!(placed[2].offset, 100.0);
    }

    #[test]
    fn test_disabled_widgets_take_no_space() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Date);
        store.enable(WidgetSlot::Hostname);
        store.disable(WidgetSlot::Date);

        let placed = layout_placed_widgets(&store);

        // The stack closes up; hostname moves to the top.
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].placement, Placement::Slot(WidgetSlot::Hostname));
        assert_eq!(placed[0].offset, STACK_TOP_OFFSET);
    }

    #[test]
    fn test_servers_stack_after_slot_widgets() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Hostname);
        store.add_server(ServerEntry::new("web", "10.0.0.2", Some(80)));
        store.add_server(ServerEntry::new("nas", "10.0.0.3", None));

        let placed = layout_placed_widgets(&store);

        assert_eq!(placed.len(), 3);
        assert_eq!(placed[1].placement, Placement::Server(0));
        assert_eq!(placed[1].offset, STACK_TOP_OFFSET + WIDGET_HEIGHT);
        assert_eq!(placed[2].placement, Placement::Server(1));
        assert_eq!(placed[2].offset, STACK_TOP_OFFSET + 2.0 * WIDGET_HEIGHT);
    }

    #[test]
    fn test_disabled_server_keeps_its_document_index() {
        let store = store_from_json(json!({
            "servers": [
                {"name": "a", "host": "10.0.0.1"},
                {"name": "b", "host": "10.0.0.2", "enabled": false},
                {"name": "c", "host": "10.0.0.3"}
            ]
        }));

        let placed = layout_placed_widgets(&store);

        // "b" is skipped but "c" still carries index 2 into the document.
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[0].placement, Placement::Server(0));
        assert_eq!(placed[1].placement, Placement::Server(2));
        assert_eq!(placed[1].offset, STACK_TOP_OFFSET + WIDGET_HEIGHT);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let mut store = ConfigStore::default();
        store.enable(WidgetSlot::Time);
        store.add_server(ServerEntry::new("web", "10.0.0.2", Some(80)));

        assert_eq!(layout_placed_widgets(&store), layout_placed_widgets(&store));
    }

    #[test]
    fn test_full_stack_overflows_panel_height() {
        // All ten widgets enabled is taller than the 170px panel; the layout
        // reports honest offsets and leaves clipping to the renderer, exactly
        // like the device does.
        let mut store = ConfigStore::default();
        for slot in WidgetSlot::STACK_ORDER {
            store.enable(slot);
        }

        let placed = layout_placed_widgets(&store);

        assert_eq!(placed.len(), 10);
        let last = placed.last().unwrap();
        assert!(last.offset + last.height > PANEL_HEIGHT);
    }
}

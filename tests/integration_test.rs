use roomview::{
    room_colors, RoomId, ThemeName, ThemeRegistry, ViewChange, ViewConfig, ViewState,
    hex_to_color32, OPACITY_RANGE, SCALE_RANGE,
};
use anyhow::Result;
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_initial_state_matches_defaults() {
    let state = ViewState::new();
    assert_eq!(state.current_theme(), ThemeName::Dark);
    assert_eq!(state.current_theme().as_str(), "dark");
    assert!(state.is_interactive());
    assert!(state.show_labels());
    assert_eq!(state.opacity(), 1.0);
    assert_eq!(state.scale(), 1.0);
    assert_eq!(state.highlighted_room(), None);
}

#[test]
fn test_random_opacity_stays_in_range() {
    let mut rng = rand::thread_rng();
    let mut state = ViewState::new();

    for _ in 0..1000 {
        let value: f32 = rng.gen_range(-1000.0..1000.0);
        state.set_opacity(value);
        let opacity = state.opacity();
        assert!(opacity >= OPACITY_RANGE.0 && opacity <= OPACITY_RANGE.1, "{value} -> {opacity}");
        if (0.0..=1.0).contains(&value) {
            assert_eq!(opacity, value);
        }
    }
}

#[test]
fn test_random_scale_stays_in_range() {
    let mut rng = rand::thread_rng();
    let mut state = ViewState::new();

    for _ in 0..1000 {
        let value: f32 = rng.gen_range(-10.0..10.0);
        state.set_scale(value);
        let scale = state.scale();
        assert!(scale >= SCALE_RANGE.0 && scale <= SCALE_RANGE.1, "{value} -> {scale}");
    }
}

#[test]
fn test_light_theme_palette() {
    let mut state = ViewState::new();
    state.set_theme("light");

    let palette = state.current_theme_config();
    assert_eq!(palette.background, hex_to_color32("#f5f5f5"));
    assert_eq!(palette.fill, hex_to_color32("#ffffff"));
    assert_eq!(palette.stroke, hex_to_color32("#cccccc"));
    assert_eq!(palette.text, hex_to_color32("#333333"));
    assert_eq!(palette.highlight, hex_to_color32("#ff4444"));
    assert_eq!(palette.hover, hex_to_color32("#6fa5ff"));

    state.set_theme("not-a-theme");
    assert_eq!(state.current_theme(), ThemeName::Light);
    assert_eq!(state.current_theme_config(), palette);
}

#[test]
fn test_toggles_are_involutions() {
    let mut state = ViewState::new();
    let labels = state.show_labels();
    let interactive = state.is_interactive();

    state.toggle_labels();
    assert_ne!(state.show_labels(), labels);
    state.toggle_labels();
    assert_eq!(state.show_labels(), labels);

    state.toggle_interaction();
    state.toggle_interaction();
    assert_eq!(state.is_interactive(), interactive);
}

#[test]
fn test_highlight_then_clear() {
    let mut state = ViewState::new();
    state.set_highlighted_room(Some("room-7".into()));
    assert_eq!(state.highlighted_room().map(RoomId::as_str), Some("room-7"));

    state.clear_highlight();
    assert_eq!(state.highlighted_room(), None);
}

#[test]
fn test_renderer_follows_theme_changes() {
    let mut state = ViewState::new();
    let redraws = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&redraws);
    state.subscribe(move |change| {
        if let ViewChange::Theme(theme) = change {
            sink.borrow_mut().push(ThemeRegistry::global().palette(*theme).background);
        }
    });

    state.set_theme("highContrast");
    state.set_theme("bogus");
    state.set_theme("light");

    assert_eq!(
        *redraws.borrow(),
        vec![hex_to_color32("#000000"), hex_to_color32("#f5f5f5")]
    );

    let room = RoomId::from("room-7");
    state.set_highlighted_room(Some(room.clone()));
    assert_eq!(room_colors(&state, &room, false).fill, hex_to_color32("#ff4444"));
}

#[test]
fn test_config_to_snapshot() -> Result<()> {
    let config = ViewConfig::from_json(r#"{ "theme": "light", "opacity": 0.5, "interactive": false }"#)?;
    let state = ViewState::from_config(&config);

    let snapshot = serde_json::to_value(state.snapshot())?;
    assert_eq!(snapshot["currentTheme"], "light");
    assert_eq!(snapshot["opacity"], 0.5);
    assert_eq!(snapshot["isInteractive"], false);
    assert_eq!(snapshot["highlightedRoom"], serde_json::Value::Null);
    assert_eq!(snapshot["palette"]["background"], "#f5f5f5");
    Ok(())
}

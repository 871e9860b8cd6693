use research_core::game_mode::GameMode;

#[test]
fn game_mode_roundtrips_known_raw_values() {
    for raw in 0..=3u8 {
        assert_eq!(GameMode::from_raw(raw).raw(), raw);
    }
    assert_eq!(GameMode::from_raw(3), GameMode::Journey);
    assert_eq!(GameMode::from_raw(0), GameMode::Classic);
}

#[test]
fn game_mode_keeps_unknown_raw_value() {
    let mode = GameMode::from_raw(9);
    assert_eq!(mode, GameMode::Unknown(9));
    assert_eq!(mode.raw(), 9);
    assert_eq!(mode.to_string(), "Unknown (9)");
    assert_eq!(GameMode::Hardcore.to_string(), "Hardcore");
}

use pretty_assertions::assert_eq;
use sprout_theme::tokens::Shadow;
use sprout_theme::{
    ButtonToken, Color, ComponentFamily, ConfigStore, Locale, SeedField, ThemeConfig, ThemeMode,
    TokenValue,
};

fn customized_store() -> ConfigStore {
    let mut store = ConfigStore::new();
    store.apply_theme(ThemeMode::Dark);
    store.set_locale("en_US");
    store.set_primary_color(Color::from_hex(0x722ED1));
    store.mutate_seed(SeedField::Wireframe, true);
    store.mutate_seed(SeedField::LineType, "dashed");
    store
        .set_component_field(ComponentFamily::Button, "icon_gap", 10.0)
        .unwrap();
    store
        .set_component_field(ComponentFamily::Badge, "text_font_weight", 700)
        .unwrap();
    store
        .set_component_field(ComponentFamily::Tag, "default_bg", Color::from_hex_alpha(0x00FF00, 0.4))
        .unwrap();
    store
        .set_component_field(
            ComponentFamily::Button,
            "primary_shadow",
            Shadow::new(0.0, 4.0, 8.0, 0.0, Color::BLACK.with_alpha(0.2)),
        )
        .unwrap();
    store
}

#[test]
fn config_round_trips_through_toml() {
    let config = customized_store().to_config();
    let text = config.to_toml_string().unwrap();
    let parsed = ThemeConfig::from_toml_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn config_round_trips_through_json() {
    let config = customized_store().to_config();
    let text = config.to_json_string().unwrap();
    let parsed = ThemeConfig::from_json_str(&text).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn store_rebuilt_from_config_matches_source_store() {
    let source = customized_store();
    let restored = ConfigStore::from_config(&source.to_config());

    assert_eq!(restored.theme(), ThemeMode::Dark);
    assert_eq!(restored.locale(), &Locale::en_us());
    assert_eq!(restored.seed(), source.seed());
    assert_eq!(restored.current_token(), source.current_token());
    assert_eq!(restored.components(), source.components());
    assert_eq!(restored.current_component::<ButtonToken>().icon_gap, 10.0);
}

#[test]
fn hand_written_toml_is_accepted() {
    let config = ThemeConfig::from_toml_str(
        r##"
        theme = "light"
        locale = "zh_CN"

        [seed]
        color_primary = "#eb2f96"
        font_size = 16
        line_type = "dashed"

        [overrides.switch.track_height]
        number = 24

        [overrides.tooltip.z_index_popup]
        integer = 3000
        "##,
    )
    .unwrap();

    assert_eq!(config.locale.as_str(), "zh-CN");
    assert_eq!(config.seed.font_size, 16.0);

    let store = ConfigStore::from_config(&config);
    assert!(!store.is_dark());
    assert_eq!(
        store.component_field(ComponentFamily::Switch, "track_height"),
        Some(TokenValue::Number(24.0))
    );
    assert_eq!(
        store.component_field(ComponentFamily::Tooltip, "z_index_popup"),
        Some(TokenValue::Integer(3000))
    );
    assert_eq!(store.current_token().primary.base, Color::from_hex(0xEB2F96));
}

#[test]
fn stale_overrides_are_skipped_when_loading() {
    let config = ThemeConfig::from_json_str(
        r#"{
            "theme": "dark",
            "seed": { "border_radius": 2.0 },
            "overrides": {
                "carousel": { "speed": { "number": 2.0 } },
                "button": {
                    "icon_gap": { "number": 10.0 },
                    "retired_field": { "number": 1.0 }
                }
            }
        }"#,
    )
    .unwrap();

    let err = config.component_overrides().unwrap_err();
    assert_eq!(err.to_string(), "Unknown component family: carousel");

    let store = ConfigStore::from_config(&config);
    assert!(store.is_dark());
    assert_eq!(store.seed().border_radius, 2.0);
    assert_eq!(store.overrides().len(), 1);
    assert_eq!(store.current_component::<ButtonToken>().icon_gap, 10.0);
}

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use sprout_theme::tokens::scale;
use sprout_theme::{
    Color, ComponentFamily, ComponentToken, ConfigStore, SeedField, SeedToken, SwitchToken,
    TagToken, ThemeChange, ThemeMode, Token, TokenValue, TooltipToken, Z_INDEX_MAX,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn counting(store: &mut ConfigStore) -> Arc<AtomicUsize> {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    hits
}

#[test]
fn font_size_change_rescales_derived_sizes() {
    let mut store = ConfigStore::new();
    store.set_font_size(16.0);

    let token = store.current_token();
    assert_eq!(token.font_size, 16.0);
    assert_eq!(token.font_size_lg, 16.0 * scale::FONT_SIZE_LG_RATIO);
    assert_eq!(token.line_height, scale::line_height(16.0));
}

#[test]
fn reset_returns_to_default_derivation() {
    let mut store = ConfigStore::with_seed(SeedToken::default(), ThemeMode::Light);
    store.set_primary_color(Color::from_hex(0xEB2F96));
    store.set_border_radius(12.0);
    store.set_locale("en-US");
    store
        .set_component_field(ComponentFamily::Tag, "default_bg", Color::WHITE)
        .unwrap();

    store.reset();

    assert_eq!(store.theme(), ThemeMode::System);
    assert_eq!(store.seed(), &SeedToken::default());
    assert_eq!(store.locale().as_str(), "zh-CN");
    assert!(store.overrides().is_empty());
    assert_eq!(*store.current_token(), Token::derive(&SeedToken::default(), false));
    assert_eq!(*store.components(), ComponentToken::default());
}

#[test]
fn override_survives_regeneration_while_other_fields_follow_seed() {
    let mut store = ConfigStore::new();
    store
        .set_component_field(ComponentFamily::Switch, "track_height", 30.0)
        .unwrap();

    store.set_control_height(40.0);
    let switch = store.current_component::<SwitchToken>();
    assert_eq!(switch.track_height, 30.0);
    assert_eq!(switch.handle_size, 40.0 * 0.75 - 6.0);

    store.apply_theme(ThemeMode::Dark);
    let switch = store.current_component::<SwitchToken>();
    assert_eq!(switch.track_height, 30.0);
    assert_eq!(switch.handle_bg, store.current_token().color_bg_container);
}

#[test]
fn every_transition_notifies_exactly_once() {
    init_tracing();
    let mut store = ConfigStore::new();
    let hits = counting(&mut store);

    store.set_primary_color(Color::from_hex(0x13C2C2));
    store.mutate_seed(SeedField::SizeUnit, 5.0);
    store.regenerate_tokens();
    store.apply_theme(ThemeMode::Dark);
    store.toggle_theme();
    store.set_system_appearance(true);
    store
        .set_component_field(ComponentFamily::Badge, "dot_size", 10.0)
        .unwrap();
    store.clear_component_overrides(ComponentFamily::Badge);
    store.set_locale("en-US");
    store.replace_token(Token::default());
    store.reset();

    assert_eq!(hits.load(Ordering::SeqCst), 11);
    assert_eq!(store.revision(), 11);
}

#[test]
fn oversized_z_index_seed_is_clamped() {
    let mut store = ConfigStore::new();
    assert!(store.mutate_seed(SeedField::ZIndexPopupBase, i32::MAX));
    store.regenerate_tokens();

    assert_eq!(store.seed().z_index_popup_base, Z_INDEX_MAX);
    assert_eq!(
        store.current_component::<TooltipToken>().z_index_popup,
        Z_INDEX_MAX + 70
    );

    assert!(store.mutate_seed(SeedField::ZIndexPopupBase, 1.0e12));
    assert_eq!(store.current_token().z_index_popup_base, Z_INDEX_MAX);
}

#[test]
fn configure_seed_batches_writes() {
    init_tracing();
    let mut store = ConfigStore::new();
    let changes = Arc::new(Mutex::new(Vec::new()));
    let sink = changes.clone();
    store.subscribe(move |event| sink.lock().unwrap().push(event.change.clone()));

    store.configure_seed(|seed| {
        seed.color_primary = Color::from_hex(0x722ED1);
        seed.border_radius = 2.0;
        seed.font_size = -3.0;
    });

    let changes = changes.lock().unwrap();
    assert_eq!(changes.len(), 1);
    assert_eq!(
        changes[0],
        ThemeChange::Seed {
            fields: vec![
                SeedField::ColorPrimary,
                SeedField::FontSize,
                SeedField::BorderRadius
            ]
        }
    );
    // Normalized on the way in
    assert_eq!(store.seed().font_size, 1.0);
    assert_eq!(store.current_token().primary.base, Color::from_hex(0x722ED1));
}

#[test]
fn unsubscribed_listener_receives_nothing() {
    let mut store = ConfigStore::new();
    let kept = counting(&mut store);

    let dropped = Arc::new(AtomicUsize::new(0));
    let counter = dropped.clone();
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set_font_size(15.0);
    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set_font_size(16.0);

    assert_eq!(dropped.load(Ordering::SeqCst), 1);
    assert_eq!(kept.load(Ordering::SeqCst), 2);
    assert_eq!(store.subscriber_count(), 1);
}

#[test]
fn dark_and_light_containers_differ() {
    let mut store = ConfigStore::with_seed(SeedToken::default(), ThemeMode::Light);
    let light = store.current_token();
    store.apply_theme(ThemeMode::Dark);
    let dark = store.current_token();

    assert_ne!(light.color_bg_container, dark.color_bg_container);
    assert_eq!(light.primary.base, dark.primary.base);
    assert_ne!(
        store.current_component::<TagToken>().default_bg,
        TagToken::default().default_bg
    );
}

#[test]
fn listeners_see_the_published_snapshot() {
    let mut store = ConfigStore::new();
    let seen = Arc::new(Mutex::new(None));
    let sink = seen.clone();
    store.subscribe(move |event| {
        *sink.lock().unwrap() = Some(event.snapshot.clone());
    });

    store.set_component_field(ComponentFamily::Tag, "icon_size", 14.0).unwrap();

    let snapshot = seen.lock().unwrap().clone().unwrap();
    assert!(Arc::ptr_eq(&snapshot, &store.snapshot()));
    assert_eq!(
        snapshot.components.field(ComponentFamily::Tag, "icon_size"),
        Some(TokenValue::Number(14.0))
    );
}

#[test]
fn snapshots_cross_threads() {
    let mut store = ConfigStore::new();
    store.apply_theme(ThemeMode::Dark);
    let snapshot = store.snapshot();

    let handle = std::thread::spawn(move || snapshot.token.color_bg_container.to_hex());
    assert_eq!(handle.join().unwrap(), "#141414");
}

use sprout_core::{Color, ColorParseError, Hsv, Subscribers};

#[test]
fn hex_strings_survive_serde() {
    let colors = vec![
        Color::from_hex(0x1677FF),
        Color::from_hex_alpha(0x000000, 0.4),
        Color::WHITE,
    ];
    let json = serde_json::to_string(&colors).unwrap();
    assert_eq!(json, r##"["#1677ff","#00000066","#ffffff"]"##);

    let parsed: Vec<Color> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, colors);
}

#[test]
fn malformed_hex_is_rejected_by_serde() {
    let err = serde_json::from_str::<Color>(r##""#12345""##).unwrap_err();
    assert!(err.to_string().contains("length 5"), "{}", err);
    assert_eq!(Color::parse_hex("#zzz"), Err(ColorParseError::InvalidDigit('z')));
}

#[test]
fn hsv_round_trip_for_primaries() {
    for hex in [0xFF0000, 0x00FF00, 0x0000FF, 0x1677FF, 0x808080] {
        let color = Color::from_hex(hex);
        let back = Hsv::from(color).to_color();
        assert_eq!(back.to_hex(), color.to_hex(), "hsv round trip for {:06x}", hex);
    }
}

#[test]
fn mixing_stays_between_endpoints() {
    let a = Color::from_hex(0x141414);
    let b = Color::from_hex(0x1677FF);
    for step in 0..=10 {
        let t = step as f32 / 10.0;
        let mixed = a.mix(b, t);
        assert!(mixed.is_valid());
        assert!(mixed.luma() >= a.luma().min(b.luma()) - 1e-6);
        assert!(mixed.luma() <= a.luma().max(b.luma()) + 1e-6);
    }
}

#[test]
fn subscribers_publish_colors() {
    use std::sync::{Arc, Mutex};

    let mut subs: Subscribers<Color> = Subscribers::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let id = subs.subscribe(move |color: &Color| sink.lock().unwrap().push(color.to_hex()));

    subs.notify(&Color::BLACK);
    subs.unsubscribe(id);
    subs.notify(&Color::WHITE);

    assert_eq!(*seen.lock().unwrap(), vec!["#000000".to_string()]);
}

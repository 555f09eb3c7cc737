use super::*;

#[test]
fn pure_primaries_match_exactly() {
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).to_hex(), "#ff0000");
    assert_eq!(Hsl::new(120.0, 100.0, 50.0).to_hex(), "#00ff00");
    assert_eq!(Hsl::new(240.0, 100.0, 50.0).to_hex(), "#0000ff");
}

#[test]
fn greys_and_extremes() {
    assert_eq!(Hsl::new(200.0, 0.0, 50.0).to_hex(), "#808080");
    assert_eq!(Hsl::new(0.0, 100.0, 0.0).to_hex(), "#000000");
    assert_eq!(Hsl::new(0.0, 100.0, 100.0).to_hex(), "#ffffff");
}

#[test]
fn mid_band_color_rounds_to_nearest() {
    // l = .45, a = .27 -> r = .72 * 255 = 183.6, g = b = .18 * 255 = 45.9
    assert_eq!(Hsl::new(0.0, 60.0, 45.0).to_rgb8(), Rgb8::new(184, 46, 46));
}

#[test]
fn lighten_caps_at_one_hundred() {
    let c = Hsl::new(10.0, 50.0, 95.0).lighten(12.0);
    assert_eq!(c.l, 100.0);
    assert_eq!(Hsl::new(0.0, 100.0, 50.0).lighten(12.0).to_hex(), "#ff3d3d");
}

#[test]
fn hex_parse_accepts_long_and_short_forms() {
    assert_eq!(Rgb8::from_hex("#FF8800").unwrap(), Rgb8::new(255, 136, 0));
    assert_eq!(Rgb8::from_hex("f80").unwrap(), Rgb8::new(255, 136, 0));
    assert!(Rgb8::from_hex("#12345").is_err());
    assert!(Rgb8::from_hex("#zzzzzz").is_err());
}

#[test]
fn hex_parse_rejects_signs() {
    assert!(Rgb8::from_hex("#+f+f+f").is_err());
    assert!(Rgb8::from_hex("+ff").is_err());
    assert!(serde_json::from_str::<Rgb8>(r##""#-1-1-1""##).is_err());
}

#[test]
fn rgb_to_hsl_recovers_known_triples() {
    let hsl = Rgb8::new(255, 0, 0).to_hsl();
    assert_eq!((hsl.h, hsl.s, hsl.l), (0.0, 100.0, 50.0));

    let hsl = Rgb8::new(0, 0, 255).to_hsl();
    assert!((hsl.h - 240.0).abs() < 1e-9);

    let grey = Rgb8::new(136, 136, 136).to_hsl();
    assert_eq!(grey.s, 0.0);
}

#[test]
fn hex_to_hsl_to_hex_is_stable() {
    for hex in ["#b82e2e", "#3fa7c4", "#e2e8f0", "#123456"] {
        let c = Rgb8::from_hex(hex).unwrap();
        assert_eq!(c.to_hsl().to_hex(), hex);
    }
}

#[test]
fn serde_uses_hex_strings() {
    let json = serde_json::to_string(&Rgb8::new(1, 2, 3)).unwrap();
    assert_eq!(json, "\"#010203\"");
    let back: Rgb8 = serde_json::from_str("\"#0a0b0c\"").unwrap();
    assert_eq!(back, Rgb8::new(10, 11, 12));
    assert!(serde_json::from_str::<Rgb8>("\"nope\"").is_err());
}

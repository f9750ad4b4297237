use super::*;

#[test]
fn test_color_hex_roundtrip() {
    let c = Color::new(0x12, 0xAB, 0xFF);
    assert_eq!(c.to_hex(), "#12ABFF");
    assert_eq!(Color::from_hex("#12abff"), Some(c));
    assert_eq!(Color::from_hex("12ABFF"), Some(c));
}

#[test]
fn test_color_rejects_bad_hex() {
    assert_eq!(Color::from_hex("#12ABF"), None);
    assert_eq!(Color::from_hex("#GG0000"), None);
    assert_eq!(Color::from_hex("#+F+F+F"), None);
    assert!("null".parse::<Color>().is_err());
}

#[test]
fn test_color_rgb15() {
    let c = Color::new(255, 8, 7);
    assert_eq!(c.rgb15(), (31, 1, 0));
    assert_eq!(Color::from_rgb15(31, 1, 0), Color::new(255, 8, 0));
}

#[test]
fn test_color_serde_as_hex() {
    let json = serde_json::to_string(&Some(Color::new(255, 0, 0))).unwrap();
    assert_eq!(json, "\"#FF0000\"");
    let empty: Option<Color> = serde_json::from_str("null").unwrap();
    assert_eq!(empty, None);
}

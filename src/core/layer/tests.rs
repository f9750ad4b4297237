use super::*;

#[test]
fn test_layer_init() {
    let l = Layer::new(3, "Ink");
    assert_eq!(l.id, 3);
    assert!(l.visible);
}

#[test]
fn test_layer_default_name() {
    rust_i18n::set_locale("en");
    assert_eq!(Layer::default_name(2), "Layer 2");
}

#[test]
fn test_layer_visible_defaults_on_load() {
    let l: Layer = serde_json::from_str(r#"{"id":1,"name":"Layer 1"}"#).unwrap();
    assert!(l.visible);
}

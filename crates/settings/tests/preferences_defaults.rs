use plainpad_core::WrapMode;
use plainpad_settings::{FileFilter, Preferences};

#[test]
fn defaults_match_the_stock_editor() {
    let prefs = Preferences::default();
    assert_eq!(prefs.window.title, "Simple Text Editor");
    assert_eq!(prefs.window.width, 1200.0);
    assert_eq!(prefs.window.height, 500.0);
    assert_eq!(prefs.editor.font_size, 13.0);
    assert_eq!(prefs.editor.wrap, WrapMode::Word);
    assert_eq!(prefs.dialogs.default_extension, "txt");
    assert_eq!(prefs.about.heading, "About Editor");
    assert_eq!(
        prefs.dialogs.filters[0],
        FileFilter {
            name: "Text Files".into(),
            extensions: vec!["txt".into()],
        }
    );
}

#[test]
fn empty_json_yields_defaults() {
    let prefs = Preferences::from_json_str("{}").expect("parse");
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn partial_json_overrides_only_given_fields() {
    let prefs = Preferences::from_json_str(
        r#"{ "editor": { "wrap": "none" }, "window": { "title": "Scratch" } }"#,
    )
    .expect("parse");
    assert_eq!(prefs.editor.wrap, WrapMode::None);
    assert_eq!(prefs.editor.font_size, 13.0);
    assert_eq!(prefs.window.title, "Scratch");
    assert_eq!(prefs.window.width, 1200.0);
}

#[test]
fn out_of_range_values_are_sanitized() {
    let prefs = Preferences::from_json_str(
        r#"{
            "version": 0,
            "window": { "title": "  ", "width": 10.0, "height": 900.0 },
            "editor": { "font_size": 400.0 },
            "dialogs": { "filters": [{ "name": "Broken", "extensions": [] }], "default_extension": ".md" }
        }"#,
    )
    .expect("parse");
    assert_eq!(prefs.version, 1);
    assert_eq!(prefs.window.title, "Simple Text Editor");
    assert_eq!(prefs.window.width, 1200.0);
    assert_eq!(prefs.window.height, 900.0);
    assert_eq!(prefs.editor.font_size, 72.0);
    assert_eq!(prefs.dialogs.filters.len(), 2);
    assert_eq!(prefs.dialogs.default_extension, "md");
}

#[test]
fn malformed_json_is_reported() {
    assert!(Preferences::from_json_str("{ not json").is_err());
}

#[test]
fn serialized_defaults_round_trip() {
    let json = serde_json::to_string(&Preferences::default()).expect("serialize");
    assert_eq!(
        Preferences::from_json_str(&json).expect("parse"),
        Preferences::default()
    );
}

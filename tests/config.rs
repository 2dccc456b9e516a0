//! Loading breakpoints from configuration files.

#![cfg(feature = "serde")]

use floem_breakpoints::{BreakpointConfig, ScreenType};

#[test]
fn parses_both_bounds() {
    let config: BreakpointConfig =
        serde_json::from_str(r#"{ "mobile_max": 599, "tablet_max": 1023.5 }"#).unwrap();
    assert_eq!(config, BreakpointConfig::new(599.0, 1023.5).unwrap());
}

#[test]
fn missing_bounds_use_defaults() {
    let config: BreakpointConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, BreakpointConfig::DEFAULT);

    let config: BreakpointConfig = serde_json::from_str(r#"{ "tablet_max": 1279 }"#).unwrap();
    assert_eq!(config.mobile_max(), 649.0);
    assert_eq!(config.tablet_max(), 1279.0);
}

#[test]
fn unordered_bounds_fail_to_load() {
    let err = serde_json::from_str::<BreakpointConfig>(r#"{ "mobile_max": 1200 }"#).unwrap_err();
    assert!(
        err.to_string()
            .contains("mobile max 1200 must be less than tablet max 1099"),
        "{err}"
    );
}

#[test]
fn unknown_fields_are_rejected() {
    assert!(serde_json::from_str::<BreakpointConfig>(r#"{ "desktop_max": 1600 }"#).is_err());
}

#[test]
fn written_config_loads_back() {
    let config = BreakpointConfig::new(480.0, 960.0).unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(json, r#"{"mobile_max":480.0,"tablet_max":960.0}"#);
    assert_eq!(serde_json::from_str::<BreakpointConfig>(&json).unwrap(), config);
}

#[test]
fn screen_types_are_lowercase() {
    assert_eq!(serde_json::to_string(&ScreenType::Tablet).unwrap(), r#""tablet""#);
    let parsed: Vec<ScreenType> = serde_json::from_str(r#"["mobile", "desktop"]"#).unwrap();
    assert_eq!(parsed, vec![ScreenType::Mobile, ScreenType::Desktop]);
}

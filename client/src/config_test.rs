use super::*;

#[test]
fn defaults_use_api_prefix_and_enable_notifications() {
    let config = ClientConfig::default();
    assert_eq!(config.api_base, "/api/");
    assert!(config.notifications_enabled);
}

#[test]
fn blank_api_base_falls_back_to_default() {
    let config = ClientConfig::from_values(Some("   "), None);
    assert_eq!(config.api_base, DEFAULT_API_BASE);
}

#[test]
fn api_base_is_trimmed() {
    let config = ClientConfig::from_values(Some(" https://api.example.com/v1/ "), None);
    assert_eq!(config.api_base, "https://api.example.com/v1/");
}

#[test]
fn parse_flag_recognizes_disable_spellings() {
    for raw in ["0", "false", "FALSE", "no", "off", " Off "] {
        assert!(!parse_flag(Some(raw), true), "{raw} should disable");
    }
}

#[test]
fn parse_flag_recognizes_enable_spellings() {
    for raw in ["1", "true", "Yes", "on"] {
        assert!(parse_flag(Some(raw), false), "{raw} should enable");
    }
}

#[test]
fn parse_flag_keeps_default_for_unknown_values() {
    assert!(parse_flag(Some("maybe"), true));
    assert!(!parse_flag(Some("maybe"), false));
    assert!(!parse_flag(None, false));
}

#[test]
fn notifications_can_be_disabled() {
    let config = ClientConfig::from_values(None, Some("false"));
    assert!(!config.notifications_enabled);
}

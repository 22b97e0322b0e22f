use super::*;

#[test]
fn default_config_uses_five_second_timeouts() {
    let config = UiConfig::default();
    assert_eq!(config.toast_timeout_ms, 5000);
    assert_eq!(config.alert_timeout_ms, 5000);
    assert_eq!(config.api_base, "");
    assert_eq!(config.bootstrap, BootstrapConfig::default());
    assert!(config.translations.is_empty());
}

#[test]
fn from_json_empty_object_yields_defaults() {
    let config = UiConfig::from_json("{}").unwrap();
    assert_eq!(config, UiConfig::default());
}

#[test]
fn from_json_overrides_only_given_fields() {
    let config = UiConfig::from_json(r#"{"toast_timeout_ms": 1500, "bootstrap": {"delete_confirm": false}}"#).unwrap();
    assert_eq!(config.toast_timeout_ms, 1500);
    assert_eq!(config.alert_timeout_ms, 5000);
    assert!(!config.bootstrap.delete_confirm);
    assert!(config.bootstrap.copy_buttons);
    assert!(config.bootstrap.auto_hide_alerts);
}

#[test]
fn from_json_reads_translations() {
    let config = UiConfig::from_json(r#"{"translations": {"ui.copied_to_clipboard": "Kopiert"}}"#).unwrap();
    assert_eq!(config.translations.get("ui.copied_to_clipboard").map(String::as_str), Some("Kopiert"));
}

#[test]
fn from_json_trims_trailing_slash_from_api_base() {
    let config = UiConfig::from_json(r#"{"api_base": "/admin/"}"#).unwrap();
    assert_eq!(config.api_base, "/admin");
}

#[test]
fn admin_api_prefixes_endpoints_with_api_base() {
    let config = UiConfig::from_json(r#"{"api_base": "/admin/"}"#).unwrap();
    let api = config.admin_api();
    assert_eq!(api.storage_usage_url(), "/admin/api/storage-usage");
    assert_eq!(api.service_accounts_url("alice"), "/admin/api/service-accounts?user=alice");
}

#[test]
fn admin_api_defaults_to_origin_root() {
    assert_eq!(UiConfig::default().admin_api().policies_url(), "/api/policies");
}

#[test]
fn from_json_rejects_malformed_input() {
    let err = UiConfig::from_json("{not json").unwrap_err();
    assert!(err.to_string().starts_with("config parse failed"));
}

#[test]
fn from_json_rejects_mistyped_fields() {
    assert!(UiConfig::from_json(r#"{"toast_timeout_ms": "soon"}"#).is_err());
}

#[cfg(not(feature = "csr"))]
#[test]
fn load_outside_browser_returns_defaults() {
    assert_eq!(UiConfig::load(), UiConfig::default());
}

use super::*;

#[test]
fn storage_usage_decodes_server_payload() {
    let raw = r#"{
        "total_size": 1536,
        "total_objects": 12,
        "total_buckets": 3,
        "buckets_with_stats": 2,
        "formatted_size": "1.5 KB"
    }"#;
    let usage: StorageUsage = serde_json::from_str(raw).unwrap();
    assert_eq!(usage.total_objects, 12);
    assert_eq!(usage.display_size(), "1.5 KB");
    assert!(usage.is_partial());
}

#[test]
fn storage_usage_rejects_missing_fields() {
    let raw = r#"{"total_size": 10}"#;
    assert!(serde_json::from_str::<StorageUsage>(raw).is_err());
}

#[test]
fn storage_usage_rejects_negative_size() {
    let raw = r#"{"total_size": -1, "total_objects": 0, "total_buckets": 0, "buckets_with_stats": 0, "formatted_size": "N/A"}"#;
    assert!(serde_json::from_str::<StorageUsage>(raw).is_err());
}

#[test]
fn policy_list_null_decodes_to_empty() {
    let list: PolicyList = serde_json::from_str(r#"{"policies": null}"#).unwrap();
    assert!(list.policies.is_empty());
}

#[test]
fn policy_list_requires_field() {
    assert!(serde_json::from_str::<PolicyList>("{}").is_err());
}

#[test]
fn service_account_list_decodes_listing_shape() {
    let raw = r#"{"service_accounts": [{
        "access_key": "SA1",
        "status": "on",
        "name": "backup",
        "description": "",
        "implied_policy": true,
        "parent_user": "alice",
        "expiration": null
    }]}"#;
    let list: ServiceAccountList = serde_json::from_str(raw).unwrap();
    assert_eq!(list.service_accounts.len(), 1);
    let account = &list.service_accounts[0];
    assert_eq!(account.access_key, "SA1");
    assert!(account.implied_policy);
    assert!(account.secret_key.is_none());
    assert!(account.is_enabled());
}

#[test]
fn service_account_envelope_decodes_create_shape() {
    let raw = r#"{"service_account": {
        "access_key": "SA2",
        "secret_key": "s3cr3t-value",
        "name": "ci",
        "description": "pipeline",
        "parent_user": "bob",
        "status": "enabled"
    }}"#;
    let env: ServiceAccountEnvelope = serde_json::from_str(raw).unwrap();
    assert_eq!(env.service_account.secret_key.as_deref(), Some("s3cr3t-value"));
    assert!(env.service_account.is_enabled());
}

#[test]
fn service_account_info_decodes_without_access_key() {
    let raw = r#"{"service_account":{"status":"on","name":"ci","description":"","parent_user":"alice","implied_policy":true}}"#;
    let env: ServiceAccountInfoEnvelope = serde_json::from_str(raw).unwrap();
    let account = env.service_account.into_account("SA9");
    assert_eq!(account.access_key, "SA9");
    assert_eq!(account.parent_user, "alice");
    assert_eq!(account.name, "ci");
    assert!(account.implied_policy);
    assert!(account.secret_key.is_none());
    assert!(account.is_enabled());
}

#[test]
fn service_account_off_is_disabled() {
    let raw = r#"{"access_key": "SA3", "parent_user": "bob", "status": "off"}"#;
    let account: ServiceAccount = serde_json::from_str(raw).unwrap();
    assert!(!account.is_enabled());
}

#[test]
fn create_request_serializes_snake_case_fields() {
    let req = CreateServiceAccountRequest {
        target_user: "alice".to_owned(),
        name: "backup".to_owned(),
        description: "nightly".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value, serde_json::json!({ "target_user": "alice", "name": "backup", "description": "nightly" }));
}

#[test]
fn metrics_response_decodes() {
    let raw = r#"{"server_info": {"mode": "online"}, "online": true}"#;
    let metrics: MetricsResponse = serde_json::from_str(raw).unwrap();
    assert!(metrics.online);
    assert_eq!(metrics.server_info["mode"], "online");
}

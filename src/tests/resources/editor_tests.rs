use crate::{AlertKind, DnsFormState, tests::create_test_client};
use std::time::Duration;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

fn settings_with_forwarding(router_ip: &str, domain: &str) -> serde_json::Value {
    serde_json::json!({
        "upstream_dns": ["8.8.8.8"],
        "conditional_forwarding": {
            "enabled": true,
            "router_ip": router_ip,
            "domain": domain
        },
        "options": {
            "fqdn_required": false,
            "bogus_priv": false,
            "dnssec": false,
            "listening_type": "single"
        }
    })
}

async fn mount_settings(mock_server: &MockServer, body: serde_json::Value, delay: Duration) {
    Mock::given(method("GET"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(body)
                .set_delay(delay),
        )
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_load_defaults_empty_domain_to_lan() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_settings(&mock_server, settings_with_forwarding("", ""), Duration::ZERO).await;

    let mut editor = client.dns_settings_editor();
    editor.mount().await.unwrap();

    let state = editor.state();
    assert!(state.settings.conditional_forwarding.enabled);
    assert_eq!(state.settings.conditional_forwarding.domain, "lan");
    assert_eq!(state.settings.conditional_forwarding.router_ip, "");
    assert!(!state.is_router_ip_valid());
    assert!(state.is_domain_valid());
    assert!(!state.can_submit());
}

#[tokio::test]
async fn test_save_rejection_shows_translated_error() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_settings(
        &mock_server,
        settings_with_forwarding("192.168.1.1", "lan"),
        Duration::ZERO,
    )
    .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {"key": "err", "message": "", "data": {}}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut editor = client.dns_settings_editor();
    editor.mount().await.unwrap();
    editor.submit().await;

    let state = editor.state();
    assert_eq!(state.alert.message, "API Error: err");
    assert_eq!(state.alert.kind, AlertKind::Danger);
    assert!(state.alert.visible);
    assert!(!state.processing);
}

#[tokio::test]
async fn test_edit_and_save_round() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_settings(
        &mock_server,
        settings_with_forwarding("192.168.1.1", "home"),
        Duration::ZERO,
    )
    .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .and(body_partial_json(serde_json::json!({
            "upstream_dns": ["1.1.1.1"],
            "conditional_forwarding": {"enabled": false},
            "options": {"dnssec": true}
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "success"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut editor = client.dns_settings_editor();
    editor.mount().await.unwrap();

    editor.add_upstream("1.1.1.1");
    editor.remove_upstream("8.8.8.8");
    let forwarding = editor
        .state()
        .settings
        .conditional_forwarding
        .clone()
        .with_enabled(false)
        .with_router_ip("garbage");
    editor.update_conditional_forwarding(forwarding);
    let options = editor.state().settings.options.clone().with_dnssec(true);
    editor.update_options(options);

    assert!(editor.state().can_submit());
    editor.submit().await;

    let state = editor.state();
    assert_eq!(state.alert.kind, AlertKind::Success);
    assert!(!state.processing);
}

#[tokio::test]
async fn test_unmount_during_load_discards_result() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_settings(
        &mock_server,
        settings_with_forwarding("192.168.1.1", "home"),
        Duration::from_secs(5),
    )
    .await;

    let mut editor = client.dns_settings_editor();
    let token = editor.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    let result = tokio::time::timeout(Duration::from_secs(2), editor.mount())
        .await
        .expect("unmount should abandon the load");
    assert!(result.is_ok());
    assert!(editor.is_unmounted());
    assert_eq!(editor.state(), &DnsFormState::default());
}

#[tokio::test]
async fn test_unmount_during_save_discards_result() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);
    mount_settings(
        &mock_server,
        settings_with_forwarding("192.168.1.1", "home"),
        Duration::ZERO,
    )
    .await;

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"status": "success"}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let mut editor = client.dns_settings_editor();
    editor.mount().await.unwrap();

    let token = editor.cancellation_token();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        token.cancel();
    });

    tokio::time::timeout(Duration::from_secs(2), editor.submit())
        .await
        .expect("unmount should abandon the save");

    let state = editor.state();
    assert!(state.processing);
    assert_eq!(state.alert.kind, AlertKind::Info);
    assert_eq!(state.alert.message, "Processing...");
}

#[tokio::test]
async fn test_load_failure_is_returned() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(500).set_body_string("FTL offline"))
        .mount(&mock_server)
        .await;

    let mut editor = client.dns_settings_editor();
    assert!(editor.mount().await.is_err());
    assert_eq!(editor.state(), &DnsFormState::default());
}

#[tokio::test]
async fn test_connection_failure_shows_raw_message() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let mut editor = client.dns_settings_editor();
    editor.submit().await;

    let state = editor.state();
    assert_eq!(state.alert.kind, AlertKind::Danger);
    assert!(state.alert.message.contains("Service Unavailable"));
    assert!(!state.processing);
}

use crate::{ListeningType, PiholeClient, PiholeError, tests::create_test_client};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn dns_settings_json() -> serde_json::Value {
    serde_json::json!({
        "upstream_dns": ["8.8.8.8", "8.8.4.4", "2001:4860:4860::8888"],
        "conditional_forwarding": {
            "enabled": true,
            "router_ip": "192.168.1.1",
            "domain": "home"
        },
        "options": {
            "fqdn_required": true,
            "bogus_priv": true,
            "dnssec": false,
            "listening_type": "all"
        }
    })
}

#[tokio::test]
async fn test_dns_settings_success() {
    let mock_server = MockServer::start().await;
    let client: PiholeClient = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(dns_settings_json()))
        .mount(&mock_server)
        .await;

    let settings = client.dns_settings().await.unwrap();
    assert_eq!(
        settings.upstream_dns,
        vec!["8.8.8.8", "8.8.4.4", "2001:4860:4860::8888"]
    );
    assert!(settings.conditional_forwarding.enabled);
    assert_eq!(settings.conditional_forwarding.router_ip, "192.168.1.1");
    assert_eq!(settings.conditional_forwarding.domain, "home");
    assert!(settings.options.fqdn_required);
    assert!(settings.options.bogus_priv);
    assert!(!settings.options.dnssec);
    assert_eq!(settings.options.listening_type, ListeningType::All);
}

#[tokio::test]
async fn test_dns_settings_malformed_payload() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "upstream_dns": "8.8.8.8"
        })))
        .mount(&mock_server)
        .await;

    let result = client.dns_settings().await;
    assert!(matches!(result, Err(PiholeError::Connection(_))));
}

#[tokio::test]
async fn test_update_dns_settings_sends_wire_schema() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .and(body_json(dns_settings_json()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "success"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let settings = serde_json::from_value(dns_settings_json()).unwrap();
    let response = client.update_dns_settings(&settings).await.unwrap();
    assert_eq!(response.status, "success");
}

#[tokio::test]
async fn test_update_dns_settings_rejected() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("PUT"))
        .and(path("/admin/api/settings/dns"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "error": {
                "key": "invalid_upstream",
                "message": "Invalid upstream DNS server",
                "data": {"upstream": "not-an-ip"}
            }
        })))
        .mount(&mock_server)
        .await;

    let result = client.update_dns_settings(&Default::default()).await;
    match result {
        Err(PiholeError::Api { status, key, data, .. }) => {
            assert_eq!(status, 400);
            assert_eq!(key, "invalid_upstream");
            assert_eq!(data["upstream"], "not-an-ip");
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

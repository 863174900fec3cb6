use crate::tests::create_test_client;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

#[tokio::test]
async fn test_versions_success() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/admin/api/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api": {"branch": "master", "hash": "a1b2c3d", "tag": "v1.0"},
            "core": {"branch": "master", "hash": "e4f5a6b", "tag": "v5.0"},
            "ftl": {"branch": "development", "hash": "c7d8e9f", "tag": ""},
            "web": {"branch": "master", "hash": "0a1b2c3", "tag": "v5.0"}
        })))
        .mount(&mock_server)
        .await;

    let versions = client.versions().await.unwrap();
    assert_eq!(versions.api.display(), "v1.0");
    assert_eq!(versions.core.tag, "v5.0");
    assert!(versions.ftl.is_development());
    assert_eq!(versions.ftl.display(), "development-c7d8e9f");
    assert_eq!(versions.web.hash, "0a1b2c3");
}

#[tokio::test]
async fn test_versions_missing_component() {
    let mock_server = MockServer::start().await;
    let client = create_test_client(&mock_server);

    Mock::given(method("GET"))
        .and(path("/admin/api/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "api": {"branch": "master", "hash": "a1b2c3d", "tag": "v1.0"}
        })))
        .mount(&mock_server)
        .await;

    assert!(client.versions().await.is_err());
}

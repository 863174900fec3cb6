
use crate::PiholeClient;
use wiremock::MockServer;

/// A client pointed at the mock server through the public builder.
pub(crate) fn create_test_client(mock_server: &MockServer) -> PiholeClient {
    PiholeClient::builder()
        .host("127.0.0.1")
        .unwrap()
        .port(mock_server.address().port())
        .unwrap()
        .build()
        .unwrap()
}

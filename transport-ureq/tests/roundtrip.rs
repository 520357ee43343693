//! `UreqTransport` against the live mock server.

use std::time::Duration;

use hypixel_core::{ApiError, HypixelApi, ResourceType, TransportError, UNKNOWN_CAUSE};
use hypixel_ureq::{connect_to, UreqConfig, UreqTransport};
use mock_server::{DEFAULT_API_KEY, HYPIXEL};
use uuid::Uuid;

/// Starts the mock server on a random port and returns its base URL.
fn start_server() -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener, DEFAULT_API_KEY).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

fn api(base_url: &str, api_key: Uuid) -> HypixelApi<UreqTransport> {
    connect_to(base_url, UreqConfig::new(api_key))
}

#[tokio::test(flavor = "multi_thread")]
async fn authenticated_and_anonymous_calls() {
    let base_url = start_server();
    let api = api(&base_url, DEFAULT_API_KEY);

    let reply = api.get_player_by_uuid(HYPIXEL).await.unwrap();
    assert_eq!(reply.player.unwrap().display_name.as_deref(), Some("hypixel"));

    let collections = api.get_resource(ResourceType::SkyBlockCollections).await.unwrap();
    assert_eq!(collections.get("version").unwrap(), "0.11.22");

    // Only the player lookup and this call carried the key.
    let key = api.get_key().await.unwrap();
    assert_eq!(key.record.total_queries, 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn error_statuses_are_returned_as_data() {
    let base_url = start_server();

    let err = api(&base_url, Uuid::nil()).get_counts().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 403, .. }));
    assert_eq!(err.cause(), Some("Invalid API key"));

    let err = api(&base_url, DEFAULT_API_KEY)
        .get_leaderboards()
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, ref cause } if cause == UNKNOWN_CAUSE));
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_server_is_a_transport_error() {
    // Bind then drop to get a port nothing listens on.
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let config = UreqConfig::new(DEFAULT_API_KEY).with_timeout(Some(Duration::from_secs(2)));
    let api = connect_to(&format!("http://{addr}"), config);

    let err = api.get_key().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Request(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn shutdown_rejects_new_calls() {
    let base_url = start_server();
    let api = api(&base_url, DEFAULT_API_KEY);
    api.get_counts().await.unwrap();

    api.shutdown();
    assert!(api.transport().is_shut_down());
    let err = api.get_counts().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Shutdown)));

    // A second shutdown is a no-op.
    api.shutdown();
}

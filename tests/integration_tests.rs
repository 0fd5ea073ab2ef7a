use stats_api::api::serve_on;
use stats_api::client::{BasicClient, StatsClient};
use stats_api::config::ServerConfig;
use stats_api::parser::parse_numbers;
use stats_api::stats::compute_stats;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// Starts the service on an ephemeral port; dropping the sender stops it.
async fn spawn_server(config: ServerConfig) -> (String, oneshot::Sender<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        serve_on(listener, config, async move {
            let _ = rx.await;
        })
        .await
        .unwrap();
    });

    (base_url, tx)
}

#[test]
fn test_text_to_stats_pipeline() {
    let numbers = parse_numbers("7 7 7\n7,7").expect("Failed to parse numbers");
    let stats = compute_stats(&numbers);

    assert_eq!(stats.count, 5);
    assert_eq!(stats.mode, Some(vec![7.0]));
    assert_eq!(stats.std_dev, Some(0.0));
}

#[tokio::test]
async fn test_full_stats_over_http() {
    let (base_url, _shutdown) = spawn_server(ServerConfig::default()).await;
    let client = StatsClient::new(BasicClient::new(), &base_url);

    let numbers = [-10.0, -5.0, 0.0, 5.0, 10.0];
    let remote = client.stats(&numbers).await.unwrap();

    assert_eq!(remote, compute_stats(&numbers));
    assert_eq!(remote.mean, Some(0.0));
    assert_eq!(remote.min, Some(-10.0));
}

#[tokio::test]
async fn test_empty_and_basic_over_http() {
    let (base_url, _shutdown) = spawn_server(ServerConfig::default()).await;
    let client = StatsClient::new(BasicClient::new(), &base_url);

    let empty = client.stats(&[]).await.unwrap();
    assert_eq!(empty.count, 0);
    assert!(empty.mean.is_none());

    let basic = client.basic_stats(&[1.0e6, 2.0e6, 3.0e6]).await.unwrap();
    assert_eq!(basic.mean, Some(2.0e6));
    assert_eq!(basic.max, Some(3.0e6));
    assert_eq!(basic.min, Some(1.0e6));
}

#[tokio::test]
async fn test_health_over_http() {
    let (base_url, _shutdown) = spawn_server(ServerConfig::default()).await;
    let client = StatsClient::new(BasicClient::new(), &base_url);

    let health = client.health().await.unwrap();
    assert_eq!(health["status"], "healthy");
}

#[tokio::test]
async fn test_rejection_surfaces_as_client_error() {
    let config = ServerConfig {
        max_numbers: 2,
        ..ServerConfig::default()
    };
    let (base_url, _shutdown) = spawn_server(config).await;
    let client = StatsClient::new(BasicClient::new(), &base_url);

    let err = client.stats(&[1.0, 2.0, 3.0]).await.unwrap_err();
    assert!(err.to_string().contains("422"));
}

#[tokio::test]
async fn test_concurrent_requests_are_independent() {
    let (base_url, _shutdown) = spawn_server(ServerConfig::default()).await;

    let mut tasks = vec![];
    for n in 1..=16 {
        let base_url = base_url.clone();
        tasks.push(tokio::spawn(async move {
            let client = StatsClient::new(BasicClient::new(), &base_url);
            let numbers: Vec<f64> = (1..=n).map(f64::from).collect();
            (n, client.stats(&numbers).await.unwrap())
        }));
    }

    for task in tasks {
        let (n, stats) = task.await.unwrap();
        assert_eq!(stats.count, n as usize);
        assert_eq!(stats.max, Some(f64::from(n)));
    }
}

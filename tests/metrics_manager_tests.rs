use clinic_backend::services::metrics_manager::MetricsManager;

#[tokio::test]
async fn test_record_and_snapshot() {
    let metrics = MetricsManager::new();
    metrics.record_topic("greeting").await;
    metrics.record_topic("greeting").await;
    metrics.record_topic("cost").await;

    let data = metrics.get_metrics().await;
    assert_eq!(data.topic_usage.get("greeting"), Some(&2));
    assert_eq!(data.topic_usage.get("cost"), Some(&1));
    assert_eq!(data.topic_usage.get("emergency"), None);
}

#[tokio::test]
async fn test_snapshot_is_a_copy() {
    let metrics = MetricsManager::new();
    metrics.record_topic("default").await;

    let snapshot = metrics.get_metrics().await;
    metrics.record_topic("default").await;

    // The earlier snapshot is unaffected by later recordings.
    assert_eq!(snapshot.topic_usage.get("default"), Some(&1));
    assert_eq!(
        metrics.get_metrics().await.topic_usage.get("default"),
        Some(&2)
    );
}

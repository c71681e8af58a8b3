use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default, Clone, Serialize)]
pub struct MetricsData {
    pub topic_usage: HashMap<String, u64>,
}

#[derive(Debug, Clone)]
pub struct MetricsManager {
    inner: Arc<RwLock<MetricsData>>,
}

impl Default for MetricsManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsManager {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MetricsData::default())),
        }
    }

    pub async fn record_topic(&self, topic: &str) {
        let mut data = self.inner.write().await;
        *data.topic_usage.entry(topic.to_string()).or_insert(0) += 1;
    }

    pub async fn get_metrics(&self) -> MetricsData {
        self.inner.read().await.clone()
    }
}

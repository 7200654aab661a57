//! Runs the index/search/update/delete checks against a configured cluster.
//!
//! Usage:
//!   ELASTICSEARCH_URL=http://localhost:9200 cargo run --bin es-harness
//!
//! Environment variables:
//!   - ELASTICSEARCH_URL: cluster address (default: http://localhost:9200)
//!   - ELASTICSEARCH_USERNAME / ELASTICSEARCH_PASSWORD: optional basic auth
//!   - ELASTICSEARCH_TEST_INDEX: index recreated by the run (default: test_index)
//!   - ELASTICSEARCH_SHARDS / ELASTICSEARCH_REPLICAS: index settings (default: 5 / 1)
//!   - ELASTICSEARCH_TIMEOUT_SECS: per-request timeout (default: 30)
use anyhow::{Context, Result};
use es_harness::{Config, ElasticsearchClient, Scenario};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "es_harness=info".into()),
        )
        .init();

    let config = Config::from_env().context("invalid Elasticsearch configuration")?;
    info!(url = %config.url, index = %config.test_index, "Starting Elasticsearch checks");

    let client = ElasticsearchClient::new(&config).context("failed to build Elasticsearch client")?;
    client
        .health_check()
        .await
        .with_context(|| format!("Elasticsearch at {} is not reachable", config.url))?;

    let scenario = Scenario::new(&client, config.test_index.clone());
    if let Err(e) = scenario.run().await {
        error!(error = %e, "Elasticsearch checks failed");
        return Err(e.into());
    }

    info!("Elasticsearch checks completed");
    Ok(())
}

//! Mock cluster helpers shared by the integration tests.
#![allow(dead_code)]

use es_harness::{Config, ElasticsearchClient};
use serde_json::{json, Value};
use std::time::Duration;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

pub const INDEX: &str = "test_index";

/// Starts a mock cluster and a client pointed at it.
pub async fn mock_cluster() -> (MockServer, ElasticsearchClient) {
    mock_cluster_with(|_| {}).await
}

/// Like [`mock_cluster`], with `configure` applied to the client config first.
pub async fn mock_cluster_with<F>(configure: F) -> (MockServer, ElasticsearchClient)
where
    F: FnOnce(&mut Config),
{
    let server = MockServer::start().await;
    let mut config = Config {
        url: server.uri(),
        test_index: INDEX.to_string(),
        timeout: Duration::from_secs(5),
        ..Config::default()
    };
    configure(&mut config);
    let client = ElasticsearchClient::new(&config).expect("client should build for mock uri");
    (server, client)
}

pub fn acknowledged() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "acknowledged": true,
        "shards_acknowledged": true,
        "index": INDEX
    }))
}

pub fn write_result(status: u16, id: &str, version: i64, result: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "_index": INDEX,
        "_id": id,
        "_version": version,
        "result": result,
        "forced_refresh": true,
        "_shards": { "total": 2, "successful": 1, "failed": 0 },
        "_seq_no": 0,
        "_primary_term": 1
    }))
}

pub fn search_hits(sources: Vec<Value>) -> ResponseTemplate {
    let hits: Vec<Value> = sources
        .into_iter()
        .map(|source| {
            json!({
                "_index": INDEX,
                "_id": source["id"].clone(),
                "_score": 0.2876821,
                "_source": source
            })
        })
        .collect();

    ResponseTemplate::new(200).set_body_json(json!({
        "took": 1,
        "timed_out": false,
        "_shards": { "total": 5, "successful": 5, "skipped": 0, "failed": 0 },
        "hits": {
            "total": { "value": hits.len(), "relation": "eq" },
            "max_score": null,
            "hits": hits
        }
    }))
}

pub fn error_response(status: u16, error_type: &str, reason: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(json!({
        "error": {
            "root_cause": [{ "type": error_type, "reason": reason }],
            "type": error_type,
            "reason": reason
        },
        "status": status
    }))
}

pub fn term_id(id: &str) -> Value {
    json!({ "query": { "term": { "id": id } } })
}

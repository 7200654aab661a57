//! Request bodies sent to the cluster.

use crate::config::IndexSettings;
use serde::Serialize;
use serde_json::{json, Value};

/// Settings and mapping for the record index. `name` is analyzed text, `id` an exact keyword.
pub fn create_index_body(settings: &IndexSettings) -> Value {
    json!({
        "settings": {
            "index.number_of_shards": settings.number_of_shards,
            "index.number_of_replicas": settings.number_of_replicas
        },
        "mappings": {
            "properties": {
                "id": { "type": "keyword" },
                "name": { "type": "text" }
            }
        }
    })
}

pub fn term_query(field: &str, value: &str) -> Value {
    json!({
        "query": {
            "term": { field: value }
        }
    })
}

/// Partial update merging `doc` into the stored source.
pub fn partial_update<T: Serialize>(doc: &T) -> Result<Value, serde_json::Error> {
    Ok(json!({ "doc": serde_json::to_value(doc)? }))
}

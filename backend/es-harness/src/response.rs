//! Response bodies returned by the cluster.

use elasticsearch::http::StatusCode;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Acknowledged {
    pub acknowledged: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteResult {
    Created,
    Updated,
    Deleted,
    NotFound,
    Noop,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WriteResponse {
    #[serde(rename = "_index")]
    pub index: String,
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_version", default)]
    pub version: Option<i64>,
    pub result: WriteResult,
}

/// Result of an index, update or delete call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOutcome {
    pub status: StatusCode,
    pub index: String,
    pub id: String,
    pub version: Option<i64>,
    pub result: WriteResult,
}

impl WriteOutcome {
    pub(crate) fn new(status: StatusCode, body: WriteResponse) -> Self {
        Self {
            status,
            index: body.index,
            id: body.id,
            version: body.version,
            result: body.result,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse<T> {
    pub hits: InnerHits<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InnerHits<T> {
    #[serde(default, deserialize_with = "deserialize_total")]
    pub total: u64,
    pub hits: Vec<Hit<T>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hit<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_score", default)]
    pub score: Option<f64>,
    #[serde(rename = "_source")]
    pub source: Option<T>,
}

/// Result of a search call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    pub status: StatusCode,
    pub total: u64,
    pub hits: Vec<Hit<T>>,
}

impl<T> SearchOutcome<T> {
    pub(crate) fn new(status: StatusCode, body: SearchResponse<T>) -> Self {
        Self {
            status,
            total: body.hits.total,
            hits: body.hits.hits,
        }
    }

    pub fn first_source(&self) -> Option<&T> {
        self.hits.first().and_then(|hit| hit.source.as_ref())
    }

    pub fn into_sources(self) -> Vec<T> {
        self.hits.into_iter().filter_map(|hit| hit.source).collect()
    }
}

// 7.x+ reports `{"value": n, "relation": "eq"}`, older clusters a bare number.
fn deserialize_total<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Total {
        Object { value: u64 },
        Number(u64),
    }

    Ok(match Total::deserialize(deserializer)? {
        Total::Object { value } => value,
        Total::Number(value) => value,
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum ErrorDetail {
    Structured {
        #[serde(rename = "type")]
        error_type: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Message(String),
}

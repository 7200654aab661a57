use crate::config::{Config, IndexSettings};
use crate::error::ElasticsearchError;
use crate::query;
use crate::record::Record;
use crate::refresh::RefreshPolicy;
use crate::response::{
    Acknowledged, ErrorBody, ErrorDetail, SearchOutcome, SearchResponse, WriteOutcome,
    WriteResponse,
};
use elasticsearch::{
    auth::Credentials,
    http::{
        response::Response,
        transport::{SingleNodeConnectionPool, TransportBuilder},
        StatusCode,
    },
    indices::{IndicesCreateParts, IndicesDeleteParts, IndicesExistsParts},
    DeleteParts, Elasticsearch, IndexParts, SearchParts, UpdateParts,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info};
use url::Url;

#[derive(Clone)]
pub struct ElasticsearchClient {
    client: Elasticsearch,
    index_settings: IndexSettings,
}

impl ElasticsearchClient {
    pub fn new(config: &Config) -> Result<Self, ElasticsearchError> {
        let parsed = Url::parse(&config.url)?;
        let pool = SingleNodeConnectionPool::new(parsed);
        let mut builder = TransportBuilder::new(pool).timeout(config.timeout);
        if let Some(credentials) = &config.credentials {
            builder = builder.auth(Credentials::Basic(
                credentials.username.clone(),
                credentials.password.clone(),
            ));
        }
        let transport = builder.build()?;

        Ok(Self {
            client: Elasticsearch::new(transport),
            index_settings: config.index_settings.clone(),
        })
    }

    pub async fn health_check(&self) -> Result<(), ElasticsearchError> {
        let response = self.client.ping().send().await?;
        let status = response.status_code();
        if status.is_success() {
            Ok(())
        } else {
            Err(ElasticsearchError::HealthCheck(status))
        }
    }

    pub async fn index_exists(&self, index: &str) -> Result<bool, ElasticsearchError> {
        let response = self
            .client
            .indices()
            .exists(IndicesExistsParts::Index(&[index]))
            .send()
            .await?;

        let status = response.status_code();
        if status.is_success() {
            return Ok(true);
        }
        if status == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        let text = response.text().await?;
        Err(status_error(status, &text))
    }

    /// Creates `index` with the configured shard/replica counts and the record mapping.
    pub async fn create_index(&self, index: &str) -> Result<bool, ElasticsearchError> {
        let response = self
            .client
            .indices()
            .create(IndicesCreateParts::Index(index))
            .body(query::create_index_body(&self.index_settings))
            .send()
            .await?;

        let (_, ack) = expect_success::<Acknowledged>(response).await?;
        info!(index, acknowledged = ack.acknowledged, "create index response");
        Ok(ack.acknowledged)
    }

    /// Deletes `index`. A missing index is logged and reported as `Ok(false)`.
    pub async fn delete_index(&self, index: &str) -> Result<bool, ElasticsearchError> {
        let response = self
            .client
            .indices()
            .delete(IndicesDeleteParts::Index(&[index]))
            .send()
            .await?;

        match expect_success::<Acknowledged>(response).await {
            Ok((_, ack)) => {
                info!(index, acknowledged = ack.acknowledged, "delete index response");
                Ok(ack.acknowledged)
            }
            Err(err) if err.is_index_not_found() => {
                info!(index, error = %err, "delete fail");
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    pub async fn ensure_index(&self, index: &str) -> Result<bool, ElasticsearchError> {
        if self.index_exists(index).await? {
            return Ok(false);
        }
        self.create_index(index).await
    }

    /// Drops `index` if present and creates it empty.
    pub async fn reset_index(&self, index: &str) -> Result<bool, ElasticsearchError> {
        self.delete_index(index).await?;
        self.create_index(index).await
    }

    pub async fn index_document<T: Serialize>(
        &self,
        index: &str,
        id: &str,
        doc: &T,
        refresh: RefreshPolicy,
    ) -> Result<WriteOutcome, ElasticsearchError> {
        let response = self
            .client
            .index(IndexParts::IndexId(index, id))
            .refresh(refresh.into())
            .body(doc)
            .send()
            .await?;

        let (status, body) = expect_success::<WriteResponse>(response).await?;
        let outcome = WriteOutcome::new(status, body);
        info!(index, id, status = %outcome.status, result = ?outcome.result, "indexed document");
        Ok(outcome)
    }

    pub async fn index_record(
        &self,
        index: &str,
        record: &Record,
        refresh: RefreshPolicy,
    ) -> Result<WriteOutcome, ElasticsearchError> {
        self.index_document(index, &record.id, record, refresh).await
    }

    /// Merges `doc` into the stored source of `id`.
    pub async fn update_document<T: Serialize>(
        &self,
        index: &str,
        id: &str,
        doc: &T,
        refresh: RefreshPolicy,
    ) -> Result<WriteOutcome, ElasticsearchError> {
        let response = self
            .client
            .update(UpdateParts::IndexId(index, id))
            .refresh(refresh.into())
            .body(query::partial_update(doc)?)
            .send()
            .await?;

        let (status, body) = expect_success::<WriteResponse>(response).await?;
        let outcome = WriteOutcome::new(status, body);
        info!(index, id, status = %outcome.status, result = ?outcome.result, "updated document");
        Ok(outcome)
    }

    /// Deletes `id`. A missing document comes back as a `NotFound` outcome, not an error.
    pub async fn delete_document(
        &self,
        index: &str,
        id: &str,
        refresh: RefreshPolicy,
    ) -> Result<WriteOutcome, ElasticsearchError> {
        let response = self
            .client
            .delete(DeleteParts::IndexId(index, id))
            .refresh(refresh.into())
            .send()
            .await?;

        let status = response.status_code();
        let text = response.text().await?;
        let body = if status.is_success() {
            serde_json::from_str::<WriteResponse>(&text)?
        } else if status == StatusCode::NOT_FOUND {
            match serde_json::from_str::<WriteResponse>(&text) {
                Ok(body) => body,
                Err(_) => return Err(status_error(status, &text)),
            }
        } else {
            return Err(status_error(status, &text));
        };

        let outcome = WriteOutcome::new(status, body);
        info!(index, id, status = %outcome.status, result = ?outcome.result, "deleted document");
        Ok(outcome)
    }

    pub async fn search_term<T: DeserializeOwned>(
        &self,
        index: &str,
        field: &str,
        value: &str,
    ) -> Result<SearchOutcome<T>, ElasticsearchError> {
        let response = self
            .client
            .search(SearchParts::Index(&[index]))
            .body(query::term_query(field, value))
            .send()
            .await?;

        let (status, body) = expect_success::<SearchResponse<T>>(response).await?;
        let outcome = SearchOutcome::new(status, body);
        debug!(index, field, value, total = outcome.total, "term search");
        Ok(outcome)
    }

    pub async fn find_by_id(
        &self,
        index: &str,
        id: &str,
    ) -> Result<SearchOutcome<Record>, ElasticsearchError> {
        self.search_term(index, "id", id).await
    }
}

async fn expect_success<T: DeserializeOwned>(
    response: Response,
) -> Result<(StatusCode, T), ElasticsearchError> {
    let status = response.status_code();
    let text = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status, &text));
    }
    Ok((status, serde_json::from_str(&text)?))
}

fn status_error(status: StatusCode, body: &str) -> ElasticsearchError {
    let (error_type, reason) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: ErrorDetail::Structured { error_type, reason },
        }) => (error_type, reason.unwrap_or_default()),
        Ok(ErrorBody {
            error: ErrorDetail::Message(message),
        }) => ("unknown".to_string(), message),
        Err(_) => ("unknown".to_string(), body.to_string()),
    };

    ElasticsearchError::Status {
        status,
        error_type,
        reason,
    }
}

//! End-to-end verification run against a live index.
//!
//! Each step performs one write or search and checks the HTTP status, hit count
//! and returned source the cluster is expected to produce.

use crate::client::ElasticsearchClient;
use crate::error::ScenarioError;
use crate::record::Record;
use crate::refresh::RefreshPolicy;
use elasticsearch::http::StatusCode;
use serde_json::Value;
use std::fmt::Debug;
use tracing::info;

pub struct Scenario<'a> {
    client: &'a ElasticsearchClient,
    index: String,
}

impl<'a> Scenario<'a> {
    pub fn new(client: &'a ElasticsearchClient, index: impl Into<String>) -> Self {
        Self {
            client,
            index: index.into(),
        }
    }

    pub fn index(&self) -> &str {
        &self.index
    }

    /// Runs every step in order, stopping at the first failure.
    pub async fn run(&self) -> Result<(), ScenarioError> {
        self.init().await?;
        self.insert().await?;
        self.query().await?;
        self.update().await?;
        self.delete().await?;
        info!(index = %self.index, "all steps passed");
        Ok(())
    }

    pub async fn init(&self) -> Result<(), ScenarioError> {
        self.client.reset_index(&self.index).await?;
        info!(index = %self.index, "init passed");
        Ok(())
    }

    pub async fn insert(&self) -> Result<(), ScenarioError> {
        self.insert_record("insert", &Record::new("1", "测试数据01"))
            .await?;
        info!(index = %self.index, "insert passed");
        Ok(())
    }

    pub async fn query(&self) -> Result<(), ScenarioError> {
        let record = Record::new("2", "测试数据02");
        self.insert_record("query", &record).await?;
        self.expect_single("query", &record).await?;
        info!(index = %self.index, "query passed");
        Ok(())
    }

    pub async fn update(&self) -> Result<(), ScenarioError> {
        let mut record = Record::new("3", "测试数据03");
        self.insert_record("update", &record).await?;

        record.rename("测试数据被更新");
        let outcome = self
            .client
            .update_document(&self.index, &record.id, &record, RefreshPolicy::Immediate)
            .await?;
        expect_eq("update", StatusCode::OK, outcome.status)?;

        self.expect_single("update", &record).await?;
        info!(index = %self.index, "update passed");
        Ok(())
    }

    pub async fn delete(&self) -> Result<(), ScenarioError> {
        let record = Record::new("4", "测试数据04");
        self.insert_record("delete", &record).await?;

        let outcome = self
            .client
            .delete_document(&self.index, &record.id, RefreshPolicy::Immediate)
            .await?;
        expect_eq("delete", StatusCode::OK, outcome.status)?;

        let search = self
            .client
            .search_term::<Value>(&self.index, "id", &record.id)
            .await?;
        expect_eq("delete", StatusCode::OK, search.status)?;
        expect_eq("delete", 0, search.total)?;
        info!(index = %self.index, "delete passed");
        Ok(())
    }

    async fn insert_record(&self, step: &'static str, record: &Record) -> Result<(), ScenarioError> {
        let outcome = self
            .client
            .index_record(&self.index, record, RefreshPolicy::Immediate)
            .await?;
        expect_eq(step, StatusCode::CREATED, outcome.status)
    }

    async fn expect_single(&self, step: &'static str, record: &Record) -> Result<(), ScenarioError> {
        let search = self
            .client
            .search_term::<Value>(&self.index, "id", &record.id)
            .await?;
        expect_eq(step, StatusCode::OK, search.status)?;
        expect_eq(step, 1, search.total)?;

        let expected = serde_json::to_value(record).map_err(crate::ElasticsearchError::from)?;
        match search.first_source() {
            Some(source) => expect_eq(step, &expected, source),
            None => Err(ScenarioError::Mismatch {
                step,
                expected: expected.to_string(),
                actual: "no source".to_string(),
            }),
        }
    }
}

fn expect_eq<T: PartialEq + Debug>(
    step: &'static str,
    expected: T,
    actual: T,
) -> Result<(), ScenarioError> {
    if expected == actual {
        Ok(())
    } else {
        Err(ScenarioError::Mismatch {
            step,
            expected: format!("{expected:?}"),
            actual: format!("{actual:?}"),
        })
    }
}

pub mod client;
pub mod config;
pub mod error;
pub mod query;
pub mod record;
pub mod refresh;
pub mod response;
pub mod scenario;

pub use client::ElasticsearchClient;
pub use config::Config;
pub use error::{ConfigError, ElasticsearchError, ScenarioError};
pub use record::Record;
pub use refresh::RefreshPolicy;
pub use response::{Hit, SearchOutcome, WriteOutcome, WriteResult};
pub use scenario::Scenario;

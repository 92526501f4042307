use aws_sdk_dynamodb::Client as DynamoClient;
use salon_atoms::stylists::{DynamoStylistStore, StylistStore};
use std::sync::Arc;

use crate::config::Config;

/// Shared across invocations of a warm Lambda
pub struct AppState {
    pub store: Arc<dyn StylistStore>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Arc<dyn StylistStore>, config: Config) -> Self {
        Self { store, config }
    }

    /// DynamoDB-backed state from the environment
    pub async fn from_env() -> Self {
        let config = Config::from_env();
        let aws_config = aws_config::load_from_env().await;
        let dynamo_client = DynamoClient::new(&aws_config);

        tracing::info!(
            "Using table {} collection {}",
            config.table_name,
            config.collection
        );

        let store = DynamoStylistStore::new(dynamo_client, &config.table_name, &config.collection);
        Self::new(Arc::new(store), config)
    }
}

use std::sync::Arc;

use anyhow::Result;
use convene_clients::{PostgresCatalog, PostgresClient};
use convene_common::ModuleClient;
use convene_runtime::{CatalogSource, GachaEngine, InMemoryCatalog, RateTable};

use crate::env::{ApiServerEnv, CatalogBackend};

#[derive(Clone)]
pub struct GlobalState {
    pub catalog: Arc<dyn CatalogSource>,
    pub engine: Arc<GachaEngine>,
}

impl GlobalState {
    pub fn new(catalog: Arc<dyn CatalogSource>, rates: RateTable) -> Self {
        Self {
            catalog,
            engine: Arc::new(GachaEngine::new(rates)),
        }
    }

    pub async fn from_env(env: &ApiServerEnv) -> Result<Self> {
        let catalog: Arc<dyn CatalogSource> = match &env.catalog {
            CatalogBackend::Postgres => {
                let db = PostgresClient::setup_connection().await?;
                Arc::new(PostgresCatalog::new(db))
            }
            CatalogBackend::JsonFile(path) => Arc::new(InMemoryCatalog::from_json_file(path)?),
        };

        tracing::info!("catalog backend: {:?}", env.catalog);
        Ok(Self::new(catalog, RateTable::default()))
    }
}

use std::path::PathBuf;

use anyhow::{bail, Result};
use convene_common::{optional_env_var, parsed_env_var, EnvVars};

/// Where the catalog snapshot for each batch is read from.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogBackend {
    Postgres,
    JsonFile(PathBuf),
}

pub struct ApiServerEnv {
    pub port: u16,
    pub catalog: CatalogBackend,
}

impl EnvVars for ApiServerEnv {
    fn load() -> Result<Self> {
        let port = parsed_env_var("PORT", 3033)?;

        let catalog = if optional_env_var("DATABASE_URL").is_some() {
            CatalogBackend::Postgres
        } else if let Some(path) = optional_env_var("CATALOG_PATH") {
            CatalogBackend::JsonFile(PathBuf::from(path))
        } else {
            bail!("no catalog configured: set DATABASE_URL or CATALOG_PATH");
        };

        Ok(Self { port, catalog })
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        match key {
            "PORT" => Some(self.port.to_string()),
            "CATALOG_PATH" => match &self.catalog {
                CatalogBackend::JsonFile(path) => Some(path.display().to_string()),
                CatalogBackend::Postgres => None,
            },
            _ => None,
        }
    }
}

use anyhow::Result;
use convene_common::{define_module_client, parsed_env_var, required_env_var, EnvVars};
use sqlx::postgres::{PgPool, PgPoolOptions};

pub struct PostgresEnv {
    pub database_url: String,
    pub max_connections: u32,
}

impl EnvVars for PostgresEnv {
    fn load() -> Result<Self> {
        Ok(Self {
            database_url: required_env_var("DATABASE_URL")?,
            max_connections: parsed_env_var("DATABASE_MAX_CONNECTIONS", 5)?,
        })
    }

    fn get_env_var(&self, key: &str) -> Option<String> {
        match key {
            "DATABASE_URL" => Some(self.database_url.clone()),
            "DATABASE_MAX_CONNECTIONS" => Some(self.max_connections.to_string()),
            _ => None,
        }
    }
}

async fn connect() -> Result<PgPool> {
    let env = PostgresEnv::load()?;
    let pool = PgPoolOptions::new()
        .max_connections(env.max_connections)
        .connect(&env.database_url)
        .await?;
    Ok(pool)
}

define_module_client! {
    (struct PostgresClient, "postgres")
    client_type: PgPool,
    env: ["DATABASE_URL"],
    setup: connect()
}

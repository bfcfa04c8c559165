//! Application state for hotel-server

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::Config;
use crate::db::{HotelStore, PgStore};
use crate::services::{HotelService, TicketService};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Hotel queries (entitlement-gated)
    pub hotels: HotelService,
    /// Ticket catalogue and the user's own ticket
    pub tickets: TicketService,
    /// JWT secret for user authentication
    pub jwt_secret: String,
}

impl AppState {
    /// Build state around an already constructed store
    pub fn with_store(store: Arc<dyn HotelStore>, jwt_secret: impl Into<String>) -> Self {
        Self {
            hotels: HotelService::new(store.clone()),
            tickets: TicketService::new(store),
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Connect to PostgreSQL and create a new AppState
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(config.db_acquire_timeout)
            .connect(&config.database_url)
            .await?;

        tracing::info!("Connected to PostgreSQL");

        if config.run_migrations {
            sqlx::migrate!("./migrations").run(&pool).await?;
            tracing::info!("Migrations applied");
        }

        Ok(Self::with_store(
            Arc::new(PgStore::new(pool)),
            config.jwt_secret.clone(),
        ))
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, sqlx::FromRow)]
pub struct Hello {
    pub id: i32,
    pub message: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, PartialEq)]
pub enum Error {
    UnexpectedError,
}

/// Read access to the hello record store.
#[async_trait]
pub trait HelloMapper: Send + Sync {
    async fn select_by_id(&self, id: i32) -> Result<Option<Hello>>;
}

#[derive(Clone)]
pub struct PgHelloMapper {
    pool: PgPool,
}

impl PgHelloMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl HelloMapper for PgHelloMapper {
    async fn select_by_id(&self, id: i32) -> Result<Option<Hello>> {
        sqlx::query_as::<_, Hello>(
            "SELECT id, message, created_at, updated_at FROM hellos WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while fetching hello with id {}: {}", id, err);
            Error::UnexpectedError
        })
    }
}

/// Fixed set of records held in memory. Never changes after construction.
#[derive(Clone, Default)]
pub struct MemoryHelloMapper {
    hellos: HashMap<i32, Hello>,
}

impl MemoryHelloMapper {
    pub fn new(hellos: impl IntoIterator<Item = Hello>) -> Self {
        Self {
            hellos: hellos.into_iter().map(|hello| (hello.id, hello)).collect(),
        }
    }
}

#[async_trait]
impl HelloMapper for MemoryHelloMapper {
    async fn select_by_id(&self, id: i32) -> Result<Option<Hello>> {
        Ok(self.hellos.get(&id).cloned())
    }
}

use crate::config::DadosConfig;
use crate::domain::{DadosRow, Pagination};
use async_trait::async_trait;
use derive_more::derive::Display;
use sqlx::postgres::{PgPool, PgPoolOptions};

pub mod postgres;
pub mod query;
pub mod row;

// sqlx::Pool is Send + Sync, one repository is shared by every request task
#[async_trait]
pub trait DadosRepository: Send + Sync {
    async fn fetch_page(&self, page: Pagination) -> Result<Vec<DadosRow>, sqlx::Error>;
}

/// Coarse classification of a database failure.
///
/// The display text is what the client sees; the underlying error only goes
/// to the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum DbErrorKind {
    #[display("falha de conexão")]
    Connectivity,
    #[display("tempo limite excedido")]
    Timeout,
    #[display("erro de sintaxe ou objeto inexistente")]
    Syntax,
    #[display("violação de restrição")]
    Constraint,
    #[display("dados inválidos")]
    Data,
    #[display("falha ao converter resultado")]
    Decode,
    #[display("erro interno")]
    Other,
}

impl DbErrorKind {
    pub fn classify(err: &sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => match db_err.code() {
                Some(code) => Self::from_sqlstate(&code),
                None => Self::Other,
            },
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::Connectivity,
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::TypeNotFound { .. } => Self::Decode,
            _ => Self::Other,
        }
    }

    /// Maps a PostgreSQL SQLSTATE code onto a kind.
    pub fn from_sqlstate(code: &str) -> Self {
        match code {
            "57014" => Self::Timeout,
            // admin/crash shutdown, cannot connect now
            "57P01" | "57P02" | "57P03" => Self::Connectivity,
            _ => match code.get(..2) {
                Some("08") => Self::Connectivity,
                Some("42") => Self::Syntax,
                Some("23") => Self::Constraint,
                Some("22") => Self::Data,
                _ => Self::Other,
            },
        }
    }
}

/// Opens the connection pool, or returns `None` when the database can't be
/// reached so the server can still come up in degraded mode.
pub async fn connect_pool(config: &DadosConfig) -> Option<PgPool> {
    let result = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(config.connect_options())
        .await;

    match result {
        Ok(pool) => {
            tracing::info!(
                min = config.min_connections,
                max = config.max_connections,
                "Connection pool ready"
            );
            Some(pool)
        }
        Err(e) => {
            tracing::error!(
                kind = ?DbErrorKind::classify(&e),
                "Failed to initialize connection pool, /dados disabled: {}",
                e
            );
            None
        }
    }
}

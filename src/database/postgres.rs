use crate::database::query::DADOS_QUERY;
use crate::database::row::row_to_json;
use crate::database::DadosRepository;
use crate::domain::{DadosRow, Pagination};
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PgDadosRepository {
    pool: PgPool,
    query: &'static str,
}

impl PgDadosRepository {
    pub fn new(pool: PgPool) -> Self {
        Self::with_query(pool, DADOS_QUERY)
    }

    /// `query` must take the page size as `$1` and the offset as `$2`.
    pub fn with_query(pool: PgPool, query: &'static str) -> Self {
        Self { pool, query }
    }
}

#[async_trait]
impl DadosRepository for PgDadosRepository {
    async fn fetch_page(&self, page: Pagination) -> Result<Vec<DadosRow>, sqlx::Error> {
        // back to the pool when `conn` drops, whichever way we leave
        let mut conn = self.pool.acquire().await?;

        // anything past i64::MAX skips every row anyway
        let offset = i64::try_from(page.offset).unwrap_or(i64::MAX);

        let rows = sqlx::query(self.query)
            .bind(i64::from(page.limit))
            .bind(offset)
            .fetch_all(&mut *conn)
            .await?;

        rows.iter().map(row_to_json).collect()
    }
}

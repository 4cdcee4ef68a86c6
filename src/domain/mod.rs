pub mod pagination;

pub use pagination::Pagination;

/// One result row: column name to value, in `SELECT` list order.
pub type DadosRow = serde_json::Map<String, serde_json::Value>;

pub mod model;

use crate::domain::Pagination;
use crate::error::{ApiError, ApiResult};
use crate::AppState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use model::DadosResponse;

pub fn dados_router() -> Router<AppState> {
    Router::new().route("/dados", get(get_dados_handler))
}

async fn get_dados_handler(
    State(state): State<AppState>,
    Query(requested): Query<Pagination>,
) -> ApiResult<Json<DadosResponse>> {
    let repo = state.repo.as_ref().ok_or(ApiError::Unavailable)?;

    let (page, clamped) = requested.clamped(state.config.max_limit);
    if clamped {
        tracing::warn!(
            requested = requested.limit,
            max = state.config.max_limit,
            "Requested limit above maximum, clamping"
        );
    }

    match repo.fetch_page(page).await {
        Ok(dados) => {
            tracing::debug!(%page, rows = dados.len(), "Served /dados");
            Ok(Json(DadosResponse { dados }))
        }
        Err(e) => {
            let err = ApiError::from(&e);
            tracing::error!(%page, error = ?err, "Query failed: {}", e);
            Err(err)
        }
    }
}

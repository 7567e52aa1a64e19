use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::PageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::screeners::entity::RunScreenerRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(list_screeners))
        .routes(routes!(run_screener))
}

/// 分页查询选股器
#[utoipa::path(
    get,
    path = "/screeners/fetchScreeners",
    tag = "选股器 (Screeners)",
    params(
        ("page" = Option<String>, Query, description = "页码，缺省 1"),
        ("size" = Option<String>, Query, description = "每页条数，缺省 10，上限 100")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn list_screeners(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "fetchScreeners", header, query, |q: PageQuery, header| {
        state.providers.screeners.list_screeners(q.pagination(), header)
    })
    .await
}

/// 运行选股器
#[utoipa::path(
    post,
    path = "/screeners/runScreener",
    tag = "选股器 (Screeners)",
    request_body = RunScreenerRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn run_screener(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "runScreener", header, body, |req: RunScreenerRequest, header| {
        state.providers.screeners.run_screener(req, header)
    })
    .await
}

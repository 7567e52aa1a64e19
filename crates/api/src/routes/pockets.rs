//! 投资组合 (Pocket) 浏览与申购。

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::PageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::pockets::entity::{BuyPocketRequest, ExitPocketRequest, PocketIdRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(fetch_pockets))
        .routes(routes!(pocket_details))
        .routes(routes!(buy_pocket))
        .routes(routes!(exit_pocket))
}

/// 分页查询组合
#[utoipa::path(
    get,
    path = "/pockets/fetchPockets",
    tag = "组合 (Pockets)",
    params(
        ("page" = Option<String>, Query, description = "页码，缺省 1"),
        ("size" = Option<String>, Query, description = "每页条数，缺省 10，上限 100")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn fetch_pockets(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "fetchPockets", header, query, |q: PageQuery, header| {
        state.providers.pockets.fetch_pockets(q.pagination(), header)
    })
    .await
}

/// 组合详情
#[utoipa::path(
    post,
    path = "/pockets/pocketDetails",
    tag = "组合 (Pockets)",
    request_body = PocketIdRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn pocket_details(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "pocketDetails", header, body, |req: PocketIdRequest, header| {
        state.providers.pockets.pocket_details(req, header)
    })
    .await
}

/// 按金额买入组合
#[utoipa::path(
    post,
    path = "/pockets/buyPocket",
    tag = "组合 (Pockets)",
    security(("bearer_jwt" = [])),
    request_body = BuyPocketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn buy_pocket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "buyPocket", header, body, |req: BuyPocketRequest, header| {
        state.providers.pockets.buy_pocket(req, header)
    })
    .await
}

/// 退出组合
#[utoipa::path(
    post,
    path = "/pockets/exitPocket",
    tag = "组合 (Pockets)",
    security(("bearer_jwt" = [])),
    request_body = ExitPocketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn exit_pocket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "exitPocket", header, body, |req: ExitPocketRequest, header| {
        state.providers.pockets.exit_pocket(req, header)
    })
    .await
}

//! 新股申购。

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::ipo::entity::{IpoCancelRequest, IpoOrderRequest, IpoStageQuery};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(fetch_ipos))
        .routes(routes!(place_order))
        .routes(routes!(cancel_order))
        .routes(routes!(order_book))
}

/// 按阶段查询新股
#[utoipa::path(
    get,
    path = "/ipo/fetchIpo",
    tag = "新股申购 (IPO)",
    params(
        ("stage" = Option<String>, Query, description = "OPEN / UPCOMING / CLOSED / LISTED")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn fetch_ipos(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<IpoStageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "fetchIpo", header, query, |q: IpoStageQuery, header| {
        state.providers.ipo.fetch_ipos(q.into(), header)
    })
    .await
}

/// 提交申购
///
/// 最多 3 档报价，选择 cut-off 的报价可不填价格。
#[utoipa::path(
    post,
    path = "/ipo/placeIpoOrder",
    tag = "新股申购 (IPO)",
    security(("bearer_jwt" = [])),
    request_body = IpoOrderRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "placeIpoOrder", header, body, |req: IpoOrderRequest, header| {
        state.providers.ipo.place_order(req, header)
    })
    .await
}

/// 撤销申购
#[utoipa::path(
    post,
    path = "/ipo/cancelIpoOrder",
    tag = "新股申购 (IPO)",
    security(("bearer_jwt" = [])),
    request_body = IpoCancelRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "cancelIpoOrder", header, body, |req: IpoCancelRequest, header| {
        state.providers.ipo.cancel_order(req, header)
    })
    .await
}

/// 查询申购记录
#[utoipa::path(
    post,
    path = "/ipo/ipoOrderBook",
    tag = "新股申购 (IPO)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn order_book(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "ipoOrderBook", header, body, |req: ClientRequest, header| {
        state.providers.ipo.order_book(req, header)
    })
    .await
}

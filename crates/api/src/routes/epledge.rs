//! 证券质押与解押。

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::paging::today;
use bourse_core::common::response::ApiRes;
use bourse_core::epledge::entity::{PledgeRequest, PledgeTransactionsQuery};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(pledge))
        .routes(routes!(unpledge))
        .routes(routes!(pledge_transactions))
        .routes(routes!(pledged_holdings))
}

/// 提交质押申请
#[utoipa::path(
    post,
    path = "/epledge/pledgeRequest",
    tag = "质押 (ePledge)",
    security(("bearer_jwt" = [])),
    request_body = PledgeRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn pledge(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "pledgeRequest", header, body, |req: PledgeRequest, header| {
        state.providers.epledge.pledge(req, header)
    })
    .await
}

/// 提交解押申请
#[utoipa::path(
    post,
    path = "/epledge/unpledgeRequest",
    tag = "质押 (ePledge)",
    security(("bearer_jwt" = [])),
    request_body = PledgeRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn unpledge(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "unpledgeRequest", header, body, |req: PledgeRequest, header| {
        state.providers.epledge.unpledge(req, header)
    })
    .await
}

/// 查询质押流水
///
/// # Logic
/// 1. `clientId` 必填。
/// 2. `toDate` 缺省为今天，`fromDate` 缺省为 `toDate` 往前 30 天。
/// 3. `fromDate` 晚于 `toDate` 时拒绝。
#[utoipa::path(
    get,
    path = "/epledge/getPledgeTransactions",
    tag = "质押 (ePledge)",
    security(("bearer_jwt" = [])),
    params(
        ("clientId" = Option<String>, Query, description = "客户号"),
        ("fromDate" = Option<String>, Query, description = "起始日期 YYYY-MM-DD"),
        ("toDate" = Option<String>, Query, description = "结束日期 YYYY-MM-DD")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn pledge_transactions(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<PledgeTransactionsQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "getPledgeTransactions", header, query, |q: PledgeTransactionsQuery, header| {
        state.providers.epledge.pledge_transactions(q.resolve(today()), header)
    })
    .await
}

/// 查询已质押持仓
#[utoipa::path(
    post,
    path = "/epledge/getPledgedHoldings",
    tag = "质押 (ePledge)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn pledged_holdings(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getPledgedHoldings", header, body, |req: ClientRequest, header| {
        state.providers.epledge.pledged_holdings(req, header)
    })
    .await
}

//! 账户聚合 (Account Aggregator) 授权与对账单拉取。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::finvu::entity::{ConsentRequest, ConsentStatusRequest, FetchStatementRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_consent))
        .routes(routes!(consent_status))
        .routes(routes!(fetch_statement))
}

/// 发起数据共享授权
#[utoipa::path(
    post,
    path = "/finvu/createConsent",
    tag = "账户聚合 (Finvu)",
    security(("bearer_jwt" = [])),
    request_body = ConsentRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn create_consent(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "createConsent", header, body, |req: ConsentRequest, header| {
        state.providers.finvu.create_consent(req, header)
    })
    .await
}

/// 查询授权状态
#[utoipa::path(
    post,
    path = "/finvu/consentStatus",
    tag = "账户聚合 (Finvu)",
    security(("bearer_jwt" = [])),
    request_body = ConsentStatusRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn consent_status(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "consentStatus", header, body, |req: ConsentStatusRequest, header| {
        state.providers.finvu.consent_status(req, header)
    })
    .await
}

/// 拉取银行对账单
#[utoipa::path(
    post,
    path = "/finvu/fetchStatement",
    tag = "账户聚合 (Finvu)",
    security(("bearer_jwt" = [])),
    request_body = FetchStatementRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn fetch_statement(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "fetchStatement", header, body, |req: FetchStatementRequest, header| {
        state.providers.finvu.fetch_statement(req, header)
    })
    .await
}

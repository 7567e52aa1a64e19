use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::warnings::entity::{AcknowledgeWarningRequest, ScripWarningRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(scrip_warnings))
        .routes(routes!(acknowledge))
}

/// 查询证券的风险提示
#[utoipa::path(
    post,
    path = "/warnings/getScripWarnings",
    tag = "风险提示 (Warnings)",
    request_body = ScripWarningRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn scrip_warnings(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getScripWarnings", header, body, |req: ScripWarningRequest, header| {
        state.providers.warnings.scrip_warnings(req, header)
    })
    .await
}

/// 确认已阅读风险提示
#[utoipa::path(
    post,
    path = "/warnings/acknowledgeWarning",
    tag = "风险提示 (Warnings)",
    security(("bearer_jwt" = [])),
    request_body = AcknowledgeWarningRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn acknowledge(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "acknowledgeWarning", header, body, |req: AcknowledgeWarningRequest, header| {
        state.providers.warnings.acknowledge(req, header)
    })
    .await
}

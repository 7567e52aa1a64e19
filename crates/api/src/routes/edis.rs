//! EDIS 卖出授权: TPIN 生成、授权申请与状态查询。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::edis::entity::{EdisRequest, EdisStatusRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(generate_tpin))
        .routes(routes!(edis_request))
        .routes(routes!(edis_status))
}

/// 生成 TPIN
#[utoipa::path(
    post,
    path = "/edis/generateTpin",
    tag = "电子授权 (EDIS)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn generate_tpin(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "generateTpin", header, body, |req: ClientRequest, header| {
        state.providers.edis.generate_tpin(req, header)
    })
    .await
}

/// 提交持仓卖出授权
#[utoipa::path(
    post,
    path = "/edis/edisRequest",
    tag = "电子授权 (EDIS)",
    security(("bearer_jwt" = [])),
    request_body = EdisRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn edis_request(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "edisRequest", header, body, |req: EdisRequest, header| {
        state.providers.edis.edis_request(req, header)
    })
    .await
}

/// 查询授权状态
#[utoipa::path(
    post,
    path = "/edis/edisStatus",
    tag = "电子授权 (EDIS)",
    security(("bearer_jwt" = [])),
    request_body = EdisStatusRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn edis_status(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "edisStatus", header, body, |req: EdisStatusRequest, header| {
        state.providers.edis.edis_status(req, header)
    })
    .await
}

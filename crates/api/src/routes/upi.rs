use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::upi::entity::UpiPreferenceRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(set_preference))
        .routes(routes!(get_preference))
}

/// 设置默认 UPI 地址
#[utoipa::path(
    post,
    path = "/upi/setUpiPreference",
    tag = "UPI 偏好 (UPI)",
    security(("bearer_jwt" = [])),
    request_body = UpiPreferenceRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn set_preference(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "setUpiPreference", header, body, |req: UpiPreferenceRequest, header| {
        state.providers.upi.set_preference(req, header)
    })
    .await
}

/// 查询默认 UPI 地址
#[utoipa::path(
    post,
    path = "/upi/getUpiPreference",
    tag = "UPI 偏好 (UPI)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn get_preference(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getUpiPreference", header, body, |req: ClientRequest, header| {
        state.providers.upi.get_preference(req, header)
    })
    .await
}

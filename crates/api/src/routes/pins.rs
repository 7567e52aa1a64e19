use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::pins::entity::{PinRequest, UnpinRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(pin))
        .routes(routes!(unpin))
        .routes(routes!(fetch_pins))
}

/// 置顶证券
#[utoipa::path(
    post,
    path = "/pins/pinScrip",
    tag = "置顶 (Pins)",
    security(("bearer_jwt" = [])),
    request_body = PinRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn pin(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "pinScrip", header, body, |req: PinRequest, header| {
        state.providers.pins.pin(req, header)
    })
    .await
}

/// 取消置顶
#[utoipa::path(
    post,
    path = "/pins/unpinScrip",
    tag = "置顶 (Pins)",
    security(("bearer_jwt" = [])),
    request_body = UnpinRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn unpin(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "unpinScrip", header, body, |req: UnpinRequest, header| {
        state.providers.pins.unpin(req, header)
    })
    .await
}

/// 查询置顶列表
#[utoipa::path(
    post,
    path = "/pins/fetchPins",
    tag = "置顶 (Pins)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn fetch_pins(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "fetchPins", header, body, |req: ClientRequest, header| {
        state.providers.pins.fetch_pins(req, header)
    })
    .await
}

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientPageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::notifications::entity::{MarkReadRequest, RegisterDeviceRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(notifications))
        .routes(routes!(mark_read))
        .routes(routes!(register_device))
}

/// 分页查询消息
#[utoipa::path(
    get,
    path = "/notifications/getNotifications",
    tag = "消息通知 (Notifications)",
    security(("bearer_jwt" = [])),
    params(
        ("clientId" = Option<String>, Query, description = "客户号"),
        ("page" = Option<String>, Query, description = "页码，缺省 1"),
        ("size" = Option<String>, Query, description = "每页条数，缺省 10，上限 100")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn notifications(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<ClientPageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "getNotifications", header, query, |q: ClientPageQuery, header| {
        state.providers.notifications.notifications(q.into(), header)
    })
    .await
}

/// 标记消息为已读
#[utoipa::path(
    post,
    path = "/notifications/markRead",
    tag = "消息通知 (Notifications)",
    security(("bearer_jwt" = [])),
    request_body = MarkReadRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn mark_read(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "markRead", header, body, |req: MarkReadRequest, header| {
        state.providers.notifications.mark_read(req, header)
    })
    .await
}

/// 登记推送设备
#[utoipa::path(
    post,
    path = "/notifications/registerDevice",
    tag = "消息通知 (Notifications)",
    security(("bearer_jwt" = [])),
    request_body = RegisterDeviceRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn register_device(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "registerDevice", header, body, |req: RegisterDeviceRequest, header| {
        state.providers.notifications.register_device(req, header)
    })
    .await
}

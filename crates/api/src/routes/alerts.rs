//! 价格提醒的设置、修改、删除与查询。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::alerts::entity::{AlertIdRequest, EditAlertRequest, SetAlertRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(set_alert))
        .routes(routes!(edit_alert))
        .routes(routes!(delete_alert))
        .routes(routes!(get_alerts))
}

/// 设置价格提醒
#[utoipa::path(
    post,
    path = "/alerts/setAlerts",
    tag = "价格提醒 (Alerts)",
    security(("bearer_jwt" = [])),
    request_body = SetAlertRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn set_alert(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "setAlerts", header, body, |req: SetAlertRequest, header| {
        state.providers.alerts.set_alert(req, header)
    })
    .await
}

/// 修改价格提醒的触发条件或价格
#[utoipa::path(
    post,
    path = "/alerts/editAlert",
    tag = "价格提醒 (Alerts)",
    security(("bearer_jwt" = [])),
    request_body = EditAlertRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn edit_alert(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "editAlert", header, body, |req: EditAlertRequest, header| {
        state.providers.alerts.edit_alert(req, header)
    })
    .await
}

/// 删除价格提醒
#[utoipa::path(
    post,
    path = "/alerts/deleteAlert",
    tag = "价格提醒 (Alerts)",
    security(("bearer_jwt" = [])),
    request_body = AlertIdRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn delete_alert(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "deleteAlert", header, body, |req: AlertIdRequest, header| {
        state.providers.alerts.delete_alert(req, header)
    })
    .await
}

/// 查询客户的全部价格提醒
#[utoipa::path(
    post,
    path = "/alerts/getAlerts",
    tag = "价格提醒 (Alerts)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn get_alerts(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getAlerts", header, body, |req: ClientRequest, header| {
        state.providers.alerts.get_alerts(req, header)
    })
    .await
}

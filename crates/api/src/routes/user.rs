//! 客户资料查询与联系方式变更。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::user::entity::UpdateEmailRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(user_details))
        .routes(routes!(bank_details))
        .routes(routes!(update_email))
}

/// 查询客户基本信息
#[utoipa::path(
    post,
    path = "/user/getUserDetails",
    tag = "客户资料 (User)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn user_details(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getUserDetails", header, body, |req: ClientRequest, header| {
        state.providers.user.user_details(req, header)
    })
    .await
}

/// 查询客户银行账户
#[utoipa::path(
    post,
    path = "/user/getBankDetails",
    tag = "客户资料 (User)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn bank_details(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getBankDetails", header, body, |req: ClientRequest, header| {
        state.providers.user.bank_details(req, header)
    })
    .await
}

/// 变更邮箱
#[utoipa::path(
    post,
    path = "/user/updateEmail",
    tag = "客户资料 (User)",
    security(("bearer_jwt" = [])),
    request_body = UpdateEmailRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn update_email(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "updateEmail", header, body, |req: UpdateEmailRequest, header| {
        state.providers.user.update_email(req, header)
    })
    .await
}

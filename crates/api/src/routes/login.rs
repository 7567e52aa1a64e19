//! 登录、二次验证与密码管理。
//!
//! 日志中的密码与 PAN 均已脱敏。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::login::entity::{
    ForgotPasswordRequest,
    LoginRequest,
    SetPasswordRequest,
    TotpRequest,
};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(login))
        .routes(routes!(validate_totp))
        .routes(routes!(forgot_password))
        .routes(routes!(set_password))
        .routes(routes!(logout))
}

/// 账号密码登录
#[utoipa::path(
    post,
    path = "/login/login",
    tag = "登录 (Login)",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "login", header, body, |req: LoginRequest, header| {
        state.providers.login.login(req, header)
    })
    .await
}

/// 校验 6 位 TOTP
#[utoipa::path(
    post,
    path = "/login/validateTotp",
    tag = "登录 (Login)",
    request_body = TotpRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn validate_totp(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "validateTotp", header, body, |req: TotpRequest, header| {
        state.providers.login.validate_totp(req, header)
    })
    .await
}

/// 忘记密码，以 PAN 与出生日期验证身份
#[utoipa::path(
    post,
    path = "/login/forgotPassword",
    tag = "登录 (Login)",
    request_body = ForgotPasswordRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "forgotPassword", header, body, |req: ForgotPasswordRequest, header| {
        state.providers.login.forgot_password(req, header)
    })
    .await
}

/// 修改密码，新密码不能与旧密码相同
#[utoipa::path(
    post,
    path = "/login/setPassword",
    tag = "登录 (Login)",
    security(("bearer_jwt" = [])),
    request_body = SetPasswordRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn set_password(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "setPassword", header, body, |req: SetPasswordRequest, header| {
        state.providers.login.set_password(req, header)
    })
    .await
}

/// 登出
#[utoipa::path(
    post,
    path = "/login/logout",
    tag = "登录 (Login)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn logout(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "logout", header, body, |req: ClientRequest, header| {
        state.providers.login.logout(req, header)
    })
    .await
}

//! 第三方应用的 OAuth 授权码与 Token 接口，由登录 Provider 实现。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::login::entity::{OAuthAuthorizeRequest, OAuthTokenRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(authorize))
        .routes(routes!(token))
}

/// 为第三方应用签发授权码
#[utoipa::path(
    post,
    path = "/oauth/authorize",
    tag = "开放授权 (OAuth)",
    security(("bearer_jwt" = [])),
    request_body = OAuthAuthorizeRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn authorize(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "authorize", header, body, |req: OAuthAuthorizeRequest, header| {
        state.providers.login.authorize(req, header)
    })
    .await
}

/// 以授权码或刷新 Token 换取访问 Token
#[utoipa::path(
    post,
    path = "/oauth/token",
    tag = "开放授权 (OAuth)",
    request_body = OAuthTokenRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn token(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "token", header, body, |req: OAuthTokenRequest, header| {
        state.providers.login.token(req, header)
    })
    .await
}

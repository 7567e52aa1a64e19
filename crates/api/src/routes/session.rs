//! 登录会话查询与下线。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::session::entity::TerminateSessionsRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(session_info))
        .routes(routes!(terminate_sessions))
}

/// 查询客户的活跃会话
#[utoipa::path(
    post,
    path = "/session/getSessionInfo",
    tag = "会话 (Session)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn session_info(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getSessionInfo", header, body, |req: ClientRequest, header| {
        state.providers.session.session_info(req, header)
    })
    .await
}

/// 下线其它会话
#[utoipa::path(
    post,
    path = "/session/terminateSessions",
    tag = "会话 (Session)",
    security(("bearer_jwt" = [])),
    request_body = TerminateSessionsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn terminate_sessions(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "terminateSessions", header, body, |req: TerminateSessionsRequest, header| {
        state.providers.session.terminate_sessions(req, header)
    })
    .await
}

//! 股票定投计划。

use axum::extract::{Path, Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::{ClientQuery, ClientRequest};
use bourse_core::common::response::ApiRes;
use bourse_core::sip::entity::{CreateSipRequest, DeleteSipRequest, ModifySipRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_sip))
        .routes(routes!(modify_sip))
        .routes(routes!(delete_sip))
        .routes(routes!(fetch_sips))
}

/// 创建定投
///
/// 金额与数量二选一。
#[utoipa::path(
    post,
    path = "/sip/createSip",
    tag = "定投 (SIP)",
    security(("bearer_jwt" = [])),
    request_body = CreateSipRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn create_sip(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "createSip", header, body, |req: CreateSipRequest, header| {
        state.providers.sip.create_sip(req, header)
    })
    .await
}

/// 修改定投
#[utoipa::path(
    put,
    path = "/sip/modifySip",
    tag = "定投 (SIP)",
    security(("bearer_jwt" = [])),
    request_body = ModifySipRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn modify_sip(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "modifySip", header, body, |req: ModifySipRequest, header| {
        state.providers.sip.modify_sip(req, header)
    })
    .await
}

/// 删除定投
///
/// `sipId` 取自路径，`clientId` 取自查询串。
#[utoipa::path(
    delete,
    path = "/sip/deleteSip/{sipId}",
    tag = "定投 (SIP)",
    security(("bearer_jwt" = [])),
    params(
        ("sipId" = String, Path, description = "定投计划 ID"),
        ("clientId" = Option<String>, Query, description = "客户号")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn delete_sip(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    Path(sip_id): Path<String>,
    query: Result<Query<ClientQuery>, QueryRejection>,
) -> Response {
    let query = query.map(|Query(q)| Query(DeleteSipRequest::new(sip_id, q)));
    dispatch::query(&state, "deleteSip", header, query, |req: DeleteSipRequest, header| {
        state.providers.sip.delete_sip(req, header)
    })
    .await
}

/// 查询客户的定投计划
#[utoipa::path(
    post,
    path = "/sip/fetchSips",
    tag = "定投 (SIP)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn fetch_sips(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "fetchSips", header, body, |req: ClientRequest, header| {
        state.providers.sip.fetch_sips(req, header)
    })
    .await
}

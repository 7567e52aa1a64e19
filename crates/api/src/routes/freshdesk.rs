use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientPageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::freshdesk::entity::{CreateTicketRequest, ReplyTicketRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_ticket))
        .routes(routes!(tickets))
        .routes(routes!(reply_ticket))
}

/// 创建客服工单
#[utoipa::path(
    post,
    path = "/freshdesk/createTicket",
    tag = "客服工单 (Freshdesk)",
    security(("bearer_jwt" = [])),
    request_body = CreateTicketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn create_ticket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "createTicket", header, body, |req: CreateTicketRequest, header| {
        state.providers.freshdesk.create_ticket(req, header)
    })
    .await
}

/// 分页查询客户工单
#[utoipa::path(
    get,
    path = "/freshdesk/getTickets",
    tag = "客服工单 (Freshdesk)",
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
pub async fn tickets(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<ClientPageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "getTickets", header, query, |q: ClientPageQuery, header| {
        state.providers.freshdesk.tickets(q.into(), header)
    })
    .await
}

/// 回复工单
#[utoipa::path(
    post,
    path = "/freshdesk/replyTicket",
    tag = "客服工单 (Freshdesk)",
    security(("bearer_jwt" = [])),
    request_body = ReplyTicketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn reply_ticket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "replyTicket", header, body, |req: ReplyTicketRequest, header| {
        state.providers.freshdesk.reply_ticket(req, header)
    })
    .await
}

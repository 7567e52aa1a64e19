//! 自选股列表管理。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::ClientRequest;
use bourse_core::common::response::ApiRes;
use bourse_core::watchlist::entity::{
    CreateWatchlistRequest,
    RenameWatchlistRequest,
    WatchlistIdRequest,
    WatchlistScripsRequest,
};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_watchlist))
        .routes(routes!(rename_watchlist))
        .routes(routes!(delete_watchlist))
        .routes(routes!(add_scrips))
        .routes(routes!(delete_scrips))
        .routes(routes!(fetch_watchlists))
}

/// 新建自选列表
#[utoipa::path(
    post,
    path = "/watchlist/createWatchlist",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = CreateWatchlistRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn create_watchlist(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "createWatchlist", header, body, |req: CreateWatchlistRequest, header| {
        state.providers.watchlist.create(req, header)
    })
    .await
}

/// 重命名自选列表
#[utoipa::path(
    post,
    path = "/watchlist/renameWatchlist",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = RenameWatchlistRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn rename_watchlist(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "renameWatchlist", header, body, |req: RenameWatchlistRequest, header| {
        state.providers.watchlist.rename(req, header)
    })
    .await
}

/// 删除自选列表
#[utoipa::path(
    post,
    path = "/watchlist/deleteWatchlist",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = WatchlistIdRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn delete_watchlist(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "deleteWatchlist", header, body, |req: WatchlistIdRequest, header| {
        state.providers.watchlist.delete(req, header)
    })
    .await
}

/// 批量添加自选证券
#[utoipa::path(
    post,
    path = "/watchlist/addScrips",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = WatchlistScripsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn add_scrips(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "addScrips", header, body, |req: WatchlistScripsRequest, header| {
        state.providers.watchlist.add_scrips(req, header)
    })
    .await
}

/// 批量删除自选证券
#[utoipa::path(
    post,
    path = "/watchlist/deleteScrips",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = WatchlistScripsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn delete_scrips(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "deleteScrips", header, body, |req: WatchlistScripsRequest, header| {
        state.providers.watchlist.delete_scrips(req, header)
    })
    .await
}

/// 查询客户的全部自选列表
#[utoipa::path(
    post,
    path = "/watchlist/fetchWatchlists",
    tag = "自选股 (Watchlist)",
    security(("bearer_jwt" = [])),
    request_body = ClientRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn fetch_watchlists(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "fetchWatchlists", header, body, |req: ClientRequest, header| {
        state.providers.watchlist.fetch(req, header)
    })
    .await
}

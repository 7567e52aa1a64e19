use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::PageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::collections::entity::CollectionDetailsRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(get_collections))
        .routes(routes!(collection_details))
}

/// 分页查询主题合集
#[utoipa::path(
    get,
    path = "/collections/getCollections",
    tag = "主题合集 (Collections)",
    params(
        ("page" = Option<String>, Query, description = "页码，缺省 1"),
        ("size" = Option<String>, Query, description = "每页条数，缺省 10，上限 100")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn get_collections(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "getCollections", header, query, |q: PageQuery, header| {
        state.providers.collections.get_collections(q.pagination(), header)
    })
    .await
}

/// 主题合集详情
#[utoipa::path(
    post,
    path = "/collections/getCollectionDetails",
    tag = "主题合集 (Collections)",
    request_body = CollectionDetailsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn collection_details(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getCollectionDetails", header, body, |req: CollectionDetailsRequest, header| {
        state.providers.collections.collection_details(req, header)
    })
    .await
}

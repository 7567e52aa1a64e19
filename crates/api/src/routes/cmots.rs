//! 上市公司基本面资料与资讯。

use axum::extract::{Query, State};
use axum::extract::rejection::QueryRejection;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::PageQuery;
use bourse_core::common::response::ApiRes;
use bourse_core::cmots::entity::{CompanyQuery, FinancialsRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(company_profile))
        .routes(routes!(shareholding))
        .routes(routes!(financials))
        .routes(routes!(news))
}

/// 公司概况
#[utoipa::path(
    get,
    path = "/cmots/companyProfile",
    tag = "公司资料 (Cmots)",
    params(
        ("coCode" = Option<String>, Query, description = "公司代码")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn company_profile(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<CompanyQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "companyProfile", header, query, |q: CompanyQuery, header| {
        state.providers.cmots.company_profile(q.into(), header)
    })
    .await
}

/// 股东结构
#[utoipa::path(
    get,
    path = "/cmots/shareholding",
    tag = "公司资料 (Cmots)",
    params(
        ("coCode" = Option<String>, Query, description = "公司代码")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn shareholding(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<CompanyQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "shareholding", header, query, |q: CompanyQuery, header| {
        state.providers.cmots.shareholding(q.into(), header)
    })
    .await
}

/// 财务报表
#[utoipa::path(
    post,
    path = "/cmots/financials",
    tag = "公司资料 (Cmots)",
    request_body = FinancialsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn financials(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "financials", header, body, |req: FinancialsRequest, header| {
        state.providers.cmots.financials(req, header)
    })
    .await
}

/// 市场资讯
///
/// 分页参数非法时回落为第 1 页、每页 10 条。
#[utoipa::path(
    get,
    path = "/cmots/news",
    tag = "公司资料 (Cmots)",
    params(
        ("page" = Option<String>, Query, description = "页码，缺省 1"),
        ("size" = Option<String>, Query, description = "每页条数，缺省 10，上限 100")
    ),
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn news(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Response {
    dispatch::query(&state, "news", header, query, |q: PageQuery, header| {
        state.providers.cmots.news(q.pagination(), header)
    })
    .await
}

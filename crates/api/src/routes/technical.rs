use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::technical::entity::IndicatorRequest;

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(indicators))
}

/// 计算技术指标
#[utoipa::path(
    post,
    path = "/technicalIndicators/getIndicators",
    tag = "技术指标 (Technical)",
    request_body = IndicatorRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn indicators(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getIndicators", header, body, |req: IndicatorRequest, header| {
        state.providers.technical.indicators(req, header)
    })
    .await
}

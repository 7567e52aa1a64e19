//! 交易费用试算。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::charges::entity::{BrokerageChargesRequest, CombinedChargesRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(brokerage_charges))
        .routes(routes!(combined_charges))
}

/// 单笔交易的佣金与税费试算
#[utoipa::path(
    post,
    path = "/charges/brokerageCharges",
    tag = "费用试算 (Charges)",
    security(("bearer_jwt" = [])),
    request_body = BrokerageChargesRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn brokerage_charges(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "brokerageCharges", header, body, |req: BrokerageChargesRequest, header| {
        state.providers.charges.brokerage_charges(req, header)
    })
    .await
}

/// 多笔交易合并试算
#[utoipa::path(
    post,
    path = "/charges/combinedCharges",
    tag = "费用试算 (Charges)",
    security(("bearer_jwt" = [])),
    request_body = CombinedChargesRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes),
        (status = 401, description = "Token 无效", body = ApiRes),
        (status = 403, description = "客户号与 Token 不匹配", body = ApiRes)
    )
)]
pub async fn combined_charges(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "combinedCharges", header, body, |req: CombinedChargesRequest, header| {
        state.providers.charges.combined_charges(req, header)
    })
    .await
}

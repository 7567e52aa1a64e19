//! 期权链与到期日查询。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::option_chain::entity::{ExpiryRequest, OptionChainRequest};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(option_chain))
        .routes(routes!(expiries))
}

/// 查询期权链
#[utoipa::path(
    post,
    path = "/optionChain/getOptionChain",
    tag = "期权链 (Option Chain)",
    request_body = OptionChainRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn option_chain(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getOptionChain", header, body, |req: OptionChainRequest, header| {
        state.providers.option_chain.option_chain(req, header)
    })
    .await
}

/// 查询标的的可选到期日
#[utoipa::path(
    post,
    path = "/optionChain/getExpiries",
    tag = "期权链 (Option Chain)",
    request_body = ExpiryRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn expiries(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "getExpiries", header, body, |req: ExpiryRequest, header| {
        state.providers.option_chain.expiries(req, header)
    })
    .await
}

//! 篮子订单管理。
//!
//! 篮子接口以 `LoginID` 标识用户，沿用 PascalCase 字段命名，不做客户鉴权。

use axum::extract::State;
use axum::response::Response;
use bytes::Bytes;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use bourse_core::common::response::ApiRes;
use bourse_core::basket::entity::{
    BasketIdRequest,
    BasketInstrumentRequest,
    CreateBasketRequest,
    DeleteInstrumentRequest,
    FetchBasketsRequest,
    RenameBasketRequest,
};

use crate::dispatch;
use crate::middleware::header::HeaderContext;
use crate::server::AppState;

pub fn router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(create_basket))
        .routes(routes!(rename_basket))
        .routes(routes!(delete_basket))
        .routes(routes!(fetch_baskets))
        .routes(routes!(add_instrument))
        .routes(routes!(delete_instrument))
        .routes(routes!(execute_basket))
}

/// 创建篮子
///
/// 名称长度超出 1..=30 时返回 `INVALID NAME LENGTH`。
#[utoipa::path(
    post,
    path = "/basket/createBasket",
    tag = "篮子下单 (Basket)",
    request_body = CreateBasketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn create_basket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "createBasket", header, body, |req: CreateBasketRequest, header| {
        state.providers.basket.create_basket(req, header)
    })
    .await
}

/// 重命名篮子
#[utoipa::path(
    post,
    path = "/basket/renameBasket",
    tag = "篮子下单 (Basket)",
    request_body = RenameBasketRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn rename_basket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "renameBasket", header, body, |req: RenameBasketRequest, header| {
        state.providers.basket.rename_basket(req, header)
    })
    .await
}

/// 删除篮子
#[utoipa::path(
    post,
    path = "/basket/deleteBasket",
    tag = "篮子下单 (Basket)",
    request_body = BasketIdRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn delete_basket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "deleteBasket", header, body, |req: BasketIdRequest, header| {
        state.providers.basket.delete_basket(req, header)
    })
    .await
}

/// 查询用户的篮子列表
#[utoipa::path(
    post,
    path = "/basket/fetchBaskets",
    tag = "篮子下单 (Basket)",
    request_body = FetchBasketsRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn fetch_baskets(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "fetchBaskets", header, body, |req: FetchBasketsRequest, header| {
        state.providers.basket.fetch_baskets(req, header)
    })
    .await
}

/// 向篮子添加合约
#[utoipa::path(
    post,
    path = "/basket/addInstrument",
    tag = "篮子下单 (Basket)",
    request_body = BasketInstrumentRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn add_instrument(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "addInstrument", header, body, |req: BasketInstrumentRequest, header| {
        state.providers.basket.add_instrument(req, header)
    })
    .await
}

/// 从篮子移除合约
#[utoipa::path(
    post,
    path = "/basket/deleteInstrument",
    tag = "篮子下单 (Basket)",
    request_body = DeleteInstrumentRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn delete_instrument(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "deleteInstrument", header, body, |req: DeleteInstrumentRequest, header| {
        state.providers.basket.delete_instrument(req, header)
    })
    .await
}

/// 一键执行篮子内全部订单
#[utoipa::path(
    post,
    path = "/basket/executeBasket",
    tag = "篮子下单 (Basket)",
    request_body = BasketIdRequest,
    responses(
        (status = 200, description = "Provider 响应原样返回", body = ApiRes),
        (status = 400, description = "请求不合法或设备类型缺失", body = ApiRes)
    )
)]
pub async fn execute_basket(
    State(state): State<AppState>,
    HeaderContext(header): HeaderContext,
    body: Bytes,
) -> Response {
    dispatch::json(&state, "executeBasket", header, body, |req: BasketIdRequest, header| {
        state.providers.basket.execute_basket(req, header)
    })
    .await
}

//! # 请求守卫链
//!
//! 所有 Handler 共用的调度流程:
//! 解码 → 请求头 → 设备类型 → 字段校验 → 业务前置检查 → 客户鉴权 → Provider → 信封响应。
//! 任一步失败立即以对应的错误信封结束请求，不会触达 Provider。

use std::future::Future;

use axum::extract::Query;
use axum::extract::rejection::QueryRejection;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use bourse_core::common::guard::Guarded;
use bourse_core::common::header::RequestHeader;
use bourse_core::common::response::Reply;

use crate::error::{ApiError, reply_response};
use crate::server::AppState;

/// # Summary
/// 以 JSON 请求体为输入执行守卫链。
///
/// # Arguments
/// * `function` - 接口名，写入日志。
/// * `header` - 中间件注入的请求头上下文。
/// * `body` - 原始请求体，缺失或非法 JSON 一律视为 `INVALID REQUEST`。
/// * `call` - 守卫全部通过后调用的 Provider 方法。
pub async fn json<T, F, Fut>(
    state: &AppState,
    function: &'static str,
    header: Option<RequestHeader>,
    body: Bytes,
    call: F,
) -> Response
where
    T: DeserializeOwned + Guarded,
    F: FnOnce(T, RequestHeader) -> Fut,
    Fut: Future<Output = Reply>,
{
    match serde_json::from_slice::<T>(&body) {
        Ok(req) => run(state, function, header, req, call).await,
        Err(e) => reject(function, header.as_ref(), ApiError::Decode(e.to_string())),
    }
}

/// # Summary
/// 以查询串为输入执行守卫链。
///
/// # Logic
/// 查询结构的字段均为可选文本，解码几乎不会失败；
/// 必填参数的缺失由 [`Guarded::check`] 在设备类型检查之后判定。
pub async fn query<T, F, Fut>(
    state: &AppState,
    function: &'static str,
    header: Option<RequestHeader>,
    query: Result<Query<T>, QueryRejection>,
    call: F,
) -> Response
where
    T: Guarded,
    F: FnOnce(T, RequestHeader) -> Fut,
    Fut: Future<Output = Reply>,
{
    match query {
        Ok(Query(req)) => run(state, function, header, req, call).await,
        Err(e) => reject(function, header.as_ref(), ApiError::Decode(e.body_text())),
    }
}

async fn run<T, F, Fut>(
    state: &AppState,
    function: &'static str,
    header: Option<RequestHeader>,
    req: T,
    call: F,
) -> Response
where
    T: Guarded,
    F: FnOnce(T, RequestHeader) -> Fut,
    Fut: Future<Output = Reply>,
{
    let header = match admit(state, header, &req).await {
        Ok(header) => header,
        Err((header, e)) => return reject(function, header.as_ref(), e),
    };

    let client_id = req
        .client_id()
        .map_or_else(|| header.client_id.clone(), str::to_string);
    let summary = req.summary().unwrap_or_default();
    tracing::info!(
        client_id = %client_id,
        function,
        request_id = %header.request_id,
        summary = %summary,
        "dispatching to provider"
    );

    let reply = call(req, header).await;
    reply_response(reply)
}

/// 依次执行请求头、校验与鉴权守卫，失败时连同请求头一起返回以便记录日志
async fn admit<T: Guarded>(
    state: &AppState,
    header: Option<RequestHeader>,
    req: &T,
) -> Result<RequestHeader, (Option<RequestHeader>, ApiError)> {
    let Some(header) = header else {
        return Err((None, ApiError::MissingHeader));
    };
    if let Err(e) = check(state, &header, req).await {
        return Err((Some(header), e));
    }
    Ok(header)
}

async fn check<T: Guarded>(state: &AppState, header: &RequestHeader, req: &T) -> Result<(), ApiError> {
    if !header.has_device_type() {
        return Err(ApiError::InvalidDeviceType);
    }
    req.validate()?;
    req.check()?;

    if let Some(client_id) = req.client_id() {
        let outcome = state
            .authenticator
            .check_auth_with_client(client_id, &header.authorization)
            .await;
        if !outcome.token_valid {
            return Err(ApiError::InvalidToken);
        }
        if !outcome.client_matches {
            return Err(ApiError::ClientMismatch);
        }
    }
    Ok(())
}

fn reject(function: &'static str, header: Option<&RequestHeader>, err: ApiError) -> Response {
    let request_id = header.map(|h| h.request_id.as_str()).unwrap_or_default();
    tracing::warn!(function, request_id, error = %err, "request rejected");
    err.into_response()
}

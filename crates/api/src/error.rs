//! # API 统一错误处理
//!
//! 守卫链中每一步的失败都映射为固定的错误目录项，
//! 以统一的 `ApiRes` 信封与对应 HTTP 状态码返回。

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use validify::ValidationErrors;

use bourse_core::common::guard::Rejection;
use bourse_core::common::response::{ApiRes, ErrorKind, Reply};

/// 守卫链错误枚举
#[derive(Error, Debug)]
pub enum ApiError {
    /// 请求体或查询串无法解码 (400)
    #[error("请求解码失败: {0}")]
    Decode(String),

    /// 请求头上下文缺失 (400)
    #[error("请求头上下文缺失")]
    MissingHeader,

    /// 设备类型为空 (400)
    #[error("设备类型为空")]
    InvalidDeviceType,

    /// 字段校验失败 (400)
    #[error("字段校验失败: {0}")]
    Validation(#[from] ValidationErrors),

    /// 业务前置检查失败 (400)
    #[error(transparent)]
    Rejected(#[from] Rejection),

    /// Token 无效或已过期 (401)
    #[error("Token 无效")]
    InvalidToken,

    /// Token 与请求客户号不一致 (403)
    #[error("客户号与 Token 不匹配")]
    ClientMismatch,
}

impl ApiError {
    /// 对应的错误目录项
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Decode(_) | ApiError::Validation(_) => ErrorKind::InvalidRequest,
            ApiError::MissingHeader | ApiError::InvalidDeviceType => ErrorKind::InvalidDeviceType,
            ApiError::Rejected(Rejection::InvalidNameLength { .. }) => ErrorKind::InvalidNameLength,
            ApiError::Rejected(Rejection::InvalidRequest(_)) => ErrorKind::InvalidRequest,
            ApiError::InvalidToken => ErrorKind::InvalidToken,
            ApiError::ClientMismatch => ErrorKind::MismatchAuthClient,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        reply_response(self.kind().reply())
    }
}

/// # Summary
/// 将 Provider 返回的 `(code, ApiRes)` 原样写回客户端。
///
/// # Logic
/// 状态码不在合法范围内时改写为 500，信封保持不变。
pub fn reply_response((code, res): Reply) -> Response {
    let status = StatusCode::from_u16(code).unwrap_or_else(|_| {
        tracing::error!(code, "Provider 返回了非法状态码");
        StatusCode::INTERNAL_SERVER_ERROR
    });
    (status, Json(res)).into_response()
}

/// 进程内 panic 被最外层捕获后的兜底响应
pub fn internal_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiRes::failure(ErrorKind::Internal)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_kinds() {
        let err = ApiError::from(Rejection::InvalidNameLength { min: 1, max: 30 });
        assert_eq!(err.kind(), ErrorKind::InvalidNameLength);

        let err = ApiError::from(Rejection::InvalidRequest("price".into()));
        assert_eq!(err.kind(), ErrorKind::InvalidRequest);
    }

    #[test]
    fn test_missing_header_reads_as_device_type() {
        assert_eq!(ApiError::MissingHeader.kind(), ErrorKind::InvalidDeviceType);
        assert_eq!(ApiError::ClientMismatch.into_response().status(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::InvalidToken.into_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_reply_status_is_kept_or_replaced() {
        let res = reply_response((202, ApiRes::success()));
        assert_eq!(res.status(), StatusCode::ACCEPTED);

        let res = reply_response((42, ApiRes::success()));
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

/// Provider 返回值: (HTTP 状态码, 响应信封)
pub type Reply = (u16, ApiRes);

/// # Summary
/// 全部接口统一的 JSON 响应信封。
///
/// # Invariants
/// - 序列化字段顺序固定为 `status, message, errorcode, data`。
/// - `data` 缺省时序列化为 `null`，不会被省略。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiRes {
    /// 是否成功
    pub status: bool,
    /// 人类可读的结果描述
    #[schema(example = "SUCCESS")]
    pub message: String,
    /// 机器可读错误码，成功时为空串
    #[schema(example = "")]
    pub errorcode: String,
    /// 业务数据载荷
    #[schema(value_type = Option<Object>)]
    pub data: Option<Value>,
}

impl ApiRes {
    /// 无载荷的成功信封
    pub fn success() -> Self {
        Self {
            status: true,
            message: "SUCCESS".to_string(),
            errorcode: String::new(),
            data: None,
        }
    }

    /// 携带载荷的成功信封
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::success()
        }
    }

    /// 按错误目录构建失败信封
    pub fn failure(kind: ErrorKind) -> Self {
        Self {
            status: false,
            message: kind.message().to_string(),
            errorcode: kind.code().to_string(),
            data: None,
        }
    }
}

/// # Summary
/// 本层可产生的错误目录，每一项绑定固定的 HTTP 状态码、消息与错误码。
///
/// # Invariants
/// - `P11017` 与 `P11034` 为客户端已依赖的既有错误码，不可修改。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRequest,
    InvalidDeviceType,
    InvalidNameLength,
    InvalidToken,
    MismatchAuthClient,
    Internal,
    UpstreamUnavailable,
}

impl ErrorKind {
    pub fn status(self) -> u16 {
        match self {
            ErrorKind::InvalidRequest
            | ErrorKind::InvalidDeviceType
            | ErrorKind::InvalidNameLength => 400,
            ErrorKind::InvalidToken => 401,
            ErrorKind::MismatchAuthClient => 403,
            ErrorKind::Internal => 500,
            ErrorKind::UpstreamUnavailable => 502,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "INVALID REQUEST",
            ErrorKind::InvalidDeviceType => "INVALID DEVICE TYPE",
            ErrorKind::InvalidNameLength => "INVALID NAME LENGTH",
            ErrorKind::InvalidToken => "INVALID TOKEN",
            ErrorKind::MismatchAuthClient => "CLIENT ID MISMATCH WITH TOKEN",
            ErrorKind::Internal => "INTERNAL SERVER ERROR",
            ErrorKind::UpstreamUnavailable => "UPSTREAM SERVICE UNAVAILABLE",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            ErrorKind::InvalidRequest => "P11017",
            ErrorKind::InvalidDeviceType => "P11034",
            ErrorKind::InvalidNameLength => "P11040",
            ErrorKind::InvalidToken => "P11002",
            ErrorKind::MismatchAuthClient => "P11003",
            ErrorKind::Internal => "P10000",
            ErrorKind::UpstreamUnavailable => "P10001",
        }
    }

    /// 直接构造 Provider 风格的返回值
    pub fn reply(self) -> Reply {
        (self.status(), ApiRes::failure(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_wire_shape() {
        let body = serde_json::to_string(&ApiRes::failure(ErrorKind::InvalidRequest)).unwrap();
        assert_eq!(
            body,
            r#"{"status":false,"message":"INVALID REQUEST","errorcode":"P11017","data":null}"#
        );

        let body = serde_json::to_string(&ApiRes::success()).unwrap();
        assert_eq!(body, r#"{"status":true,"message":"SUCCESS","errorcode":"","data":null}"#);
    }

    #[test]
    fn test_with_data_keeps_success_fields() {
        let res = ApiRes::with_data(serde_json::json!({"basketId": 7}));
        assert!(res.status);
        assert_eq!(res.message, "SUCCESS");
        assert_eq!(res.data, Some(serde_json::json!({"basketId": 7})));
    }

    #[test]
    fn test_device_type_reply() {
        let (code, res) = ErrorKind::InvalidDeviceType.reply();
        assert_eq!(code, 400);
        assert_eq!(res.errorcode, "P11034");
        assert_eq!(res.message, "INVALID DEVICE TYPE");
    }
}

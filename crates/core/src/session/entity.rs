use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::Guarded;

/// 下线客户的其它登录会话
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TerminateSessionsRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    /// 是否保留发起请求的当前会话
    #[serde(default = "keep_current_default")]
    pub keep_current: bool,
}

fn keep_current_default() -> bool {
    true
}

impl Guarded for TerminateSessionsRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keep_current_defaults_to_true() {
        let req: TerminateSessionsRequest =
            serde_json::from_str(r#"{"clientId":"AB1234"}"#).unwrap();
        assert!(req.keep_current);
    }
}

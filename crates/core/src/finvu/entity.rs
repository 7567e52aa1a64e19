use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, digits};
use crate::common::mask::mask;

/// # Summary
/// 账户聚合 (Finvu AA) 数据授权申请。
///
/// # Invariants
/// - `mobile` 为 10 位数字，日志中仅保留末 4 位。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "9876543210")]
    pub mobile: String,
    pub purpose: Option<String>,
}

impl Guarded for ConsentRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        digits("mobile", &self.mobile, 10)
    }

    fn summary(&self) -> Option<String> {
        Some(format!("mobile={}", mask(&self.mobile, 4)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConsentStatusRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub consent_handle: String,
}

impl Guarded for ConsentStatusRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FetchStatementRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 64))]
    pub consent_id: String,
    pub session_id: Option<String>,
}

impl Guarded for FetchStatementRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consent_mobile() {
        let mut req = ConsentRequest {
            client_id: "AB1234".into(),
            mobile: "9876543210".into(),
            purpose: None,
        };
        assert!(req.check().is_ok());
        assert_eq!(req.summary().as_deref(), Some("mobile=******3210"));

        req.mobile = "+919876543210".into();
        assert!(req.check().is_err());
    }
}

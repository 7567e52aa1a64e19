use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection};

/// 设置默认 UPI 收付款地址 (VPA)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpiPreferenceRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[schema(example = "trader@okaxis")]
    #[validate(length(min = 3, max = 100))]
    pub upi_id: String,
    pub app: Option<String>,
}

impl Guarded for UpiPreferenceRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        if is_vpa(&self.upi_id) {
            Ok(())
        } else {
            Err(Rejection::InvalidRequest(format!("upiId is not a VPA: {:?}", self.upi_id)))
        }
    }
}

/// VPA: `handle@psp`，两段均非空且不含空白
fn is_vpa(value: &str) -> bool {
    match value.split_once('@') {
        Some((handle, psp)) => {
            !handle.is_empty()
                && !psp.is_empty()
                && !psp.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vpa_shape() {
        assert!(is_vpa("trader@okaxis"));
        assert!(!is_vpa("trader"));
        assert!(!is_vpa("@okaxis"));
        assert!(!is_vpa("trader@"));
        assert!(!is_vpa("tra der@okaxis"));
        assert!(!is_vpa("a@b@c"));
    }
}

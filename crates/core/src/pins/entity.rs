use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection};

pub const MAX_PIN_POSITION: u32 = 10;

/// 置顶一只证券到指定位置
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PinRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
    #[schema(example = 1)]
    pub position: u32,
}

impl Guarded for PinRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        if (1..=MAX_PIN_POSITION).contains(&self.position) {
            Ok(())
        } else {
            Err(Rejection::InvalidRequest(format!(
                "position must be 1..={MAX_PIN_POSITION}, got {}",
                self.position
            )))
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UnpinRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
}

impl Guarded for UnpinRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

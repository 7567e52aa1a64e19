use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::Guarded;

/// 查询证券的交易所风险提示 (ASM/GSM 等)
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScripWarningRequest {
    #[validate(length(min = 1, max = 10))]
    pub exchange: String,
    #[validate(length(min = 1, max = 20))]
    pub token: String,
}

impl Guarded for ScripWarningRequest {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AcknowledgeWarningRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub warning_id: String,
}

impl Guarded for AcknowledgeWarningRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

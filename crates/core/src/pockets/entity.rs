use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection, positive};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PocketIdRequest {
    #[schema(example = "it-leaders")]
    #[validate(length(min = 1, max = 40))]
    pub pocket_id: String,
}

impl Guarded for PocketIdRequest {}

/// # Summary
/// 按金额申购一个主题组合 (Pocket)。
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BuyPocketRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub pocket_id: String,
    #[schema(example = 25000.0)]
    pub amount: f64,
}

impl Guarded for BuyPocketRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }

    fn check(&self) -> Result<(), Rejection> {
        positive("amount", self.amount)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExitPocketRequest {
    #[validate(length(min = 1, max = 20))]
    pub client_id: String,
    #[validate(length(min = 1, max = 40))]
    pub pocket_id: String,
}

impl Guarded for ExitPocketRequest {
    fn client_id(&self) -> Option<&str> {
        Some(&self.client_id)
    }
}

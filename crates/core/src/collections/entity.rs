use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::Guarded;

/// 精选股票组合详情请求
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CollectionDetailsRequest {
    #[schema(example = "top-dividend")]
    #[validate(length(min = 1, max = 40))]
    pub collection_id: String,
}

impl Guarded for CollectionDetailsRequest {}

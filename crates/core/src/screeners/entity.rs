use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validify::Validate;

use crate::common::guard::{Guarded, Rejection};
use crate::common::paging::MAX_PAGE_SIZE;

/// 运行一个选股器；请求体中的分页字段为可选整数
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RunScreenerRequest {
    #[schema(example = "52w-high")]
    #[validate(length(min = 1, max = 40))]
    pub screener_id: String,
    pub exchange: Option<String>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl Guarded for RunScreenerRequest {
    fn check(&self) -> Result<(), Rejection> {
        if self.page == Some(0) {
            return Err(Rejection::InvalidRequest("page must be >= 1".to_string()));
        }
        match self.size {
            Some(size) if !(1..=MAX_PAGE_SIZE).contains(&size) => Err(Rejection::InvalidRequest(
                format!("size must be 1..={MAX_PAGE_SIZE}"),
            )),
            _ => Ok(()),
        }
    }
}

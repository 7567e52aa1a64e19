use async_trait::async_trait;

use super::entity::IndicatorRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 技术指标接口
#[async_trait]
pub trait TechnicalIndicatorProvider: Send + Sync {
    async fn indicators(&self, req: IndicatorRequest, header: RequestHeader) -> Reply;
}

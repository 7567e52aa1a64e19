use async_trait::async_trait;

use super::entity::{ExpiryRequest, OptionChainRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 期权链行情接口，公开数据不做客户鉴权
#[async_trait]
pub trait OptionChainProvider: Send + Sync {
    async fn option_chain(&self, req: OptionChainRequest, header: RequestHeader) -> Reply;

    async fn expiries(&self, req: ExpiryRequest, header: RequestHeader) -> Reply;
}

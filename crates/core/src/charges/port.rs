use async_trait::async_trait;

use super::entity::{BrokerageChargesRequest, CombinedChargesRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 经纪费用与税费估算接口。
#[async_trait]
pub trait ChargesProvider: Send + Sync {
    async fn brokerage_charges(&self, req: BrokerageChargesRequest, header: RequestHeader)
    -> Reply;

    async fn combined_charges(&self, req: CombinedChargesRequest, header: RequestHeader) -> Reply;
}

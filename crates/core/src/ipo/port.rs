use async_trait::async_trait;

use super::entity::{IpoCancelRequest, IpoOrderRequest, IpoStageRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// IPO 浏览与申购接口。
#[async_trait]
pub trait IpoProvider: Send + Sync {
    async fn fetch_ipos(&self, req: IpoStageRequest, header: RequestHeader) -> Reply;

    async fn place_order(&self, req: IpoOrderRequest, header: RequestHeader) -> Reply;

    async fn cancel_order(&self, req: IpoCancelRequest, header: RequestHeader) -> Reply;

    async fn order_book(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}

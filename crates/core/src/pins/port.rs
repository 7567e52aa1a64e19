use async_trait::async_trait;

use super::entity::{PinRequest, UnpinRequest};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 行情页置顶证券接口
#[async_trait]
pub trait PinsProvider: Send + Sync {
    async fn pin(&self, req: PinRequest, header: RequestHeader) -> Reply;

    async fn unpin(&self, req: UnpinRequest, header: RequestHeader) -> Reply;

    async fn fetch_pins(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}

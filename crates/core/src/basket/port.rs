use async_trait::async_trait;

use super::entity::{
    BasketIdRequest, BasketInstrumentRequest, CreateBasketRequest, DeleteInstrumentRequest,
    FetchBasketsRequest, RenameBasketRequest,
};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 篮子下单业务接口: 篮子的增删改查与整体执行。
#[async_trait]
pub trait BasketProvider: Send + Sync {
    async fn create_basket(&self, req: CreateBasketRequest, header: RequestHeader) -> Reply;

    async fn rename_basket(&self, req: RenameBasketRequest, header: RequestHeader) -> Reply;

    async fn delete_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply;

    async fn fetch_baskets(&self, req: FetchBasketsRequest, header: RequestHeader) -> Reply;

    async fn add_instrument(&self, req: BasketInstrumentRequest, header: RequestHeader) -> Reply;

    async fn delete_instrument(&self, req: DeleteInstrumentRequest, header: RequestHeader)
    -> Reply;

    /// 按篮子内全部委托一次性下单
    async fn execute_basket(&self, req: BasketIdRequest, header: RequestHeader) -> Reply;
}

use async_trait::async_trait;

use super::entity::{BuyPocketRequest, ExitPocketRequest, PocketIdRequest};
use crate::common::header::RequestHeader;
use crate::common::paging::Pagination;
use crate::common::response::Reply;

/// # Summary
/// 主题组合 (Pockets) 浏览与申购接口。
///
/// # Invariants
/// - 浏览类接口公开，申购与退出要求客户鉴权。
#[async_trait]
pub trait PocketsProvider: Send + Sync {
    async fn fetch_pockets(&self, req: Pagination, header: RequestHeader) -> Reply;

    async fn pocket_details(&self, req: PocketIdRequest, header: RequestHeader) -> Reply;

    async fn buy_pocket(&self, req: BuyPocketRequest, header: RequestHeader) -> Reply;

    async fn exit_pocket(&self, req: ExitPocketRequest, header: RequestHeader) -> Reply;
}

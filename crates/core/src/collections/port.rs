use async_trait::async_trait;

use super::entity::CollectionDetailsRequest;
use crate::common::header::RequestHeader;
use crate::common::paging::Pagination;
use crate::common::response::Reply;

/// 精选股票组合 (Collections) 浏览接口
#[async_trait]
pub trait CollectionsProvider: Send + Sync {
    async fn get_collections(&self, req: Pagination, header: RequestHeader) -> Reply;

    async fn collection_details(&self, req: CollectionDetailsRequest, header: RequestHeader)
    -> Reply;
}

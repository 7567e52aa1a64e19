use async_trait::async_trait;

use super::entity::{
    CreateWatchlistRequest, RenameWatchlistRequest, WatchlistIdRequest, WatchlistScripsRequest,
};
use crate::common::ClientRequest;
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// # Summary
/// 自选股列表接口。
///
/// # Invariants
/// - 全部操作要求 Token 属于请求中的客户。
#[async_trait]
pub trait WatchlistProvider: Send + Sync {
    async fn create(&self, req: CreateWatchlistRequest, header: RequestHeader) -> Reply;

    async fn rename(&self, req: RenameWatchlistRequest, header: RequestHeader) -> Reply;

    async fn delete(&self, req: WatchlistIdRequest, header: RequestHeader) -> Reply;

    async fn add_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply;

    async fn delete_scrips(&self, req: WatchlistScripsRequest, header: RequestHeader) -> Reply;

    async fn fetch(&self, req: ClientRequest, header: RequestHeader) -> Reply;
}

use async_trait::async_trait;

use super::entity::{MarkReadRequest, NotificationsRequest, RegisterDeviceRequest};
use crate::common::header::RequestHeader;
use crate::common::response::Reply;

/// 站内通知与推送设备接口
#[async_trait]
pub trait NotificationProvider: Send + Sync {
    async fn notifications(&self, req: NotificationsRequest, header: RequestHeader) -> Reply;

    async fn mark_read(&self, req: MarkReadRequest, header: RequestHeader) -> Reply;

    async fn register_device(&self, req: RegisterDeviceRequest, header: RequestHeader) -> Reply;
}

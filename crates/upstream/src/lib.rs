//! # `bourse-upstream` - 业务服务转发层
//!
//! 以 HTTP JSON 调用实现 `bourse-core` 中的全部 Provider 接口，
//! 把控制器层收到的请求连同请求头上下文转发给真正的业务服务。

pub mod error;
pub mod providers;
pub mod remote;

pub use error::UpstreamError;
pub use remote::RemoteBackend;

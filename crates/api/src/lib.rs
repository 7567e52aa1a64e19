//! # `bourse-api` - HTTP 控制器层
//!
//! 本 crate 是 Bourse 券商网关的 HTTP/REST 服务入口。
//! 使用 `axum` 构建路由与控制器，通过 `utoipa` 自动生成 OpenAPI 3.0 Swagger 文档。
//!
//! ## 架构职责
//! - 解析约定的请求头，构建请求上下文
//! - 对每个请求执行统一的守卫链 (解码、设备类型、校验、客户鉴权)
//! - 调用启动时注入的各业务域 Provider，并原样返回其响应信封

pub mod dispatch;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;

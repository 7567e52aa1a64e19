//! # `bourse-core` - 券商网关领域层
//!
//! 定义控制器层与业务服务之间的全部契约:
//! 请求头上下文、统一响应信封、分页与日期范围、脱敏、请求守卫，
//! 以及每个业务域的请求实体 (`entity`) 与 Provider 接口 (`port`)。
//!
//! 本 crate 不包含任何业务实现，Provider 由上层在启动时注入。

pub mod backend;
pub mod common;
pub mod config;

pub mod auth {
    pub mod port;
}

pub mod alerts {
    pub mod entity;
    pub mod port;
}

pub mod basket {
    pub mod entity;
    pub mod port;
}

pub mod charges {
    pub mod entity;
    pub mod port;
}

pub mod cmots {
    pub mod entity;
    pub mod port;
}

pub mod collections {
    pub mod entity;
    pub mod port;
}

pub mod edis {
    pub mod entity;
    pub mod port;
}

pub mod epledge {
    pub mod entity;
    pub mod port;
}

pub mod finvu {
    pub mod entity;
    pub mod port;
}

pub mod freshdesk {
    pub mod entity;
    pub mod port;
}

pub mod ipo {
    pub mod entity;
    pub mod port;
}

pub mod login {
    pub mod entity;
    pub mod port;
}

pub mod notifications {
    pub mod entity;
    pub mod port;
}

pub mod option_chain {
    pub mod entity;
    pub mod port;
}

pub mod pins {
    pub mod entity;
    pub mod port;
}

pub mod pockets {
    pub mod entity;
    pub mod port;
}

pub mod screeners {
    pub mod entity;
    pub mod port;
}

pub mod session {
    pub mod entity;
    pub mod port;
}

pub mod sip {
    pub mod entity;
    pub mod port;
}

pub mod technical {
    pub mod entity;
    pub mod port;
}

pub mod upi {
    pub mod entity;
    pub mod port;
}

pub mod user {
    pub mod entity;
    pub mod port;
}

pub mod warnings {
    pub mod entity;
    pub mod port;
}

pub mod watchlist {
    pub mod entity;
    pub mod port;
}

#[cfg(feature = "test-utils")]
pub mod testing;

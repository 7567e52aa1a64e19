use thiserror::Error;

/// 上游业务服务调用失败的原因
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("upstream transport failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("upstream response is not an envelope: {0}")]
    Decode(#[source] reqwest::Error),
}

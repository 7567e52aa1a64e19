use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub upstream: UpstreamConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// JWT 校验配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub jwt_secret: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            // 仅供本地开发，部署时必须由配置文件或 BOURSE__AUTH__JWT_SECRET 覆盖
            jwt_secret: "YOUR_SUPER_SECRET_KEY".to_string(),
        }
    }
}

/// # Summary
/// 业务服务 (Provider 实现方) 的地址与超时。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_ms: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9000".to_string(),
            timeout_ms: 5_000,
        }
    }
}

/// # Summary
/// 日志配置。
///
/// # Invariants
/// - `dir` 为 `None` 时只输出到标准输出，否则额外按天滚动写入该目录。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.jwt_secret, "YOUR_SUPER_SECRET_KEY");
        assert_eq!(config.upstream.timeout_ms, 5_000);
        assert_eq!(config.log.level, "info");
        assert!(config.log.dir.is_none());
    }

    #[test]
    fn test_partial_sections_fall_back_to_defaults() {
        let config: AppConfig =
            serde_json::from_str(r#"{"server":{"port":9090},"log":{"dir":"logs"}}"#).unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.log.dir.as_deref(), Some("logs"));
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9000");
    }
}

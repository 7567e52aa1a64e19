//! 请求守卫: 所有接口请求体共享的校验约定。
//!
//! 声明式的字段约束 (长度、格式) 交给 `validify` 的派生宏，
//! 枚举取值、正数、必填查询参数等业务前置检查则由 [`Guarded::check`] 完成。

use thiserror::Error;
use validify::Validate;

/// # Summary
/// 业务前置检查失败的原因。
///
/// # Invariants
/// - 除 `InvalidNameLength` 外，所有拒绝对外都映射为 `INVALID REQUEST`。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    #[error("name length must be within {min}..={max} characters")]
    InvalidNameLength { min: usize, max: usize },
}

/// # Summary
/// 进入 Provider 之前，每个请求类型必须回答的三个问题:
/// 属于哪个客户、业务上是否合法、日志里可以打印什么。
///
/// # Logic
/// 调度器依次执行: `validate()` → `check()` → (若 `client_id()` 为 `Some`) 客户鉴权。
pub trait Guarded: Validate {
    /// 需要与 Token 做归属比对的客户号；`None` 表示该接口不做客户鉴权。
    fn client_id(&self) -> Option<&str> {
        None
    }

    /// 业务前置检查 (枚举、正数、必填参数等)。
    fn check(&self) -> Result<(), Rejection> {
        Ok(())
    }

    /// 可安全写入日志的请求摘要，敏感字段必须已脱敏。
    fn summary(&self) -> Option<String> {
        None
    }
}

/// 取值必须属于给定枚举集合 (区分大小写)
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<(), Rejection> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!(
            "{field} must be one of {allowed:?}, got {value:?}"
        )))
    }
}

/// 浮点值必须为有限正数
pub fn positive(field: &str, value: f64) -> Result<(), Rejection> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!("{field} must be positive, got {value}")))
    }
}

/// 整数值必须为正
pub fn positive_int(field: &str, value: i64) -> Result<(), Rejection> {
    if value > 0 {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!("{field} must be positive, got {value}")))
    }
}

/// 文本必须非空 (忽略首尾空白)
pub fn required(field: &str, value: &str) -> Result<(), Rejection> {
    if value.trim().is_empty() {
        Err(Rejection::InvalidRequest(format!("{field} is required")))
    } else {
        Ok(())
    }
}

/// 集合元素个数必须落在 `min..=max`
pub fn count_within(field: &str, len: usize, min: usize, max: usize) -> Result<(), Rejection> {
    if (min..=max).contains(&len) {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!(
            "{field} must contain {min}..={max} items, got {len}"
        )))
    }
}

/// 文本必须恰好由 `len` 位 ASCII 数字组成
pub fn digits(field: &str, value: &str, len: usize) -> Result<(), Rejection> {
    if value.len() == len && value.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!("{field} must be {len} digits")))
    }
}

/// ISIN: 12 位大写字母数字，前两位为国家代码字母，末位为数字校验位
pub fn isin(field: &str, value: &str) -> Result<(), Rejection> {
    let bytes = value.as_bytes();
    let valid = bytes.len() == 12
        && bytes[..2].iter().all(u8::is_ascii_uppercase)
        && bytes[2..11]
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        && bytes[11].is_ascii_digit();
    if valid {
        Ok(())
    } else {
        Err(Rejection::InvalidRequest(format!("{field} is not a valid ISIN: {value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_of_is_case_sensitive() {
        assert!(one_of("segment", "EQUITY", &["EQUITY", "COMMODITY"]).is_ok());
        assert!(one_of("segment", "equity", &["EQUITY", "COMMODITY"]).is_err());
    }

    #[test]
    fn test_positive_rejects_zero_and_nan() {
        assert!(positive("price", 0.05).is_ok());
        assert!(positive("price", 0.0).is_err());
        assert!(positive("price", -1.0).is_err());
        assert!(positive("price", f64::NAN).is_err());
        assert!(positive("price", f64::INFINITY).is_err());
        assert!(positive_int("quantity", 1).is_ok());
        assert!(positive_int("quantity", 0).is_err());
    }

    #[test]
    fn test_required_ignores_whitespace() {
        assert!(required("clientId", "AB1234").is_ok());
        assert!(required("clientId", "  ").is_err());
    }

    #[test]
    fn test_count_within_bounds() {
        assert!(count_within("bids", 1, 1, 3).is_ok());
        assert!(count_within("bids", 3, 1, 3).is_ok());
        assert!(count_within("bids", 0, 1, 3).is_err());
        assert!(count_within("bids", 4, 1, 3).is_err());
    }

    #[test]
    fn test_digits() {
        assert!(digits("totp", "012345", 6).is_ok());
        assert!(digits("totp", "01234", 6).is_err());
        assert!(digits("totp", "01234a", 6).is_err());
    }

    #[test]
    fn test_isin_shape() {
        assert!(isin("isin", "INE002A01018").is_ok());
        assert!(isin("isin", "ine002a01018").is_err());
        assert!(isin("isin", "INE002A0101").is_err());
        assert!(isin("isin", "1NE002A01018").is_err());
        assert!(isin("isin", "INE002A0101X").is_err());
    }
}

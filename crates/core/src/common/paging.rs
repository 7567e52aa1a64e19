use chrono::{Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::guard::Rejection;

/// 缺省页码
pub const DEFAULT_PAGE: u32 = 1;
/// 缺省每页条数
pub const DEFAULT_PAGE_SIZE: u32 = 10;
/// 每页条数上限
pub const MAX_PAGE_SIZE: u32 = 100;
/// 未给出起始日期时向前回溯的天数
pub const DEFAULT_LOOKBACK_DAYS: i64 = 30;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// # Summary
/// 分页参数。来自查询字符串时采用宽松解析，任何非法值都回落为缺省值而非拒绝请求。
///
/// # Invariants
/// - `page >= 1`，`1 <= size <= MAX_PAGE_SIZE`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Pagination {
    pub page: u32,
    pub size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// # Summary
    /// 从原始查询参数解析分页。
    ///
    /// # Logic
    /// 1. 无法解析、缺失或小于 1 的页码回落为 1。
    /// 2. 无法解析、缺失或小于 1 的条数回落为 10，大于上限时截断为上限。
    pub fn parse(page: Option<&str>, size: Option<&str>) -> Self {
        let page = page
            .and_then(|p| p.trim().parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let size = size
            .and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|s| *s >= 1)
            .map_or(DEFAULT_PAGE_SIZE, |s| s.min(MAX_PAGE_SIZE));
        Self { page, size }
    }
}

/// # Summary
/// 闭区间日期范围，用于流水类查询。
///
/// # Invariants
/// - 通过 [`DateRange::parse`] 构造的范围已补全缺省值，但不保证 `from <= to`，
///   调用方需用 [`DateRange::ensure_ordered`] 做业务检查。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// # Summary
    /// 从 `YYYY-MM-DD` 文本解析日期范围。
    ///
    /// # Logic
    /// 1. `to` 缺失或非法时取 `today`。
    /// 2. `from` 缺失或非法时取 `to` 往前 30 天，越过日历下限时取 `NaiveDate::MIN`。
    pub fn parse(from: Option<&str>, to: Option<&str>, today: NaiveDate) -> Self {
        let to = to.and_then(parse_date).unwrap_or(today);
        let from = from.and_then(parse_date).unwrap_or_else(|| {
            to.checked_sub_signed(Duration::days(DEFAULT_LOOKBACK_DAYS))
                .unwrap_or(NaiveDate::MIN)
        });
        Self { from, to }
    }

    pub fn ensure_ordered(&self) -> Result<(), Rejection> {
        if self.from <= self.to {
            Ok(())
        } else {
            Err(Rejection::InvalidRequest(format!(
                "fromDate {} is after toDate {}",
                self.from, self.to
            )))
        }
    }
}

/// 当前 UTC 日期，查询类接口的缺省 "今天"
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// 解析 `YYYY-MM-DD`，失败返回 `None`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_unparsable_page_defaults_to_first() {
        assert_eq!(Pagination::parse(Some("abc"), Some("xyz")), Pagination { page: 1, size: 10 });
        assert_eq!(Pagination::parse(None, None), Pagination::default());
        assert_eq!(Pagination::parse(Some("0"), Some("-5")), Pagination { page: 1, size: 10 });
    }

    #[test]
    fn test_valid_page_is_kept_and_size_capped() {
        assert_eq!(Pagination::parse(Some("3"), Some("25")), Pagination { page: 3, size: 25 });
        assert_eq!(Pagination::parse(Some(" 2 "), Some("500")), Pagination { page: 2, size: 100 });
    }

    #[test]
    fn test_date_range_defaults() {
        let today = day(2026, 3, 31);
        let range = DateRange::parse(None, None, today);
        assert_eq!(range.to, today);
        assert_eq!(range.from, day(2026, 3, 1));

        let range = DateRange::parse(Some("garbage"), Some("2026-02-10"), today);
        assert_eq!(range.to, day(2026, 2, 10));
        assert_eq!(range.from, day(2026, 1, 11));
    }

    #[test]
    fn test_date_range_ordering() {
        let today = day(2026, 3, 31);
        let range = DateRange::parse(Some("2026-03-01"), Some("2026-03-15"), today);
        assert!(range.ensure_ordered().is_ok());

        let range = DateRange::parse(Some("2026-03-20"), Some("2026-03-15"), today);
        assert!(range.ensure_ordered().is_err());
    }

    #[test]
    fn test_date_range_at_calendar_limits() {
        let today = day(2026, 3, 31);
        let min = NaiveDate::MIN.to_string();
        let max = NaiveDate::MAX.to_string();

        let range = DateRange::parse(None, Some(&min), today);
        assert_eq!(range.from, NaiveDate::MIN);
        assert_eq!(range.to, NaiveDate::MIN);
        assert!(range.ensure_ordered().is_ok());

        let range = DateRange::parse(None, Some(&max), today);
        assert_eq!(range.to, NaiveDate::MAX);
        assert_eq!(range.from, NaiveDate::MAX - Duration::days(DEFAULT_LOOKBACK_DAYS));

        let range = DateRange::parse(Some(&max), Some(&min), today);
        assert!(range.ensure_ordered().is_err());

        let range = DateRange::parse(Some(&min), None, today);
        assert_eq!(range.from, NaiveDate::MIN);
        assert!(range.ensure_ordered().is_ok());
    }
}

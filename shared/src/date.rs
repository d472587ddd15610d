//! 时间解析模块
//!
//! 后端的 `created_at` 有两种形态：
//! - RFC 3339（带时区）
//! - 不带时区的 ISO 8601（按 UTC 处理），可能带微秒

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// 解析时间字符串为 UTC 时间
///
/// 返回 None 如果所有格式都无法解析
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|naive| naive.and_utc())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|naive| naive.and_utc())
        })
}

/// 格式化为订单表格中的日期（M/D/YYYY）
pub fn format_date(s: &str) -> Option<String> {
    parse_timestamp(s).map(|dt| dt.format("%-m/%-d/%Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_naive_with_micros() {
        let dt = parse_timestamp("2025-07-18T21:15:32.123456").unwrap();
        assert_eq!(dt.to_rfc3339(), "2025-07-18T21:15:32.123456+00:00");
    }

    #[test]
    fn test_parse_rfc3339_converts_to_utc() {
        let dt = parse_timestamp("2025-01-02T01:00:00+02:00").unwrap();
        assert_eq!(format_date(&dt.to_rfc3339()).unwrap(), "1/1/2025");
    }

    #[test]
    fn test_parse_date_only() {
        assert_eq!(format_date("2024-12-31").unwrap(), "12/31/2024");
    }

    #[test]
    fn test_parse_garbage() {
        assert!(parse_timestamp("").is_none());
        assert!(parse_timestamp("yesterday").is_none());
        assert!(format_date("not a date").is_none());
    }
}
